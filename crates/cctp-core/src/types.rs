//! Shared behaviour of fixed-size CCTP byte objects
//!
//! Field elements, proofs and verification keys are byte buffers whose
//! length is either 0 (null) or exactly the object's compiled size.

/// Byte buffer of a fixed size with a distinguished null state
pub trait SizedByteObject {
    /// Serialized size in bytes of a non-null object
    const BYTE_SIZE: usize;

    /// Raw bytes, empty when null
    fn byte_array(&self) -> &[u8];

    /// Reset to the null state
    fn set_null(&mut self);

    fn is_null(&self) -> bool {
        self.byte_array().is_empty()
    }

    /// Raw bytes, `None` when null
    fn data_buffer(&self) -> Option<&[u8]> {
        if self.is_null() {
            None
        } else {
            Some(self.byte_array())
        }
    }

    fn data_size(&self) -> usize {
        self.byte_array().len()
    }

    /// Lowercase hex, two characters per byte in buffer order
    fn hex_repr(&self) -> String {
        hex::encode(self.byte_array())
    }

    fn bit_size() -> usize
    where
        Self: Sized,
    {
        Self::BYTE_SIZE * 8
    }
}

/// Implements [`SizedByteObject`], `Debug` and the checked byte setters for a
/// struct holding its buffer in a `bytes: Vec<u8>` field.
macro_rules! sized_byte_object {
    ($name:ident, $size:expr, $label:literal) => {
        impl $crate::types::SizedByteObject for $name {
            const BYTE_SIZE: usize = $size;

            fn byte_array(&self) -> &[u8] {
                &self.bytes
            }

            fn set_null(&mut self) {
                self.bytes.clear();
            }
        }

        impl $name {
            /// Build from exactly `BYTE_SIZE` bytes.
            ///
            /// # Panics
            /// If `bytes` has any other length. Use `try_from_bytes` for
            /// externally controlled input.
            pub fn from_bytes(bytes: Vec<u8>) -> Self {
                assert_eq!(
                    bytes.len(),
                    $size,
                    concat!($label, " byte array has wrong size")
                );
                Self { bytes }
            }

            /// Build from a slice, rejecting any length other than `BYTE_SIZE`
            pub fn try_from_bytes(bytes: &[u8]) -> Result<Self, $crate::errors::CctpError> {
                if bytes.len() != $size {
                    return Err($crate::errors::CctpError::InvalidSize {
                        object: $label,
                        expected: $size,
                        actual: bytes.len(),
                    });
                }
                Ok(Self {
                    bytes: bytes.to_vec(),
                })
            }

            /// Replace the content with exactly `BYTE_SIZE` bytes.
            ///
            /// # Panics
            /// If `bytes` has any other length.
            pub fn set_byte_array(&mut self, bytes: Vec<u8>) {
                assert_eq!(
                    bytes.len(),
                    $size,
                    concat!($label, " byte array has wrong size")
                );
                self.bytes = bytes;
            }
        }

        impl TryFrom<&[u8]> for $name {
            type Error = $crate::errors::CctpError;

            fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
                Self::try_from_bytes(bytes)
            }
        }

        impl core::fmt::Debug for $name {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                use $crate::types::SizedByteObject;
                if self.is_null() {
                    write!(f, concat!(stringify!($name), "(null)"))
                } else {
                    write!(f, concat!(stringify!($name), "({})"), self.hex_repr())
                }
            }
        }
    };
}

pub(crate) use sized_byte_object;
