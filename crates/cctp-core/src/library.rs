//! Boundary to the CCTP proof-system library
//!
//! All cryptographic decisions (canonical field encodings, proof and key
//! structure, Poseidon, bit-vector Merkle roots) are delegated to an
//! implementation of [`CctpLibrary`]. Handles returned by the library are
//! owned values; dropping one releases the underlying resource.

use crate::constants::{
    SC_BV_SIZE_IN_BYTES, SC_CUSTOM_DATA_MAX_SIZE, SC_FIELD_SIZE, SC_PROOF_SIZE, SC_VK_SIZE,
};
use crate::errors::{CctpErrorCode, LibraryError};
use crate::poseidon::PoseidonHash;

/// Functions consumed from the CCTP library
pub trait CctpLibrary {
    /// Owned deserialized field element
    type Field;
    /// Owned deserialized proof
    type Proof;
    /// Owned deserialized verification key
    type VerificationKey;
    /// Incremental Poseidon digest producing `Self::Field`
    type PoseidonHash: PoseidonHash<Field = Self::Field>;

    fn field_size_in_bytes(&self) -> usize;
    fn sc_proof_size_in_bytes(&self) -> usize;
    fn sc_vk_size_in_bytes(&self) -> usize;
    fn sc_bit_vector_size_in_bytes(&self) -> usize;
    fn sc_custom_data_size_in_bytes(&self) -> usize;

    fn serialize_field(&self, field: &Self::Field) -> [u8; SC_FIELD_SIZE];

    /// `None` if `bytes` is not a canonical field element
    fn deserialize_field(&self, bytes: &[u8; SC_FIELD_SIZE]) -> Option<Self::Field>;

    /// `None` if `bytes` is not a well-formed proof
    fn deserialize_sc_proof(&self, bytes: &[u8]) -> Option<Self::Proof>;

    /// `None` if `bytes` is not a well-formed verification key
    fn deserialize_sc_vk(&self, bytes: &[u8]) -> Option<Self::VerificationKey>;

    /// Decompress `compressed`, check it expands to `expected_uncompressed_size`
    /// bytes and return the root of the Merkle tree built over the bit vector.
    fn merkle_root_from_compressed_bytes(
        &self,
        compressed: &[u8],
        expected_uncompressed_size: usize,
    ) -> Result<Self::Field, CctpErrorCode>;

    fn poseidon_hash(&self) -> Self::PoseidonHash;
}

impl<L: CctpLibrary + ?Sized> CctpLibrary for &L {
    type Field = L::Field;
    type Proof = L::Proof;
    type VerificationKey = L::VerificationKey;
    type PoseidonHash = L::PoseidonHash;

    fn field_size_in_bytes(&self) -> usize {
        (**self).field_size_in_bytes()
    }

    fn sc_proof_size_in_bytes(&self) -> usize {
        (**self).sc_proof_size_in_bytes()
    }

    fn sc_vk_size_in_bytes(&self) -> usize {
        (**self).sc_vk_size_in_bytes()
    }

    fn sc_bit_vector_size_in_bytes(&self) -> usize {
        (**self).sc_bit_vector_size_in_bytes()
    }

    fn sc_custom_data_size_in_bytes(&self) -> usize {
        (**self).sc_custom_data_size_in_bytes()
    }

    fn serialize_field(&self, field: &Self::Field) -> [u8; SC_FIELD_SIZE] {
        (**self).serialize_field(field)
    }

    fn deserialize_field(&self, bytes: &[u8; SC_FIELD_SIZE]) -> Option<Self::Field> {
        (**self).deserialize_field(bytes)
    }

    fn deserialize_sc_proof(&self, bytes: &[u8]) -> Option<Self::Proof> {
        (**self).deserialize_sc_proof(bytes)
    }

    fn deserialize_sc_vk(&self, bytes: &[u8]) -> Option<Self::VerificationKey> {
        (**self).deserialize_sc_vk(bytes)
    }

    fn merkle_root_from_compressed_bytes(
        &self,
        compressed: &[u8],
        expected_uncompressed_size: usize,
    ) -> Result<Self::Field, CctpErrorCode> {
        (**self).merkle_root_from_compressed_bytes(compressed, expected_uncompressed_size)
    }

    fn poseidon_hash(&self) -> Self::PoseidonHash {
        (**self).poseidon_hash()
    }
}

/// Startup self-test of the library boundary
pub struct LibraryChecker;

impl LibraryChecker {
    /// Compare every compiled size constant with the library's report
    pub fn check_type_sizes<L: CctpLibrary + ?Sized>(lib: &L) -> Result<(), LibraryError> {
        let checks = [
            ("field element", SC_FIELD_SIZE, lib.field_size_in_bytes()),
            ("vk", SC_VK_SIZE, lib.sc_vk_size_in_bytes()),
            ("proof", SC_PROOF_SIZE, lib.sc_proof_size_in_bytes()),
            ("bit vector", SC_BV_SIZE_IN_BYTES, lib.sc_bit_vector_size_in_bytes()),
            ("custom data", SC_CUSTOM_DATA_MAX_SIZE, lib.sc_custom_data_size_in_bytes()),
        ];

        for (object, compiled, library) in checks {
            if compiled != library {
                log::error!(
                    "unexpected CCTP {} size: {} (library returns {})",
                    object,
                    compiled,
                    library
                );
                return Err(LibraryError::SizeMismatch {
                    object,
                    compiled,
                    library,
                });
            }
        }

        Ok(())
    }

    /// Like [`check_type_sizes`](Self::check_type_sizes) but a mismatch is fatal.
    ///
    /// # Panics
    /// On any size mismatch.
    pub fn enforce_type_sizes<L: CctpLibrary + ?Sized>(lib: &L) {
        if let Err(e) = Self::check_type_sizes(lib) {
            panic!("size mismatch between CCTP library and compiled constants: {e}");
        }
    }
}

/// A library whose reported sizes have been checked against the compiled constants
///
/// The only constructor runs [`LibraryChecker::check_type_sizes`], so code
/// holding a `CheckedLibrary` never validates data against a mis-sized library.
#[derive(Debug, Clone)]
pub struct CheckedLibrary<L> {
    inner: L,
}

impl<L: CctpLibrary> CheckedLibrary<L> {
    pub fn new(inner: L) -> Result<Self, LibraryError> {
        LibraryChecker::check_type_sizes(&inner)?;
        log::info!("CCTP library sizes verified");
        Ok(Self { inner })
    }

    pub fn inner(&self) -> &L {
        &self.inner
    }

    pub fn into_inner(self) -> L {
        self.inner
    }
}

impl<L: CctpLibrary> CctpLibrary for CheckedLibrary<L> {
    type Field = L::Field;
    type Proof = L::Proof;
    type VerificationKey = L::VerificationKey;
    type PoseidonHash = L::PoseidonHash;

    fn field_size_in_bytes(&self) -> usize {
        self.inner.field_size_in_bytes()
    }

    fn sc_proof_size_in_bytes(&self) -> usize {
        self.inner.sc_proof_size_in_bytes()
    }

    fn sc_vk_size_in_bytes(&self) -> usize {
        self.inner.sc_vk_size_in_bytes()
    }

    fn sc_bit_vector_size_in_bytes(&self) -> usize {
        self.inner.sc_bit_vector_size_in_bytes()
    }

    fn sc_custom_data_size_in_bytes(&self) -> usize {
        self.inner.sc_custom_data_size_in_bytes()
    }

    fn serialize_field(&self, field: &Self::Field) -> [u8; SC_FIELD_SIZE] {
        self.inner.serialize_field(field)
    }

    fn deserialize_field(&self, bytes: &[u8; SC_FIELD_SIZE]) -> Option<Self::Field> {
        self.inner.deserialize_field(bytes)
    }

    fn deserialize_sc_proof(&self, bytes: &[u8]) -> Option<Self::Proof> {
        self.inner.deserialize_sc_proof(bytes)
    }

    fn deserialize_sc_vk(&self, bytes: &[u8]) -> Option<Self::VerificationKey> {
        self.inner.deserialize_sc_vk(bytes)
    }

    fn merkle_root_from_compressed_bytes(
        &self,
        compressed: &[u8],
        expected_uncompressed_size: usize,
    ) -> Result<Self::Field, CctpErrorCode> {
        self.inner
            .merkle_root_from_compressed_bytes(compressed, expected_uncompressed_size)
    }

    fn poseidon_hash(&self) -> Self::PoseidonHash {
        self.inner.poseidon_hash()
    }
}
