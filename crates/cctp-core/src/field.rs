//! Scalar field elements of the sidechain proof system
//!
//! A `FieldElement` stores the library's serialized form. Validity is decided
//! by the library: the bytes are valid iff they deserialize.

use std::sync::OnceLock;

use crate::constants::SC_FIELD_SIZE;
use crate::errors::CctpError;
use crate::library::CctpLibrary;
use crate::poseidon::PoseidonHasher;
use crate::types::{sized_byte_object, SizedByteObject};

/// Size of the legacy 256-bit hashes embedded in field elements
pub const LEGACY_HASH_SIZE: usize = 32;

const _: () = assert!(LEGACY_HASH_SIZE <= SC_FIELD_SIZE);

/// Serialized scalar field element, `SC_FIELD_SIZE` bytes or null
#[derive(Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FieldElement {
    bytes: Vec<u8>,
}

sized_byte_object!(FieldElement, SC_FIELD_SIZE, "field element");

impl FieldElement {
    /// Embed a 256-bit hash: hash bytes first, zero padded to `SC_FIELD_SIZE`
    pub fn from_uint256(value: &[u8; LEGACY_HASH_SIZE]) -> Self {
        let mut bytes = vec![0u8; SC_FIELD_SIZE];
        bytes[..LEGACY_HASH_SIZE].copy_from_slice(value);
        Self { bytes }
    }

    /// Serialize a native handle.
    ///
    /// A missing handle gives the all-zero element, which is not null.
    pub fn from_native<L: CctpLibrary + ?Sized>(lib: &L, field: Option<&L::Field>) -> Self {
        let bytes = match field {
            Some(field) => lib.serialize_field(field).to_vec(),
            None => vec![0u8; SC_FIELD_SIZE],
        };
        Self { bytes }
    }

    /// Deserialize into a fresh native handle.
    ///
    /// Returns `None` when null or when the library rejects the bytes.
    pub fn get_field_element<L: CctpLibrary + ?Sized>(&self, lib: &L) -> Option<L::Field> {
        let bytes: &[u8; SC_FIELD_SIZE] = self.bytes.as_slice().try_into().ok()?;
        lib.deserialize_field(bytes)
    }

    pub fn is_valid<L: CctpLibrary + ?Sized>(&self, lib: &L) -> bool {
        self.get_field_element(lib).is_some()
    }

    /// The leading 256 bits, inverse of [`from_uint256`](Self::from_uint256)
    pub fn legacy_hash(&self) -> Option<[u8; LEGACY_HASH_SIZE]> {
        self.bytes
            .get(..LEGACY_HASH_SIZE)
            .and_then(|prefix| prefix.try_into().ok())
    }

    /// Poseidon hash of `lhs` then `rhs`
    pub fn compute_hash<L: CctpLibrary + ?Sized>(
        lib: &L,
        lhs: &FieldElement,
        rhs: &FieldElement,
    ) -> Result<FieldElement, CctpError> {
        let (Some(lhs_field), Some(rhs_field)) =
            (lhs.get_field_element(lib), rhs.get_field_element(lib))
        else {
            return Err(CctpError::NullFieldElementHash);
        };

        let mut hasher = PoseidonHasher::new(lib);
        hasher.update(&lhs_field);
        hasher.update(&rhs_field);
        let digest = hasher.finalize()?;

        Ok(FieldElement::from_native(lib, Some(&digest)))
    }

    /// Constant whose preimage is unknown: the all-zero field element
    pub fn phantom_hash() -> &'static FieldElement {
        static PHANTOM_HASH: OnceLock<FieldElement> = OnceLock::new();
        PHANTOM_HASH.get_or_init(|| FieldElement::from_bytes(vec![0u8; SC_FIELD_SIZE]))
    }
}

impl core::fmt::Display for FieldElement {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.hex_repr())
    }
}

#[cfg(all(test, feature = "software"))]
mod tests {
    use super::*;
    use crate::software::SoftwareLibrary;

    fn fe(low: u8) -> FieldElement {
        let mut bytes = vec![0u8; SC_FIELD_SIZE];
        bytes[SC_FIELD_SIZE - 1] = low;
        FieldElement::from_bytes(bytes)
    }

    #[test]
    fn test_default_is_null() {
        let f = FieldElement::default();
        assert!(f.is_null());
        assert!(f.data_buffer().is_none());
        assert_eq!(f.data_size(), 0);
        assert_eq!(f.hex_repr(), "");
        assert!(!f.is_valid(&SoftwareLibrary::new()));
    }

    #[test]
    fn test_hex_repr() {
        let f = fe(0xab);
        let hex = f.hex_repr();
        assert_eq!(hex.len(), SC_FIELD_SIZE * 2);
        assert!(hex.ends_with("00ab"));
    }

    #[test]
    #[should_panic(expected = "wrong size")]
    fn test_from_bytes_wrong_size_panics() {
        let _ = FieldElement::from_bytes(vec![0u8; SC_FIELD_SIZE - 1]);
    }

    #[test]
    fn test_try_from_bytes_wrong_size() {
        assert_eq!(
            FieldElement::try_from_bytes(&[1, 2, 3]),
            Err(CctpError::InvalidSize {
                object: "field element",
                expected: SC_FIELD_SIZE,
                actual: 3
            })
        );
    }

    #[test]
    fn test_set_null() {
        let mut f = fe(1);
        assert!(!f.is_null());
        f.set_null();
        assert!(f.is_null());
    }

    #[test]
    fn test_from_uint256_prefix() {
        let mut hash = [0u8; LEGACY_HASH_SIZE];
        hash[0] = 0x11;
        hash[31] = 0x22;
        let f = FieldElement::from_uint256(&hash);
        assert_eq!(f.data_size(), SC_FIELD_SIZE);
        assert_eq!(&f.byte_array()[..LEGACY_HASH_SIZE], &hash);
        assert_eq!(f.legacy_hash(), Some(hash));
        assert_eq!(FieldElement::default().legacy_hash(), None);
    }

    #[test]
    fn test_from_native_none_is_zero_not_null() {
        let lib = SoftwareLibrary::new();
        let f = FieldElement::from_native(&lib, None);
        assert!(!f.is_null());
        assert_eq!(f.byte_array(), &[0u8; SC_FIELD_SIZE]);
    }

    #[test]
    fn test_reserialize_is_identity() {
        let lib = SoftwareLibrary::new();
        let f = fe(42);
        let handle = f.get_field_element(&lib).unwrap();
        assert_eq!(FieldElement::from_native(&lib, Some(&handle)), f);
    }

    #[test]
    fn test_non_canonical_is_invalid() {
        let lib = SoftwareLibrary::new();
        let f = FieldElement::from_bytes(vec![0xff; SC_FIELD_SIZE]);
        assert!(!f.is_valid(&lib));
    }

    #[test]
    fn test_compute_hash_deterministic_and_ordered() {
        let lib = SoftwareLibrary::new();
        let a = fe(1);
        let b = fe(2);
        let ab = FieldElement::compute_hash(&lib, &a, &b).unwrap();
        assert_eq!(ab, FieldElement::compute_hash(&lib, &a, &b).unwrap());
        assert!(ab.is_valid(&lib));
        assert_ne!(ab, FieldElement::compute_hash(&lib, &b, &a).unwrap());
    }

    #[test]
    fn test_compute_hash_rejects_invalid_operand() {
        let lib = SoftwareLibrary::new();
        let bad = FieldElement::from_bytes(vec![0xff; SC_FIELD_SIZE]);
        assert_eq!(
            FieldElement::compute_hash(&lib, &fe(1), &bad),
            Err(CctpError::NullFieldElementHash)
        );
        assert_eq!(
            FieldElement::compute_hash(&lib, &FieldElement::default(), &fe(1)),
            Err(CctpError::NullFieldElementHash)
        );
    }

    #[test]
    fn test_phantom_hash_constant() {
        let first = FieldElement::phantom_hash();
        let second = FieldElement::phantom_hash();
        assert!(core::ptr::eq(first, second));
        assert_eq!(first.byte_array(), &[0u8; SC_FIELD_SIZE]);
        assert!(first.is_valid(&SoftwareLibrary::new()));
    }
}
