//! Byte-level properties of sized objects

use proptest::prelude::*;
use sc_cctp_core::constants::{SC_FIELD_SIZE, SC_PROOF_SIZE, SC_VK_SIZE};
use sc_cctp_core::{CctpError, FieldElement, ScProof, ScVKey, SizedByteObject, SoftwareLibrary};

#[test]
fn test_sizes() {
    assert_eq!(FieldElement::BYTE_SIZE, SC_FIELD_SIZE);
    assert_eq!(FieldElement::bit_size(), SC_FIELD_SIZE * 8);
    assert_eq!(ScProof::BYTE_SIZE, SC_PROOF_SIZE);
    assert_eq!(ScVKey::BYTE_SIZE, SC_VK_SIZE);
}

#[test]
fn test_hash_chain() {
    let lib = SoftwareLibrary::new();
    let mut acc = FieldElement::phantom_hash().clone();
    for i in 1..=4u8 {
        let mut bytes = [0u8; SC_FIELD_SIZE];
        bytes[SC_FIELD_SIZE - 1] = i;
        let leaf = FieldElement::try_from_bytes(&bytes).unwrap();
        acc = FieldElement::compute_hash(&lib, &acc, &leaf).unwrap();
        assert!(acc.is_valid(&lib));
    }
    assert_ne!(&acc, FieldElement::phantom_hash());
}

#[test]
fn test_null_operand_hash_error() {
    let lib = SoftwareLibrary::new();
    let null = FieldElement::default();
    assert_eq!(
        FieldElement::compute_hash(&lib, &null, &null),
        Err(CctpError::NullFieldElementHash)
    );
}

proptest! {
    #[test]
    fn prop_bytes_roundtrip(bytes in prop::collection::vec(any::<u8>(), SC_FIELD_SIZE)) {
        let fe = FieldElement::from_bytes(bytes.clone());
        prop_assert_eq!(fe.byte_array(), bytes.as_slice());
        prop_assert_eq!(fe.hex_repr(), hex::encode(&bytes));
    }

    #[test]
    fn prop_valid_iff_reserializes(bytes in prop::collection::vec(any::<u8>(), SC_FIELD_SIZE)) {
        let lib = SoftwareLibrary::new();
        let fe = FieldElement::from_bytes(bytes);
        if let Some(handle) = fe.get_field_element(&lib) {
            prop_assert_eq!(FieldElement::from_native(&lib, Some(&handle)), fe);
        }
    }

    #[test]
    fn prop_wrong_size_rejected(len in 0usize..100) {
        prop_assume!(len != SC_FIELD_SIZE);
        prop_assert!(FieldElement::try_from_bytes(&vec![0u8; len]).is_err());
    }
}
