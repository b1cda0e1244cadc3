//! Sidechain SNARK proofs
//!
//! Proof bytes are opaque; the library's deserializer is the only structural check.

use crate::constants::SC_PROOF_SIZE;
use crate::library::CctpLibrary;
use crate::types::sized_byte_object;

/// Serialized proof, `SC_PROOF_SIZE` bytes or null
#[derive(Clone, Default, PartialEq, Eq, Hash)]
pub struct ScProof {
    bytes: Vec<u8>,
}

sized_byte_object!(ScProof, SC_PROOF_SIZE, "proof");

impl ScProof {
    /// Deserialize into a fresh native handle, `None` when null or malformed
    pub fn get_proof_ptr<L: CctpLibrary + ?Sized>(&self, lib: &L) -> Option<L::Proof> {
        if self.bytes.is_empty() {
            return None;
        }
        lib.deserialize_sc_proof(&self.bytes)
    }

    pub fn is_valid<L: CctpLibrary + ?Sized>(&self, lib: &L) -> bool {
        self.get_proof_ptr(lib).is_some()
    }
}

#[cfg(all(test, feature = "software"))]
mod tests {
    use super::*;
    use crate::software::SoftwareLibrary;
    use crate::types::SizedByteObject;

    fn words(fill: u8) -> Vec<u8> {
        let mut bytes = vec![0u8; SC_PROOF_SIZE];
        for word in bytes.chunks_mut(32) {
            word[0] = fill;
        }
        bytes
    }

    #[test]
    fn test_null_proof_is_invalid() {
        let proof = ScProof::default();
        assert!(proof.is_null());
        assert!(!proof.is_valid(&SoftwareLibrary::new()));
    }

    #[test]
    fn test_well_formed_proof() {
        let proof = ScProof::from_bytes(words(7));
        assert_eq!(proof.data_size(), SC_PROOF_SIZE);
        assert!(proof.is_valid(&SoftwareLibrary::new()));
    }

    #[test]
    fn test_non_canonical_word_rejected() {
        let mut bytes = words(7);
        bytes[32..64].fill(0xff);
        let proof = ScProof::from_bytes(bytes);
        assert!(!proof.is_valid(&SoftwareLibrary::new()));
    }

    #[test]
    fn test_all_zero_proof_rejected() {
        let proof = ScProof::from_bytes(vec![0u8; SC_PROOF_SIZE]);
        assert!(!proof.is_valid(&SoftwareLibrary::new()));
    }

    #[test]
    fn test_try_from_wrong_size() {
        assert!(ScProof::try_from(&[0u8; 100][..]).is_err());
    }
}
