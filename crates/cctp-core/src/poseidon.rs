//! Incremental Poseidon hashing over native field handles

use crate::constants::POSEIDON_HASH_ARITY;
use crate::errors::CctpErrorCode;
use crate::library::CctpLibrary;

/// Native incremental Poseidon digest
///
/// Implemented by each CCTP library binding. Finalizing before
/// `POSEIDON_HASH_ARITY` updates is left to the library.
pub trait PoseidonHash {
    type Field;

    fn update(&mut self, input: &Self::Field);

    fn finalize(self) -> Result<Self::Field, CctpErrorCode>;
}

/// Poseidon hasher with a fixed arity
///
/// create -> `update` exactly `POSEIDON_HASH_ARITY` times -> `finalize`.
pub struct PoseidonHasher<H: PoseidonHash> {
    digest: H,
    absorbed: usize,
}

impl<H: PoseidonHash> PoseidonHasher<H> {
    /// Create a fresh digest from the library
    pub fn new<L>(lib: &L) -> Self
    where
        L: CctpLibrary<PoseidonHash = H> + ?Sized,
    {
        Self {
            digest: lib.poseidon_hash(),
            absorbed: 0,
        }
    }

    pub fn update(&mut self, input: &H::Field) {
        debug_assert!(
            self.absorbed < POSEIDON_HASH_ARITY,
            "poseidon hasher fed more than its arity"
        );
        self.digest.update(input);
        self.absorbed += 1;
    }

    /// Number of inputs absorbed so far
    pub fn absorbed(&self) -> usize {
        self.absorbed
    }

    pub fn finalize(self) -> Result<H::Field, CctpErrorCode> {
        debug_assert_eq!(
            self.absorbed, POSEIDON_HASH_ARITY,
            "poseidon hasher finalized before absorbing its arity"
        );
        self.digest.finalize()
    }
}

#[cfg(all(test, feature = "software"))]
mod tests {
    use super::*;
    use crate::constants::SC_FIELD_SIZE;
    use crate::software::SoftwareLibrary;
    use crate::FieldElement;

    #[test]
    fn test_absorbed_tracks_updates() {
        let lib = SoftwareLibrary::new();
        let one = FieldElement::from_bytes({
            let mut bytes = vec![0u8; SC_FIELD_SIZE];
            bytes[31] = 1;
            bytes
        });
        let native = one.get_field_element(&lib).unwrap();

        let mut hasher = PoseidonHasher::new(&lib);
        assert_eq!(hasher.absorbed(), 0);
        hasher.update(&native);
        hasher.update(&native);
        assert_eq!(hasher.absorbed(), POSEIDON_HASH_ARITY);

        let digest = hasher.finalize().unwrap();
        let expected = FieldElement::compute_hash(&lib, &one, &one).unwrap();
        assert_eq!(FieldElement::from_native(&lib, Some(&digest)), expected);
    }
}
