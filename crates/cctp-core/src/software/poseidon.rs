//! Poseidon sponge over the BN254 scalar field
//!
//! Width 3 (capacity 1, rate 2), x^5 S-box, 8 full and 57 partial rounds.
//! Round constants and the MDS matrix come from the Grain LFSR generator.

use std::fmt;
use std::sync::OnceLock;

use ark_bn254::Fr;
use ark_crypto_primitives::sponge::poseidon::{
    find_poseidon_ark_and_mds, PoseidonConfig, PoseidonSponge,
};
use ark_crypto_primitives::sponge::{CryptographicSponge, FieldBasedCryptographicSponge};
use ark_ff::PrimeField;

use super::SoftwareField;
use crate::errors::CctpErrorCode;
use crate::poseidon::PoseidonHash;

const RATE: usize = 2;
const CAPACITY: usize = 1;
const FULL_ROUNDS: usize = 8;
const PARTIAL_ROUNDS: usize = 57;
const ALPHA: u64 = 5;

fn config() -> &'static PoseidonConfig<Fr> {
    static CONFIG: OnceLock<PoseidonConfig<Fr>> = OnceLock::new();
    CONFIG.get_or_init(|| {
        let (ark, mds) = find_poseidon_ark_and_mds::<Fr>(
            u64::from(Fr::MODULUS_BIT_SIZE),
            RATE,
            FULL_ROUNDS as u64,
            PARTIAL_ROUNDS as u64,
            0,
        );
        PoseidonConfig::new(FULL_ROUNDS, PARTIAL_ROUNDS, ALPHA, mds, ark, RATE, CAPACITY)
    })
}

/// Hash two field elements with a fresh sponge
pub(crate) fn hash_two(lhs: &Fr, rhs: &Fr) -> Result<Fr, CctpErrorCode> {
    let mut digest = SoftwarePoseidon::new();
    digest.absorb(lhs);
    digest.absorb(rhs);
    digest.squeeze()
}

/// Incremental Poseidon digest of the software library
#[derive(Clone)]
pub struct SoftwarePoseidon {
    sponge: PoseidonSponge<Fr>,
    absorbed: usize,
}

impl SoftwarePoseidon {
    pub fn new() -> Self {
        Self {
            sponge: PoseidonSponge::new(config()),
            absorbed: 0,
        }
    }

    fn absorb(&mut self, input: &Fr) {
        self.sponge.absorb(input);
        self.absorbed += 1;
    }

    fn squeeze(mut self) -> Result<Fr, CctpErrorCode> {
        self.sponge
            .squeeze_native_field_elements(1)
            .pop()
            .ok_or(CctpErrorCode::HashingError)
    }
}

impl Default for SoftwarePoseidon {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for SoftwarePoseidon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SoftwarePoseidon")
            .field("absorbed", &self.absorbed)
            .finish_non_exhaustive()
    }
}

impl PoseidonHash for SoftwarePoseidon {
    type Field = SoftwareField;

    fn update(&mut self, input: &SoftwareField) {
        self.absorb(&input.0);
    }

    fn finalize(self) -> Result<SoftwareField, CctpErrorCode> {
        self.squeeze().map(SoftwareField)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_shape() {
        let config = config();
        assert_eq!(config.rate + config.capacity, 3);
        assert_eq!(config.mds.len(), 3);
        assert_eq!(config.ark.len(), FULL_ROUNDS + PARTIAL_ROUNDS);
        assert!(config.ark.iter().all(|round| round.len() == 3));
    }

    #[test]
    fn test_hash_two_is_order_sensitive() {
        let a = Fr::from(1u64);
        let b = Fr::from(2u64);
        assert_eq!(hash_two(&a, &b), hash_two(&a, &b));
        assert_ne!(hash_two(&a, &b).unwrap(), hash_two(&b, &a).unwrap());
    }

    #[test]
    fn test_incremental_matches_hash_two() {
        let a = Fr::from(10u64);
        let b = Fr::from(20u64);
        let mut digest = SoftwarePoseidon::new();
        digest.update(&SoftwareField(a));
        digest.update(&SoftwareField(b));
        assert_eq!(digest.finalize().unwrap().0, hash_two(&a, &b).unwrap());
    }

    #[test]
    fn test_debug_reports_absorbed() {
        let mut digest = SoftwarePoseidon::new();
        digest.update(&SoftwareField(Fr::from(3u64)));
        assert!(format!("{digest:?}").contains("absorbed: 1"));
    }
}
