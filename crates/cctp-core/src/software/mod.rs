//! Pure-Rust CCTP library over the BN254 scalar field
//!
//! Used for development, tooling and tests. It follows the native library's
//! contract (sizes, null-on-failure deserialization, Poseidon, bit-vector
//! Merkle roots) but not its curve, so its outputs are not consensus values.

pub mod bit_vector;
pub mod poseidon;

use ark_bn254::Fr;
use ark_ff::{BigInt, PrimeField};

use crate::constants::{
    SC_BV_SIZE_IN_BYTES, SC_CUSTOM_DATA_MAX_SIZE, SC_FIELD_SIZE, SC_PROOF_SIZE, SC_VK_SIZE,
};
use crate::errors::CctpErrorCode;
use crate::library::CctpLibrary;

pub use bit_vector::CompressionAlgorithm;
pub use poseidon::SoftwarePoseidon;

/// Deserialized field element
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SoftwareField(pub(crate) Fr);

impl SoftwareField {
    pub fn value(&self) -> &Fr {
        &self.0
    }
}

/// Deserialized proof: a sequence of canonical field words
#[derive(Debug, PartialEq, Eq)]
pub struct SoftwareProof {
    words: Vec<Fr>,
}

impl SoftwareProof {
    pub fn words(&self) -> &[Fr] {
        &self.words
    }
}

/// Deserialized verification key: a sequence of canonical field words
#[derive(Debug, PartialEq, Eq)]
pub struct SoftwareVerificationKey {
    words: Vec<Fr>,
}

impl SoftwareVerificationKey {
    pub fn words(&self) -> &[Fr] {
        &self.words
    }
}

/// Parse 32 big-endian bytes, `None` unless the value is below r
pub(crate) fn fr_from_be_bytes(bytes: &[u8; SC_FIELD_SIZE]) -> Option<Fr> {
    let mut limbs = [0u64; 4];
    for (limb, chunk) in limbs.iter_mut().zip(bytes.rchunks_exact(8)) {
        *limb = u64::from_be_bytes(chunk.try_into().ok()?);
    }
    Fr::from_bigint(BigInt::new(limbs))
}

pub(crate) fn fr_to_be_bytes(value: &Fr) -> [u8; SC_FIELD_SIZE] {
    let mut bytes = [0u8; SC_FIELD_SIZE];
    for (chunk, limb) in bytes.rchunks_exact_mut(8).zip(value.into_bigint().0) {
        chunk.copy_from_slice(&limb.to_be_bytes());
    }
    bytes
}

/// Split `bytes` into canonical 32-byte words.
/// Rejects wrong lengths, non-canonical words and all-zero buffers.
fn parse_words(bytes: &[u8], expected_len: usize) -> Option<Vec<Fr>> {
    if bytes.len() != expected_len || bytes.iter().all(|b| *b == 0) {
        return None;
    }

    bytes
        .chunks_exact(SC_FIELD_SIZE)
        .map(|chunk| fr_from_be_bytes(chunk.try_into().ok()?))
        .collect()
}

/// Software implementation of [`CctpLibrary`]
#[derive(Debug, Clone, Copy, Default)]
pub struct SoftwareLibrary;

impl SoftwareLibrary {
    pub fn new() -> Self {
        Self
    }
}

impl CctpLibrary for SoftwareLibrary {
    type Field = SoftwareField;
    type Proof = SoftwareProof;
    type VerificationKey = SoftwareVerificationKey;
    type PoseidonHash = SoftwarePoseidon;

    fn field_size_in_bytes(&self) -> usize {
        SC_FIELD_SIZE
    }

    fn sc_proof_size_in_bytes(&self) -> usize {
        SC_PROOF_SIZE
    }

    fn sc_vk_size_in_bytes(&self) -> usize {
        SC_VK_SIZE
    }

    fn sc_bit_vector_size_in_bytes(&self) -> usize {
        SC_BV_SIZE_IN_BYTES
    }

    fn sc_custom_data_size_in_bytes(&self) -> usize {
        SC_CUSTOM_DATA_MAX_SIZE
    }

    fn serialize_field(&self, field: &SoftwareField) -> [u8; SC_FIELD_SIZE] {
        fr_to_be_bytes(&field.0)
    }

    fn deserialize_field(&self, bytes: &[u8; SC_FIELD_SIZE]) -> Option<SoftwareField> {
        fr_from_be_bytes(bytes).map(SoftwareField)
    }

    fn deserialize_sc_proof(&self, bytes: &[u8]) -> Option<SoftwareProof> {
        parse_words(bytes, SC_PROOF_SIZE).map(|words| SoftwareProof { words })
    }

    fn deserialize_sc_vk(&self, bytes: &[u8]) -> Option<SoftwareVerificationKey> {
        parse_words(bytes, SC_VK_SIZE).map(|words| SoftwareVerificationKey { words })
    }

    fn merkle_root_from_compressed_bytes(
        &self,
        compressed: &[u8],
        expected_uncompressed_size: usize,
    ) -> Result<SoftwareField, CctpErrorCode> {
        bit_vector::merkle_root_from_compressed_bytes(compressed, expected_uncompressed_size)
            .map(SoftwareField)
    }

    fn poseidon_hash(&self) -> SoftwarePoseidon {
        SoftwarePoseidon::new()
    }
}
