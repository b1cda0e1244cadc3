//! Test libraries wrapping the software backend

#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};

use sc_cctp_core::constants::{SC_BV_SIZE_IN_BYTES, SC_FIELD_SIZE};
use sc_cctp_core::software::{
    SoftwareField, SoftwarePoseidon, SoftwareProof, SoftwareVerificationKey,
};
use sc_cctp_core::{CctpErrorCode, CctpLibrary, SoftwareLibrary};

/// Software library that counts the calls certificate validation makes
#[derive(Debug, Default)]
pub struct CountingLibrary {
    inner: SoftwareLibrary,
    field_deserializations: AtomicUsize,
    merkle_roots: AtomicUsize,
}

impl CountingLibrary {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn field_deserializations(&self) -> usize {
        self.field_deserializations.load(Ordering::SeqCst)
    }

    pub fn merkle_roots(&self) -> usize {
        self.merkle_roots.load(Ordering::SeqCst)
    }
}

impl CctpLibrary for CountingLibrary {
    type Field = SoftwareField;
    type Proof = SoftwareProof;
    type VerificationKey = SoftwareVerificationKey;
    type PoseidonHash = SoftwarePoseidon;

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

    fn serialize_field(&self, field: &SoftwareField) -> [u8; SC_FIELD_SIZE] {
        self.inner.serialize_field(field)
    }

    fn deserialize_field(&self, bytes: &[u8; SC_FIELD_SIZE]) -> Option<SoftwareField> {
        self.field_deserializations.fetch_add(1, Ordering::SeqCst);
        self.inner.deserialize_field(bytes)
    }

    fn deserialize_sc_proof(&self, bytes: &[u8]) -> Option<SoftwareProof> {
        self.inner.deserialize_sc_proof(bytes)
    }

    fn deserialize_sc_vk(&self, bytes: &[u8]) -> Option<SoftwareVerificationKey> {
        self.inner.deserialize_sc_vk(bytes)
    }

    fn merkle_root_from_compressed_bytes(
        &self,
        compressed: &[u8],
        expected_uncompressed_size: usize,
    ) -> Result<SoftwareField, CctpErrorCode> {
        self.merkle_roots.fetch_add(1, Ordering::SeqCst);
        self.inner
            .merkle_root_from_compressed_bytes(compressed, expected_uncompressed_size)
    }

    fn poseidon_hash(&self) -> SoftwarePoseidon {
        self.inner.poseidon_hash()
    }
}

/// Software library reporting a proof size other than the compiled one
#[derive(Debug)]
pub struct MisSizedLibrary {
    inner: SoftwareLibrary,
    proof_size: usize,
}

impl MisSizedLibrary {
    pub fn with_proof_size(proof_size: usize) -> Self {
        Self {
            inner: SoftwareLibrary::new(),
            proof_size,
        }
    }
}

impl CctpLibrary for MisSizedLibrary {
    type Field = SoftwareField;
    type Proof = SoftwareProof;
    type VerificationKey = SoftwareVerificationKey;
    type PoseidonHash = SoftwarePoseidon;

    fn field_size_in_bytes(&self) -> usize {
        self.inner.field_size_in_bytes()
    }

    fn sc_proof_size_in_bytes(&self) -> usize {
        self.proof_size
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

    fn serialize_field(&self, field: &SoftwareField) -> [u8; SC_FIELD_SIZE] {
        self.inner.serialize_field(field)
    }

    fn deserialize_field(&self, bytes: &[u8; SC_FIELD_SIZE]) -> Option<SoftwareField> {
        self.inner.deserialize_field(bytes)
    }

    fn deserialize_sc_proof(&self, bytes: &[u8]) -> Option<SoftwareProof> {
        self.inner.deserialize_sc_proof(bytes)
    }

    fn deserialize_sc_vk(&self, bytes: &[u8]) -> Option<SoftwareVerificationKey> {
        self.inner.deserialize_sc_vk(bytes)
    }

    fn merkle_root_from_compressed_bytes(
        &self,
        compressed: &[u8],
        expected_uncompressed_size: usize,
    ) -> Result<SoftwareField, CctpErrorCode> {
        self.inner
            .merkle_root_from_compressed_bytes(compressed, expected_uncompressed_size)
    }

    fn poseidon_hash(&self) -> SoftwarePoseidon {
        self.inner.poseidon_hash()
    }
}

/// An uncompressed all-zero bit vector of the protocol size
pub fn zero_bit_vector() -> Vec<u8> {
    let mut raw = vec![0u8];
    raw.resize(1 + SC_BV_SIZE_IN_BYTES, 0);
    raw
}
