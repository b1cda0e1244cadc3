//! Shape descriptors a sidechain registers for its certificate fields

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::constants::{MAX_BIT_VECTOR_SIZE_BITS, MAX_COMPRESSED_SIZE_BYTES, SC_FIELD_SIZE};

/// Common capability of certificate field configs
pub trait CustomCertificateFieldConfig: Clone + PartialEq {
    fn is_valid(&self) -> bool;
}

/// A field element slot carrying `bits` significant bits
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FieldElementCertificateFieldConfig {
    bits: i32,
}

impl FieldElementCertificateFieldConfig {
    pub fn new(bits: i32) -> Self {
        Self { bits }
    }

    pub fn bit_size(&self) -> i32 {
        self.bits
    }
}

impl CustomCertificateFieldConfig for FieldElementCertificateFieldConfig {
    /// `0 < bits <= 8 * SC_FIELD_SIZE`
    fn is_valid(&self) -> bool {
        self.bits > 0 && self.bits as usize <= SC_FIELD_SIZE * 8
    }
}

/// A compressed bit-vector slot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BitVectorCertificateFieldConfig {
    bit_vector_size_bits: i32,
    max_compressed_size_bytes: i32,
}

impl BitVectorCertificateFieldConfig {
    pub fn new(bit_vector_size_bits: i32, max_compressed_size_bytes: i32) -> Self {
        Self {
            bit_vector_size_bits,
            max_compressed_size_bytes,
        }
    }

    pub fn bit_vector_size_bits(&self) -> i32 {
        self.bit_vector_size_bits
    }

    pub fn max_compressed_size_bytes(&self) -> i32 {
        self.max_compressed_size_bytes
    }
}

impl CustomCertificateFieldConfig for BitVectorCertificateFieldConfig {
    fn is_valid(&self) -> bool {
        let size_valid =
            self.bit_vector_size_bits > 0 && self.bit_vector_size_bits <= MAX_BIT_VECTOR_SIZE_BITS;
        if !size_valid {
            return false;
        }

        if self.bit_vector_size_bits % 254 != 0 || self.bit_vector_size_bits % 8 != 0 {
            return false;
        }

        self.max_compressed_size_bytes > 0
            && self.max_compressed_size_bytes <= MAX_COMPRESSED_SIZE_BYTES
    }
}

/// Either family of certificate field config
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum CertificateFieldConfig {
    FieldElement(FieldElementCertificateFieldConfig),
    BitVector(BitVectorCertificateFieldConfig),
}

impl CustomCertificateFieldConfig for CertificateFieldConfig {
    fn is_valid(&self) -> bool {
        match self {
            Self::FieldElement(cfg) => cfg.is_valid(),
            Self::BitVector(cfg) => cfg.is_valid(),
        }
    }
}

impl From<FieldElementCertificateFieldConfig> for CertificateFieldConfig {
    fn from(cfg: FieldElementCertificateFieldConfig) -> Self {
        Self::FieldElement(cfg)
    }
}

impl From<BitVectorCertificateFieldConfig> for CertificateFieldConfig {
    fn from(cfg: BitVectorCertificateFieldConfig) -> Self {
        Self::BitVector(cfg)
    }
}
