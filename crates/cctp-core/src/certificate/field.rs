//! Certificate payload slots and their conversion into field elements
//!
//! Both variants keep the raw on-chain bytes untouched and memoize the
//! verdict of the last config they were queried with. An invalid slot yields
//! the null field element.

use super::cache::{ValidationCache, ValidationState};
use super::config::{BitVectorCertificateFieldConfig, FieldElementCertificateFieldConfig};
use crate::constants::{SC_BV_SIZE_IN_BYTES, SC_FIELD_SIZE};
use crate::field::FieldElement;
use crate::library::CctpLibrary;
use crate::types::SizedByteObject;

/// Common capability of certificate fields
pub trait CustomCertificateField {
    type Config;

    /// Bytes as stored on chain
    fn raw_data(&self) -> &[u8];

    /// Canonical field element for `cfg`, null if the data does not fit it
    fn get_field_element<L: CctpLibrary + ?Sized>(&self, cfg: &Self::Config, lib: &L)
        -> FieldElement;

    fn is_valid<L: CctpLibrary + ?Sized>(&self, cfg: &Self::Config, lib: &L) -> bool {
        !self.get_field_element(cfg, lib).is_null()
    }
}

/// Bytes and bit-padding rule for `bits` significant bits: (bytes, bits in last byte)
fn bytes_from_bits(bits: usize) -> (usize, usize) {
    (bits.div_ceil(8), bits % 8)
}

/// A slot holding at most one field element worth of bits
#[derive(Debug, Clone, Default)]
pub struct FieldElementCertificateField {
    raw_data: Vec<u8>,
    cache: ValidationCache<FieldElementCertificateFieldConfig>,
}

impl FieldElementCertificateField {
    /// Wrap raw bytes, validation is deferred to the first query
    pub fn new(raw_data: Vec<u8>) -> Self {
        Self {
            raw_data,
            cache: ValidationCache::default(),
        }
    }

    pub fn validation_state(&self) -> ValidationState {
        self.cache.state()
    }

    /// Config of the last query, if any
    pub fn cached_config(&self) -> Option<FieldElementCertificateFieldConfig> {
        self.cache.reference_cfg()
    }

    fn validate<L: CctpLibrary + ?Sized>(
        &self,
        cfg: &FieldElementCertificateFieldConfig,
        lib: &L,
    ) -> FieldElement {
        let Ok(bits) = usize::try_from(cfg.bit_size()) else {
            panic!("certificate field config has a negative bit size");
        };
        assert!(
            bits <= FieldElement::bit_size(),
            "certificate field config exceeds field element capacity"
        );

        let (bytes, rem) = bytes_from_bits(bits);
        if self.raw_data.len() != bytes {
            log::debug!(
                target: "sc",
                "wrong size: data[{}] != cfg[{}]",
                self.raw_data.len(),
                cfg.bit_size()
            );
            return FieldElement::default();
        }

        if rem != 0 {
            // the unused low bits of the last byte must be zero
            let last_byte = self.raw_data.last().copied().unwrap_or(0);
            let zero_bits = (last_byte.trailing_zeros() as usize).min(8);
            if zero_bits < 8 - rem {
                log::debug!(
                    target: "sc",
                    "wrong number of null bits in last byte[0x{:x}]: {} vs {}",
                    last_byte,
                    zero_bits,
                    8 - rem
                );
                return FieldElement::default();
            }
        }

        let mut extended = vec![0u8; SC_FIELD_SIZE - self.raw_data.len()];
        extended.extend_from_slice(&self.raw_data);

        let field_element = FieldElement::from_bytes(extended);
        if field_element.is_valid(lib) {
            field_element
        } else {
            log::debug!(
                target: "sc",
                "field element rejected by library: {}",
                field_element.hex_repr()
            );
            FieldElement::default()
        }
    }
}

impl CustomCertificateField for FieldElementCertificateField {
    type Config = FieldElementCertificateFieldConfig;

    fn raw_data(&self) -> &[u8] {
        &self.raw_data
    }

    /// # Panics
    /// If `cfg` declares a negative bit size or more bits than a field
    /// element holds. Registered configs are checked for this before any
    /// certificate is validated.
    fn get_field_element<L: CctpLibrary + ?Sized>(
        &self,
        cfg: &FieldElementCertificateFieldConfig,
        lib: &L,
    ) -> FieldElement {
        self.cache
            .get_or_validate(cfg, |cfg| self.validate(cfg, lib))
    }
}

impl PartialEq for FieldElementCertificateField {
    fn eq(&self, other: &Self) -> bool {
        self.raw_data == other.raw_data
    }
}

impl Eq for FieldElementCertificateField {}

/// A slot holding a compressed bit vector, represented by its Merkle root
#[derive(Debug, Clone, Default)]
pub struct BitVectorCertificateField {
    raw_data: Vec<u8>,
    cache: ValidationCache<BitVectorCertificateFieldConfig>,
}

impl BitVectorCertificateField {
    /// Wrap raw compressed bytes, validation is deferred to the first query
    pub fn new(raw_data: Vec<u8>) -> Self {
        Self {
            raw_data,
            cache: ValidationCache::default(),
        }
    }

    pub fn validation_state(&self) -> ValidationState {
        self.cache.state()
    }

    /// Config of the last query, if any
    pub fn cached_config(&self) -> Option<BitVectorCertificateFieldConfig> {
        self.cache.reference_cfg()
    }

    fn validate<L: CctpLibrary + ?Sized>(
        &self,
        cfg: &BitVectorCertificateFieldConfig,
        lib: &L,
    ) -> FieldElement {
        let Ok(max_size) = usize::try_from(cfg.max_compressed_size_bytes()) else {
            log::debug!(
                target: "sc",
                "negative cfg max compressed size {}",
                cfg.max_compressed_size_bytes()
            );
            return FieldElement::default();
        };
        if self.raw_data.len() > max_size {
            log::debug!(
                target: "sc",
                "compressed bit vector of size {} exceeds cfg max {}",
                self.raw_data.len(),
                max_size
            );
            return FieldElement::default();
        }

        // Reconstructed against the protocol-wide bit vector size
        match lib.merkle_root_from_compressed_bytes(&self.raw_data, SC_BV_SIZE_IN_BYTES) {
            Ok(root) => FieldElement::from_native(lib, Some(&root)),
            Err(code) => {
                log::debug!(
                    target: "sc",
                    "ERROR({}): could not get merkle root field el from compr bit vector of size {}, exp uncompr size {}",
                    code as u32,
                    self.raw_data.len(),
                    SC_BV_SIZE_IN_BYTES
                );
                FieldElement::default()
            }
        }
    }
}

impl CustomCertificateField for BitVectorCertificateField {
    type Config = BitVectorCertificateFieldConfig;

    fn raw_data(&self) -> &[u8] {
        &self.raw_data
    }

    fn get_field_element<L: CctpLibrary + ?Sized>(
        &self,
        cfg: &BitVectorCertificateFieldConfig,
        lib: &L,
    ) -> FieldElement {
        self.cache
            .get_or_validate(cfg, |cfg| self.validate(cfg, lib))
    }
}

impl PartialEq for BitVectorCertificateField {
    fn eq(&self, other: &Self) -> bool {
        self.raw_data == other.raw_data
    }
}

impl Eq for BitVectorCertificateField {}
