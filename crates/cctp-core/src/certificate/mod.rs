//! Custom certificate fields and the configs a sidechain registers for them
//!
//! A certificate carries opaque byte slots. Each slot is interpreted against
//! the config registered at sidechain creation and turned into a canonical
//! field element, which then enters the certificate proof as a public input.

mod cache;
pub mod config;
pub mod field;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::errors::CustomFieldError;
use crate::field::FieldElement;
use crate::library::CctpLibrary;
use crate::types::SizedByteObject;

pub use cache::ValidationState;
pub use config::{
    BitVectorCertificateFieldConfig, CertificateFieldConfig, CustomCertificateFieldConfig,
    FieldElementCertificateFieldConfig,
};
pub use field::{BitVectorCertificateField, CustomCertificateField, FieldElementCertificateField};

/// Either family of certificate field
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CertificateField {
    FieldElement(FieldElementCertificateField),
    BitVector(BitVectorCertificateField),
}

impl CertificateField {
    pub fn raw_data(&self) -> &[u8] {
        match self {
            Self::FieldElement(field) => field.raw_data(),
            Self::BitVector(field) => field.raw_data(),
        }
    }

    /// Canonical field element for `cfg`.
    ///
    /// A config of the other family never matches and yields null.
    pub fn get_field_element<L: CctpLibrary + ?Sized>(
        &self,
        cfg: &CertificateFieldConfig,
        lib: &L,
    ) -> FieldElement {
        match (self, cfg) {
            (Self::FieldElement(field), CertificateFieldConfig::FieldElement(cfg)) => {
                field.get_field_element(cfg, lib)
            }
            (Self::BitVector(field), CertificateFieldConfig::BitVector(cfg)) => {
                field.get_field_element(cfg, lib)
            }
            _ => {
                log::warn!(target: "sc", "certificate field queried with a config of another type");
                FieldElement::default()
            }
        }
    }

    pub fn is_valid<L: CctpLibrary + ?Sized>(&self, cfg: &CertificateFieldConfig, lib: &L) -> bool {
        !self.get_field_element(cfg, lib).is_null()
    }
}

impl From<FieldElementCertificateField> for CertificateField {
    fn from(field: FieldElementCertificateField) -> Self {
        Self::FieldElement(field)
    }
}

impl From<BitVectorCertificateField> for CertificateField {
    fn from(field: BitVectorCertificateField) -> Self {
        Self::BitVector(field)
    }
}

/// Certificate field configs registered by a sidechain at creation
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SidechainFieldConfigs {
    #[cfg_attr(feature = "serde", serde(default, rename = "field_element"))]
    pub field_element_configs: Vec<FieldElementCertificateFieldConfig>,
    #[cfg_attr(feature = "serde", serde(default, rename = "bit_vector"))]
    pub bit_vector_configs: Vec<BitVectorCertificateFieldConfig>,
}

impl SidechainFieldConfigs {
    /// Registration rule: every config must be valid on its own
    pub fn check_valid(&self) -> bool {
        self.field_element_configs.iter().all(|cfg| cfg.is_valid())
            && self.bit_vector_configs.iter().all(|cfg| cfg.is_valid())
    }

    /// All configs, field-element ones first
    pub fn configs(&self) -> impl Iterator<Item = CertificateFieldConfig> + '_ {
        self.field_element_configs
            .iter()
            .copied()
            .map(CertificateFieldConfig::from)
            .chain(self.bit_vector_configs.iter().copied().map(CertificateFieldConfig::from))
    }
}

/// Custom field slots carried by a certificate
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CertificateCustomFields {
    pub field_elements: Vec<FieldElementCertificateField>,
    pub bit_vectors: Vec<BitVectorCertificateField>,
}

impl CertificateCustomFields {
    pub fn new(
        field_elements: Vec<FieldElementCertificateField>,
        bit_vectors: Vec<BitVectorCertificateField>,
    ) -> Self {
        Self {
            field_elements,
            bit_vectors,
        }
    }

    /// Validate every slot against the sidechain configs at the same index.
    ///
    /// On success returns the field elements of all slots, field-element
    /// slots first, in the order they enter the certificate proof.
    pub fn check_against<L: CctpLibrary + ?Sized>(
        &self,
        configs: &SidechainFieldConfigs,
        lib: &L,
    ) -> Result<Vec<FieldElement>, CustomFieldError> {
        if self.field_elements.len() != configs.field_element_configs.len() {
            return Err(CustomFieldError::CountMismatch {
                kind: "field element",
                fields: self.field_elements.len(),
                configs: configs.field_element_configs.len(),
            });
        }
        if self.bit_vectors.len() != configs.bit_vector_configs.len() {
            return Err(CustomFieldError::CountMismatch {
                kind: "bit vector",
                fields: self.bit_vectors.len(),
                configs: configs.bit_vector_configs.len(),
            });
        }

        let mut out = Vec::with_capacity(self.field_elements.len() + self.bit_vectors.len());

        for (index, (field, cfg)) in self
            .field_elements
            .iter()
            .zip(&configs.field_element_configs)
            .enumerate()
        {
            let fe = field.get_field_element(cfg, lib);
            if fe.is_null() {
                log::debug!(target: "sc", "invalid custom field element at pos {}", index);
                return Err(CustomFieldError::InvalidFieldElement { index });
            }
            out.push(fe);
        }

        for (index, (field, cfg)) in self
            .bit_vectors
            .iter()
            .zip(&configs.bit_vector_configs)
            .enumerate()
        {
            let fe = field.get_field_element(cfg, lib);
            if fe.is_null() {
                log::debug!(target: "sc", "invalid compressed bit vector at pos {}", index);
                return Err(CustomFieldError::InvalidBitVector { index });
            }
            out.push(fe);
        }

        Ok(out)
    }
}
