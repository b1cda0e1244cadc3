//! Sidechain CCTP data types
//!
//! Fixed-size byte objects (field elements, SNARK proofs, verification keys),
//! Poseidon hashing and the custom certificate fields a sidechain declares,
//! all validated through a [`CctpLibrary`] implementation:
//!
//! - [`software::SoftwareLibrary`] (feature `software`, default): pure Rust
//!   over the BN254 scalar field, for tooling and tests
//! - [`zendoo::ZendooLibrary`] (feature `zendoo`): the native library
//!
//! ```ignore
//! use sc_cctp_core::{CheckedLibrary, FieldElement, SoftwareLibrary};
//!
//! let lib = CheckedLibrary::new(SoftwareLibrary::new())?;
//! let fe = FieldElement::try_from_bytes(&bytes)?;
//! assert!(fe.is_valid(&lib));
//! ```

pub mod certificate;
pub mod constants;
pub mod data;
pub mod errors;
pub mod field;
pub mod key;
pub mod library;
pub mod poseidon;
pub mod proof;
pub mod types;

#[cfg(feature = "software")]
pub mod software;

#[cfg(feature = "zendoo")]
pub mod zendoo;

pub use certificate::{
    BitVectorCertificateField, BitVectorCertificateFieldConfig, CertificateCustomFields,
    CertificateField, CertificateFieldConfig, CustomCertificateField,
    CustomCertificateFieldConfig, FieldElementCertificateField,
    FieldElementCertificateFieldConfig, SidechainFieldConfigs, ValidationState,
};
pub use errors::{CctpError, CctpErrorCode, CustomFieldError, LibraryError, ScDataError};
pub use field::FieldElement;
pub use key::ScVKey;
pub use library::{CctpLibrary, CheckedLibrary, LibraryChecker};
pub use poseidon::{PoseidonHash, PoseidonHasher};
pub use proof::ScProof;
pub use types::SizedByteObject;

#[cfg(feature = "software")]
pub use software::SoftwareLibrary;

#[cfg(feature = "zendoo")]
pub use zendoo::ZendooLibrary;
