//! Error types for the CCTP data-type layer

use thiserror::Error;

/// Errors raised by CCTP object operations
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CctpError {
    #[error("Could not compute poseidon hash on null field elements")]
    NullFieldElementHash,

    #[error("Invalid {object} size: expected {expected}, got {actual}")]
    InvalidSize {
        object: &'static str,
        expected: usize,
        actual: usize,
    },

    #[error("CCTP library error: {0}")]
    Library(#[from] LibraryError),

    #[error("Poseidon hash failed: {0}")]
    Hashing(#[from] CctpErrorCode),
}

/// Mismatches between compiled constants and the linked CCTP library
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LibraryError {
    #[error("Unexpected CCTP {object} size: {compiled} (library returns {library})")]
    SizeMismatch {
        object: &'static str,
        compiled: usize,
        library: usize,
    },
}

/// Advisory error codes reported by the native library
///
/// Discriminants follow the library's `CctpErrorCode`.
#[repr(u32)]
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CctpErrorCode {
    #[error("OK")]
    Ok = 0,

    #[error("Null pointer")]
    NullPtr = 1,

    #[error("Invalid value")]
    InvalidValue = 2,

    #[error("Invalid buffer data")]
    InvalidBufferData = 3,

    #[error("Invalid buffer length")]
    InvalidBufferLength = 4,

    #[error("Invalid list length")]
    InvalidListLength = 5,

    #[error("Hashing error")]
    HashingError = 7,

    #[error("Merkle tree error")]
    MerkleTreeError = 8,

    #[error("Compression error")]
    CompressError = 13,

    #[error("Decompression error")]
    UncompressError = 14,

    #[error("Merkle root build error")]
    MerkleRootBuildError = 15,

    #[error("Generic error")]
    GenericError = 16,
}

impl CctpErrorCode {
    /// Map a raw native code, unknown values collapse to `GenericError`
    pub fn from_raw(code: u32) -> Self {
        match code {
            0 => Self::Ok,
            1 => Self::NullPtr,
            2 => Self::InvalidValue,
            3 => Self::InvalidBufferData,
            4 => Self::InvalidBufferLength,
            5 => Self::InvalidListLength,
            7 => Self::HashingError,
            8 => Self::MerkleTreeError,
            13 => Self::CompressError,
            14 => Self::UncompressError,
            15 => Self::MerkleRootBuildError,
            _ => Self::GenericError,
        }
    }
}

/// User-supplied sidechain data that cannot be accepted
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ScDataError {
    #[error("Invalid format: not an hex")]
    InvalidHex,

    #[error("Invalid length {0}, must be even (byte string)")]
    OddLength(usize),

    #[error("Invalid length {actual}, must be {expected} bytes")]
    WrongSize { expected: usize, actual: usize },

    #[error("Invalid length {actual}, must be {max} bytes at most")]
    TooLong { max: usize, actual: usize },

    #[error("Empty data")]
    Empty,
}

/// Reasons a certificate's custom fields are rejected against a sidechain
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CustomFieldError {
    #[error("Custom field count mismatch: {fields} {kind} fields, {configs} configs")]
    CountMismatch {
        kind: &'static str,
        fields: usize,
        configs: usize,
    },

    #[error("Invalid field element certificate field at index {index}")]
    InvalidFieldElement { index: usize },

    #[error("Invalid bit vector certificate field at index {index}")]
    InvalidBitVector { index: usize },
}
