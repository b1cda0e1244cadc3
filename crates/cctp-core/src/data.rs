//! Hex decoding of user supplied sidechain data
//!
//! Only the encoding and the length are checked here. The content of a
//! custom field is validated when it is first queried against a config.

use crate::constants::MAX_CERT_BIT_VECTOR_INPUT_SIZE;
use crate::errors::ScDataError;

/// Decode `input` as hex of at most `size` bytes, exactly `size` when `strict`
pub fn parse_sc_data(input: &str, size: usize, strict: bool) -> Result<Vec<u8>, ScDataError> {
    if input.len() % 2 != 0 {
        return Err(ScDataError::OddLength(input.len()));
    }

    let bytes = hex::decode(input).map_err(|_| ScDataError::InvalidHex)?;

    if strict && bytes.len() != size {
        return Err(ScDataError::WrongSize {
            expected: size,
            actual: bytes.len(),
        });
    }
    if bytes.len() > size {
        return Err(ScDataError::TooLong {
            max: size,
            actual: bytes.len(),
        });
    }

    Ok(bytes)
}

/// Raw bytes of a field-element certificate slot, `1..=max_size` bytes
pub fn parse_custom_field_element(input: &str, max_size: usize) -> Result<Vec<u8>, ScDataError> {
    let bytes = parse_sc_data(input, max_size, false)?;
    if bytes.is_empty() {
        return Err(ScDataError::Empty);
    }
    Ok(bytes)
}

/// Raw bytes of a compressed bit-vector certificate slot
pub fn parse_bit_vector(input: &str) -> Result<Vec<u8>, ScDataError> {
    parse_sc_data(input, MAX_CERT_BIT_VECTOR_INPUT_SIZE, false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{SC_FIELD_SIZE, SC_PROOF_SIZE};

    #[test]
    fn test_odd_length_rejected() {
        assert_eq!(parse_sc_data("abc", 4, false), Err(ScDataError::OddLength(3)));
    }

    #[test]
    fn test_invalid_hex_rejected() {
        assert_eq!(parse_sc_data("zz", 4, false), Err(ScDataError::InvalidHex));
    }

    #[test]
    fn test_strict_size() {
        let proof_hex = "07".repeat(SC_PROOF_SIZE);
        assert_eq!(parse_sc_data(&proof_hex, SC_PROOF_SIZE, true).unwrap().len(), SC_PROOF_SIZE);
        assert_eq!(
            parse_sc_data("0102", SC_PROOF_SIZE, true),
            Err(ScDataError::WrongSize {
                expected: SC_PROOF_SIZE,
                actual: 2
            })
        );
    }

    #[test]
    fn test_non_strict_upper_bound() {
        assert_eq!(parse_sc_data("0102", 4, false).unwrap(), vec![1, 2]);
        assert_eq!(parse_sc_data("", 4, false).unwrap(), Vec::<u8>::new());
        assert_eq!(
            parse_sc_data("0102030405", 4, false),
            Err(ScDataError::TooLong { max: 4, actual: 5 })
        );
    }

    #[test]
    fn test_custom_field_element() {
        assert_eq!(parse_custom_field_element("fff0", SC_FIELD_SIZE).unwrap(), vec![0xff, 0xf0]);
        assert_eq!(parse_custom_field_element("", SC_FIELD_SIZE), Err(ScDataError::Empty));
        assert!(matches!(
            parse_custom_field_element(&"00".repeat(SC_FIELD_SIZE + 1), SC_FIELD_SIZE),
            Err(ScDataError::TooLong { .. })
        ));
    }

    #[test]
    fn test_bit_vector_bound() {
        let max = "00".repeat(MAX_CERT_BIT_VECTOR_INPUT_SIZE);
        assert!(parse_bit_vector(&max).is_ok());
        assert!(parse_bit_vector(&format!("{max}00")).is_err());
    }
}
