//! Compressed bit vectors and their Merkle roots
//!
//! Compressed layout: one algorithm byte followed by the payload.
//! The decompressed bit vector is cut into 254-bit little-endian leaves,
//! each reduced into the field, and hashed pairwise up to a single root.

use std::io::Read;

use ark_bn254::Fr;
use ark_ff::{PrimeField, Zero};
use bzip2::read::BzDecoder;
use flate2::read::GzDecoder;

use super::poseidon::hash_two;
use crate::constants::BIT_VECTOR_LEAF_BITS;
use crate::errors::CctpErrorCode;

/// Algorithm tag in the first byte of a compressed bit vector
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompressionAlgorithm {
    Uncompressed = 0,
    Bzip2 = 1,
    Gzip = 2,
}

impl TryFrom<u8> for CompressionAlgorithm {
    type Error = CctpErrorCode;

    fn try_from(tag: u8) -> Result<Self, Self::Error> {
        match tag {
            0 => Ok(Self::Uncompressed),
            1 => Ok(Self::Bzip2),
            2 => Ok(Self::Gzip),
            _ => Err(CctpErrorCode::InvalidBufferData),
        }
    }
}

/// Expand `compressed` into exactly `expected_size` bytes
pub fn decompress(compressed: &[u8], expected_size: usize) -> Result<Vec<u8>, CctpErrorCode> {
    let (&tag, payload) = compressed
        .split_first()
        .ok_or(CctpErrorCode::InvalidBufferLength)?;

    let raw = match CompressionAlgorithm::try_from(tag)? {
        CompressionAlgorithm::Uncompressed => payload.to_vec(),
        CompressionAlgorithm::Bzip2 => inflate(BzDecoder::new(payload), expected_size)?,
        CompressionAlgorithm::Gzip => inflate(GzDecoder::new(payload), expected_size)?,
    };

    if raw.len() != expected_size {
        return Err(CctpErrorCode::InvalidBufferLength);
    }

    Ok(raw)
}

fn inflate<R: Read>(decoder: R, expected_size: usize) -> Result<Vec<u8>, CctpErrorCode> {
    let mut raw = Vec::with_capacity(expected_size);
    // One extra byte is enough to detect an oversized payload
    decoder
        .take(expected_size as u64 + 1)
        .read_to_end(&mut raw)
        .map_err(|_| CctpErrorCode::UncompressError)?;
    Ok(raw)
}

/// Split a bit vector into field-element leaves
fn leaves(bit_vector: &[u8]) -> Vec<Fr> {
    let total_bits = bit_vector.len() * 8;
    (0..total_bits / BIT_VECTOR_LEAF_BITS)
        .map(|leaf| {
            let mut le_bytes = [0u8; 32];
            for bit in 0..BIT_VECTOR_LEAF_BITS {
                let pos = leaf * BIT_VECTOR_LEAF_BITS + bit;
                if (bit_vector[pos / 8] >> (pos % 8)) & 1 == 1 {
                    le_bytes[bit / 8] |= 1 << (bit % 8);
                }
            }
            Fr::from_le_bytes_mod_order(&le_bytes)
        })
        .collect()
}

/// Root of the binary Poseidon Merkle tree over `leaves`, zero padded to a power of two
fn merkle_root(mut level: Vec<Fr>) -> Result<Fr, CctpErrorCode> {
    if level.is_empty() {
        return Err(CctpErrorCode::MerkleRootBuildError);
    }
    level.resize(level.len().next_power_of_two(), Fr::zero());

    while level.len() > 1 {
        level = level
            .chunks_exact(2)
            .map(|pair| hash_two(&pair[0], &pair[1]))
            .collect::<Result<_, _>>()?;
    }

    level.pop().ok_or(CctpErrorCode::MerkleRootBuildError)
}

pub fn merkle_root_from_compressed_bytes(
    compressed: &[u8],
    expected_uncompressed_size: usize,
) -> Result<Fr, CctpErrorCode> {
    if (expected_uncompressed_size * 8) % BIT_VECTOR_LEAF_BITS != 0 {
        return Err(CctpErrorCode::MerkleRootBuildError);
    }

    let bit_vector = decompress(compressed, expected_uncompressed_size)?;
    merkle_root(leaves(&bit_vector))
}
