//! Compiled sizes and protocol limits for CCTP objects
//!
//! The byte sizes must match what the linked CCTP library reports; see
//! [`crate::library::LibraryChecker`].

/// Size in bytes of a serialized scalar field element
pub const SC_FIELD_SIZE: usize = 32;

/// Size in bytes of a serialized sidechain SNARK proof
pub const SC_PROOF_SIZE: usize = 768;

/// Size in bytes of a serialized sidechain verification key
pub const SC_VK_SIZE: usize = 1536;

/// Uncompressed size in bytes of a certificate bit vector.
/// Every bit vector is reconstructed against this size.
pub const SC_BV_SIZE_IN_BYTES: usize = 4064;

/// Maximum size in bytes of sidechain creation custom data
pub const SC_CUSTOM_DATA_MAX_SIZE: usize = 1024;

/// Upper bound on the bit size a bit-vector config may declare
pub const MAX_BIT_VECTOR_SIZE_BITS: i32 = 254 * 4096;

/// Upper bound on the compressed size a bit-vector config may declare
pub const MAX_COMPRESSED_SIZE_BYTES: i32 = MAX_BIT_VECTOR_SIZE_BITS / 8;

/// Maximum serialized certificate size
pub const MAX_CERT_SIZE: usize = 150_000;

/// Upper bound on a bit-vector slot accepted from user hex input
pub const MAX_CERT_BIT_VECTOR_INPUT_SIZE: usize = 1024 * 32;

/// Number of inputs absorbed by a 2-to-1 Poseidon hash
pub const POSEIDON_HASH_ARITY: usize = 2;

/// Number of bits that fit in one bit-vector Merkle leaf
pub const BIT_VECTOR_LEAF_BITS: usize = 254;

const _: () = assert!(MAX_COMPRESSED_SIZE_BYTES as usize <= MAX_CERT_SIZE);
const _: () = assert!(MAX_BIT_VECTOR_SIZE_BITS % 254 == 0 && MAX_BIT_VECTOR_SIZE_BITS % 8 == 0);
const _: () = assert!((SC_BV_SIZE_IN_BYTES * 8) % BIT_VECTOR_LEAF_BITS == 0);
const _: () = assert!(SC_BV_SIZE_IN_BYTES * 8 <= MAX_BIT_VECTOR_SIZE_BITS as usize);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bit_vector_size_is_whole_leaves() {
        assert_eq!(SC_BV_SIZE_IN_BYTES * 8 / BIT_VECTOR_LEAF_BITS, 128);
    }
}
