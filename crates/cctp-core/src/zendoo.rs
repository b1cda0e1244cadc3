//! Binding to the native zendoo CCTP library
//!
//! Every handle is a `NonNull` pointer owned by a wrapper whose `Drop` calls
//! the matching free function. Failures come back as a null pointer; the
//! Merkle root and Poseidon calls also fill an error code.

use std::ptr::NonNull;

use crate::constants::{POSEIDON_HASH_ARITY, SC_FIELD_SIZE, SC_PROOF_SIZE, SC_VK_SIZE};
use crate::errors::CctpErrorCode;
use crate::library::CctpLibrary;
use crate::poseidon::PoseidonHash;

mod ffi {
    use core::ffi::c_uchar;

    #[repr(C)]
    pub struct FieldT {
        _private: [u8; 0],
    }

    #[repr(C)]
    pub struct ScProofT {
        _private: [u8; 0],
    }

    #[repr(C)]
    pub struct ScVkT {
        _private: [u8; 0],
    }

    #[repr(C)]
    pub struct PoseidonHashT {
        _private: [u8; 0],
    }

    #[repr(C)]
    pub struct BufferWithSize {
        pub data: *const c_uchar,
        pub len: usize,
    }

    #[link(name = "zendoo_mc")]
    extern "C" {
        pub fn zendoo_get_field_size_in_bytes() -> u32;
        pub fn zendoo_get_sc_proof_size_in_bytes() -> u32;
        pub fn zendoo_get_sc_vk_size_in_bytes() -> u32;
        pub fn zendoo_get_sc_bit_vector_size_in_bytes() -> u32;
        pub fn zendoo_get_sc_custom_data_size_in_bytes() -> u32;

        pub fn zendoo_serialize_field(field: *const FieldT, result: *mut c_uchar);
        pub fn zendoo_deserialize_field(field_bytes: *const c_uchar) -> *mut FieldT;
        pub fn zendoo_field_free(field: *mut FieldT);

        pub fn zendoo_deserialize_sc_proof(sc_proof_bytes: *const c_uchar) -> *mut ScProofT;
        pub fn zendoo_sc_proof_free(proof: *mut ScProofT);

        pub fn zendoo_deserialize_sc_vk(sc_vk_bytes: *const c_uchar) -> *mut ScVkT;
        pub fn zendoo_sc_vk_free(vk: *mut ScVkT);

        pub fn zendoo_merkle_root_from_compressed_bytes(
            compressed_data: *const BufferWithSize,
            expected_uncompressed_size: usize,
            ret_code: *mut u32,
        ) -> *mut FieldT;

        pub fn zendoo_init_poseidon_hash_constant_length(
            input_size: usize,
            ret_code: *mut u32,
        ) -> *mut PoseidonHashT;
        pub fn zendoo_update_poseidon_hash_constant_length(
            input: *const FieldT,
            digest: *mut PoseidonHashT,
            ret_code: *mut u32,
        );
        pub fn zendoo_finalize_poseidon_hash_constant_length(
            digest: *const PoseidonHashT,
            ret_code: *mut u32,
        ) -> *mut FieldT;
        pub fn zendoo_free_poseidon_hash_constant_length(digest: *mut PoseidonHashT);
    }
}

/// Owned native field element
#[derive(Debug)]
pub struct ZendooField(NonNull<ffi::FieldT>);

impl Drop for ZendooField {
    fn drop(&mut self) {
        // SAFETY: the pointer came from the library and is freed exactly once here.
        unsafe { ffi::zendoo_field_free(self.0.as_ptr()) }
    }
}

/// Owned native proof
#[derive(Debug)]
pub struct ZendooProof(NonNull<ffi::ScProofT>);

impl Drop for ZendooProof {
    fn drop(&mut self) {
        // SAFETY: the pointer came from the library and is freed exactly once here.
        unsafe { ffi::zendoo_sc_proof_free(self.0.as_ptr()) }
    }
}

/// Owned native verification key
#[derive(Debug)]
pub struct ZendooVerificationKey(NonNull<ffi::ScVkT>);

impl Drop for ZendooVerificationKey {
    fn drop(&mut self) {
        // SAFETY: the pointer came from the library and is freed exactly once here.
        unsafe { ffi::zendoo_sc_vk_free(self.0.as_ptr()) }
    }
}

/// Owned native constant-length Poseidon digest
///
/// A digest the library failed to create stays empty and fails to finalize.
#[derive(Debug)]
pub struct ZendooPoseidon {
    digest: Option<NonNull<ffi::PoseidonHashT>>,
}

impl Drop for ZendooPoseidon {
    fn drop(&mut self) {
        if let Some(digest) = self.digest.take() {
            // SAFETY: the pointer came from the library and is freed exactly once here.
            unsafe { ffi::zendoo_free_poseidon_hash_constant_length(digest.as_ptr()) }
        }
    }
}

fn buffer(bytes: &[u8]) -> ffi::BufferWithSize {
    ffi::BufferWithSize {
        data: bytes.as_ptr(),
        len: bytes.len(),
    }
}

fn check_code(context: &str, code: u32) {
    if code != CctpErrorCode::Ok as u32 {
        log::debug!(
            target: "sc",
            "{} failed: {}",
            context,
            CctpErrorCode::from_raw(code)
        );
    }
}

/// Native zendoo implementation of [`CctpLibrary`]
#[derive(Debug, Clone, Copy, Default)]
pub struct ZendooLibrary;

impl ZendooLibrary {
    pub fn new() -> Self {
        Self
    }
}

impl CctpLibrary for ZendooLibrary {
    type Field = ZendooField;
    type Proof = ZendooProof;
    type VerificationKey = ZendooVerificationKey;
    type PoseidonHash = ZendooPoseidon;

    fn field_size_in_bytes(&self) -> usize {
        // SAFETY: pure query without arguments.
        unsafe { ffi::zendoo_get_field_size_in_bytes() as usize }
    }

    fn sc_proof_size_in_bytes(&self) -> usize {
        // SAFETY: pure query without arguments.
        unsafe { ffi::zendoo_get_sc_proof_size_in_bytes() as usize }
    }

    fn sc_vk_size_in_bytes(&self) -> usize {
        // SAFETY: pure query without arguments.
        unsafe { ffi::zendoo_get_sc_vk_size_in_bytes() as usize }
    }

    fn sc_bit_vector_size_in_bytes(&self) -> usize {
        // SAFETY: pure query without arguments.
        unsafe { ffi::zendoo_get_sc_bit_vector_size_in_bytes() as usize }
    }

    fn sc_custom_data_size_in_bytes(&self) -> usize {
        // SAFETY: pure query without arguments.
        unsafe { ffi::zendoo_get_sc_custom_data_size_in_bytes() as usize }
    }

    fn serialize_field(&self, field: &ZendooField) -> [u8; SC_FIELD_SIZE] {
        let mut out = [0u8; SC_FIELD_SIZE];
        // SAFETY: `field` is a live handle and `out` holds exactly SC_FIELD_SIZE
        // bytes, which the startup size check ties to the library's field size.
        unsafe { ffi::zendoo_serialize_field(field.0.as_ptr(), out.as_mut_ptr()) };
        out
    }

    fn deserialize_field(&self, bytes: &[u8; SC_FIELD_SIZE]) -> Option<ZendooField> {
        // SAFETY: `bytes` holds exactly SC_FIELD_SIZE readable bytes.
        let raw = unsafe { ffi::zendoo_deserialize_field(bytes.as_ptr()) };
        NonNull::new(raw).map(ZendooField)
    }

    fn deserialize_sc_proof(&self, bytes: &[u8]) -> Option<ZendooProof> {
        if bytes.len() != SC_PROOF_SIZE {
            return None;
        }
        // SAFETY: the library reads exactly SC_PROOF_SIZE bytes, checked above.
        let raw = unsafe { ffi::zendoo_deserialize_sc_proof(bytes.as_ptr()) };
        NonNull::new(raw).map(ZendooProof)
    }

    fn deserialize_sc_vk(&self, bytes: &[u8]) -> Option<ZendooVerificationKey> {
        if bytes.len() != SC_VK_SIZE {
            return None;
        }
        // SAFETY: the library reads exactly SC_VK_SIZE bytes, checked above.
        let raw = unsafe { ffi::zendoo_deserialize_sc_vk(bytes.as_ptr()) };
        NonNull::new(raw).map(ZendooVerificationKey)
    }

    fn merkle_root_from_compressed_bytes(
        &self,
        compressed: &[u8],
        expected_uncompressed_size: usize,
    ) -> Result<ZendooField, CctpErrorCode> {
        let buf = buffer(compressed);
        let mut code = CctpErrorCode::Ok as u32;
        // SAFETY: `buf` borrows `compressed`, which outlives the call.
        let raw = unsafe {
            ffi::zendoo_merkle_root_from_compressed_bytes(&buf, expected_uncompressed_size, &mut code)
        };
        match NonNull::new(raw) {
            Some(root) => Ok(ZendooField(root)),
            None => Err(match CctpErrorCode::from_raw(code) {
                CctpErrorCode::Ok => CctpErrorCode::GenericError,
                err => err,
            }),
        }
    }

    fn poseidon_hash(&self) -> ZendooPoseidon {
        let mut code = CctpErrorCode::Ok as u32;
        // SAFETY: arity is a plain value, `code` is a valid out-parameter.
        let raw = unsafe {
            ffi::zendoo_init_poseidon_hash_constant_length(POSEIDON_HASH_ARITY, &mut code)
        };
        check_code("init poseidon hash", code);
        ZendooPoseidon {
            digest: NonNull::new(raw),
        }
    }
}

impl PoseidonHash for ZendooPoseidon {
    type Field = ZendooField;

    fn update(&mut self, input: &ZendooField) {
        let Some(digest) = self.digest else {
            return;
        };
        let mut code = CctpErrorCode::Ok as u32;
        // SAFETY: both handles are live and owned by their wrappers.
        unsafe {
            ffi::zendoo_update_poseidon_hash_constant_length(
                input.0.as_ptr(),
                digest.as_ptr(),
                &mut code,
            )
        };
        check_code("update poseidon hash", code);
    }

    fn finalize(self) -> Result<ZendooField, CctpErrorCode> {
        let digest = self.digest.ok_or(CctpErrorCode::HashingError)?;
        let mut code = CctpErrorCode::Ok as u32;
        // SAFETY: the digest is live until `self` drops at the end of this call.
        let raw =
            unsafe { ffi::zendoo_finalize_poseidon_hash_constant_length(digest.as_ptr(), &mut code) };

        NonNull::new(raw).map(ZendooField).ok_or_else(|| {
            log::error!(target: "sc", "poseidon hash finalization returned null");
            match CctpErrorCode::from_raw(code) {
                CctpErrorCode::Ok => CctpErrorCode::HashingError,
                err => err,
            }
        })
    }
}
