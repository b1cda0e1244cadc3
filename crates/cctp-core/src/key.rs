//! Sidechain verification keys

use crate::constants::SC_VK_SIZE;
use crate::library::CctpLibrary;
use crate::types::sized_byte_object;

/// Serialized verification key, `SC_VK_SIZE` bytes or null
#[derive(Clone, Default, PartialEq, Eq, Hash)]
pub struct ScVKey {
    bytes: Vec<u8>,
}

sized_byte_object!(ScVKey, SC_VK_SIZE, "vk");

impl ScVKey {
    /// Deserialize into a fresh native handle, `None` when null or malformed
    pub fn get_vkey_ptr<L: CctpLibrary + ?Sized>(&self, lib: &L) -> Option<L::VerificationKey> {
        if self.bytes.is_empty() {
            return None;
        }
        lib.deserialize_sc_vk(&self.bytes)
    }

    pub fn is_valid<L: CctpLibrary + ?Sized>(&self, lib: &L) -> bool {
        self.get_vkey_ptr(lib).is_some()
    }
}

#[cfg(all(test, feature = "software"))]
mod tests {
    use super::*;
    use crate::software::SoftwareLibrary;
    use crate::types::SizedByteObject;

    #[test]
    fn test_vk_validity() {
        let lib = SoftwareLibrary::new();
        let mut bytes = vec![0u8; SC_VK_SIZE];
        bytes[0] = 1;
        let vk = ScVKey::from_bytes(bytes.clone());
        assert!(vk.is_valid(&lib));
        assert!(vk.get_vkey_ptr(&lib).is_some());

        bytes[SC_VK_SIZE - 32] = 0xff;
        assert!(!ScVKey::from_bytes(bytes).is_valid(&lib));
    }

    #[test]
    fn test_null_vk() {
        let mut vk = ScVKey::from_bytes(vec![1u8; SC_VK_SIZE]);
        vk.set_null();
        assert!(vk.is_null());
        assert!(vk.get_vkey_ptr(&SoftwareLibrary::new()).is_none());
    }
}
