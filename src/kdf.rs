//! Key derivation from passphrases
//!
//! PBKDF2-HMAC-SHA-256 over a per-message random salt. The iteration count
//! is the deliberate cost that makes offline passphrase guessing expensive;
//! it is a fixed parameter of the envelope format, not configurable.

use pbkdf2::pbkdf2_hmac;
use sha2::Sha256;
use zeroize::Zeroizing;

/// Length of salt in bytes
pub const SALT_LEN: usize = 16;

/// Length of derived key in bytes
pub const KEY_LEN: usize = 32;

/// PBKDF2 iteration count
pub const PBKDF2_ITERATIONS: u32 = 100_000;

/// Derive a 32-byte key from a passphrase and salt.
///
/// Deterministic: the same (passphrase, salt) pair always yields the same
/// key, which is what lets decrypt reconstruct the key from the salt
/// embedded in the envelope. The full iteration count runs on every call;
/// keys are never cached across calls. The returned key is wiped from
/// memory when dropped.
pub fn derive_key(passphrase: &[u8], salt: &[u8; SALT_LEN]) -> Zeroizing<[u8; KEY_LEN]> {
    let mut key = Zeroizing::new([0u8; KEY_LEN]);
    pbkdf2_hmac::<Sha256>(passphrase, salt, PBKDF2_ITERATIONS, &mut *key);
    key
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deterministic() {
        let salt = [7u8; SALT_LEN];
        let k1 = derive_key(b"correct horse", &salt);
        let k2 = derive_key(b"correct horse", &salt);
        assert_eq!(*k1, *k2);
    }

    #[test]
    fn test_salt_changes_key() {
        let k1 = derive_key(b"correct horse", &[1u8; SALT_LEN]);
        let k2 = derive_key(b"correct horse", &[2u8; SALT_LEN]);
        assert_ne!(*k1, *k2);
    }

    #[test]
    fn test_passphrase_changes_key() {
        let salt = [7u8; SALT_LEN];
        let k1 = derive_key(b"correct horse", &salt);
        let k2 = derive_key(b"wrong horse", &salt);
        assert_ne!(*k1, *k2);
    }

    #[test]
    fn test_empty_passphrase_derives() {
        // The KDF itself is total; the public API layer is what rejects
        // empty passphrases.
        let salt = [0u8; SALT_LEN];
        let key = derive_key(b"", &salt);
        assert_ne!(*key, [0u8; KEY_LEN]);
    }
}
