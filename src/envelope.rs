//! Envelope sealing and opening using PBKDF2 + AES-256-GCM
//!
//! This module implements passphrase-based authenticated encryption using:
//! - PBKDF2-HMAC-SHA-256 for key derivation from the passphrase
//! - AES-256-GCM for authenticated encryption (empty associated data)
//!
//! The binary format is:
//! - version: 1 byte (currently 0x01)
//! - salt: 16 bytes
//! - nonce: 12 bytes
//! - ciphertext: variable length (includes the 16-byte GCM tag)
//!
//! Salt and nonce are freshly random for every seal. Nonce reuse under a
//! single key cannot occur because each nonce is paired with a fresh salt,
//! hence a fresh key.

use crate::env::HostCrypto;
use crate::error::{ErrorCategory, ErrorKind, Result, SealnoteError};
use crate::kdf::{self, SALT_LEN};
use aes_gcm::aead::{Aead, KeyInit};
use aes_gcm::{Aes256Gcm, Key, Nonce};

/// Length of nonce in bytes
pub const NONCE_LEN: usize = 12;

/// Length of the GCM authentication tag in bytes
pub const TAG_LEN: usize = 16;

/// Current envelope format version
pub const FORMAT_VERSION: u8 = 0x01;

/// Length of the envelope header (version + salt + nonce)
pub const HEADER_LEN: usize = 1 + SALT_LEN + NONCE_LEN;

/// Seal plaintext with a passphrase using a fresh random salt and nonce.
///
/// Returns the binary format: version(1) + salt(16) + nonce(12) +
/// ciphertext(len + 16).
pub fn seal(passphrase: &[u8], plaintext: &[u8], host: &dyn HostCrypto) -> Result<Vec<u8>> {
    let mut salt = [0u8; SALT_LEN];
    host.fill_random(&mut salt)?;

    let mut nonce = [0u8; NONCE_LEN];
    host.fill_random(&mut nonce)?;

    seal_with(passphrase, plaintext, &salt, &nonce)
}

/// Seal plaintext with a caller-provided salt and nonce.
///
/// This function is ONLY for tests that need reproducible output. NEVER use
/// this in production - always use `seal()`, which generates a random
/// salt/nonce pair per message.
pub fn seal_with(
    passphrase: &[u8],
    plaintext: &[u8],
    salt: &[u8; SALT_LEN],
    nonce: &[u8; NONCE_LEN],
) -> Result<Vec<u8>> {
    let key = kdf::derive_key(passphrase, salt);
    let cipher = Aes256Gcm::new(Key::<Aes256Gcm>::from_slice(&*key));

    let sealed = cipher
        .encrypt(Nonce::from_slice(nonce), plaintext)
        .map_err(|e| {
            SealnoteError::new(
                ErrorCategory::Internal,
                ErrorKind::EncryptionFailed,
                format!("AEAD seal failed: {}", e),
            )
        })?;

    let mut envelope = Vec::with_capacity(HEADER_LEN + sealed.len());
    envelope.push(FORMAT_VERSION);
    envelope.extend_from_slice(salt);
    envelope.extend_from_slice(nonce);
    envelope.extend_from_slice(&sealed);

    Ok(envelope)
}

/// Open a sealed envelope with a passphrase, returning the plaintext.
///
/// Truncation, corruption, tampering, and a wrong passphrase all fail with
/// the single collapsed [`ErrorKind::PassphraseOrDataInvalid`] error; only
/// an unrecognized version byte is reported distinctly, since the version is
/// public framing and reveals nothing about the passphrase.
pub fn open(passphrase: &[u8], envelope: &[u8]) -> Result<Vec<u8>> {
    // Anything shorter cannot hold the header plus a GCM tag.
    if envelope.len() < HEADER_LEN + TAG_LEN {
        return Err(SealnoteError::invalid_envelope());
    }

    let version = envelope[0];
    if version != FORMAT_VERSION {
        return Err(SealnoteError::new(
            ErrorCategory::User,
            ErrorKind::UnsupportedVersion,
            format!("unsupported envelope format version {}", version),
        ));
    }

    let salt: [u8; SALT_LEN] = envelope[1..1 + SALT_LEN]
        .try_into()
        .map_err(|_| SealnoteError::invalid_envelope())?;
    let nonce = &envelope[1 + SALT_LEN..HEADER_LEN];
    let sealed = &envelope[HEADER_LEN..];

    let key = kdf::derive_key(passphrase, &salt);
    let cipher = Aes256Gcm::new(Key::<Aes256Gcm>::from_slice(&*key));

    cipher
        .decrypt(Nonce::from_slice(nonce), sealed)
        .map_err(|_| SealnoteError::invalid_envelope())
}
