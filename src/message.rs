//! High-level message encryption and decryption
//!
//! These are the operations consumed by embedding applications: text in,
//! armored envelope out, and back. Each call is single-shot; passphrases
//! and derived keys live only for the duration of one call.

use crate::env::{HostCrypto, OsHostCrypto};
use crate::error::{ErrorCategory, ErrorKind, Result, SealnoteError};
use crate::{armor, binding, envelope};

/// Encrypt a text message under a passphrase, optionally addressed to a
/// recipient id, returning the armored envelope.
pub fn encrypt(text: &str, passphrase: &str, recipient: Option<&str>) -> Result<String> {
    encrypt_with(&OsHostCrypto, text, passphrase, recipient)
}

/// As [`encrypt`], with an explicit host capability.
pub fn encrypt_with(
    host: &dyn HostCrypto,
    text: &str,
    passphrase: &str,
    recipient: Option<&str>,
) -> Result<String> {
    host.ensure_available()?;

    if passphrase.is_empty() {
        return Err(SealnoteError::new(
            ErrorCategory::User,
            ErrorKind::EncryptionFailed,
            "refusing to encrypt with an empty passphrase",
        ));
    }

    let payload = binding::bind(text, recipient);
    let sealed = envelope::seal(passphrase.as_bytes(), payload.as_bytes(), host)?;
    Ok(armor::wrap(&sealed))
}

/// Decrypt an armored envelope under a passphrase, verifying the recipient
/// binding, and return the message text.
pub fn decrypt(envelope_text: &str, passphrase: &str, recipient: Option<&str>) -> Result<String> {
    decrypt_with(&OsHostCrypto, envelope_text, passphrase, recipient)
}

/// As [`decrypt`], with an explicit host capability.
pub fn decrypt_with(
    host: &dyn HostCrypto,
    envelope_text: &str,
    passphrase: &str,
    recipient: Option<&str>,
) -> Result<String> {
    host.ensure_available()?;

    let raw = armor::unwrap(envelope_text)?;
    let payload_bytes = envelope::open(passphrase.as_bytes(), &raw)?;

    // The encrypt side only ever seals UTF-8; a payload that authenticates
    // but does not decode came from a foreign producer and gets the same
    // collapsed error as any other unusable input.
    let payload =
        String::from_utf8(payload_bytes).map_err(|_| SealnoteError::invalid_envelope())?;

    binding::unbind(&payload, recipient)
}
