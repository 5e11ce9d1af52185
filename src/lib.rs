//! sealnote - passphrase-based authenticated encryption for short text
//! messages, with optional recipient binding.
//!
//! A message is sealed under a key derived from the passphrase
//! (PBKDF2-HMAC-SHA-256, 100,000 iterations, fresh 16-byte salt) with
//! AES-256-GCM and a fresh 12-byte nonce, then armored as base64 text.
//! Decryption distinguishes binding problems (wrong or missing recipient
//! id) from everything else; wrong passphrase, corruption, and malformed
//! input are deliberately indistinguishable from each other.
//!
//! ```
//! let envelope = sealnote::encrypt("meet at noon", "correct horse", Some("user-1"))?;
//! let text = sealnote::decrypt(&envelope, "correct horse", Some("user-1"))?;
//! assert_eq!(text, "meet at noon");
//! # Ok::<(), sealnote::SealnoteError>(())
//! ```

#![forbid(unsafe_code)]

pub mod armor;
pub mod binding;
pub mod env;
pub mod envelope;
pub mod error;
pub mod kdf;
pub mod message;

pub use env::{HostCrypto, OsHostCrypto};
pub use error::{ErrorCategory, ErrorKind, Result, SealnoteError};
pub use message::{decrypt, decrypt_with, encrypt, encrypt_with};
