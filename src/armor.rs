//! Text transport encoding for sealed envelopes
//!
//! Envelopes travel as standard-alphabet base64 text with no surrounding
//! framing; the format version lives inside the binary envelope itself.

use crate::error::{Result, SealnoteError};
use base64::{Engine, engine::general_purpose::STANDARD};

/// Encode a binary envelope as transport text.
pub fn wrap(envelope: &[u8]) -> String {
    STANDARD.encode(envelope)
}

/// Decode transport text back into a binary envelope.
///
/// A decode failure surfaces as the same collapsed error as an
/// authentication failure; callers must not be able to tell which stage
/// rejected the input.
pub fn unwrap(text: &str) -> Result<Vec<u8>> {
    STANDARD
        .decode(text)
        .map_err(|_| SealnoteError::invalid_envelope())
}
