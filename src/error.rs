use std::error::Error as StdError;

use thiserror::Error;

/// Message carried by every collapsed decrypt failure.
///
/// Bad base64, truncated input, and authentication failure all surface with
/// this exact text so that callers (and log scrapers) cannot tell which of
/// the three occurred.
const INVALID_ENVELOPE_MSG: &str = "corrupt envelope, tampered-with data, or wrong passphrase";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum ErrorCategory {
    /// Any failure that cannot be confidently attributed to the caller.
    ///
    /// Use of Internal is never a guarantee the error is not, for example,
    /// due to a user error - merely that the code cannot confidently
    /// determine that.
    Internal,

    /// The caller provided invalid input or requested an action that is
    /// unsupported or impossible to complete.
    User,
}

/// Condition tags for callers that branch on the failure kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum ErrorKind {
    /// The host environment refused to perform cryptographic work, e.g.
    /// because the surrounding transport is not secured. Produced by
    /// [`HostCrypto`](crate::env::HostCrypto) implementations, checked
    /// before any cryptographic work begins.
    SecureContextRequired,
    /// Cryptographic randomness or primitives are unavailable on this host.
    CryptoUnavailable,
    /// Sealing a message failed. Never caused by the content of the message.
    EncryptionFailed,
    /// The envelope could not be opened: malformed transport encoding,
    /// truncated data, corruption, tampering, or a wrong passphrase. These
    /// causes are intentionally indistinguishable.
    PassphraseOrDataInvalid,
    /// The envelope carries a format version this build does not understand.
    UnsupportedVersion,
    /// A recipient id was supplied but the message is addressed to a
    /// different recipient (or to none at all).
    RecipientMismatch,
    /// The message appears to be addressed to a recipient, but no recipient
    /// id was supplied.
    RecipientMissing,
}

#[derive(Debug, Error)]
#[error("{msg}")]
pub struct SealnoteError {
    /// Broad error category, always provided.
    pub category: ErrorCategory,
    /// Specific condition tag for consumers that need to branch their
    /// behavior.
    pub kind: ErrorKind,
    #[source]
    source: Option<Box<dyn StdError + Send + Sync + 'static>>,
    msg: String,
}

impl SealnoteError {
    /// Creates a new error with a category, kind, and display message.
    pub fn new(category: ErrorCategory, kind: ErrorKind, msg: impl Into<String>) -> Self {
        Self {
            category,
            kind,
            source: None,
            msg: msg.into(),
        }
    }

    /// Creates a new error that retains the originating source error.
    pub fn with_source(
        category: ErrorCategory,
        kind: ErrorKind,
        msg: impl Into<String>,
        source: impl StdError + Send + Sync + 'static,
    ) -> Self {
        Self {
            category,
            kind,
            source: Some(Box::new(source)),
            msg: msg.into(),
        }
    }

    /// The canonical collapsed decrypt failure.
    ///
    /// Deliberately carries no source and a fixed message; attaching the
    /// underlying cause would let a caller distinguish a decode failure from
    /// an authentication failure, which is exactly the oracle this format
    /// avoids.
    pub fn invalid_envelope() -> Self {
        Self::new(
            ErrorCategory::User,
            ErrorKind::PassphraseOrDataInvalid,
            INVALID_ENVELOPE_MSG,
        )
    }

    /// The user-facing message carried by the error.
    pub fn message(&self) -> &str {
        &self.msg
    }

    /// Returns the preserved source error if present.
    pub fn source_error(&self) -> Option<&(dyn StdError + Send + Sync + 'static)> {
        self.source.as_deref()
    }

    /// Wraps the current error with a higher-level message while preserving
    /// the original as source.
    pub fn with_context(self, msg: impl Into<String>) -> Self {
        let category = self.category;
        let kind = self.kind;
        Self {
            category,
            kind,
            source: Some(Box::new(self)),
            msg: msg.into(),
        }
    }
}

/// Convenience alias.
pub type Result<T> = std::result::Result<T, SealnoteError>;
