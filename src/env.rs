//! Host capability checks and randomness
//!
//! The original design performed implicit environment checks (secure
//! transport, crypto primitive availability) before any cryptographic work.
//! Here that becomes an explicit capability queried at call time: both
//! public operations call [`HostCrypto::ensure_available`] first and refuse
//! to start key derivation if the host cannot cooperate.

use crate::error::{ErrorCategory, ErrorKind, Result, SealnoteError};
use rand::RngCore;
use rand::rngs::OsRng;

/// Capability through which the cipher obtains randomness and verifies the
/// host environment before doing cryptographic work.
///
/// Embedders that gate cryptography on environmental preconditions (e.g. a
/// secured transport) can supply their own implementation whose
/// `ensure_available` fails with [`ErrorKind::SecureContextRequired`].
pub trait HostCrypto {
    /// Checks that the host can perform cryptographic work.
    ///
    /// Called at the top of both encrypt and decrypt; a failure here is a
    /// fatal precondition and is never retried by this crate.
    fn ensure_available(&self) -> Result<()>;

    /// Fills `buf` with cryptographically secure random bytes.
    fn fill_random(&self, buf: &mut [u8]) -> Result<()>;
}

/// Default capability backed by the operating system's secure random source.
pub struct OsHostCrypto;

impl OsHostCrypto {
    pub fn new() -> Self {
        Self
    }
}

impl Default for OsHostCrypto {
    fn default() -> Self {
        Self::new()
    }
}

impl HostCrypto for OsHostCrypto {
    fn ensure_available(&self) -> Result<()> {
        // A one-byte probe; if the OS cannot produce entropy there is no
        // point starting key derivation.
        let mut probe = [0u8; 1];
        self.fill_random(&mut probe)
    }

    fn fill_random(&self, buf: &mut [u8]) -> Result<()> {
        OsRng.try_fill_bytes(buf).map_err(|e| {
            SealnoteError::with_source(
                ErrorCategory::Internal,
                ErrorKind::CryptoUnavailable,
                "operating system randomness is unavailable",
                e,
            )
        })
    }
}
