use core::error;
use core::fmt;

/// Errors reported when constructing a [`ChaCha20`](crate::ChaCha20)
/// instance. Both are static length checks; once construction succeeds
/// no operation on the cipher can fail.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Error {
    /// The key was not exactly 32 bytes.
    InvalidKeyLength,
    /// The nonce was neither 8 nor 12 bytes.
    InvalidNonceLength,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidKeyLength => f.write_str("key must be 32 bytes"),
            Self::InvalidNonceLength => f.write_str("nonce must be 12 bytes or 8 bytes"),
        }
    }
}

impl error::Error for Error {}
