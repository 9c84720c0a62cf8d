//! Error handling for PBKDF2 derivation

use kdfkit_hashing::HashError;
use thiserror::Error;

/// PBKDF2-specific errors
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Pbkdf2Error {
    /// A derivation parameter is out of range
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// The pseudorandom function reported a failure
    #[error("PRF error: {0}")]
    Prf(#[from] HashError),

    /// Parameters could not be loaded from a configuration document
    #[error("Configuration error: {0}")]
    Config(String),

    /// Internal error occurred
    #[error("Internal error: {0}")]
    Internal(String),
}

impl Pbkdf2Error {
    /// Create an `InvalidParameter` error
    #[must_use]
    pub fn invalid_parameter(msg: impl Into<String>) -> Self {
        Self::InvalidParameter(msg.into())
    }

    /// Create an internal error
    #[must_use]
    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }

    /// Whether this error rejects the caller's parameters
    #[must_use]
    pub fn is_invalid_parameter(&self) -> bool {
        matches!(self, Self::InvalidParameter(_))
    }
}

impl From<serde_json::Error> for Pbkdf2Error {
    fn from(err: serde_json::Error) -> Self {
        Self::Config(err.to_string())
    }
}

/// Result type for PBKDF2 operations
pub type Result<T> = std::result::Result<T, Pbkdf2Error>;
