//! Error handling for the hashing module

use thiserror::Error;

/// Hashing-specific errors
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum HashError {
    /// The MAC could not be keyed
    #[error("MAC initialization error: {0}")]
    MacInitialization(String),

    /// The output buffer handed to a PRF does not match its advertised length
    #[error("Invalid PRF output buffer: expected {expected} bytes, got {actual}")]
    InvalidOutputLength {
        /// Advertised PRF output length
        expected: usize,
        /// Length of the buffer that was supplied
        actual: usize,
    },

    /// Input was not valid hexadecimal
    #[error("Invalid hex: {0}")]
    InvalidHex(String),
}

impl HashError {
    /// Create a `MacInitialization` error
    #[must_use]
    pub fn mac_initialization(msg: impl Into<String>) -> Self {
        Self::MacInitialization(msg.into())
    }
}

/// Result type for hashing operations
pub type Result<T> = std::result::Result<T, HashError>;
