//! PBKDF2 parameter presets and configuration loading

use crate::engine::check_parameters;
use crate::Result;
use kdfkit_hashing::Prf;
use serde::{Deserialize, Serialize};

/// Iteration count and output length for a derivation.
///
/// Deserializes from configuration documents; fields that are absent take the
/// [`Pbkdf2Params::standard`] values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pbkdf2Params {
    /// Number of chained PRF applications per block
    #[serde(default = "default_iterations")]
    pub iterations: u32,
    /// Derived key length in bytes
    #[serde(default = "default_output_len")]
    pub output_len: usize,
}

fn default_iterations() -> u32 {
    600_000 // OWASP 2023 guidance for PBKDF2-HMAC-SHA256
}

fn default_output_len() -> usize {
    32
}

impl Pbkdf2Params {
    /// Create parameters. Nothing is checked until [`Pbkdf2Params::validate`]
    /// or a derivation runs.
    #[must_use]
    pub fn new(iterations: u32, output_len: usize) -> Self {
        Self {
            iterations,
            output_len,
        }
    }

    /// Production parameters for stored password verifiers
    #[must_use]
    pub fn standard() -> Self {
        Self::new(default_iterations(), default_output_len())
    }

    /// Lighter parameters for interactive unlock flows
    #[must_use]
    pub fn interactive() -> Self {
        Self::new(100_000, default_output_len())
    }

    /// Replace the iteration count
    #[must_use]
    pub fn with_iterations(mut self, iterations: u32) -> Self {
        self.iterations = iterations;
        self
    }

    /// Replace the output length
    #[must_use]
    pub fn with_output_len(mut self, output_len: usize) -> Self {
        self.output_len = output_len;
        self
    }

    /// Check these parameters against PRF `P` without deriving anything
    ///
    /// # Errors
    ///
    /// Returns [`crate::Pbkdf2Error::InvalidParameter`] under the same
    /// conditions as [`crate::derive`].
    pub fn validate<P: Prf>(&self) -> Result<()> {
        check_parameters::<P>(self.iterations, self.output_len)
    }

    /// Load parameters from a JSON document
    ///
    /// # Errors
    ///
    /// Returns [`crate::Pbkdf2Error::Config`] if the document is not valid
    /// JSON for this type.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Render parameters as JSON
    ///
    /// # Errors
    ///
    /// Returns [`crate::Pbkdf2Error::Config`] if serialization fails.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

impl Default for Pbkdf2Params {
    fn default() -> Self {
        Self::standard()
    }
}
