//! Hex coding for key material

use crate::{HashError, Result};

/// Hexadecimal encoding in the `0x`-prefixed form used when reporting keys
pub struct HexCoding;

impl HexCoding {
    /// Encode bytes as lowercase hex with a `0x` prefix
    #[must_use]
    pub fn encode(bytes: impl AsRef<[u8]>) -> String {
        format!("0x{}", hex::encode(bytes))
    }

    /// Decode hex, with or without a `0x` prefix
    ///
    /// # Errors
    ///
    /// Returns [`HashError::InvalidHex`] if the input has an odd number of
    /// digits or contains a non-hex character.
    pub fn decode(text: &str) -> Result<Vec<u8>> {
        let digits = text
            .strip_prefix("0x")
            .or_else(|| text.strip_prefix("0X"))
            .unwrap_or(text);
        hex::decode(digits).map_err(|e| HashError::InvalidHex(e.to_string()))
    }
}
