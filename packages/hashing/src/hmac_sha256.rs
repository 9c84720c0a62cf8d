//! HMAC-SHA256 as a [`Prf`].

use crate::prf::{check_output_len, Prf};
use crate::{HashError, Result};
use hmac::{Hmac, Mac};
use sha2::Sha256;

type HmacSha256Core = Hmac<Sha256>;

/// HMAC-SHA256 pseudorandom function (`hLen` = 32).
///
/// Keys of any length are accepted; keys longer than the SHA-256 block are
/// hashed first, as HMAC prescribes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HmacSha256;

impl HmacSha256 {
    /// Create the PRF
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Prf for HmacSha256 {
    const OUTPUT_LEN: usize = 32;

    fn compute_into(&self, key: &[u8], message: &[u8], out: &mut [u8]) -> Result<()> {
        check_output_len(Self::OUTPUT_LEN, out)?;

        let mut mac = HmacSha256Core::new_from_slice(key)
            .map_err(|e| HashError::mac_initialization(format!("HMAC-SHA256 key error: {e}")))?;
        mac.update(message);
        out.copy_from_slice(&mac.finalize().into_bytes());
        Ok(())
    }
}
