//! The pseudorandom function seam used by key derivation.

use crate::{HashError, Result};

/// A keyed pseudorandom function with a fixed output length.
///
/// PBKDF2 only needs two things from its PRF: the output length `hLen`, which
/// fixes the block size, and a way to compute `PRF(key, message)`. Anything
/// that can provide both, HMAC over any digest for instance, can be plugged
/// into the engine without changes to it.
pub trait Prf {
    /// Length in bytes of every output (`hLen`).
    const OUTPUT_LEN: usize;

    /// Compute `PRF(key, message)` into `out`.
    ///
    /// # Errors
    ///
    /// Returns [`HashError::InvalidOutputLength`] if `out` is not exactly
    /// [`Self::OUTPUT_LEN`] bytes, or an implementation-specific error if the
    /// PRF cannot be keyed.
    fn compute_into(&self, key: &[u8], message: &[u8], out: &mut [u8]) -> Result<()>;

    /// Compute `PRF(key, message)` into a freshly allocated buffer.
    ///
    /// # Errors
    ///
    /// Propagates any error from [`Prf::compute_into`].
    fn compute(&self, key: &[u8], message: &[u8]) -> Result<Vec<u8>> {
        let mut out = vec![0u8; Self::OUTPUT_LEN];
        self.compute_into(key, message, &mut out)?;
        Ok(out)
    }

    /// The output length of this PRF, usable through a value.
    fn output_len(&self) -> usize {
        Self::OUTPUT_LEN
    }
}

/// Check an output buffer against a PRF's advertised length.
pub(crate) fn check_output_len(expected: usize, out: &[u8]) -> Result<()> {
    if out.len() == expected {
        Ok(())
    } else {
        Err(HashError::InvalidOutputLength {
            expected,
            actual: out.len(),
        })
    }
}
