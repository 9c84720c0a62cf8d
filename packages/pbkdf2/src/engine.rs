//! The PBKDF2 engine (RFC 8018 §5.2)
//!
//! Each output block `T_i` is the XOR of `iterations` chained PRF outputs:
//! `U_1 = PRF(P, S || BE32(i))`, `U_j = PRF(P, U_{j-1})`. Blocks are
//! concatenated and the result truncated to the requested length, so a
//! shorter key is always a prefix of a longer one.
//!
//! Runtime is linear in `iterations * ceil(output_len / hLen)`. No upper
//! bound is placed on `iterations`; callers that accept untrusted parameters
//! must cap it themselves.

use crate::{DerivedKey, Pbkdf2Error, Result};
use kdfkit_hashing::Prf;
use tracing::debug;
use zeroize::{Zeroize, Zeroizing};

/// Derive `output_len` bytes of key material from `password` and `salt`.
///
/// # Errors
///
/// Returns [`Pbkdf2Error::InvalidParameter`] if `iterations` is zero, if
/// `output_len` exceeds `(2^32 - 1) * hLen`, or if the PRF advertises a zero
/// output length. Failures of the PRF itself surface as [`Pbkdf2Error::Prf`].
pub fn derive<P: Prf>(
    password: &[u8],
    salt: &[u8],
    prf: &P,
    iterations: u32,
    output_len: usize,
) -> Result<DerivedKey> {
    check_parameters::<P>(iterations, output_len)?;

    let mut key = DerivedKey::zeroed(output_len);
    fill_blocks(password, salt, prf, iterations, key.as_mut_bytes())?;
    Ok(key)
}

/// Derive key material into a caller-supplied buffer; `out.len()` is the
/// output length.
///
/// On a parameter error `out` is left untouched. If the PRF fails partway
/// through, `out` is zeroed so no partial key is ever observable.
///
/// # Errors
///
/// Same conditions as [`derive`].
pub fn derive_into<P: Prf>(
    password: &[u8],
    salt: &[u8],
    prf: &P,
    iterations: u32,
    out: &mut [u8],
) -> Result<()> {
    check_parameters::<P>(iterations, out.len())?;

    fill_blocks(password, salt, prf, iterations, out).inspect_err(|_| out.zeroize())
}

/// Validate derivation parameters against the PRF's output length.
///
/// # Errors
///
/// See [`derive`].
pub fn check_parameters<P: Prf>(iterations: u32, output_len: usize) -> Result<()> {
    let h_len = P::OUTPUT_LEN;
    if h_len == 0 {
        return Err(Pbkdf2Error::invalid_parameter(
            "PRF output length must be non-zero",
        ));
    }
    if iterations == 0 {
        return Err(Pbkdf2Error::invalid_parameter(
            "PBKDF2 iterations must be at least 1",
        ));
    }

    let max_len = u128::from(u32::MAX) * h_len as u128;
    if output_len as u128 > max_len {
        return Err(Pbkdf2Error::invalid_parameter(format!(
            "PBKDF2 output length {output_len} exceeds (2^32 - 1) * {h_len} bytes"
        )));
    }

    Ok(())
}

fn fill_blocks<P: Prf>(
    password: &[u8],
    salt: &[u8],
    prf: &P,
    iterations: u32,
    out: &mut [u8],
) -> Result<()> {
    let h_len = P::OUTPUT_LEN;
    let blocks = out.len().div_ceil(h_len);
    debug!(iterations, output_len = out.len(), blocks, "deriving PBKDF2 key");

    let mut message = Zeroizing::new(Vec::with_capacity(salt.len() + 4));
    let mut u = Zeroizing::new(vec![0u8; h_len]);
    let mut next = Zeroizing::new(vec![0u8; h_len]);
    let mut t = Zeroizing::new(vec![0u8; h_len]);

    for (index, block) in out.chunks_mut(h_len).enumerate() {
        // Bounded by check_parameters: index + 1 <= 2^32 - 1
        let counter = u32::try_from(index + 1)
            .map_err(|_| Pbkdf2Error::internal("PBKDF2 block counter overflow"))?;

        message.clear();
        message.extend_from_slice(salt);
        message.extend_from_slice(&counter.to_be_bytes());

        prf.compute_into(password, &message, &mut u)?;
        t.copy_from_slice(&u);

        for _ in 1..iterations {
            prf.compute_into(password, &u, &mut next)?;
            std::mem::swap(&mut u, &mut next);
            xor_in_place(&mut t, &u);
        }

        block.copy_from_slice(&t[..block.len()]);
    }

    Ok(())
}

#[inline]
fn xor_in_place(acc: &mut [u8], other: &[u8]) {
    for (a, b) in acc.iter_mut().zip(other) {
        *a ^= b;
    }
}
