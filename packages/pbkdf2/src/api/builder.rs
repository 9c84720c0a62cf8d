//! PBKDF2 builder

use super::async_result::AsyncDerivedKey;
use crate::{engine, DerivedKey, Pbkdf2Error, Pbkdf2Params, Result};
use kdfkit_hashing::{HmacSha256, Prf};
use tokio::runtime::Handle;
use tokio::sync::oneshot;
use tracing::trace;
use zeroize::Zeroizing;

/// Main entry point for PBKDF2 derivation
pub struct Pbkdf2;

impl Pbkdf2 {
    /// PBKDF2-HMAC-SHA256
    #[must_use]
    pub fn hmac_sha256() -> Pbkdf2Builder<HmacSha256> {
        Pbkdf2Builder::new(HmacSha256)
    }

    /// PBKDF2 over a caller-supplied PRF
    #[must_use]
    pub fn with_prf<P: Prf>(prf: P) -> Pbkdf2Builder<P> {
        Pbkdf2Builder::new(prf)
    }
}

/// Configures and runs one PBKDF2 derivation.
///
/// Starts with an empty salt and [`Pbkdf2Params::default`].
pub struct Pbkdf2Builder<P> {
    prf: P,
    salt: Zeroizing<Vec<u8>>,
    params: Pbkdf2Params,
}

impl<P: Prf> Pbkdf2Builder<P> {
    /// Create a builder over `prf`
    #[must_use]
    pub fn new(prf: P) -> Self {
        Self {
            prf,
            salt: Zeroizing::new(Vec::new()),
            params: Pbkdf2Params::default(),
        }
    }

    /// Set the salt
    #[must_use]
    pub fn with_salt<S: Into<Vec<u8>>>(mut self, salt: S) -> Self {
        self.salt = Zeroizing::new(salt.into());
        self
    }

    /// Set the iteration count
    #[must_use]
    pub fn with_iterations(mut self, iterations: u32) -> Self {
        self.params.iterations = iterations;
        self
    }

    /// Set the derived key length in bytes
    #[must_use]
    pub fn with_output_len(mut self, output_len: usize) -> Self {
        self.params.output_len = output_len;
        self
    }

    /// Replace iteration count and output length at once
    #[must_use]
    pub fn with_params(mut self, params: Pbkdf2Params) -> Self {
        self.params = params;
        self
    }

    /// Current parameters
    #[must_use]
    pub fn params(&self) -> Pbkdf2Params {
        self.params
    }

    /// Derive on the calling thread
    ///
    /// # Errors
    ///
    /// See [`crate::derive`].
    pub fn derive_blocking<T: AsRef<[u8]>>(&self, password: T) -> Result<DerivedKey> {
        engine::derive(
            password.as_ref(),
            &self.salt,
            &self.prf,
            self.params.iterations,
            self.params.output_len,
        )
    }
}

impl<P: Prf + Send + 'static> Pbkdf2Builder<P> {
    /// Derive on the tokio blocking pool.
    ///
    /// Parameters are validated before anything is spawned; an invalid
    /// configuration resolves immediately to the error. Called outside a
    /// tokio runtime, the future resolves to [`Pbkdf2Error::Internal`].
    pub fn derive<T: Into<Vec<u8>>>(self, password: T) -> AsyncDerivedKey {
        let password = Zeroizing::new(password.into());
        let Self { prf, salt, params } = self;

        if let Err(e) = params.validate::<P>() {
            return AsyncDerivedKey::error(e);
        }

        let runtime = match Handle::try_current() {
            Ok(handle) => handle,
            Err(e) => {
                return AsyncDerivedKey::error(Pbkdf2Error::internal(format!(
                    "PBKDF2 derivation requires a tokio runtime: {e}"
                )))
            }
        };

        let (tx, rx) = oneshot::channel();

        trace!(
            iterations = params.iterations,
            output_len = params.output_len,
            "dispatching PBKDF2 derivation"
        );
        runtime.spawn_blocking(move || {
            let result = engine::derive(
                &password,
                &salt,
                &prf,
                params.iterations,
                params.output_len,
            );
            let _ = tx.send(result);
        });

        AsyncDerivedKey::new(rx)
    }
}

impl Default for Pbkdf2Builder<HmacSha256> {
    fn default() -> Self {
        Self::new(HmacSha256)
    }
}
