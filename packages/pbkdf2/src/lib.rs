//! # kdfkit PBKDF2
//!
//! PBKDF2 (RFC 8018 §5.2) over any [`Prf`], with HMAC-SHA256 as the stock
//! instantiation.
//!
//! ## Quick Start
//!
//! ```rust
//! use kdfkit_pbkdf2::{derive, HmacSha256};
//!
//! let key = derive(b"password", b"salt", &HmacSha256, 4096, 20)?;
//! assert_eq!(key.to_hex(), "c5e478d59288c841aa530db6845c4c8d962893a0");
//! # Ok::<(), kdfkit_pbkdf2::Pbkdf2Error>(())
//! ```
//!
//! The builder runs the same engine, either inline or on the tokio blocking
//! pool:
//!
//! ```rust,ignore
//! let key = Pbkdf2::hmac_sha256()
//!     .with_salt(b"salt".to_vec())
//!     .with_iterations(600_000)
//!     .with_output_len(32)
//!     .derive(b"password".to_vec())
//!     .await?;
//! ```

#![forbid(unsafe_code)]

pub mod api;
pub mod derived_key;
pub mod engine;
pub mod error;
pub mod params;

// Re-export core types
pub use derived_key::DerivedKey;
pub use engine::{derive, derive_into};
pub use error::{Pbkdf2Error, Result};
pub use params::Pbkdf2Params;

// Re-export the main API
pub use api::{
    AsyncDerivedKey, AsyncDerivedKeyWithError, AsyncDerivedKeyWithHandler, Pbkdf2, Pbkdf2Builder,
};

// The PRF seam lives in the hashing crate
pub use kdfkit_hashing::{HashError, HexCoding, HmacSha256, Prf};
