//! Builder API for PBKDF2 derivation
//!
//! Entry point is [`Pbkdf2`]; configure a [`Pbkdf2Builder`] and finish with
//! `derive` (async, on the tokio blocking pool) or `derive_blocking`.

pub mod async_result;
pub mod builder;

pub use async_result::{AsyncDerivedKey, AsyncDerivedKeyWithError, AsyncDerivedKeyWithHandler};
pub use builder::{Pbkdf2, Pbkdf2Builder};
