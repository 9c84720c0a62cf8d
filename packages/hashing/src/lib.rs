//! Pseudorandom function capability for kdfkit
//!
//! Key derivation in kdfkit is written against the [`Prf`] trait rather than a
//! concrete MAC. This crate provides that seam, the HMAC-SHA256 instantiation
//! ([`HmacSha256`]) and the hex coding used to display key material.

#![forbid(unsafe_code)]

pub mod error;
pub mod hex_coding;
pub mod hmac_sha256;
pub mod prf;

// Re-export error types
pub use error::{HashError, Result};

pub use hex_coding::HexCoding;
pub use hmac_sha256::HmacSha256;
pub use prf::Prf;
