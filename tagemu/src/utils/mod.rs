//! Utilities for tagemu: small, reusable helpers used across the crate.
//!
//! Currently this is hex formatting and parsing, used by debug logging,
//! the examples, and hosts that load tag images from text dumps.

pub mod hex;

// Re-export the most common helpers at the `utils` module level so callers can
// use `crate::utils::bytes_to_hex(...)` etc if they prefer.
pub use hex::*;
