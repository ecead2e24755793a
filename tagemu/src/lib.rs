// tagemu-rs/tagemu/src/lib.rs

//! tagemu
//!
//! Pure Rust emulator for NFC Forum Type 1 and Type 2 tags.
#![warn(missing_docs)]

pub mod config;
pub mod constants;
pub mod error;
pub mod memory;
pub mod prelude;
pub mod protocol;
pub mod tag;
pub mod test_support;
pub mod types;
pub mod utils;

// Re-export common types at crate root so `crate::Error`, `crate::Result`,
// and the newtypes in `types` are available for consumers and for
// convenient `prelude` re-exports.
pub use crate::error::*;
pub use crate::types::*;

pub use prelude::*;
