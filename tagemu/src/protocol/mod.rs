// tagemu-rs/tagemu/src/protocol/mod.rs

pub mod checksum;
pub mod commands;
pub mod frame;
pub mod parser;
pub mod responses;

pub use checksum::{append_checksum, crc16, verify};
pub use commands::*;
pub use frame::{Frame, Type1Frame};
pub use responses::*;
