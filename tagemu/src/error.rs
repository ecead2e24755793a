// tagemu-rs/tagemu/src/error.rs

use thiserror::Error;

/// 共通エラー型
#[derive(Error, Debug)]
pub enum Error {
    #[error("invalid packet length: expected {expected}, got {actual}")]
    InvalidLength { expected: usize, actual: usize },

    #[error("checksum mismatch: expected {expected:#06x}, got {actual:#06x}")]
    ChecksumMismatch { expected: u16, actual: u16 },
    #[error("frame format error: {0}")]
    FrameFormat(String),

    #[error("unexpected response code: expected {expected:#04x}, got {actual:#04x}")]
    UnexpectedResponse { expected: u8, actual: u8 },

    #[error("no reply: tag stayed silent")]
    NoReply,

    #[error("write rejected: tag answered nack")]
    Nacked,

    #[error("invalid tag profile: {0}")]
    InvalidProfile(String),
}

pub type Result<T> = std::result::Result<T, Error>;
