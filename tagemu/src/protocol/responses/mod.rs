// tagemu-rs/tagemu/src/protocol/responses/mod.rs

pub mod type1;
pub mod type2;

pub use type1::{
    decode_read8, decode_read_all, decode_read_byte, decode_read_id, decode_read_segment,
    decode_write, decode_write8,
};
pub use type2::{decode_read_block, expect_ack, expect_passive_ack, parse_reply, Type2Reply};

use crate::protocol::commands::Type1Command;
use crate::protocol::frame::Frame;
use crate::{Error, Result};

/// Strip the CRC trailer from a non-empty reply, treating an empty slice
/// as tag silence.
pub fn open_reply(reply: &[u8]) -> Result<Vec<u8>> {
    if reply.is_empty() {
        return Err(Error::NoReply);
    }
    Frame::decode(reply)
}

/// High-level Type 1 response enum. Per-operation decoders live in
/// `protocol::responses::type1` and are dispatched here against the
/// command that was sent.
#[derive(Debug, Clone)]
pub enum Type1Response {
    ReadAll {
        hr0: u8,
        hr1: u8,
        image: Vec<u8>,
    },
    ReadByte {
        addr: u8,
        value: u8,
    },
    Write {
        addr: u8,
        value: u8,
    },
    ReadId {
        hr0: u8,
        hr1: u8,
        uid: crate::types::Uid,
    },
    ReadSegment {
        segment: u8,
        data: Vec<u8>,
    },
    Read8 {
        block: u8,
        data: [u8; 8],
    },
    Write8 {
        block: u8,
        data: [u8; 8],
    },
}

impl Type1Response {
    /// Decode a raw reply for the command that elicited it.
    pub fn decode(cmd: &Type1Command, reply: &[u8]) -> Result<Self> {
        match cmd {
            Type1Command::ReadAll { .. } => {
                let (hr0, hr1, image) = type1::decode_read_all(reply)?;
                Ok(Self::ReadAll { hr0, hr1, image })
            }
            Type1Command::ReadByte { addr, .. } => {
                let value = type1::decode_read_byte(reply, *addr)?;
                Ok(Self::ReadByte { addr: *addr, value })
            }
            Type1Command::WriteErase { addr, .. } | Type1Command::WriteNoErase { addr, .. } => {
                let value = type1::decode_write(reply, *addr)?;
                Ok(Self::Write { addr: *addr, value })
            }
            Type1Command::ReadId { .. } => {
                let (hr0, hr1, uid) = type1::decode_read_id(reply)?;
                Ok(Self::ReadId { hr0, hr1, uid })
            }
            Type1Command::ReadSegment { segment, .. } => {
                let data = type1::decode_read_segment(reply, *segment)?;
                Ok(Self::ReadSegment {
                    segment: *segment,
                    data,
                })
            }
            Type1Command::Read8 { block, .. } => {
                let data = type1::decode_read8(reply, *block)?;
                Ok(Self::Read8 {
                    block: *block,
                    data,
                })
            }
            Type1Command::WriteErase8 { block, .. } | Type1Command::WriteNoErase8 { block, .. } => {
                let data = type1::decode_write8(reply, *block)?;
                Ok(Self::Write8 {
                    block: *block,
                    data,
                })
            }
        }
    }
}
