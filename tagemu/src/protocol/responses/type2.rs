// tagemu-rs/tagemu/src/protocol/responses/type2.rs

use crate::constants::{TYPE2_ACK, TYPE2_NACK};
use crate::protocol::frame::Frame;
use crate::types::BlockData;
use crate::{Error, Result};

/// Classified Type 2 reply: the single-byte acknowledges or a
/// checksum-validated data payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Type2Reply {
    Ack,
    Nack,
    Data(Vec<u8>),
}

/// Classify a raw Type 2 reply.
///
/// Single-byte replies are ACK/NACK and carry no trailer; anything longer
/// must validate its trailer. Empty input means the tag stayed silent.
pub fn parse_reply(reply: &[u8]) -> Result<Type2Reply> {
    if reply.is_empty() {
        return Err(Error::NoReply);
    }
    if reply.len() == 1 {
        return match reply[0] {
            TYPE2_ACK => Ok(Type2Reply::Ack),
            TYPE2_NACK => Ok(Type2Reply::Nack),
            other => Err(Error::FrameFormat(format!(
                "unknown single-byte reply {:#04x}",
                other
            ))),
        };
    }
    Ok(Type2Reply::Data(Frame::decode(reply)?))
}

/// Decode a READ BLOCK reply into its 16-byte payload.
pub fn decode_read_block(reply: &[u8]) -> Result<BlockData> {
    match parse_reply(reply)? {
        Type2Reply::Data(payload) => BlockData::try_from(&payload[..]),
        Type2Reply::Nack => Err(Error::Nacked),
        Type2Reply::Ack => Err(Error::FrameFormat("ack where data was expected".into())),
    }
}

/// Require an ACK reply, typically after WRITE BLOCK or sector select
/// packet 1.
pub fn expect_ack(reply: &[u8]) -> Result<()> {
    match parse_reply(reply)? {
        Type2Reply::Ack => Ok(()),
        Type2Reply::Nack => Err(Error::Nacked),
        Type2Reply::Data(_) => Err(Error::FrameFormat("data where ack was expected".into())),
    }
}

/// Require the passive acknowledge of sector select packet 2: the tag
/// stays silent on success and answers NACK on an out-of-range sector.
pub fn expect_passive_ack(reply: &[u8]) -> Result<()> {
    if reply.is_empty() {
        return Ok(());
    }
    match parse_reply(reply)? {
        Type2Reply::Nack => Err(Error::Nacked),
        Type2Reply::Ack => Err(Error::FrameFormat("ack where silence was expected".into())),
        Type2Reply::Data(_) => Err(Error::FrameFormat("data where silence was expected".into())),
    }
}
