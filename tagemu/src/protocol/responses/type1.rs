// tagemu-rs/tagemu/src/protocol/responses/type1.rs

use crate::constants::{TYPE1_BLOCK_LEN, TYPE1_SEGMENT_LEN, TYPE1_STATIC_MEM_LEN};
use crate::protocol::parser;
use crate::protocol::responses::open_reply;
use crate::types::Uid;
use crate::{Error, Result};

/// Decode a RALL reply.
/// Layout: hr0(1) + hr1(1) + memory image(120) + crc(2)
pub fn decode_read_all(reply: &[u8]) -> Result<(u8, u8, Vec<u8>)> {
    let payload = open_reply(reply)?;
    let expected = 2 + TYPE1_STATIC_MEM_LEN;
    if payload.len() != expected {
        return Err(Error::InvalidLength {
            expected,
            actual: payload.len(),
        });
    }
    Ok((payload[0], payload[1], payload[2..].to_vec()))
}

/// Decode a READ reply.
/// Layout: addr(1) + value(1) + crc(2); the address byte echoes the request.
pub fn decode_read_byte(reply: &[u8], addr: u8) -> Result<u8> {
    let payload = open_reply(reply)?;
    if payload.len() != 2 {
        return Err(Error::InvalidLength {
            expected: 2,
            actual: payload.len(),
        });
    }
    parser::expect_response_code(&payload, addr)?;
    Ok(payload[1])
}

/// Decode a WRITE-E / WRITE-NE reply, which echoes the address and the
/// byte now stored there.
pub fn decode_write(reply: &[u8], addr: u8) -> Result<u8> {
    // Same echo shape as a READ reply
    decode_read_byte(reply, addr)
}

/// Decode a RID reply.
/// Layout: hr0(1) + hr1(1) + uid(4) + crc(2)
pub fn decode_read_id(reply: &[u8]) -> Result<(u8, u8, Uid)> {
    let payload = open_reply(reply)?;
    if payload.len() != 6 {
        return Err(Error::InvalidLength {
            expected: 6,
            actual: payload.len(),
        });
    }
    let uid = parser::uid_at(&payload, 2)?;
    Ok((payload[0], payload[1], uid))
}

/// Decode a RSEG reply.
/// Layout: addr(1) + segment data(128) + crc(2); the echoed address byte
/// carries the segment index in its high nibble.
pub fn decode_read_segment(reply: &[u8], segment: u8) -> Result<Vec<u8>> {
    let payload = open_reply(reply)?;
    let expected = 1 + TYPE1_SEGMENT_LEN;
    if payload.len() != expected {
        return Err(Error::InvalidLength {
            expected,
            actual: payload.len(),
        });
    }
    parser::expect_response_code(&payload, (segment & 0x0f) << 4)?;
    Ok(payload[1..].to_vec())
}

/// Decode a READ8 reply.
/// Layout: block(1) + data(8) + crc(2)
pub fn decode_read8(reply: &[u8], block: u8) -> Result<[u8; 8]> {
    let payload = open_reply(reply)?;
    let expected = 1 + TYPE1_BLOCK_LEN;
    if payload.len() != expected {
        return Err(Error::InvalidLength {
            expected,
            actual: payload.len(),
        });
    }
    parser::expect_response_code(&payload, block)?;
    let mut data = [0u8; 8];
    data.copy_from_slice(&payload[1..]);
    Ok(data)
}

/// Decode a WRITE-E8 / WRITE-NE8 reply, which echoes the block index and
/// the 8 bytes now stored there.
pub fn decode_write8(reply: &[u8], block: u8) -> Result<[u8; 8]> {
    decode_read8(reply, block)
}
