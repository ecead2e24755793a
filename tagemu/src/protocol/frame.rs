// tagemu-rs/tagemu/src/protocol/frame.rs

use crate::constants::{CHECKSUM_LEN, TYPE1_DYNAMIC_FRAME_LEN, TYPE1_STATIC_FRAME_LEN};
use crate::protocol::checksum::{append_checksum, crc16, verify};
use crate::protocol::parser::le_u16_at;
use crate::types::Uid;
use crate::{Error, Result};

/// Trailer framing helper, the reader-side view of the wire format.
/// Format: [Payload(n)] [CRC low(1)] [CRC high(1)]
///
/// Commands sent to a tag and data replies received from one both carry
/// the trailer; single-byte ACK/NACK replies never do.
pub struct Frame {
    pub payload: Vec<u8>,
}

impl Frame {
    /// Seal a payload by appending the CRC trailer.
    pub fn encode(payload: &[u8]) -> Vec<u8> {
        let mut out = Vec::with_capacity(payload.len() + CHECKSUM_LEN);
        out.extend_from_slice(payload);
        append_checksum(&mut out);
        out
    }

    /// Validate the trailer of a received frame and return the payload.
    pub fn decode(frame: &[u8]) -> Result<Vec<u8>> {
        if frame.len() < CHECKSUM_LEN {
            return Err(Error::InvalidLength {
                expected: CHECKSUM_LEN,
                actual: frame.len(),
            });
        }

        let split = frame.len() - CHECKSUM_LEN;
        let payload = &frame[..split];
        let expected = crc16(payload);
        let actual = le_u16_at(frame, split)?;
        if expected != actual {
            return Err(Error::ChecksumMismatch { expected, actual });
        }

        Ok(payload.to_vec())
    }
}

/// Decoded view of an inbound Type 1 command frame. The frame length
/// selects the grammar: 9 bytes for static memory commands, 16 for the
/// dynamic memory command set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Type1Frame {
    /// [opcode] [addr] [data] [uid(4)] [crc(2)]
    Static {
        opcode: u8,
        addr: u8,
        data: u8,
        uid: Uid,
    },
    /// [opcode] [addr] [data(8)] [uid(4)] [crc(2)]
    Dynamic {
        opcode: u8,
        addr: u8,
        data: [u8; 8],
        uid: Uid,
    },
}

impl Type1Frame {
    /// Decode an inbound command frame. Returns None unless the length
    /// matches one of the two grammars and the trailer checksums to zero;
    /// a tag drops such frames without replying.
    pub fn decode(frame: &[u8]) -> Option<Self> {
        if !verify(frame) {
            return None;
        }

        match frame.len() {
            TYPE1_STATIC_FRAME_LEN => Some(Self::Static {
                opcode: frame[0],
                addr: frame[1],
                data: frame[2],
                uid: Uid::from_bytes([frame[3], frame[4], frame[5], frame[6]]),
            }),
            TYPE1_DYNAMIC_FRAME_LEN => {
                let mut data = [0u8; 8];
                data.copy_from_slice(&frame[2..10]);
                Some(Self::Dynamic {
                    opcode: frame[0],
                    addr: frame[1],
                    data,
                    uid: Uid::from_bytes([frame[10], frame[11], frame[12], frame[13]]),
                })
            }
            _ => None,
        }
    }

    /// The UID field the reader embedded in the command.
    pub fn uid(&self) -> Uid {
        match self {
            Self::Static { uid, .. } | Self::Dynamic { uid, .. } => *uid,
        }
    }

    /// The opcode byte.
    pub fn opcode(&self) -> u8 {
        match self {
            Self::Static { opcode, .. } | Self::Dynamic { opcode, .. } => *opcode,
        }
    }
}
