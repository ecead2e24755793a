// tagemu-rs/tagemu/src/protocol/commands/mod.rs

pub mod type1;
pub mod type2;

pub use type1::{
    encode_read8, encode_read_all, encode_read_byte, encode_read_id, encode_read_segment,
    encode_write_erase, encode_write_erase8, encode_write_no_erase, encode_write_no_erase8,
};
pub use type2::{
    encode_read_block, encode_sector_select_1, encode_sector_select_2, encode_write_block,
};

use crate::protocol::frame::Frame;
use crate::types::Uid;

/// High-level Type 1 command enum. New commands should be added here and
/// their encoder placed in `protocol::commands::type1`.
#[derive(Debug, Clone)]
pub enum Type1Command {
    /// RALL: read headers and the whole static memory image
    ReadAll { uid: Uid },
    /// READ: read a single byte
    ReadByte { addr: u8, uid: Uid },
    /// WRITE-E: erase-write a single byte
    WriteErase { addr: u8, data: u8, uid: Uid },
    /// WRITE-NE: OR-write a single byte
    WriteNoErase { addr: u8, data: u8, uid: Uid },
    /// RID: read headers and UID
    ReadId { uid: Uid },
    /// RSEG: read one 128-byte segment (dynamic memory only)
    ReadSegment { segment: u8, uid: Uid },
    /// READ8: read one 8-byte block (dynamic memory only)
    Read8 { block: u8, uid: Uid },
    /// WRITE-E8: erase-write one 8-byte block (dynamic memory only)
    WriteErase8 { block: u8, data: [u8; 8], uid: Uid },
    /// WRITE-NE8: OR-write one 8-byte block (dynamic memory only)
    WriteNoErase8 { block: u8, data: [u8; 8], uid: Uid },
}

impl Type1Command {
    /// Return the opcode byte as defined by the Type 1 command set.
    pub fn opcode(&self) -> u8 {
        match self {
            Self::ReadAll { .. } => 0x00,
            Self::ReadByte { .. } => 0x01,
            Self::WriteErase { .. } => 0x53,
            Self::WriteNoErase { .. } => 0x1a,
            Self::ReadId { .. } => 0x78,
            Self::ReadSegment { .. } => 0x10,
            Self::Read8 { .. } => 0x02,
            Self::WriteErase8 { .. } => 0x54,
            Self::WriteNoErase8 { .. } => 0x1b,
        }
    }

    /// Encode the command into the raw payload (opcode + params + UID),
    /// without the CRC trailer.
    pub fn encode(&self) -> Vec<u8> {
        match self {
            Self::ReadAll { uid } => encode_read_all(*uid),
            Self::ReadByte { addr, uid } => encode_read_byte(*addr, *uid),
            Self::WriteErase { addr, data, uid } => encode_write_erase(*addr, *data, *uid),
            Self::WriteNoErase { addr, data, uid } => encode_write_no_erase(*addr, *data, *uid),
            Self::ReadId { uid } => encode_read_id(*uid),
            Self::ReadSegment { segment, uid } => encode_read_segment(*segment, *uid),
            Self::Read8 { block, uid } => encode_read8(*block, *uid),
            Self::WriteErase8 { block, data, uid } => encode_write_erase8(*block, *data, *uid),
            Self::WriteNoErase8 { block, data, uid } => {
                encode_write_no_erase8(*block, *data, *uid)
            }
        }
    }

    /// Encode and seal into the complete 9- or 16-byte wire frame.
    pub fn to_frame(&self) -> Vec<u8> {
        Frame::encode(&self.encode())
    }
}

/// High-level Type 2 command enum.
#[derive(Debug, Clone)]
pub enum Type2Command {
    /// READ BLOCK: read 16 bytes (four blocks) starting at a block
    ReadBlock { block: u8 },
    /// WRITE BLOCK: write one 4-byte block
    WriteBlock { block: u8, data: [u8; 4] },
    /// SECTOR SELECT packet 1: announce a sector change
    SectorSelect1,
    /// SECTOR SELECT packet 2: the new sector index, sent after packet 1
    /// was acknowledged
    SectorSelect2 { sector: u8 },
}

impl Type2Command {
    /// Return the opcode byte, or None for sector select packet 2 whose
    /// first byte is the sector index rather than an opcode.
    pub fn opcode(&self) -> Option<u8> {
        match self {
            Self::ReadBlock { .. } => Some(0x30),
            Self::WriteBlock { .. } => Some(0xa2),
            Self::SectorSelect1 => Some(0xc2),
            Self::SectorSelect2 { .. } => None,
        }
    }

    /// Encode the command into the raw payload without the CRC trailer.
    pub fn encode(&self) -> Vec<u8> {
        match self {
            Self::ReadBlock { block } => encode_read_block(*block),
            Self::WriteBlock { block, data } => encode_write_block(*block, *data),
            Self::SectorSelect1 => encode_sector_select_1(),
            Self::SectorSelect2 { sector } => encode_sector_select_2(*sector),
        }
    }

    /// Encode and seal into the complete wire frame.
    pub fn to_frame(&self) -> Vec<u8> {
        Frame::encode(&self.encode())
    }
}
