// tagemu-rs/tagemu/src/tag/type1/dynamic_ops.rs

use super::Type1Tag;
use crate::constants::{TYPE1_BLOCK_LEN, TYPE1_SEGMENT_LEN};
use log::debug;

/// Dispatch a 16-byte dynamic-memory command. Returns the unsealed
/// response payload; empty means the tag stays silent.
pub(super) fn dispatch(tag: &mut Type1Tag, opcode: u8, addr: u8, data: [u8; 8]) -> Vec<u8> {
    match opcode {
        0x10 => read_segment(tag, addr),           // RSEG
        0x02 => read8(tag, addr),                  // READ8
        0x54 => write_erase8(tag, addr, data),     // WRITE-E8
        0x1b => write_no_erase8(tag, addr, data),  // WRITE-NE8
        other => {
            debug!("type 1: unknown dynamic opcode {:#04x}", other);
            Vec::new()
        }
    }
}

fn read_segment(tag: &Type1Tag, addr: u8) -> Vec<u8> {
    // The segment index rides in the high nibble of the address byte
    let segment = usize::from((addr >> 4) & 0x0f);
    let mut out = Vec::with_capacity(1 + TYPE1_SEGMENT_LEN);
    out.push(addr);
    out.extend_from_slice(&tag.memory.window(segment * TYPE1_SEGMENT_LEN, TYPE1_SEGMENT_LEN));
    out
}

fn read8(tag: &Type1Tag, block: u8) -> Vec<u8> {
    let mut out = Vec::with_capacity(1 + TYPE1_BLOCK_LEN);
    out.push(block);
    out.extend_from_slice(
        &tag.memory
            .window(usize::from(block) * TYPE1_BLOCK_LEN, TYPE1_BLOCK_LEN),
    );
    out
}

fn write_erase8(tag: &mut Type1Tag, block: u8, data: [u8; 8]) -> Vec<u8> {
    if tag.block_locked(block, true) {
        debug!("type 1: write-e8 to locked block {:#04x}", block);
        return Vec::new();
    }
    if !tag
        .memory
        .write(usize::from(block) * TYPE1_BLOCK_LEN, &data)
    {
        debug!("type 1: write-e8 past the image end (block {:#04x})", block);
        return Vec::new();
    }

    let mut out = Vec::with_capacity(1 + TYPE1_BLOCK_LEN);
    out.push(block);
    out.extend_from_slice(&data);
    out
}

fn write_no_erase8(tag: &mut Type1Tag, block: u8, data: [u8; 8]) -> Vec<u8> {
    if tag.block_locked(block, true) {
        debug!("type 1: write-ne8 to locked block {:#04x}", block);
        return Vec::new();
    }
    let offset = usize::from(block) * TYPE1_BLOCK_LEN;
    if !tag.memory.or_write(offset, &data) {
        debug!(
            "type 1: write-ne8 past the image end (block {:#04x})",
            block
        );
        return Vec::new();
    }

    // Echo the block as stored, the OR of old and new
    let mut out = Vec::with_capacity(1 + TYPE1_BLOCK_LEN);
    out.push(block);
    out.extend_from_slice(&tag.memory.window(offset, TYPE1_BLOCK_LEN));
    out
}
