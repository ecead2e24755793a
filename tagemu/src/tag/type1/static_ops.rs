// tagemu-rs/tagemu/src/tag/type1/static_ops.rs

use super::Type1Tag;
use crate::constants::TYPE1_STATIC_MEM_LEN;
use log::debug;

/// Dispatch a 9-byte static-memory command. Returns the unsealed response
/// payload; empty means the tag stays silent.
pub(super) fn dispatch(tag: &mut Type1Tag, opcode: u8, addr: u8, data: u8) -> Vec<u8> {
    match opcode {
        0x00 => read_all(tag),                    // RALL
        0x01 => read_byte(tag, addr),             // READ
        0x53 => write_erase(tag, addr, data),     // WRITE-E
        0x1a => write_no_erase(tag, addr, data),  // WRITE-NE
        0x78 => read_id(tag),                     // RID
        other => {
            debug!("type 1: unknown static opcode {:#04x}", other);
            Vec::new()
        }
    }
}

fn read_all(tag: &Type1Tag) -> Vec<u8> {
    let mut out = Vec::with_capacity(2 + TYPE1_STATIC_MEM_LEN);
    out.push(tag.hr0);
    out.push(tag.hr1);
    out.extend_from_slice(&tag.memory.window(0, TYPE1_STATIC_MEM_LEN));
    out
}

fn read_byte(tag: &Type1Tag, addr: u8) -> Vec<u8> {
    // Addresses with the high bit set fall in reserved space and read as 0
    let value = if addr & 0x80 != 0 {
        0x00
    } else {
        tag.memory.byte(usize::from(addr))
    };
    vec![addr, value]
}

fn write_erase(tag: &mut Type1Tag, addr: u8, data: u8) -> Vec<u8> {
    let block = addr >> 3;
    if tag.block_locked(block, false) {
        debug!("type 1: write-e to locked block {:#04x}", block);
        return Vec::new();
    }
    if !tag.memory.write(usize::from(addr), &[data]) {
        debug!("type 1: write-e past the image end (addr {:#04x})", addr);
        return Vec::new();
    }
    vec![addr, data]
}

fn write_no_erase(tag: &mut Type1Tag, addr: u8, data: u8) -> Vec<u8> {
    let block = addr >> 3;
    if tag.block_locked(block, false) {
        debug!("type 1: write-ne to locked block {:#04x}", block);
        return Vec::new();
    }
    if !tag.memory.or_write(usize::from(addr), &[data]) {
        debug!("type 1: write-ne past the image end (addr {:#04x})", addr);
        return Vec::new();
    }
    // Echo the byte as stored, the OR of old and new
    vec![addr, tag.memory.byte(usize::from(addr))]
}

fn read_id(tag: &Type1Tag) -> Vec<u8> {
    let mut out = Vec::with_capacity(6);
    out.push(tag.hr0);
    out.push(tag.hr1);
    out.extend_from_slice(tag.uid().as_bytes());
    out
}
