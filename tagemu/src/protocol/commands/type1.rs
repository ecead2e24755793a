// tagemu-rs/tagemu/src/protocol/commands/type1.rs

use crate::types::Uid;

/// Encode RALL command payload (Type 1 opcode 0x00)
pub fn encode_read_all(uid: Uid) -> Vec<u8> {
    let mut buf = Vec::with_capacity(7);
    buf.push(0x00); // RALL command code
    buf.push(0x00); // address unused
    buf.push(0x00); // data unused
    buf.extend_from_slice(uid.as_bytes());
    buf
}

/// Encode READ command payload (Type 1 opcode 0x01)
pub fn encode_read_byte(addr: u8, uid: Uid) -> Vec<u8> {
    let mut buf = Vec::with_capacity(7);
    buf.push(0x01); // READ command code
    buf.push(addr);
    buf.push(0x00); // data unused for reads
    buf.extend_from_slice(uid.as_bytes());
    buf
}

/// Encode WRITE-E command payload (Type 1 opcode 0x53)
pub fn encode_write_erase(addr: u8, data: u8, uid: Uid) -> Vec<u8> {
    let mut buf = Vec::with_capacity(7);
    buf.push(0x53); // WRITE-E command code
    buf.push(addr);
    buf.push(data);
    buf.extend_from_slice(uid.as_bytes());
    buf
}

/// Encode WRITE-NE command payload (Type 1 opcode 0x1A)
pub fn encode_write_no_erase(addr: u8, data: u8, uid: Uid) -> Vec<u8> {
    let mut buf = Vec::with_capacity(7);
    buf.push(0x1a); // WRITE-NE command code
    buf.push(addr);
    buf.push(data);
    buf.extend_from_slice(uid.as_bytes());
    buf
}

/// Encode RID command payload (Type 1 opcode 0x78)
pub fn encode_read_id(uid: Uid) -> Vec<u8> {
    let mut buf = Vec::with_capacity(7);
    buf.push(0x78); // RID command code
    buf.push(0x00);
    buf.push(0x00);
    buf.extend_from_slice(uid.as_bytes());
    buf
}

/// Encode RSEG command payload (Type 1 dynamic opcode 0x10).
/// The segment index rides in the high nibble of the address byte.
pub fn encode_read_segment(segment: u8, uid: Uid) -> Vec<u8> {
    let mut buf = Vec::with_capacity(14);
    buf.push(0x10); // RSEG command code
    buf.push((segment & 0x0f) << 4);
    buf.extend_from_slice(&[0u8; 8]); // data unused
    buf.extend_from_slice(uid.as_bytes());
    buf
}

/// Encode READ8 command payload (Type 1 dynamic opcode 0x02)
pub fn encode_read8(block: u8, uid: Uid) -> Vec<u8> {
    let mut buf = Vec::with_capacity(14);
    buf.push(0x02); // READ8 command code
    buf.push(block);
    buf.extend_from_slice(&[0u8; 8]); // data unused
    buf.extend_from_slice(uid.as_bytes());
    buf
}

/// Encode WRITE-E8 command payload (Type 1 dynamic opcode 0x54)
pub fn encode_write_erase8(block: u8, data: [u8; 8], uid: Uid) -> Vec<u8> {
    let mut buf = Vec::with_capacity(14);
    buf.push(0x54); // WRITE-E8 command code
    buf.push(block);
    buf.extend_from_slice(&data);
    buf.extend_from_slice(uid.as_bytes());
    buf
}

/// Encode WRITE-NE8 command payload (Type 1 dynamic opcode 0x1B)
pub fn encode_write_no_erase8(block: u8, data: [u8; 8], uid: Uid) -> Vec<u8> {
    let mut buf = Vec::with_capacity(14);
    buf.push(0x1b); // WRITE-NE8 command code
    buf.push(block);
    buf.extend_from_slice(&data);
    buf.extend_from_slice(uid.as_bytes());
    buf
}
