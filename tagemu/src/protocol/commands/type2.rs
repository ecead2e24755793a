// tagemu-rs/tagemu/src/protocol/commands/type2.rs

/// Encode READ BLOCK command payload (Type 2 opcode 0x30)
pub fn encode_read_block(block: u8) -> Vec<u8> {
    vec![0x30, block]
}

/// Encode WRITE BLOCK command payload (Type 2 opcode 0xA2)
pub fn encode_write_block(block: u8, data: [u8; 4]) -> Vec<u8> {
    let mut buf = Vec::with_capacity(6);
    buf.push(0xa2); // WRITE BLOCK command code
    buf.push(block);
    buf.extend_from_slice(&data);
    buf
}

/// Encode SECTOR SELECT packet 1 payload (Type 2 opcode 0xC2)
pub fn encode_sector_select_1() -> Vec<u8> {
    vec![0xc2]
}

/// Encode SECTOR SELECT packet 2 payload.
/// Packet 2 carries no opcode: the first byte is the sector index itself.
pub fn encode_sector_select_2(sector: u8) -> Vec<u8> {
    vec![sector]
}
