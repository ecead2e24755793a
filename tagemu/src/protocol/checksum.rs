// tagemu-rs/tagemu/src/protocol/checksum.rs

/// Compute the ISO/IEC 14443-3 CRC_A over a byte buffer.
///
/// Bit-reflected polynomial 0x8408, initial register 0x6363, no final XOR.
/// A frame that carries its own 2-byte trailer (low byte first) computes
/// to zero, which is how inbound commands are validated.
pub fn crc16(data: &[u8]) -> u16 {
    let mut crc: u16 = 0x6363;
    for &byte in data {
        crc ^= u16::from(byte);
        for _ in 0..8 {
            if crc & 0x0001 != 0 {
                crc = (crc >> 1) ^ 0x8408;
            } else {
                crc >>= 1;
            }
        }
    }
    crc
}

/// Append the CRC trailer to a payload in place, low byte first.
pub fn append_checksum(buf: &mut Vec<u8>) {
    let crc = crc16(buf);
    buf.push((crc & 0xff) as u8);
    buf.push((crc >> 8) as u8);
}

/// True when a trailer-carrying frame checksums to zero.
pub fn verify(frame: &[u8]) -> bool {
    crc16(frame) == 0
}
