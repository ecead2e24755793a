// tagemu-rs/tagemu/src/constants.rs
//! Common protocol constants used across the crate

/// Type 1 static-memory command frame length: opcode + address + data + UID(4) + checksum(2)
pub const TYPE1_STATIC_FRAME_LEN: usize = 9;

/// Type 1 dynamic-memory command frame length: opcode + address + data(8) + UID(4) + checksum(2)
pub const TYPE1_DYNAMIC_FRAME_LEN: usize = 16;

/// Type 1 static memory image size in bytes (RALL window)
pub const TYPE1_STATIC_MEM_LEN: usize = 120;

/// Type 1 block size in bytes (lock granularity)
pub const TYPE1_BLOCK_LEN: usize = 8;

/// Type 1 dynamic segment size in bytes (RSEG window)
pub const TYPE1_SEGMENT_LEN: usize = 128;

/// Type 1 UID length in bytes (mirrored at the start of the memory image)
pub const TYPE1_UID_LEN: usize = 4;

/// Offsets of the two Type 1 lock bytes (block 0x0E, bytes 0 and 1)
pub const TYPE1_LOCK_BYTE_0: usize = 0x70;
pub const TYPE1_LOCK_BYTE_1: usize = 0x71;

/// Type 2 block size in bytes
pub const TYPE2_BLOCK_LEN: usize = 4;

/// Type 2 READ BLOCK response payload size in bytes (four consecutive blocks)
pub const TYPE2_READ_RESPONSE_LEN: usize = 16;

/// Type 2 sector span in bytes (256 blocks of 4 bytes)
pub const TYPE2_SECTOR_SPAN: usize = 1024;

/// Type 2 blocks per sector
pub const TYPE2_SECTOR_BLOCKS: usize = 256;

/// Type 2 default demonstration memory size in bytes
pub const TYPE2_DEFAULT_MEM_LEN: usize = 64;

/// Type 2 positive acknowledge (single byte, never checksum-trailed)
pub const TYPE2_ACK: u8 = 0x0A;

/// Type 2 negative acknowledge (single byte, never checksum-trailed)
pub const TYPE2_NACK: u8 = 0x05;

/// Length of the CRC trailer carried by command and data-response frames
pub const CHECKSUM_LEN: usize = 2;
// tagemu-rs/tagemu/src/constants.rs
