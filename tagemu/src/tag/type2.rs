// tagemu-rs/tagemu/src/tag/type2.rs

use crate::config::TagProfile;
use crate::constants::{
    TYPE2_ACK, TYPE2_BLOCK_LEN, TYPE2_NACK, TYPE2_READ_RESPONSE_LEN, TYPE2_SECTOR_BLOCKS,
    TYPE2_SECTOR_SPAN,
};
use crate::memory::TagMemory;
use crate::protocol::checksum::{append_checksum, verify};
use crate::types::TagType;
use crate::{Error, Result};
use log::debug;
use std::time::Instant;

/// Emulated NFC Forum Type 2 tag (4-byte block memory).
///
/// Unlike Type 1, a Type 2 tag carries session state: the current sector
/// and, strictly between the two packets of a SECTOR SELECT exchange, the
/// expectation that the next frame is a raw sector index. Any frame
/// resolves that expectation, even a corrupt one.
pub struct Type2Tag {
    memory: TagMemory,
    current_sector: u8,
    expect_packet2: bool,
    last_access: Option<Instant>,
}

impl Type2Tag {
    /// Single-sector tag over a zeroed default image.
    pub fn new() -> Self {
        let profile = TagProfile::type2();
        Self {
            memory: TagMemory::from_bytes(profile.memory),
            current_sector: 0,
            expect_packet2: false,
            last_access: None,
        }
    }

    /// Build a tag from a persisted profile. The image must cover the two
    /// always-locked blocks.
    pub fn from_profile(profile: &TagProfile) -> Result<Self> {
        if profile.memory.len() < 2 * TYPE2_BLOCK_LEN {
            return Err(Error::InvalidProfile(format!(
                "memory image holds {} bytes, type 2 needs at least {}",
                profile.memory.len(),
                2 * TYPE2_BLOCK_LEN
            )));
        }

        Ok(Self {
            memory: TagMemory::from_bytes(profile.memory.clone()),
            current_sector: 0,
            expect_packet2: false,
            last_access: None,
        })
    }

    pub fn memory(&self) -> &TagMemory {
        &self.memory
    }

    /// The sector block addresses are currently relative to.
    pub fn current_sector(&self) -> u8 {
        self.current_sector
    }

    fn absolute_block(&self, block: u8) -> usize {
        usize::from(self.current_sector) * TYPE2_SECTOR_BLOCKS + usize::from(block)
    }

    fn read_block(&self, block: u8) -> Vec<u8> {
        self.memory.window(
            self.absolute_block(block) * TYPE2_BLOCK_LEN,
            TYPE2_READ_RESPONSE_LEN,
        )
    }

    fn write_block(&mut self, block: u8, data: &[u8]) -> Vec<u8> {
        let abs = self.absolute_block(block);
        if abs <= 1 {
            debug!("type 2: write to always-locked block {}", abs);
            return vec![TYPE2_NACK];
        }
        if !self.memory.write(abs * TYPE2_BLOCK_LEN, data) {
            debug!("type 2: write past the image end (block {})", abs);
            return vec![TYPE2_NACK];
        }
        vec![TYPE2_ACK]
    }

    fn begin_sector_select(&mut self) -> Vec<u8> {
        if self.memory.len() > TYPE2_SECTOR_SPAN {
            self.expect_packet2 = true;
            vec![TYPE2_ACK]
        } else {
            debug!("type 2: sector select on a single-sector tag");
            vec![TYPE2_NACK]
        }
    }

    /// Packet 2 of SECTOR SELECT. Success is acknowledged passively, by
    /// staying silent.
    fn select_sector(&mut self, sector: u8) -> Vec<u8> {
        if usize::from(sector) * TYPE2_SECTOR_SPAN > self.memory.len() {
            debug!("type 2: sector {} out of range", sector);
            return vec![TYPE2_NACK];
        }
        self.current_sector = sector;
        Vec::new()
    }
}

impl crate::tag::TagModel for Type2Tag {
    fn process_command(&mut self, command: &[u8]) -> Vec<u8> {
        self.last_access = Some(Instant::now());

        // Whatever arrives next resolves a pending sector select sequence.
        let awaiting = self.expect_packet2;
        self.expect_packet2 = false;

        // A frame needs at least an opcode and its trailer to self-validate.
        if command.len() < 3 || !verify(command) {
            debug!("type 2: dropping frame with bad length or checksum");
            return Vec::new();
        }
        let payload = &command[..command.len() - 2];

        if awaiting {
            return self.select_sector(payload[0]);
        }

        match payload[0] {
            // READ BLOCK
            0x30 => match payload.get(1) {
                Some(&block) => {
                    let mut response = self.read_block(block);
                    append_checksum(&mut response);
                    response
                }
                None => {
                    debug!("type 2: truncated read block");
                    vec![TYPE2_NACK]
                }
            },
            // WRITE BLOCK
            0xa2 => {
                if payload.len() < 2 + TYPE2_BLOCK_LEN {
                    debug!("type 2: truncated write block");
                    return vec![TYPE2_NACK];
                }
                self.write_block(payload[1], &payload[2..2 + TYPE2_BLOCK_LEN])
            }
            // SECTOR SELECT packet 1
            0xc2 => self.begin_sector_select(),
            other => {
                debug!("type 2: unknown opcode {:#04x}", other);
                vec![TYPE2_NACK]
            }
        }
    }

    fn tag_type(&self) -> TagType {
        TagType::Type2
    }

    fn memory_len(&self) -> usize {
        self.memory.len()
    }

    fn last_access(&self) -> Option<Instant> {
        self.last_access
    }
}
