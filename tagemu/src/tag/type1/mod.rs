// tagemu-rs/tagemu/src/tag/type1/mod.rs

mod dynamic_ops;
mod static_ops;

use crate::config::TagProfile;
use crate::constants::{TYPE1_LOCK_BYTE_0, TYPE1_LOCK_BYTE_1, TYPE1_STATIC_MEM_LEN};
use crate::memory::TagMemory;
use crate::protocol::checksum::append_checksum;
use crate::protocol::frame::Type1Frame;
use crate::types::{TagType, Uid};
use crate::{Error, Result};
use log::debug;
use std::time::Instant;

/// Emulated NFC Forum Type 1 tag (Topaz-style byte-addressed memory).
///
/// Static tags answer the 9-byte command grammar over a 120-byte image;
/// tags whose HR0 advertises dynamic memory additionally answer the
/// 16-byte grammar (RSEG/READ8/WRITE-E8/WRITE-NE8). The tag keeps no
/// session state between commands.
pub struct Type1Tag {
    hr0: u8,
    hr1: u8,
    memory: TagMemory,
    last_access: Option<Instant>,
}

impl Type1Tag {
    /// Static-memory tag over a zeroed default image.
    pub fn new() -> Self {
        let profile = TagProfile::type1();
        Self {
            hr0: profile.hr0,
            hr1: profile.hr1,
            memory: TagMemory::from_bytes(profile.memory),
            last_access: None,
        }
    }

    /// Build a tag from a persisted profile, validating that the header
    /// advertises Type 1 and the image covers the static memory map.
    pub fn from_profile(profile: &TagProfile) -> Result<Self> {
        if profile.hr0 >> 4 != 0x1 {
            return Err(Error::InvalidProfile(format!(
                "hr0 {:#04x} does not advertise a type 1 tag",
                profile.hr0
            )));
        }
        if profile.memory.len() < TYPE1_STATIC_MEM_LEN {
            return Err(Error::InvalidProfile(format!(
                "memory image holds {} bytes, type 1 needs at least {}",
                profile.memory.len(),
                TYPE1_STATIC_MEM_LEN
            )));
        }

        Ok(Self {
            hr0: profile.hr0,
            hr1: profile.hr1,
            memory: TagMemory::from_bytes(profile.memory.clone()),
            last_access: None,
        })
    }

    pub fn hr0(&self) -> u8 {
        self.hr0
    }

    pub fn hr1(&self) -> u8 {
        self.hr1
    }

    /// The tag's own UID, mirrored in the first four memory bytes.
    pub fn uid(&self) -> Uid {
        Uid::from_bytes([
            self.memory.byte(0),
            self.memory.byte(1),
            self.memory.byte(2),
            self.memory.byte(3),
        ])
    }

    pub fn memory(&self) -> &TagMemory {
        &self.memory
    }

    /// HR0 low nibble 0x1 marks a static-only tag; anything else enables
    /// the dynamic command set.
    fn supports_dynamic(&self) -> bool {
        self.hr0 & 0x0f != 0x1
    }

    /// 16-bit lock mask from the two lock bytes in block 0x0E: bit n locks
    /// block n, byte 0x70 covering blocks 0-7 and byte 0x71 blocks 8-15.
    fn lock_mask(&self) -> u16 {
        u16::from(self.memory.byte(TYPE1_LOCK_BYTE_1)) << 8
            | u16::from(self.memory.byte(TYPE1_LOCK_BYTE_0))
    }

    /// Blocks 0 (UID), 0x0D and 0x0E (reserved/lock) never accept writes;
    /// dynamic commands also protect 0x0F. Blocks past the mask's 16 bits
    /// are only ever lock-mask-free.
    fn block_locked(&self, block: u8, dynamic: bool) -> bool {
        if block == 0x00 || block == 0x0d || block == 0x0e {
            return true;
        }
        if dynamic && block == 0x0f {
            return true;
        }
        block < 16 && self.lock_mask() & (1u16 << block) != 0
    }
}

impl crate::tag::TagModel for Type1Tag {
    fn process_command(&mut self, command: &[u8]) -> Vec<u8> {
        self.last_access = Some(Instant::now());

        let Some(frame) = Type1Frame::decode(command) else {
            debug!("type 1: dropping frame with bad length or checksum");
            return Vec::new();
        };

        if frame.uid() != self.uid() {
            debug!(
                "type 1: dropping frame addressed to uid {}",
                frame.uid().to_hex()
            );
            return Vec::new();
        }

        let mut response = match frame {
            Type1Frame::Static {
                opcode, addr, data, ..
            } => static_ops::dispatch(self, opcode, addr, data),
            Type1Frame::Dynamic {
                opcode, addr, data, ..
            } => {
                if !self.supports_dynamic() {
                    debug!(
                        "type 1: dynamic command {:#04x} on a static-only tag",
                        opcode
                    );
                    return Vec::new();
                }
                dynamic_ops::dispatch(self, opcode, addr, data)
            }
        };

        if !response.is_empty() {
            append_checksum(&mut response);
        }
        response
    }

    fn tag_type(&self) -> TagType {
        TagType::Type1
    }

    fn memory_len(&self) -> usize {
        self.memory.len()
    }

    fn last_access(&self) -> Option<Instant> {
        self.last_access
    }
}
