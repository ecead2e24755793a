// tagemu-rs/tagemu/src/config.rs
//! Persisted tag configuration.
//!
//! A [`TagProfile`] is the loadable form of a tag: the two header ROM bytes
//! and the raw memory image. Hosts keep profiles in whatever store they
//! like (the optional `serde` feature derives the usual traits) and hand
//! them to `Type1Tag::from_profile` / `Type2Tag::from_profile` at
//! construction time.

use crate::constants::{TYPE1_SEGMENT_LEN, TYPE1_STATIC_MEM_LEN, TYPE2_DEFAULT_MEM_LEN};
use crate::types::Uid;

/// タグ 1 枚分の永続化イメージ
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TagProfile {
    /// Header ROM byte 0. The high nibble advertises the technology
    /// (0x1 = Type 1) and the low nibble the memory model (0x1 = static
    /// only, anything else enables the dynamic command set).
    pub hr0: u8,
    /// Header ROM byte 1: stored and echoed, never interpreted.
    pub hr1: u8,
    /// Raw memory image.
    pub memory: Vec<u8>,
}

impl TagProfile {
    /// Static Type 1 profile: HR0 0x11 over a zeroed 120-byte image.
    pub fn type1() -> Self {
        Self {
            hr0: 0x11,
            hr1: 0x00,
            memory: vec![0u8; TYPE1_STATIC_MEM_LEN],
        }
    }

    /// Dynamic Type 1 profile: HR0 0x12 over a zeroed two-segment image.
    pub fn type1_dynamic() -> Self {
        Self {
            hr0: 0x12,
            hr1: 0x00,
            memory: vec![0u8; 2 * TYPE1_SEGMENT_LEN],
        }
    }

    /// Type 2 profile over a zeroed 64-byte image. Type 2 tags carry no
    /// header ROM on the wire, so both header bytes stay zero.
    pub fn type2() -> Self {
        Self {
            hr0: 0x00,
            hr1: 0x00,
            memory: vec![0u8; TYPE2_DEFAULT_MEM_LEN],
        }
    }

    pub fn with_header(mut self, hr0: u8, hr1: u8) -> Self {
        self.hr0 = hr0;
        self.hr1 = hr1;
        self
    }

    pub fn with_memory(mut self, memory: Vec<u8>) -> Self {
        self.memory = memory;
        self
    }

    /// Place a UID in the first four bytes of the image, growing a
    /// degenerate image to hold it.
    pub fn with_uid(mut self, uid: impl Into<Uid>) -> Self {
        if self.memory.len() < 4 {
            self.memory.resize(4, 0u8);
        }
        self.memory[..4].copy_from_slice(uid.into().as_bytes());
        self
    }

    /// The UID currently embedded in the image, if it holds one.
    pub fn uid(&self) -> Option<Uid> {
        Uid::try_from(self.memory.get(..4)?).ok()
    }
}
