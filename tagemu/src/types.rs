// tagemu-rs/tagemu/src/types.rs

use crate::Error;
use derive_more::{Display, From};
use std::convert::TryFrom;

/// UID - Newtype Pattern (4 バイト)
///
/// Type 1 tags mirror these four bytes at the start of the memory image and
/// check them against the UID field of every command frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, From)]
pub struct Uid([u8; 4]);

impl Uid {
    pub fn from_bytes(bytes: [u8; 4]) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; 4] {
        &self.0
    }

    pub fn to_hex(&self) -> String {
        crate::utils::bytes_to_hex(self.as_bytes())
    }
}

impl TryFrom<&[u8]> for Uid {
    type Error = Error;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        if bytes.len() != 4 {
            return Err(Error::InvalidLength {
                expected: 4,
                actual: bytes.len(),
            });
        }
        let mut arr = [0u8; 4];
        arr.copy_from_slice(&bytes[..4]);
        Ok(Self(arr))
    }
}

/// BlockData (16 バイト)
///
/// Payload of a Type 2 READ BLOCK response: four consecutive 4-byte blocks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockData([u8; 16]);

impl BlockData {
    pub fn from_bytes(bytes: [u8; 16]) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; 16] {
        &self.0
    }

    pub fn to_hex(&self) -> String {
        crate::utils::bytes_to_hex_spaced(self.as_bytes())
    }

    pub fn to_ascii_safe(&self) -> String {
        self.0
            .iter()
            .map(|&b| {
                if b.is_ascii_graphic() || b == b' ' {
                    b as char
                } else {
                    '.'
                }
            })
            .collect()
    }
}

impl TryFrom<&[u8]> for BlockData {
    type Error = Error;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        if bytes.len() != 16 {
            return Err(Error::InvalidLength {
                expected: 16,
                actual: bytes.len(),
            });
        }
        let mut arr = [0u8; 16];
        arr.copy_from_slice(&bytes[..16]);
        Ok(Self(arr))
    }
}

/// TagType
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum TagType {
    /// NFC Forum Type 1, byte-addressed static or dynamic memory
    #[display(fmt = "type 1")]
    Type1,
    /// NFC Forum Type 2, 4-byte block memory
    #[display(fmt = "type 2")]
    Type2,
}

impl TagType {
    /// Map the SENS_RES (ATQA) value a reader sees during discovery to the
    /// tag technology it advertises.
    pub fn from_sens_res(sens_res: u16) -> Option<Self> {
        match sens_res {
            0x000c => Some(Self::Type1),
            0x0044 => Some(Self::Type2),
            _ => None,
        }
    }
}

impl Default for TagType {
    fn default() -> Self {
        // Default to Type 2 as the most common technology in the wild.
        TagType::Type2
    }
}
