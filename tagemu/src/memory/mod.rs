// tagemu-rs/tagemu/src/memory/mod.rs
//! Bounded byte image backing an emulated tag.
//!
//! The image length is fixed at construction and never changes. Reads past
//! the end yield 0x00, matching how a real tag answers for unpopulated
//! addresses; writes that would run past the end are refused whole so a
//! command can never partially apply.

/// エミュレートするタグの EEPROM イメージ
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagMemory {
    bytes: Vec<u8>,
}

impl TagMemory {
    /// Create a zeroed image of `len` bytes.
    pub fn new(len: usize) -> Self {
        Self {
            bytes: vec![0u8; len],
        }
    }

    /// Take ownership of an existing image.
    pub fn from_bytes(bytes: Vec<u8>) -> Self {
        Self { bytes }
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Read one byte; addresses past the end read as 0x00.
    pub fn byte(&self, addr: usize) -> u8 {
        self.bytes.get(addr).copied().unwrap_or(0x00)
    }

    /// Read `len` bytes starting at `addr`, zero-padded past the end.
    pub fn window(&self, addr: usize, len: usize) -> Vec<u8> {
        (addr..addr + len).map(|a| self.byte(a)).collect()
    }

    /// Overwrite `data.len()` bytes at `addr`. Returns false (and leaves
    /// the image untouched) when any target byte would land past the end.
    pub fn write(&mut self, addr: usize, data: &[u8]) -> bool {
        let Some(end) = addr.checked_add(data.len()) else {
            return false;
        };
        if end > self.bytes.len() {
            return false;
        }
        self.bytes[addr..end].copy_from_slice(data);
        true
    }

    /// OR `data` into the bytes at `addr`: bits can be set, never cleared.
    /// Same whole-or-nothing bounds rule as `write`.
    pub fn or_write(&mut self, addr: usize, data: &[u8]) -> bool {
        let Some(end) = addr.checked_add(data.len()) else {
            return false;
        };
        if end > self.bytes.len() {
            return false;
        }
        for (b, d) in self.bytes[addr..end].iter_mut().zip(data) {
            *b |= d;
        }
        true
    }
}
