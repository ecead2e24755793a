use crate::tag::TagModel;
use crate::types::TagType;
use std::time::Instant;

/// Compact information describing an emulated tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TagInfo {
    pub tag_type: TagType,
    pub memory_len: usize,
    pub last_access: Option<Instant>,
}

impl TagInfo {
    pub fn new(tag_type: TagType, memory_len: usize, last_access: Option<Instant>) -> Self {
        Self {
            tag_type,
            memory_len,
            last_access,
        }
    }

    pub fn tag_type(&self) -> TagType {
        self.tag_type
    }

    pub fn memory_len(&self) -> usize {
        self.memory_len
    }

    pub fn last_access(&self) -> Option<Instant> {
        self.last_access
    }
}

impl From<&dyn TagModel> for TagInfo {
    fn from(tag: &dyn TagModel) -> Self {
        TagInfo::new(tag.tag_type(), tag.memory_len(), tag.last_access())
    }
}
