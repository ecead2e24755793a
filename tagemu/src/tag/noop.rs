// tagemu-rs/tagemu/src/tag/noop.rs

use crate::types::TagType;
use std::time::Instant;

/// Stand-in for an absent tag: swallows every command without replying.
pub struct NoopTag {
    last_access: Option<Instant>,
}

impl NoopTag {
    pub fn new() -> Self {
        Self { last_access: None }
    }
}

impl crate::tag::TagModel for NoopTag {
    fn process_command(&mut self, _command: &[u8]) -> Vec<u8> {
        self.last_access = Some(Instant::now());
        Vec::new()
    }

    fn tag_type(&self) -> TagType {
        TagType::default()
    }

    fn memory_len(&self) -> usize {
        0
    }

    fn last_access(&self) -> Option<Instant> {
        self.last_access
    }
}
