// tagemu-rs/tagemu/src/tag/mod.rs

use crate::types::TagType;
use std::time::Instant;

pub trait TagModel {
    /// Process one complete command frame and return the response bytes.
    ///
    /// An empty response means the tag stays silent, which is how real
    /// contactless tags answer corrupted, misaddressed or unsupported
    /// frames; the reader simply retries. Implementations never panic and
    /// never return an error for command traffic.
    fn process_command(&mut self, command: &[u8]) -> Vec<u8>;

    /// The technology this tag emulates.
    fn tag_type(&self) -> TagType;

    /// Length of the memory image in bytes.
    fn memory_len(&self) -> usize;

    /// When the tag last processed a command, if it ever did. Lets a host
    /// running several emulated tags find the most recently touched one.
    fn last_access(&self) -> Option<Instant>;
}

pub mod info;
mod noop;

#[cfg(feature = "type1")]
pub mod type1;
#[cfg(feature = "type2")]
pub mod type2;

pub use info::TagInfo;
#[cfg(feature = "type1")]
pub use type1::Type1Tag;
#[cfg(feature = "type2")]
pub use type2::Type2Tag;

/// Factory to create an emulated tag for a TagType. Technologies compiled
/// out by feature flags fall back to a no-op tag that never replies.
pub fn create_tag_for(tag_type: TagType) -> Box<dyn TagModel> {
    match tag_type {
        #[cfg(feature = "type1")]
        TagType::Type1 => Box::new(type1::Type1Tag::new()),
        #[cfg(feature = "type2")]
        TagType::Type2 => Box::new(type2::Type2Tag::new()),
        #[allow(unreachable_patterns)]
        _ => Box::new(noop::NoopTag::new()),
    }
}
