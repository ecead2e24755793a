// tagemu-rs/tagemu/src/prelude.rs

pub use crate::config::TagProfile;
pub use crate::protocol::{Type1Command, Type1Response, Type2Command, Type2Reply};
pub use crate::tag::{TagInfo, TagModel, create_tag_for};
#[cfg(feature = "type1")]
pub use crate::tag::Type1Tag;
#[cfg(feature = "type2")]
pub use crate::tag::Type2Tag;
pub use crate::{BlockData, Error, Result, TagType, Uid};

// Re-export small utilities for convenience
pub use crate::utils::{bytes_to_hex, bytes_to_hex_spaced, parse_hex};
