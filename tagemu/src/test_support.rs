//! Test support helpers intended for use by unit and integration tests.
//!
//! These helpers centralize common tag and frame setup so tests across the
//! crate and tests/ directory can reuse the same logic.
#![allow(dead_code)]

use crate::config::TagProfile;
use crate::protocol::frame::Frame;
use crate::Result;

/// Seal a payload into a transmission frame, then flip one bit so the
/// checksum no longer matches.
#[doc(hidden)]
pub fn corrupted_frame(payload: &[u8]) -> Vec<u8> {
    let mut frame = Frame::encode(payload);
    frame[0] ^= 0x01;
    frame
}

/// Deterministic memory fill: byte at offset `i` holds `i` truncated to
/// eight bits. Makes read windows self-describing in assertions.
#[doc(hidden)]
pub fn patterned_image(len: usize) -> Vec<u8> {
    (0..len).map(|i| (i & 0xff) as u8).collect()
}

/// Type 1 tag over a patterned static image carrying the given UID.
/// The lock bytes are cleared so every user block starts writable.
#[cfg(feature = "type1")]
#[doc(hidden)]
pub fn type1_tag_with_uid(uid: [u8; 4]) -> Result<crate::tag::Type1Tag> {
    let mut image = patterned_image(crate::constants::TYPE1_STATIC_MEM_LEN);
    image[crate::constants::TYPE1_LOCK_BYTE_0] = 0x00;
    image[crate::constants::TYPE1_LOCK_BYTE_1] = 0x00;
    let profile = TagProfile::type1().with_memory(image).with_uid(uid);
    crate::tag::Type1Tag::from_profile(&profile)
}

/// Type 2 tag over the given memory image.
#[cfg(feature = "type2")]
#[doc(hidden)]
pub fn type2_tag_with_image(image: Vec<u8>) -> Result<crate::tag::Type2Tag> {
    let profile = TagProfile::type2().with_memory(image);
    crate::tag::Type2Tag::from_profile(&profile)
}
