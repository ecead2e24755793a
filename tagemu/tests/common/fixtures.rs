// fixtures.rs — provides commonly used tag images and command frames

use tagemu::config::TagProfile;
use tagemu::constants::{TYPE1_LOCK_BYTE_0, TYPE1_LOCK_BYTE_1, TYPE1_SEGMENT_LEN};
use tagemu::tag::{Type1Tag, Type2Tag};
use tagemu::types::Uid;

pub fn sample_uid_bytes() -> [u8; 4] {
    [0x01, 0x02, 0x03, 0x04]
}

pub fn sample_uid() -> Uid {
    Uid::from_bytes(sample_uid_bytes())
}

/// Static Type 1 tag: patterned 120-byte image, lock bytes cleared,
/// carrying the sample UID.
pub fn static_tag() -> Type1Tag {
    tagemu::test_support::type1_tag_with_uid(sample_uid_bytes()).unwrap()
}

/// Dynamic Type 1 tag (HR0 low nibble != 1): two patterned segments.
pub fn dynamic_tag() -> Type1Tag {
    let mut image = tagemu::test_support::patterned_image(2 * TYPE1_SEGMENT_LEN);
    image[TYPE1_LOCK_BYTE_0] = 0x00;
    image[TYPE1_LOCK_BYTE_1] = 0x00;
    let profile = TagProfile::type1_dynamic()
        .with_memory(image)
        .with_uid(sample_uid_bytes());
    Type1Tag::from_profile(&profile).unwrap()
}

/// 64-byte Type 2 image with block 4 (bytes 16..32) filled with 0xAA.
pub fn highlighted_block_image() -> Vec<u8> {
    let mut image = vec![0u8; 64];
    for byte in &mut image[16..32] {
        *byte = 0xAA;
    }
    image
}

pub fn single_sector_type2_tag() -> Type2Tag {
    tagemu::test_support::type2_tag_with_image(highlighted_block_image()).unwrap()
}

/// Type 2 tag big enough for the two-packet SECTOR SELECT to succeed.
/// The pattern repeats every 256 bytes, so the first byte of each sector
/// gets a distinct marker to tell the windows apart.
pub fn multi_sector_type2_tag() -> Type2Tag {
    let mut image = tagemu::test_support::patterned_image(2048);
    image[0] = 0xD0;
    image[1024] = 0xD1;
    tagemu::test_support::type2_tag_with_image(image).unwrap()
}
