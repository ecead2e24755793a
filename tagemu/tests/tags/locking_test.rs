#[path = "../common/mod.rs"]
mod common;

use tagemu::config::TagProfile;
use tagemu::constants::{TYPE1_LOCK_BYTE_0, TYPE1_LOCK_BYTE_1};
use tagemu::protocol::{Frame, Type1Command};
use tagemu::tag::{TagModel, Type1Tag};

fn tag_with_lock_bytes(lock0: u8, lock1: u8) -> Type1Tag {
    let mut image = tagemu::test_support::patterned_image(120);
    image[TYPE1_LOCK_BYTE_0] = lock0;
    image[TYPE1_LOCK_BYTE_1] = lock1;
    let profile = TagProfile::type1()
        .with_memory(image)
        .with_uid(common::fixtures::sample_uid_bytes());
    Type1Tag::from_profile(&profile).unwrap()
}

#[test]
fn reserved_blocks_never_accept_writes() {
    let mut tag = common::fixtures::static_tag();
    let uid = common::fixtures::sample_uid();

    // block 0 (UID), block 0x0D and block 0x0E (lock/reserved area)
    for addr in [0x06, 0x68, 0x72] {
        let reply = tag.process_command(
            &Type1Command::WriteErase {
                addr,
                data: 0xFF,
                uid,
            }
            .to_frame(),
        );
        assert!(reply.is_empty(), "write to {:#04x} was accepted", addr);
    }

    // the bytes are still what the pattern put there
    let reply = tag.process_command(&Type1Command::ReadByte { addr: 0x68, uid }.to_frame());
    assert_eq!(reply, Frame::encode(&[0x68, 0x68]));
}

#[test]
fn lock_byte_zero_covers_the_low_blocks() {
    // bit 2 of the first lock byte locks block 2
    let mut tag = tag_with_lock_bytes(0x04, 0x00);
    let uid = common::fixtures::sample_uid();

    let locked = tag.process_command(
        &Type1Command::WriteErase {
            addr: 0x10,
            data: 0x42,
            uid,
        }
        .to_frame(),
    );
    assert!(locked.is_empty());

    let unlocked = tag.process_command(
        &Type1Command::WriteErase {
            addr: 0x18,
            data: 0x42,
            uid,
        }
        .to_frame(),
    );
    assert_eq!(unlocked, Frame::encode(&[0x18, 0x42]));
}

#[test]
fn lock_byte_one_covers_the_high_blocks() {
    // bit 0 of the second lock byte locks block 8
    let mut tag = tag_with_lock_bytes(0x00, 0x01);
    let uid = common::fixtures::sample_uid();

    let locked = tag.process_command(
        &Type1Command::WriteErase {
            addr: 0x40,
            data: 0x42,
            uid,
        }
        .to_frame(),
    );
    assert!(locked.is_empty());

    // neighbouring block 9 stays writable
    let unlocked = tag.process_command(
        &Type1Command::WriteErase {
            addr: 0x48,
            data: 0x42,
            uid,
        }
        .to_frame(),
    );
    assert_eq!(unlocked, Frame::encode(&[0x48, 0x42]));
}

#[test]
fn no_erase_writes_respect_locks_too() {
    let mut tag = tag_with_lock_bytes(0x04, 0x00);
    let uid = common::fixtures::sample_uid();

    let reply = tag.process_command(
        &Type1Command::WriteNoErase {
            addr: 0x11,
            data: 0x0F,
            uid,
        }
        .to_frame(),
    );
    assert!(reply.is_empty());
}

#[test]
fn dynamic_writes_honour_the_reserved_blocks() {
    let mut tag = common::fixtures::dynamic_tag();
    let uid = common::fixtures::sample_uid();

    for block in [0x00, 0x0D, 0x0E, 0x0F] {
        let reply = tag.process_command(
            &Type1Command::WriteErase8 {
                block,
                data: [0xFF; 8],
                uid,
            }
            .to_frame(),
        );
        assert!(reply.is_empty(), "write to block {:#04x} was accepted", block);
    }
}

#[test]
fn lock_bits_do_not_reach_past_block_fifteen() {
    // every lock bit set, yet block 0x11 lies beyond the mask's range
    let mut image = tagemu::test_support::patterned_image(256);
    image[TYPE1_LOCK_BYTE_0] = 0xFF;
    image[TYPE1_LOCK_BYTE_1] = 0xFF;
    let profile = TagProfile::type1_dynamic()
        .with_memory(image)
        .with_uid(common::fixtures::sample_uid_bytes());
    let mut tag = Type1Tag::from_profile(&profile).unwrap();
    let uid = common::fixtures::sample_uid();

    let reply = tag.process_command(
        &Type1Command::WriteErase8 {
            block: 0x11,
            data: [0x55; 8],
            uid,
        }
        .to_frame(),
    );
    let mut expected = vec![0x11];
    expected.extend_from_slice(&[0x55; 8]);
    assert_eq!(reply, Frame::encode(&expected));
}

#[test]
fn writes_past_the_image_end_are_refused_whole() {
    let mut tag = common::fixtures::static_tag();
    let uid = common::fixtures::sample_uid();

    // address 0x78 is one past the 120-byte static image
    let reply = tag.process_command(
        &Type1Command::WriteErase {
            addr: 0x78,
            data: 0x42,
            uid,
        }
        .to_frame(),
    );
    assert!(reply.is_empty());
}
