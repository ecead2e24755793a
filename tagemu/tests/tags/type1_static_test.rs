#[path = "../common/mod.rs"]
mod common;

use tagemu::config::TagProfile;
use tagemu::protocol::{Frame, Type1Command, Type1Response};
use tagemu::tag::{TagModel, Type1Tag};

#[test]
fn read_byte_answers_with_address_echo_and_value() {
    // byte 0x05 pre-seeded since block 0 is not writable over the air
    let mut image = tagemu::test_support::patterned_image(120);
    image[0x05] = 0x42;
    image[0x70] = 0x00;
    image[0x71] = 0x00;
    let profile = TagProfile::type1()
        .with_memory(image)
        .with_uid(common::fixtures::sample_uid_bytes());
    let mut tag = Type1Tag::from_profile(&profile).unwrap();

    let uid = common::fixtures::sample_uid();
    let reply = tag.process_command(&Type1Command::ReadByte { addr: 0x05, uid }.to_frame());
    assert_eq!(reply, Frame::encode(&[0x05, 0x42]));

    match Type1Response::decode(&Type1Command::ReadByte { addr: 0x05, uid }, &reply).unwrap() {
        Type1Response::ReadByte { addr, value } => {
            assert_eq!(addr, 0x05);
            assert_eq!(value, 0x42);
        }
        other => panic!("expected ReadByte, got {:?}", other),
    }
}

#[test]
fn read_all_returns_header_and_whole_image() {
    let mut tag = common::fixtures::static_tag();
    let expected_image = tag.memory().as_bytes().to_vec();

    let uid = common::fixtures::sample_uid();
    let cmd = Type1Command::ReadAll { uid };
    let reply = tag.process_command(&cmd.to_frame());

    match Type1Response::decode(&cmd, &reply).unwrap() {
        Type1Response::ReadAll { hr0, hr1, image } => {
            assert_eq!(hr0, 0x11);
            assert_eq!(hr1, 0x00);
            assert_eq!(image, expected_image);
        }
        other => panic!("expected ReadAll, got {:?}", other),
    }
}

#[test]
fn read_id_returns_header_and_uid() {
    let mut tag = common::fixtures::static_tag();
    let uid = common::fixtures::sample_uid();
    let cmd = Type1Command::ReadId { uid };
    let reply = tag.process_command(&cmd.to_frame());

    match Type1Response::decode(&cmd, &reply).unwrap() {
        Type1Response::ReadId { hr0, hr1, uid } => {
            assert_eq!(hr0, 0x11);
            assert_eq!(hr1, 0x00);
            assert_eq!(uid, common::fixtures::sample_uid());
        }
        other => panic!("expected ReadId, got {:?}", other),
    }
}

#[test]
fn reserved_addresses_read_as_zero() {
    let mut tag = common::fixtures::static_tag();
    let uid = common::fixtures::sample_uid();
    let reply = tag.process_command(&Type1Command::ReadByte { addr: 0xF0, uid }.to_frame());
    assert_eq!(reply, Frame::encode(&[0xF0, 0x00]));
}

#[test]
fn write_erase_then_read_back() {
    let mut tag = common::fixtures::static_tag();
    let uid = common::fixtures::sample_uid();

    let reply = tag.process_command(
        &Type1Command::WriteErase {
            addr: 0x10,
            data: 0x42,
            uid,
        }
        .to_frame(),
    );
    assert_eq!(reply, Frame::encode(&[0x10, 0x42]));

    let reply = tag.process_command(&Type1Command::ReadByte { addr: 0x10, uid }.to_frame());
    assert_eq!(reply, Frame::encode(&[0x10, 0x42]));
}

#[test]
fn write_no_erase_ors_into_the_stored_byte() {
    let mut tag = common::fixtures::static_tag();
    let uid = common::fixtures::sample_uid();

    // patterned image holds 0x30 at address 0x30
    let reply = tag.process_command(
        &Type1Command::WriteNoErase {
            addr: 0x30,
            data: 0x0F,
            uid,
        }
        .to_frame(),
    );
    assert_eq!(reply, Frame::encode(&[0x30, 0x3F]));

    let reply = tag.process_command(&Type1Command::ReadByte { addr: 0x30, uid }.to_frame());
    assert_eq!(reply, Frame::encode(&[0x30, 0x3F]));
}

#[test]
fn wrong_uid_is_ignored() {
    let mut tag = common::fixtures::static_tag();
    let stranger = tagemu::types::Uid::from_bytes([9, 9, 9, 9]);
    let reply = tag.process_command(
        &Type1Command::ReadByte {
            addr: 0x05,
            uid: stranger,
        }
        .to_frame(),
    );
    assert!(reply.is_empty());
}

#[test]
fn corrupted_command_is_ignored() {
    let mut tag = common::fixtures::static_tag();
    let uid = common::fixtures::sample_uid();
    let frame = tagemu::test_support::corrupted_frame(&Type1Command::ReadAll { uid }.encode());
    assert!(tag.process_command(&frame).is_empty());
}

#[test]
fn static_tags_ignore_the_dynamic_command_set() {
    let mut tag = common::fixtures::static_tag();
    let uid = common::fixtures::sample_uid();
    let reply = tag.process_command(&Type1Command::Read8 { block: 0x02, uid }.to_frame());
    assert!(reply.is_empty());
}
