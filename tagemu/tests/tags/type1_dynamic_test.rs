#[path = "../common/mod.rs"]
mod common;

use tagemu::protocol::{Frame, Type1Command, Type1Response};
use tagemu::tag::TagModel;

#[test]
fn read_segment_returns_the_second_window() {
    let mut tag = common::fixtures::dynamic_tag();
    let uid = common::fixtures::sample_uid();
    let cmd = Type1Command::ReadSegment { segment: 1, uid };
    let reply = tag.process_command(&cmd.to_frame());

    match Type1Response::decode(&cmd, &reply).unwrap() {
        Type1Response::ReadSegment { segment, data } => {
            assert_eq!(segment, 1);
            let expected: Vec<u8> = (128..=255).map(|i| i as u8).collect();
            assert_eq!(data, expected);
        }
        other => panic!("expected ReadSegment, got {:?}", other),
    }
}

#[test]
fn read_segment_past_the_image_is_all_zeroes() {
    let mut tag = common::fixtures::dynamic_tag();
    let uid = common::fixtures::sample_uid();
    let cmd = Type1Command::ReadSegment { segment: 3, uid };
    let reply = tag.process_command(&cmd.to_frame());

    match Type1Response::decode(&cmd, &reply).unwrap() {
        Type1Response::ReadSegment { data, .. } => {
            assert_eq!(data, vec![0u8; 128]);
        }
        other => panic!("expected ReadSegment, got {:?}", other),
    }
}

#[test]
fn read8_returns_one_block() {
    let mut tag = common::fixtures::dynamic_tag();
    let uid = common::fixtures::sample_uid();
    let reply = tag.process_command(&Type1Command::Read8 { block: 0x05, uid }.to_frame());
    // block 5 covers addresses 40..48 of the patterned image
    assert_eq!(
        reply,
        Frame::encode(&[0x05, 40, 41, 42, 43, 44, 45, 46, 47])
    );
}

#[test]
fn write_erase8_then_read8_round_trip() {
    let mut tag = common::fixtures::dynamic_tag();
    let uid = common::fixtures::sample_uid();

    let cmd = Type1Command::WriteErase8 {
        block: 0x11,
        data: [0xA5; 8],
        uid,
    };
    let reply = tag.process_command(&cmd.to_frame());
    match Type1Response::decode(&cmd, &reply).unwrap() {
        Type1Response::Write8 { block, data } => {
            assert_eq!(block, 0x11);
            assert_eq!(data, [0xA5; 8]);
        }
        other => panic!("expected Write8, got {:?}", other),
    }

    let reply = tag.process_command(&Type1Command::Read8 { block: 0x11, uid }.to_frame());
    let mut expected = vec![0x11];
    expected.extend_from_slice(&[0xA5; 8]);
    assert_eq!(reply, Frame::encode(&expected));
}

#[test]
fn write_no_erase8_ors_into_the_stored_block() {
    let mut tag = common::fixtures::dynamic_tag();
    let uid = common::fixtures::sample_uid();

    // block 0x12 holds 0x90..0x97; OR with 0x0F makes every byte 0x9F
    let cmd = Type1Command::WriteNoErase8 {
        block: 0x12,
        data: [0x0F; 8],
        uid,
    };
    let reply = tag.process_command(&cmd.to_frame());
    match Type1Response::decode(&cmd, &reply).unwrap() {
        Type1Response::Write8 { block, data } => {
            assert_eq!(block, 0x12);
            assert_eq!(data, [0x9F; 8]);
        }
        other => panic!("expected Write8, got {:?}", other),
    }
}

#[test]
fn static_commands_still_work_on_a_dynamic_tag() {
    let mut tag = common::fixtures::dynamic_tag();
    let uid = common::fixtures::sample_uid();
    let reply = tag.process_command(&Type1Command::ReadByte { addr: 0x30, uid }.to_frame());
    assert_eq!(reply, Frame::encode(&[0x30, 0x30]));
}
