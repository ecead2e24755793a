// Reader session walkthrough against emulated Type 1 and Type 2 tags.

// This example plays the reader side of the air interface: it seals command
// frames, feeds them to the emulated tags and decodes the replies with the
// reader-side helpers.

use tagemu::prelude::*;

fn main() -> Result<()> {
    env_logger::init();

    println!("=== Type 1 tag ===");
    let profile = TagProfile::type1().with_uid([0x11, 0x22, 0x33, 0x44]);
    let mut tag = Type1Tag::from_profile(&profile)?;
    let uid = Uid::from_bytes([0x11, 0x22, 0x33, 0x44]);

    let cmd = Type1Command::ReadId { uid };
    let reply = tag.process_command(&cmd.to_frame());
    match Type1Response::decode(&cmd, &reply)? {
        Type1Response::ReadId { hr0, hr1, uid } => {
            println!("RID: HR0={:#04x} HR1={:#04x} UID={}", hr0, hr1, uid.to_hex());
        }
        other => println!("unexpected RID reply: {:?}", other),
    }

    let cmd = Type1Command::WriteErase {
        addr: 0x10,
        data: 0x42,
        uid,
    };
    let reply = tag.process_command(&cmd.to_frame());
    match Type1Response::decode(&cmd, &reply)? {
        Type1Response::Write { addr, value } => {
            println!("WRITE-E: byte {:#04x} now holds {:#04x}", addr, value);
        }
        other => println!("unexpected WRITE-E reply: {:?}", other),
    }

    let cmd = Type1Command::ReadAll { uid };
    let reply = tag.process_command(&cmd.to_frame());
    if let Type1Response::ReadAll { image, .. } = Type1Response::decode(&cmd, &reply)? {
        println!("RALL: first row {}", bytes_to_hex_spaced(&image[..8]));
    }

    // a command carrying somebody else's UID is ignored outright
    let stranger = Type1Command::ReadAll {
        uid: Uid::from_bytes([0xde, 0xad, 0xbe, 0xef]),
    };
    let reply = tag.process_command(&stranger.to_frame());
    println!("RALL with a foreign UID: {} reply bytes", reply.len());

    println!("\n=== Type 2 tag ===");
    let mut tag = create_tag_for(TagType::Type2);

    let write = Type2Command::WriteBlock {
        block: 5,
        data: [0xCA, 0xFE, 0xBA, 0xBE],
    };
    tagemu::protocol::responses::expect_ack(&tag.process_command(&write.to_frame()))?;
    println!("WRITE block 5 acknowledged");

    let read = Type2Command::ReadBlock { block: 4 };
    let reply = tag.process_command(&read.to_frame());
    let block = tagemu::protocol::responses::decode_read_block(&reply)?;
    println!("READ from block 4: {}", block.to_hex());

    // blocks 0 and 1 hold the UID area and never take writes
    let locked = Type2Command::WriteBlock {
        block: 0,
        data: [0xFF; 4],
    };
    match tagemu::protocol::responses::expect_ack(&tag.process_command(&locked.to_frame())) {
        Err(Error::Nacked) => println!("WRITE block 0 refused as expected"),
        other => println!("unexpected outcome for block 0: {:?}", other),
    }

    // a 64-byte tag has a single sector, so packet 1 is refused
    let select = Type2Command::SectorSelect1;
    match tagemu::protocol::responses::expect_ack(&tag.process_command(&select.to_frame())) {
        Err(Error::Nacked) => println!("SECTOR SELECT refused on a single-sector tag"),
        other => println!("unexpected outcome for sector select: {:?}", other),
    }

    let info = TagInfo::from(&*tag);
    println!(
        "\nsession summary: {} tag, {} bytes of memory, touched: {}",
        info.tag_type(),
        info.memory_len(),
        info.last_access().is_some(),
    );

    Ok(())
}
