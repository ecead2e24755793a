//! Build a Type 2 tag from a hex dump and serve a short read session.
//!
//! Usage:
//!   cargo run -p tagemu --example tag_from_dump
//!
//! Run with RUST_LOG=debug to watch the tag drop the deliberately
//! corrupted frame near the end.

use anyhow::{Context, Result, anyhow};
use tagemu::prelude::{TagModel, TagProfile, Type2Command, Type2Tag, parse_hex};
use tagemu::protocol::responses::decode_read_block;

// 64-byte dump in the spaced format `bytes_to_hex_spaced` produces:
// UID area, capability container, then an NDEF URI record
const DUMP: &str = "\
    04 6e 1f fd 52 c8 42 80 58 48 00 00 e1 10 06 00 \
    03 1e d1 01 1a 55 01 74 61 67 65 6d 75 2e 65 78 \
    61 6d 70 6c 65 2f 64 75 6d 70 2f 74 79 70 65 32 \
    fe 00 00 00 00 00 00 00 00 00 00 00 00 00 00 00";

fn main() -> Result<()> {
    env_logger::init();

    let image = parse_hex(DUMP).map_err(|e| anyhow!(e)).context("parsing the dump")?;
    println!("loaded {} bytes", image.len());

    let profile = TagProfile::type2().with_memory(image);
    let mut tag = Type2Tag::from_profile(&profile)?;

    // walk the whole image four blocks at a time
    for block in (0..16).step_by(4) {
        let reply = tag.process_command(&Type2Command::ReadBlock { block }.to_frame());
        let data = decode_read_block(&reply).context("decoding a read reply")?;
        println!("block {:2}: {}  |{}|", block, data.to_hex(), data.to_ascii_safe());
    }

    // a frame damaged in transit gets no reply at all
    let mut frame = Type2Command::ReadBlock { block: 0 }.to_frame();
    frame[1] ^= 0x20;
    let reply = tag.process_command(&frame);
    println!("damaged frame got {} reply bytes", reply.len());

    Ok(())
}
