//! Run a 16-slot inventory against the simulated chip and print what was
//! found. Shows the call sequence a firmware would use with a real
//! `SpiTransport`.
//!
//! Usage:
//!   RUST_LOG=libpn5180=debug cargo run -p libpn5180 --example mock_inventory

use libpn5180::prelude::*;
use libpn5180::test_support::{mock_with_tags, tag_frame};

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let mock = mock_with_tags(&[
        (3, tag_frame(0x00, [0x1A, 0x2B, 0x3C, 0x4D, 0x00, 0x01, 0x04, 0xE0])),
        (9, tag_frame(0x00, [0x99, 0x88, 0x77, 0x66, 0x55, 0x44, 0x07, 0xE0])),
    ]);
    let mut reader = DeviceBuilder::new(mock).build()?;

    println!(
        "PN5180 product {} firmware {} eeprom {}",
        reader.product_version()?,
        reader.firmware_version()?,
        reader.eeprom_version()?
    );

    let trigger = ScanTrigger::new();
    let mut readers = ReaderSet::new(trigger.clone());
    readers.push(reader);

    // a button task would do this
    trigger.request();

    for scan in readers.poll().unwrap_or_default() {
        let inventory = scan.result?;
        println!("reader {}: {}, {} tag(s)", scan.reader, inventory.outcome(), inventory.count());
        for (resp, tag) in inventory.responses().iter().zip(inventory.tags()) {
            match tag {
                Ok(tag) => println!(
                    "  slot {:2}: uid {} dsfid {:#04x} crc {}",
                    resp.slot,
                    tag.uid,
                    tag.dsfid,
                    if tag.crc_ok() { "ok" } else { "bad" }
                ),
                Err(e) => println!("  slot {:2}: {} ({})", resp.slot, e, bytes_to_hex_spaced(&resp.frame)),
            }
        }
    }
    Ok(())
}
