#[path = "../common/mod.rs"]
mod common;

use libpn5180::protocol::crc16;

#[test]
fn crc_of_captured_tag_frame() {
    let frame = hex::decode(common::fixtures::sample_tag_frame_hex()).unwrap();
    let (body, crc) = frame.split_at(10);
    assert_eq!(crc16(body), u16::from_le_bytes([crc[0], crc[1]]));
}

#[test]
fn crc_changes_with_single_bit_flip() {
    let mut body = common::fixtures::sample_tag_frame()[..10].to_vec();
    let before = crc16(&body);
    body[4] ^= 0x01;
    assert_ne!(crc16(&body), before);
}
