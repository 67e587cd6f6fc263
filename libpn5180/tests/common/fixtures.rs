// fixtures.rs: commonly used tag UIDs and inventory answers

use libpn5180::test_support::tag_frame;

/// ICODE SLIX style UID, wire order (LSB first)
pub fn sample_uid_wire() -> [u8; 8] {
    [0x1A, 0x2B, 0x3C, 0x4D, 0x00, 0x01, 0x04, 0xE0]
}

pub fn sample_uid_hex() -> &'static str {
    "e00401004d3c2b1a"
}

pub fn second_uid_wire() -> [u8; 8] {
    [0x99, 0x88, 0x77, 0x66, 0x55, 0x44, 0x07, 0xE0]
}

/// Inventory answer with DSFID 0 and a valid CRC (12 bytes)
pub fn sample_tag_frame() -> Vec<u8> {
    tag_frame(0x00, sample_uid_wire())
}

pub fn second_tag_frame() -> Vec<u8> {
    tag_frame(0x3F, second_uid_wire())
}

/// Same answer as captured on the wire, in hex
pub fn sample_tag_frame_hex() -> String {
    hex::encode(sample_tag_frame())
}
