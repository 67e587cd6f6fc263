#[path = "../common/mod.rs"]
mod common;

use libpn5180::iso15693::{ErrorCode, TagResponse};
use libpn5180::protocol::{decode_register_value, decode_rx_status, decode_version};
use libpn5180::Error;

#[test]
fn tag_response_from_fixture() {
    let tag = TagResponse::decode(&common::fixtures::sample_tag_frame()).unwrap();
    assert_eq!(tag.uid.to_hex(), common::fixtures::sample_uid_hex());
    assert_eq!(tag.dsfid, 0);
    assert!(tag.crc_ok());
}

#[test]
fn tag_error_response() {
    match TagResponse::decode(&[0x01, 0x03, 0x00, 0x00]) {
        Err(Error::TagError(code)) => assert_eq!(code, ErrorCode::OptionNotSupported),
        other => panic!("expected TagError, got {:?}", other),
    }
}

#[test]
fn register_answers() {
    assert_eq!(
        decode_register_value(&[0x78, 0x56, 0x34, 0x12]).unwrap(),
        0x1234_5678
    );
    assert!(decode_register_value(&[0x00; 5]).is_err());

    let rx = decode_rx_status(&[0x0C, 0x00, 0x00, 0x00]).unwrap();
    assert_eq!(rx.len(), 12);
    assert!(!rx.collision());

    assert_eq!(decode_version(&[0x05, 0x03]).unwrap().to_string(), "3.5");
}
