// libpn5180/src/protocol/responses.rs

//! Decoders for the fixed-size answers of READ_REGISTER and READ_EEPROM.

use crate::protocol::parser;
use crate::types::{RxStatus, Version};
use crate::Result;

/// Decode a READ_REGISTER answer: 4 bytes, LSB first.
pub fn decode_register_value(data: &[u8]) -> Result<u32> {
    parser::expect_len(data, 4)?;
    parser::le_u32_at(data, 0)
}

/// Decode a 2-byte version field read from EEPROM.
pub fn decode_version(data: &[u8]) -> Result<Version> {
    parser::expect_len(data, 2)?;
    Ok(Version::from_le_bytes([data[0], data[1]]))
}

/// Decode an RX_STATUS register answer.
pub fn decode_rx_status(data: &[u8]) -> Result<RxStatus> {
    decode_register_value(data).map(RxStatus::from)
}
