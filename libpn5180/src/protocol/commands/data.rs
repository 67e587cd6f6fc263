// libpn5180/src/protocol/commands/data.rs
//! SEND_DATA / READ_DATA frames.

use crate::constants::{CMD_READ_DATA, CMD_SEND_DATA};

/// Encode SEND_DATA (0x09)
/// Layout: opcode(1) + valid_bits(1) + payload(n)
///
/// `valid_bits` is the number of bits of the last byte to transmit
/// (0 = all 8). An empty payload makes the chip send only an EOF.
pub fn encode_send_data(valid_bits: u8, payload: &[u8]) -> Vec<u8> {
    let mut buf = Vec::with_capacity(2 + payload.len());
    buf.push(CMD_SEND_DATA);
    buf.push(valid_bits);
    buf.extend_from_slice(payload);
    buf
}

/// Encode READ_DATA (0x0A). The length to read is decided by the caller,
/// not carried in the frame.
pub fn encode_read_data() -> Vec<u8> {
    vec![CMD_READ_DATA, 0x00]
}
