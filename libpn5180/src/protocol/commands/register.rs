// libpn5180/src/protocol/commands/register.rs
//! Register access frames.

use crate::constants::CMD_READ_REGISTER;
use crate::types::Register;

/// Encode one of the register-modifying commands (WRITE_REGISTER,
/// WRITE_REGISTER_OR_MASK, WRITE_REGISTER_AND_MASK).
/// Layout: opcode(1) + register(1) + value/mask(4, little-endian)
pub fn encode_register_write(opcode: u8, reg: Register, value: u32) -> Vec<u8> {
    let mut buf = Vec::with_capacity(1 + 1 + 4);
    buf.push(opcode);
    buf.push(reg.addr());
    buf.extend_from_slice(&value.to_le_bytes());
    buf
}

/// Encode READ_REGISTER (0x04). The chip answers with 4 bytes, LSB first.
pub fn encode_read_register(reg: Register) -> Vec<u8> {
    vec![CMD_READ_REGISTER, reg.addr()]
}
