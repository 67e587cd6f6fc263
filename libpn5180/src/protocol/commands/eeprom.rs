// libpn5180/src/protocol/commands/eeprom.rs
//! READ_EEPROM frame.

use crate::constants::CMD_READ_EEPROM;

/// Encode READ_EEPROM (0x07)
/// Layout: opcode(1) + address(1) + length(1)
pub fn encode_read_eeprom(addr: u8, len: u8) -> Vec<u8> {
    vec![CMD_READ_EEPROM, addr, len]
}
