// libpn5180/src/protocol/commands/rf.rs
//! RF field and RF configuration frames.

use crate::constants::{CMD_LOAD_RF_CONFIG, CMD_RF_OFF, CMD_RF_ON};
use crate::types::RfConfig;

/// Encode LOAD_RF_CONFIG (0x11)
/// Layout: opcode(1) + tx_config(1) + rx_config(1)
pub fn encode_load_rf_config(config: RfConfig) -> Vec<u8> {
    vec![CMD_LOAD_RF_CONFIG, config.tx, config.rx]
}

/// Encode RF_ON (0x16) with collision avoidance disabled
pub fn encode_rf_on() -> Vec<u8> {
    vec![CMD_RF_ON, 0x00]
}

/// Encode RF_OFF (0x17)
pub fn encode_rf_off() -> Vec<u8> {
    vec![CMD_RF_OFF, 0x00]
}
