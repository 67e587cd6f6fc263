// libpn5180/src/protocol/commands/mod.rs
//! Command frames sent over SPI.

pub mod data;
pub mod eeprom;
pub mod register;
pub mod rf;

pub use data::{encode_read_data, encode_send_data};
pub use eeprom::encode_read_eeprom;
pub use register::{encode_read_register, encode_register_write};
pub use rf::{encode_load_rf_config, encode_rf_off, encode_rf_on};

use crate::constants::*;
use crate::protocol::parser;
use crate::types::{Register, RfConfig};
use crate::{Error, Result};

/// High-level Command enum. New commands should be added here and
/// their per-command encoder placed in `protocol::commands::<name>.rs`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Overwrite a register
    WriteRegister {
        /// Target register
        reg: Register,
        /// New value
        value: u32,
    },
    /// `reg |= mask`
    WriteRegisterOrMask {
        /// Target register
        reg: Register,
        /// Bits to set
        mask: u32,
    },
    /// `reg &= mask`
    WriteRegisterAndMask {
        /// Target register
        reg: Register,
        /// Bits to keep
        mask: u32,
    },
    /// Read a 32-bit register
    ReadRegister {
        /// Source register
        reg: Register,
    },
    /// Read `len` EEPROM bytes from `addr`
    ReadEeprom {
        /// Start address
        addr: u8,
        /// Byte count
        len: u8,
    },
    /// Transmit a frame over RF
    SendData {
        /// Valid bits in the last byte, 0 for all
        valid_bits: u8,
        /// Frame bytes
        payload: Vec<u8>,
    },
    /// Read the reception buffer
    ReadData,
    /// Load a TX/RX profile pair
    LoadRfConfig(RfConfig),
    /// Switch the RF field on
    RfOn,
    /// Switch the RF field off
    RfOff,
}

impl Command {
    /// Host command opcode (first byte on the wire).
    pub fn opcode(&self) -> u8 {
        match self {
            Self::WriteRegister { .. } => CMD_WRITE_REGISTER,
            Self::WriteRegisterOrMask { .. } => CMD_WRITE_REGISTER_OR_MASK,
            Self::WriteRegisterAndMask { .. } => CMD_WRITE_REGISTER_AND_MASK,
            Self::ReadRegister { .. } => CMD_READ_REGISTER,
            Self::ReadEeprom { .. } => CMD_READ_EEPROM,
            Self::SendData { .. } => CMD_SEND_DATA,
            Self::ReadData => CMD_READ_DATA,
            Self::LoadRfConfig(_) => CMD_LOAD_RF_CONFIG,
            Self::RfOn => CMD_RF_ON,
            Self::RfOff => CMD_RF_OFF,
        }
    }

    /// Encode the command into its SPI frame.
    pub fn encode(&self) -> Vec<u8> {
        match self {
            Self::WriteRegister { reg, value } => {
                encode_register_write(CMD_WRITE_REGISTER, *reg, *value)
            }
            Self::WriteRegisterOrMask { reg, mask } => {
                encode_register_write(CMD_WRITE_REGISTER_OR_MASK, *reg, *mask)
            }
            Self::WriteRegisterAndMask { reg, mask } => {
                encode_register_write(CMD_WRITE_REGISTER_AND_MASK, *reg, *mask)
            }
            Self::ReadRegister { reg } => encode_read_register(*reg),
            Self::ReadEeprom { addr, len } => encode_read_eeprom(*addr, *len),
            Self::SendData {
                valid_bits,
                payload,
            } => encode_send_data(*valid_bits, payload),
            Self::ReadData => encode_read_data(),
            Self::LoadRfConfig(config) => encode_load_rf_config(*config),
            Self::RfOn => encode_rf_on(),
            Self::RfOff => encode_rf_off(),
        }
    }

    /// Parse an SPI frame back into a Command. Used by the simulated chip
    /// behind `MockTransport` and by frame assertions in tests.
    pub fn decode(frame: &[u8]) -> Result<Self> {
        let opcode = parser::byte_at(frame, 0)?;
        let cmd = match opcode {
            CMD_WRITE_REGISTER | CMD_WRITE_REGISTER_OR_MASK | CMD_WRITE_REGISTER_AND_MASK => {
                parser::expect_len(frame, 6)?;
                let reg = Register::new(frame[1]);
                let value = parser::le_u32_at(frame, 2)?;
                match opcode {
                    CMD_WRITE_REGISTER => Self::WriteRegister { reg, value },
                    CMD_WRITE_REGISTER_OR_MASK => Self::WriteRegisterOrMask { reg, mask: value },
                    _ => Self::WriteRegisterAndMask { reg, mask: value },
                }
            }
            CMD_READ_REGISTER => {
                parser::expect_len(frame, 2)?;
                Self::ReadRegister {
                    reg: Register::new(frame[1]),
                }
            }
            CMD_READ_EEPROM => {
                parser::expect_len(frame, 3)?;
                Self::ReadEeprom {
                    addr: frame[1],
                    len: frame[2],
                }
            }
            CMD_SEND_DATA => Self::SendData {
                valid_bits: parser::byte_at(frame, 1)?,
                payload: frame[2..].to_vec(),
            },
            CMD_READ_DATA => {
                parser::expect_len(frame, 2)?;
                Self::ReadData
            }
            CMD_LOAD_RF_CONFIG => {
                parser::expect_len(frame, 3)?;
                Self::LoadRfConfig(RfConfig::new(frame[1], frame[2]))
            }
            CMD_RF_ON => {
                parser::expect_len(frame, 2)?;
                Self::RfOn
            }
            CMD_RF_OFF => {
                parser::expect_len(frame, 2)?;
                Self::RfOff
            }
            other => return Err(Error::UnknownOpcode(other)),
        };
        Ok(cmd)
    }

    /// True for the bare SEND_DATA frame that only emits an EOF.
    pub fn is_eof(&self) -> bool {
        matches!(self, Self::SendData { payload, .. } if payload.is_empty())
    }
}
