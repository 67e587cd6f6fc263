// libpn5180/src/constants.rs
//! Common protocol constants used across the crate

/// Host command opcodes (first byte of every SPI command frame): WRITE_REGISTER
pub const CMD_WRITE_REGISTER: u8 = 0x00;
/// WRITE_REGISTER_OR_MASK
pub const CMD_WRITE_REGISTER_OR_MASK: u8 = 0x01;
/// WRITE_REGISTER_AND_MASK
pub const CMD_WRITE_REGISTER_AND_MASK: u8 = 0x02;
/// READ_REGISTER
pub const CMD_READ_REGISTER: u8 = 0x04;
/// READ_EEPROM
pub const CMD_READ_EEPROM: u8 = 0x07;
/// SEND_DATA
pub const CMD_SEND_DATA: u8 = 0x09;
/// READ_DATA
pub const CMD_READ_DATA: u8 = 0x0A;
/// LOAD_RF_CONFIG
pub const CMD_LOAD_RF_CONFIG: u8 = 0x11;
/// RF_ON
pub const CMD_RF_ON: u8 = 0x16;
/// RF_OFF
pub const CMD_RF_OFF: u8 = 0x17;

/// Highest readable EEPROM address
pub const EEPROM_MAX_ADDR: u8 = 254;

/// SEND_DATA accepts at most 260 payload bytes
pub const MAX_SEND_DATA_LEN: usize = 260;

/// READ_DATA returns at most 508 bytes
pub const MAX_READ_DATA_LEN: usize = 508;

/// EEPROM layout: die identifier
pub const EEPROM_DIE_IDENTIFIER: u8 = 0x00;
/// Die identifier length
pub const EEPROM_DIE_IDENTIFIER_LEN: u8 = 16;
/// Product version (minor, major)
pub const EEPROM_PRODUCT_VERSION: u8 = 0x10;
/// Firmware version (minor, major)
pub const EEPROM_FIRMWARE_VERSION: u8 = 0x12;
/// EEPROM layout version (minor, major)
pub const EEPROM_EEPROM_VERSION: u8 = 0x14;
/// IRQ pin polarity configuration
pub const EEPROM_IRQ_PIN_CONFIG: u8 = 0x1A;

/// SYSTEM_CONFIG: AND mask clearing the command bits (Idle/StopCom)
pub const SYSTEM_CONFIG_CLEAR_COMMAND: u32 = 0xFFFF_FFF8;

/// SYSTEM_CONFIG: OR mask selecting the Transceive command
pub const SYSTEM_CONFIG_TRANSCEIVE: u32 = 0x0000_0003;

/// SYSTEM_CONFIG command field
pub const SYSTEM_CONFIG_COMMAND_MASK: u32 = 0x0000_0007;

/// TX_CONFIG: AND mask so the next transmission only sends an EOF
pub const TX_CONFIG_EOF_ONLY: u32 = 0xFFFF_FB3F;

/// IRQ_CLEAR mask for every bit
pub const IRQ_CLEAR_ALL: u32 = 0xFFFF_FFFF;
/// Clears bits 0..=19, used before the request and every EOF
pub const IRQ_CLEAR_INVENTORY: u32 = 0x000F_FFFF;

/// RX_STATUS received length, 9 bits
pub const RX_STATUS_LEN_MASK: u32 = 0x0000_01FF;
/// Collision detected while receiving
pub const RX_STATUS_COLLISION: u32 = 1 << 18;

/// RF_STATUS transceive state field: bits [26:24]
pub const RF_STATUS_TRANSCEIVE_SHIFT: u32 = 24;
/// Width of the transceive state field
pub const RF_STATUS_TRANSCEIVE_MASK: u32 = 0x07;

/// ISO15693 request flag: two subcarriers
pub const ISO15693_FLAG_SUBCARRIER: u8 = 0x01;
/// High data rate
pub const ISO15693_FLAG_DATA_RATE: u8 = 0x02;
/// Inventory flag
pub const ISO15693_FLAG_INVENTORY: u8 = 0x04;
/// Protocol extension
pub const ISO15693_FLAG_PROTOCOL_EXT: u8 = 0x08;
/// AFI field present (inventory only)
pub const ISO15693_FLAG_AFI: u8 = 0x10;
/// Single slot instead of 16 (inventory only)
pub const ISO15693_FLAG_ONE_SLOT: u8 = 0x20;

/// ISO15693 response flag: error code follows
pub const ISO15693_RESP_FLAG_ERROR: u8 = 0x01;

/// ISO15693 Inventory command code
pub const ISO15693_CMD_INVENTORY: u8 = 0x01;

/// Number of anti-collision slots in a 16-slot round
pub const ISO15693_SLOTS: usize = 16;

/// UID length in bytes
pub const ISO15693_UID_LEN: usize = 8;

/// RF configuration indices for ISO15693 (ASK100, 26 kbps): transmitter
pub const RF_CONFIG_ISO15693_TX: u8 = 0x0D;
/// Receiver half
pub const RF_CONFIG_ISO15693_RX: u8 = 0x8D;
