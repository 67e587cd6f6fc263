// libpn5180/src/error.rs
//! Crate error type.

use thiserror::Error;

use crate::iso15693::ErrorCode;
use crate::types::TransceiveState;
use crate::utils::WaitCondition;

/// 共通エラー型
#[derive(Error, Debug)]
pub enum Error {
    /// Transfer failure reported by the SPI bus.
    #[error("spi error: {0}")]
    Spi(embedded_hal::spi::ErrorKind),

    /// NSS, BUSY or RST pin failure.
    #[error("gpio error: {0}")]
    Gpio(embedded_hal::digital::ErrorKind),

    /// Another handle panicked while holding the shared bus.
    #[error("shared bus lock poisoned")]
    BusPoisoned,

    /// Another task panicked while holding an async reader.
    #[error("reader lock poisoned")]
    ReaderPoisoned,

    /// EEPROM address above the readable range.
    #[error("eeprom address {addr:#04x} out of range (max {max:#04x})")]
    AddressOutOfRange {
        /// Requested address
        addr: u8,
        /// Highest valid address
        max: u8,
    },

    /// Payload or read length above what the command accepts.
    #[error("length {actual} out of range (max {max})")]
    LengthOutOfRange {
        /// Largest accepted length
        max: usize,
        /// Requested length
        actual: usize,
    },

    /// Answer shorter or longer than the command returns.
    #[error("invalid packet length: expected {expected}, got {actual}")]
    InvalidLength {
        /// Expected byte count
        expected: usize,
        /// Received byte count
        actual: usize,
    },

    /// Malformed frame.
    #[error("frame format error: {0}")]
    FrameFormat(String),

    /// Opcode not known to the decoder.
    #[error("unknown command opcode {0:#04x}")]
    UnknownOpcode(u8),

    /// Transceiver not in the state the operation needs.
    #[error("transceiver in state {actual}, expected {expected}")]
    UnexpectedTransceiveState {
        /// State the operation needs
        expected: TransceiveState,
        /// State RF_STATUS reported
        actual: TransceiveState,
    },

    /// A bounded polling loop ran out of attempts.
    #[error("device not responding: gave up waiting for {waiting_for} after {polls} polls")]
    NotResponding {
        /// Condition that never showed
        waiting_for: WaitCondition,
        /// Polls made before giving up
        polls: u32,
    },

    /// Tag answered with its error flag set.
    #[error("tag reported error: {0}")]
    TagError(ErrorCode),

    /// Tag frame failed the ISO15693 CRC.
    #[error("crc mismatch: expected {expected:#06x}, got {actual:#06x}")]
    CrcMismatch {
        /// CRC computed over the frame
        expected: u16,
        /// CRC carried by the frame
        actual: u16,
    },

    /// Blocking job panicked or was cancelled.
    #[cfg(feature = "async")]
    #[error("blocking task failed: {0}")]
    Task(String),
}

/// Crate result alias.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Convert any embedded-hal SPI error into the crate error.
    pub fn spi<E: embedded_hal::spi::Error>(e: E) -> Self {
        Error::Spi(e.kind())
    }

    /// Convert any embedded-hal digital I/O error into the crate error.
    pub fn gpio<E: embedded_hal::digital::Error>(e: E) -> Self {
        Error::Gpio(e.kind())
    }
}
