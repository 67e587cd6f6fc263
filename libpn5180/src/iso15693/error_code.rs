// libpn5180/src/iso15693/error_code.rs
//! Error codes returned by tags with the error flag set.

use derive_more::Display;

/// Error code carried by an ISO15693 response whose error flag is set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorCode {
    /// 0x01
    #[display(fmt = "command not supported")]
    NotSupported,
    /// 0x02
    #[display(fmt = "command not recognized")]
    NotRecognized,
    /// 0x03
    #[display(fmt = "option not supported")]
    OptionNotSupported,
    /// 0x0F
    #[display(fmt = "unknown error")]
    UnknownError,
    /// 0x10
    #[display(fmt = "block not available")]
    BlockNotAvailable,
    /// 0x11
    #[display(fmt = "block already locked")]
    BlockAlreadyLocked,
    /// 0x12
    #[display(fmt = "block is locked")]
    BlockIsLocked,
    /// 0x13
    #[display(fmt = "block not programmed")]
    BlockNotProgrammed,
    /// 0x14
    #[display(fmt = "block not locked")]
    BlockNotLocked,
    /// Manufacturer specific (0xA0..=0xDF)
    #[display(fmt = "custom error {:#04x}", _0)]
    Custom(u8),
    /// Any other code
    #[display(fmt = "error {:#04x}", _0)]
    Other(u8),
}

impl From<u8> for ErrorCode {
    fn from(code: u8) -> Self {
        match code {
            0x01 => Self::NotSupported,
            0x02 => Self::NotRecognized,
            0x03 => Self::OptionNotSupported,
            0x0F => Self::UnknownError,
            0x10 => Self::BlockNotAvailable,
            0x11 => Self::BlockAlreadyLocked,
            0x12 => Self::BlockIsLocked,
            0x13 => Self::BlockNotProgrammed,
            0x14 => Self::BlockNotLocked,
            0xA0..=0xDF => Self::Custom(code),
            other => Self::Other(other),
        }
    }
}

impl From<ErrorCode> for u8 {
    fn from(code: ErrorCode) -> u8 {
        match code {
            ErrorCode::NotSupported => 0x01,
            ErrorCode::NotRecognized => 0x02,
            ErrorCode::OptionNotSupported => 0x03,
            ErrorCode::UnknownError => 0x0F,
            ErrorCode::BlockNotAvailable => 0x10,
            ErrorCode::BlockAlreadyLocked => 0x11,
            ErrorCode::BlockIsLocked => 0x12,
            ErrorCode::BlockNotProgrammed => 0x13,
            ErrorCode::BlockNotLocked => 0x14,
            ErrorCode::Custom(c) | ErrorCode::Other(c) => c,
        }
    }
}
