// libpn5180/src/iso15693/tag.rs
//! Decoded inventory answers.

use std::fmt;

use crate::constants::{ISO15693_RESP_FLAG_ERROR, ISO15693_UID_LEN};
use crate::iso15693::ErrorCode;
use crate::protocol::{crc16, parser};
use crate::utils::bytes_to_hex;
use crate::{Error, Result};

/// 64-bit tag UID, kept in wire order (least significant byte first).
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Uid([u8; ISO15693_UID_LEN]);

impl Uid {
    /// UID in the byte order it arrives on air.
    pub fn from_wire(bytes: [u8; ISO15693_UID_LEN]) -> Self {
        Self(bytes)
    }

    /// LSB first, as received.
    pub fn as_wire(&self) -> &[u8; ISO15693_UID_LEN] {
        &self.0
    }

    /// MSB first, the order printed on tags (starts with 0xE0).
    pub fn to_be_bytes(&self) -> [u8; ISO15693_UID_LEN] {
        let mut out = self.0;
        out.reverse();
        out
    }

    /// IC manufacturer code (second most significant byte).
    pub fn manufacturer(&self) -> u8 {
        self.0[6]
    }

    /// MSB-first hex, as printed on tags.
    pub fn to_hex(&self) -> String {
        bytes_to_hex(&self.to_be_bytes())
    }
}

impl fmt::Display for Uid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl fmt::Debug for Uid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Uid({})", self.to_hex())
    }
}

/// Decoded inventory answer: flags, DSFID, UID and the trailing CRC when
/// the chip left it in the frame.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TagResponse {
    /// Response flags
    pub flags: u8,
    /// Data storage format identifier
    pub dsfid: u8,
    /// Tag UID
    pub uid: Uid,
    /// Trailing CRC when the frame carries one
    pub crc: Option<u16>,
}

impl TagResponse {
    /// Body length without CRC.
    pub const BODY_LEN: usize = 2 + ISO15693_UID_LEN;

    /// Decode a raw inventory frame. An error-flagged answer becomes
    /// `Error::TagError`.
    pub fn decode(frame: &[u8]) -> Result<Self> {
        let flags = parser::byte_at(frame, 0)?;
        if flags & ISO15693_RESP_FLAG_ERROR != 0 {
            let code = parser::byte_at(frame, 1)?;
            return Err(Error::TagError(ErrorCode::from(code)));
        }
        parser::ensure_len(frame, Self::BODY_LEN)?;

        let mut uid = [0u8; ISO15693_UID_LEN];
        uid.copy_from_slice(parser::slice_at(frame, 2, ISO15693_UID_LEN)?);
        let crc = match frame.len() {
            n if n >= Self::BODY_LEN + 2 => Some(parser::le_u16_at(frame, Self::BODY_LEN)?),
            _ => None,
        };

        Ok(Self {
            flags,
            dsfid: frame[1],
            uid: Uid::from_wire(uid),
            crc,
        })
    }

    fn body(&self) -> [u8; Self::BODY_LEN] {
        let mut body = [0u8; Self::BODY_LEN];
        body[0] = self.flags;
        body[1] = self.dsfid;
        body[2..].copy_from_slice(self.uid.as_wire());
        body
    }

    /// Check the trailing CRC. Frames without one pass.
    pub fn verify_crc(&self) -> Result<()> {
        match self.crc {
            Some(actual) => {
                let expected = crc16(&self.body());
                if expected == actual {
                    Ok(())
                } else {
                    Err(Error::CrcMismatch { expected, actual })
                }
            }
            None => Ok(()),
        }
    }

    /// CRC matches, or the frame has none.
    pub fn crc_ok(&self) -> bool {
        self.verify_crc().is_ok()
    }
}
