// libpn5180/src/iso15693/request.rs
//! Inventory request frame.

use crate::constants::*;

/// Inventory request body as handed to SEND_DATA (the chip adds SOF, CRC
/// and EOF). Always 16-slot, high data rate, no UID mask.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct InventoryRequest {
    /// Only tags of this application family answer
    pub afi: Option<u8>,
}

impl InventoryRequest {
    /// Plain 16-slot inventory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Only tags of application family `afi` answer.
    pub fn with_afi(afi: u8) -> Self {
        Self { afi: Some(afi) }
    }

    /// Request flags byte.
    pub fn flags(&self) -> u8 {
        let mut flags = ISO15693_FLAG_DATA_RATE | ISO15693_FLAG_INVENTORY;
        if self.afi.is_some() {
            flags |= ISO15693_FLAG_AFI;
        }
        flags
    }

    /// flags, command, [AFI], mask length (0)
    pub fn encode(&self) -> Vec<u8> {
        let mut out = vec![self.flags(), ISO15693_CMD_INVENTORY];
        if let Some(afi) = self.afi {
            out.push(afi);
        }
        out.push(0x00);
        out
    }
}
