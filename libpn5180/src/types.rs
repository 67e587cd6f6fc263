// libpn5180/src/types.rs
//! Register addresses and register value newtypes.

use derive_more::{Display, From, Into};

use crate::constants::{RF_STATUS_TRANSCEIVE_MASK, RF_STATUS_TRANSCEIVE_SHIFT};

/// レジスタアドレス - Newtype Pattern (1 バイト)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, From, Into)]
pub struct Register(u8);

impl Register {
    /// Command field, reset and RF enables
    pub const SYSTEM_CONFIG: Self = Self(0x00);
    /// IRQ pin enable mask
    pub const IRQ_ENABLE: Self = Self(0x01);
    /// Pending interrupts
    pub const IRQ_STATUS: Self = Self(0x02);
    /// Write-1-to-clear for IRQ_STATUS
    pub const IRQ_CLEAR: Self = Self(0x03);
    /// Transceiver control
    pub const TRANSCEIVE_CONTROL: Self = Self(0x04);
    /// Timer 1 reload value
    pub const TIMER1_RELOAD: Self = Self(0x0C);
    /// Timer 1 configuration
    pub const TIMER1_CONFIG: Self = Self(0x0F);
    /// Receiver wait time
    pub const RX_WAIT_CONFIG: Self = Self(0x11);
    /// Receive CRC settings
    pub const CRC_RX_CONFIG: Self = Self(0x12);
    /// Length and error flags of the last reception
    pub const RX_STATUS: Self = Self(0x13);
    /// Transmit framing (SOF/EOF selection)
    pub const TX_CONFIG: Self = Self(0x18);
    /// Transmit CRC settings
    pub const CRC_TX_CONFIG: Self = Self(0x19);
    /// RF and transceiver state
    pub const RF_STATUS: Self = Self(0x1D);
    /// System status
    pub const SYSTEM_STATUS: Self = Self(0x24);
    /// Temperature sensor control
    pub const TEMP_CONTROL: Self = Self(0x25);

    /// Arbitrary register address.
    pub const fn new(addr: u8) -> Self {
        Self(addr)
    }

    /// Raw register address.
    pub fn addr(&self) -> u8 {
        self.0
    }
}

/// Pending interrupt bitmask as read from IRQ_STATUS.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, From, Into)]
pub struct IrqStatus(u32);

impl IrqStatus {
    /// End of RF reception
    pub const RX: u32 = 1 << 0;
    /// End of RF transmission
    pub const TX: u32 = 1 << 1;
    /// Chip idle, raised after start-up
    pub const IDLE: u32 = 1 << 2;
    /// External RF field dropped
    pub const RFOFF_DET: u32 = 1 << 6;
    /// External RF field detected
    pub const RFON_DET: u32 = 1 << 7;
    /// Own RF field switched off
    pub const TX_RFOFF: u32 = 1 << 8;
    /// Own RF field switched on
    pub const TX_RFON: u32 = 1 << 9;
    /// Start of frame seen from a tag
    pub const RX_SOF_DET: u32 = 1 << 14;

    /// Wrap raw register bits.
    pub const fn new(bits: u32) -> Self {
        Self(bits)
    }

    /// Raw IRQ_STATUS value.
    pub fn bits(&self) -> u32 {
        self.0
    }

    /// True when every bit of `mask` is pending.
    pub fn contains(&self, mask: u32) -> bool {
        self.0 & mask == mask
    }
}

/// RX_STATUS register view after a reception.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, From, Into)]
pub struct RxStatus(u32);

impl RxStatus {
    /// Number of bytes received (bits [8:0]).
    pub fn len(&self) -> usize {
        (self.0 & crate::constants::RX_STATUS_LEN_MASK) as usize
    }

    /// Nothing was received.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Several tags answered in the same slot.
    pub fn collision(&self) -> bool {
        self.0 & crate::constants::RX_STATUS_COLLISION != 0
    }
}

/// Transceiver phase reported in RF_STATUS bits [26:24].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[repr(u8)]
pub enum TransceiveState {
    /// Idle
    #[display(fmt = "idle")]
    Idle = 0,
    /// Armed, waiting for data to send
    #[display(fmt = "wait-transmit")]
    WaitTransmit = 1,
    /// Sending
    #[display(fmt = "transmitting")]
    Transmitting = 2,
    /// Waiting for the receive window
    #[display(fmt = "wait-receive")]
    WaitReceive = 3,
    /// Waiting for a tag to answer
    #[display(fmt = "wait-for-data")]
    WaitForData = 4,
    /// Receiving
    #[display(fmt = "receiving")]
    Receiving = 5,
    /// Loop-back test mode
    #[display(fmt = "loopback")]
    LoopBack = 6,
    /// Undefined encoding
    #[display(fmt = "reserved")]
    Reserved = 7,
}

impl TransceiveState {
    /// Map the low three bits of `bits` to a state.
    pub fn from_bits(bits: u8) -> Self {
        match bits & 0x07 {
            0 => Self::Idle,
            1 => Self::WaitTransmit,
            2 => Self::Transmitting,
            3 => Self::WaitReceive,
            4 => Self::WaitForData,
            5 => Self::Receiving,
            6 => Self::LoopBack,
            _ => Self::Reserved,
        }
    }

    /// Extract the state from a raw RF_STATUS register value.
    pub fn from_rf_status(rf_status: u32) -> Self {
        Self::from_bits(((rf_status >> RF_STATUS_TRANSCEIVE_SHIFT) & RF_STATUS_TRANSCEIVE_MASK) as u8)
    }
}

/// TX/RX profile pair for LOAD_RF_CONFIG. The indices select entries in the
/// chip's internal configuration table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RfConfig {
    /// Transmitter configuration index
    pub tx: u8,
    /// Receiver configuration index
    pub rx: u8,
}

impl RfConfig {
    /// ISO15693 ASK100 at 26 kbps
    pub const ISO15693: Self = Self {
        tx: crate::constants::RF_CONFIG_ISO15693_TX,
        rx: crate::constants::RF_CONFIG_ISO15693_RX,
    };

    /// Custom TX/RX profile pair.
    pub const fn new(tx: u8, rx: u8) -> Self {
        Self { tx, rx }
    }
}

impl Default for RfConfig {
    fn default() -> Self {
        Self::ISO15693
    }
}

/// Product/firmware/EEPROM version as stored in EEPROM (minor byte first).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Display)]
#[display(fmt = "{}.{}", major, minor)]
pub struct Version {
    /// Major number
    pub major: u8,
    /// Minor number
    pub minor: u8,
}

impl Version {
    /// Decode the EEPROM layout: minor byte, then major.
    pub fn from_le_bytes(bytes: [u8; 2]) -> Self {
        Self {
            major: bytes[1],
            minor: bytes[0],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transceive_state_from_rf_status() {
        // bits 26:24 = 5 -> Receiving, other bits ignored
        let rf_status = 0b1110_1101_1010_1010_1010_1010_1010_1010u32;
        assert_eq!(
            TransceiveState::from_rf_status(rf_status),
            TransceiveState::Receiving
        );
        assert_eq!(
            TransceiveState::from_rf_status(0x0100_0000),
            TransceiveState::WaitTransmit
        );
        assert_eq!(TransceiveState::from_rf_status(0), TransceiveState::Idle);
        assert_eq!(
            TransceiveState::from_rf_status(0x0700_0000),
            TransceiveState::Reserved
        );
    }

    #[test]
    fn transceive_state_repr_matches_bits() {
        for bits in 0u8..8 {
            assert_eq!(TransceiveState::from_bits(bits) as u8, bits);
        }
    }

    #[test]
    fn irq_status_contains() {
        let irq = IrqStatus::new(IrqStatus::IDLE | IrqStatus::RX_SOF_DET);
        assert!(irq.contains(IrqStatus::IDLE));
        assert!(irq.contains(IrqStatus::RX_SOF_DET));
        assert!(!irq.contains(IrqStatus::TX_RFON));
        assert!(!irq.contains(IrqStatus::IDLE | IrqStatus::TX_RFON));
    }

    #[test]
    fn register_roundtrip() {
        let r: Register = 0x1du8.into();
        assert_eq!(r, Register::RF_STATUS);
        let raw: u8 = Register::TX_CONFIG.into();
        assert_eq!(raw, 0x18);
    }

    #[test]
    fn version_from_eeprom_bytes() {
        let v = Version::from_le_bytes([0x05, 0x03]);
        assert_eq!(v.major, 3);
        assert_eq!(v.minor, 5);
        assert_eq!(v.to_string(), "3.5");
    }

    #[test]
    fn rf_config_default_is_iso15693() {
        assert_eq!(RfConfig::default(), RfConfig::new(0x0D, 0x8D));
    }
}
