// libpn5180/src/config.rs
//! Timing and behaviour knobs. Defaults reproduce the reference reader
//! timing; every wait loop gets an explicit attempt budget.

use crate::types::RfConfig;

/// Budget for one polling loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PollConfig {
    /// Pause between two checks, in microseconds
    pub interval_us: u32,
    /// Checks allowed before giving up
    pub max_polls: u32,
}

impl PollConfig {
    /// Budget covering roughly `timeout_ms` of pauses. The time spent in
    /// the checks themselves is not counted.
    pub fn with_timeout(interval_us: u32, timeout_ms: u32) -> Self {
        let interval_us = interval_us.max(1);
        Self {
            interval_us,
            max_polls: timeout_ms.saturating_mul(1000) / interval_us,
        }
    }
}

/// Bus transaction timing, owned by the SPI transport.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TransportConfig {
    /// Delay after asserting NSS before clocking data
    pub nss_settle_ms: u32,
    /// Delay after releasing NSS
    pub nss_release_ms: u32,
    /// BUSY handshake waits
    pub busy: PollConfig,
}

impl Default for TransportConfig {
    fn default() -> Self {
        Self {
            nss_settle_ms: 2,
            nss_release_ms: 1,
            busy: PollConfig::with_timeout(10, 100),
        }
    }
}

/// Chip-level timing and behaviour.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DeviceConfig {
    /// Reset held active for this long (chip needs at least 10 µs)
    pub reset_pulse_ms: u32,
    /// Ramp-up after releasing reset
    pub ramp_up_ms: u32,
    /// Waiting for the IDLE irq after reset
    pub startup: PollConfig,
    /// Waiting for RF on/off irqs
    pub irq: PollConfig,
    /// Pause after the inventory request before the first slot is checked
    pub inventory_settle_ms: u32,
    /// Profile loaded by `setup_rf`
    pub rf: RfConfig,
    /// Block in `set_rf_off` until TX_RFOFF is raised
    pub wait_rf_off: bool,
}

impl Default for DeviceConfig {
    fn default() -> Self {
        Self {
            reset_pulse_ms: 10,
            ramp_up_ms: 10,
            startup: PollConfig::with_timeout(1000, 500),
            irq: PollConfig::with_timeout(1000, 100),
            inventory_settle_ms: 15,
            rf: RfConfig::ISO15693,
            wait_rf_off: false,
        }
    }
}
