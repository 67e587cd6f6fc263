// libpn5180/src/device/builder.rs
//! Builder for configured devices.

use crate::config::DeviceConfig;
use crate::device::handle::{Device, Initialized, Uninitialized};
use crate::transport::Transport;
use crate::types::RfConfig;

/// Helper to construct a Device with optional configuration.
pub struct DeviceBuilder<T: Transport> {
    transport: T,
    config: DeviceConfig,
}

impl<T: Transport> DeviceBuilder<T> {
    /// Start from the default configuration.
    pub fn new(transport: T) -> Self {
        Self {
            transport,
            config: DeviceConfig::default(),
        }
    }

    /// Replace the whole configuration.
    pub fn config(mut self, config: DeviceConfig) -> Self {
        self.config = config;
        self
    }

    /// RF profile loaded before each inventory.
    pub fn rf_config(mut self, rf: RfConfig) -> Self {
        self.config.rf = rf;
        self
    }

    /// Wait for TX_RFOFF after RF_OFF.
    pub fn wait_rf_off(mut self, wait: bool) -> Self {
        self.config.wait_rf_off = wait;
        self
    }

    /// Delay between the inventory request and the first slot.
    pub fn inventory_settle_ms(mut self, ms: u32) -> Self {
        self.config.inventory_settle_ms = ms;
        self
    }

    /// Build without touching the chip.
    pub fn build_uninitialized(self) -> Device<T, Uninitialized> {
        Device::with_config(self.transport, self.config)
    }

    /// Build and run `begin` + `reset`.
    pub fn build(self) -> crate::Result<Device<T, Initialized>> {
        self.build_uninitialized().initialize()
    }
}
