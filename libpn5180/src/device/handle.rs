// libpn5180/src/device/handle.rs
//! Device handle and its initialization states.

use std::marker::PhantomData;

use crate::config::DeviceConfig;
use crate::constants::IRQ_CLEAR_ALL;
use crate::transport::Transport;
use crate::types::IrqStatus;
use crate::utils::WaitCondition;
use crate::Result;

/// Type-state markers
#[derive(Debug)]
pub struct Uninitialized;
/// Reset done, start-up confirmed.
#[derive(Debug)]
pub struct Initialized;

/// Reader handle: one PN5180 behind its transport. Initialization state is
/// tracked at compile time; the RF and inventory operations only exist on
/// `Device<T, Initialized>`.
pub struct Device<T: Transport, State = Uninitialized> {
    pub(crate) transport: T,
    pub(crate) config: DeviceConfig,
    _state: PhantomData<State>,
}

impl<T: Transport> Device<T, Uninitialized> {
    /// Wrap a transport with the default timing.
    pub fn new(transport: T) -> Self {
        Self::with_config(transport, DeviceConfig::default())
    }

    /// Wrap a transport with explicit timing.
    pub fn with_config(transport: T, config: DeviceConfig) -> Self {
        Self {
            transport,
            config,
            _state: PhantomData,
        }
    }

    /// Bring the lines to their idle levels, reset the chip and wait for
    /// it to report start-up. Returns an initialized Device on success.
    pub fn initialize(mut self) -> Result<Device<T, Initialized>> {
        self.begin()?;
        self.reset()?;
        Ok(Device {
            transport: self.transport,
            config: self.config,
            _state: PhantomData,
        })
    }
}

impl<T: Transport, S> Device<T, S> {
    /// Release reset and park NSS high. No bus traffic.
    pub fn begin(&mut self) -> Result<()> {
        log::debug!("pn5180: begin");
        self.transport.begin()
    }

    /// Pulse the reset line, let the chip ramp up, then poll IRQ_STATUS for
    /// IDLE and clear every pending bit. Fails with `NotResponding` when
    /// IDLE never shows within the start-up budget.
    pub fn reset(&mut self) -> Result<()> {
        log::debug!("pn5180: reset");
        self.transport.set_reset(true)?;
        self.transport.delay_ms(self.config.reset_pulse_ms);
        self.transport.set_reset(false)?;
        self.transport.delay_ms(self.config.ramp_up_ms);

        self.wait_irq(IrqStatus::IDLE, WaitCondition::IdleIrq, self.config.startup)?;
        log::debug!("pn5180: start-up ok");
        self.clear_irq_status(IRQ_CLEAR_ALL)
    }

    /// Timing in use.
    pub fn config(&self) -> &DeviceConfig {
        &self.config
    }

    /// Borrow the transport (tests inspect the mock through this).
    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Mutable access to the transport.
    pub fn transport_mut(&mut self) -> &mut T {
        &mut self.transport
    }

    /// Give the transport back.
    pub fn into_transport(self) -> T {
        self.transport
    }
}

impl<T: Transport> std::fmt::Debug for Device<T, Initialized> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Device")
            .field("state", &"initialized")
            .field("config", &self.config)
            .finish()
    }
}

impl<T: Transport> std::fmt::Debug for Device<T, Uninitialized> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Device")
            .field("state", &"uninitialized")
            .field("config", &self.config)
            .finish()
    }
}
