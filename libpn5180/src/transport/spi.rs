// libpn5180/src/transport/spi.rs
//! PN5180 over an embedded-hal SPI bus with NSS, BUSY and RST pins.

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::{InputPin, OutputPin};
use embedded_hal::spi::SpiBus;

use crate::config::TransportConfig;
use crate::transport::bus::SharedBus;
use crate::transport::traits::Transport;
#[cfg(feature = "diagnostics")]
use crate::utils::HexSlice;
use crate::utils::{Poller, WaitCondition};
use crate::{Error, Result};

/// SPI transport for one PN5180. NSS is driven by hand because the chip
/// needs the BUSY handshake between asserting and releasing it, which a
/// plain `SpiDevice` cannot express.
///
/// Each phase of an exchange runs as:
/// 1. wait for BUSY low
/// 2. NSS low, settle
/// 3. clock the bytes
/// 4. wait for BUSY high
/// 5. NSS high, settle
/// 6. wait for BUSY low
///
/// The shared bus stays locked from step 1 of the write phase to step 6
/// of the read phase.
pub struct SpiTransport<B, NSS, BUSY, RST, D> {
    bus: SharedBus<B>,
    nss: NSS,
    busy: BUSY,
    rst: RST,
    delay: D,
    config: TransportConfig,
}

impl<B, NSS, BUSY, RST, D> SpiTransport<B, NSS, BUSY, RST, D>
where
    B: SpiBus,
    NSS: OutputPin,
    BUSY: InputPin,
    RST: OutputPin,
    D: DelayNs,
{
    /// Build from a shared bus and the three control pins.
    pub fn new(bus: SharedBus<B>, nss: NSS, busy: BUSY, rst: RST, delay: D) -> Self {
        Self {
            bus,
            nss,
            busy,
            rst,
            delay,
            config: TransportConfig::default(),
        }
    }

    /// Override the BUSY timing.
    pub fn with_config(mut self, config: TransportConfig) -> Self {
        self.config = config;
        self
    }

    /// Timing in use.
    pub fn config(&self) -> &TransportConfig {
        &self.config
    }

    /// Give the lines back to the caller.
    pub fn release(self) -> (SharedBus<B>, NSS, BUSY, RST, D) {
        (self.bus, self.nss, self.busy, self.rst, self.delay)
    }

    fn wait_busy(&mut self, high: bool) -> Result<()> {
        let waiting_for = if high {
            WaitCondition::BusyHigh
        } else {
            WaitCondition::BusyLow
        };
        let mut poller = Poller::new(self.config.busy, waiting_for);
        while self.busy.is_high().map_err(Error::gpio)? != high {
            poller.tick()?;
            self.delay.delay_us(poller.interval_us());
        }
        Ok(())
    }

    fn select(&mut self) -> Result<()> {
        self.nss.set_low().map_err(Error::gpio)?;
        self.delay.delay_ms(self.config.nss_settle_ms);
        Ok(())
    }

    /// Steps 4-6: chip takes the data, NSS released, chip ready again.
    fn close_phase(&mut self) -> Result<()> {
        self.wait_busy(true)?;
        self.nss.set_high().map_err(Error::gpio)?;
        self.delay.delay_ms(self.config.nss_release_ms);
        self.wait_busy(false)
    }

    fn exchange(&mut self, spi: &mut B, tx: &[u8], rx_len: usize) -> Result<Vec<u8>> {
        self.wait_busy(false)?;
        self.select()?;
        spi.write(tx).map_err(Error::spi)?;
        spi.flush().map_err(Error::spi)?;
        self.close_phase()?;

        if rx_len == 0 {
            return Ok(Vec::new());
        }

        let mut rx = vec![0u8; rx_len];
        self.select()?;
        spi.read(&mut rx).map_err(Error::spi)?;
        spi.flush().map_err(Error::spi)?;
        self.close_phase()?;
        Ok(rx)
    }
}

impl<B, NSS, BUSY, RST, D> Transport for SpiTransport<B, NSS, BUSY, RST, D>
where
    B: SpiBus,
    NSS: OutputPin,
    BUSY: InputPin,
    RST: OutputPin,
    D: DelayNs,
{
    fn transact(&mut self, tx: &[u8], rx_len: usize) -> Result<Vec<u8>> {
        #[cfg(feature = "diagnostics")]
        log::trace!("spi tx {}", HexSlice(tx));

        let bus = self.bus.clone();
        let mut spi = bus.lock()?;
        let result = self.exchange(&mut spi, tx, rx_len);
        if result.is_err() {
            // never leave the chip selected on a failed exchange
            let _ = self.nss.set_high();
        }
        drop(spi);

        let rx = result?;
        #[cfg(feature = "diagnostics")]
        {
            if !rx.is_empty() {
                log::trace!("spi rx {}", HexSlice(&rx));
            }
        }
        Ok(rx)
    }

    fn begin(&mut self) -> Result<()> {
        self.rst.set_high().map_err(Error::gpio)?;
        self.nss.set_high().map_err(Error::gpio)
    }

    fn set_reset(&mut self, active: bool) -> Result<()> {
        if active {
            self.rst.set_low().map_err(Error::gpio)
        } else {
            self.rst.set_high().map_err(Error::gpio)
        }
    }

    fn delay_ms(&mut self, ms: u32) {
        self.delay.delay_ms(ms);
    }

    fn delay_us(&mut self, us: u32) {
        self.delay.delay_us(us);
    }
}
