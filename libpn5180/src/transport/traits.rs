// libpn5180/src/transport/traits.rs
//! Transport abstraction.

use crate::Result;

/// Transport trait abstracts the SPI/GPIO plumbing away from the command
/// layer. One `transact` call is one complete host command exchange,
/// including the BUSY handshake on both phases.
pub trait Transport {
    /// Write `tx` and, when `rx_len` is non-zero, read back exactly
    /// `rx_len` bytes in a second phase. Write-only exchanges return an
    /// empty vector.
    fn transact(&mut self, tx: &[u8], rx_len: usize) -> Result<Vec<u8>>;

    /// Drive RST and NSS to their inactive levels. No bus traffic.
    fn begin(&mut self) -> Result<()>;

    /// Drive the reset line. `true` holds the chip in reset.
    fn set_reset(&mut self, active: bool) -> Result<()>;

    /// Millisecond pause. On a cooperative runtime this must yield.
    fn delay_ms(&mut self, ms: u32);

    /// Microsecond pause used between polls.
    fn delay_us(&mut self, us: u32);

    /// Write-only exchange. Default implementation forwards to
    /// `transact` with no read phase.
    fn write(&mut self, tx: &[u8]) -> Result<()> {
        self.transact(tx, 0).map(|_| ())
    }
}

impl<T: Transport + ?Sized> Transport for Box<T> {
    fn transact(&mut self, tx: &[u8], rx_len: usize) -> Result<Vec<u8>> {
        (**self).transact(tx, rx_len)
    }

    fn begin(&mut self) -> Result<()> {
        (**self).begin()
    }

    fn set_reset(&mut self, active: bool) -> Result<()> {
        (**self).set_reset(active)
    }

    fn delay_ms(&mut self, ms: u32) {
        (**self).delay_ms(ms)
    }

    fn delay_us(&mut self, us: u32) {
        (**self).delay_us(us)
    }
}
