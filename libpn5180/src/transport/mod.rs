// libpn5180/src/transport/mod.rs
//! SPI transport to the chip, the shared-bus arbiter and a simulated chip
//! for tests.

pub mod bus;
#[cfg(any(test, feature = "mock"))]
pub mod mock;
pub mod spi;
pub mod traits;

pub use bus::SharedBus;
#[cfg(any(test, feature = "mock"))]
pub use mock::MockTransport;
pub use spi::SpiTransport;
pub use traits::Transport;
