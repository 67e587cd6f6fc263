// libpn5180/src/lib.rs

//! libpn5180
//!
//! Pure Rust driver for the NXP PN5180 NFC front-end over SPI, with the
//! ISO15693 16-slot inventory.
#![warn(missing_docs)]

#[cfg(feature = "async")]
pub mod asynch;
pub mod config;
pub mod constants;
pub mod device;
pub mod error;
pub mod iso15693;
pub mod prelude;
pub mod protocol;
pub mod scan;
#[cfg(any(test, feature = "mock"))]
#[doc(hidden)]
pub mod test_support;
pub mod transport;
pub mod types;
pub mod utils;

// Re-export common types at crate root so `crate::Error`, `crate::Result`,
// and the newtypes in `types` are available for consumers.
pub use crate::error::*;
pub use crate::types::*;

pub use prelude::*;
