// libpn5180/src/protocol/mod.rs
//! Wire format of the host interface: command frames and answer decoding.

pub mod checksum;
pub mod commands;
pub mod parser;
pub mod responses;

pub use checksum::crc16;
pub use commands::*;
pub use responses::*;
