// libpn5180/src/device/mod.rs
//! Reader handle: type-state device, chip commands, radio sequencing.

pub mod builder;
pub mod commands;
pub mod handle;
pub mod radio;

pub use builder::DeviceBuilder;
pub use handle::{Device, Initialized, Uninitialized};
