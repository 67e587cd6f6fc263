//! Utilities for libpn5180: small, reusable helpers used across the crate.
//!
//! Hex formatting for trace output and the bounded polling primitive every
//! wait loop in the driver goes through.

pub mod hex;
pub mod timeout;

pub use hex::*;
pub use timeout::*;
