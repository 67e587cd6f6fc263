// libpn5180/src/prelude.rs
//! Commonly used types.

pub use crate::config::{DeviceConfig, PollConfig, TransportConfig};
pub use crate::device::{Device, DeviceBuilder, Initialized, Uninitialized};
pub use crate::iso15693::{
    ErrorCode, Inventory, InventoryOutcome, InventoryRequest, SlotResponse, TagResponse, Uid,
};
pub use crate::protocol::Command;
pub use crate::scan::{ReaderSet, ScanTrigger};
pub use crate::transport::{SharedBus, SpiTransport, Transport};
pub use crate::{
    Error, IrqStatus, Register, Result, RfConfig, RxStatus, TransceiveState, Version,
};

#[cfg(feature = "async")]
pub use crate::asynch::{AsyncInventory, AsyncReader};

// Re-export small utilities for convenience
pub use crate::utils::{bytes_to_hex, bytes_to_hex_spaced, HexSlice, WaitCondition};
