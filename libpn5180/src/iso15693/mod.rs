// libpn5180/src/iso15693/mod.rs
//! ISO15693 layer: the 16-slot inventory round and decoding of its answers.

pub mod error_code;
pub mod inventory;
pub mod request;
pub mod tag;

pub use error_code::ErrorCode;
pub use inventory::{Inventory, InventoryOutcome, SlotResponse};
pub use request::InventoryRequest;
pub use tag::{TagResponse, Uid};
