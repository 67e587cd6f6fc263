// libpn5180/src/iso15693/inventory.rs
//! The 16-slot inventory round.

use derive_more::Display;

use crate::constants::{IRQ_CLEAR_INVENTORY, ISO15693_SLOTS};
use crate::device::{Device, Initialized};
use crate::iso15693::{InventoryRequest, TagResponse};
use crate::transport::Transport;
use crate::types::IrqStatus;
use crate::Result;

/// Overall result of one 16-slot round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum InventoryOutcome {
    /// At least one tag answered
    #[display(fmt = "ok")]
    Ok,
    /// No tag answered in any slot
    #[display(fmt = "no card")]
    NoCard,
}

/// Raw frame received in one slot.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SlotResponse {
    /// Slot index, 0..16
    pub slot: usize,
    /// Bytes read back with READ_DATA
    pub frame: Vec<u8>,
    /// RX_STATUS reported a collision for this slot
    pub collision: bool,
}

/// Frames collected by one inventory round, in slot order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Inventory {
    responses: Vec<SlotResponse>,
    failed: Vec<usize>,
}

impl Inventory {
    /// `Ok` when at least one frame was collected.
    pub fn outcome(&self) -> InventoryOutcome {
        if self.responses.is_empty() {
            InventoryOutcome::NoCard
        } else {
            InventoryOutcome::Ok
        }
    }

    /// Number of frames collected.
    pub fn count(&self) -> usize {
        self.responses.len()
    }

    /// No frame collected.
    pub fn is_empty(&self) -> bool {
        self.responses.is_empty()
    }

    /// Per-slot frames, in slot order.
    pub fn responses(&self) -> &[SlotResponse] {
        &self.responses
    }

    /// Raw frames (flags, DSFID, UID, CRC) as received.
    pub fn frames(&self) -> impl Iterator<Item = &[u8]> {
        self.responses.iter().map(|r| r.frame.as_slice())
    }

    /// Decode every frame. Collided or truncated frames yield errors
    /// rather than being dropped.
    pub fn tags(&self) -> Vec<Result<TagResponse>> {
        self.frames().map(TagResponse::decode).collect()
    }

    /// Slots whose answer could not be read back. The round still closed
    /// them; they do not count towards the outcome.
    pub fn failed_slots(&self) -> &[usize] {
        &self.failed
    }

    /// Slots where RX_STATUS flagged a collision.
    pub fn collided_slots(&self) -> Vec<usize> {
        self.responses
            .iter()
            .filter(|r| r.collision)
            .map(|r| r.slot)
            .collect()
    }

    /// `(outcome, count, frames)`
    pub fn into_parts(self) -> (InventoryOutcome, usize, Vec<Vec<u8>>) {
        let outcome = self.outcome();
        let count = self.count();
        let frames = self.responses.into_iter().map(|r| r.frame).collect();
        (outcome, count, frames)
    }
}

impl<T: Transport> Device<T, Initialized> {
    /// RF off, load the configured RF profile, RF on (confirmed), then arm
    /// the transceiver so a request can go out immediately.
    pub fn setup_rf(&mut self) -> Result<()> {
        self.set_rf_off()?;
        let rf = self.config.rf;
        self.load_rf_config(rf)?;
        self.set_rf_on()?;
        self.arm_transceive()
    }

    /// Standard 16-slot inventory without AFI.
    pub fn inventory_16_slots(&mut self) -> Result<Inventory> {
        self.inventory(InventoryRequest::default())
    }

    /// One 16-slot anti-collision round. Every slot is closed with an EOF
    /// whether or not a tag answered in it. An answer that cannot be read
    /// back is logged and listed in `failed_slots`; only RF setup, the
    /// request and the slot advance abort the round.
    pub fn inventory(&mut self, request: InventoryRequest) -> Result<Inventory> {
        log::debug!("inventory: 16 slots, afi {:?}", request.afi);
        self.setup_rf()?;
        self.clear_irq_status(IRQ_CLEAR_INVENTORY)?;
        self.send_data(&request.encode(), 0)?;
        self.transport.delay_ms(self.config.inventory_settle_ms);

        let mut inventory = Inventory::default();
        for slot in 0..ISO15693_SLOTS {
            match self.receive_slot(slot) {
                Ok(Some(response)) => inventory.responses.push(response),
                Ok(None) => log::trace!("slot {}: no answer", slot),
                Err(e) => {
                    log::warn!("slot {}: answer dropped: {}", slot, e);
                    inventory.failed.push(slot);
                }
            }
            self.next_slot()?;
        }

        log::debug!(
            "inventory: {} ({} frames)",
            inventory.outcome(),
            inventory.count()
        );
        Ok(inventory)
    }

    fn receive_slot(&mut self, slot: usize) -> Result<Option<SlotResponse>> {
        let irq = self.get_irq_status()?;
        if !irq.contains(IrqStatus::RX_SOF_DET) {
            return Ok(None);
        }
        let rx_status = self.get_rx_status()?;
        let frame = self.read_data(rx_status.len())?;
        log::debug!(
            "slot {}: {} bytes{}",
            slot,
            frame.len(),
            if rx_status.collision() { " (collision)" } else { "" }
        );
        Ok(Some(SlotResponse {
            slot,
            frame,
            collision: rx_status.collision(),
        }))
    }
}
