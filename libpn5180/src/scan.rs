// libpn5180/src/scan.rs

//! Scan requests shared between an input source (a button task, a timer)
//! and the readers. Replaces a process-wide "button pressed" flag with an
//! explicit handle that is cloned into whoever raises requests.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use crate::device::{Device, Initialized};
use crate::iso15693::Inventory;
use crate::transport::Transport;
use crate::Result;

/// Pending-scan flag. Cloning shares the flag.
#[derive(Debug, Clone, Default)]
pub struct ScanTrigger {
    pending: Arc<AtomicBool>,
}

impl ScanTrigger {
    /// Trigger with no pending request.
    pub fn new() -> Self {
        Self::default()
    }

    /// Ask for one scan. Requests raised before the next `take` coalesce.
    pub fn request(&self) {
        self.pending.store(true, Ordering::Release);
    }

    /// Consume a pending request.
    pub fn take(&self) -> bool {
        self.pending.swap(false, Ordering::AcqRel)
    }

    /// A request is waiting.
    pub fn is_pending(&self) -> bool {
        self.pending.load(Ordering::Acquire)
    }
}

/// Result of scanning one reader.
#[derive(Debug)]
pub struct ReaderScan {
    /// Position of the reader in the set
    pub reader: usize,
    /// Inventory result of that reader
    pub result: Result<Inventory>,
}

/// Readers scanned together on each request, in insertion order. Readers
/// sharing a bus are serialized by their transports.
pub struct ReaderSet<T: Transport> {
    readers: Vec<Device<T, Initialized>>,
    trigger: ScanTrigger,
}

impl<T: Transport> ReaderSet<T> {
    /// Empty set driven by `trigger`.
    pub fn new(trigger: ScanTrigger) -> Self {
        Self {
            readers: Vec::new(),
            trigger,
        }
    }

    /// Add a reader, returning its index.
    pub fn push(&mut self, reader: Device<T, Initialized>) -> usize {
        self.readers.push(reader);
        self.readers.len() - 1
    }

    /// Number of readers.
    pub fn len(&self) -> usize {
        self.readers.len()
    }

    /// No readers.
    pub fn is_empty(&self) -> bool {
        self.readers.is_empty()
    }

    /// Trigger this set consumes.
    pub fn trigger(&self) -> &ScanTrigger {
        &self.trigger
    }

    /// Reader at `index`.
    pub fn reader(&self, index: usize) -> Option<&Device<T, Initialized>> {
        self.readers.get(index)
    }

    /// Run one inventory per reader if a scan was requested. A failing
    /// reader does not stop the others.
    pub fn poll(&mut self) -> Option<Vec<ReaderScan>> {
        if !self.trigger.take() {
            return None;
        }
        Some(self.scan_all())
    }

    /// Run one inventory per reader now.
    pub fn scan_all(&mut self) -> Vec<ReaderScan> {
        self.readers
            .iter_mut()
            .enumerate()
            .map(|(reader, dev)| {
                let result = dev.inventory_16_slots();
                if let Err(e) = &result {
                    log::warn!("reader {}: inventory failed: {}", reader, e);
                }
                ReaderScan { reader, result }
            })
            .collect()
    }

    /// Give the readers back.
    pub fn into_readers(self) -> Vec<Device<T, Initialized>> {
        self.readers
    }
}
