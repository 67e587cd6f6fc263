// libpn5180/src/transport/bus.rs
//! Bus shared by several readers.

use std::sync::{Arc, Mutex, MutexGuard};

use crate::{Error, Result};

/// SPI bus shared between several chip instances. Each instance selects
/// itself with its own NSS line; the lock makes sure only one of them
/// drives the bus at a time. Clone it once per reader.
#[derive(Debug)]
pub struct SharedBus<B> {
    inner: Arc<Mutex<B>>,
}

impl<B> SharedBus<B> {
    /// Wrap a bus for sharing.
    pub fn new(bus: B) -> Self {
        Self {
            inner: Arc::new(Mutex::new(bus)),
        }
    }

    /// Acquire exclusive use of the bus. Held for one full transaction.
    pub fn lock(&self) -> Result<MutexGuard<'_, B>> {
        self.inner.lock().map_err(|_| Error::BusPoisoned)
    }

    /// Number of handles currently referencing this bus.
    pub fn handles(&self) -> usize {
        Arc::strong_count(&self.inner)
    }
}

impl<B> Clone for SharedBus<B> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}
