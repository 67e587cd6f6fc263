// libpn5180/src/asynch.rs

//! Async front for tokio applications. Chip operations block on the BUSY
//! handshake and IRQ polls, so they run on the blocking pool and sibling
//! tasks keep the runtime.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::device::{Device, Initialized};
use crate::iso15693::Inventory;
use crate::transport::Transport;
use crate::{Error, Result};

/// Inventory rounds driven from async code.
#[async_trait]
pub trait AsyncInventory {
    /// Run one 16-slot round without blocking the runtime.
    async fn inventory_16_slots(&self) -> Result<Inventory>;
}

/// Cloneable async handle to an initialized reader.
pub struct AsyncReader<T: Transport + Send + 'static> {
    inner: Arc<Mutex<Device<T, Initialized>>>,
}

impl<T: Transport + Send + 'static> Clone for AsyncReader<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<T: Transport + Send + 'static> AsyncReader<T> {
    /// Take ownership of an initialized device.
    pub fn new(device: Device<T, Initialized>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(device)),
        }
    }

    /// Run `f` against the device on the blocking pool.
    pub async fn run<F, R>(&self, f: F) -> Result<R>
    where
        F: FnOnce(&mut Device<T, Initialized>) -> Result<R> + Send + 'static,
        R: Send + 'static,
    {
        let inner = Arc::clone(&self.inner);
        tokio::task::spawn_blocking(move || {
            let mut dev = inner.lock().map_err(|_| Error::ReaderPoisoned)?;
            f(&mut *dev)
        })
        .await
        .map_err(|e| Error::Task(e.to_string()))?
    }
}

#[async_trait]
impl<T: Transport + Send + 'static> AsyncInventory for AsyncReader<T> {
    async fn inventory_16_slots(&self) -> Result<Inventory> {
        self.run(|dev| dev.inventory_16_slots()).await
    }
}
