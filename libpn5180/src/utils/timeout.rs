//! Bounded polling shared by every wait loop in the driver.
//!
//! The chip signals progress through the BUSY line and IRQ_STATUS bits; none
//! of those waits may spin forever. A [`Poller`] counts attempts against a
//! [`PollConfig`] and turns exhaustion into [`Error::NotResponding`]. The
//! caller sleeps `interval_us()` between attempts through its delay
//! provider, which is where a cooperative scheduler gets control back.

use derive_more::Display;

use crate::config::PollConfig;
use crate::{Error, Result};

/// What a polling loop is waiting for. Carried in `NotResponding` errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum WaitCondition {
    /// BUSY released by the chip
    #[display(fmt = "BUSY low")]
    BusyLow,
    /// BUSY raised after a frame
    #[display(fmt = "BUSY high")]
    BusyHigh,
    /// Start-up IDLE interrupt
    #[display(fmt = "IDLE irq")]
    IdleIrq,
    /// RF field switched on
    #[display(fmt = "TX_RFON irq")]
    RfOnIrq,
    /// RF field switched off
    #[display(fmt = "TX_RFOFF irq")]
    RfOffIrq,
}

/// Attempt counter for one wait loop.
#[derive(Debug)]
pub struct Poller {
    config: PollConfig,
    waiting_for: WaitCondition,
    polls: u32,
}

impl Poller {
    /// Poller for one wait.
    pub fn new(config: PollConfig, waiting_for: WaitCondition) -> Self {
        Self {
            config,
            waiting_for,
            polls: 0,
        }
    }

    /// Record one failed check. Errors once the budget is spent.
    pub fn tick(&mut self) -> Result<()> {
        if self.polls >= self.config.max_polls {
            log::warn!(
                "gave up waiting for {} after {} polls",
                self.waiting_for,
                self.polls
            );
            return Err(Error::NotResponding {
                waiting_for: self.waiting_for,
                polls: self.polls,
            });
        }
        self.polls += 1;
        Ok(())
    }

    /// Pause to apply between two checks.
    pub fn interval_us(&self) -> u32 {
        self.config.interval_us
    }

    /// Polls made so far.
    pub fn polls(&self) -> u32 {
        self.polls
    }
}
