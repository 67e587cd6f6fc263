// libpn5180/src/device/radio.rs

//! Transceiver sequencing: arming SYSTEM_CONFIG, slot advance EOFs and
//! bounded IRQ waits.

use crate::config::PollConfig;
use crate::constants::*;
use crate::device::handle::Device;
use crate::protocol::Command;
use crate::transport::Transport;
use crate::types::{IrqStatus, Register};
use crate::utils::{Poller, WaitCondition};
use crate::Result;

impl<T: Transport, S> Device<T, S> {
    /// Stop any running command (Idle/StopCom), then select Transceive so
    /// the transceiver moves to WaitTransmit.
    pub fn arm_transceive(&mut self) -> Result<()> {
        self.write_register_and(Register::SYSTEM_CONFIG, SYSTEM_CONFIG_CLEAR_COMMAND)?;
        self.write_register_or(Register::SYSTEM_CONFIG, SYSTEM_CONFIG_TRANSCEIVE)
    }

    /// Bare SEND_DATA: the transceiver only emits an EOF, closing the
    /// current anti-collision slot. No state check, no payload.
    pub fn send_eof(&mut self) -> Result<()> {
        log::trace!("send eof");
        self.transport.write(&Command::SendData {
            valid_bits: 0,
            payload: Vec::new(),
        }
        .encode())
    }

    /// Full slot advance: EOF-only TX, re-arm, clear the inventory IRQ
    /// mask, EOF.
    pub fn next_slot(&mut self) -> Result<()> {
        self.write_register_and(Register::TX_CONFIG, TX_CONFIG_EOF_ONLY)?;
        self.arm_transceive()?;
        self.clear_irq_status(IRQ_CLEAR_INVENTORY)?;
        self.send_eof()
    }

    /// Poll IRQ_STATUS until every bit of `mask` is set, pausing
    /// `budget.interval_us` between reads.
    pub(crate) fn wait_irq(
        &mut self,
        mask: u32,
        waiting_for: WaitCondition,
        budget: PollConfig,
    ) -> Result<IrqStatus> {
        let mut poller = Poller::new(budget, waiting_for);
        loop {
            let irq = self.get_irq_status()?;
            if irq.contains(mask) {
                log::trace!("{} after {} polls", waiting_for, poller.polls());
                return Ok(irq);
            }
            poller.tick()?;
            self.transport.delay_us(poller.interval_us());
        }
    }
}
