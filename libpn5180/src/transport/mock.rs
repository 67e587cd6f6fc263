// libpn5180/src/transport/mock.rs
//! In-memory PN5180 for tests: register file, IRQ bits and a scripted
//! set of tags answering in chosen slots.

use std::collections::HashMap;

use crate::constants::*;
use crate::protocol::Command;
use crate::transport::traits::Transport;
use crate::types::{IrqStatus, Register, RfConfig};
use crate::{Error, Result};

/// Mock transport for unit tests. It records every frame sent and answers
/// them from a small simulation of the chip: a register file, IRQ bits,
/// the transceive state derived from SYSTEM_CONFIG, and a scripted set of
/// tag answers for the 16 inventory slots.
#[derive(Debug)]
pub struct MockTransport {
    /// Every frame written, in order
    pub sent: Vec<Vec<u8>>,
    /// Number of `transact` calls
    pub transactions: usize,
    /// Register file, by address
    pub registers: HashMap<u8, u32>,
    /// EEPROM image
    pub eeprom: Vec<u8>,
    /// Tag frame answered in a given slot (0..16)
    pub slot_responses: HashMap<usize, Vec<u8>>,
    /// Slots in which the answering tags collided
    pub collision_slots: Vec<usize>,
    /// Testing hook: number of upcoming read exchanges that should fail
    pub read_failures: usize,
    /// Raise IDLE after reset (false simulates a dead chip)
    pub startup_ready: bool,
    /// Raise TX_RFON after RF_ON (false simulates a dead field)
    pub rf_on_confirms: bool,
    /// Force RF_STATUS to this raw value instead of simulating it
    pub rf_status_override: Option<u32>,
    /// Last LOAD_RF_CONFIG
    pub rf_config: Option<RfConfig>,
    /// RF field on
    pub rf_field: bool,
    /// RST line asserted
    pub reset_active: bool,
    /// Completed reset pulses
    pub reset_pulses: usize,
    /// `begin` was called
    pub began: bool,
    /// Sum of all requested pauses, in microseconds
    pub elapsed_us: u64,
    irq: u32,
    slot: Option<usize>,
    rx_buffer: Vec<u8>,
}

impl Default for MockTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl MockTransport {
    /// Fresh chip, IDLE not yet raised.
    pub fn new() -> Self {
        let mut eeprom = vec![0u8; EEPROM_MAX_ADDR as usize + 1];
        // product 3.5, firmware 3.5, eeprom 145.0
        eeprom[EEPROM_PRODUCT_VERSION as usize..][..2].copy_from_slice(&[0x05, 0x03]);
        eeprom[EEPROM_FIRMWARE_VERSION as usize..][..2].copy_from_slice(&[0x05, 0x03]);
        eeprom[EEPROM_EEPROM_VERSION as usize..][..2].copy_from_slice(&[0x00, 0x91]);
        Self {
            sent: Vec::new(),
            transactions: 0,
            registers: HashMap::new(),
            eeprom,
            slot_responses: HashMap::new(),
            collision_slots: Vec::new(),
            read_failures: 0,
            startup_ready: true,
            rf_on_confirms: true,
            rf_status_override: None,
            rf_config: None,
            rf_field: false,
            reset_active: false,
            reset_pulses: 0,
            began: false,
            elapsed_us: 0,
            irq: 0,
            slot: None,
            rx_buffer: Vec::new(),
        }
    }

    /// Script a tag answer for an inventory slot.
    pub fn push_slot_response(&mut self, slot: usize, frame: Vec<u8>) {
        self.slot_responses.insert(slot, frame);
    }

    /// Set how many subsequent read exchanges should fail (for tests).
    pub fn set_read_failures(&mut self, n: usize) {
        self.read_failures = n;
    }

    /// Current IRQ_STATUS bits.
    pub fn irq(&self) -> u32 {
        self.irq
    }

    /// Overwrite IRQ_STATUS.
    pub fn set_irq(&mut self, bits: u32) {
        self.irq = bits;
    }

    /// Current value of `reg`.
    pub fn register(&self, reg: Register) -> u32 {
        self.registers.get(&reg.addr()).copied().unwrap_or(0)
    }

    /// Every frame decoded back into a Command.
    pub fn commands(&self) -> Vec<Command> {
        self.sent
            .iter()
            .filter_map(|f| Command::decode(f).ok())
            .collect()
    }

    /// Number of EOF-only SEND_DATA frames sent.
    pub fn eof_count(&self) -> usize {
        self.commands().iter().filter(|c| c.is_eof()).count()
    }

    fn rf_status(&self) -> u32 {
        if let Some(raw) = self.rf_status_override {
            return raw;
        }
        let command = self.register(Register::SYSTEM_CONFIG) & SYSTEM_CONFIG_COMMAND_MASK;
        let state = if command == SYSTEM_CONFIG_TRANSCEIVE { 1 } else { 0 };
        state << RF_STATUS_TRANSCEIVE_SHIFT
    }

    fn read_register(&self, reg: Register) -> u32 {
        match reg {
            Register::IRQ_STATUS => self.irq,
            Register::RF_STATUS => self.rf_status(),
            other => self.register(other),
        }
    }

    fn write_register(&mut self, reg: Register, value: u32) {
        if reg == Register::IRQ_CLEAR {
            self.irq &= !value;
        } else {
            self.registers.insert(reg.addr(), value);
        }
    }

    /// A slot opens: raise the reception bits when a tag answers in it.
    fn open_slot(&mut self, slot: usize) {
        self.slot = Some(slot);
        match self.slot_responses.get(&slot) {
            Some(frame) => {
                let mut rx_status = frame.len() as u32 & RX_STATUS_LEN_MASK;
                if self.collision_slots.contains(&slot) {
                    rx_status |= RX_STATUS_COLLISION;
                }
                self.rx_buffer = frame.clone();
                self.registers.insert(Register::RX_STATUS.addr(), rx_status);
                self.irq |= IrqStatus::RX_SOF_DET | IrqStatus::RX;
            }
            None => {
                self.rx_buffer.clear();
                self.registers.insert(Register::RX_STATUS.addr(), 0);
            }
        }
    }

    fn execute(&mut self, cmd: Command, rx_len: usize) -> Vec<u8> {
        match cmd {
            Command::WriteRegister { reg, value } => self.write_register(reg, value),
            Command::WriteRegisterOrMask { reg, mask } => {
                let v = self.read_register(reg) | mask;
                self.write_register(reg, v);
            }
            Command::WriteRegisterAndMask { reg, mask } => {
                let v = self.read_register(reg) & mask;
                self.write_register(reg, v);
            }
            Command::ReadRegister { reg } => {
                return self.read_register(reg).to_le_bytes()[..rx_len.min(4)].to_vec();
            }
            Command::ReadEeprom { addr, len } => {
                let start = addr as usize;
                let end = (start + len as usize).min(self.eeprom.len());
                return self.eeprom[start.min(end)..end].to_vec();
            }
            Command::SendData { payload, .. } => {
                if payload.is_empty() {
                    let next = self.slot.map_or(0, |s| s + 1);
                    self.open_slot(next);
                } else if payload.get(1) == Some(&ISO15693_CMD_INVENTORY) {
                    self.open_slot(0);
                }
            }
            Command::ReadData => {
                let mut out = self.rx_buffer.clone();
                out.resize(rx_len, 0);
                return out;
            }
            Command::LoadRfConfig(config) => self.rf_config = Some(config),
            Command::RfOn => {
                self.rf_field = true;
                if self.rf_on_confirms {
                    self.irq |= IrqStatus::TX_RFON;
                }
            }
            Command::RfOff => {
                self.rf_field = false;
                self.irq |= IrqStatus::TX_RFOFF;
            }
        }
        Vec::new()
    }
}

impl Transport for MockTransport {
    fn transact(&mut self, tx: &[u8], rx_len: usize) -> Result<Vec<u8>> {
        self.transactions += 1;
        self.sent.push(tx.to_vec());

        if rx_len > 0 && self.read_failures > 0 {
            self.read_failures -= 1;
            return Err(Error::Spi(embedded_hal::spi::ErrorKind::Other));
        }

        let cmd = Command::decode(tx)?;
        let mut rx = self.execute(cmd, rx_len);
        rx.resize(rx_len, 0);
        Ok(rx)
    }

    fn begin(&mut self) -> Result<()> {
        self.began = true;
        self.reset_active = false;
        Ok(())
    }

    fn set_reset(&mut self, active: bool) -> Result<()> {
        if self.reset_active && !active {
            // chip boots: registers back to defaults, IDLE raised when alive
            self.reset_pulses += 1;
            self.registers.clear();
            self.slot = None;
            self.rx_buffer.clear();
            self.rf_field = false;
            self.irq = if self.startup_ready { IrqStatus::IDLE } else { 0 };
        }
        self.reset_active = active;
        Ok(())
    }

    fn delay_ms(&mut self, ms: u32) {
        self.elapsed_us += ms as u64 * 1000;
    }

    fn delay_us(&mut self, us: u32) {
        self.elapsed_us += us as u64;
    }
}
