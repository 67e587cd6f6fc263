// libpn5180/src/device/commands.rs

//! Typed host commands. One method per opcode, plus the IRQ and
//! transceive-state helpers built on READ_REGISTER / WRITE_REGISTER and the
//! EEPROM info readers.

use crate::constants::*;
use crate::device::handle::Device;
use crate::protocol::{self, Command};
use crate::transport::Transport;
use crate::types::{IrqStatus, Register, RfConfig, RxStatus, TransceiveState, Version};
use crate::utils::WaitCondition;
use crate::{Error, Result};

impl<T: Transport, S> Device<T, S> {
    fn execute(&mut self, cmd: Command) -> Result<()> {
        self.transport.write(&cmd.encode())
    }

    /// WRITE_REGISTER (0x00)
    pub fn write_register(&mut self, reg: Register, value: u32) -> Result<()> {
        log::trace!("write_register {:#04x} = {:#010x}", reg.addr(), value);
        self.execute(Command::WriteRegister { reg, value })
    }

    /// WRITE_REGISTER_OR_MASK (0x01): set the bits of `mask`.
    pub fn write_register_or(&mut self, reg: Register, mask: u32) -> Result<()> {
        log::trace!("write_register_or {:#04x} |= {:#010x}", reg.addr(), mask);
        self.execute(Command::WriteRegisterOrMask { reg, mask })
    }

    /// WRITE_REGISTER_AND_MASK (0x02): keep only the bits of `mask`.
    pub fn write_register_and(&mut self, reg: Register, mask: u32) -> Result<()> {
        log::trace!("write_register_and {:#04x} &= {:#010x}", reg.addr(), mask);
        self.execute(Command::WriteRegisterAndMask { reg, mask })
    }

    /// READ_REGISTER (0x04)
    pub fn read_register(&mut self, reg: Register) -> Result<u32> {
        let rx = self
            .transport
            .transact(&Command::ReadRegister { reg }.encode(), 4)?;
        let value = protocol::decode_register_value(&rx)?;
        log::trace!("read_register {:#04x} -> {:#010x}", reg.addr(), value);
        Ok(value)
    }

    /// READ_EEPROM (0x07). Addresses above 254 are rejected before any bus
    /// traffic, as are reads running past the end of the EEPROM.
    pub fn read_eeprom(&mut self, addr: u8, len: u8) -> Result<Vec<u8>> {
        if addr > EEPROM_MAX_ADDR {
            log::warn!("read_eeprom: address {:#04x} beyond {:#04x}", addr, EEPROM_MAX_ADDR);
            return Err(Error::AddressOutOfRange {
                addr,
                max: EEPROM_MAX_ADDR,
            });
        }
        let room = EEPROM_MAX_ADDR as usize + 1 - addr as usize;
        if len as usize > room {
            return Err(Error::LengthOutOfRange {
                max: room,
                actual: len as usize,
            });
        }
        log::trace!("read_eeprom {:#04x} len {}", addr, len);
        self.transport
            .transact(&Command::ReadEeprom { addr, len }.encode(), len as usize)
    }

    /// SEND_DATA (0x09). Stops any running command, arms Transceive and
    /// checks the transceiver reached WaitTransmit before the payload goes
    /// out. A payload over 260 bytes is rejected without bus traffic.
    pub fn send_data(&mut self, payload: &[u8], valid_bits: u8) -> Result<()> {
        if payload.len() > MAX_SEND_DATA_LEN {
            log::warn!("send_data: {} bytes exceeds {}", payload.len(), MAX_SEND_DATA_LEN);
            return Err(Error::LengthOutOfRange {
                max: MAX_SEND_DATA_LEN,
                actual: payload.len(),
            });
        }

        self.write_register_and(Register::SYSTEM_CONFIG, SYSTEM_CONFIG_CLEAR_COMMAND)?;
        self.write_register_or(Register::SYSTEM_CONFIG, SYSTEM_CONFIG_TRANSCEIVE)?;

        let state = self.get_transceive_state();
        if state != TransceiveState::WaitTransmit {
            log::warn!("send_data: transceiver is {}, not sending", state);
            return Err(Error::UnexpectedTransceiveState {
                expected: TransceiveState::WaitTransmit,
                actual: state,
            });
        }

        log::trace!("send_data {} bytes, valid_bits {}", payload.len(), valid_bits);
        self.execute(Command::SendData {
            valid_bits,
            payload: payload.to_vec(),
        })
    }

    /// READ_DATA (0x0A). At most 508 bytes; larger requests are rejected
    /// without bus traffic.
    pub fn read_data(&mut self, len: usize) -> Result<Vec<u8>> {
        if len > MAX_READ_DATA_LEN {
            log::warn!("read_data: {} bytes exceeds {}", len, MAX_READ_DATA_LEN);
            return Err(Error::LengthOutOfRange {
                max: MAX_READ_DATA_LEN,
                actual: len,
            });
        }
        log::trace!("read_data {} bytes", len);
        self.transport.transact(&Command::ReadData.encode(), len)
    }

    /// LOAD_RF_CONFIG (0x11)
    pub fn load_rf_config(&mut self, config: RfConfig) -> Result<()> {
        log::debug!("load_rf_config tx {:#04x} rx {:#04x}", config.tx, config.rx);
        self.execute(Command::LoadRfConfig(config))
    }

    /// RF_ON (0x16). Blocks until TX_RFON is raised, then clears it.
    pub fn set_rf_on(&mut self) -> Result<()> {
        log::debug!("rf on");
        self.execute(Command::RfOn)?;
        let irq = self.config.irq;
        self.wait_irq(IrqStatus::TX_RFON, WaitCondition::RfOnIrq, irq)?;
        self.clear_irq_status(IrqStatus::TX_RFON)
    }

    /// RF_OFF (0x17). Only waits for TX_RFOFF when
    /// `DeviceConfig::wait_rf_off` is set; either way the bit is cleared.
    pub fn set_rf_off(&mut self) -> Result<()> {
        log::debug!("rf off");
        self.execute(Command::RfOff)?;
        if self.config.wait_rf_off {
            let irq = self.config.irq;
            self.wait_irq(IrqStatus::TX_RFOFF, WaitCondition::RfOffIrq, irq)?;
        }
        self.clear_irq_status(IrqStatus::TX_RFOFF)
    }

    /// Read IRQ_STATUS.
    pub fn get_irq_status(&mut self) -> Result<IrqStatus> {
        self.read_register(Register::IRQ_STATUS).map(IrqStatus::new)
    }

    /// Write `mask` to IRQ_CLEAR.
    pub fn clear_irq_status(&mut self, mask: u32) -> Result<()> {
        self.write_register(Register::IRQ_CLEAR, mask)
    }

    /// Read RX_STATUS after a reception.
    pub fn get_rx_status(&mut self) -> Result<RxStatus> {
        let reg = Register::RX_STATUS;
        let rx = self
            .transport
            .transact(&Command::ReadRegister { reg }.encode(), 4)?;
        protocol::decode_rx_status(&rx)
    }

    /// Transceiver state from RF_STATUS, failing on a bus error.
    pub fn read_transceive_state(&mut self) -> Result<TransceiveState> {
        self.read_register(Register::RF_STATUS)
            .map(TransceiveState::from_rf_status)
    }

    /// Transceiver state from RF_STATUS. A failed read falls back to
    /// `Idle`; the fallback is logged at warn level so it can be told apart
    /// from a genuine Idle reading. Use `read_transceive_state` to get the
    /// error instead.
    pub fn get_transceive_state(&mut self) -> TransceiveState {
        match self.read_transceive_state() {
            Ok(state) => {
                log::trace!("transceive state {}", state);
                state
            }
            Err(e) => {
                log::warn!("reading RF_STATUS failed ({}), assuming idle", e);
                TransceiveState::Idle
            }
        }
    }

    /// 16-byte die identifier.
    pub fn die_identifier(&mut self) -> Result<Vec<u8>> {
        self.read_eeprom(EEPROM_DIE_IDENTIFIER, EEPROM_DIE_IDENTIFIER_LEN)
    }

    /// Product version from EEPROM.
    pub fn product_version(&mut self) -> Result<Version> {
        self.read_version(EEPROM_PRODUCT_VERSION)
    }

    /// Firmware version from EEPROM.
    pub fn firmware_version(&mut self) -> Result<Version> {
        self.read_version(EEPROM_FIRMWARE_VERSION)
    }

    /// EEPROM layout version.
    pub fn eeprom_version(&mut self) -> Result<Version> {
        self.read_version(EEPROM_EEPROM_VERSION)
    }

    /// IRQ pin polarity byte.
    pub fn irq_pin_config(&mut self) -> Result<u8> {
        let data = self.read_eeprom(EEPROM_IRQ_PIN_CONFIG, 1)?;
        protocol::parser::byte_at(&data, 0)
    }

    fn read_version(&mut self, addr: u8) -> Result<Version> {
        let data = self.read_eeprom(addr, 2)?;
        protocol::decode_version(&data)
    }
}
