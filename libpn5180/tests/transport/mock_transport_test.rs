#[path = "../common/mod.rs"]
mod common;

use libpn5180::transport::Transport;
use libpn5180::transport::mock::MockTransport;
use libpn5180::types::{IrqStatus, Register};

#[test]
fn mock_transport_write_and_read_register() {
    let mut m = MockTransport::new();
    m.write(&[0x00, 0x25, 0x01, 0x02, 0x03, 0x04]).unwrap();
    let rx = m.transact(&[0x04, 0x25], 4).unwrap();
    assert_eq!(rx, vec![0x01, 0x02, 0x03, 0x04]);
    assert_eq!(m.transactions, 2);
    assert_eq!(m.register(Register::TEMP_CONTROL), 0x0403_0201);
}

#[test]
fn mock_transport_rejects_garbage_frames() {
    let mut m = MockTransport::new();
    assert!(m.transact(&[0xEE], 0).is_err());
    // still recorded
    assert_eq!(m.sent.len(), 1);
}

#[test]
fn rf_commands_raise_confirmation_bits() {
    let mut m = MockTransport::new();
    m.write(&[0x16, 0x00]).unwrap();
    assert!(IrqStatus::new(m.irq()).contains(IrqStatus::TX_RFON));
    m.write(&[0x17, 0x00]).unwrap();
    assert!(IrqStatus::new(m.irq()).contains(IrqStatus::TX_RFOFF));
    assert!(!m.rf_field);
}

#[test]
fn eeprom_reads_from_image() {
    let mut m = MockTransport::new();
    m.eeprom[0x1A] = 0x01;
    assert_eq!(m.transact(&[0x07, 0x1A, 0x01], 1).unwrap(), vec![0x01]);
}
