#[path = "../common/mod.rs"]
mod common;

use libpn5180::device::Device;
use libpn5180::transport::mock::MockTransport;
use libpn5180::types::TransceiveState;

#[test]
fn bits_26_to_24_select_the_state() {
    let mut dev = Device::new(MockTransport::new());
    // bits 26:24 = 0b101, every unrelated bit set
    dev.transport_mut().rf_status_override = Some(0xFDFF_FFFF);
    assert_eq!(dev.get_transceive_state(), TransceiveState::Receiving);
}

#[test]
fn failed_read_falls_back_to_idle() {
    common::init_logger();
    let mut dev = Device::new(MockTransport::new());
    dev.transport_mut().rf_status_override = Some(0x0100_0000);
    dev.transport_mut().set_read_failures(1);
    assert_eq!(dev.get_transceive_state(), TransceiveState::Idle);
    // strict variant sees the same failure as an error
    dev.transport_mut().set_read_failures(1);
    assert!(dev.read_transceive_state().is_err());
    assert_eq!(dev.read_transceive_state().unwrap(), TransceiveState::WaitTransmit);
}
