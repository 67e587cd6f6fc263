// helpers.rs: device construction and frame inspection

use libpn5180::constants::IRQ_CLEAR_INVENTORY;
use libpn5180::device::{Device, Initialized};
use libpn5180::protocol::Command;
use libpn5180::transport::mock::MockTransport;
use libpn5180::types::Register;

pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

pub fn initialized_mock_device(tags: &[(usize, Vec<u8>)]) -> Device<MockTransport, Initialized> {
    init_logger();
    libpn5180::test_support::initialized_mock_device(tags).unwrap()
}

/// True for the broad IRQ clear issued before the request and every EOF.
pub fn is_inventory_clear(cmd: &Command) -> bool {
    matches!(
        cmd,
        Command::WriteRegister { reg, value } if *reg == Register::IRQ_CLEAR && *value == IRQ_CLEAR_INVENTORY
    )
}

/// Commands sent after the first `skip` frames.
pub fn commands_after(mock: &MockTransport, skip: usize) -> Vec<Command> {
    mock.sent[skip..]
        .iter()
        .map(|f| Command::decode(f).unwrap())
        .collect()
}
