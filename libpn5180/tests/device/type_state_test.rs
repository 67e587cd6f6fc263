#[path = "../common/mod.rs"]
mod common;

use libpn5180::Error;
use libpn5180::config::DeviceConfig;
use libpn5180::device::{Device, DeviceBuilder};
use libpn5180::transport::mock::MockTransport;
use libpn5180::utils::WaitCondition;

#[test]
fn initialize_transitions_after_startup() -> anyhow::Result<()> {
    common::init_logger();
    let device = Device::new(MockTransport::new());
    let initialized = device.initialize()?;
    assert!(initialized.transport().began);
    assert_eq!(initialized.transport().irq(), 0);
    Ok(())
}

#[test]
fn unresponsive_chip_surfaces_not_responding() {
    common::init_logger();
    let mut mock = MockTransport::new();
    mock.startup_ready = false;
    let mut config = DeviceConfig::default();
    config.startup.max_polls = 10;

    let err = DeviceBuilder::new(mock).config(config).build().unwrap_err();
    assert!(matches!(
        err,
        Error::NotResponding {
            waiting_for: WaitCondition::IdleIrq,
            polls: 10
        }
    ));
}

#[test]
fn reset_can_be_repeated_on_initialized_device() -> anyhow::Result<()> {
    let mut dev = common::initialized_mock_device(&[]);
    dev.reset()?;
    assert_eq!(dev.transport().reset_pulses, 2);
    Ok(())
}
