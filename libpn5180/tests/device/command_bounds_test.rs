#[path = "../common/mod.rs"]
mod common;

use libpn5180::Error;
use libpn5180::device::Device;
use libpn5180::transport::mock::MockTransport;
use proptest::prelude::*;

proptest! {
    #[test]
    fn eeprom_beyond_254_never_touches_bus(len in any::<u8>()) {
        let mut dev = Device::new(MockTransport::new());
        let res = dev.read_eeprom(255, len);
        let is_range_err = matches!(res, Err(Error::AddressOutOfRange { addr: 255, max: 254 }));
        prop_assert!(is_range_err);
        prop_assert_eq!(dev.transport().transactions, 0);
    }

    #[test]
    fn oversized_send_never_touches_bus(extra in 1usize..64) {
        let mut dev = Device::new(MockTransport::new());
        let payload = vec![0xA5; 260 + extra];
        prop_assert!(dev.send_data(&payload, 0).is_err());
        prop_assert_eq!(dev.transport().transactions, 0);
    }

    #[test]
    fn oversized_read_never_touches_bus(len in 509usize..4096) {
        let mut dev = Device::new(MockTransport::new());
        prop_assert!(dev.read_data(len).is_err());
        prop_assert_eq!(dev.transport().transactions, 0);
    }
}

#[test]
fn limits_themselves_are_accepted() -> anyhow::Result<()> {
    let mut dev = Device::new(MockTransport::new());
    dev.read_eeprom(254, 1)?;
    dev.send_data(&[0u8; 260], 0)?;
    assert_eq!(dev.read_data(508)?.len(), 508);
    Ok(())
}
