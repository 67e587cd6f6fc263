use libpn5180::protocol::Command;
use libpn5180::types::{Register, RfConfig};
use proptest::prelude::*;

#[test]
fn fixed_frames_match_datasheet() {
    assert_eq!(Command::RfOn.encode(), vec![0x16, 0x00]);
    assert_eq!(Command::RfOff.encode(), vec![0x17, 0x00]);
    assert_eq!(Command::ReadData.encode(), vec![0x0A, 0x00]);
    assert_eq!(
        Command::LoadRfConfig(RfConfig::ISO15693).encode(),
        vec![0x11, 0x0D, 0x8D]
    );
    assert_eq!(
        Command::ReadEeprom { addr: 0x10, len: 2 }.encode(),
        vec![0x07, 0x10, 0x02]
    );
    assert_eq!(
        Command::ReadRegister {
            reg: Register::RF_STATUS
        }
        .encode(),
        vec![0x04, 0x1D]
    );
}

#[test]
fn send_data_carries_valid_bits() {
    let frame = Command::SendData {
        valid_bits: 5,
        payload: vec![0x06, 0x01, 0x00],
    }
    .encode();
    assert_eq!(frame, vec![0x09, 0x05, 0x06, 0x01, 0x00]);
}

#[test]
fn eof_is_send_data_without_payload() {
    let eof = Command::SendData {
        valid_bits: 0,
        payload: vec![],
    };
    assert_eq!(eof.encode(), vec![0x09, 0x00]);
    assert!(eof.is_eof());
}

proptest! {
    #[test]
    fn register_write_round_trips(opcode in 0u8..3, reg in any::<u8>(), value in any::<u32>()) {
        let reg = Register::new(reg);
        let cmd = match opcode {
            0 => Command::WriteRegister { reg, value },
            1 => Command::WriteRegisterOrMask { reg, mask: value },
            _ => Command::WriteRegisterAndMask { reg, mask: value },
        };
        let frame = cmd.encode();
        prop_assert_eq!(frame[0], opcode);
        prop_assert_eq!(frame[1], reg.addr());
        prop_assert_eq!(u32::from_le_bytes([frame[2], frame[3], frame[4], frame[5]]), value);
        prop_assert_eq!(Command::decode(&frame).unwrap(), cmd);
    }

    #[test]
    fn send_data_round_trips(payload in prop::collection::vec(any::<u8>(), 1..260)) {
        let cmd = Command::SendData { valid_bits: 0, payload };
        prop_assert_eq!(Command::decode(&cmd.encode()).unwrap(), cmd);
    }
}
