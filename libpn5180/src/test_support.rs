//! Test support helpers intended for use by unit and integration tests.
//!
//! These helpers centralize common MockTransport setup so tests across the
//! crate and tests/ directory can reuse the same logic.
#![allow(dead_code)]

use crate::device::{Device, DeviceBuilder, Initialized};
use crate::transport::mock::MockTransport;
use crate::Result;

/// Simulated chip with tag frames scripted per slot.
#[doc(hidden)]
pub fn mock_with_tags(tags: &[(usize, Vec<u8>)]) -> MockTransport {
    let mut mock = MockTransport::new();
    for (slot, frame) in tags {
        mock.push_slot_response(*slot, frame.clone());
    }
    mock
}

/// Convenience: create and initialize a Device<Initialized> backed by a
/// MockTransport with the given slot answers.
#[doc(hidden)]
pub fn initialized_mock_device(
    tags: &[(usize, Vec<u8>)],
) -> Result<Device<MockTransport, Initialized>> {
    DeviceBuilder::new(mock_with_tags(tags)).build()
}

/// Build a well-formed inventory answer: flags 0, DSFID, UID (wire order)
/// and a valid CRC.
#[doc(hidden)]
pub fn tag_frame(dsfid: u8, uid_wire: [u8; 8]) -> Vec<u8> {
    let mut frame = vec![0x00, dsfid];
    frame.extend_from_slice(&uid_wire);
    let crc = crate::protocol::crc16(&frame);
    frame.extend_from_slice(&crc.to_le_bytes());
    frame
}
