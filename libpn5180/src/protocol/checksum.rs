// libpn5180/src/protocol/checksum.rs
//! ISO15693 CRC.

/// ISO15693 CRC-16 (poly 0x1021 reflected, init 0xFFFF, final complement).
/// Tags append it LSB first after the response body.
pub fn crc16(data: &[u8]) -> u16 {
    let crc = data.iter().fold(0xFFFFu16, |mut crc, &b| {
        crc ^= b as u16;
        for _ in 0..8 {
            crc = if crc & 1 != 0 {
                (crc >> 1) ^ 0x8408
            } else {
                crc >> 1
            };
        }
        crc
    });
    !crc
}
