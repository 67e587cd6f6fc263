// libpn5180/src/protocol/parser.rs
//! Bounds-checked readers over answer bytes.

use crate::{Error, Result};

fn short(data: &[u8], wanted: usize) -> Error {
    Error::InvalidLength {
        expected: wanted,
        actual: data.len(),
    }
}

/// At least `min` bytes.
pub fn ensure_len(data: &[u8], min: usize) -> Result<()> {
    if data.len() < min {
        return Err(short(data, min));
    }
    Ok(())
}

/// Exactly `len` bytes. Fixed-size chip answers go through this.
pub fn expect_len(data: &[u8], len: usize) -> Result<()> {
    if data.len() != len {
        return Err(short(data, len));
    }
    Ok(())
}

/// Byte at `idx`.
pub fn byte_at(data: &[u8], idx: usize) -> Result<u8> {
    data.get(idx).copied().ok_or_else(|| short(data, idx + 1))
}

/// `len` bytes starting at `idx`.
pub fn slice_at(data: &[u8], idx: usize, len: usize) -> Result<&[u8]> {
    data.get(idx..idx + len)
        .ok_or_else(|| short(data, idx + len))
}

/// Little-endian u16 at `idx`.
pub fn le_u16_at(data: &[u8], idx: usize) -> Result<u16> {
    let s = slice_at(data, idx, 2)?;
    Ok(u16::from_le_bytes([s[0], s[1]]))
}

/// Register payloads travel LSB first.
pub fn le_u32_at(data: &[u8], idx: usize) -> Result<u32> {
    let s = slice_at(data, idx, 4)?;
    Ok(u32::from_le_bytes([s[0], s[1], s[2], s[3]]))
}
