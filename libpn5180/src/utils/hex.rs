//! Hex helpers for frame dumps and UID display.

use std::fmt;

/// Convert a byte slice to a lowercase hex string without separators.
///
/// Example: `&[0xe0, 0x04]` -> `"e004"`
pub fn bytes_to_hex(bytes: &[u8]) -> String {
    HexSlice::compact(bytes).to_string()
}

/// Convert a byte slice to a lowercase hex string with a single space between
/// each byte.
///
/// Example: `&[0x09, 0x00]` -> `"09 00"`
pub fn bytes_to_hex_spaced(bytes: &[u8]) -> String {
    HexSlice(bytes).to_string()
}

/// Lazily formatted hex view of a byte slice. Meant for `log` macros so no
/// string is built unless the record is actually emitted.
#[derive(Clone, Copy)]
pub struct HexSlice<'a>(pub &'a [u8]);

impl<'a> HexSlice<'a> {
    /// View without separators.
    pub fn compact(bytes: &'a [u8]) -> Compact<'a> {
        Compact(bytes)
    }
}

impl fmt::Display for HexSlice<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, b) in self.0.iter().enumerate() {
            if i != 0 {
                f.write_str(" ")?;
            }
            write!(f, "{:02x}", b)?;
        }
        Ok(())
    }
}

impl fmt::Debug for HexSlice<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self)
    }
}

/// Separator-free variant of [`HexSlice`].
#[derive(Clone, Copy)]
pub struct Compact<'a>(&'a [u8]);

impl fmt::Display for Compact<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.iter().try_for_each(|b| write!(f, "{:02x}", b))
    }
}
