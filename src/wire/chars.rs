// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Fixed-length char buffers.
//!
//! MAVLink text fields occupy exactly `N` bytes on the wire with no length
//! prefix and no guaranteed terminator. [`CharBuf`] pins the write policy:
//! values shorter than `N` are zero-filled, values longer than `N` are
//! truncated at `N` bytes. Reads stop at the first NUL.

use std::fmt;

/// Fixed `N`-byte text field.
///
/// # Example
///
/// ```
/// use mavcodec::wire::CharBuf;
///
/// let name: CharBuf<10> = CharBuf::from("GCS");
/// assert_eq!(name.as_str(), Some("GCS"));
/// assert_eq!(name.as_bytes()[3], 0);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct CharBuf<const N: usize> {
    bytes: [u8; N],
}

impl<const N: usize> CharBuf<N> {
    /// Create an empty (all-zero) buffer.
    pub const fn new() -> Self {
        Self { bytes: [0u8; N] }
    }

    /// Create a buffer from raw wire bytes.
    pub const fn from_bytes(bytes: [u8; N]) -> Self {
        Self { bytes }
    }

    /// Total wire width in bytes.
    pub const fn capacity(&self) -> usize {
        N
    }

    /// Length of the stored text, up to the first NUL.
    pub fn text_len(&self) -> usize {
        self.bytes.iter().position(|&b| b == 0).unwrap_or(N)
    }

    /// Check if the buffer holds no text.
    pub fn is_empty(&self) -> bool {
        self.bytes.first().map_or(true, |&b| b == 0)
    }

    /// Raw wire bytes, including any zero fill.
    pub fn as_bytes(&self) -> &[u8; N] {
        &self.bytes
    }

    /// View the content up to the first NUL as UTF-8 text.
    ///
    /// Returns `None` when the stored bytes are not valid UTF-8, which can
    /// happen for payloads produced by other systems or after a bytewise
    /// truncation split a multi-byte character.
    pub fn as_str(&self) -> Option<&str> {
        std::str::from_utf8(&self.bytes[..self.text_len()]).ok()
    }

    /// Content up to the first NUL, with invalid UTF-8 replaced.
    pub fn to_text(&self) -> String {
        String::from_utf8_lossy(&self.bytes[..self.text_len()]).into_owned()
    }

    /// Store `text`, zero-filling when shorter than `N` and truncating at
    /// `N` bytes when longer.
    pub fn set(&mut self, text: &str) {
        self.bytes = [0u8; N];
        let raw = text.as_bytes();
        let take = raw.len().min(N);
        self.bytes[..take].copy_from_slice(&raw[..take]);
    }
}

impl<const N: usize> Default for CharBuf<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> From<&str> for CharBuf<N> {
    fn from(text: &str) -> Self {
        let mut buf = Self::new();
        buf.set(text);
        buf
    }
}

impl<const N: usize> fmt::Display for CharBuf<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_text())
    }
}

impl<const N: usize> fmt::Debug for CharBuf<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CharBuf({:?})", self.to_text())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_value_is_zero_filled() {
        let buf: CharBuf<8> = CharBuf::from("abc");
        assert_eq!(buf.as_bytes(), &[b'a', b'b', b'c', 0, 0, 0, 0, 0]);
        assert_eq!(buf.text_len(), 3);
    }

    #[test]
    fn test_long_value_is_truncated() {
        let buf: CharBuf<4> = CharBuf::from("abcdefgh");
        assert_eq!(buf.as_bytes(), &[b'a', b'b', b'c', b'd']);
        assert_eq!(buf.as_str(), Some("abcd"));
    }

    #[test]
    fn test_exact_fit_has_no_terminator() {
        let buf: CharBuf<3> = CharBuf::from("xyz");
        assert_eq!(buf.as_bytes(), &[b'x', b'y', b'z']);
        assert_eq!(buf.text_len(), 3);
        assert_eq!(buf.as_str(), Some("xyz"));
    }

    #[test]
    fn test_read_stops_at_first_nul() {
        let buf: CharBuf<6> = CharBuf::from_bytes([b'h', b'i', 0, b'x', b'y', 0]);
        assert_eq!(buf.as_str(), Some("hi"));
        assert_eq!(buf.to_text(), "hi");
    }

    #[test]
    fn test_empty() {
        let buf: CharBuf<5> = CharBuf::new();
        assert!(buf.is_empty());
        assert_eq!(buf.text_len(), 0);
        assert_eq!(buf.as_str(), Some(""));
        assert_eq!(buf, CharBuf::default());
    }

    #[test]
    fn test_set_replaces_previous_content() {
        let mut buf: CharBuf<8> = CharBuf::from("longest");
        buf.set("no");
        assert_eq!(buf.as_bytes(), &[b'n', b'o', 0, 0, 0, 0, 0, 0]);
    }

    #[test]
    fn test_invalid_utf8_is_lossy() {
        let buf: CharBuf<3> = CharBuf::from_bytes([0xFF, 0xFE, 0x41]);
        assert_eq!(buf.as_str(), None);
        assert_eq!(buf.to_text(), "\u{FFFD}\u{FFFD}A");
    }

    #[test]
    fn test_display_and_debug() {
        let buf: CharBuf<10> = CharBuf::from("GCS");
        assert_eq!(buf.to_string(), "GCS");
        assert_eq!(format!("{buf:?}"), "CharBuf(\"GCS\")");
    }

    #[test]
    fn test_capacity_larger_than_32() {
        let buf: CharBuf<50> = CharBuf::from("status message");
        assert_eq!(buf.capacity(), 50);
        assert_eq!(buf.as_str(), Some("status message"));
    }
}
