// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Payload writer for producing MAVLink-encoded data.
//!
//! The writer appends fixed-width little-endian values with no padding and
//! no length prefixes. Writing cannot fail: the buffer grows as needed and
//! every supported value has exactly one wire representation, so the write
//! methods chain without returning `Result`.

/// Append-only little-endian payload builder.
///
/// # Example
///
/// ```
/// use mavcodec::wire::PayloadWriter;
///
/// let mut writer = PayloadWriter::new();
/// writer.put_u32(42).put_u8(7);
/// assert_eq!(writer.finish(), vec![0x2A, 0x00, 0x00, 0x00, 0x07]);
/// ```
#[derive(Debug, Default)]
pub struct PayloadWriter {
    buffer: Vec<u8>,
}

impl PayloadWriter {
    /// Create a new empty writer.
    #[must_use]
    pub fn new() -> Self {
        Self { buffer: Vec::new() }
    }

    /// Create a new writer with pre-allocated capacity.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buffer: Vec::with_capacity(capacity),
        }
    }

    /// Number of bytes written so far.
    #[inline]
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    /// Check if nothing has been written.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Get the written bytes without consuming the writer.
    #[must_use]
    pub fn data(&self) -> &[u8] {
        &self.buffer
    }

    /// Consume the writer and return the payload bytes.
    #[must_use]
    pub fn finish(self) -> Vec<u8> {
        self.buffer
    }

    /// Clear the buffer for reuse.
    pub fn reset(&mut self) {
        self.buffer.clear();
    }

    /// Write a single byte.
    pub fn put_u8(&mut self, value: u8) -> &mut Self {
        self.buffer.push(value);
        self
    }

    /// Write a signed byte.
    pub fn put_i8(&mut self, value: i8) -> &mut Self {
        self.buffer.push(value as u8);
        self
    }

    /// Write a u16 value.
    pub fn put_u16(&mut self, value: u16) -> &mut Self {
        self.buffer.extend_from_slice(&value.to_le_bytes());
        self
    }

    /// Write an i16 value.
    pub fn put_i16(&mut self, value: i16) -> &mut Self {
        self.buffer.extend_from_slice(&value.to_le_bytes());
        self
    }

    /// Write a u32 value.
    pub fn put_u32(&mut self, value: u32) -> &mut Self {
        self.buffer.extend_from_slice(&value.to_le_bytes());
        self
    }

    /// Write an i32 value.
    pub fn put_i32(&mut self, value: i32) -> &mut Self {
        self.buffer.extend_from_slice(&value.to_le_bytes());
        self
    }

    /// Write a u64 value.
    pub fn put_u64(&mut self, value: u64) -> &mut Self {
        self.buffer.extend_from_slice(&value.to_le_bytes());
        self
    }

    /// Write an i64 value.
    pub fn put_i64(&mut self, value: i64) -> &mut Self {
        self.buffer.extend_from_slice(&value.to_le_bytes());
        self
    }

    /// Write an f32 value.
    pub fn put_f32(&mut self, value: f32) -> &mut Self {
        self.buffer.extend_from_slice(&value.to_le_bytes());
        self
    }

    /// Write an f64 value.
    pub fn put_f64(&mut self, value: f64) -> &mut Self {
        self.buffer.extend_from_slice(&value.to_le_bytes());
        self
    }

    /// Write raw bytes as-is.
    pub fn put_bytes(&mut self, bytes: &[u8]) -> &mut Self {
        self.buffer.extend_from_slice(bytes);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_put_u8() {
        let mut writer = PayloadWriter::new();
        writer.put_u8(0).put_u8(255);
        assert_eq!(writer.data(), &[0, 255]);
    }

    #[test]
    fn test_put_i8() {
        let mut writer = PayloadWriter::new();
        writer.put_i8(-1).put_i8(i8::MIN);
        assert_eq!(writer.data(), &[0xFF, 0x80]);
    }

    #[test]
    fn test_put_u16_little_endian() {
        let mut writer = PayloadWriter::new();
        writer.put_u16(0x1234);
        assert_eq!(writer.data(), &[0x34, 0x12]);
    }

    #[test]
    fn test_put_u32_little_endian() {
        let mut writer = PayloadWriter::new();
        writer.put_u32(0x1234_5678);
        assert_eq!(writer.data(), &[0x78, 0x56, 0x34, 0x12]);
    }

    #[test]
    fn test_put_u64_little_endian() {
        let mut writer = PayloadWriter::new();
        writer.put_u64(1_234_567_890_123);
        assert_eq!(
            writer.data(),
            &[0xCB, 0x04, 0xFB, 0x71, 0x1F, 0x01, 0x00, 0x00]
        );
    }

    #[test]
    fn test_put_floats() {
        let mut writer = PayloadWriter::new();
        writer.put_f32(3.5).put_f64(-2.25);
        let mut expected = Vec::new();
        expected.extend_from_slice(&3.5f32.to_le_bytes());
        expected.extend_from_slice(&(-2.25f64).to_le_bytes());
        assert_eq!(writer.data(), expected.as_slice());
    }

    #[test]
    fn test_put_f32_nan_preserves_bits() {
        let value = f32::from_bits(0x7FC0_0001);
        let mut writer = PayloadWriter::new();
        writer.put_f32(value);
        assert_eq!(writer.data(), &0x7FC0_0001u32.to_le_bytes());
    }

    #[test]
    fn test_put_bytes() {
        let mut writer = PayloadWriter::new();
        writer.put_bytes(&[1, 2, 3]);
        assert_eq!(writer.len(), 3);
        assert_eq!(writer.finish(), vec![1, 2, 3]);
    }

    #[test]
    fn test_chaining_mixed() {
        let mut writer = PayloadWriter::with_capacity(9);
        writer
            .put_u32(0)
            .put_u8(2)
            .put_u8(3)
            .put_u8(0)
            .put_u8(0)
            .put_u8(3);
        assert_eq!(writer.len(), 9);
        assert_eq!(
            writer.finish(),
            vec![0x00, 0x00, 0x00, 0x00, 0x02, 0x03, 0x00, 0x00, 0x03]
        );
    }

    #[test]
    fn test_reset() {
        let mut writer = PayloadWriter::new();
        writer.put_u16(7);
        assert!(!writer.is_empty());
        writer.reset();
        assert!(writer.is_empty());
        assert_eq!(writer.len(), 0);
    }
}
