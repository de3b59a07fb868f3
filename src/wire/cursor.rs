// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Payload cursor for reading MAVLink-encoded data.
//!
//! MAVLink payloads are packed little-endian with no padding, so the cursor
//! is a plain bounds-checked reader: every read consumes exactly the field
//! width and fails with [`CodecError::TruncatedPayload`] when the buffer
//! runs out mid-field.

use byteorder::{ByteOrder, LittleEndian};

use crate::CodecError;
use crate::Result as CoreResult;

/// Bounds-checked reader over a packed little-endian payload.
///
/// # Example
///
/// ```
/// use mavcodec::wire::PayloadCursor;
///
/// let data = [0x2A, 0x00, 0x00, 0x00];
/// let mut cursor = PayloadCursor::new(&data);
/// assert_eq!(cursor.read_u32().unwrap(), 42);
/// assert!(cursor.is_at_end());
/// ```
pub struct PayloadCursor<'a> {
    /// The payload bytes
    data: &'a [u8],
    /// Current read position
    offset: usize,
}

impl<'a> PayloadCursor<'a> {
    /// Create a new cursor over a payload buffer.
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, offset: 0 }
    }

    /// Get the current position relative to the data start.
    #[inline]
    pub fn position(&self) -> usize {
        self.offset
    }

    /// Get the remaining bytes available to read.
    #[inline]
    pub fn remaining(&self) -> usize {
        self.data.len().saturating_sub(self.offset)
    }

    /// Check if at end of buffer.
    #[inline]
    pub fn is_at_end(&self) -> bool {
        self.offset >= self.data.len()
    }

    /// Read a single byte.
    pub fn read_u8(&mut self) -> CoreResult<u8> {
        if self.offset >= self.data.len() {
            return Err(CodecError::truncated_payload(1, 0, self.offset as u64));
        }
        let value = self.data[self.offset];
        self.offset += 1;
        Ok(value)
    }

    /// Read a signed byte.
    pub fn read_i8(&mut self) -> CoreResult<i8> {
        Ok(self.read_u8()? as i8)
    }

    /// Read a u16 value.
    pub fn read_u16(&mut self) -> CoreResult<u16> {
        if self.offset + 2 > self.data.len() {
            return Err(CodecError::truncated_payload(
                2,
                self.remaining(),
                self.offset as u64,
            ));
        }
        let value = LittleEndian::read_u16(&self.data[self.offset..]);
        self.offset += 2;
        Ok(value)
    }

    /// Read an i16 value.
    pub fn read_i16(&mut self) -> CoreResult<i16> {
        Ok(self.read_u16()? as i16)
    }

    /// Read a u32 value.
    pub fn read_u32(&mut self) -> CoreResult<u32> {
        if self.offset + 4 > self.data.len() {
            return Err(CodecError::truncated_payload(
                4,
                self.remaining(),
                self.offset as u64,
            ));
        }
        let value = LittleEndian::read_u32(&self.data[self.offset..]);
        self.offset += 4;
        Ok(value)
    }

    /// Read an i32 value.
    pub fn read_i32(&mut self) -> CoreResult<i32> {
        Ok(self.read_u32()? as i32)
    }

    /// Read a u64 value.
    pub fn read_u64(&mut self) -> CoreResult<u64> {
        if self.offset + 8 > self.data.len() {
            return Err(CodecError::truncated_payload(
                8,
                self.remaining(),
                self.offset as u64,
            ));
        }
        let value = LittleEndian::read_u64(&self.data[self.offset..]);
        self.offset += 8;
        Ok(value)
    }

    /// Read an i64 value.
    pub fn read_i64(&mut self) -> CoreResult<i64> {
        Ok(self.read_u64()? as i64)
    }

    /// Read an f32 value.
    pub fn read_f32(&mut self) -> CoreResult<f32> {
        if self.offset + 4 > self.data.len() {
            return Err(CodecError::truncated_payload(
                4,
                self.remaining(),
                self.offset as u64,
            ));
        }
        let value = LittleEndian::read_f32(&self.data[self.offset..]);
        self.offset += 4;
        Ok(value)
    }

    /// Read an f64 value.
    pub fn read_f64(&mut self) -> CoreResult<f64> {
        if self.offset + 8 > self.data.len() {
            return Err(CodecError::truncated_payload(
                8,
                self.remaining(),
                self.offset as u64,
            ));
        }
        let value = LittleEndian::read_f64(&self.data[self.offset..]);
        self.offset += 8;
        Ok(value)
    }

    /// Read a fixed number of raw bytes.
    pub fn read_bytes(&mut self, count: usize) -> CoreResult<&'a [u8]> {
        if self.offset + count > self.data.len() {
            return Err(CodecError::truncated_payload(
                count,
                self.remaining(),
                self.offset as u64,
            ));
        }
        let slice = &self.data[self.offset..self.offset + count];
        self.offset += count;
        Ok(slice)
    }

    /// Skip over a fixed number of bytes.
    pub fn skip(&mut self, count: usize) -> CoreResult<()> {
        if self.offset + count > self.data.len() {
            return Err(CodecError::truncated_payload(
                count,
                self.remaining(),
                self.offset as u64,
            ));
        }
        self.offset += count;
        Ok(())
    }

    /// Peek at the next byte without consuming it.
    pub fn peek(&self) -> Option<u8> {
        self.data.get(self.offset).copied()
    }
}
