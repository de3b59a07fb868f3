// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Field-level wire traits.
//!
//! [`WireScalar`] maps one Rust element type to its wire kind and codec
//! calls; [`WireField`] lifts that to whole fields (scalars, fixed arrays,
//! char buffers) so generated message code can encode, decode, and describe
//! every field through a single seam. Enum newtypes implement `WireScalar`
//! over their underlying integer and tag themselves with `ENUM_NAME`.

use crate::schema::FieldKind;
use crate::wire::chars::CharBuf;
use crate::wire::cursor::PayloadCursor;
use crate::wire::writer::PayloadWriter;
use crate::Result as CoreResult;

/// One wire element: a primitive integer, float, or enum newtype.
pub trait WireScalar: Copy {
    /// Wire type of this element.
    const KIND: FieldKind;
    /// Associated enum name, for enum newtypes.
    const ENUM_NAME: Option<&'static str> = None;

    /// Default element value used before decoding.
    fn empty() -> Self;
    /// Append this element to a payload.
    fn write(self, writer: &mut PayloadWriter);
    /// Read one element from a payload.
    fn read(cursor: &mut PayloadCursor<'_>) -> CoreResult<Self>;
}

macro_rules! impl_wire_scalar {
    ($ty:ty, $kind:ident, $put:ident, $read:ident) => {
        impl WireScalar for $ty {
            const KIND: FieldKind = FieldKind::$kind;

            fn empty() -> Self {
                <$ty>::default()
            }

            fn write(self, writer: &mut PayloadWriter) {
                writer.$put(self);
            }

            fn read(cursor: &mut PayloadCursor<'_>) -> CoreResult<Self> {
                cursor.$read()
            }
        }
    };
}

impl_wire_scalar!(u8, UInt8, put_u8, read_u8);
impl_wire_scalar!(i8, Int8, put_i8, read_i8);
impl_wire_scalar!(u16, UInt16, put_u16, read_u16);
impl_wire_scalar!(i16, Int16, put_i16, read_i16);
impl_wire_scalar!(u32, UInt32, put_u32, read_u32);
impl_wire_scalar!(i32, Int32, put_i32, read_i32);
impl_wire_scalar!(u64, UInt64, put_u64, read_u64);
impl_wire_scalar!(i64, Int64, put_i64, read_i64);
impl_wire_scalar!(f32, Float32, put_f32, read_f32);
impl_wire_scalar!(f64, Float64, put_f64, read_f64);

/// One whole message field: a scalar, a fixed array, or a char buffer.
pub trait WireField {
    /// Wire type of one element.
    const KIND: FieldKind;
    /// Number of elements on the wire.
    const COUNT: usize;
    /// Associated enum name, for enum-typed fields.
    const ENUM_NAME: Option<&'static str>;

    /// Default field value used before decoding.
    fn empty() -> Self
    where
        Self: Sized;
    /// Append this field to a payload.
    fn write_to(&self, writer: &mut PayloadWriter);
    /// Read this field from a payload.
    fn read_from(cursor: &mut PayloadCursor<'_>) -> CoreResult<Self>
    where
        Self: Sized;
}

impl<T: WireScalar> WireField for T {
    const KIND: FieldKind = T::KIND;
    const COUNT: usize = 1;
    const ENUM_NAME: Option<&'static str> = T::ENUM_NAME;

    fn empty() -> Self {
        T::empty()
    }

    fn write_to(&self, writer: &mut PayloadWriter) {
        (*self).write(writer);
    }

    fn read_from(cursor: &mut PayloadCursor<'_>) -> CoreResult<Self> {
        T::read(cursor)
    }
}

impl<T: WireScalar, const N: usize> WireField for [T; N] {
    const KIND: FieldKind = T::KIND;
    const COUNT: usize = N;
    const ENUM_NAME: Option<&'static str> = T::ENUM_NAME;

    fn empty() -> Self {
        [T::empty(); N]
    }

    fn write_to(&self, writer: &mut PayloadWriter) {
        for value in self.iter() {
            value.write(writer);
        }
    }

    fn read_from(cursor: &mut PayloadCursor<'_>) -> CoreResult<Self> {
        let mut values = [T::empty(); N];
        for slot in values.iter_mut() {
            *slot = T::read(cursor)?;
        }
        Ok(values)
    }
}

impl<const N: usize> WireField for CharBuf<N> {
    const KIND: FieldKind = FieldKind::Char;
    const COUNT: usize = N;
    const ENUM_NAME: Option<&'static str> = None;

    fn empty() -> Self {
        CharBuf::new()
    }

    fn write_to(&self, writer: &mut PayloadWriter) {
        writer.put_bytes(self.as_bytes());
    }

    fn read_from(cursor: &mut PayloadCursor<'_>) -> CoreResult<Self> {
        let raw = cursor.read_bytes(N)?;
        let mut bytes = [0u8; N];
        bytes.copy_from_slice(raw);
        Ok(CharBuf::from_bytes(bytes))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scalar_kinds() {
        assert_eq!(<u8 as WireField>::KIND, FieldKind::UInt8);
        assert_eq!(<i16 as WireField>::KIND, FieldKind::Int16);
        assert_eq!(<u64 as WireField>::KIND, FieldKind::UInt64);
        assert_eq!(<f32 as WireField>::KIND, FieldKind::Float32);
        assert_eq!(<u8 as WireField>::COUNT, 1);
        assert_eq!(<u8 as WireField>::ENUM_NAME, None);
    }

    #[test]
    fn test_array_counts() {
        assert_eq!(<[u16; 8] as WireField>::KIND, FieldKind::UInt16);
        assert_eq!(<[u16; 8] as WireField>::COUNT, 8);
        assert_eq!(<[f32; 45] as WireField>::COUNT, 45);
        assert_eq!(<CharBuf<16> as WireField>::KIND, FieldKind::Char);
        assert_eq!(<CharBuf<16> as WireField>::COUNT, 16);
    }

    #[test]
    fn test_scalar_write_read() {
        let mut writer = PayloadWriter::new();
        0x1234u16.write(&mut writer);
        (-7i8).write(&mut writer);
        let payload = writer.finish();
        let mut cursor = PayloadCursor::new(&payload);
        assert_eq!(u16::read(&mut cursor).unwrap(), 0x1234);
        assert_eq!(i8::read(&mut cursor).unwrap(), -7);
    }

    #[test]
    fn test_array_write_read() {
        let values: [u16; 4] = [1, 2, 3, u16::MAX];
        let mut writer = PayloadWriter::new();
        values.write_to(&mut writer);
        let payload = writer.finish();
        assert_eq!(payload.len(), 8);
        let mut cursor = PayloadCursor::new(&payload);
        let decoded = <[u16; 4] as WireField>::read_from(&mut cursor).unwrap();
        assert_eq!(decoded, values);
    }

    #[test]
    fn test_array_read_truncated() {
        let payload = [0u8; 5];
        let mut cursor = PayloadCursor::new(&payload);
        assert!(<[u32; 2] as WireField>::read_from(&mut cursor).is_err());
    }

    #[test]
    fn test_char_buf_write_read() {
        let buf: CharBuf<8> = CharBuf::from("abc");
        let mut writer = PayloadWriter::new();
        buf.write_to(&mut writer);
        let payload = writer.finish();
        assert_eq!(payload, vec![b'a', b'b', b'c', 0, 0, 0, 0, 0]);
        let mut cursor = PayloadCursor::new(&payload);
        let decoded = <CharBuf<8> as WireField>::read_from(&mut cursor).unwrap();
        assert_eq!(decoded, buf);
    }

    #[test]
    fn test_empty_values() {
        assert_eq!(<u32 as WireField>::empty(), 0);
        assert_eq!(<[i16; 3] as WireField>::empty(), [0i16; 3]);
        assert!(<CharBuf<4> as WireField>::empty().is_empty());
    }

    #[test]
    fn test_large_array_beyond_default_limit() {
        let values = <[u8; 251] as WireField>::empty();
        let mut writer = PayloadWriter::new();
        values.write_to(&mut writer);
        assert_eq!(writer.len(), 251);
    }
}
