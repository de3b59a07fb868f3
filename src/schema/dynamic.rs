// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Spec-driven payload access without the typed message structs.
//!
//! Walks a [`MessageSpec`] field table directly against raw bytes, so
//! callers that only know a message at runtime (the CLI, log tooling)
//! can read and build payloads. The typed structs in [`crate::messages`]
//! remain the fast path; this module trades speed for flexibility.

use serde::Serialize;
use serde_json::Value as JsonValue;

use super::{FieldKind, FieldSpec, MessageSpec};
use crate::core::{CodecError, FieldValue, Result};
use crate::wire::{PayloadCursor, PayloadWriter};

/// One decoded field: the wire name paired with its value.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldReading {
    pub name: &'static str,
    pub value: FieldValue,
}

/// Decode a payload into per-field values following the descriptor's wire order.
///
/// `uint8_t` arrays come back as [`FieldValue::Bytes`] and `char` arrays
/// as [`FieldValue::Text`] (text up to the first NUL, lossy on invalid
/// UTF-8). Bytes past the end of the field table are ignored. Cursor
/// underruns surface as [`CodecError::FieldDecodeError`] naming the
/// field being read.
pub fn decode_fields(spec: &MessageSpec, payload: &[u8]) -> Result<Vec<FieldReading>> {
    let mut cursor = PayloadCursor::new(payload);
    let mut readings = Vec::with_capacity(spec.fields.len());
    for field in spec.fields {
        let value = read_field(field, &mut cursor).map_err(|e| {
            CodecError::field_decode(
                field.name,
                field.type_signature(),
                cursor.position() as u64,
                e.to_string(),
            )
        })?;
        readings.push(FieldReading {
            name: field.name,
            value,
        });
    }
    Ok(readings)
}

fn read_field(field: &FieldSpec, cursor: &mut PayloadCursor<'_>) -> Result<FieldValue> {
    if field.kind == FieldKind::Char {
        let raw = cursor.read_bytes(field.count)?;
        let text_len = raw.iter().position(|&b| b == 0).unwrap_or(raw.len());
        return Ok(FieldValue::Text(
            String::from_utf8_lossy(&raw[..text_len]).into_owned(),
        ));
    }
    if field.count == 1 {
        let value = read_scalar(field.kind, cursor)?;
        if let Some(enum_name) = field.enum_name {
            note_unlisted_enum_value(field.name, enum_name, &value);
        }
        return Ok(value);
    }
    if field.kind == FieldKind::UInt8 {
        return Ok(FieldValue::Bytes(cursor.read_bytes(field.count)?.to_vec()));
    }
    let mut items = Vec::with_capacity(field.count);
    for _ in 0..field.count {
        items.push(read_scalar(field.kind, cursor)?);
    }
    Ok(FieldValue::Array(items))
}

// Bitmask combinations and future-dialect values land here routinely, so
// this stays at debug level and only on the descriptor-driven path.
fn note_unlisted_enum_value(field_name: &str, enum_name: &str, value: &FieldValue) {
    let raw = match value {
        FieldValue::UInt8(v) => u64::from(*v),
        FieldValue::UInt16(v) => u64::from(*v),
        FieldValue::UInt32(v) => u64::from(*v),
        FieldValue::UInt64(v) => *v,
        _ => return,
    };
    if let Some(meta) = super::enum_metadata(enum_name) {
        if meta.entry_for_value(raw).is_none() {
            tracing::debug!(
                "Field '{}' holds {} which is not a declared {} entry",
                field_name,
                raw,
                enum_name
            );
        }
    }
}

fn read_scalar(kind: FieldKind, cursor: &mut PayloadCursor<'_>) -> Result<FieldValue> {
    Ok(match kind {
        FieldKind::UInt8 | FieldKind::Char => FieldValue::UInt8(cursor.read_u8()?),
        FieldKind::Int8 => FieldValue::Int8(cursor.read_i8()?),
        FieldKind::UInt16 => FieldValue::UInt16(cursor.read_u16()?),
        FieldKind::Int16 => FieldValue::Int16(cursor.read_i16()?),
        FieldKind::UInt32 => FieldValue::UInt32(cursor.read_u32()?),
        FieldKind::Int32 => FieldValue::Int32(cursor.read_i32()?),
        FieldKind::UInt64 => FieldValue::UInt64(cursor.read_u64()?),
        FieldKind::Int64 => FieldValue::Int64(cursor.read_i64()?),
        FieldKind::Float32 => FieldValue::Float32(cursor.read_f32()?),
        FieldKind::Float64 => FieldValue::Float64(cursor.read_f64()?),
    })
}

/// Build a payload from a JSON object keyed by field name.
///
/// Missing fields encode as zero. `char` fields take a string (NUL
/// padded or truncated to the declared width); scalar arrays take a
/// JSON array, zero filled when shorter than the declared count. Keys
/// that name no field, values of the wrong JSON type, and integers out
/// of the field's range are [`CodecError::InvalidFieldValue`].
pub fn encode_fields(
    spec: &MessageSpec,
    values: &serde_json::Map<String, JsonValue>,
) -> Result<Vec<u8>> {
    for key in values.keys() {
        if spec.field(key).is_none() {
            return Err(CodecError::invalid_field_value(
                key.as_str(),
                format!("not a field of {}", spec.name),
            ));
        }
    }

    let mut writer = PayloadWriter::with_capacity(spec.encoded_len);
    for field in spec.fields {
        let value = values.get(field.name);
        if field.kind == FieldKind::Char {
            write_text(field, value, &mut writer)?;
        } else if field.count == 1 {
            write_scalar(field, value, &mut writer)?;
        } else {
            let items: &[JsonValue] = match value {
                None => &[],
                Some(JsonValue::Array(items)) => items.as_slice(),
                Some(other) => {
                    return Err(CodecError::invalid_field_value(
                        field.name,
                        format!("expected an array, got {other}"),
                    ));
                }
            };
            if items.len() > field.count {
                return Err(CodecError::invalid_field_value(
                    field.name,
                    format!("expected at most {} elements, got {}", field.count, items.len()),
                ));
            }
            for slot in 0..field.count {
                write_scalar(field, items.get(slot), &mut writer)?;
            }
        }
    }
    Ok(writer.finish())
}

fn write_text(
    field: &FieldSpec,
    value: Option<&JsonValue>,
    writer: &mut PayloadWriter,
) -> Result<()> {
    let text = match value {
        None => "",
        Some(JsonValue::String(s)) => s.as_str(),
        Some(other) => {
            return Err(CodecError::invalid_field_value(
                field.name,
                format!("expected a string, got {other}"),
            ));
        }
    };
    let mut buf = vec![0u8; field.count];
    let bytes = text.as_bytes();
    let copy = bytes.len().min(field.count);
    buf[..copy].copy_from_slice(&bytes[..copy]);
    writer.put_bytes(&buf);
    Ok(())
}

fn write_scalar(
    field: &FieldSpec,
    value: Option<&JsonValue>,
    writer: &mut PayloadWriter,
) -> Result<()> {
    match field.kind {
        FieldKind::UInt8 | FieldKind::Char => {
            writer.put_u8(unsigned(field, value, u64::from(u8::MAX))? as u8);
        }
        FieldKind::UInt16 => {
            writer.put_u16(unsigned(field, value, u64::from(u16::MAX))? as u16);
        }
        FieldKind::UInt32 => {
            writer.put_u32(unsigned(field, value, u64::from(u32::MAX))? as u32);
        }
        FieldKind::UInt64 => {
            writer.put_u64(unsigned(field, value, u64::MAX)?);
        }
        FieldKind::Int8 => {
            writer.put_i8(signed(field, value, i64::from(i8::MIN), i64::from(i8::MAX))? as i8);
        }
        FieldKind::Int16 => {
            writer.put_i16(signed(field, value, i64::from(i16::MIN), i64::from(i16::MAX))? as i16);
        }
        FieldKind::Int32 => {
            writer.put_i32(signed(field, value, i64::from(i32::MIN), i64::from(i32::MAX))? as i32);
        }
        FieldKind::Int64 => {
            writer.put_i64(signed(field, value, i64::MIN, i64::MAX)?);
        }
        FieldKind::Float32 => {
            writer.put_f32(float(field, value)? as f32);
        }
        FieldKind::Float64 => {
            writer.put_f64(float(field, value)?);
        }
    }
    Ok(())
}

fn unsigned(field: &FieldSpec, value: Option<&JsonValue>, max: u64) -> Result<u64> {
    let Some(value) = value else { return Ok(0) };
    let n = value.as_u64().ok_or_else(|| {
        CodecError::invalid_field_value(
            field.name,
            format!("expected an unsigned integer, got {value}"),
        )
    })?;
    if n > max {
        return Err(CodecError::invalid_field_value(
            field.name,
            format!("{n} does not fit in {}", field.kind.type_name()),
        ));
    }
    Ok(n)
}

fn signed(field: &FieldSpec, value: Option<&JsonValue>, min: i64, max: i64) -> Result<i64> {
    let Some(value) = value else { return Ok(0) };
    let n = value.as_i64().ok_or_else(|| {
        CodecError::invalid_field_value(field.name, format!("expected an integer, got {value}"))
    })?;
    if n < min || n > max {
        return Err(CodecError::invalid_field_value(
            field.name,
            format!("{n} does not fit in {}", field.kind.type_name()),
        ));
    }
    Ok(n)
}

fn float(field: &FieldSpec, value: Option<&JsonValue>) -> Result<f64> {
    let Some(value) = value else { return Ok(0.0) };
    value.as_f64().ok_or_else(|| {
        CodecError::invalid_field_value(field.name, format!("expected a number, got {value}"))
    })
}

/// Render readings as a flat JSON object keyed by field name.
///
/// Values use their natural JSON shape (numbers, strings, arrays);
/// non-finite floats become `null`, byte arrays become number arrays.
pub fn readings_to_json(readings: &[FieldReading]) -> JsonValue {
    let mut object = serde_json::Map::with_capacity(readings.len());
    for reading in readings {
        object.insert(reading.name.to_string(), value_to_json(&reading.value));
    }
    JsonValue::Object(object)
}

fn value_to_json(value: &FieldValue) -> JsonValue {
    match value {
        FieldValue::Int8(v) => JsonValue::from(*v),
        FieldValue::Int16(v) => JsonValue::from(*v),
        FieldValue::Int32(v) => JsonValue::from(*v),
        FieldValue::Int64(v) => JsonValue::from(*v),
        FieldValue::UInt8(v) => JsonValue::from(*v),
        FieldValue::UInt16(v) => JsonValue::from(*v),
        FieldValue::UInt32(v) => JsonValue::from(*v),
        FieldValue::UInt64(v) => JsonValue::from(*v),
        FieldValue::Float32(v) => JsonValue::from(f64::from(*v)),
        FieldValue::Float64(v) => JsonValue::from(*v),
        FieldValue::Text(s) => JsonValue::from(s.as_str()),
        FieldValue::Bytes(b) => JsonValue::from(b.clone()),
        FieldValue::Array(items) => JsonValue::Array(items.iter().map(value_to_json).collect()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const TEST_FIELDS: &[FieldSpec] = &[
        FieldSpec {
            name: "time_boot_ms",
            kind: FieldKind::UInt32,
            count: 1,
            enum_name: None,
            description: "Boot timestamp",
        },
        FieldSpec {
            name: "temperature",
            kind: FieldKind::Int16,
            count: 1,
            enum_name: None,
            description: "Temperature",
        },
        FieldSpec {
            name: "readings",
            kind: FieldKind::UInt16,
            count: 3,
            enum_name: None,
            description: "Raw readings",
        },
        FieldSpec {
            name: "label",
            kind: FieldKind::Char,
            count: 6,
            enum_name: None,
            description: "Label",
        },
        FieldSpec {
            name: "blob",
            kind: FieldKind::UInt8,
            count: 2,
            enum_name: None,
            description: "Opaque bytes",
        },
    ];

    const TEST_SPEC: MessageSpec = MessageSpec {
        id: 60000,
        name: "TEST_RECORD",
        crc_extra: 0,
        encoded_len: 20,
        description: "Synthetic record for dynamic coding tests",
        fields: TEST_FIELDS,
    };

    #[test]
    fn test_decode_fields() {
        let payload = [
            0x10, 0x27, 0x00, 0x00, // time_boot_ms = 10000
            0xF6, 0xFF, // temperature = -10
            0x01, 0x00, 0x02, 0x00, 0x03, 0x00, // readings = [1, 2, 3]
            b'a', b'b', b'c', 0x00, 0x00, 0x00, // label = "abc"
            0xDE, 0xAD, // blob
        ];
        let readings = decode_fields(&TEST_SPEC, &payload).unwrap();
        assert_eq!(readings.len(), 5);
        assert_eq!(readings[0].value, FieldValue::UInt32(10_000));
        assert_eq!(readings[1].value, FieldValue::Int16(-10));
        assert_eq!(
            readings[2].value,
            FieldValue::Array(vec![
                FieldValue::UInt16(1),
                FieldValue::UInt16(2),
                FieldValue::UInt16(3),
            ])
        );
        assert_eq!(readings[3].value, FieldValue::Text("abc".to_string()));
        assert_eq!(readings[4].value, FieldValue::Bytes(vec![0xDE, 0xAD]));
    }

    #[test]
    fn test_decode_truncated_names_field() {
        let payload = [0x10, 0x27, 0x00, 0x00, 0xF6]; // cut inside temperature
        let err = decode_fields(&TEST_SPEC, &payload).unwrap_err();
        match err {
            CodecError::FieldDecodeError { field_name, .. } => {
                assert_eq!(field_name, "temperature");
            }
            other => panic!("expected FieldDecodeError, got {other:?}"),
        }
    }

    #[test]
    fn test_encode_fields_round_trip() {
        let mut values = serde_json::Map::new();
        values.insert("time_boot_ms".to_string(), json!(10_000));
        values.insert("temperature".to_string(), json!(-10));
        values.insert("readings".to_string(), json!([1, 2, 3]));
        values.insert("label".to_string(), json!("abc"));
        values.insert("blob".to_string(), json!([222, 173]));
        let payload = encode_fields(&TEST_SPEC, &values).unwrap();
        assert_eq!(payload.len(), TEST_SPEC.encoded_len);
        let readings = decode_fields(&TEST_SPEC, &payload).unwrap();
        assert_eq!(readings[3].value, FieldValue::Text("abc".to_string()));
        assert_eq!(readings_to_json(&readings), json!({
            "time_boot_ms": 10_000,
            "temperature": -10,
            "readings": [1, 2, 3],
            "label": "abc",
            "blob": [222, 173],
        }));
    }

    #[test]
    fn test_encode_missing_fields_are_zero() {
        let values = serde_json::Map::new();
        let payload = encode_fields(&TEST_SPEC, &values).unwrap();
        assert_eq!(payload, vec![0u8; TEST_SPEC.encoded_len]);
    }

    #[test]
    fn test_encode_unknown_key() {
        let mut values = serde_json::Map::new();
        values.insert("altitude".to_string(), json!(1));
        let err = encode_fields(&TEST_SPEC, &values).unwrap_err();
        match err {
            CodecError::InvalidFieldValue { field_name, .. } => {
                assert_eq!(field_name, "altitude");
            }
            other => panic!("expected InvalidFieldValue, got {other:?}"),
        }
    }

    #[test]
    fn test_encode_rejects_out_of_range() {
        let mut values = serde_json::Map::new();
        values.insert("temperature".to_string(), json!(40_000));
        assert!(encode_fields(&TEST_SPEC, &values).is_err());
    }

    #[test]
    fn test_encode_truncates_long_text() {
        let mut values = serde_json::Map::new();
        values.insert("label".to_string(), json!("abcdefghij"));
        let payload = encode_fields(&TEST_SPEC, &values).unwrap();
        assert_eq!(&payload[6..12], b"abcdef");
    }

    #[test]
    fn test_encode_short_array_zero_fills() {
        let mut values = serde_json::Map::new();
        values.insert("readings".to_string(), json!([7]));
        let payload = encode_fields(&TEST_SPEC, &values).unwrap();
        assert_eq!(&payload[6..12], &[0x07, 0x00, 0x00, 0x00, 0x00, 0x00]);
    }

    #[test]
    fn test_encode_rejects_oversized_array() {
        let mut values = serde_json::Map::new();
        values.insert("readings".to_string(), json!([1, 2, 3, 4]));
        assert!(encode_fields(&TEST_SPEC, &values).is_err());
    }
}
