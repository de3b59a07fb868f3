// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Dynamic field value representation.
//!
//! Provides a unified value type for descriptor-driven decoding. Every
//! payload field maps to exactly one variant: scalars to the matching
//! integer/float variant, char buffers to `Text`, byte buffers to `Bytes`,
//! and fixed arrays of wider elements to `Array`. All variants are
//! serde-serializable for JSON output.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Value of a single decoded message field.
///
/// Enum fields decode to the integer variant of their underlying width;
/// classifying the raw value against catalog metadata is left to callers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum FieldValue {
    // Signed integers
    Int8(i8),
    Int16(i16),
    Int32(i32),
    Int64(i64),

    // Unsigned integers
    UInt8(u8),
    UInt16(u16),
    UInt32(u32),
    UInt64(u64),

    // Floating point
    Float32(f32),
    Float64(f64),

    // Fixed char buffer, trimmed at the first NUL
    Text(String),

    // Fixed byte buffer
    Bytes(Vec<u8>),

    // Fixed array of non-byte elements
    Array(Vec<FieldValue>),
}

impl FieldValue {
    // ========================================================================
    // Type Checking Predicates
    // ========================================================================

    /// Check if this value is a numeric type (integers or floats).
    pub fn is_numeric(&self) -> bool {
        matches!(
            self,
            FieldValue::Int8(_)
                | FieldValue::Int16(_)
                | FieldValue::Int32(_)
                | FieldValue::Int64(_)
                | FieldValue::UInt8(_)
                | FieldValue::UInt16(_)
                | FieldValue::UInt32(_)
                | FieldValue::UInt64(_)
                | FieldValue::Float32(_)
                | FieldValue::Float64(_)
        )
    }

    /// Check if this value is an integer type (signed or unsigned).
    pub fn is_integer(&self) -> bool {
        matches!(
            self,
            FieldValue::Int8(_)
                | FieldValue::Int16(_)
                | FieldValue::Int32(_)
                | FieldValue::Int64(_)
                | FieldValue::UInt8(_)
                | FieldValue::UInt16(_)
                | FieldValue::UInt32(_)
                | FieldValue::UInt64(_)
        )
    }

    /// Check if this value is a floating-point type.
    pub fn is_float(&self) -> bool {
        matches!(self, FieldValue::Float32(_) | FieldValue::Float64(_))
    }

    /// Check if this value is an array.
    pub fn is_array(&self) -> bool {
        matches!(self, FieldValue::Array(_))
    }

    // ========================================================================
    // Type Conversion Methods
    // ========================================================================

    /// Try to convert this value to f64 (for numeric values only).
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            FieldValue::Int8(v) => Some(*v as f64),
            FieldValue::Int16(v) => Some(*v as f64),
            FieldValue::Int32(v) => Some(*v as f64),
            FieldValue::Int64(v) => Some(*v as f64),
            FieldValue::UInt8(v) => Some(*v as f64),
            FieldValue::UInt16(v) => Some(*v as f64),
            FieldValue::UInt32(v) => Some(*v as f64),
            FieldValue::UInt64(v) => Some(*v as f64),
            FieldValue::Float32(v) => Some(*v as f64),
            FieldValue::Float64(v) => Some(*v),
            _ => None,
        }
    }

    /// Try to convert this value to i64 (for integer types only).
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            FieldValue::Int8(v) => Some(*v as i64),
            FieldValue::Int16(v) => Some(*v as i64),
            FieldValue::Int32(v) => Some(*v as i64),
            FieldValue::Int64(v) => Some(*v),
            FieldValue::UInt8(v) => Some(*v as i64),
            FieldValue::UInt16(v) => Some(*v as i64),
            FieldValue::UInt32(v) => Some(*v as i64),
            FieldValue::UInt64(v) => {
                if *v <= i64::MAX as u64 {
                    Some(*v as i64)
                } else {
                    None
                }
            }
            _ => None,
        }
    }

    /// Try to convert this value to u64 (for non-negative integers only).
    pub fn as_u64(&self) -> Option<u64> {
        match self {
            FieldValue::UInt8(v) => Some(*v as u64),
            FieldValue::UInt16(v) => Some(*v as u64),
            FieldValue::UInt32(v) => Some(*v as u64),
            FieldValue::UInt64(v) => Some(*v),
            FieldValue::Int8(v) => {
                if *v >= 0 {
                    Some(*v as u64)
                } else {
                    None
                }
            }
            FieldValue::Int16(v) => {
                if *v >= 0 {
                    Some(*v as u64)
                } else {
                    None
                }
            }
            FieldValue::Int32(v) => {
                if *v >= 0 {
                    Some(*v as u64)
                } else {
                    None
                }
            }
            FieldValue::Int64(v) => {
                if *v >= 0 {
                    Some(*v as u64)
                } else {
                    None
                }
            }
            _ => None,
        }
    }

    /// Try to get the inner text.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            FieldValue::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Try to get the inner bytes.
    pub fn as_bytes(&self) -> Option<&[u8]> {
        match self {
            FieldValue::Bytes(b) => Some(b),
            _ => None,
        }
    }

    /// Try to get the inner array.
    pub fn as_array(&self) -> Option<&[FieldValue]> {
        match self {
            FieldValue::Array(arr) => Some(arr),
            _ => None,
        }
    }

    /// Get the type name of this value as a string.
    pub fn type_name(&self) -> &'static str {
        match self {
            FieldValue::Int8(_) => "int8",
            FieldValue::Int16(_) => "int16",
            FieldValue::Int32(_) => "int32",
            FieldValue::Int64(_) => "int64",
            FieldValue::UInt8(_) => "uint8",
            FieldValue::UInt16(_) => "uint16",
            FieldValue::UInt32(_) => "uint32",
            FieldValue::UInt64(_) => "uint64",
            FieldValue::Float32(_) => "float32",
            FieldValue::Float64(_) => "float64",
            FieldValue::Text(_) => "text",
            FieldValue::Bytes(_) => "bytes",
            FieldValue::Array(_) => "array",
        }
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Int8(v) => write!(f, "{v}"),
            FieldValue::Int16(v) => write!(f, "{v}"),
            FieldValue::Int32(v) => write!(f, "{v}"),
            FieldValue::Int64(v) => write!(f, "{v}"),
            FieldValue::UInt8(v) => write!(f, "{v}"),
            FieldValue::UInt16(v) => write!(f, "{v}"),
            FieldValue::UInt32(v) => write!(f, "{v}"),
            FieldValue::UInt64(v) => write!(f, "{v}"),
            FieldValue::Float32(v) => write!(f, "{v}"),
            FieldValue::Float64(v) => write!(f, "{v}"),
            FieldValue::Text(v) => write!(f, "\"{v}\""),
            FieldValue::Bytes(v) => write!(f, "<{} bytes>", v.len()),
            FieldValue::Array(v) => {
                write!(f, "[")?;
                for (i, elem) in v.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{elem}")?;
                }
                write!(f, "]")
            }
        }
    }
}
