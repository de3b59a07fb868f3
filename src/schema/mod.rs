// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Static message and enum descriptors.
//!
//! This module provides the self-describing metadata layer:
//! - [`FieldKind`] / [`FieldSpec`] - per-field wire type and cardinality
//! - [`MessageSpec`] - per-message ID, CRC seed, and field table
//! - [`EnumMeta`] / [`EnumEntryMeta`] - enum names, values, and docs
//! - [`catalog`] - process-wide lazy enum catalog
//! - [`dynamic`] - descriptor-driven decode/encode for tooling
//!
//! Descriptors are plain `'static` data emitted next to each generated
//! message and enum type. The typed codec never consults them; they exist
//! for introspection.

pub mod catalog;
pub mod dynamic;

pub use catalog::{enum_catalog, enum_metadata};
pub use dynamic::{decode_fields, encode_fields, readings_to_json, FieldReading};

use serde::Serialize;

/// Wire type of a single field element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum FieldKind {
    /// 8-bit unsigned integer
    UInt8,
    /// 8-bit signed integer
    Int8,
    /// 16-bit unsigned integer
    UInt16,
    /// 16-bit signed integer
    Int16,
    /// 32-bit unsigned integer
    UInt32,
    /// 32-bit signed integer
    Int32,
    /// 64-bit unsigned integer
    UInt64,
    /// 64-bit signed integer
    Int64,
    /// 32-bit float
    Float32,
    /// 64-bit float
    Float64,
    /// Single text byte inside a fixed char buffer
    Char,
}

impl FieldKind {
    /// Encoded size of one element in bytes.
    pub const fn size(self) -> usize {
        match self {
            FieldKind::UInt8 | FieldKind::Int8 | FieldKind::Char => 1,
            FieldKind::UInt16 | FieldKind::Int16 => 2,
            FieldKind::UInt32 | FieldKind::Int32 | FieldKind::Float32 => 4,
            FieldKind::UInt64 | FieldKind::Int64 | FieldKind::Float64 => 8,
        }
    }

    /// Wire type name as it appears in message definitions.
    pub const fn type_name(self) -> &'static str {
        match self {
            FieldKind::UInt8 => "uint8_t",
            FieldKind::Int8 => "int8_t",
            FieldKind::UInt16 => "uint16_t",
            FieldKind::Int16 => "int16_t",
            FieldKind::UInt32 => "uint32_t",
            FieldKind::Int32 => "int32_t",
            FieldKind::UInt64 => "uint64_t",
            FieldKind::Int64 => "int64_t",
            FieldKind::Float32 => "float",
            FieldKind::Float64 => "double",
            FieldKind::Char => "char",
        }
    }
}

/// Descriptor for one message field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FieldSpec {
    /// Field name as it appears in the message definition
    pub name: &'static str,
    /// Element wire type
    pub kind: FieldKind,
    /// Number of elements (1 for scalars)
    pub count: usize,
    /// Name of the associated enum, for enum-typed fields
    pub enum_name: Option<&'static str>,
    /// Human-readable field description
    pub description: &'static str,
}

impl FieldSpec {
    /// Total encoded size of this field in bytes.
    pub const fn wire_size(&self) -> usize {
        self.kind.size() * self.count
    }

    /// Check if this field is an array or char buffer.
    pub const fn is_array(&self) -> bool {
        self.count > 1
    }

    /// Wire type with cardinality, e.g. `uint16_t[8]` or `char[16]`.
    pub fn type_signature(&self) -> String {
        if self.count > 1 {
            format!("{}[{}]", self.kind.type_name(), self.count)
        } else {
            self.kind.type_name().to_string()
        }
    }
}

/// Descriptor for one message type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MessageSpec {
    /// Numeric message ID
    pub id: u32,
    /// Message name as it appears in the message definition
    pub name: &'static str,
    /// Per-message CRC seed appended by the framing layer's checksum
    pub crc_extra: u8,
    /// Exact payload size in bytes
    pub encoded_len: usize,
    /// Human-readable message description
    pub description: &'static str,
    /// Fields in wire order
    pub fields: &'static [FieldSpec],
}

impl MessageSpec {
    /// Number of fields.
    pub fn field_count(&self) -> usize {
        self.fields.len()
    }

    /// Look up a field descriptor by name.
    pub fn field(&self, name: &str) -> Option<&'static FieldSpec> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Byte offset of a field within the encoded payload.
    pub fn field_offset(&self, name: &str) -> Option<usize> {
        let mut offset = 0usize;
        for field in self.fields {
            if field.name == name {
                return Some(offset);
            }
            offset += field.wire_size();
        }
        None
    }
}

/// Descriptor for one enum entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct EnumEntryMeta {
    /// Entry name as it appears in the message definition
    pub name: &'static str,
    /// Integer value (widened to u64 for uniform storage)
    pub value: u64,
    /// Human-readable entry description
    pub description: &'static str,
    /// Ordered command parameter descriptions, for command vocabularies
    pub params: &'static [&'static str],
}

/// Descriptor for one enum type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct EnumMeta {
    /// Enum name as it appears in the message definition
    pub name: &'static str,
    /// Human-readable enum description
    pub description: &'static str,
    /// Entries in declaration order
    pub entries: &'static [EnumEntryMeta],
}

impl EnumMeta {
    /// Look up the first entry with the given value.
    ///
    /// Declaration order breaks ties when values are duplicated.
    pub fn entry_for_value(&self, value: u64) -> Option<&'static EnumEntryMeta> {
        self.entries.iter().find(|e| e.value == value)
    }

    /// Look up an entry by name.
    pub fn entry_named(&self, name: &str) -> Option<&'static EnumEntryMeta> {
        self.entries.iter().find(|e| e.name == name)
    }

    /// Check whether any two entries share a value.
    pub fn has_duplicate_values(&self) -> bool {
        self.entries
            .iter()
            .enumerate()
            .any(|(i, e)| self.entries[..i].iter().any(|prev| prev.value == e.value))
    }
}
