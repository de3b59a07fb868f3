// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! # Mavcodec
//!
//! Typed codec and metadata catalog for the MAVLink message set.
//!
//! This library provides the message and enum definitions of the common and
//! ArduPilot dialects together with their wire codec, organized by layer:
//! - **Wire primitives** (little-endian cursor, writer, fixed char buffers) in
//!   [`wire`](crate::wire)
//! - **Typed messages** with fixed payload layouts in [`messages`](crate::messages)
//! - **Enums** backing message fields in [`enums`](crate::enums)
//! - **Registry** mapping wire IDs and names to definitions in
//!   [`registry`](crate::registry)
//! - **Schema metadata** for runtime inspection and schema-driven decoding in
//!   [`schema`](crate::schema)
//!
//! ## Example: decoding by wire ID
//!
//! ```rust
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let payload = [0u8, 0, 0, 0, 2, 3, 0, 0, 3];
//! let message = mavcodec::create_from_id(0).ok_or("unknown id")?;
//! println!("{} is {} bytes", message.message_name(), message.encoded_len());
//!
//! let decoded = mavcodec::decode_from_id(0, &payload)?;
//! assert_eq!(decoded.to_payload(), payload);
//! # Ok(())
//! # }
//! ```
//!
//! ## Example: typed round trip
//!
//! ```rust
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! use mavcodec::enums::MavType;
//! use mavcodec::messages::{from_payload, Heartbeat, Message};
//!
//! let mut heartbeat = Heartbeat::default();
//! heartbeat.mavtype = MavType::MAV_TYPE_QUADROTOR;
//! let payload = heartbeat.to_payload();
//! let back: Heartbeat = from_payload(&payload)?;
//! assert_eq!(back.mavtype, MavType::MAV_TYPE_QUADROTOR);
//! # Ok(())
//! # }
//! ```

// Core types
pub mod core;

// Re-export core types for convenience
pub use core::{CodecError, FieldValue, Result};

// Wire-level primitives
pub mod wire;

pub use wire::{CharBuf, PayloadCursor, PayloadWriter};

// Enum definitions
pub mod enums;

// Message definitions
pub mod messages;

pub use messages::{from_payload, Message};

// Message registry and factory
pub mod registry;

pub use registry::{
    all_specs, crc_extra_for_id, create_from_id, create_from_name, decode_from_id, message_count,
    spec_for_id, spec_for_name,
};

// Schema metadata and schema-driven codec
pub mod schema;

pub use schema::{
    decode_fields, encode_fields, enum_catalog, enum_metadata, readings_to_json, EnumMeta,
    FieldKind, FieldReading, FieldSpec, MessageSpec,
};

// Change tracking wrapper
pub mod watch;

pub use watch::{changed_fields, Tracked};
