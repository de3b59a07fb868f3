// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Typed message set for the common and ArduPilotMega dialects.
//!
//! Every message is a plain struct whose fields mirror the wire layout:
//! little-endian scalars packed back to back, fixed arrays element by
//! element, no padding and no length prefixes. The [`Message`] trait is
//! the dyn-compatible surface the registry hands out; concrete types
//! additionally expose `ID`, `NAME`, `CRC_EXTRA`, `ENCODED_LEN`, and
//! `SPEC` as associated constants.

use crate::schema::MessageSpec;
use crate::wire::{PayloadCursor, PayloadWriter};
use crate::Result;

pub(crate) mod macros;

pub mod ardupilotmega;
pub mod attitude;
pub mod command;
pub mod gps;
pub mod hil;
pub mod log;
pub mod mission;
pub mod param;
pub mod position;
pub mod rc;
pub mod sensors;
pub mod setpoint;
pub mod status;
pub mod system;

pub use ardupilotmega::*;
pub use attitude::*;
pub use command::*;
pub use gps::*;
pub use hil::*;
pub use log::*;
pub use mission::*;
pub use param::*;
pub use position::*;
pub use rc::*;
pub use sensors::*;
pub use setpoint::*;
pub use status::*;
pub use system::*;

/// Object-safe view of a message instance.
///
/// Encoding is infallible: every field has a fixed wire width, so the
/// only possible decode failure is running out of payload bytes.
pub trait Message: Send + Sync + std::fmt::Debug {
    /// Numeric wire ID.
    fn message_id(&self) -> u32;

    /// Upper-case wire name, e.g. `"HEARTBEAT"`.
    fn message_name(&self) -> &'static str;

    /// CRC seed byte mixed into the transport checksum for this type.
    fn crc_extra(&self) -> u8;

    /// Exact payload size in bytes.
    fn encoded_len(&self) -> usize;

    /// Static field table and metadata.
    fn spec(&self) -> &'static MessageSpec;

    /// Append this message's payload bytes to `writer`.
    fn encode_payload(&self, writer: &mut PayloadWriter);

    /// Overwrite this message's fields from `cursor`.
    ///
    /// Bytes remaining after the last field are left unread.
    fn decode_payload(&mut self, cursor: &mut PayloadCursor<'_>) -> Result<()>;

    /// Clone behind the trait object.
    fn clone_boxed(&self) -> Box<dyn Message>;

    fn as_any(&self) -> &dyn std::any::Any;

    fn as_any_mut(&mut self) -> &mut dyn std::any::Any;

    /// Encode into a fresh buffer of exactly [`Message::encoded_len`] bytes.
    fn to_payload(&self) -> Vec<u8> {
        let mut writer = PayloadWriter::with_capacity(self.encoded_len());
        self.encode_payload(&mut writer);
        writer.finish()
    }
}

impl Clone for Box<dyn Message> {
    fn clone(&self) -> Self {
        self.clone_boxed()
    }
}

/// Decode a payload into a concrete message type.
///
/// Fails with [`crate::CodecError::TruncatedPayload`] when the payload
/// is shorter than the message layout; trailing bytes are ignored.
pub fn from_payload<M: Message + Default>(payload: &[u8]) -> Result<M> {
    let mut message = M::default();
    let mut cursor = PayloadCursor::new(payload);
    message.decode_payload(&mut cursor)?;
    Ok(message)
}
