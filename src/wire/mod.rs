// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Wire-level payload primitives.
//!
//! This module provides the packed little-endian layer shared by every
//! message type:
//! - [`PayloadCursor`] - bounds-checked reader
//! - [`PayloadWriter`] - infallible append-only builder
//! - [`CharBuf`] - fixed-length text fields
//! - [`WireScalar`] / [`WireField`] - per-field codec seam

pub mod chars;
pub mod cursor;
pub mod field;
pub mod writer;

pub use chars::CharBuf;
pub use cursor::PayloadCursor;
pub use field::{WireField, WireScalar};
pub use writer::PayloadWriter;
