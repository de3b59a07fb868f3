// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Core types used throughout mavcodec.
//!
//! This module provides the foundational types for the library:
//! - [`CodecError`] - Comprehensive error handling
//! - [`FieldValue`] - Unified value representation for dynamic decoding

pub mod error;
pub mod value;

pub use error::{CodecError, Result};
pub use value::FieldValue;
