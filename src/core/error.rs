// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Core error types for mavcodec.
//!
//! Provides error types for message codec operations:
//! - Payload decoding
//! - Registry lookups
//! - Descriptor-driven field access

use std::fmt;

/// Errors that can occur during message codec operations.
#[derive(Debug, Clone)]
pub enum CodecError {
    /// Payload ended before the message was fully decoded
    TruncatedPayload {
        /// Requested bytes
        requested: usize,
        /// Available bytes
        available: usize,
        /// Cursor position when error occurred
        cursor_pos: u64,
    },

    /// Message ID not present in the registry
    UnknownMessageId {
        /// ID that was looked up
        id: u32,
    },

    /// Field decode error with context
    FieldDecodeError {
        /// Field name
        field_name: String,
        /// Field type
        field_type: String,
        /// Cursor position when error occurred
        cursor_pos: u64,
        /// Underlying error
        cause: String,
    },

    /// Supplied value cannot be stored in the target field
    InvalidFieldValue {
        /// Field name
        field_name: String,
        /// Why the value was rejected
        reason: String,
    },

    /// Other error
    Other(String),
}

impl CodecError {
    /// Create a truncated payload error.
    pub fn truncated_payload(requested: usize, available: usize, cursor_pos: u64) -> Self {
        CodecError::TruncatedPayload {
            requested,
            available,
            cursor_pos,
        }
    }

    /// Create an unknown message ID error.
    pub fn unknown_message_id(id: u32) -> Self {
        CodecError::UnknownMessageId { id }
    }

    /// Create a field decode error.
    pub fn field_decode(
        field_name: impl Into<String>,
        field_type: impl Into<String>,
        cursor_pos: u64,
        cause: impl Into<String>,
    ) -> Self {
        CodecError::FieldDecodeError {
            field_name: field_name.into(),
            field_type: field_type.into(),
            cursor_pos,
            cause: cause.into(),
        }
    }

    /// Create an invalid field value error.
    pub fn invalid_field_value(field_name: impl Into<String>, reason: impl Into<String>) -> Self {
        CodecError::InvalidFieldValue {
            field_name: field_name.into(),
            reason: reason.into(),
        }
    }

    /// Get structured fields for logging.
    pub fn log_fields(&self) -> Vec<(&'static str, String)> {
        match self {
            CodecError::TruncatedPayload {
                requested,
                available,
                cursor_pos,
            } => vec![
                ("requested", requested.to_string()),
                ("available", available.to_string()),
                ("cursor", cursor_pos.to_string()),
            ],
            CodecError::UnknownMessageId { id } => vec![("id", id.to_string())],
            CodecError::FieldDecodeError {
                field_name,
                field_type,
                cursor_pos,
                cause,
            } => vec![
                ("field", field_name.clone()),
                ("type", field_type.clone()),
                ("cursor", cursor_pos.to_string()),
                ("cause", cause.clone()),
            ],
            CodecError::InvalidFieldValue { field_name, reason } => {
                vec![("field", field_name.clone()), ("reason", reason.clone())]
            }
            CodecError::Other(msg) => vec![("message", msg.clone())],
        }
    }
}

impl fmt::Display for CodecError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CodecError::TruncatedPayload {
                requested,
                available,
                cursor_pos,
            } => write!(
                f,
                "Truncated payload: requested {requested} bytes at position {cursor_pos}, but only {available} bytes available"
            ),
            CodecError::UnknownMessageId { id } => {
                write!(f, "Unknown message ID: {id}")
            }
            CodecError::FieldDecodeError {
                field_name,
                field_type,
                cursor_pos,
                cause,
            } => write!(
                f,
                "Failed to decode field '{field_name}' (type: '{field_type}', cursor_pos: {cursor_pos}): {cause}"
            ),
            CodecError::InvalidFieldValue { field_name, reason } => {
                write!(f, "Invalid value for field '{field_name}': {reason}")
            }
            CodecError::Other(msg) => write!(f, "Other error: {msg}"),
        }
    }
}

impl std::error::Error for CodecError {}

/// Result type for mavcodec operations.
pub type Result<T> = std::result::Result<T, CodecError>;
