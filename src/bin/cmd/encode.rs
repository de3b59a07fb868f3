// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Encode command - build a hex payload from JSON field values.

use clap::Args;

use crate::common::Result;

/// Encode JSON field values into a hex payload.
///
/// Fields absent from the JSON object encode as zeros, so partial objects
/// are accepted.
#[derive(Args, Clone, Debug)]
pub struct EncodeCmd {
    /// Message name (e.g. HEARTBEAT) or numeric wire ID
    #[arg(value_name = "NAME|ID")]
    message: String,

    /// Field values as a JSON object (e.g. '{"custom_mode": 5}')
    #[arg(value_name = "JSON")]
    fields: String,
}

impl EncodeCmd {
    pub fn run(self) -> Result<()> {
        let spec = if let Ok(id) = self.message.parse::<u32>() {
            mavcodec::spec_for_id(id)
        } else {
            mavcodec::spec_for_name(&self.message.to_uppercase())
        };
        let spec = spec.ok_or_else(|| anyhow::anyhow!("Unknown message: {}", self.message))?;

        let value: serde_json::Value = serde_json::from_str(&self.fields)?;
        let object = value
            .as_object()
            .ok_or_else(|| anyhow::anyhow!("Field values must be a JSON object"))?;

        let payload = mavcodec::encode_fields(spec, object)?;
        println!("{}", hex::encode(payload));

        Ok(())
    }
}
