// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Decode command - turn a hex payload into named field values.

use clap::Args;

use crate::common::{parse_hex_payload, print_json, Result};
use mavcodec::schema::MessageSpec;

/// Decode a hex payload using a registered message definition.
#[derive(Args, Clone, Debug)]
pub struct DecodeCmd {
    /// Message name (e.g. HEARTBEAT) or numeric wire ID
    #[arg(value_name = "NAME|ID")]
    message: String,

    /// Payload bytes as hex (e.g. "000000000203000003")
    #[arg(value_name = "HEX")]
    payload: String,

    /// Output as JSON
    #[arg(short, long)]
    json: bool,
}

impl DecodeCmd {
    pub fn run(self) -> Result<()> {
        let spec = resolve_spec(&self.message)?;
        let payload = parse_hex_payload(&self.payload)?;
        let readings = mavcodec::decode_fields(spec, &payload)?;

        if self.json {
            return print_json(&mavcodec::readings_to_json(&readings));
        }

        println!(
            "{} (id {}, {} bytes)",
            spec.name,
            spec.id,
            payload.len()
        );
        for reading in &readings {
            println!("  {} = {}", reading.name, serde_json::to_string(&reading.value)?);
        }

        Ok(())
    }
}

fn resolve_spec(name: &str) -> Result<&'static MessageSpec> {
    let spec = if let Ok(id) = name.parse::<u32>() {
        mavcodec::spec_for_id(id)
    } else {
        mavcodec::spec_for_name(&name.to_uppercase())
    };
    spec.ok_or_else(|| anyhow::anyhow!("Unknown message: {name}"))
}
