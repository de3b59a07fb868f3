// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Describe command - show the full definition of a message or enum.

use clap::Subcommand;
use serde::Serialize;

use crate::common::{print_json, Result};
use mavcodec::schema::{EnumMeta, MessageSpec};

/// Show full definitions.
#[derive(Subcommand, Clone, Debug)]
pub enum DescribeCmd {
    /// Show a message definition with its field layout
    Message {
        /// Message name (e.g. HEARTBEAT) or numeric wire ID
        #[arg(value_name = "NAME|ID")]
        name: String,

        /// Output as JSON
        #[arg(short, long)]
        json: bool,
    },

    /// Show an enum definition with its entries
    Enum {
        /// Enum name (e.g. MAV_TYPE)
        #[arg(value_name = "NAME")]
        name: String,

        /// Output as JSON
        #[arg(short, long)]
        json: bool,
    },
}

impl DescribeCmd {
    pub fn run(self) -> Result<()> {
        match self {
            DescribeCmd::Message { name, json } => cmd_describe_message(&name, json),
            DescribeCmd::Enum { name, json } => cmd_describe_enum(&name, json),
        }
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

#[derive(Serialize)]
struct FieldRow {
    name: &'static str,
    #[serde(rename = "type")]
    signature: String,
    offset: usize,
    size: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    enum_name: Option<&'static str>,
    description: &'static str,
}

#[derive(Serialize)]
struct MessageDetail {
    id: u32,
    name: &'static str,
    encoded_len: usize,
    crc_extra: u8,
    description: &'static str,
    fields: Vec<FieldRow>,
}

fn cmd_describe_message(name: &str, json: bool) -> Result<()> {
    let spec = resolve_spec(name)?;

    let mut fields = Vec::with_capacity(spec.fields.len());
    let mut offset = 0;
    for field in spec.fields {
        fields.push(FieldRow {
            name: field.name,
            signature: field.type_signature(),
            offset,
            size: field.wire_size(),
            enum_name: field.enum_name,
            description: field.description,
        });
        offset += field.wire_size();
    }

    let detail = MessageDetail {
        id: spec.id,
        name: spec.name,
        encoded_len: spec.encoded_len,
        crc_extra: spec.crc_extra,
        description: spec.description,
        fields,
    };

    if json {
        return print_json(&detail);
    }

    println!("{} (id {})", detail.name, detail.id);
    println!("  {}", detail.description);
    println!(
        "  encoded length: {} bytes, crc_extra: {}",
        detail.encoded_len, detail.crc_extra
    );
    println!();
    println!(
        "  {:>3}  {:<22} {:<12} {:>4}  NOTES",
        "OFF", "FIELD", "TYPE", "SIZE"
    );
    for field in &detail.fields {
        let notes = match field.enum_name {
            Some(enum_name) => format!("{} ({})", field.description, enum_name),
            None => field.description.to_string(),
        };
        println!(
            "  {:>3}  {:<22} {:<12} {:>4}  {}",
            field.offset, field.name, field.signature, field.size, notes
        );
    }

    Ok(())
}

#[derive(Serialize)]
struct EntryRow {
    name: &'static str,
    value: u64,
    description: &'static str,
    params: &'static [&'static str],
}

#[derive(Serialize)]
struct EnumDetail {
    name: &'static str,
    description: &'static str,
    entries: Vec<EntryRow>,
}

fn cmd_describe_enum(name: &str, json: bool) -> Result<()> {
    let meta: &'static EnumMeta = mavcodec::enum_metadata(&name.to_uppercase())
        .ok_or_else(|| anyhow::anyhow!("Unknown enum: {name}"))?;

    let detail = EnumDetail {
        name: meta.name,
        description: meta.description,
        entries: meta
            .entries
            .iter()
            .map(|entry| EntryRow {
                name: entry.name,
                value: entry.value,
                description: entry.description,
                params: entry.params,
            })
            .collect(),
    };

    if json {
        return print_json(&detail);
    }

    println!("{}", detail.name);
    println!("  {}", detail.description);
    println!();
    for entry in &detail.entries {
        println!("  {:>10}  {}", entry.value, entry.name);
        if !entry.description.is_empty() {
            println!("              {}", entry.description);
        }
        for (i, param) in entry.params.iter().enumerate() {
            println!("              param{}: {}", i + 1, param);
        }
    }
    println!();
    println!("{} entries", detail.entries.len());

    Ok(())
}
