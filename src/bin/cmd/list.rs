// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! List command - enumerate registered messages and enums.

use clap::Subcommand;
use serde::Serialize;

use crate::common::{print_json, Result};

/// List registered definitions.
#[derive(Subcommand, Clone, Debug)]
pub enum ListCmd {
    /// List all registered message types
    Messages {
        /// Output as JSON
        #[arg(short, long)]
        json: bool,
    },

    /// List all registered enums
    Enums {
        /// Output as JSON
        #[arg(short, long)]
        json: bool,
    },
}

impl ListCmd {
    pub fn run(self) -> Result<()> {
        match self {
            ListCmd::Messages { json } => cmd_list_messages(json),
            ListCmd::Enums { json } => cmd_list_enums(json),
        }
    }
}

#[derive(Serialize)]
struct MessageRow {
    id: u32,
    name: &'static str,
    encoded_len: usize,
    crc_extra: u8,
    fields: usize,
}

fn cmd_list_messages(json: bool) -> Result<()> {
    let rows: Vec<MessageRow> = mavcodec::all_specs()
        .iter()
        .map(|spec| MessageRow {
            id: spec.id,
            name: spec.name,
            encoded_len: spec.encoded_len,
            crc_extra: spec.crc_extra,
            fields: spec.fields.len(),
        })
        .collect();

    if json {
        return print_json(&rows);
    }

    println!(
        "{:>5}  {:<36} {:>5}  {:>9}  {:>6}",
        "ID", "NAME", "BYTES", "CRC_EXTRA", "FIELDS"
    );
    for row in &rows {
        println!(
            "{:>5}  {:<36} {:>5}  {:>9}  {:>6}",
            row.id, row.name, row.encoded_len, row.crc_extra, row.fields
        );
    }
    println!();
    println!("{} message types", rows.len());

    Ok(())
}

#[derive(Serialize)]
struct EnumRow {
    name: &'static str,
    entries: usize,
    description: &'static str,
}

fn cmd_list_enums(json: bool) -> Result<()> {
    let rows: Vec<EnumRow> = mavcodec::enum_catalog()
        .iter()
        .map(|meta| EnumRow {
            name: meta.name,
            entries: meta.entries.len(),
            description: meta.description,
        })
        .collect();

    if json {
        return print_json(&rows);
    }

    println!("{:<42} {:>7}  DESCRIPTION", "NAME", "ENTRIES");
    for row in &rows {
        println!("{:<42} {:>7}  {}", row.name, row.entries, row.description);
    }
    println!();
    println!("{} enums", rows.len());

    Ok(())
}
