// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Search command - find messages, enums, and enum entries by name pattern.

use clap::Subcommand;
use regex::RegexBuilder;
use serde::Serialize;

use crate::common::{print_json, Result};

/// Search registered definitions.
#[derive(Subcommand, Clone, Debug)]
pub enum SearchCmd {
    /// Search message names
    Messages {
        /// Case-insensitive regex pattern
        #[arg(value_name = "PATTERN")]
        pattern: String,

        /// Output as JSON
        #[arg(short, long)]
        json: bool,
    },

    /// Search enum names
    Enums {
        /// Case-insensitive regex pattern
        #[arg(value_name = "PATTERN")]
        pattern: String,

        /// Output as JSON
        #[arg(short, long)]
        json: bool,
    },

    /// Search entry names across all enums
    Entries {
        /// Case-insensitive regex pattern
        #[arg(value_name = "PATTERN")]
        pattern: String,

        /// Output as JSON
        #[arg(short, long)]
        json: bool,
    },
}

impl SearchCmd {
    pub fn run(self) -> Result<()> {
        match self {
            SearchCmd::Messages { pattern, json } => cmd_search_messages(&pattern, json),
            SearchCmd::Enums { pattern, json } => cmd_search_enums(&pattern, json),
            SearchCmd::Entries { pattern, json } => cmd_search_entries(&pattern, json),
        }
    }
}

fn build_pattern(pattern: &str) -> Result<regex::Regex> {
    RegexBuilder::new(pattern)
        .case_insensitive(true)
        .build()
        .map_err(|e| anyhow::anyhow!("Invalid pattern '{pattern}': {e}"))
}

#[derive(Serialize)]
struct MessageMatch {
    id: u32,
    name: &'static str,
}

fn cmd_search_messages(pattern: &str, json: bool) -> Result<()> {
    let re = build_pattern(pattern)?;
    let matches: Vec<MessageMatch> = mavcodec::all_specs()
        .iter()
        .filter(|spec| re.is_match(spec.name))
        .map(|spec| MessageMatch {
            id: spec.id,
            name: spec.name,
        })
        .collect();

    if json {
        return print_json(&matches);
    }

    for found in &matches {
        println!("{:>5}  {}", found.id, found.name);
    }
    println!();
    println!("{} matches", matches.len());

    Ok(())
}

fn cmd_search_enums(pattern: &str, json: bool) -> Result<()> {
    let re = build_pattern(pattern)?;
    let matches: Vec<&'static str> = mavcodec::enum_catalog()
        .iter()
        .filter(|meta| re.is_match(meta.name))
        .map(|meta| meta.name)
        .collect();

    if json {
        return print_json(&matches);
    }

    for name in &matches {
        println!("{name}");
    }
    println!();
    println!("{} matches", matches.len());

    Ok(())
}

#[derive(Serialize)]
struct EntryMatch {
    enum_name: &'static str,
    name: &'static str,
    value: u64,
}

fn cmd_search_entries(pattern: &str, json: bool) -> Result<()> {
    let re = build_pattern(pattern)?;
    let mut matches = Vec::new();
    for meta in mavcodec::enum_catalog().iter() {
        for entry in meta.entries {
            if re.is_match(entry.name) {
                matches.push(EntryMatch {
                    enum_name: meta.name,
                    name: entry.name,
                    value: entry.value,
                });
            }
        }
    }

    if json {
        return print_json(&matches);
    }

    for found in &matches {
        println!("{:>10}  {:<44} {}", found.value, found.name, found.enum_name);
    }
    println!();
    println!("{} matches", matches.len());

    Ok(())
}
