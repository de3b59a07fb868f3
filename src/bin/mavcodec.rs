// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! # Mavcodec CLI
//!
//! Command-line tool for inspecting the MAVLink message set and converting
//! payloads between hex and named field values.
//!
//! ## Usage
//!
//! ```sh
//! # List definitions
//! mavcodec list messages
//! mavcodec list enums
//!
//! # Show a full definition
//! mavcodec describe message HEARTBEAT
//! mavcodec describe enum MAV_TYPE
//!
//! # Decode a hex payload
//! mavcodec decode HEARTBEAT 000000000203000003
//!
//! # Encode field values
//! mavcodec encode HEARTBEAT '{"type": 2, "autopilot": 3}'
//!
//! # Search by name
//! mavcodec search entries 'NAV_.*WAYPOINT'
//! ```

mod cmd;
mod common;

use std::process;

use clap::{Parser, Subcommand};
use cmd::{DecodeCmd, DescribeCmd, EncodeCmd, ListCmd, SearchCmd};
use common::Result;

/// Mavcodec - MAVLink message set toolkit
///
/// Inspect message and enum definitions, decode raw payloads into named
/// fields, and encode field values back into payload bytes.
#[derive(Parser, Clone)]
#[command(name = "mavcodec")]
#[command(about = "MAVLink message set codec and metadata toolkit", long_about = None)]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(author = "ArcheBase")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Available commands
#[derive(Subcommand, Clone)]
enum Commands {
    /// List registered messages and enums
    #[command(subcommand)]
    List(ListCmd),

    /// Show the full definition of a message or enum
    #[command(subcommand)]
    Describe(DescribeCmd),

    /// Decode a hex payload into named field values
    Decode(DecodeCmd),

    /// Encode JSON field values into a hex payload
    Encode(EncodeCmd),

    /// Search definitions by name pattern
    #[command(subcommand)]
    Search(SearchCmd),
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::List(cmd) => cmd.run(),
        Commands::Describe(cmd) => cmd.run(),
        Commands::Decode(cmd) => cmd.run(),
        Commands::Encode(cmd) => cmd.run(),
        Commands::Search(cmd) => cmd.run(),
    }
}

fn main() {
    let result = run();

    if let Err(e) = result {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}
