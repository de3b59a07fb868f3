// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! CLI integration tests.
//!
//! These tests run the actual mavcodec binary and verify its behavior.

use std::{
    path::PathBuf,
    process::{Command, Output},
};

/// Get the path to the built mavcodec binary
fn mavcodec_bin() -> PathBuf {
    let mut path = std::env::current_exe().unwrap();
    // The test binary is in target/debug/deps/
    // The mavcodec binary is in target/debug/
    path.pop(); // deps
    path.pop(); // debug or release
    path.push("mavcodec");
    path
}

/// Run mavcodec with arguments
fn run(args: &[&str]) -> Output {
    let bin = mavcodec_bin();
    Command::new(&bin)
        .args(args)
        .output()
        .unwrap_or_else(|_| panic!("Failed to run {:?}", bin))
}

/// Run mavcodec and assert success
fn run_ok(args: &[&str]) -> String {
    let output = run(args);
    assert!(
        output.status.success(),
        "Command failed: {:?}\nstdout: {}\nstderr: {}",
        args,
        String::from_utf8_lossy(&output.stdout),
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8_lossy(&output.stdout).to_string()
}

/// Run mavcodec and assert failure
fn run_err(args: &[&str]) -> String {
    let output = run(args);
    assert!(
        !output.status.success(),
        "Command should have failed but succeeded: {:?}",
        args
    );
    String::from_utf8_lossy(&output.stderr).to_string()
}

// ============================================================================
// Basic CLI Tests
// ============================================================================

#[test]
fn test_cli_help() {
    let output = run_ok(&["--help"]);
    assert!(output.contains("MAVLink message set codec"));
    assert!(output.contains("list"));
    assert!(output.contains("describe"));
    assert!(output.contains("decode"));
    assert!(output.contains("encode"));
    assert!(output.contains("search"));
}

#[test]
fn test_cli_version() {
    let output = run_ok(&["--version"]);
    assert!(output.contains("mavcodec"));
}

#[test]
fn test_cli_no_args() {
    // Running without arguments shows help but exits with error code
    let output = run(&[]);
    // Clap shows help when no subcommand is provided, but exits with 1
    assert!(
        String::from_utf8_lossy(&output.stdout).contains("Usage:")
            || String::from_utf8_lossy(&output.stdout).contains("USAGE")
            || String::from_utf8_lossy(&output.stderr).contains("Usage:")
            || String::from_utf8_lossy(&output.stderr).contains("USAGE")
    );
}

#[test]
fn test_cli_invalid_subcommand() {
    let stderr = run_err(&["nonexistent"]);
    assert!(stderr.contains("unrecognized") || stderr.contains("unknown"));
}

// ============================================================================
// List Tests
// ============================================================================

#[test]
fn test_list_messages() {
    let output = run_ok(&["list", "messages"]);
    assert!(output.contains("HEARTBEAT"));
    assert!(output.contains("COMMAND_LONG"));
    assert!(output.contains("184 message types"));
}

#[test]
fn test_list_messages_json() {
    let output = run_ok(&["list", "messages", "--json"]);
    let rows: serde_json::Value = serde_json::from_str(&output).expect("valid JSON");
    let rows = rows.as_array().expect("a JSON array");
    assert_eq!(rows.len(), 184);
    assert_eq!(rows[0]["name"], "HEARTBEAT");
    assert_eq!(rows[0]["id"], 0);
    assert_eq!(rows[0]["crc_extra"], 50);
    assert_eq!(rows[0]["encoded_len"], 9);
}

#[test]
fn test_list_enums() {
    let output = run_ok(&["list", "enums"]);
    assert!(output.contains("MAV_TYPE"));
    assert!(output.contains("MAV_CMD"));
    assert!(output.contains("enums"));
}

// ============================================================================
// Describe Tests
// ============================================================================

#[test]
fn test_describe_message() {
    let output = run_ok(&["describe", "message", "HEARTBEAT"]);
    assert!(output.contains("HEARTBEAT (id 0)"));
    assert!(output.contains("custom_mode"));
    assert!(output.contains("mavlink_version"));
    assert!(output.contains("MAV_TYPE"));
}

#[test]
fn test_describe_message_by_id() {
    let output = run_ok(&["describe", "message", "4"]);
    assert!(output.contains("PING"));
    assert!(output.contains("time_usec"));
}

#[test]
fn test_describe_message_lowercase_name() {
    let output = run_ok(&["describe", "message", "heartbeat"]);
    assert!(output.contains("HEARTBEAT (id 0)"));
}

#[test]
fn test_describe_message_json() {
    let output = run_ok(&["describe", "message", "PING", "--json"]);
    let detail: serde_json::Value = serde_json::from_str(&output).expect("valid JSON");
    assert_eq!(detail["id"], 4);
    assert_eq!(detail["encoded_len"], 14);
    assert_eq!(detail["fields"][0]["name"], "time_usec");
    assert_eq!(detail["fields"][0]["type"], "uint64_t");
    assert_eq!(detail["fields"][0]["offset"], 0);
}

#[test]
fn test_describe_enum() {
    let output = run_ok(&["describe", "enum", "MAV_STATE"]);
    assert!(output.contains("MAV_STATE_UNINIT"));
    assert!(output.contains("MAV_STATE_ACTIVE"));
}

#[test]
fn test_describe_unknown_message() {
    let stderr = run_err(&["describe", "message", "NOT_A_MESSAGE"]);
    assert!(stderr.contains("Unknown message"));
}

#[test]
fn test_describe_unknown_enum() {
    let stderr = run_err(&["describe", "enum", "NOT_AN_ENUM"]);
    assert!(stderr.contains("Unknown enum"));
}

// ============================================================================
// Decode Tests
// ============================================================================

#[test]
fn test_decode_heartbeat() {
    let output = run_ok(&["decode", "HEARTBEAT", "000000000203000003"]);
    assert!(output.contains("HEARTBEAT"));
    assert!(output.contains("autopilot = 3"));
    assert!(output.contains("mavlink_version = 3"));
}

#[test]
fn test_decode_heartbeat_by_id_json() {
    let output = run_ok(&["decode", "0", "000000000203000003", "--json"]);
    let fields: serde_json::Value = serde_json::from_str(&output).expect("valid JSON");
    assert_eq!(fields["custom_mode"], 0);
    assert_eq!(fields["type"], 2);
    assert_eq!(fields["autopilot"], 3);
    assert_eq!(fields["mavlink_version"], 3);
}

#[test]
fn test_decode_accepts_0x_prefix_and_whitespace() {
    let output = run_ok(&["decode", "HEARTBEAT", "0x00 00 00 00 02 03 00 00 03", "--json"]);
    let fields: serde_json::Value = serde_json::from_str(&output).expect("valid JSON");
    assert_eq!(fields["type"], 2);
}

#[test]
fn test_decode_truncated_payload() {
    let stderr = run_err(&["decode", "HEARTBEAT", "0000000002"]);
    assert!(stderr.contains("Error"));
}

#[test]
fn test_decode_bad_hex() {
    let stderr = run_err(&["decode", "HEARTBEAT", "zz"]);
    assert!(stderr.contains("Error"));
}

// ============================================================================
// Encode Tests
// ============================================================================

#[test]
fn test_encode_heartbeat() {
    let output = run_ok(&[
        "encode",
        "HEARTBEAT",
        r#"{"type": 2, "autopilot": 3, "mavlink_version": 3}"#,
    ]);
    assert_eq!(output.trim(), "000000000203000003");
}

#[test]
fn test_encode_rejects_unknown_field() {
    let stderr = run_err(&["encode", "HEARTBEAT", r#"{"no_such_field": 1}"#]);
    assert!(stderr.contains("Error"));
    assert!(stderr.contains("no_such_field"));
}

#[test]
fn test_encode_rejects_non_object() {
    let stderr = run_err(&["encode", "HEARTBEAT", "[1, 2, 3]"]);
    assert!(stderr.contains("JSON object"));
}

#[test]
fn test_encode_decode_round_trip() {
    let hex = run_ok(&[
        "encode",
        "PING",
        r#"{"time_usec": 1234567890123, "seq": 42, "target_system": 1, "target_component": 1}"#,
    ]);
    assert_eq!(hex.trim().len(), 28); // 14 bytes

    let decoded = run_ok(&["decode", "PING", hex.trim(), "--json"]);
    let fields: serde_json::Value = serde_json::from_str(&decoded).expect("valid JSON");
    assert_eq!(fields["time_usec"], 1_234_567_890_123u64);
    assert_eq!(fields["seq"], 42);
    assert_eq!(fields["target_system"], 1);
    assert_eq!(fields["target_component"], 1);
}

// ============================================================================
// Search Tests
// ============================================================================

#[test]
fn test_search_messages() {
    let output = run_ok(&["search", "messages", "mission"]);
    assert!(output.contains("MISSION_ITEM"));
    assert!(output.contains("MISSION_ACK"));
    assert!(output.contains("matches"));
}

#[test]
fn test_search_enums() {
    let output = run_ok(&["search", "enums", "battery"]);
    assert!(output.contains("MAV_BATTERY_TYPE"));
}

#[test]
fn test_search_entries() {
    let output = run_ok(&["search", "entries", "NAV_WAYPOINT"]);
    assert!(output.contains("MAV_CMD_NAV_WAYPOINT"));
    assert!(output.contains("MAV_CMD"));
}

#[test]
fn test_search_invalid_pattern() {
    let stderr = run_err(&["search", "messages", "["]);
    assert!(stderr.contains("Invalid pattern"));
}
