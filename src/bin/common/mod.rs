// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Common utilities for CLI commands.

pub use anyhow::Result as CliResult;
pub type Result<T = ()> = CliResult<T>;

/// Parse a hex payload string.
///
/// Accepts contiguous hex ("fde803..."), whitespace-separated byte pairs
/// ("fd e8 03"), and an optional leading "0x".
pub fn parse_hex_payload(s: &str) -> CliResult<Vec<u8>> {
    let compact: String = s
        .trim()
        .trim_start_matches("0x")
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect();
    hex::decode(&compact).map_err(|e| anyhow::anyhow!("Invalid hex payload '{s}': {e}"))
}

/// Pretty-print a serializable value as JSON.
pub fn print_json<T: serde::Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hex_payload() {
        assert_eq!(parse_hex_payload("00ff10").unwrap(), vec![0x00, 0xFF, 0x10]);
        assert_eq!(parse_hex_payload("00 ff 10").unwrap(), vec![0x00, 0xFF, 0x10]);
        assert_eq!(parse_hex_payload("0x00ff10").unwrap(), vec![0x00, 0xFF, 0x10]);
        assert!(parse_hex_payload("zz").is_err());
        assert!(parse_hex_payload("abc").is_err());
    }
}
