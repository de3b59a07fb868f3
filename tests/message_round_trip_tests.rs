// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Wire round-trip tests for typed messages.
//!
//! Anchors a handful of messages to exact byte layouts, then drives every
//! registered message through a synthesized payload to check that decoding
//! and re-encoding reproduce the input bit for bit.

use mavcodec::enums::{MavAutopilot, MavModeFlag, MavState, MavType};
use mavcodec::messages::{from_payload, Heartbeat, Message, Ping, RcChannelsRaw, Statustext};
use mavcodec::schema::FieldKind;
use mavcodec::wire::CharBuf;
use mavcodec::CodecError;

// ============================================================================
// Exact Wire Layout Anchors
// ============================================================================

#[test]
fn test_heartbeat_exact_bytes() {
    let heartbeat = Heartbeat {
        custom_mode: 0,
        mavtype: MavType::MAV_TYPE_QUADROTOR,
        autopilot: MavAutopilot::MAV_AUTOPILOT_ARDUPILOTMEGA,
        base_mode: MavModeFlag::new(0),
        system_status: MavState::new(0),
        mavlink_version: 3,
    };

    let payload = heartbeat.to_payload();
    assert_eq!(payload, [0, 0, 0, 0, 2, 3, 0, 0, 3]);

    let back: Heartbeat = from_payload(&payload).expect("decode heartbeat");
    assert_eq!(back, heartbeat);
}

#[test]
fn test_ping_exact_bytes() {
    let ping = Ping {
        time_usec: 1_234_567_890_123,
        seq: 42,
        target_system: 1,
        target_component: 1,
    };

    let payload = ping.to_payload();
    assert_eq!(payload.len(), 14);
    // 1234567890123 little-endian over eight bytes.
    assert_eq!(
        payload,
        [0xCB, 0x04, 0xFB, 0x71, 0x1F, 0x01, 0x00, 0x00, 42, 0, 0, 0, 1, 1]
    );

    let back: Ping = from_payload(&payload).expect("decode ping");
    assert_eq!(back, ping);
}

#[test]
fn test_heartbeat_truncated_payload() {
    let payload = [0u8, 0, 0, 0, 2];
    let err = from_payload::<Heartbeat>(&payload).unwrap_err();
    assert!(matches!(err, CodecError::TruncatedPayload { .. }));
}

#[test]
fn test_trailing_bytes_ignored() {
    let mut payload = Heartbeat::default().to_payload();
    payload.extend_from_slice(&[0xAA, 0xBB, 0xCC]);
    let back: Heartbeat = from_payload(&payload).expect("decode with trailing bytes");
    assert_eq!(back, Heartbeat::default());
}

// ============================================================================
// Boundary Values
// ============================================================================

#[test]
fn test_integer_extremes_round_trip() {
    let mut channels = RcChannelsRaw::default();
    channels.time_boot_ms = u32::MAX;
    channels.chan1_raw = u16::MAX;
    channels.chan8_raw = 0;
    channels.rssi = 255;
    let back: RcChannelsRaw = from_payload(&channels.to_payload()).expect("decode channels");
    assert_eq!(back, channels);
}

#[test]
fn test_float_nan_bits_preserved() {
    let mut attitude = mavcodec::messages::Attitude::default();
    attitude.roll = f32::NAN;
    attitude.pitch = f32::INFINITY;
    attitude.yaw = f32::NEG_INFINITY;
    attitude.rollspeed = -0.0;

    let back: mavcodec::messages::Attitude =
        from_payload(&attitude.to_payload()).expect("decode attitude");
    assert_eq!(back.roll.to_bits(), attitude.roll.to_bits());
    assert_eq!(back.pitch, f32::INFINITY);
    assert_eq!(back.yaw, f32::NEG_INFINITY);
    assert_eq!(back.rollspeed.to_bits(), (-0.0f32).to_bits());
}

#[test]
fn test_char_buffer_padding_and_truncation() {
    // Short values zero-fill the remainder.
    let mut status = Statustext::default();
    status.text = CharBuf::from("ok");
    let payload = status.to_payload();
    assert_eq!(&payload[1..3], b"ok");
    assert!(payload[3..].iter().all(|&b| b == 0));

    // Over-long values truncate to the buffer width.
    let long = "x".repeat(80);
    status.text = CharBuf::from(long.as_str());
    let payload = status.to_payload();
    assert_eq!(payload.len(), 51);
    assert!(payload[1..].iter().all(|&b| b == b'x'));
}

// ============================================================================
// Whole-Registry Round Trip
// ============================================================================

/// Deterministic byte stream so failures reproduce.
struct Lcg(u64);

impl Lcg {
    fn next_byte(&mut self) -> u8 {
        self.0 = self.0.wrapping_mul(6_364_136_223_846_793_005).wrapping_add(1);
        (self.0 >> 33) as u8
    }
}

/// Synthesize a payload that exercises every field span.
///
/// Float lanes get finite values so the comparison is not at the mercy of
/// platform NaN handling; every other lane takes raw generator bytes.
fn synthesize_payload(spec: &mavcodec::schema::MessageSpec, rng: &mut Lcg) -> Vec<u8> {
    let mut payload = Vec::with_capacity(spec.encoded_len);
    for field in spec.fields {
        for _ in 0..field.count {
            match field.kind {
                FieldKind::Float32 => {
                    let value = f32::from(rng.next_byte()) / 4.0 - 16.0;
                    payload.extend_from_slice(&value.to_le_bytes());
                }
                FieldKind::Float64 => {
                    let value = f64::from(rng.next_byte()) / 4.0 - 16.0;
                    payload.extend_from_slice(&value.to_le_bytes());
                }
                kind => {
                    for _ in 0..kind.size() {
                        payload.push(rng.next_byte());
                    }
                }
            }
        }
    }
    payload
}

#[test]
fn test_every_message_reencodes_identically() {
    let mut rng = Lcg(0x5EED);
    for spec in mavcodec::all_specs() {
        let payload = synthesize_payload(spec, &mut rng);
        assert_eq!(payload.len(), spec.encoded_len, "{}", spec.name);

        let message = mavcodec::decode_from_id(spec.id, &payload)
            .unwrap_or_else(|e| panic!("decode {}: {e}", spec.name));
        assert_eq!(message.to_payload(), payload, "{}", spec.name);
    }
}

#[test]
fn test_every_message_rejects_truncation() {
    for spec in mavcodec::all_specs() {
        let short = vec![0u8; spec.encoded_len - 1];
        let err = mavcodec::decode_from_id(spec.id, &short)
            .err()
            .unwrap_or_else(|| panic!("{} accepted a short payload", spec.name));
        assert!(
            matches!(err, CodecError::TruncatedPayload { .. }),
            "{}: {err}",
            spec.name
        );
    }
}

#[test]
fn test_every_message_default_encodes_to_zeros() {
    for spec in mavcodec::all_specs() {
        let message = mavcodec::create_from_id(spec.id).expect("known id");
        let payload = message.to_payload();
        assert_eq!(payload.len(), spec.encoded_len, "{}", spec.name);
        assert!(
            payload.iter().all(|&b| b == 0),
            "{} default payload is not zeroed",
            spec.name
        );
    }
}
