// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Metadata catalog and descriptor consistency tests.
//!
//! The descriptors are never consulted by the typed codec, so nothing else
//! would catch a drifted field table. These tests cross-check the metadata
//! layer against the typed layer and pin the catalog's one-time build.

use std::sync::Arc;
use std::thread;

use mavcodec::enums::{MavCmd, MavState};
use mavcodec::messages::Heartbeat;
use mavcodec::schema::FieldKind;

// ============================================================================
// Catalog Initialization
// ============================================================================

#[test]
fn test_catalog_builds_once_across_threads() {
    let barrier = Arc::new(std::sync::Barrier::new(8));
    let handles: Vec<_> = (0..8)
        .map(|_| {
            let barrier = Arc::clone(&barrier);
            thread::spawn(move || {
                barrier.wait();
                mavcodec::enum_catalog() as *const _ as usize
            })
        })
        .collect();

    let addresses: Vec<usize> = handles
        .into_iter()
        .map(|handle| handle.join().expect("catalog thread"))
        .collect();
    assert!(addresses.windows(2).all(|pair| pair[0] == pair[1]));
}

#[test]
fn test_metadata_lookups_are_pointer_stable() {
    let first = mavcodec::enum_metadata("MAV_TYPE").expect("MAV_TYPE registered");
    let second = mavcodec::enum_metadata("MAV_TYPE").expect("MAV_TYPE registered");
    assert!(std::ptr::eq(first, second));
    assert!(mavcodec::enum_metadata("NOT_AN_ENUM").is_none());
}

// ============================================================================
// Descriptor / Typed-Layer Consistency
// ============================================================================

#[test]
fn test_field_tables_span_encoded_len() {
    for spec in mavcodec::all_specs() {
        let span: usize = spec.fields.iter().map(|field| field.wire_size()).sum();
        assert_eq!(span, spec.encoded_len, "{}", spec.name);
        assert!(!spec.fields.is_empty(), "{}", spec.name);
    }
}

#[test]
fn test_every_referenced_enum_is_cataloged() {
    for spec in mavcodec::all_specs() {
        for field in spec.fields {
            if let Some(enum_name) = field.enum_name {
                let meta = mavcodec::enum_metadata(enum_name).unwrap_or_else(|| {
                    panic!("{}.{} references unknown enum {enum_name}", spec.name, field.name)
                });
                assert_eq!(meta.name, enum_name);
                assert!(!meta.entries.is_empty(), "{enum_name}");
            }
        }
    }
}

#[test]
fn test_heartbeat_descriptor_layout() {
    let spec = mavcodec::spec_for_id(0).expect("heartbeat registered");
    let names: Vec<&str> = spec.fields.iter().map(|field| field.name).collect();
    assert_eq!(
        names,
        [
            "custom_mode",
            "type",
            "autopilot",
            "base_mode",
            "system_status",
            "mavlink_version"
        ]
    );

    assert_eq!(spec.fields[0].kind, FieldKind::UInt32);
    assert_eq!(spec.fields[1].enum_name, Some("MAV_TYPE"));
    assert_eq!(spec.fields[4].enum_name, Some("MAV_STATE"));
    assert_eq!(spec.fields[5].enum_name, None);
    assert_eq!(spec.field_offset("mavlink_version"), Some(8));
}

#[test]
fn test_typed_spec_matches_registry_spec() {
    let registry_spec = mavcodec::spec_for_id(0).expect("heartbeat registered");
    assert_eq!(*registry_spec, Heartbeat::SPEC);
}

// ============================================================================
// Enum Metadata Content
// ============================================================================

#[test]
fn test_command_entries_carry_param_docs() {
    let meta = mavcodec::enum_metadata("MAV_CMD").expect("MAV_CMD registered");
    let waypoint = meta
        .entry_named("MAV_CMD_NAV_WAYPOINT")
        .expect("waypoint command");
    assert_eq!(waypoint.value, u64::from(MavCmd::MAV_CMD_NAV_WAYPOINT.raw()));
    assert_eq!(waypoint.params.len(), 7);

    let arm = meta
        .entry_named("MAV_CMD_COMPONENT_ARM_DISARM")
        .expect("arm command");
    assert_eq!(arm.value, 400);
}

#[test]
fn test_duplicate_values_resolve_to_first_entry() {
    // Every published MAV_STATE entry carries value zero; lookups by value
    // resolve to the first declared name, lookups by name stay distinct.
    let meta = mavcodec::enum_metadata("MAV_STATE").expect("MAV_STATE registered");
    assert!(meta.has_duplicate_values());
    assert_eq!(meta.entry_for_value(0).map(|e| e.name), Some("MAV_STATE_UNINIT"));
    assert!(meta.entry_named("MAV_STATE_ACTIVE").is_some());
    assert_eq!(MavState::new(0).name(), Some("MAV_STATE_UNINIT"));
}

#[test]
fn test_catalog_covers_all_declared_enums() {
    let catalog = mavcodec::enum_catalog();
    assert_eq!(catalog.len(), mavcodec::enums::all_enum_metadata().len());
    for meta in mavcodec::enums::all_enum_metadata() {
        let looked_up = catalog.get(meta.name).expect(meta.name);
        assert!(std::ptr::eq(*meta, looked_up));
    }
}
