// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Enum newtypes for the supported dialects.
//!
//! Every enum is an open newtype over its wire integer. Values outside
//! the published entry set pass through encode and decode untouched, so
//! payloads produced by newer dialect revisions stay readable. The
//! `META` constant on each type feeds the enum catalog in
//! [`crate::schema::catalog`].

pub mod ardupilotmega;
pub mod commands;
pub mod common;

mod macros;

pub use ardupilotmega::*;
pub use commands::*;
pub use common::*;

use crate::schema::EnumMeta;

/// Metadata for every enum in the crate, in declaration order.
///
/// The slice is the single feed for the enum catalog; a type missing
/// here is invisible to name lookups and to the CLI.
pub fn all_enum_metadata() -> &'static [&'static EnumMeta] {
    static ALL: &[&EnumMeta] = &[
        // common dialect
        &MavAutopilot::META,
        &MavType::META,
        &MavModeFlag::META,
        &MavState::META,
        &MavMode::META,
        &MavSysStatusSensor::META,
        &MavFrame::META,
        &MavCmd::META,
        &MavResult::META,
        &MavMissionResult::META,
        &MavParamType::META,
        &MavSeverity::META,
        &GpsFixType::META,
        &MavPowerStatus::META,
        &SerialControlDev::META,
        &SerialControlFlag::META,
        &MavDistanceSensor::META,
        &MavSensorOrientation::META,
        &MavProtocolCapability::META,
        &MavEstimatorType::META,
        &MavBatteryFunction::META,
        &MavBatteryType::META,
        &MavVtolState::META,
        &MavLandedState::META,
        &EstimatorStatusFlags::META,
        &GpsInputIgnoreFlags::META,
        &AdsbAltitudeType::META,
        &AdsbEmitterType::META,
        &AdsbFlags::META,
        &MavCollisionSrc::META,
        &MavCollisionAction::META,
        &MavCollisionThreatLevel::META,
        &MavDataStream::META,
        &FenceAction::META,
        // ardupilotmega dialect
        &MavMountMode::META,
        &FenceBreach::META,
        &LimitsState::META,
        &LimitModule::META,
        &RallyFlags::META,
        &CameraStatusTypes::META,
        &CameraFeedbackFlags::META,
        &MavRemoteLogDataBlockCommands::META,
        &MavRemoteLogDataBlockStatuses::META,
        &MagCalStatus::META,
        &EkfStatusFlags::META,
        &PidTuningAxis::META,
        &GoproHeartbeatStatus::META,
        &GoproCaptureMode::META,
        &GoproHeartbeatFlags::META,
        &GoproCommand::META,
        &GoproRequestStatus::META,
        &LedControlPattern::META,
    ];
    ALL
}
