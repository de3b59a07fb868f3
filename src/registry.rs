// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Message registry mapping wire IDs and names to message definitions.
//!
//! All lookups are served from one static table, so the set of IDs a factory
//! can instantiate and the set of IDs with a known CRC seed are the same set
//! by construction. The table is indexed into hash maps on first use.

use std::collections::HashMap;
use std::sync::OnceLock;

use crate::core::{CodecError, Result};
use crate::messages::{self, Message};
use crate::schema::MessageSpec;
use crate::wire::PayloadCursor;

/// One registered message definition: its schema plus a factory for
/// default-initialized instances.
struct MessageEntry {
    spec: &'static MessageSpec,
    make: fn() -> Box<dyn Message>,
}

fn boxed_default<M: Message + Default + 'static>() -> Box<dyn Message> {
    Box::new(M::default())
}

macro_rules! message_table {
    ($($msg:ident),+ $(,)?) => {
        static ENTRIES: &[MessageEntry] = &[
            $(
                MessageEntry {
                    spec: &messages::$msg::SPEC,
                    make: boxed_default::<messages::$msg>,
                },
            )+
        ];
    };
}

message_table![
    Heartbeat,
    SysStatus,
    SystemTime,
    Ping,
    ChangeOperatorControl,
    ChangeOperatorControlAck,
    AuthKey,
    SetMode,
    ParamRequestRead,
    ParamRequestList,
    ParamValue,
    ParamSet,
    GpsRawInt,
    GpsStatus,
    ScaledImu,
    RawImu,
    RawPressure,
    ScaledPressure,
    Attitude,
    AttitudeQuaternion,
    LocalPositionNed,
    GlobalPositionInt,
    RcChannelsScaled,
    RcChannelsRaw,
    ServoOutputRaw,
    MissionRequestPartialList,
    MissionWritePartialList,
    MissionItem,
    MissionRequest,
    MissionSetCurrent,
    MissionCurrent,
    MissionRequestList,
    MissionCount,
    MissionClearAll,
    MissionItemReached,
    MissionAck,
    SetGpsGlobalOrigin,
    GpsGlobalOrigin,
    ParamMapRc,
    SafetySetAllowedArea,
    SafetyAllowedArea,
    AttitudeQuaternionCov,
    NavControllerOutput,
    GlobalPositionIntCov,
    LocalPositionNedCov,
    RcChannels,
    RequestDataStream,
    DataStream,
    ManualControl,
    RcChannelsOverride,
    MissionItemInt,
    VfrHud,
    CommandInt,
    CommandLong,
    CommandAck,
    ManualSetpoint,
    SetAttitudeTarget,
    AttitudeTarget,
    SetPositionTargetLocalNed,
    PositionTargetLocalNed,
    SetPositionTargetGlobalInt,
    PositionTargetGlobalInt,
    LocalPositionNedSystemGlobalOffset,
    HilState,
    HilControls,
    HilRcInputsRaw,
    HilActuatorControls,
    OpticalFlow,
    GlobalVisionPositionEstimate,
    VisionPositionEstimate,
    VisionSpeedEstimate,
    ViconPositionEstimate,
    HighresImu,
    OpticalFlowRad,
    HilSensor,
    SimState,
    RadioStatus,
    FileTransferProtocol,
    Timesync,
    CameraTrigger,
    HilGps,
    HilOpticalFlow,
    HilStateQuaternion,
    ScaledImu2,
    LogRequestList,
    LogEntry,
    LogRequestData,
    LogData,
    LogErase,
    LogRequestEnd,
    GpsInjectData,
    Gps2Raw,
    PowerStatus,
    SerialControl,
    GpsRtk,
    Gps2Rtk,
    ScaledImu3,
    DataTransmissionHandshake,
    EncapsulatedData,
    DistanceSensor,
    TerrainRequest,
    TerrainData,
    TerrainCheck,
    TerrainReport,
    ScaledPressure2,
    AttPosMocap,
    SetActuatorControlTarget,
    ActuatorControlTarget,
    Altitude,
    ResourceRequest,
    ScaledPressure3,
    FollowTarget,
    ControlSystemState,
    BatteryStatus,
    AutopilotVersion,
    LandingTarget,
    SensorOffsets,
    SetMagOffsets,
    Meminfo,
    ApAdc,
    DigicamConfigure,
    DigicamControl,
    MountConfigure,
    MountControl,
    MountStatus,
    FencePoint,
    FenceFetchPoint,
    FenceStatus,
    Ahrs,
    Simstate,
    Hwstatus,
    Radio,
    LimitsStatus,
    Wind,
    Data16,
    Data32,
    Data64,
    Data96,
    Rangefinder,
    AirspeedAutocal,
    RallyPoint,
    RallyFetchPoint,
    CompassmotStatus,
    Ahrs2,
    CameraStatus,
    CameraFeedback,
    Battery2,
    Ahrs3,
    AutopilotVersionRequest,
    RemoteLogDataBlock,
    RemoteLogBlockStatus,
    LedControl,
    MagCalProgress,
    MagCalReport,
    EkfStatusReport,
    PidTuning,
    GimbalReport,
    GimbalControl,
    GimbalTorqueCmdReport,
    GoproHeartbeat,
    GoproGetRequest,
    GoproGetResponse,
    GoproSetRequest,
    GoproSetResponse,
    Rpm,
    EstimatorStatus,
    WindCov,
    GpsInput,
    GpsRtcmData,
    HighLatency,
    Vibration,
    HomePosition,
    SetHomePosition,
    MessageInterval,
    ExtendedSysState,
    AdsbVehicle,
    Collision,
    V2Extension,
    MemoryVect,
    DebugVect,
    NamedValueFloat,
    NamedValueInt,
    Statustext,
    Debug,
];

struct MessageIndex {
    by_id: HashMap<u32, &'static MessageEntry>,
    by_name: HashMap<&'static str, &'static MessageEntry>,
}

impl MessageIndex {
    fn build() -> Self {
        let mut by_id = HashMap::with_capacity(ENTRIES.len());
        let mut by_name = HashMap::with_capacity(ENTRIES.len());
        for entry in ENTRIES {
            by_id.insert(entry.spec.id, entry);
            by_name.insert(entry.spec.name, entry);
        }
        tracing::debug!("Indexed {} message definitions", ENTRIES.len());
        Self { by_id, by_name }
    }
}

static INDEX: OnceLock<MessageIndex> = OnceLock::new();

fn index() -> &'static MessageIndex {
    INDEX.get_or_init(MessageIndex::build)
}

/// Create a default-initialized message for a wire ID.
///
/// Returns `None` for IDs outside the registered set. Unknown IDs are an
/// expected condition when talking to peers with newer dialects, so this
/// never fails hard.
#[must_use]
pub fn create_from_id(id: u32) -> Option<Box<dyn Message>> {
    index().by_id.get(&id).map(|entry| (entry.make)())
}

/// Create a default-initialized message from its wire name, e.g. "HEARTBEAT".
#[must_use]
pub fn create_from_name(name: &str) -> Option<Box<dyn Message>> {
    index().by_name.get(name).map(|entry| (entry.make)())
}

/// CRC seed byte for a wire ID, `None` if the ID is not registered.
///
/// Served from the same table as [`create_from_id`], so both report the same
/// set of known IDs.
#[must_use]
pub fn crc_extra_for_id(id: u32) -> Option<u8> {
    index().by_id.get(&id).map(|entry| entry.spec.crc_extra)
}

/// Schema for a wire ID, `None` if the ID is not registered.
#[must_use]
pub fn spec_for_id(id: u32) -> Option<&'static MessageSpec> {
    index().by_id.get(&id).map(|entry| entry.spec)
}

/// Schema for a wire name, `None` if the name is not registered.
#[must_use]
pub fn spec_for_name(name: &str) -> Option<&'static MessageSpec> {
    index().by_name.get(name).map(|entry| entry.spec)
}

/// Decode a payload into a typed message selected by wire ID.
///
/// # Errors
///
/// Returns `CodecError::UnknownMessageId` if the ID is not registered, or
/// `CodecError::TruncatedPayload` if the payload is shorter than the
/// message's fixed encoding.
pub fn decode_from_id(id: u32, payload: &[u8]) -> Result<Box<dyn Message>> {
    let entry = index()
        .by_id
        .get(&id)
        .ok_or_else(|| CodecError::unknown_message_id(id))?;
    let mut message = (entry.make)();
    let mut cursor = PayloadCursor::new(payload);
    message.decode_payload(&mut cursor)?;
    Ok(message)
}

/// All registered message schemas in wire ID order.
#[must_use]
pub fn all_specs() -> Vec<&'static MessageSpec> {
    let mut specs: Vec<_> = ENTRIES.iter().map(|entry| entry.spec).collect();
    specs.sort_by_key(|spec| spec.id);
    specs
}

/// Number of registered message definitions.
#[must_use]
pub fn message_count() -> usize {
    ENTRIES.len()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_id_absent_from_both_tables() {
        assert!(create_from_id(9999).is_none());
        assert!(crc_extra_for_id(9999).is_none());
    }

    #[test]
    fn test_factory_and_crc_table_agree() {
        for spec in all_specs() {
            let instance = create_from_id(spec.id).unwrap();
            assert_eq!(instance.message_id(), spec.id);
            assert_eq!(Some(instance.crc_extra()), crc_extra_for_id(spec.id));
            assert_eq!(instance.encoded_len(), spec.encoded_len);
        }
    }

    #[test]
    fn test_lookup_by_name_matches_lookup_by_id() {
        let by_name = create_from_name("HEARTBEAT").unwrap();
        let by_id = create_from_id(0).unwrap();
        assert_eq!(by_name.message_name(), by_id.message_name());
        assert!(create_from_name("NOT_A_MESSAGE").is_none());
    }

    #[test]
    fn test_decode_from_id_unknown() {
        let err = decode_from_id(9999, &[0u8; 16]).unwrap_err();
        assert!(matches!(err, CodecError::UnknownMessageId { id: 9999 }));
    }

    #[test]
    fn test_decode_from_id_heartbeat() {
        let payload = [0u8, 0, 0, 0, 2, 3, 0, 0, 3];
        let message = decode_from_id(0, &payload).unwrap();
        assert_eq!(message.message_name(), "HEARTBEAT");
        assert_eq!(message.to_payload(), payload);
    }

    #[test]
    fn test_all_specs_sorted_unique() {
        let specs = all_specs();
        assert_eq!(specs.len(), message_count());
        for pair in specs.windows(2) {
            assert!(pair[0].id < pair[1].id);
        }
    }
}
