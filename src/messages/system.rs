// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! System identity, liveness, timing, and capability messages.

use super::macros::mav_message;
use crate::enums::{
    MavAutopilot, MavLandedState, MavMode, MavModeFlag, MavPowerStatus, MavProtocolCapability,
    MavState, MavSysStatusSensor, MavType, MavVtolState,
};
use crate::wire::CharBuf;

mav_message! {
    Heartbeat {
        id: 0,
        name: "HEARTBEAT",
        crc_extra: 50,
        description: "The heartbeat message shows that a system is present and responding; the type of the MAV and autopilot lets the receiving system treat it appropriately",
        fields: {
            custom_mode: u32 = "A bitfield for use for autopilot-specific flags",
            mavtype as "type": MavType = "Type of the MAV, e.g. quadrotor or helicopter",
            autopilot: MavAutopilot = "Autopilot type / class",
            base_mode: MavModeFlag = "System mode bitfield",
            system_status: MavState = "System status flag",
            mavlink_version: u8 = "MAVLink version, set automatically by the protocol",
        }
    }

    SysStatus {
        id: 1,
        name: "SYS_STATUS",
        crc_extra: 124,
        description: "The general system state: sensor presence and health, load, battery, and communication drop rates",
        fields: {
            onboard_control_sensors_present: MavSysStatusSensor = "Bitmask of onboard controllers and sensors present",
            onboard_control_sensors_enabled: MavSysStatusSensor = "Bitmask of enabled onboard controllers and sensors",
            onboard_control_sensors_health: MavSysStatusSensor = "Bitmask of onboard controllers and sensors with errors, zero bits mean error",
            load: u16 = "Maximum usage in percent of the mainloop time, 0..1000; should always stay below 1000",
            voltage_battery: u16 = "Battery voltage in millivolts",
            current_battery: i16 = "Battery current in 10 mA units, -1 if not measured",
            drop_rate_comm: u16 = "Communication drop rate in percent times 100",
            errors_comm: u16 = "Communication errors, dropped packets on all links",
            errors_count1: u16 = "Autopilot-specific error count 1",
            errors_count2: u16 = "Autopilot-specific error count 2",
            errors_count3: u16 = "Autopilot-specific error count 3",
            errors_count4: u16 = "Autopilot-specific error count 4",
            battery_remaining: i8 = "Remaining battery energy in percent, -1 if not estimated",
        }
    }

    SystemTime {
        id: 2,
        name: "SYSTEM_TIME",
        crc_extra: 137,
        description: "The system time is the time of the master clock, typically the computer clock of the main onboard computer",
        fields: {
            time_unix_usec: u64 = "UNIX epoch timestamp in microseconds",
            time_boot_ms: u32 = "Milliseconds since system boot",
        }
    }

    Ping {
        id: 4,
        name: "PING",
        crc_extra: 237,
        description: "A ping message for round-trip timing; target 0/0 requests a ping from any receiving system",
        fields: {
            time_usec: u64 = "UNIX epoch timestamp in microseconds",
            seq: u32 = "Ping sequence number",
            target_system: u8 = "System requested to reply, 0 for all",
            target_component: u8 = "Component requested to reply, 0 for all",
        }
    }

    ChangeOperatorControl {
        id: 5,
        name: "CHANGE_OPERATOR_CONTROL",
        crc_extra: 217,
        description: "Request to control this MAV",
        fields: {
            target_system: u8 = "System the GCS requests control for",
            control_request: u8 = "Request control (0) or release control (1)",
            version: u8 = "Passkey hashing version, 0 for plain text",
            passkey: CharBuf<25> = "Passkey, NUL terminated when shorter than the field",
        }
    }

    ChangeOperatorControlAck {
        id: 6,
        name: "CHANGE_OPERATOR_CONTROL_ACK",
        crc_extra: 104,
        description: "Accept or deny a CHANGE_OPERATOR_CONTROL request",
        fields: {
            gcs_system_id: u8 = "ID of the GCS requesting control",
            control_request: u8 = "Request control (0) or release control (1)",
            ack: u8 = "Granted (0), wrong passkey (1), unsupported version (2), already under control (3)",
        }
    }

    AuthKey {
        id: 7,
        name: "AUTH_KEY",
        crc_extra: 119,
        description: "Emit an encrypted signature / key identifying this system; only to be used over encrypted channels",
        fields: {
            key: CharBuf<32> = "Key",
        }
    }

    SetMode {
        id: 11,
        name: "SET_MODE",
        crc_extra: 89,
        description: "Set the system mode, as defined in the MAV_MODE enum",
        fields: {
            custom_mode: u32 = "New autopilot-specific mode",
            target_system: u8 = "System which should change its mode",
            base_mode: MavMode = "New base mode",
        }
    }

    FileTransferProtocol {
        id: 110,
        name: "FILE_TRANSFER_PROTOCOL",
        crc_extra: 84,
        description: "File transfer message carrying an encoded FTP sub-protocol payload",
        fields: {
            target_network: u8 = "Network ID, 0 for broadcast",
            target_system: u8 = "System ID, 0 for broadcast",
            target_component: u8 = "Component ID, 0 for broadcast",
            payload: [u8; 251] = "Variable length payload, length is defined by the FTP sub-protocol",
        }
    }

    Timesync {
        id: 111,
        name: "TIMESYNC",
        crc_extra: 34,
        description: "Time synchronization message",
        fields: {
            tc1: i64 = "Time sync timestamp 1",
            ts1: i64 = "Time sync timestamp 2",
        }
    }

    CameraTrigger {
        id: 112,
        name: "CAMERA_TRIGGER",
        crc_extra: 174,
        description: "Camera-IMU triggering and synchronization message",
        fields: {
            time_usec: u64 = "Image frame timestamp in microseconds",
            seq: u32 = "Image frame sequence number",
        }
    }

    PowerStatus {
        id: 125,
        name: "POWER_STATUS",
        crc_extra: 203,
        description: "Power supply status",
        fields: {
            vcc as "Vcc": u16 = "5 V rail voltage in millivolts",
            vservo as "Vservo": u16 = "Servo rail voltage in millivolts",
            flags: MavPowerStatus = "Power supply status flags",
        }
    }

    ResourceRequest {
        id: 142,
        name: "RESOURCE_REQUEST",
        crc_extra: 72,
        description: "The autopilot is requesting a resource, e.g. a file or parameter set, from an external entity",
        fields: {
            request_id: u8 = "Request ID, to be carried in the URI_RECEIVED ack",
            uri_type: u8 = "Type of the URI: binary (0) or UTF-8 text (1)",
            uri: [u8; 120] = "Resource identifier, NUL terminated when shorter than the field",
            transfer_type: u8 = "Delivery: MAVLink FTP (0), binary stream (1)",
            storage: [u8; 120] = "Storage URI the requested resource should be written to, NUL terminated",
        }
    }

    AutopilotVersion {
        id: 148,
        name: "AUTOPILOT_VERSION",
        crc_extra: 178,
        description: "Version and capability of the autopilot software",
        fields: {
            capability: MavProtocolCapability = "Bitmask of autopilot capabilities",
            uid: u64 = "UID if provided by hardware",
            flight_sw_version: u32 = "Firmware version number",
            middleware_sw_version: u32 = "Middleware version number",
            os_sw_version: u32 = "Operating system version number",
            board_version: u32 = "HW / board version",
            vendor_id: u16 = "USB vendor ID",
            product_id: u16 = "USB product ID",
            flight_custom_version: [u8; 8] = "Custom version field, commonly the first 8 bytes of the git hash",
            middleware_custom_version: [u8; 8] = "Custom version field, commonly the first 8 bytes of the git hash",
            os_custom_version: [u8; 8] = "Custom version field, commonly the first 8 bytes of the git hash",
        }
    }

    MessageInterval {
        id: 244,
        name: "MESSAGE_INTERVAL",
        crc_extra: 95,
        description: "The interval between messages of a specific type; sent in response to MAV_CMD_GET_MESSAGE_INTERVAL",
        fields: {
            interval_us: i32 = "Interval in microseconds, -1 disabled, 0 no interval set",
            message_id: u16 = "ID of the interval's message type",
        }
    }

    ExtendedSysState {
        id: 245,
        name: "EXTENDED_SYS_STATE",
        crc_extra: 130,
        description: "Landing and VTOL states that do not fit the HEARTBEAT",
        fields: {
            vtol_state: MavVtolState = "VTOL state when the vehicle is configured as VTOL",
            landed_state: MavLandedState = "Landed state",
        }
    }

    V2Extension {
        id: 248,
        name: "V2_EXTENSION",
        crc_extra: 8,
        description: "Message implementing parts of the V2 payload specs for transitional support",
        fields: {
            message_type: u16 = "Code of the extension message type",
            target_network: u8 = "Network ID, 0 for broadcast",
            target_system: u8 = "System ID, 0 for broadcast",
            target_component: u8 = "Component ID, 0 for broadcast",
            payload: [u8; 249] = "Opaque extension payload; the full field width is always transmitted",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::messages::{from_payload, Message};

    #[test]
    fn test_heartbeat_layout() {
        let heartbeat = Heartbeat {
            custom_mode: 0,
            mavtype: MavType::MAV_TYPE_QUADROTOR,
            autopilot: MavAutopilot::MAV_AUTOPILOT_ARDUPILOTMEGA,
            base_mode: MavModeFlag::new(0),
            system_status: MavState::new(0),
            mavlink_version: 3,
        };
        assert_eq!(Heartbeat::ENCODED_LEN, 9);
        assert_eq!(
            heartbeat.to_payload(),
            vec![0x00, 0x00, 0x00, 0x00, 0x02, 0x03, 0x00, 0x00, 0x03]
        );
    }

    #[test]
    fn test_ping_layout() {
        let ping = Ping {
            time_usec: 1_234_567_890_123,
            seq: 42,
            target_system: 1,
            target_component: 1,
        };
        assert_eq!(Ping::ENCODED_LEN, 14);
        assert_eq!(
            ping.to_payload(),
            vec![
                0xCB, 0x04, 0xFB, 0x71, 0x1F, 0x01, 0x00, 0x00, // time_usec
                0x2A, 0x00, 0x00, 0x00, // seq
                0x01, // target_system
                0x01, // target_component
            ]
        );
    }

    #[test]
    fn test_heartbeat_decode_unknown_enum_value() {
        // values outside the published entry set decode untouched
        let payload = [0x00, 0x00, 0x00, 0x00, 0xC8, 0x03, 0x00, 0x00, 0x03];
        let heartbeat: Heartbeat = from_payload(&payload).unwrap();
        assert_eq!(heartbeat.mavtype.raw(), 200);
        assert_eq!(heartbeat.mavtype.name(), None);
    }

    #[test]
    fn test_passkey_padding() {
        let control = ChangeOperatorControl {
            target_system: 1,
            control_request: 0,
            version: 0,
            passkey: CharBuf::from("secret"),
        };
        let payload = control.to_payload();
        assert_eq!(payload.len(), 28);
        assert_eq!(&payload[3..9], b"secret");
        assert!(payload[9..].iter().all(|&b| b == 0));
        let back: ChangeOperatorControl = from_payload(&payload).unwrap();
        assert_eq!(back.passkey.to_text(), "secret");
    }

    #[test]
    fn test_large_array_defaults() {
        let ftp = FileTransferProtocol::default();
        assert_eq!(FileTransferProtocol::ENCODED_LEN, 254);
        assert_eq!(ftp.to_payload().len(), 254);
        assert_eq!(AutopilotVersion::ENCODED_LEN, 60);
        assert_eq!(V2Extension::ENCODED_LEN, 254);
        assert_eq!(SysStatus::ENCODED_LEN, 31);
    }

    #[test]
    fn test_wire_name_override() {
        let field = PowerStatus::SPEC.field("Vcc").unwrap();
        assert_eq!(field.name, "Vcc");
        assert!(PowerStatus::SPEC.field("vcc").is_none());
        let ty = Heartbeat::SPEC.field("type").unwrap();
        assert_eq!(ty.enum_name, Some("MAV_TYPE"));
    }
}
