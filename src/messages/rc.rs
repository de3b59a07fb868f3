// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! RC input, servo output, manual control, and radio link messages.

use super::macros::mav_message;

mav_message! {
    RcChannelsScaled {
        id: 34,
        name: "RC_CHANNELS_SCALED",
        crc_extra: 237,
        description: "The scaled values of the RC channels received, -10000..10000, UINT16_MAX marks an inactive channel",
        fields: {
            time_boot_ms: u32 = "Milliseconds since system boot",
            chan1_scaled: i16 = "RC channel 1 value scaled",
            chan2_scaled: i16 = "RC channel 2 value scaled",
            chan3_scaled: i16 = "RC channel 3 value scaled",
            chan4_scaled: i16 = "RC channel 4 value scaled",
            chan5_scaled: i16 = "RC channel 5 value scaled",
            chan6_scaled: i16 = "RC channel 6 value scaled",
            chan7_scaled: i16 = "RC channel 7 value scaled",
            chan8_scaled: i16 = "RC channel 8 value scaled",
            port: u8 = "Servo output port; main is 0, aux is 1 on Pixhawk",
            rssi: u8 = "Receive signal strength, 0..254, 255 invalid or unknown",
        }
    }

    RcChannelsRaw {
        id: 35,
        name: "RC_CHANNELS_RAW",
        crc_extra: 244,
        description: "The RAW values of the RC channels received; 100 percent is 2000 microseconds standard PPM",
        fields: {
            time_boot_ms: u32 = "Milliseconds since system boot",
            chan1_raw: u16 = "RC channel 1 value in microseconds, UINT16_MAX if unused",
            chan2_raw: u16 = "RC channel 2 value in microseconds, UINT16_MAX if unused",
            chan3_raw: u16 = "RC channel 3 value in microseconds, UINT16_MAX if unused",
            chan4_raw: u16 = "RC channel 4 value in microseconds, UINT16_MAX if unused",
            chan5_raw: u16 = "RC channel 5 value in microseconds, UINT16_MAX if unused",
            chan6_raw: u16 = "RC channel 6 value in microseconds, UINT16_MAX if unused",
            chan7_raw: u16 = "RC channel 7 value in microseconds, UINT16_MAX if unused",
            chan8_raw: u16 = "RC channel 8 value in microseconds, UINT16_MAX if unused",
            port: u8 = "Servo output port; main is 0, aux is 1 on Pixhawk",
            rssi: u8 = "Receive signal strength, 0..254, 255 invalid or unknown",
        }
    }

    ServoOutputRaw {
        id: 36,
        name: "SERVO_OUTPUT_RAW",
        crc_extra: 222,
        description: "The RAW values of the servo outputs",
        fields: {
            time_usec: u32 = "Timestamp in microseconds since system boot",
            servo1_raw: u16 = "Servo output 1 value in microseconds",
            servo2_raw: u16 = "Servo output 2 value in microseconds",
            servo3_raw: u16 = "Servo output 3 value in microseconds",
            servo4_raw: u16 = "Servo output 4 value in microseconds",
            servo5_raw: u16 = "Servo output 5 value in microseconds",
            servo6_raw: u16 = "Servo output 6 value in microseconds",
            servo7_raw: u16 = "Servo output 7 value in microseconds",
            servo8_raw: u16 = "Servo output 8 value in microseconds",
            port: u8 = "Servo output port; main is 0, aux is 1 on Pixhawk",
        }
    }

    RcChannels {
        id: 65,
        name: "RC_CHANNELS",
        crc_extra: 118,
        description: "The PPM values of the RC channels received; 100 percent is 2000 microseconds standard PPM",
        fields: {
            time_boot_ms: u32 = "Milliseconds since system boot",
            chan1_raw: u16 = "RC channel 1 value in microseconds, UINT16_MAX if unused",
            chan2_raw: u16 = "RC channel 2 value in microseconds, UINT16_MAX if unused",
            chan3_raw: u16 = "RC channel 3 value in microseconds, UINT16_MAX if unused",
            chan4_raw: u16 = "RC channel 4 value in microseconds, UINT16_MAX if unused",
            chan5_raw: u16 = "RC channel 5 value in microseconds, UINT16_MAX if unused",
            chan6_raw: u16 = "RC channel 6 value in microseconds, UINT16_MAX if unused",
            chan7_raw: u16 = "RC channel 7 value in microseconds, UINT16_MAX if unused",
            chan8_raw: u16 = "RC channel 8 value in microseconds, UINT16_MAX if unused",
            chan9_raw: u16 = "RC channel 9 value in microseconds, UINT16_MAX if unused",
            chan10_raw: u16 = "RC channel 10 value in microseconds, UINT16_MAX if unused",
            chan11_raw: u16 = "RC channel 11 value in microseconds, UINT16_MAX if unused",
            chan12_raw: u16 = "RC channel 12 value in microseconds, UINT16_MAX if unused",
            chan13_raw: u16 = "RC channel 13 value in microseconds, UINT16_MAX if unused",
            chan14_raw: u16 = "RC channel 14 value in microseconds, UINT16_MAX if unused",
            chan15_raw: u16 = "RC channel 15 value in microseconds, UINT16_MAX if unused",
            chan16_raw: u16 = "RC channel 16 value in microseconds, UINT16_MAX if unused",
            chan17_raw: u16 = "RC channel 17 value in microseconds, UINT16_MAX if unused",
            chan18_raw: u16 = "RC channel 18 value in microseconds, UINT16_MAX if unused",
            chancount: u8 = "Total number of RC channels being received",
            rssi: u8 = "Receive signal strength, 0..254, 255 invalid or unknown",
        }
    }

    RequestDataStream {
        id: 66,
        name: "REQUEST_DATA_STREAM",
        crc_extra: 148,
        description: "Request a data stream; stream groups are defined in the MAV_DATA_STREAM enum",
        fields: {
            req_message_rate: u16 = "Requested message rate in Hz",
            target_system: u8 = "Target requested to send the message stream",
            target_component: u8 = "Target component requested to send the message stream",
            req_stream_id: u8 = "ID of the requested data stream",
            start_stop: u8 = "Stop sending (0) or start sending (1)",
        }
    }

    DataStream {
        id: 67,
        name: "DATA_STREAM",
        crc_extra: 21,
        description: "The current rate and active state of a data stream",
        fields: {
            message_rate: u16 = "Message rate in Hz",
            stream_id: u8 = "ID of the requested data stream",
            on_off: u8 = "Stream disabled (0) or enabled (1)",
        }
    }

    ManualControl {
        id: 69,
        name: "MANUAL_CONTROL",
        crc_extra: 243,
        description: "Control the vehicle with standard joystick axes normalized to -1000..1000",
        fields: {
            x: i16 = "X axis, normalized -1000..1000, pitch on vehicles; INT16_MAX if invalid",
            y: i16 = "Y axis, normalized -1000..1000, roll on vehicles; INT16_MAX if invalid",
            z: i16 = "Z axis, normalized -1000..1000, thrust on vehicles; positive is up",
            r: i16 = "R axis, normalized -1000..1000, yaw on vehicles; clockwise is positive",
            buttons: u16 = "Bitfield of buttons, bit 0 is button 1 pressed",
            target: u8 = "The system to be controlled",
        }
    }

    RcChannelsOverride {
        id: 70,
        name: "RC_CHANNELS_OVERRIDE",
        crc_extra: 124,
        description: "Override the RAW values of the RC channels; UINT16_MAX releases a channel back to the RC radio",
        fields: {
            chan1_raw: u16 = "RC channel 1 value in microseconds",
            chan2_raw: u16 = "RC channel 2 value in microseconds",
            chan3_raw: u16 = "RC channel 3 value in microseconds",
            chan4_raw: u16 = "RC channel 4 value in microseconds",
            chan5_raw: u16 = "RC channel 5 value in microseconds",
            chan6_raw: u16 = "RC channel 6 value in microseconds",
            chan7_raw: u16 = "RC channel 7 value in microseconds",
            chan8_raw: u16 = "RC channel 8 value in microseconds",
            target_system: u8 = "System ID",
            target_component: u8 = "Component ID",
        }
    }

    ManualSetpoint {
        id: 81,
        name: "MANUAL_SETPOINT",
        crc_extra: 106,
        description: "Setpoint in roll, pitch, yaw, and thrust from an operator",
        fields: {
            time_boot_ms: u32 = "Milliseconds since system boot",
            roll: f32 = "Desired roll rate in rad/s",
            pitch: f32 = "Desired pitch rate in rad/s",
            yaw: f32 = "Desired yaw rate in rad/s",
            thrust: f32 = "Collective thrust, normalized 0..1",
            mode_switch: u8 = "Flight mode switch position, 0..255",
            manual_override_switch: u8 = "Override mode switch position, 0..255",
        }
    }

    RadioStatus {
        id: 109,
        name: "RADIO_STATUS",
        crc_extra: 185,
        description: "Status generated by the radio and injected into the MAVLink stream",
        fields: {
            rxerrors: u16 = "Count of radio packet receive errors since boot",
            fixed: u16 = "Count of error-corrected packets",
            rssi: u8 = "Local signal strength",
            remrssi: u8 = "Remote signal strength",
            txbuf: u8 = "Remaining free transmitter buffer space in percent",
            noise: u8 = "Local background noise level",
            remnoise: u8 = "Remote background noise level",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::messages::{from_payload, Message};

    #[test]
    fn test_encoded_lengths() {
        assert_eq!(RcChannelsScaled::ENCODED_LEN, 22);
        assert_eq!(RcChannelsRaw::ENCODED_LEN, 22);
        assert_eq!(ServoOutputRaw::ENCODED_LEN, 21);
        assert_eq!(RcChannels::ENCODED_LEN, 42);
        assert_eq!(RequestDataStream::ENCODED_LEN, 6);
        assert_eq!(DataStream::ENCODED_LEN, 4);
        assert_eq!(ManualControl::ENCODED_LEN, 11);
        assert_eq!(RcChannelsOverride::ENCODED_LEN, 18);
        assert_eq!(ManualSetpoint::ENCODED_LEN, 22);
        assert_eq!(RadioStatus::ENCODED_LEN, 9);
    }

    #[test]
    fn test_channel_override_release_sentinel() {
        let mut over = RcChannelsOverride::default();
        over.chan3_raw = u16::MAX;
        over.target_system = 1;
        let payload = over.to_payload();
        assert_eq!(&payload[4..6], &[0xFF, 0xFF]);
        let back: RcChannelsOverride = from_payload(&payload).unwrap();
        assert_eq!(back.chan3_raw, u16::MAX);
    }

    #[test]
    fn test_manual_control_signed_axes() {
        let control = ManualControl {
            x: -1000,
            y: 1000,
            z: 500,
            r: -1,
            buttons: 0b101,
            target: 1,
        };
        let back: ManualControl = from_payload(&control.to_payload()).unwrap();
        assert_eq!(back, control);
    }
}
