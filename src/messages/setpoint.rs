// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Offboard attitude, position, and actuator setpoint messages.

use super::macros::mav_message;
use crate::enums::MavFrame;

mav_message! {
    SetAttitudeTarget {
        id: 82,
        name: "SET_ATTITUDE_TARGET",
        crc_extra: 49,
        description: "Set a desired vehicle attitude for offboard control",
        fields: {
            time_boot_ms: u32 = "Milliseconds since system boot",
            q: [f32; 4] = "Attitude quaternion w, x, y, z with 1 0 0 0 as null rotation",
            body_roll_rate: f32 = "Body roll rate in rad/s",
            body_pitch_rate: f32 = "Body pitch rate in rad/s",
            body_yaw_rate: f32 = "Body yaw rate in rad/s",
            thrust: f32 = "Collective thrust, normalized 0..1, -1..1 for reversible motors",
            target_system: u8 = "System ID",
            target_component: u8 = "Component ID",
            type_mask: u8 = "Bitmap of dimensions to ignore; bit 1 is body roll rate, bit 7 is throttle, bit 8 is attitude",
        }
    }

    AttitudeTarget {
        id: 83,
        name: "ATTITUDE_TARGET",
        crc_extra: 22,
        description: "Report the attitude setpoint the controller is currently tracking",
        fields: {
            time_boot_ms: u32 = "Milliseconds since system boot",
            q: [f32; 4] = "Attitude quaternion w, x, y, z with 1 0 0 0 as null rotation",
            body_roll_rate: f32 = "Body roll rate in rad/s",
            body_pitch_rate: f32 = "Body pitch rate in rad/s",
            body_yaw_rate: f32 = "Body yaw rate in rad/s",
            thrust: f32 = "Collective thrust, normalized 0..1, -1..1 for reversible motors",
            type_mask: u8 = "Bitmap of dimensions the vehicle ignores",
        }
    }

    SetPositionTargetLocalNed {
        id: 84,
        name: "SET_POSITION_TARGET_LOCAL_NED",
        crc_extra: 143,
        description: "Set a desired vehicle position, velocity, and acceleration in a local NED frame",
        fields: {
            time_boot_ms: u32 = "Milliseconds since system boot",
            x: f32 = "X position in meters, NED",
            y: f32 = "Y position in meters, NED",
            z: f32 = "Z position in meters, NED; down is positive",
            vx: f32 = "X velocity in m/s, NED",
            vy: f32 = "Y velocity in m/s, NED",
            vz: f32 = "Z velocity in m/s, NED",
            afx: f32 = "X acceleration or force in m/s^2, NED",
            afy: f32 = "Y acceleration or force in m/s^2, NED",
            afz: f32 = "Z acceleration or force in m/s^2, NED",
            yaw: f32 = "Yaw setpoint in rad",
            yaw_rate: f32 = "Yaw rate setpoint in rad/s",
            type_mask: u16 = "Bitmap of dimensions to ignore; bit 1 is x, bit 11 is yaw, bit 12 is yaw rate",
            target_system: u8 = "System ID",
            target_component: u8 = "Component ID",
            coordinate_frame: MavFrame = "Valid options are local NED, local offset NED, body NED, and body offset NED",
        }
    }

    PositionTargetLocalNed {
        id: 85,
        name: "POSITION_TARGET_LOCAL_NED",
        crc_extra: 140,
        description: "Report the local position setpoint the controller is currently tracking",
        fields: {
            time_boot_ms: u32 = "Milliseconds since system boot",
            x: f32 = "X position in meters, NED",
            y: f32 = "Y position in meters, NED",
            z: f32 = "Z position in meters, NED; down is positive",
            vx: f32 = "X velocity in m/s, NED",
            vy: f32 = "Y velocity in m/s, NED",
            vz: f32 = "Z velocity in m/s, NED",
            afx: f32 = "X acceleration or force in m/s^2, NED",
            afy: f32 = "Y acceleration or force in m/s^2, NED",
            afz: f32 = "Z acceleration or force in m/s^2, NED",
            yaw: f32 = "Yaw setpoint in rad",
            yaw_rate: f32 = "Yaw rate setpoint in rad/s",
            type_mask: u16 = "Bitmap of dimensions the vehicle ignores",
            coordinate_frame: MavFrame = "Valid options are local NED, local offset NED, body NED, and body offset NED",
        }
    }

    SetPositionTargetGlobalInt {
        id: 86,
        name: "SET_POSITION_TARGET_GLOBAL_INT",
        crc_extra: 5,
        description: "Set a desired vehicle position, velocity, and acceleration in a global scaled-integer frame",
        fields: {
            time_boot_ms: u32 = "Milliseconds since system boot; helps detect lag on lossy links",
            lat_int: i32 = "Latitude in degrees scaled by 1e7",
            lon_int: i32 = "Longitude in degrees scaled by 1e7",
            alt: f32 = "Altitude in meters above MSL, or relative to home per frame",
            vx: f32 = "X velocity in m/s, NED",
            vy: f32 = "Y velocity in m/s, NED",
            vz: f32 = "Z velocity in m/s, NED",
            afx: f32 = "X acceleration or force in m/s^2, NED",
            afy: f32 = "Y acceleration or force in m/s^2, NED",
            afz: f32 = "Z acceleration or force in m/s^2, NED",
            yaw: f32 = "Yaw setpoint in rad",
            yaw_rate: f32 = "Yaw rate setpoint in rad/s",
            type_mask: u16 = "Bitmap of dimensions to ignore; bit 1 is lat, bit 11 is yaw, bit 12 is yaw rate",
            target_system: u8 = "System ID",
            target_component: u8 = "Component ID",
            coordinate_frame: MavFrame = "Valid options are global int, global relative alt int, and global terrain alt int",
        }
    }

    PositionTargetGlobalInt {
        id: 87,
        name: "POSITION_TARGET_GLOBAL_INT",
        crc_extra: 150,
        description: "Report the global position setpoint the controller is currently tracking",
        fields: {
            time_boot_ms: u32 = "Milliseconds since system boot; helps detect lag on lossy links",
            lat_int: i32 = "Latitude in degrees scaled by 1e7",
            lon_int: i32 = "Longitude in degrees scaled by 1e7",
            alt: f32 = "Altitude in meters above MSL, or relative to home per frame",
            vx: f32 = "X velocity in m/s, NED",
            vy: f32 = "Y velocity in m/s, NED",
            vz: f32 = "Z velocity in m/s, NED",
            afx: f32 = "X acceleration or force in m/s^2, NED",
            afy: f32 = "Y acceleration or force in m/s^2, NED",
            afz: f32 = "Z acceleration or force in m/s^2, NED",
            yaw: f32 = "Yaw setpoint in rad",
            yaw_rate: f32 = "Yaw rate setpoint in rad/s",
            type_mask: u16 = "Bitmap of dimensions the vehicle ignores",
            coordinate_frame: MavFrame = "Valid options are global int, global relative alt int, and global terrain alt int",
        }
    }

    SetActuatorControlTarget {
        id: 139,
        name: "SET_ACTUATOR_CONTROL_TARGET",
        crc_extra: 168,
        description: "Set vehicle actuator controls directly, normalized -1..1",
        fields: {
            time_usec: u64 = "Timestamp in microseconds since system boot or epoch",
            controls: [f32; 8] = "Actuator controls, mapped by the active mixer group; unused outputs NaN",
            group_mlx: u8 = "Actuator group; the _mlx suffix marks this as multi-instance capable",
            target_system: u8 = "System ID",
            target_component: u8 = "Component ID",
        }
    }

    ActuatorControlTarget {
        id: 140,
        name: "ACTUATOR_CONTROL_TARGET",
        crc_extra: 181,
        description: "Report the actuator controls the vehicle is currently applying",
        fields: {
            time_usec: u64 = "Timestamp in microseconds since system boot or epoch",
            controls: [f32; 8] = "Actuator controls, mapped by the active mixer group; unused outputs NaN",
            group_mlx: u8 = "Actuator group; the _mlx suffix marks this as multi-instance capable",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::messages::{from_payload, Message};

    #[test]
    fn test_encoded_lengths() {
        assert_eq!(SetAttitudeTarget::ENCODED_LEN, 39);
        assert_eq!(AttitudeTarget::ENCODED_LEN, 37);
        assert_eq!(SetPositionTargetLocalNed::ENCODED_LEN, 53);
        assert_eq!(PositionTargetLocalNed::ENCODED_LEN, 51);
        assert_eq!(SetPositionTargetGlobalInt::ENCODED_LEN, 53);
        assert_eq!(PositionTargetGlobalInt::ENCODED_LEN, 51);
        assert_eq!(SetActuatorControlTarget::ENCODED_LEN, 43);
        assert_eq!(ActuatorControlTarget::ENCODED_LEN, 41);
    }

    #[test]
    fn test_attitude_target_quaternion_layout() {
        let mut target = SetAttitudeTarget::default();
        target.time_boot_ms = 100;
        target.q = [1.0, 0.0, 0.0, 0.0];
        target.thrust = 0.5;
        let payload = target.to_payload();
        // q[0] follows time_boot_ms.
        assert_eq!(&payload[4..8], &1.0f32.to_le_bytes());
        let back: SetAttitudeTarget = from_payload(&payload).unwrap();
        assert_eq!(back, target);
    }

    #[test]
    fn test_actuator_controls_nan_round_trip() {
        let mut target = ActuatorControlTarget::default();
        target.controls = [0.1, -0.2, 0.3, -0.4, f32::NAN, 0.0, 0.0, 1.0];
        let back: ActuatorControlTarget = from_payload(&target.to_payload()).unwrap();
        assert!(back.controls[4].is_nan());
        assert_eq!(back.controls[1], -0.2);
    }
}
