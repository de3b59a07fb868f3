// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Attitude estimates and external vision / motion capture inputs.

use super::macros::mav_message;

mav_message! {
    Attitude {
        id: 30,
        name: "ATTITUDE",
        crc_extra: 39,
        description: "The attitude in the aeronautical frame (right-handed, Z-down, X-front, Y-right)",
        fields: {
            time_boot_ms: u32 = "Milliseconds since system boot",
            roll: f32 = "Roll angle in radians, -pi..+pi",
            pitch: f32 = "Pitch angle in radians, -pi..+pi",
            yaw: f32 = "Yaw angle in radians, -pi..+pi",
            rollspeed: f32 = "Roll angular speed in rad/s",
            pitchspeed: f32 = "Pitch angular speed in rad/s",
            yawspeed: f32 = "Yaw angular speed in rad/s",
        }
    }

    AttitudeQuaternion {
        id: 31,
        name: "ATTITUDE_QUATERNION",
        crc_extra: 246,
        description: "The attitude expressed as a quaternion; (1 0 0 0) is the null rotation",
        fields: {
            time_boot_ms: u32 = "Milliseconds since system boot",
            q1: f32 = "Quaternion component 1, w",
            q2: f32 = "Quaternion component 2, x",
            q3: f32 = "Quaternion component 3, y",
            q4: f32 = "Quaternion component 4, z",
            rollspeed: f32 = "Roll angular speed in rad/s",
            pitchspeed: f32 = "Pitch angular speed in rad/s",
            yawspeed: f32 = "Yaw angular speed in rad/s",
        }
    }

    AttitudeQuaternionCov {
        id: 61,
        name: "ATTITUDE_QUATERNION_COV",
        crc_extra: 167,
        description: "The attitude as a quaternion with angular rate covariance",
        fields: {
            time_usec: u64 = "Timestamp in microseconds since UNIX epoch or system boot",
            q: [f32; 4] = "Quaternion components (w, x, y, z); (1 0 0 0) is the null rotation",
            rollspeed: f32 = "Roll angular speed in rad/s",
            pitchspeed: f32 = "Pitch angular speed in rad/s",
            yawspeed: f32 = "Yaw angular speed in rad/s",
            covariance: [f32; 9] = "Attitude covariance matrix, row major",
        }
    }

    LocalPositionNedSystemGlobalOffset {
        id: 89,
        name: "LOCAL_POSITION_NED_SYSTEM_GLOBAL_OFFSET",
        crc_extra: 231,
        description: "Offset between the local NED frame and the global coordinate frame",
        fields: {
            time_boot_ms: u32 = "Milliseconds since system boot",
            x: f32 = "X position offset in meters",
            y: f32 = "Y position offset in meters",
            z: f32 = "Z position offset in meters",
            roll: f32 = "Roll offset in radians",
            pitch: f32 = "Pitch offset in radians",
            yaw: f32 = "Yaw offset in radians",
        }
    }

    GlobalVisionPositionEstimate {
        id: 101,
        name: "GLOBAL_VISION_POSITION_ESTIMATE",
        crc_extra: 102,
        description: "Global position estimate from an external vision system",
        fields: {
            usec: u64 = "Timestamp in microseconds since UNIX epoch or system boot",
            x: f32 = "Global X position in meters",
            y: f32 = "Global Y position in meters",
            z: f32 = "Global Z position in meters",
            roll: f32 = "Roll angle in radians",
            pitch: f32 = "Pitch angle in radians",
            yaw: f32 = "Yaw angle in radians",
        }
    }

    VisionPositionEstimate {
        id: 102,
        name: "VISION_POSITION_ESTIMATE",
        crc_extra: 158,
        description: "Local position estimate from an external vision system",
        fields: {
            usec: u64 = "Timestamp in microseconds since UNIX epoch or system boot",
            x: f32 = "Local X position in meters",
            y: f32 = "Local Y position in meters",
            z: f32 = "Local Z position in meters",
            roll: f32 = "Roll angle in radians",
            pitch: f32 = "Pitch angle in radians",
            yaw: f32 = "Yaw angle in radians",
        }
    }

    VisionSpeedEstimate {
        id: 103,
        name: "VISION_SPEED_ESTIMATE",
        crc_extra: 208,
        description: "Speed estimate from an external vision system",
        fields: {
            usec: u64 = "Timestamp in microseconds since UNIX epoch or system boot",
            x: f32 = "Global X speed in m/s",
            y: f32 = "Global Y speed in m/s",
            z: f32 = "Global Z speed in m/s",
        }
    }

    ViconPositionEstimate {
        id: 104,
        name: "VICON_POSITION_ESTIMATE",
        crc_extra: 56,
        description: "Position estimate from a Vicon motion system source",
        fields: {
            usec: u64 = "Timestamp in microseconds since UNIX epoch or system boot",
            x: f32 = "Global X position in meters",
            y: f32 = "Global Y position in meters",
            z: f32 = "Global Z position in meters",
            roll: f32 = "Roll angle in radians",
            pitch: f32 = "Pitch angle in radians",
            yaw: f32 = "Yaw angle in radians",
        }
    }

    AttPosMocap {
        id: 138,
        name: "ATT_POS_MOCAP",
        crc_extra: 109,
        description: "Motion capture attitude and position",
        fields: {
            time_usec: u64 = "Timestamp in microseconds since UNIX epoch or system boot",
            q: [f32; 4] = "Attitude quaternion (w, x, y, z); (1 0 0 0) is the null rotation",
            x: f32 = "X position in meters, NED",
            y: f32 = "Y position in meters, NED",
            z: f32 = "Z position in meters, NED",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::messages::{from_payload, Message};

    #[test]
    fn test_encoded_lengths() {
        assert_eq!(Attitude::ENCODED_LEN, 28);
        assert_eq!(AttitudeQuaternion::ENCODED_LEN, 32);
        assert_eq!(AttitudeQuaternionCov::ENCODED_LEN, 72);
        assert_eq!(LocalPositionNedSystemGlobalOffset::ENCODED_LEN, 28);
        assert_eq!(GlobalVisionPositionEstimate::ENCODED_LEN, 32);
        assert_eq!(VisionPositionEstimate::ENCODED_LEN, 32);
        assert_eq!(VisionSpeedEstimate::ENCODED_LEN, 20);
        assert_eq!(ViconPositionEstimate::ENCODED_LEN, 32);
        assert_eq!(AttPosMocap::ENCODED_LEN, 36);
    }

    #[test]
    fn test_attitude_round_trip() {
        let attitude = Attitude {
            time_boot_ms: 7000,
            roll: 0.02,
            pitch: -0.15,
            yaw: 3.1,
            rollspeed: 0.0,
            pitchspeed: -0.01,
            yawspeed: 0.25,
        };
        let back: Attitude = from_payload(&attitude.to_payload()).unwrap();
        assert_eq!(back, attitude);
    }

    #[test]
    fn test_quaternion_cov_array_layout() {
        let mut estimate = AttitudeQuaternionCov::default();
        estimate.q = [1.0, 0.0, 0.0, 0.0];
        estimate.covariance[8] = 0.5;
        let payload = estimate.to_payload();
        assert_eq!(&payload[8..12], &1.0f32.to_le_bytes());
        // last covariance entry occupies the final four bytes
        assert_eq!(&payload[68..72], &0.5f32.to_le_bytes());
    }
}
