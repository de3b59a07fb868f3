// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Position estimates, terrain protocol, wind, and home location
//! messages.

use super::macros::mav_message;
use crate::enums::{EstimatorStatusFlags, MavEstimatorType, MavFrame};

mav_message! {
    LocalPositionNed {
        id: 32,
        name: "LOCAL_POSITION_NED",
        crc_extra: 185,
        description: "The filtered local position in the right-handed NED frame",
        fields: {
            time_boot_ms: u32 = "Milliseconds since system boot",
            x: f32 = "X position in meters",
            y: f32 = "Y position in meters",
            z: f32 = "Z position in meters",
            vx: f32 = "X speed in m/s",
            vy: f32 = "Y speed in m/s",
            vz: f32 = "Z speed in m/s",
        }
    }

    GlobalPositionInt {
        id: 33,
        name: "GLOBAL_POSITION_INT",
        crc_extra: 104,
        description: "The filtered global position as scaled integers, since the resolution of float is insufficient",
        fields: {
            time_boot_ms: u32 = "Milliseconds since system boot",
            lat: i32 = "Latitude in degrees * 1e7",
            lon: i32 = "Longitude in degrees * 1e7",
            alt: i32 = "Altitude (AMSL) in millimeters",
            relative_alt: i32 = "Altitude above ground in millimeters",
            vx: i16 = "Ground X speed (latitude, positive north) in cm/s",
            vy: i16 = "Ground Y speed (longitude, positive east) in cm/s",
            vz: i16 = "Ground Z speed (altitude, positive down) in cm/s",
            hdg: u16 = "Vehicle heading in centidegrees, 0..35999, UINT16_MAX if unknown",
        }
    }

    NavControllerOutput {
        id: 62,
        name: "NAV_CONTROLLER_OUTPUT",
        crc_extra: 183,
        description: "The state of the fixed wing navigation and position controller",
        fields: {
            nav_roll: f32 = "Current desired roll in degrees",
            nav_pitch: f32 = "Current desired pitch in degrees",
            alt_error: f32 = "Current altitude error in meters",
            aspd_error: f32 = "Current airspeed error in m/s",
            xtrack_error: f32 = "Current crosstrack error on x-y plane in meters",
            nav_bearing: i16 = "Current desired heading in degrees",
            target_bearing: i16 = "Bearing to current waypoint / target in degrees",
            wp_dist: u16 = "Distance to active waypoint in meters",
        }
    }

    GlobalPositionIntCov {
        id: 63,
        name: "GLOBAL_POSITION_INT_COV",
        crc_extra: 119,
        description: "The filtered global position with covariance; intended for high-rate inter-component state sharing",
        fields: {
            time_usec: u64 = "Timestamp in microseconds since UNIX epoch or system boot",
            lat: i32 = "Latitude in degrees * 1e7",
            lon: i32 = "Longitude in degrees * 1e7",
            alt: i32 = "Altitude (AMSL) in millimeters",
            relative_alt: i32 = "Altitude above ground in millimeters",
            vx: f32 = "Ground X speed in m/s, positive north",
            vy: f32 = "Ground Y speed in m/s, positive east",
            vz: f32 = "Ground Z speed in m/s, positive down",
            covariance: [f32; 36] = "Covariance matrix (lat, lon, alt, vx, vy, vz), row major",
            estimator_type: MavEstimatorType = "Class of the estimator this estimate originated from",
        }
    }

    LocalPositionNedCov {
        id: 64,
        name: "LOCAL_POSITION_NED_COV",
        crc_extra: 191,
        description: "The filtered local position with covariance, right-handed NED frame",
        fields: {
            time_usec: u64 = "Timestamp in microseconds since UNIX epoch or system boot",
            x: f32 = "X position in meters",
            y: f32 = "Y position in meters",
            z: f32 = "Z position in meters",
            vx: f32 = "X speed in m/s",
            vy: f32 = "Y speed in m/s",
            vz: f32 = "Z speed in m/s",
            ax: f32 = "X acceleration in m/s^2",
            ay: f32 = "Y acceleration in m/s^2",
            az: f32 = "Z acceleration in m/s^2",
            covariance: [f32; 45] = "Upper right triangle of the state covariance (x, y, z, vx, vy, vz, ax, ay, az)",
            estimator_type: MavEstimatorType = "Class of the estimator this estimate originated from",
        }
    }

    VfrHud {
        id: 74,
        name: "VFR_HUD",
        crc_extra: 20,
        description: "Metrics typically displayed on a HUD for fixed wing aircraft",
        fields: {
            airspeed: f32 = "Current airspeed in m/s",
            groundspeed: f32 = "Current ground speed in m/s",
            alt: f32 = "Current altitude (MSL) in meters",
            climb: f32 = "Current climb rate in m/s",
            heading: i16 = "Current heading in degrees, 0..360, 0 is north",
            throttle: u16 = "Current throttle setting, 0 to 100 percent",
        }
    }

    TerrainRequest {
        id: 133,
        name: "TERRAIN_REQUEST",
        crc_extra: 6,
        description: "Request terrain data at a 4x7 grid around a location",
        fields: {
            mask: u64 = "Bitmask of requested 4x4 grids, row major, LSB is the first grid",
            lat: i32 = "Latitude of SW corner of first grid, degrees * 1e7",
            lon: i32 = "Longitude of SW corner of first grid, degrees * 1e7",
            grid_spacing: u16 = "Grid spacing in meters",
        }
    }

    TerrainData {
        id: 134,
        name: "TERRAIN_DATA",
        crc_extra: 229,
        description: "Terrain data sent from GCS; a 4x4 grid in response to a TERRAIN_REQUEST",
        fields: {
            lat: i32 = "Latitude of SW corner of first grid, degrees * 1e7",
            lon: i32 = "Longitude of SW corner of first grid, degrees * 1e7",
            grid_spacing: u16 = "Grid spacing in meters",
            data: [i16; 16] = "Terrain data (AMSL) in meters",
            gridbit: u8 = "Bit within the terrain request mask",
        }
    }

    TerrainCheck {
        id: 135,
        name: "TERRAIN_CHECK",
        crc_extra: 203,
        description: "Request the terrain height at a location; the vehicle responds with a TERRAIN_REPORT",
        fields: {
            lat: i32 = "Latitude in degrees * 1e7",
            lon: i32 = "Longitude in degrees * 1e7",
        }
    }

    TerrainReport {
        id: 136,
        name: "TERRAIN_REPORT",
        crc_extra: 1,
        description: "Terrain height at a location and the state of terrain data loading",
        fields: {
            lat: i32 = "Latitude in degrees * 1e7",
            lon: i32 = "Longitude in degrees * 1e7",
            terrain_height: f32 = "Terrain height (MSL) in meters",
            current_height: f32 = "Current vehicle height above terrain in meters",
            spacing: u16 = "Grid spacing in meters, 0 if terrain at this location is unavailable",
            pending: u16 = "Number of 4x4 terrain blocks waiting to be received or read from disk",
            loaded: u16 = "Number of 4x4 terrain blocks in memory",
        }
    }

    Altitude {
        id: 141,
        name: "ALTITUDE",
        crc_extra: 47,
        description: "The current system altitude in several reference frames",
        fields: {
            time_usec: u64 = "Timestamp in microseconds since UNIX epoch or system boot",
            altitude_monotonic: f32 = "Locally monotonic altitude reference, initialized to 0",
            altitude_amsl: f32 = "Altitude above mean sea level in meters",
            altitude_local: f32 = "Local altitude in meters, positive up",
            altitude_relative: f32 = "Altitude above the home position in meters",
            altitude_terrain: f32 = "Altitude above terrain in meters, NaN if unknown",
            bottom_clearance: f32 = "Reading of the bottom-facing distance sensor in meters, NaN if unknown",
        }
    }

    FollowTarget {
        id: 144,
        name: "FOLLOW_TARGET",
        crc_extra: 127,
        description: "Current motion information of a tracked target",
        fields: {
            timestamp: u64 = "Timestamp in milliseconds since system boot",
            custom_state: u64 = "Button states or other custom state information",
            lat: i32 = "Latitude in degrees * 1e7",
            lon: i32 = "Longitude in degrees * 1e7",
            alt: f32 = "Altitude (AMSL) in meters",
            vel: [f32; 3] = "Target velocity (0,0,0) for unknown, m/s NED",
            acc: [f32; 3] = "Linear target acceleration (0,0,0) for unknown, m/s^2 NED",
            attitude_q: [f32; 4] = "Attitude quaternion (1 0 0 0 for unknown)",
            rates: [f32; 3] = "Body rates (0,0,0 for unknown)",
            position_cov: [f32; 3] = "Position covariance ellipsoid",
            est_capabilities: u8 = "Estimation capability bits: pos (0), vel (1), accel (2), att+rates (3)",
        }
    }

    ControlSystemState {
        id: 146,
        name: "CONTROL_SYSTEM_STATE",
        crc_extra: 103,
        description: "The smoothed, monotonic system state used as feedback by the controllers",
        fields: {
            time_usec: u64 = "Timestamp in microseconds since UNIX epoch or system boot",
            x_acc: f32 = "X acceleration in body frame, m/s^2",
            y_acc: f32 = "Y acceleration in body frame, m/s^2",
            z_acc: f32 = "Z acceleration in body frame, m/s^2",
            x_vel: f32 = "X velocity in body frame, m/s",
            y_vel: f32 = "Y velocity in body frame, m/s",
            z_vel: f32 = "Z velocity in body frame, m/s",
            x_pos: f32 = "X position in local frame, meters",
            y_pos: f32 = "Y position in local frame, meters",
            z_pos: f32 = "Z position in local frame, meters",
            airspeed: f32 = "Airspeed in m/s, -1 if unknown",
            vel_variance: [f32; 3] = "Variance of body velocity estimate",
            pos_variance: [f32; 3] = "Variance of position estimate",
            q: [f32; 4] = "Attitude quaternion (w, x, y, z)",
            roll_rate: f32 = "Angular rate in roll axis, rad/s",
            pitch_rate: f32 = "Angular rate in pitch axis, rad/s",
            yaw_rate: f32 = "Angular rate in yaw axis, rad/s",
        }
    }

    LandingTarget {
        id: 149,
        name: "LANDING_TARGET",
        crc_extra: 200,
        description: "The position of a landing target as angular offsets seen by a downward sensor",
        fields: {
            time_usec: u64 = "Timestamp in microseconds since UNIX epoch or system boot",
            angle_x: f32 = "X axis angular offset in radians of the target from the center of the image",
            angle_y: f32 = "Y axis angular offset in radians of the target from the center of the image",
            distance: f32 = "Distance to the target from the vehicle in meters",
            size_x: f32 = "Size in radians of target along x axis",
            size_y: f32 = "Size in radians of target along y axis",
            target_num: u8 = "The ID of the target if multiple targets are present",
            frame: MavFrame = "Coordinate frame used for the angular offsets",
        }
    }

    EstimatorStatus {
        id: 230,
        name: "ESTIMATOR_STATUS",
        crc_extra: 163,
        description: "Estimator status, including innovation test ratios; 0.5 means half the maximum innovation, above 1 the measurement was rejected",
        fields: {
            time_usec: u64 = "Timestamp in microseconds since UNIX epoch or system boot",
            vel_ratio: f32 = "Velocity innovation test ratio",
            pos_horiz_ratio: f32 = "Horizontal position innovation test ratio",
            pos_vert_ratio: f32 = "Vertical position innovation test ratio",
            mag_ratio: f32 = "Magnetometer innovation test ratio",
            hagl_ratio: f32 = "Height above terrain innovation test ratio",
            tas_ratio: f32 = "True airspeed innovation test ratio",
            pos_horiz_accuracy: f32 = "Horizontal position 1-sigma accuracy relative to the EKF local origin, meters",
            pos_vert_accuracy: f32 = "Vertical position 1-sigma accuracy relative to the EKF local origin, meters",
            flags: EstimatorStatusFlags = "Bitmask of solution validity flags",
        }
    }

    WindCov {
        id: 231,
        name: "WIND_COV",
        crc_extra: 105,
        description: "Wind estimate with variance",
        fields: {
            time_usec: u64 = "Timestamp in microseconds since UNIX epoch or system boot",
            wind_x: f32 = "Wind in X (NED) direction, m/s",
            wind_y: f32 = "Wind in Y (NED) direction, m/s",
            wind_z: f32 = "Wind in Z (NED) direction, m/s",
            var_horiz: f32 = "Variability of the wind in XY, m/s",
            var_vert: f32 = "Variability of the wind in Z, m/s",
            wind_alt: f32 = "(AMSL) altitude this measurement was taken at, meters",
            horiz_accuracy: f32 = "Horizontal speed 1-sigma accuracy, m/s",
            vert_accuracy: f32 = "Vertical speed 1-sigma accuracy, m/s",
        }
    }

    HomePosition {
        id: 242,
        name: "HOME_POSITION",
        crc_extra: 104,
        description: "The position the system will return to and land on, with the surface normal and approach vector of the landing",
        fields: {
            latitude: i32 = "Latitude (WGS84) in degrees * 1e7",
            longitude: i32 = "Longitude (WGS84) in degrees * 1e7",
            altitude: i32 = "Altitude (AMSL) in millimeters",
            x: f32 = "Local X position of this position in the local coordinate frame, meters",
            y: f32 = "Local Y position of this position in the local coordinate frame, meters",
            z: f32 = "Local Z position of this position in the local coordinate frame, meters",
            q: [f32; 4] = "Quaternion indicating world-to-surface-normal and heading transformation of the takeoff position",
            approach_x: f32 = "Local X position of the end of the approach vector, meters",
            approach_y: f32 = "Local Y position of the end of the approach vector, meters",
            approach_z: f32 = "Local Z position of the end of the approach vector, meters",
        }
    }

    SetHomePosition {
        id: 243,
        name: "SET_HOME_POSITION",
        crc_extra: 85,
        description: "Set the home position, the position the system will return to and land on",
        fields: {
            latitude: i32 = "Latitude (WGS84) in degrees * 1e7",
            longitude: i32 = "Longitude (WGS84) in degrees * 1e7",
            altitude: i32 = "Altitude (AMSL) in millimeters",
            x: f32 = "Local X position of this position in the local coordinate frame, meters",
            y: f32 = "Local Y position of this position in the local coordinate frame, meters",
            z: f32 = "Local Z position of this position in the local coordinate frame, meters",
            q: [f32; 4] = "Quaternion indicating world-to-surface-normal and heading transformation of the takeoff position",
            approach_x: f32 = "Local X position of the end of the approach vector, meters",
            approach_y: f32 = "Local Y position of the end of the approach vector, meters",
            approach_z: f32 = "Local Z position of the end of the approach vector, meters",
            target_system: u8 = "System ID",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::messages::{from_payload, Message};

    #[test]
    fn test_encoded_lengths() {
        assert_eq!(LocalPositionNed::ENCODED_LEN, 28);
        assert_eq!(GlobalPositionInt::ENCODED_LEN, 28);
        assert_eq!(NavControllerOutput::ENCODED_LEN, 26);
        assert_eq!(GlobalPositionIntCov::ENCODED_LEN, 181);
        assert_eq!(LocalPositionNedCov::ENCODED_LEN, 225);
        assert_eq!(VfrHud::ENCODED_LEN, 20);
        assert_eq!(TerrainRequest::ENCODED_LEN, 18);
        assert_eq!(TerrainData::ENCODED_LEN, 43);
        assert_eq!(TerrainCheck::ENCODED_LEN, 8);
        assert_eq!(TerrainReport::ENCODED_LEN, 22);
        assert_eq!(Altitude::ENCODED_LEN, 32);
        assert_eq!(FollowTarget::ENCODED_LEN, 93);
        assert_eq!(ControlSystemState::ENCODED_LEN, 100);
        assert_eq!(LandingTarget::ENCODED_LEN, 30);
        assert_eq!(EstimatorStatus::ENCODED_LEN, 42);
        assert_eq!(WindCov::ENCODED_LEN, 40);
        assert_eq!(HomePosition::ENCODED_LEN, 52);
        assert_eq!(SetHomePosition::ENCODED_LEN, 53);
    }

    #[test]
    fn test_global_position_round_trip() {
        let position = GlobalPositionInt {
            time_boot_ms: 250_000,
            lat: -353_632_621,
            lon: 1_491_652_374,
            alt: 584_000,
            relative_alt: 30_000,
            vx: 120,
            vy: -45,
            vz: 3,
            hdg: 18_000,
        };
        let back: GlobalPositionInt = from_payload(&position.to_payload()).unwrap();
        assert_eq!(back, position);
    }

    #[test]
    fn test_covariance_messages_carry_large_arrays() {
        let mut cov = LocalPositionNedCov::default();
        cov.covariance[44] = 9.0;
        let payload = cov.to_payload();
        assert_eq!(payload.len(), 225);
        let back: LocalPositionNedCov = from_payload(&payload).unwrap();
        assert_eq!(back.covariance[44], 9.0);
    }

    #[test]
    fn test_set_home_trailing_target() {
        let mut set = SetHomePosition::default();
        set.target_system = 42;
        let payload = set.to_payload();
        assert_eq!(payload[52], 42);
    }
}
