// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Hardware-in-the-loop simulation messages.

use super::macros::mav_message;
use crate::enums::{GpsFixType, MavMode};

mav_message! {
    HilState {
        id: 90,
        name: "HIL_STATE",
        crc_extra: 183,
        description: "Sent from simulation to autopilot; HIL_STATE_QUATERNION supersedes this packed representation",
        fields: {
            time_usec: u64 = "Timestamp in microseconds since epoch or system boot",
            roll: f32 = "Roll angle in rad",
            pitch: f32 = "Pitch angle in rad",
            yaw: f32 = "Yaw angle in rad",
            rollspeed: f32 = "Body frame roll angular speed in rad/s",
            pitchspeed: f32 = "Body frame pitch angular speed in rad/s",
            yawspeed: f32 = "Body frame yaw angular speed in rad/s",
            lat: i32 = "Latitude in degrees scaled by 1e7",
            lon: i32 = "Longitude in degrees scaled by 1e7",
            alt: i32 = "Altitude in millimeters",
            vx: i16 = "Ground X speed toward latitude, in cm/s",
            vy: i16 = "Ground Y speed toward longitude, in cm/s",
            vz: i16 = "Ground Z speed downward, in cm/s",
            xacc: i16 = "X acceleration in mg",
            yacc: i16 = "Y acceleration in mg",
            zacc: i16 = "Z acceleration in mg",
        }
    }

    HilControls {
        id: 91,
        name: "HIL_CONTROLS",
        crc_extra: 63,
        description: "Sent from autopilot to simulation; hardware-in-the-loop control outputs",
        fields: {
            time_usec: u64 = "Timestamp in microseconds since epoch or system boot",
            roll_ailerons: f32 = "Control output -1..1",
            pitch_elevator: f32 = "Control output -1..1",
            yaw_rudder: f32 = "Control output -1..1",
            throttle: f32 = "Throttle 0..1",
            aux1: f32 = "Aux 1, -1..1",
            aux2: f32 = "Aux 2, -1..1",
            aux3: f32 = "Aux 3, -1..1",
            aux4: f32 = "Aux 4, -1..1",
            mode: MavMode = "System mode",
            nav_mode: u8 = "Navigation mode, autopilot specific",
        }
    }

    HilRcInputsRaw {
        id: 92,
        name: "HIL_RC_INPUTS_RAW",
        crc_extra: 54,
        description: "Sent from simulation to autopilot; raw RC channels as PPM microsecond values",
        fields: {
            time_usec: u64 = "Timestamp in microseconds since epoch or system boot",
            chan1_raw: u16 = "RC channel 1 value in microseconds",
            chan2_raw: u16 = "RC channel 2 value in microseconds",
            chan3_raw: u16 = "RC channel 3 value in microseconds",
            chan4_raw: u16 = "RC channel 4 value in microseconds",
            chan5_raw: u16 = "RC channel 5 value in microseconds",
            chan6_raw: u16 = "RC channel 6 value in microseconds",
            chan7_raw: u16 = "RC channel 7 value in microseconds",
            chan8_raw: u16 = "RC channel 8 value in microseconds",
            chan9_raw: u16 = "RC channel 9 value in microseconds",
            chan10_raw: u16 = "RC channel 10 value in microseconds",
            chan11_raw: u16 = "RC channel 11 value in microseconds",
            chan12_raw: u16 = "RC channel 12 value in microseconds",
            rssi: u8 = "Receive signal strength, 0..254, 255 invalid or unknown",
        }
    }

    HilActuatorControls {
        id: 93,
        name: "HIL_ACTUATOR_CONTROLS",
        crc_extra: 47,
        description: "Sent from autopilot to simulation; replaces HIL_CONTROLS with a full actuator vector",
        fields: {
            time_usec: u64 = "Timestamp in microseconds since epoch or system boot",
            flags: u64 = "Flags bitmap; bit 0 indicates the vehicle is in lockstep simulation",
            controls: [f32; 16] = "Control outputs -1..1, mapped by the active mixer group",
            mode: MavMode = "System mode; includes the armed state",
        }
    }

    HilSensor {
        id: 107,
        name: "HIL_SENSOR",
        crc_extra: 108,
        description: "Simulated IMU, magnetometer, and barometer readings in NED body frame",
        fields: {
            time_usec: u64 = "Timestamp in microseconds since epoch or system boot",
            xacc: f32 = "X acceleration in m/s^2",
            yacc: f32 = "Y acceleration in m/s^2",
            zacc: f32 = "Z acceleration in m/s^2",
            xgyro: f32 = "Angular speed around X axis in rad/s",
            ygyro: f32 = "Angular speed around Y axis in rad/s",
            zgyro: f32 = "Angular speed around Z axis in rad/s",
            xmag: f32 = "X magnetic field in gauss",
            ymag: f32 = "Y magnetic field in gauss",
            zmag: f32 = "Z magnetic field in gauss",
            abs_pressure: f32 = "Absolute pressure in millibar",
            diff_pressure: f32 = "Differential pressure for airspeed, in millibar",
            pressure_alt: f32 = "Altitude calculated from pressure",
            temperature: f32 = "Temperature in degrees Celsius",
            fields_updated: u32 = "Bitmap of updated fields; bit 0 is xacc, bit 12 is temperature",
        }
    }

    SimState {
        id: 108,
        name: "SIM_STATE",
        crc_extra: 32,
        description: "Status of the simulation environment itself",
        fields: {
            q1: f32 = "True attitude quaternion component w",
            q2: f32 = "True attitude quaternion component x",
            q3: f32 = "True attitude quaternion component y",
            q4: f32 = "True attitude quaternion component z",
            roll: f32 = "Attitude roll expressed as Euler angle; use only for human-readable output",
            pitch: f32 = "Attitude pitch expressed as Euler angle",
            yaw: f32 = "Attitude yaw expressed as Euler angle",
            xacc: f32 = "X acceleration in m/s^2",
            yacc: f32 = "Y acceleration in m/s^2",
            zacc: f32 = "Z acceleration in m/s^2",
            xgyro: f32 = "Angular speed around X axis in rad/s",
            ygyro: f32 = "Angular speed around Y axis in rad/s",
            zgyro: f32 = "Angular speed around Z axis in rad/s",
            lat: f32 = "Latitude in degrees",
            lon: f32 = "Longitude in degrees",
            alt: f32 = "Altitude in meters",
            std_dev_horz: f32 = "Horizontal position standard deviation",
            std_dev_vert: f32 = "Vertical position standard deviation",
            vn: f32 = "True north velocity in m/s",
            ve: f32 = "True east velocity in m/s",
            vd: f32 = "True down velocity in m/s",
        }
    }

    HilGps {
        id: 113,
        name: "HIL_GPS",
        crc_extra: 124,
        description: "Simulated GPS position estimate; mirrors the global position frame of GPS_RAW_INT",
        fields: {
            time_usec: u64 = "Timestamp in microseconds since epoch or system boot",
            lat: i32 = "Latitude in degrees scaled by 1e7",
            lon: i32 = "Longitude in degrees scaled by 1e7",
            alt: i32 = "Altitude above MSL in millimeters; positive is up",
            eph: u16 = "GPS HDOP scaled by 100; UINT16_MAX if unknown",
            epv: u16 = "GPS VDOP scaled by 100; UINT16_MAX if unknown",
            vel: u16 = "GPS ground speed in cm/s; UINT16_MAX if unknown",
            vn: i16 = "GPS north velocity in cm/s",
            ve: i16 = "GPS east velocity in cm/s",
            vd: i16 = "GPS down velocity in cm/s",
            cog: u16 = "Course over ground in centidegrees, 0..35999; UINT16_MAX if unknown",
            fix_type: GpsFixType = "Fix quality; 0 or 1 none, 2 is 2D, 3 is 3D",
            satellites_visible: u8 = "Number of visible satellites; 255 if unknown",
        }
    }

    HilOpticalFlow {
        id: 114,
        name: "HIL_OPTICAL_FLOW",
        crc_extra: 237,
        description: "Simulated optical flow in angular terms from a flow sensor such as PX4FLOW",
        fields: {
            time_usec: u64 = "Timestamp in microseconds since epoch or system boot",
            integration_time_us: u32 = "Integration time in microseconds; flow divided by it gives rad/s",
            integrated_x: f32 = "Flow in radians around X axis",
            integrated_y: f32 = "Flow in radians around Y axis",
            integrated_xgyro: f32 = "RH rotation around X axis in rad over the integration time",
            integrated_ygyro: f32 = "RH rotation around Y axis in rad over the integration time",
            integrated_zgyro: f32 = "RH rotation around Z axis in rad over the integration time",
            time_delta_distance_us: u32 = "Age of the distance measurement in microseconds",
            distance: f32 = "Distance to ground in meters; -1 if unknown",
            temperature: i16 = "Temperature in centidegrees Celsius",
            sensor_id: u8 = "Sensor ID",
            quality: u8 = "Optical flow quality; 0 is bad, 255 is best",
        }
    }

    HilStateQuaternion {
        id: 115,
        name: "HIL_STATE_QUATERNION",
        crc_extra: 4,
        description: "Sent from simulation to autopilot; quaternion attitude without packing limits",
        fields: {
            time_usec: u64 = "Timestamp in microseconds since epoch or system boot",
            attitude_quaternion: [f32; 4] = "Vehicle attitude quaternion w, x, y, z with 1 0 0 0 as null rotation",
            rollspeed: f32 = "Body frame roll angular speed in rad/s",
            pitchspeed: f32 = "Body frame pitch angular speed in rad/s",
            yawspeed: f32 = "Body frame yaw angular speed in rad/s",
            lat: i32 = "Latitude in degrees scaled by 1e7",
            lon: i32 = "Longitude in degrees scaled by 1e7",
            alt: i32 = "Altitude in millimeters",
            vx: i16 = "Ground X speed toward latitude, in cm/s",
            vy: i16 = "Ground Y speed toward longitude, in cm/s",
            vz: i16 = "Ground Z speed downward, in cm/s",
            ind_airspeed: u16 = "Indicated airspeed in cm/s",
            true_airspeed: u16 = "True airspeed in cm/s",
            xacc: i16 = "X acceleration in mg",
            yacc: i16 = "Y acceleration in mg",
            zacc: i16 = "Z acceleration in mg",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::messages::{from_payload, Message};

    #[test]
    fn test_encoded_lengths() {
        assert_eq!(HilState::ENCODED_LEN, 56);
        assert_eq!(HilControls::ENCODED_LEN, 42);
        assert_eq!(HilRcInputsRaw::ENCODED_LEN, 33);
        assert_eq!(HilActuatorControls::ENCODED_LEN, 81);
        assert_eq!(HilSensor::ENCODED_LEN, 64);
        assert_eq!(SimState::ENCODED_LEN, 84);
        assert_eq!(HilGps::ENCODED_LEN, 36);
        assert_eq!(HilOpticalFlow::ENCODED_LEN, 44);
        assert_eq!(HilStateQuaternion::ENCODED_LEN, 64);
    }

    #[test]
    fn test_actuator_controls_sixteen_wide() {
        let mut hil = HilActuatorControls::default();
        hil.flags = 1;
        hil.controls[15] = -0.75;
        let payload = hil.to_payload();
        assert_eq!(&payload[8..16], &1u64.to_le_bytes());
        assert_eq!(&payload[76..80], &(-0.75f32).to_le_bytes());
        let back: HilActuatorControls = from_payload(&payload).unwrap();
        assert_eq!(back, hil);
    }

    #[test]
    fn test_hil_gps_round_trip() {
        let mut gps = HilGps::default();
        gps.time_usec = 987_654_321;
        gps.lat = -353_632_621;
        gps.lon = 1_491_652_374;
        gps.vd = -120;
        gps.fix_type = GpsFixType::GPS_FIX_TYPE_3D_FIX;
        gps.satellites_visible = 11;
        let back: HilGps = from_payload(&gps.to_payload()).unwrap();
        assert_eq!(back, gps);
    }
}
