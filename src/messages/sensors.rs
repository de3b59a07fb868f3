// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Inertial, pressure, flow, and rangefinder sensor messages.

use super::macros::mav_message;
use crate::enums::{MavDistanceSensor, MavSensorOrientation};

mav_message! {
    ScaledImu {
        id: 26,
        name: "SCALED_IMU",
        crc_extra: 170,
        description: "The RAW IMU readings for the usual 9DOF sensor setup, scaled to the described units",
        fields: {
            time_boot_ms: u32 = "Milliseconds since system boot",
            xacc: i16 = "X acceleration in mg",
            yacc: i16 = "Y acceleration in mg",
            zacc: i16 = "Z acceleration in mg",
            xgyro: i16 = "Angular speed around X axis in millirad/s",
            ygyro: i16 = "Angular speed around Y axis in millirad/s",
            zgyro: i16 = "Angular speed around Z axis in millirad/s",
            xmag: i16 = "X magnetic field in milli tesla",
            ymag: i16 = "Y magnetic field in milli tesla",
            zmag: i16 = "Z magnetic field in milli tesla",
        }
    }

    RawImu {
        id: 27,
        name: "RAW_IMU",
        crc_extra: 144,
        description: "The RAW IMU readings in raw sensor units; send only for diagnostic or HIL purposes",
        fields: {
            time_usec: u64 = "Timestamp in microseconds since UNIX epoch or system boot",
            xacc: i16 = "X acceleration, raw",
            yacc: i16 = "Y acceleration, raw",
            zacc: i16 = "Z acceleration, raw",
            xgyro: i16 = "Angular speed around X axis, raw",
            ygyro: i16 = "Angular speed around Y axis, raw",
            zgyro: i16 = "Angular speed around Z axis, raw",
            xmag: i16 = "X magnetic field, raw",
            ymag: i16 = "Y magnetic field, raw",
            zmag: i16 = "Z magnetic field, raw",
        }
    }

    RawPressure {
        id: 28,
        name: "RAW_PRESSURE",
        crc_extra: 67,
        description: "The RAW pressure readings for the typical setup of one absolute and one differential pressure sensor, in raw sensor units",
        fields: {
            time_usec: u64 = "Timestamp in microseconds since UNIX epoch or system boot",
            press_abs: i16 = "Absolute pressure, raw",
            press_diff1: i16 = "Differential pressure 1, raw, 0 if nonexistent",
            press_diff2: i16 = "Differential pressure 2, raw, 0 if nonexistent",
            temperature: i16 = "Raw temperature measurement",
        }
    }

    ScaledPressure {
        id: 29,
        name: "SCALED_PRESSURE",
        crc_extra: 115,
        description: "The pressure readings for the typical setup of one absolute and differential pressure sensor",
        fields: {
            time_boot_ms: u32 = "Milliseconds since system boot",
            press_abs: f32 = "Absolute pressure in hectopascal",
            press_diff: f32 = "Differential pressure 1 in hectopascal",
            temperature: i16 = "Temperature in centidegrees celsius",
        }
    }

    OpticalFlow {
        id: 100,
        name: "OPTICAL_FLOW",
        crc_extra: 175,
        description: "Optical flow from a flow sensor, e.g. an optical mouse sensor",
        fields: {
            time_usec: u64 = "Timestamp in microseconds since UNIX epoch or system boot",
            flow_comp_m_x: f32 = "Flow in meters in x-sensor direction, angular speed compensated",
            flow_comp_m_y: f32 = "Flow in meters in y-sensor direction, angular speed compensated",
            ground_distance: f32 = "Ground distance in meters, negative if unknown",
            flow_x: i16 = "Flow in pixels * 10 in x-sensor direction",
            flow_y: i16 = "Flow in pixels * 10 in y-sensor direction",
            sensor_id: u8 = "Sensor ID",
            quality: u8 = "Optical flow quality / confidence, 0 bad, 255 maximum",
        }
    }

    HighresImu {
        id: 105,
        name: "HIGHRES_IMU",
        crc_extra: 93,
        description: "The IMU readings in SI units in NED body frame",
        fields: {
            time_usec: u64 = "Timestamp in microseconds since UNIX epoch or system boot",
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
            diff_pressure: f32 = "Differential pressure in millibar",
            pressure_alt: f32 = "Altitude calculated from pressure",
            temperature: f32 = "Temperature in degrees celsius",
            fields_updated: u16 = "Bitmask for fields that have updated since last message",
        }
    }

    OpticalFlowRad {
        id: 106,
        name: "OPTICAL_FLOW_RAD",
        crc_extra: 138,
        description: "Optical flow in radians from an angular rate flow sensor",
        fields: {
            time_usec: u64 = "Timestamp in microseconds since UNIX epoch or system boot",
            integration_time_us: u32 = "Integration time in microseconds; flow divided by this gives average flow rate",
            integrated_x: f32 = "Flow in radians around X axis",
            integrated_y: f32 = "Flow in radians around Y axis",
            integrated_xgyro: f32 = "RH rotation around X axis in radians",
            integrated_ygyro: f32 = "RH rotation around Y axis in radians",
            integrated_zgyro: f32 = "RH rotation around Z axis in radians",
            time_delta_distance_us: u32 = "Time in microseconds since the distance was sampled",
            distance: f32 = "Distance to center of flow field in meters, -1 if unknown",
            temperature: i16 = "Temperature in centidegrees celsius",
            sensor_id: u8 = "Sensor ID",
            quality: u8 = "Optical flow quality / confidence, 0 no valid flow, 255 maximum",
        }
    }

    ScaledImu2 {
        id: 116,
        name: "SCALED_IMU2",
        crc_extra: 76,
        description: "The RAW IMU readings for the secondary 9DOF sensor setup, scaled to the described units",
        fields: {
            time_boot_ms: u32 = "Milliseconds since system boot",
            xacc: i16 = "X acceleration in mg",
            yacc: i16 = "Y acceleration in mg",
            zacc: i16 = "Z acceleration in mg",
            xgyro: i16 = "Angular speed around X axis in millirad/s",
            ygyro: i16 = "Angular speed around Y axis in millirad/s",
            zgyro: i16 = "Angular speed around Z axis in millirad/s",
            xmag: i16 = "X magnetic field in milli tesla",
            ymag: i16 = "Y magnetic field in milli tesla",
            zmag: i16 = "Z magnetic field in milli tesla",
        }
    }

    ScaledImu3 {
        id: 129,
        name: "SCALED_IMU3",
        crc_extra: 46,
        description: "The RAW IMU readings for the tertiary 9DOF sensor setup, scaled to the described units",
        fields: {
            time_boot_ms: u32 = "Milliseconds since system boot",
            xacc: i16 = "X acceleration in mg",
            yacc: i16 = "Y acceleration in mg",
            zacc: i16 = "Z acceleration in mg",
            xgyro: i16 = "Angular speed around X axis in millirad/s",
            ygyro: i16 = "Angular speed around Y axis in millirad/s",
            zgyro: i16 = "Angular speed around Z axis in millirad/s",
            xmag: i16 = "X magnetic field in milli tesla",
            ymag: i16 = "Y magnetic field in milli tesla",
            zmag: i16 = "Z magnetic field in milli tesla",
        }
    }

    DistanceSensor {
        id: 132,
        name: "DISTANCE_SENSOR",
        crc_extra: 85,
        description: "Distance sensor information for an onboard rangefinder",
        fields: {
            time_boot_ms: u32 = "Milliseconds since system boot",
            min_distance: u16 = "Minimum measurable distance in centimeters",
            max_distance: u16 = "Maximum measurable distance in centimeters",
            current_distance: u16 = "Current reading in centimeters",
            mavtype as "type": MavDistanceSensor = "Type of the distance sensor",
            id: u8 = "Onboard ID of the sensor",
            orientation: MavSensorOrientation = "Direction the sensor faces",
            covariance: u8 = "Measurement covariance in centimeters, 0 if unknown",
        }
    }

    ScaledPressure2 {
        id: 137,
        name: "SCALED_PRESSURE2",
        crc_extra: 195,
        description: "Barometer readings for the second barometer",
        fields: {
            time_boot_ms: u32 = "Milliseconds since system boot",
            press_abs: f32 = "Absolute pressure in hectopascal",
            press_diff: f32 = "Differential pressure 1 in hectopascal",
            temperature: i16 = "Temperature in centidegrees celsius",
        }
    }

    ScaledPressure3 {
        id: 143,
        name: "SCALED_PRESSURE3",
        crc_extra: 131,
        description: "Barometer readings for the third barometer",
        fields: {
            time_boot_ms: u32 = "Milliseconds since system boot",
            press_abs: f32 = "Absolute pressure in hectopascal",
            press_diff: f32 = "Differential pressure 1 in hectopascal",
            temperature: i16 = "Temperature in centidegrees celsius",
        }
    }

    Vibration {
        id: 241,
        name: "VIBRATION",
        crc_extra: 90,
        description: "Vibration levels and accelerometer clipping counts",
        fields: {
            time_usec: u64 = "Timestamp in microseconds since UNIX epoch or system boot",
            vibration_x: f32 = "Vibration level on X axis",
            vibration_y: f32 = "Vibration level on Y axis",
            vibration_z: f32 = "Vibration level on Z axis",
            clipping_0: u32 = "First accelerometer clipping count",
            clipping_1: u32 = "Second accelerometer clipping count",
            clipping_2: u32 = "Third accelerometer clipping count",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::messages::{from_payload, Message};

    #[test]
    fn test_encoded_lengths() {
        assert_eq!(ScaledImu::ENCODED_LEN, 22);
        assert_eq!(RawImu::ENCODED_LEN, 26);
        assert_eq!(RawPressure::ENCODED_LEN, 16);
        assert_eq!(ScaledPressure::ENCODED_LEN, 14);
        assert_eq!(OpticalFlow::ENCODED_LEN, 26);
        assert_eq!(HighresImu::ENCODED_LEN, 62);
        assert_eq!(OpticalFlowRad::ENCODED_LEN, 44);
        assert_eq!(ScaledImu2::ENCODED_LEN, 22);
        assert_eq!(ScaledImu3::ENCODED_LEN, 22);
        assert_eq!(DistanceSensor::ENCODED_LEN, 14);
        assert_eq!(ScaledPressure2::ENCODED_LEN, 14);
        assert_eq!(ScaledPressure3::ENCODED_LEN, 14);
        assert_eq!(Vibration::ENCODED_LEN, 32);
    }

    #[test]
    fn test_scaled_imu_negative_axes() {
        let imu = ScaledImu {
            time_boot_ms: 123,
            xacc: -1000,
            yacc: 0,
            zacc: 981,
            xgyro: -5,
            ygyro: 5,
            zgyro: 0,
            xmag: 120,
            ymag: -260,
            zmag: 400,
        };
        let back: ScaledImu = from_payload(&imu.to_payload()).unwrap();
        assert_eq!(back, imu);
    }

    #[test]
    fn test_distance_sensor_enum_fields() {
        let sensor = DistanceSensor {
            time_boot_ms: 1,
            min_distance: 20,
            max_distance: 700,
            current_distance: 123,
            mavtype: MavDistanceSensor::MAV_DISTANCE_SENSOR_LASER,
            id: 0,
            orientation: MavSensorOrientation::MAV_SENSOR_ROTATION_PITCH_270,
            covariance: 0,
        };
        let payload = sensor.to_payload();
        assert_eq!(payload[10], 0); // laser
        assert_eq!(payload[12], 25); // pitch 270
        let spec_field = DistanceSensor::SPEC.field("orientation").unwrap();
        assert_eq!(spec_field.enum_name, Some("MAV_SENSOR_ORIENTATION"));
    }
}
