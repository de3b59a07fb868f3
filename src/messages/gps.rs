// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! GNSS messages: raw fixes, constellation status, RTK baselines, and
//! correction injection.

use super::macros::mav_message;
use crate::enums::{GpsFixType, GpsInputIgnoreFlags};

mav_message! {
    GpsRawInt {
        id: 24,
        name: "GPS_RAW_INT",
        crc_extra: 24,
        description: "The global position as returned by the GPS, not the filtered system estimate; coordinates are scaled integers",
        fields: {
            time_usec: u64 = "Timestamp in microseconds since UNIX epoch or system boot",
            lat: i32 = "Latitude (WGS84) in degrees * 1e7",
            lon: i32 = "Longitude (WGS84) in degrees * 1e7",
            alt: i32 = "Altitude (AMSL) in millimeters",
            eph: u16 = "GPS HDOP * 100, UINT16_MAX if unknown",
            epv: u16 = "GPS VDOP * 100, UINT16_MAX if unknown",
            vel: u16 = "GPS ground speed in cm/s, UINT16_MAX if unknown",
            cog: u16 = "Course over ground in centidegrees, 0..35999, UINT16_MAX if unknown",
            fix_type: GpsFixType = "GPS fix type",
            satellites_visible: u8 = "Number of satellites visible, 255 if unknown",
        }
    }

    GpsStatus {
        id: 25,
        name: "GPS_STATUS",
        crc_extra: 23,
        description: "Status of the GPS constellation in view; this is not the system position estimate",
        fields: {
            satellites_visible: u8 = "Number of satellites visible",
            satellite_prn: [u8; 20] = "Global satellite ID",
            satellite_used: [u8; 20] = "Used for localization (1), not used (0)",
            satellite_elevation: [u8; 20] = "Elevation of satellite in degrees, 0 is right on top of receiver",
            satellite_azimuth: [u8; 20] = "Direction of satellite, 0 is north, compressed to 0..255",
            satellite_snr: [u8; 20] = "Signal to noise ratio of satellite",
        }
    }

    SetGpsGlobalOrigin {
        id: 48,
        name: "SET_GPS_GLOBAL_ORIGIN",
        crc_extra: 41,
        description: "Set the GPS coordinates of the local origin (0,0,0); used for outdoor positioning without a GPS",
        fields: {
            latitude: i32 = "Latitude (WGS84) in degrees * 1e7",
            longitude: i32 = "Longitude (WGS84) in degrees * 1e7",
            altitude: i32 = "Altitude (AMSL) in millimeters",
            target_system: u8 = "System ID",
        }
    }

    GpsGlobalOrigin {
        id: 49,
        name: "GPS_GLOBAL_ORIGIN",
        crc_extra: 39,
        description: "The GPS coordinates the local origin (0,0,0) maps to",
        fields: {
            latitude: i32 = "Latitude (WGS84) in degrees * 1e7",
            longitude: i32 = "Longitude (WGS84) in degrees * 1e7",
            altitude: i32 = "Altitude (AMSL) in millimeters",
        }
    }

    GpsInjectData {
        id: 123,
        name: "GPS_INJECT_DATA",
        crc_extra: 250,
        description: "Data to inject into the onboard GPS, e.g. RTCM corrections",
        fields: {
            target_system: u8 = "System ID",
            target_component: u8 = "Component ID",
            len: u8 = "Length of the data block",
            data: [u8; 110] = "Raw data to inject; the full field width is always transmitted",
        }
    }

    Gps2Raw {
        id: 124,
        name: "GPS2_RAW",
        crc_extra: 87,
        description: "Second GPS data, mirrors GPS_RAW_INT with differential correction age",
        fields: {
            time_usec: u64 = "Timestamp in microseconds since UNIX epoch or system boot",
            lat: i32 = "Latitude (WGS84) in degrees * 1e7",
            lon: i32 = "Longitude (WGS84) in degrees * 1e7",
            alt: i32 = "Altitude (AMSL) in millimeters",
            dgps_age: u32 = "Age of DGPS info",
            eph: u16 = "GPS HDOP * 100, UINT16_MAX if unknown",
            epv: u16 = "GPS VDOP * 100, UINT16_MAX if unknown",
            vel: u16 = "GPS ground speed in cm/s, UINT16_MAX if unknown",
            cog: u16 = "Course over ground in centidegrees, 0..35999, UINT16_MAX if unknown",
            fix_type: GpsFixType = "GPS fix type",
            satellites_visible: u8 = "Number of satellites visible, 255 if unknown",
            dgps_numch: u8 = "Number of DGPS satellites",
        }
    }

    GpsRtk {
        id: 127,
        name: "GPS_RTK",
        crc_extra: 25,
        description: "RTK GPS data, gives information on the relative baseline calculation",
        fields: {
            time_last_baseline_ms: u32 = "Time since boot of last baseline message received",
            tow: u32 = "GPS time of week of last baseline",
            baseline_a_mm: i32 = "Current baseline in ECEF x or NED north component, mm",
            baseline_b_mm: i32 = "Current baseline in ECEF y or NED east component, mm",
            baseline_c_mm: i32 = "Current baseline in ECEF z or NED down component, mm",
            accuracy: u32 = "Current estimate of baseline accuracy",
            iar_num_hypotheses: i32 = "Current number of integer ambiguity hypotheses",
            wn: u16 = "GPS week number of last baseline",
            rtk_receiver_id: u8 = "Identification of the connected RTK receiver",
            rtk_health: u8 = "GPS-specific health report for RTK data",
            rtk_rate: u8 = "Rate of baseline messages being received, Hz",
            nsats: u8 = "Current number of satellites used for RTK calculation",
            baseline_coords_type: u8 = "Coordinate system of the baseline: ECEF (0) or NED (1)",
        }
    }

    Gps2Rtk {
        id: 128,
        name: "GPS2_RTK",
        crc_extra: 226,
        description: "RTK data of the second GPS, mirrors GPS_RTK",
        fields: {
            time_last_baseline_ms: u32 = "Time since boot of last baseline message received",
            tow: u32 = "GPS time of week of last baseline",
            baseline_a_mm: i32 = "Current baseline in ECEF x or NED north component, mm",
            baseline_b_mm: i32 = "Current baseline in ECEF y or NED east component, mm",
            baseline_c_mm: i32 = "Current baseline in ECEF z or NED down component, mm",
            accuracy: u32 = "Current estimate of baseline accuracy",
            iar_num_hypotheses: i32 = "Current number of integer ambiguity hypotheses",
            wn: u16 = "GPS week number of last baseline",
            rtk_receiver_id: u8 = "Identification of the connected RTK receiver",
            rtk_health: u8 = "GPS-specific health report for RTK data",
            rtk_rate: u8 = "Rate of baseline messages being received, Hz",
            nsats: u8 = "Current number of satellites used for RTK calculation",
            baseline_coords_type: u8 = "Coordinate system of the baseline: ECEF (0) or NED (1)",
        }
    }

    GpsInput {
        id: 232,
        name: "GPS_INPUT",
        crc_extra: 151,
        description: "GPS sensor input message, a raw sensor value to be fed into the autopilot rather than the system position estimate",
        fields: {
            time_usec: u64 = "Timestamp in microseconds since UNIX epoch or system boot",
            time_week_ms: u32 = "GPS time in milliseconds from the start of the GPS week",
            lat: i32 = "Latitude (WGS84) in degrees * 1e7",
            lon: i32 = "Longitude (WGS84) in degrees * 1e7",
            alt: f32 = "Altitude (AMSL) in meters, positive up",
            hdop: f32 = "GPS HDOP horizontal dilution of position",
            vdop: f32 = "GPS VDOP vertical dilution of position",
            vn: f32 = "GPS velocity north in m/s, NED frame",
            ve: f32 = "GPS velocity east in m/s, NED frame",
            vd: f32 = "GPS velocity down in m/s, NED frame",
            speed_accuracy: f32 = "GPS speed accuracy in m/s",
            horiz_accuracy: f32 = "GPS horizontal accuracy in meters",
            vert_accuracy: f32 = "GPS vertical accuracy in meters",
            ignore_flags: GpsInputIgnoreFlags = "Bitmap of fields to ignore; all other fields must be provided",
            time_week: u16 = "GPS week number",
            gps_id: u8 = "ID of the GPS for multiple-GPS inputs",
            fix_type: u8 = "0-1: no fix, 2: 2D fix, 3: 3D fix, 4: 3D with DGPS, 5: 3D with RTK",
            satellites_visible: u8 = "Number of satellites visible",
        }
    }

    GpsRtcmData {
        id: 233,
        name: "GPS_RTCM_DATA",
        crc_extra: 35,
        description: "RTCM message for injecting into the onboard GPS; fragmented when exceeding the data field",
        fields: {
            flags: u8 = "LSB: fragmentation flag, bits 1-2: fragment ID, bits 3-7: sequence ID",
            len: u8 = "Data length",
            data: [u8; 180] = "RTCM data, fragmented when flagged; the full field width is always transmitted",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::messages::{from_payload, Message};

    #[test]
    fn test_encoded_lengths() {
        assert_eq!(GpsRawInt::ENCODED_LEN, 30);
        assert_eq!(GpsStatus::ENCODED_LEN, 101);
        assert_eq!(SetGpsGlobalOrigin::ENCODED_LEN, 13);
        assert_eq!(GpsGlobalOrigin::ENCODED_LEN, 12);
        assert_eq!(GpsInjectData::ENCODED_LEN, 113);
        assert_eq!(Gps2Raw::ENCODED_LEN, 35);
        assert_eq!(GpsRtk::ENCODED_LEN, 35);
        assert_eq!(Gps2Rtk::ENCODED_LEN, 35);
        assert_eq!(GpsInput::ENCODED_LEN, 63);
        assert_eq!(GpsRtcmData::ENCODED_LEN, 182);
    }

    #[test]
    fn test_gps_raw_int_round_trip() {
        let fix = GpsRawInt {
            time_usec: 1_700_000_000_000_000,
            lat: 473_977_420,
            lon: 85_455_940,
            alt: 488_000,
            eph: 121,
            epv: 189,
            vel: 103,
            cog: 27_500,
            fix_type: GpsFixType::GPS_FIX_TYPE_3D_FIX,
            satellites_visible: 11,
        };
        let payload = fix.to_payload();
        assert_eq!(payload.len(), 30);
        // negative latitudes keep their sign through the scaled integer
        let southern = GpsRawInt {
            lat: -473_977_420,
            ..fix.clone()
        };
        let back: GpsRawInt = from_payload(&southern.to_payload()).unwrap();
        assert_eq!(back.lat, -473_977_420);
        assert_eq!(back.fix_type, GpsFixType::GPS_FIX_TYPE_3D_FIX);
    }

    #[test]
    fn test_gps_status_array_order() {
        let mut status = GpsStatus::default();
        status.satellites_visible = 3;
        status.satellite_prn = {
            let mut prn = [0u8; 20];
            prn[0] = 5;
            prn[1] = 12;
            prn[2] = 19;
            prn
        };
        status.satellite_snr[2] = 40;
        let payload = status.to_payload();
        assert_eq!(payload[0], 3);
        assert_eq!(&payload[1..4], &[5, 12, 19]);
        // snr block sits after prn, used, elevation, and azimuth blocks
        assert_eq!(payload[1 + 80 + 2], 40);
    }
}
