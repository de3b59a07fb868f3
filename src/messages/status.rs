// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Battery, traffic, collision, and named debug value messages.

use super::macros::mav_message;
use crate::enums::{
    AdsbAltitudeType, AdsbEmitterType, AdsbFlags, GpsFixType, MavBatteryFunction, MavBatteryType,
    MavCollisionAction, MavCollisionSrc, MavCollisionThreatLevel, MavLandedState, MavModeFlag,
    MavSeverity,
};
use crate::wire::CharBuf;

mav_message! {
    BatteryStatus {
        id: 147,
        name: "BATTERY_STATUS",
        crc_extra: 154,
        description: "Battery information",
        fields: {
            current_consumed: i32 = "Consumed charge in mAh; -1 if not estimated",
            energy_consumed: i32 = "Consumed energy in hJ; -1 if not estimated",
            temperature: i16 = "Battery temperature in centidegrees Celsius; INT16_MAX if unknown",
            voltages: [u16; 10] = "Cell voltages in mV; cells above the count set to UINT16_MAX",
            current_battery: i16 = "Battery current in 10 mA units; -1 if not measured",
            id: u8 = "Battery ID",
            battery_function: MavBatteryFunction = "Function of the battery",
            mavtype as "type": MavBatteryType = "Battery chemistry",
            battery_remaining: i8 = "Remaining energy in percent; -1 if not estimated",
        }
    }

    HighLatency {
        id: 234,
        name: "HIGH_LATENCY",
        crc_extra: 150,
        description: "Vehicle state condensed for high latency links such as satellite or GPRS",
        fields: {
            custom_mode: u32 = "Bitfield for autopilot specific flags",
            latitude: i32 = "Latitude in degrees scaled by 1e7",
            longitude: i32 = "Longitude in degrees scaled by 1e7",
            roll: i16 = "Roll in centidegrees",
            pitch: i16 = "Pitch in centidegrees",
            heading: u16 = "Heading in centidegrees",
            heading_sp: i16 = "Heading setpoint in centidegrees",
            altitude_amsl: i16 = "Altitude above MSL in meters",
            altitude_sp: i16 = "Altitude setpoint relative to home in meters",
            wp_distance: u16 = "Distance to the target waypoint in meters",
            base_mode: MavModeFlag = "System mode bitmap",
            landed_state: MavLandedState = "Landed state; 0 if unknown",
            throttle: i8 = "Throttle in percent, -100..100",
            airspeed: u8 = "Airspeed in m/s",
            airspeed_sp: u8 = "Airspeed setpoint in m/s",
            groundspeed: u8 = "Groundspeed in m/s",
            climb_rate: i8 = "Climb rate in m/s",
            gps_nsat: u8 = "Number of visible satellites; 255 if unknown",
            gps_fix_type: GpsFixType = "GPS fix quality",
            battery_remaining: u8 = "Remaining battery in percent; 255 if unknown",
            temperature: i8 = "Autopilot temperature in degrees Celsius",
            temperature_air: i8 = "Air temperature from the airspeed sensor in degrees Celsius",
            failsafe: u8 = "Failsafe bitmap; 0 for ok, bit 0 RC, bit 1 batt, bit 2 GPS, bit 3 GCS, bit 4 fence",
            wp_num: u8 = "Current waypoint number",
        }
    }

    AdsbVehicle {
        id: 246,
        name: "ADSB_VEHICLE",
        crc_extra: 184,
        description: "An aircraft reported by an ADSB transponder",
        fields: {
            icao_address as "ICAO_address": u32 = "ICAO address",
            lat: i32 = "Latitude in degrees scaled by 1e7",
            lon: i32 = "Longitude in degrees scaled by 1e7",
            altitude: i32 = "Altitude in millimeters per the altitude_type reference",
            heading: u16 = "Course over ground in centidegrees",
            hor_velocity: u16 = "Horizontal velocity in cm/s",
            ver_velocity: i16 = "Vertical velocity in cm/s; positive is up",
            flags: AdsbFlags = "Bitmap naming which fields of this report are valid",
            squawk: u16 = "Squawk code",
            altitude_type: AdsbAltitudeType = "Reference for the altitude field",
            callsign: CharBuf<9> = "Flight callsign",
            emitter_type: AdsbEmitterType = "ADSB vehicle classification",
            tslc: u8 = "Seconds since last communication",
        }
    }

    Collision {
        id: 247,
        name: "COLLISION",
        crc_extra: 81,
        description: "Information about a potential collision",
        fields: {
            id: u32 = "Unique identifier of the collision object, for example its ICAO address",
            time_to_minimum_delta: f32 = "Estimated seconds until the closest approach",
            altitude_minimum_delta: f32 = "Closest vertical distance in meters",
            horizontal_minimum_delta: f32 = "Closest horizontal distance in meters",
            src: MavCollisionSrc = "Source of the collision object report",
            action: MavCollisionAction = "Action the vehicle is taking in response",
            threat_level: MavCollisionThreatLevel = "How serious the threat is",
        }
    }

    MemoryVect {
        id: 249,
        name: "MEMORY_VECT",
        crc_extra: 204,
        description: "Raw memory contents for debugging",
        fields: {
            address: u16 = "Starting address of the debug variable region",
            ver: u8 = "Version of the type variable; 0 means the message layout may change",
            mavtype as "type": u8 = "Element format; 0 is 16 x int16_t, 1 is 16 x uint16_t, 2 is 32 x int8_t",
            value: [i8; 32] = "Memory contents at the requested address",
        }
    }

    DebugVect {
        id: 250,
        name: "DEBUG_VECT",
        crc_extra: 49,
        description: "A named 3D debug vector",
        fields: {
            time_usec: u64 = "Timestamp in microseconds since epoch or system boot",
            x: f32 = "X value",
            y: f32 = "Y value",
            z: f32 = "Z value",
            name: CharBuf<10> = "Vector name, used to discriminate between plots",
        }
    }

    NamedValueFloat {
        id: 251,
        name: "NAMED_VALUE_FLOAT",
        crc_extra: 170,
        description: "A named float value for debug output; cheaper than adding a dedicated message",
        fields: {
            time_boot_ms: u32 = "Milliseconds since system boot",
            value: f32 = "Floating point value",
            name: CharBuf<10> = "Variable name, used to discriminate between plots",
        }
    }

    NamedValueInt {
        id: 252,
        name: "NAMED_VALUE_INT",
        crc_extra: 44,
        description: "A named integer value for debug output; cheaper than adding a dedicated message",
        fields: {
            time_boot_ms: u32 = "Milliseconds since system boot",
            value: i32 = "Signed integer value",
            name: CharBuf<10> = "Variable name, used to discriminate between plots",
        }
    }

    Statustext {
        id: 253,
        name: "STATUSTEXT",
        crc_extra: 83,
        description: "Status text without null termination; severity follows RFC 5424",
        fields: {
            severity: MavSeverity = "Severity of the status",
            text: CharBuf<50> = "Status text message",
        }
    }

    Debug {
        id: 254,
        name: "DEBUG",
        crc_extra: 46,
        description: "An indexed debug value; allows plotting up to 256 channels without extra messages",
        fields: {
            time_boot_ms: u32 = "Milliseconds since system boot",
            value: f32 = "Debug value",
            ind: u8 = "Index of the debug variable",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::messages::{from_payload, Message};

    #[test]
    fn test_encoded_lengths() {
        assert_eq!(BatteryStatus::ENCODED_LEN, 36);
        assert_eq!(HighLatency::ENCODED_LEN, 40);
        assert_eq!(AdsbVehicle::ENCODED_LEN, 38);
        assert_eq!(Collision::ENCODED_LEN, 19);
        assert_eq!(MemoryVect::ENCODED_LEN, 36);
        assert_eq!(DebugVect::ENCODED_LEN, 30);
        assert_eq!(NamedValueFloat::ENCODED_LEN, 18);
        assert_eq!(NamedValueInt::ENCODED_LEN, 18);
        assert_eq!(Statustext::ENCODED_LEN, 51);
        assert_eq!(Debug::ENCODED_LEN, 9);
    }

    #[test]
    fn test_statustext_no_terminator_required() {
        let mut status = Statustext::default();
        status.severity = MavSeverity::MAV_SEVERITY_CRITICAL;
        status.text = CharBuf::from("Battery failsafe triggered");
        let payload = status.to_payload();
        assert_eq!(payload[0], 2);
        assert_eq!(&payload[1..8], b"Battery");
        let back: Statustext = from_payload(&payload).unwrap();
        assert_eq!(back.text.to_text(), "Battery failsafe triggered");
    }

    #[test]
    fn test_adsb_vehicle_callsign_and_flags() {
        let mut vehicle = AdsbVehicle::default();
        vehicle.icao_address = 0x00AB_CDEF;
        vehicle.callsign = CharBuf::from("QFA42");
        vehicle.flags = AdsbFlags::ADSB_FLAGS_VALID_COORDS;
        vehicle.tslc = 2;
        let back: AdsbVehicle = from_payload(&vehicle.to_payload()).unwrap();
        assert_eq!(back.callsign.to_text(), "QFA42");
        assert_eq!(back.flags, AdsbFlags::ADSB_FLAGS_VALID_COORDS);
    }

    #[test]
    fn test_battery_voltages_unused_cells() {
        let mut battery = BatteryStatus::default();
        battery.voltages = [3812, 3810, 3807, u16::MAX, u16::MAX, u16::MAX, u16::MAX, u16::MAX, u16::MAX, u16::MAX];
        battery.current_battery = 1520;
        battery.battery_remaining = 88;
        let back: BatteryStatus = from_payload(&battery.to_payload()).unwrap();
        assert_eq!(back.voltages[0], 3812);
        assert_eq!(back.voltages[9], u16::MAX);
        assert_eq!(back.battery_remaining, 88);
    }

    #[test]
    fn test_memory_vect_signed_values() {
        let mut vect = MemoryVect::default();
        vect.address = 0x1000;
        vect.value[0] = -128;
        vect.value[31] = 127;
        let back: MemoryVect = from_payload(&vect.to_payload()).unwrap();
        assert_eq!(back.value[0], -128);
        assert_eq!(back.value[31], 127);
    }
}
