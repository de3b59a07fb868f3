// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Onboard parameter protocol messages.
//!
//! Parameter IDs are 16-byte char fields; an ID shorter than 16 bytes
//! is NUL terminated, a full-width ID uses all 16 bytes with no
//! terminator.

use super::macros::mav_message;
use crate::enums::MavParamType;
use crate::wire::CharBuf;

mav_message! {
    ParamRequestRead {
        id: 20,
        name: "PARAM_REQUEST_READ",
        crc_extra: 214,
        description: "Request to read the value of an onboard parameter; the receiver responds with a PARAM_VALUE",
        fields: {
            param_index: i16 = "Parameter index, -1 to use the param_id field instead",
            target_system: u8 = "System ID",
            target_component: u8 = "Component ID",
            param_id: CharBuf<16> = "Onboard parameter ID",
        }
    }

    ParamRequestList {
        id: 21,
        name: "PARAM_REQUEST_LIST",
        crc_extra: 159,
        description: "Request all parameters of this component; the receiver emits all parameter values",
        fields: {
            target_system: u8 = "System ID",
            target_component: u8 = "Component ID",
        }
    }

    ParamValue {
        id: 22,
        name: "PARAM_VALUE",
        crc_extra: 220,
        description: "Emit the value of an onboard parameter",
        fields: {
            param_value: f32 = "Onboard parameter value",
            param_count: u16 = "Total number of onboard parameters",
            param_index: u16 = "Index of this parameter",
            param_id: CharBuf<16> = "Onboard parameter ID",
            param_type: MavParamType = "Onboard parameter type",
        }
    }

    ParamSet {
        id: 23,
        name: "PARAM_SET",
        crc_extra: 168,
        description: "Set an onboard parameter; the receiver broadcasts a PARAM_VALUE after the write",
        fields: {
            param_value: f32 = "Onboard parameter value",
            target_system: u8 = "System ID",
            target_component: u8 = "Component ID",
            param_id: CharBuf<16> = "Onboard parameter ID",
            param_type: MavParamType = "Onboard parameter type",
        }
    }

    ParamMapRc {
        id: 50,
        name: "PARAM_MAP_RC",
        crc_extra: 78,
        description: "Bind an RC channel to a parameter; the parameter then changes with the RC channel value",
        fields: {
            param_value0: f32 = "Initial parameter value",
            scale: f32 = "Scale factor applied to the RC deviation",
            param_value_min: f32 = "Minimum parameter value",
            param_value_max: f32 = "Maximum parameter value",
            param_index: i16 = "Parameter index, -1 to use the param_id field instead",
            target_system: u8 = "System ID",
            target_component: u8 = "Component ID",
            param_id: CharBuf<16> = "Onboard parameter ID",
            parameter_rc_channel_index: u8 = "Index of the parameter RC channel, not the RC channel itself",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::messages::{from_payload, Message};

    #[test]
    fn test_encoded_lengths() {
        assert_eq!(ParamRequestRead::ENCODED_LEN, 20);
        assert_eq!(ParamRequestList::ENCODED_LEN, 2);
        assert_eq!(ParamValue::ENCODED_LEN, 25);
        assert_eq!(ParamSet::ENCODED_LEN, 23);
        assert_eq!(ParamMapRc::ENCODED_LEN, 37);
    }

    #[test]
    fn test_param_value_round_trip() {
        let value = ParamValue {
            param_value: 1.5,
            param_count: 300,
            param_index: 12,
            param_id: CharBuf::from("RATE_RLL_P"),
            param_type: MavParamType::MAV_PARAM_TYPE_REAL32,
        };
        let payload = value.to_payload();
        assert_eq!(&payload[0..4], &1.5f32.to_le_bytes());
        let back: ParamValue = from_payload(&payload).unwrap();
        assert_eq!(back, value);
        assert_eq!(back.param_id.to_text(), "RATE_RLL_P");
    }

    #[test]
    fn test_full_width_param_id() {
        // a 16-byte ID occupies the whole field with no terminator
        let set = ParamSet {
            param_value: 0.0,
            target_system: 1,
            target_component: 1,
            param_id: CharBuf::from("ABCDEFGHIJKLMNOP"),
            param_type: MavParamType::MAV_PARAM_TYPE_UINT8,
        };
        let payload = set.to_payload();
        assert_eq!(&payload[6..22], b"ABCDEFGHIJKLMNOP");
        let back: ParamSet = from_payload(&payload).unwrap();
        assert_eq!(back.param_id.to_text(), "ABCDEFGHIJKLMNOP");
    }
}
