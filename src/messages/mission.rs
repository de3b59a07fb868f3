// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Mission upload, download, and safety area protocol messages.

use super::macros::mav_message;
use crate::enums::{MavCmd, MavFrame, MavMissionResult};

mav_message! {
    MissionRequestPartialList {
        id: 37,
        name: "MISSION_REQUEST_PARTIAL_LIST",
        crc_extra: 212,
        description: "Request a partial list of mission items; -1 as end index requests all items from start index",
        fields: {
            start_index: i16 = "Start index, 0 by default",
            end_index: i16 = "End index, -1 for the rest of the list",
            target_system: u8 = "System ID",
            target_component: u8 = "Component ID",
        }
    }

    MissionWritePartialList {
        id: 38,
        name: "MISSION_WRITE_PARTIAL_LIST",
        crc_extra: 9,
        description: "Announce a partial mission rewrite; the list bounds must be inside the existing list",
        fields: {
            start_index: i16 = "Start index; 0 by default and smaller or equal to the largest index of the current onboard list",
            end_index: i16 = "End index, equal or greater than start index",
            target_system: u8 = "System ID",
            target_component: u8 = "Component ID",
        }
    }

    MissionItem {
        id: 39,
        name: "MISSION_ITEM",
        crc_extra: 254,
        description: "Encode a mission item; the global frame uses degrees for x and y and meters for z",
        fields: {
            param1: f32 = "Command parameter 1",
            param2: f32 = "Command parameter 2",
            param3: f32 = "Command parameter 3",
            param4: f32 = "Command parameter 4",
            x: f32 = "Local X or latitude depending on frame",
            y: f32 = "Local Y or longitude depending on frame",
            z: f32 = "Local Z or altitude depending on frame; positive is up",
            seq: u16 = "Sequence number",
            command: MavCmd = "The scheduled action for the waypoint",
            target_system: u8 = "System ID",
            target_component: u8 = "Component ID",
            frame: MavFrame = "Coordinate system of the waypoint",
            current: u8 = "Marks this as the current item, false is 0 and true is 1",
            autocontinue: u8 = "Autocontinue to the next waypoint",
        }
    }

    MissionRequest {
        id: 40,
        name: "MISSION_REQUEST",
        crc_extra: 230,
        description: "Request the mission item with the given sequence number",
        fields: {
            seq: u16 = "Sequence number",
            target_system: u8 = "System ID",
            target_component: u8 = "Component ID",
        }
    }

    MissionSetCurrent {
        id: 41,
        name: "MISSION_SET_CURRENT",
        crc_extra: 28,
        description: "Set the mission item with the given sequence number as the current item",
        fields: {
            seq: u16 = "Sequence number",
            target_system: u8 = "System ID",
            target_component: u8 = "Component ID",
        }
    }

    MissionCurrent {
        id: 42,
        name: "MISSION_CURRENT",
        crc_extra: 28,
        description: "Broadcast the sequence number of the current active mission item",
        fields: {
            seq: u16 = "Sequence number",
        }
    }

    MissionRequestList {
        id: 43,
        name: "MISSION_REQUEST_LIST",
        crc_extra: 132,
        description: "Request the overall list of mission items",
        fields: {
            target_system: u8 = "System ID",
            target_component: u8 = "Component ID",
        }
    }

    MissionCount {
        id: 44,
        name: "MISSION_COUNT",
        crc_extra: 221,
        description: "Announce the number of mission items to initiate a write transaction",
        fields: {
            count: u16 = "Number of mission items in the sequence",
            target_system: u8 = "System ID",
            target_component: u8 = "Component ID",
        }
    }

    MissionClearAll {
        id: 45,
        name: "MISSION_CLEAR_ALL",
        crc_extra: 232,
        description: "Delete all mission items at once",
        fields: {
            target_system: u8 = "System ID",
            target_component: u8 = "Component ID",
        }
    }

    MissionItemReached {
        id: 46,
        name: "MISSION_ITEM_REACHED",
        crc_extra: 11,
        description: "Notify that the vehicle has reached the mission item with the given sequence number",
        fields: {
            seq: u16 = "Sequence number",
        }
    }

    MissionAck {
        id: 47,
        name: "MISSION_ACK",
        crc_extra: 153,
        description: "Acknowledge the handling of a mission message",
        fields: {
            target_system: u8 = "System ID",
            target_component: u8 = "Component ID",
            mavtype as "type": MavMissionResult = "Mission result",
        }
    }

    SafetySetAllowedArea {
        id: 54,
        name: "SAFETY_SET_ALLOWED_AREA",
        crc_extra: 15,
        description: "Set a safety zone as a volume the motion commander and operator stay within",
        fields: {
            p1x: f32 = "X position 1 or latitude",
            p1y: f32 = "Y position 1 or longitude",
            p1z: f32 = "Z position 1 or altitude; positive is down",
            p2x: f32 = "X position 2 or latitude",
            p2y: f32 = "Y position 2 or longitude",
            p2z: f32 = "Z position 2 or altitude; positive is down",
            target_system: u8 = "System ID",
            target_component: u8 = "Component ID",
            frame: MavFrame = "Coordinate frame; global NED or local NED is typical",
        }
    }

    SafetyAllowedArea {
        id: 55,
        name: "SAFETY_ALLOWED_AREA",
        crc_extra: 3,
        description: "Report the safety zone the vehicle currently enforces",
        fields: {
            p1x: f32 = "X position 1 or latitude",
            p1y: f32 = "Y position 1 or longitude",
            p1z: f32 = "Z position 1 or altitude; positive is down",
            p2x: f32 = "X position 2 or latitude",
            p2y: f32 = "Y position 2 or longitude",
            p2z: f32 = "Z position 2 or altitude; positive is down",
            frame: MavFrame = "Coordinate frame; global NED or local NED is typical",
        }
    }

    MissionItemInt {
        id: 73,
        name: "MISSION_ITEM_INT",
        crc_extra: 38,
        description: "Encode a mission item with scaled-integer position for full GPS resolution",
        fields: {
            param1: f32 = "Command parameter 1",
            param2: f32 = "Command parameter 2",
            param3: f32 = "Command parameter 3",
            param4: f32 = "Command parameter 4",
            x: i32 = "Local X in 1e4 meters or latitude in 1e7 degrees",
            y: i32 = "Local Y in 1e4 meters or longitude in 1e7 degrees",
            z: f32 = "Local Z or altitude depending on frame; positive is up",
            seq: u16 = "Waypoint ID, starts at 0 and increases monotonically",
            command: MavCmd = "The scheduled action for the waypoint",
            target_system: u8 = "System ID",
            target_component: u8 = "Component ID",
            frame: MavFrame = "Coordinate system of the waypoint",
            current: u8 = "Marks this as the current item, false is 0 and true is 1",
            autocontinue: u8 = "Autocontinue to the next waypoint",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::messages::{from_payload, Message};
    use crate::enums::MavCmd;

    #[test]
    fn test_encoded_lengths() {
        assert_eq!(MissionRequestPartialList::ENCODED_LEN, 6);
        assert_eq!(MissionWritePartialList::ENCODED_LEN, 6);
        assert_eq!(MissionItem::ENCODED_LEN, 37);
        assert_eq!(MissionRequest::ENCODED_LEN, 4);
        assert_eq!(MissionSetCurrent::ENCODED_LEN, 4);
        assert_eq!(MissionCurrent::ENCODED_LEN, 2);
        assert_eq!(MissionRequestList::ENCODED_LEN, 2);
        assert_eq!(MissionCount::ENCODED_LEN, 4);
        assert_eq!(MissionClearAll::ENCODED_LEN, 2);
        assert_eq!(MissionItemReached::ENCODED_LEN, 2);
        assert_eq!(MissionAck::ENCODED_LEN, 3);
        assert_eq!(SafetySetAllowedArea::ENCODED_LEN, 27);
        assert_eq!(SafetyAllowedArea::ENCODED_LEN, 25);
        assert_eq!(MissionItemInt::ENCODED_LEN, 37);
    }

    #[test]
    fn test_mission_item_command_width() {
        let mut item = MissionItem::default();
        item.seq = 3;
        item.command = MavCmd::MAV_CMD_NAV_WAYPOINT;
        item.frame = MavFrame::MAV_FRAME_GLOBAL_RELATIVE_ALT;
        item.autocontinue = 1;
        let payload = item.to_payload();
        // seq at offset 28, command right after it as a two byte value.
        assert_eq!(&payload[28..30], &[3, 0]);
        assert_eq!(&payload[30..32], &[16, 0]);
        let back: MissionItem = from_payload(&payload).unwrap();
        assert_eq!(back, item);
    }

    #[test]
    fn test_mission_item_int_scaled_coordinates() {
        let mut item = MissionItemInt::default();
        item.x = 473_977_418;
        item.y = 85_455_938;
        item.z = 25.5;
        item.command = MavCmd::MAV_CMD_NAV_TAKEOFF;
        let back: MissionItemInt = from_payload(&item.to_payload()).unwrap();
        assert_eq!(back.x, 473_977_418);
        assert_eq!(back.y, 85_455_938);
        assert_eq!(back.command, MavCmd::MAV_CMD_NAV_TAKEOFF);
    }

    #[test]
    fn test_partial_list_negative_end_index() {
        let req = MissionRequestPartialList {
            start_index: 4,
            end_index: -1,
            target_system: 1,
            target_component: 1,
        };
        let payload = req.to_payload();
        assert_eq!(&payload[2..4], &[0xFF, 0xFF]);
        let back: MissionRequestPartialList = from_payload(&payload).unwrap();
        assert_eq!(back.end_index, -1);
    }
}
