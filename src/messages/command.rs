// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Command protocol messages for sending MAV_CMD actions and acknowledgements.

use super::macros::mav_message;
use crate::enums::{MavCmd, MavFrame, MavResult};

mav_message! {
    CommandInt {
        id: 75,
        name: "COMMAND_INT",
        crc_extra: 158,
        description: "Send a command with up to seven parameters, using scaled integers for position values",
        fields: {
            param1: f32 = "Command parameter 1",
            param2: f32 = "Command parameter 2",
            param3: f32 = "Command parameter 3",
            param4: f32 = "Command parameter 4",
            x: i32 = "Command parameter 5, local X in 1e4 meters or latitude in 1e7 degrees",
            y: i32 = "Command parameter 6, local Y in 1e4 meters or longitude in 1e7 degrees",
            z: f32 = "Command parameter 7, local Z or altitude depending on frame",
            command: MavCmd = "The scheduled action",
            target_system: u8 = "System ID",
            target_component: u8 = "Component ID",
            frame: MavFrame = "Coordinate system of the command",
            current: u8 = "Not used",
            autocontinue: u8 = "Not used, set to 0",
        }
    }

    CommandLong {
        id: 76,
        name: "COMMAND_LONG",
        crc_extra: 152,
        description: "Send a command with up to seven float parameters",
        fields: {
            param1: f32 = "Command parameter 1",
            param2: f32 = "Command parameter 2",
            param3: f32 = "Command parameter 3",
            param4: f32 = "Command parameter 4",
            param5: f32 = "Command parameter 5",
            param6: f32 = "Command parameter 6",
            param7: f32 = "Command parameter 7",
            command: MavCmd = "Command ID",
            target_system: u8 = "System which should execute the command",
            target_component: u8 = "Component which should execute the command, 0 for all components",
            confirmation: u8 = "0 for first transmission, incremented for each retransmission",
        }
    }

    CommandAck {
        id: 77,
        name: "COMMAND_ACK",
        crc_extra: 143,
        description: "Report the status of a previously received command",
        fields: {
            command: MavCmd = "Command ID of the acknowledged command",
            result: MavResult = "Execution result",
        }
    }
}
