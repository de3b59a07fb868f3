// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! The `MAV_CMD` command catalog.
//!
//! Commands ride inside COMMAND_LONG, COMMAND_INT, MISSION_ITEM, and
//! MISSION_ITEM_INT as a 16-bit value. Per-parameter documentation is
//! kept in the enum metadata for the entries that define one.

use super::macros::mav_enum;

mav_enum! {
    MavCmd("MAV_CMD", u16, "Commands to be executed by the MAV, carried as mission items or in command messages") {
        MAV_CMD_NAV_WAYPOINT = 16, "Navigate to waypoint",
            params ["Hold time in decimal seconds (ignored by fixed wing)", "Acceptance radius in meters", "Pass-through radius in meters, 0 to fly through", "Desired yaw angle at waypoint", "Latitude", "Longitude", "Altitude"];
        MAV_CMD_NAV_LOITER_UNLIM = 17, "Loiter around this waypoint an unlimited amount of time",
            params ["Empty", "Empty", "Radius around waypoint in meters, counter-clockwise if negative", "Desired yaw angle", "Latitude", "Longitude", "Altitude"];
        MAV_CMD_NAV_LOITER_TURNS = 18, "Loiter around this waypoint for X turns",
            params ["Turns", "Empty", "Radius around waypoint in meters, counter-clockwise if negative", "Exit location behavior", "Latitude", "Longitude", "Altitude"];
        MAV_CMD_NAV_LOITER_TIME = 19, "Loiter around this waypoint for X seconds",
            params ["Seconds in decimal", "Empty", "Radius around waypoint in meters, counter-clockwise if negative", "Exit location behavior", "Latitude", "Longitude", "Altitude"];
        MAV_CMD_NAV_RETURN_TO_LAUNCH = 20, "Return to launch location",
            params ["Empty", "Empty", "Empty", "Empty", "Empty", "Empty", "Empty"];
        MAV_CMD_NAV_LAND = 21, "Land at location",
            params ["Abort altitude in meters, 0 uses the system default", "Empty", "Empty", "Desired yaw angle", "Latitude", "Longitude", "Altitude"];
        MAV_CMD_NAV_TAKEOFF = 22, "Takeoff from ground / hand",
            params ["Minimum pitch (if airspeed sensor present), desired pitch without sensor", "Empty", "Empty", "Yaw angle (if magnetometer present), ignored without magnetometer", "Latitude", "Longitude", "Altitude"];
        MAV_CMD_NAV_LAND_LOCAL = 23, "Land at local position (local frame only)";
        MAV_CMD_NAV_TAKEOFF_LOCAL = 24, "Takeoff from local position (local frame only)";
        MAV_CMD_NAV_FOLLOW = 25, "Vehicle following, i.e. this waypoint represents the position of a moving vehicle";
        MAV_CMD_NAV_CONTINUE_AND_CHANGE_ALT = 30, "Continue on the current course and climb/descend to specified altitude",
            params ["Climb or descend (0 = neutral, 1 = climbing, 2 = descending)", "Empty", "Empty", "Empty", "Empty", "Empty", "Desired altitude in meters"];
        MAV_CMD_NAV_LOITER_TO_ALT = 31, "Begin loitering at the specified latitude/longitude and climb to the specified altitude";
        MAV_CMD_DO_FOLLOW = 32, "Begin following a target";
        MAV_CMD_DO_FOLLOW_REPOSITION = 33, "Reposition the MAV after a follow target command has been sent";
        MAV_CMD_NAV_ROI = 80, "Set the region of interest (ROI) for a sensor set or the vehicle itself",
            params ["Region of interest mode", "Waypoint index / target ID", "ROI index", "Empty", "x / latitude", "y / longitude", "z / altitude"];
        MAV_CMD_NAV_PATHPLANNING = 81, "Control autonomous path planning on the MAV";
        MAV_CMD_NAV_SPLINE_WAYPOINT = 82, "Navigate to waypoint using a spline path",
            params ["Hold time in decimal seconds (ignored by fixed wing)", "Empty", "Empty", "Empty", "Latitude / x of goal", "Longitude / y of goal", "Altitude / z of goal"];
        MAV_CMD_NAV_VTOL_TAKEOFF = 84, "Takeoff from ground using VTOL mode";
        MAV_CMD_NAV_VTOL_LAND = 85, "Land using VTOL mode";
        MAV_CMD_NAV_GUIDED_ENABLE = 92, "Hand control over to an external controller",
            params ["On / off (> 0.5f on)", "Empty", "Empty", "Empty", "Empty", "Empty", "Empty"];
        MAV_CMD_NAV_DELAY = 93, "Delay the next navigation command a number of seconds or until a specified time",
            params ["Delay in seconds (decimal, -1 to enable time-of-day fields)", "Hour (24h format, UTC, -1 to ignore)", "Minute (24h format, UTC, -1 to ignore)", "Second (24h format, UTC)", "Empty", "Empty", "Empty"];
        MAV_CMD_NAV_LAST = 95, "Marker to indicate the end of the NAV/ACTION command block";
        MAV_CMD_CONDITION_DELAY = 112, "Delay mission state machine",
            params ["Delay in seconds (decimal)", "Empty", "Empty", "Empty", "Empty", "Empty", "Empty"];
        MAV_CMD_CONDITION_CHANGE_ALT = 113, "Ascend/descend at rate to the specified altitude",
            params ["Descent / ascend rate (m/s)", "Empty", "Empty", "Empty", "Empty", "Empty", "Finish altitude"];
        MAV_CMD_CONDITION_DISTANCE = 114, "Delay mission state machine until within desired distance of next NAV point",
            params ["Distance in meters", "Empty", "Empty", "Empty", "Empty", "Empty", "Empty"];
        MAV_CMD_CONDITION_YAW = 115, "Reach a certain target heading",
            params ["Target angle in degrees, 0 is north", "Speed during yaw change (deg/s)", "Direction: -1 counter-clockwise, 1 clockwise", "Relative offset (1) or absolute angle (0)", "Empty", "Empty", "Empty"];
        MAV_CMD_CONDITION_LAST = 159, "Marker to indicate the end of the CONDITION command block";
        MAV_CMD_DO_SET_MODE = 176, "Set system mode",
            params ["Mode, as defined by the MAV_MODE enum", "Custom mode (autopilot-specific)", "Custom sub mode (autopilot-specific)", "Empty", "Empty", "Empty", "Empty"];
        MAV_CMD_DO_JUMP = 177, "Jump to the desired command in the mission list, repeated as many times as specified",
            params ["Sequence number", "Repeat count", "Empty", "Empty", "Empty", "Empty", "Empty"];
        MAV_CMD_DO_CHANGE_SPEED = 178, "Change speed and/or throttle set points",
            params ["Speed type (0 = airspeed, 1 = ground speed)", "Speed (m/s, -1 indicates no change)", "Throttle as percentage (-1 indicates no change)", "Absolute (0) or relative (1)", "Empty", "Empty", "Empty"];
        MAV_CMD_DO_SET_HOME = 179, "Change the home location to the current location or a specified location",
            params ["Use current location (1) or the specified location (0)", "Empty", "Empty", "Empty", "Latitude", "Longitude", "Altitude"];
        MAV_CMD_DO_SET_PARAMETER = 180, "Set a system parameter by index",
            params ["Parameter number", "Parameter value", "Empty", "Empty", "Empty", "Empty", "Empty"];
        MAV_CMD_DO_SET_RELAY = 181, "Set a relay to a condition",
            params ["Relay number", "Setting (1 = on, 0 = off)", "Empty", "Empty", "Empty", "Empty", "Empty"];
        MAV_CMD_DO_REPEAT_RELAY = 182, "Cycle a relay on and off for a desired number of cycles with a desired period";
        MAV_CMD_DO_SET_SERVO = 183, "Set a servo to a desired PWM value",
            params ["Servo number", "PWM in microseconds, typically 1000 to 2000", "Empty", "Empty", "Empty", "Empty", "Empty"];
        MAV_CMD_DO_REPEAT_SERVO = 184, "Cycle a servo between its nominal setting and a desired PWM for a number of cycles with a period";
        MAV_CMD_DO_FLIGHTTERMINATION = 185, "Terminate flight immediately",
            params ["Flight termination activated if > 0.5", "Empty", "Empty", "Empty", "Empty", "Empty", "Empty"];
        MAV_CMD_DO_CHANGE_ALTITUDE = 186, "Change altitude set point",
            params ["Altitude in meters", "Frame of the altitude", "Empty", "Empty", "Empty", "Empty", "Empty"];
        MAV_CMD_DO_LAND_START = 189, "Mission item marking the start of a landable sequence",
            params ["Empty", "Empty", "Empty", "Empty", "Latitude", "Longitude", "Empty"];
        MAV_CMD_DO_RALLY_LAND = 190, "Mission command to perform a landing from a rally point";
        MAV_CMD_DO_GO_AROUND = 191, "Safely abort an autonomous landing",
            params ["Altitude in meters", "Empty", "Empty", "Empty", "Empty", "Empty", "Empty"];
        MAV_CMD_DO_REPOSITION = 192, "Reposition the vehicle to a specific WGS84 global position";
        MAV_CMD_DO_PAUSE_CONTINUE = 193, "Pause (hold position) or continue the current mission";
        MAV_CMD_DO_SET_REVERSE = 194, "Set moving direction to forward or reverse",
            params ["Direction (0 = forward, 1 = reverse)", "Empty", "Empty", "Empty", "Empty", "Empty", "Empty"];
        MAV_CMD_DO_CONTROL_VIDEO = 200, "Control onboard camera system";
        MAV_CMD_DO_SET_ROI = 201, "Set the region of interest (ROI) for a sensor set or the vehicle itself",
            params ["Region of interest mode", "Waypoint index / target ID", "ROI index", "Empty", "x / latitude", "y / longitude", "z / altitude"];
        MAV_CMD_DO_DIGICAM_CONFIGURE = 202, "Configure an onboard camera controller system",
            params ["Mode (1 = ProgramAuto, 2 = Aperture Priority, 3 = Shutter Priority)", "Shutter speed divisor (e.g. 60 is 1/60s)", "Aperture f-stop", "ISO (e.g. 80, 100, 200)", "Exposure type", "Command identity", "Engine cut-off time in tenths of a second, 0 ignored"];
        MAV_CMD_DO_DIGICAM_CONTROL = 203, "Control an onboard camera controller system",
            params ["Session control (on/off or show/hide lens)", "Zoom's absolute position", "Zooming step value to offset zoom from the current position", "Focus locking, unlocking or re-locking", "Shooting command", "Command identity", "Empty"];
        MAV_CMD_DO_MOUNT_CONFIGURE = 204, "Configure a camera or antenna mount",
            params ["Mount operation mode, see MAV_MOUNT_MODE", "Stabilize roll (1 = yes, 0 = no)", "Stabilize pitch (1 = yes, 0 = no)", "Stabilize yaw (1 = yes, 0 = no)", "Empty", "Empty", "Empty"];
        MAV_CMD_DO_MOUNT_CONTROL = 205, "Control a camera or antenna mount",
            params ["Pitch dependent on mount mode (degrees or target)", "Roll dependent on mount mode (degrees or target)", "Yaw dependent on mount mode (degrees or target)", "Altitude in meters", "Latitude", "Longitude", "Mount operation mode, see MAV_MOUNT_MODE"];
        MAV_CMD_DO_SET_CAM_TRIGG_DIST = 206, "Set camera trigger distance, also triggers the camera once",
            params ["Camera trigger distance in meters, 0 to stop triggering", "Empty", "Empty", "Empty", "Empty", "Empty", "Empty"];
        MAV_CMD_DO_FENCE_ENABLE = 207, "Enable the geofence",
            params ["Enable (0 = disable, 1 = enable, 2 = disable floor only)", "Empty", "Empty", "Empty", "Empty", "Empty", "Empty"];
        MAV_CMD_DO_PARACHUTE = 208, "Trigger the parachute",
            params ["Action (0 = disable, 1 = enable, 2 = release)", "Empty", "Empty", "Empty", "Empty", "Empty", "Empty"];
        MAV_CMD_DO_MOTOR_TEST = 209, "Perform a motor test",
            params ["Motor instance number (0-based)", "Throttle type (0 = percent, 1 = PWM, 2 = pilot)", "Throttle value", "Timeout in seconds", "Empty", "Empty", "Empty"];
        MAV_CMD_DO_INVERTED_FLIGHT = 210, "Change to or from inverted flight",
            params ["Inverted (0 = normal, 1 = inverted)", "Empty", "Empty", "Empty", "Empty", "Empty", "Empty"];
        MAV_CMD_DO_GRIPPER = 211, "Operate an EPM gripper",
            params ["Gripper instance number", "Action (0 = release, 1 = grab)", "Empty", "Empty", "Empty", "Empty", "Empty"];
        MAV_CMD_DO_AUTOTUNE_ENABLE = 212, "Enable/disable autotune",
            params ["Enable (1 = enable, 0 = disable)", "Empty", "Empty", "Empty", "Empty", "Empty", "Empty"];
        MAV_CMD_DO_MOUNT_CONTROL_QUAT = 220, "Control a camera or antenna mount with a quaternion";
        MAV_CMD_DO_GUIDED_MASTER = 221, "Set the system id of the GUIDED master";
        MAV_CMD_DO_GUIDED_LIMITS = 222, "Set limits for external control",
            params ["Timeout in seconds, 0 means no timeout", "Minimum absolute altitude in meters", "Maximum absolute altitude in meters", "Horizontal move limit in meters from the position when the command was executed, 0 for no limit", "Empty", "Empty", "Empty"];
        MAV_CMD_DO_ENGINE_CONTROL = 223, "Control vehicle engine",
            params ["Engine state (0 = stop, 1 = start)", "Cold start (0 = warm, 1 = cold)", "Height delay for takeoff start in meters", "Empty", "Empty", "Empty", "Empty"];
        MAV_CMD_DO_LAST = 240, "Marker to indicate the end of the DO command block";
        MAV_CMD_PREFLIGHT_CALIBRATION = 241, "Trigger sensor calibration; only works when armed state allows it",
            params ["Gyro calibration (1) or temperature calibration (3)", "Magnetometer calibration (1)", "Ground pressure calibration (1)", "Radio RC calibration (1), RC trim (2)", "Accelerometer calibration (1), level calibration (2), temperature calibration (3)", "Compass/motor interference calibration (1), airspeed calibration (2)", "ESC calibration (1)"];
        MAV_CMD_PREFLIGHT_SET_SENSOR_OFFSETS = 242, "Set sensor offsets",
            params ["Sensor to adjust (0 = gyros, 1 = mag, 2 = accels, 3 = baro, 4 = optical flow, 5 = second mag)", "X axis offset or generic parameter 1", "Y axis offset or generic parameter 2", "Z axis offset or generic parameter 3", "Generic parameter 4", "Generic parameter 5", "Generic parameter 6"];
        MAV_CMD_PREFLIGHT_UAVCAN = 243, "Trigger UAVCAN configuration",
            params ["Actuator ID assignment ranging (1)", "Empty", "Empty", "Empty", "Empty", "Empty", "Empty"];
        MAV_CMD_PREFLIGHT_STORAGE = 245, "Read or write onboard parameter and mission storage",
            params ["Parameter storage (0 = read from flash, 1 = write to flash, 2 = reset to defaults)", "Mission storage (0 = read from flash, 1 = write to flash, 2 = reset to defaults)", "Onboard logging rate (Hz, 0 = default, -1 = disable)", "Empty", "Empty", "Empty", "Empty"];
        MAV_CMD_PREFLIGHT_REBOOT_SHUTDOWN = 246, "Request the reboot or shutdown of system components",
            params ["Autopilot (0 = nothing, 1 = reboot, 2 = shutdown, 3 = reboot and keep in bootloader)", "Onboard computer (0 = nothing, 1 = reboot, 2 = shutdown, 3 = reboot and keep in bootloader)", "Empty", "Empty", "Empty", "Empty", "Empty"];
        MAV_CMD_OVERRIDE_GOTO = 252, "Hold or continue the current mission, or set a new goto location",
            params ["Hold (MAV_GOTO_DO_HOLD) or continue (MAV_GOTO_DO_CONTINUE)", "Hold at current position or at the specified position", "Coordinate frame of the hold point", "Desired yaw angle in degrees", "Latitude / x position", "Longitude / y position", "Altitude / z position"];
        MAV_CMD_MISSION_START = 300, "Start running a mission",
            params ["First mission item to run", "Last mission item to run, the mission ends after it", "Empty", "Empty", "Empty", "Empty", "Empty"];
        MAV_CMD_COMPONENT_ARM_DISARM = 400, "Arm or disarm a component",
            params ["Arm (1) or disarm (0)", "Force (0 = obey safety checks, 21196 = force)", "Empty", "Empty", "Empty", "Empty", "Empty"];
        MAV_CMD_GET_HOME_POSITION = 410, "Request the home position from the vehicle",
            params ["Reserved", "Reserved", "Reserved", "Reserved", "Reserved", "Reserved", "Reserved"];
        MAV_CMD_START_RX_PAIR = 500, "Start receiver pairing",
            params ["Spektrum (0)", "RC type (0 = DSM2, 1 = DSMX)", "Empty", "Empty", "Empty", "Empty", "Empty"];
        MAV_CMD_GET_MESSAGE_INTERVAL = 510, "Request the interval at which a message is sent",
            params ["Message ID to report the interval of", "Empty", "Empty", "Empty", "Empty", "Empty", "Empty"];
        MAV_CMD_SET_MESSAGE_INTERVAL = 511, "Set the interval at which a message is sent",
            params ["Message ID to set the interval of", "Interval in microseconds, -1 disables, 0 requests the default rate", "Empty", "Empty", "Empty", "Empty", "Empty"];
        MAV_CMD_REQUEST_AUTOPILOT_CAPABILITIES = 520, "Request the autopilot version and capabilities",
            params ["Request the capabilities of the autopilot (1)", "Reserved", "Reserved", "Reserved", "Reserved", "Reserved", "Reserved"];
        MAV_CMD_IMAGE_START_CAPTURE = 2000, "Start image capture sequence",
            params ["Interval between captures in seconds", "Number of images to capture, 0 for unlimited", "Resolution in megapixels", "WIP: horizontal resolution", "WIP: vertical resolution", "Empty", "Empty"];
        MAV_CMD_IMAGE_STOP_CAPTURE = 2001, "Stop image capture sequence",
            params ["Reserved", "Reserved", "Reserved", "Reserved", "Reserved", "Reserved", "Reserved"];
        MAV_CMD_DO_TRIGGER_CONTROL = 2003, "Enable or disable onboard camera triggering",
            params ["Trigger enable/disable (0 = disable, 1 = enable)", "Shutter integration time in milliseconds, -1 ignored", "Empty", "Empty", "Empty", "Empty", "Empty"];
        MAV_CMD_VIDEO_START_CAPTURE = 2500, "Start video capture",
            params ["Camera ID (0 for all)", "Frames per second", "Resolution in megapixels", "WIP: horizontal resolution", "WIP: vertical resolution", "Empty", "Empty"];
        MAV_CMD_VIDEO_STOP_CAPTURE = 2501, "Stop the current video capture",
            params ["Reserved", "Reserved", "Empty", "Empty", "Empty", "Empty", "Empty"];
        MAV_CMD_PANORAMA_CREATE = 2800, "Create a panorama at the current position",
            params ["Viewing angle horizontal of the panorama in degrees", "Viewing angle vertical of the panorama in degrees", "Speed of the horizontal rotation (deg/s)", "Speed of the vertical rotation (deg/s)", "Empty", "Empty", "Empty"];
        MAV_CMD_DO_VTOL_TRANSITION = 3000, "Request a VTOL transition",
            params ["Target VTOL state, see MAV_VTOL_STATE; only MC and FW can be commanded", "Empty", "Empty", "Empty", "Empty", "Empty", "Empty"];
        MAV_CMD_SET_GUIDED_SUBMODE_STANDARD = 4000, "Set to standard guided submode; vehicle holds position and altitude";
        MAV_CMD_SET_GUIDED_SUBMODE_CIRCLE = 4001, "Set to circle guided submode around a fixed center";
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::FieldKind;
    use crate::wire::{PayloadCursor, PayloadWriter, WireScalar};

    #[test]
    fn test_command_values() {
        assert_eq!(MavCmd::MAV_CMD_NAV_WAYPOINT.raw(), 16);
        assert_eq!(MavCmd::MAV_CMD_COMPONENT_ARM_DISARM.raw(), 400);
        assert_eq!(MavCmd::MAV_CMD_DO_VTOL_TRANSITION.raw(), 3000);
    }

    #[test]
    fn test_command_width_is_u16() {
        assert_eq!(<MavCmd as WireScalar>::KIND, FieldKind::UInt16);
        let mut writer = PayloadWriter::new();
        MavCmd::MAV_CMD_SET_GUIDED_SUBMODE_CIRCLE.write(&mut writer);
        let payload = writer.finish();
        assert_eq!(payload, vec![0xA1, 0x0F]);
        let mut cursor = PayloadCursor::new(&payload);
        assert_eq!(
            MavCmd::read(&mut cursor).unwrap(),
            MavCmd::MAV_CMD_SET_GUIDED_SUBMODE_CIRCLE
        );
    }

    #[test]
    fn test_param_docs_in_metadata() {
        let entry = MavCmd::META.entry_named("MAV_CMD_NAV_WAYPOINT").unwrap();
        assert_eq!(entry.params.len(), 7);
        assert!(entry.params[1].contains("Acceptance radius"));
        // entries without documented params carry an empty list
        let bare = MavCmd::META.entry_named("MAV_CMD_NAV_LAND_LOCAL").unwrap();
        assert!(bare.params.is_empty());
    }

    #[test]
    fn test_unknown_command_passthrough() {
        let cmd = MavCmd::new(31010);
        assert_eq!(cmd.name(), None);
        assert_eq!(cmd.to_string(), "MAV_CMD(31010)");
    }
}
