// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! ArduPilotMega-dialect enums.

use super::macros::mav_enum;

mav_enum! {
    MavMountMode("MAV_MOUNT_MODE", u8, "Operating mode of a camera or antenna mount") {
        MAV_MOUNT_MODE_RETRACT = 0, "Load and keep safe position (roll, pitch, yaw), ignore incoming commands";
        MAV_MOUNT_MODE_NEUTRAL = 1, "Load and keep neutral position from permanent memory";
        MAV_MOUNT_MODE_MAVLINK_TARGETING = 2, "Load neutral position and start MAVLink roll/pitch/yaw control with stabilization";
        MAV_MOUNT_MODE_RC_TARGETING = 3, "Load neutral position and start RC roll/pitch/yaw control with stabilization";
        MAV_MOUNT_MODE_GPS_POINT = 4, "Load neutral position and start pointing to a lat/lon/alt point";
    }
}

mav_enum! {
    FenceBreach("FENCE_BREACH", u8, "Type of geofence breach") {
        FENCE_BREACH_NONE = 0, "No last fence breach";
        FENCE_BREACH_MINALT = 1, "Breached minimum altitude";
        FENCE_BREACH_MAXALT = 2, "Breached maximum altitude";
        FENCE_BREACH_BOUNDARY = 3, "Breached fence boundary";
    }
}

mav_enum! {
    LimitsState("LIMITS_STATE", u8, "State machine of the AP_Limits module") {
        LIMITS_INIT = 0, "Pre-initialization";
        LIMITS_DISABLED = 1, "Disabled";
        LIMITS_ENABLED = 2, "Checking limits";
        LIMITS_TRIGGERED = 3, "A limit has been breached";
        LIMITS_RECOVERING = 4, "Taking action, e.g. return to launch";
        LIMITS_RECOVERED = 5, "Returned to safe conditions";
    }
}

mav_enum! {
    LimitModule("LIMIT_MODULE", u8, "AP_Limits modules, as a bit field") {
        LIMIT_GPSLOCK = 1, "GPS lock";
        LIMIT_GEOFENCE = 2, "Geofence";
        LIMIT_ALTITUDE = 4, "Altitude";
    }
}

mav_enum! {
    RallyFlags("RALLY_FLAGS", u8, "Flags in a RALLY_POINT message, as a bit field") {
        FAVORABLE_WIND = 1, "Flag set when the requirement for position and the favorable wind direction are met";
        LAND_IMMEDIATELY = 2, "Land as soon as the rally point is reached; loiter down to break altitude otherwise";
    }
}

mav_enum! {
    CameraStatusTypes("CAMERA_STATUS_TYPES", u8, "Event reported in a CAMERA_STATUS message") {
        CAMERA_STATUS_TYPE_HEARTBEAT = 0, "Camera heartbeat, announce camera component ID at 1 Hz";
        CAMERA_STATUS_TYPE_TRIGGER = 1, "Camera image triggered";
        CAMERA_STATUS_TYPE_DISCONNECT = 2, "Camera connection lost";
        CAMERA_STATUS_TYPE_ERROR = 3, "Camera unknown error";
        CAMERA_STATUS_TYPE_LOWBATT = 4, "Camera battery low; timestamp is the battery voltage in 0.001 V";
        CAMERA_STATUS_TYPE_LOWSTORE = 5, "Camera storage low; timestamp is the remaining photo count";
        CAMERA_STATUS_TYPE_LOWSTOREV = 6, "Camera storage low; timestamp is the remaining video time in minutes";
    }
}

mav_enum! {
    CameraFeedbackFlags("CAMERA_FEEDBACK_FLAGS", u8, "Capture context of a CAMERA_FEEDBACK message") {
        CAMERA_FEEDBACK_PHOTO = 0, "Shooting photos, not video";
        CAMERA_FEEDBACK_VIDEO = 1, "Shooting video, not photos";
        CAMERA_FEEDBACK_BADEXPOSURE = 2, "Unable to achieve requested exposure, e.g. shutter speed too low";
        CAMERA_FEEDBACK_CLOSEDLOOP = 3, "Closed loop feedback from the camera, we know the image was taken";
        CAMERA_FEEDBACK_OPENLOOP = 4, "Open loop camera, an image trigger has been requested but we do not know if it was successful";
    }
}

mav_enum! {
    MavRemoteLogDataBlockCommands("MAV_REMOTE_LOG_DATA_BLOCK_COMMANDS", u32, "Special REMOTE_LOG_DATA_BLOCK sequence numbers used as commands") {
        MAV_REMOTE_LOG_DATA_BLOCK_STOP = 2147483645, "UAV should stop sending remote log blocks";
        MAV_REMOTE_LOG_DATA_BLOCK_START = 2147483646, "UAV should start sending remote log blocks";
    }
}

mav_enum! {
    MavRemoteLogDataBlockStatuses("MAV_REMOTE_LOG_DATA_BLOCK_STATUSES", u8, "Possible remote log data block statuses") {
        MAV_REMOTE_LOG_DATA_BLOCK_NACK = 0, "This block has NOT been received";
        MAV_REMOTE_LOG_DATA_BLOCK_ACK = 1, "This block has been received";
    }
}

mav_enum! {
    MagCalStatus("MAG_CAL_STATUS", u8, "Status of a compass calibration") {
        MAG_CAL_NOT_STARTED = 0, "Calibration has not started";
        MAG_CAL_WAITING_TO_START = 1, "Waiting to start";
        MAG_CAL_RUNNING_STEP_ONE = 2, "Running step one";
        MAG_CAL_RUNNING_STEP_TWO = 3, "Running step two";
        MAG_CAL_SUCCESS = 4, "Calibration succeeded";
        MAG_CAL_FAILED = 5, "Calibration failed";
    }
}

mav_enum! {
    EkfStatusFlags("EKF_STATUS_FLAGS", u16, "EKF solution validity flags, reported in EKF_STATUS_REPORT") {
        EKF_ATTITUDE = 1, "Attitude estimate is good";
        EKF_VELOCITY_HORIZ = 2, "Horizontal velocity estimate is good";
        EKF_VELOCITY_VERT = 4, "Vertical velocity estimate is good";
        EKF_POS_HORIZ_REL = 8, "Horizontal position (relative) estimate is good";
        EKF_POS_HORIZ_ABS = 16, "Horizontal position (absolute) estimate is good";
        EKF_POS_VERT_ABS = 32, "Vertical position (absolute) estimate is good";
        EKF_POS_VERT_AGL = 64, "Vertical position (above ground) estimate is good";
        EKF_CONST_POS_MODE = 128, "In constant position mode, no sensors providing absolute or relative position";
        EKF_PRED_POS_HORIZ_REL = 256, "Sufficient data for a reliable relative horizontal position estimate";
        EKF_PRED_POS_HORIZ_ABS = 512, "Sufficient data for a reliable absolute horizontal position estimate";
    }
}

mav_enum! {
    PidTuningAxis("PID_TUNING_AXIS", u8, "Control axis reported in a PID_TUNING message") {
        PID_TUNING_ROLL = 1, "Roll axis";
        PID_TUNING_PITCH = 2, "Pitch axis";
        PID_TUNING_YAW = 3, "Yaw axis";
        PID_TUNING_ACCZ = 4, "Vertical acceleration";
        PID_TUNING_STEER = 5, "Steering";
        PID_TUNING_LANDING = 6, "Landing";
    }
}

mav_enum! {
    GoproHeartbeatStatus("GOPRO_HEARTBEAT_STATUS", u8, "Connection status of the GoPro gimbal interface") {
        GOPRO_HEARTBEAT_STATUS_DISCONNECTED = 0, "No GoPro connected";
        GOPRO_HEARTBEAT_STATUS_INCOMPATIBLE = 1, "The detected GoPro is not HeroBus compatible";
        GOPRO_HEARTBEAT_STATUS_CONNECTED = 2, "A HeroBus compatible GoPro is connected";
        GOPRO_HEARTBEAT_STATUS_ERROR = 3, "An unrecoverable error was encountered with the connected GoPro, it may need to be power cycled";
    }
}

mav_enum! {
    GoproCaptureMode("GOPRO_CAPTURE_MODE", u8, "Capture mode of a connected GoPro") {
        GOPRO_CAPTURE_MODE_VIDEO = 0, "Video mode";
        GOPRO_CAPTURE_MODE_PHOTO = 1, "Photo mode";
        GOPRO_CAPTURE_MODE_BURST = 2, "Burst mode, Hero 3+ only";
        GOPRO_CAPTURE_MODE_TIME_LAPSE = 3, "Time lapse mode, Hero 3+ only";
        GOPRO_CAPTURE_MODE_MULTI_SHOT = 4, "Multi shot mode, Hero 4 only";
        GOPRO_CAPTURE_MODE_PLAYBACK = 5, "Playback mode, Hero 4 only; silver edition only";
        GOPRO_CAPTURE_MODE_SETUP = 6, "Setup mode, Hero 4 only";
        GOPRO_CAPTURE_MODE_UNKNOWN = 255, "Mode not yet known";
    }
}

mav_enum! {
    GoproHeartbeatFlags("GOPRO_HEARTBEAT_FLAGS", u8, "Status flags in a GOPRO_HEARTBEAT message") {
        GOPRO_FLAG_RECORDING = 1, "GoPro is currently recording";
    }
}

mav_enum! {
    GoproCommand("GOPRO_COMMAND", u8, "Settable and readable GoPro properties") {
        GOPRO_COMMAND_POWER = 0, "(Get/Set)";
        GOPRO_COMMAND_CAPTURE_MODE = 1, "(Get/Set)";
        GOPRO_COMMAND_SHUTTER = 2, "(___/Set)";
        GOPRO_COMMAND_BATTERY = 3, "(Get/___)";
        GOPRO_COMMAND_MODEL = 4, "(Get/___)";
        GOPRO_COMMAND_VIDEO_SETTINGS = 5, "(Get/Set)";
        GOPRO_COMMAND_LOW_LIGHT = 6, "(Get/Set)";
        GOPRO_COMMAND_PHOTO_RESOLUTION = 7, "(Get/Set)";
        GOPRO_COMMAND_PHOTO_BURST_RATE = 8, "(Get/Set)";
        GOPRO_COMMAND_PROTUNE = 9, "(Get/Set)";
        GOPRO_COMMAND_PROTUNE_WHITE_BALANCE = 10, "(Get/Set), Hero 3+ only";
        GOPRO_COMMAND_PROTUNE_COLOUR = 11, "(Get/Set), Hero 3+ only";
        GOPRO_COMMAND_PROTUNE_GAIN = 12, "(Get/Set), Hero 3+ only";
        GOPRO_COMMAND_PROTUNE_SHARPNESS = 13, "(Get/Set), Hero 3+ only";
        GOPRO_COMMAND_PROTUNE_EXPOSURE = 14, "(Get/Set), Hero 3+ only";
        GOPRO_COMMAND_TIME = 15, "(Get/Set)";
        GOPRO_COMMAND_CHARGING = 16, "(Get/Set)";
    }
}

mav_enum! {
    GoproRequestStatus("GOPRO_REQUEST_STATUS", u8, "Outcome of a GoPro get or set request") {
        GOPRO_REQUEST_SUCCESS = 0, "The write message with ID indicated succeeded";
        GOPRO_REQUEST_FAILED = 1, "The write message with ID indicated failed";
    }
}

mav_enum! {
    LedControlPattern("LED_CONTROL_PATTERN", u8, "Predefined LED patterns for LED_CONTROL") {
        LED_CONTROL_PATTERN_OFF = 0, "LED patterns off (return control to regular vehicle control)";
        LED_CONTROL_PATTERN_FIRMWAREUPDATE = 1, "LEDs show pattern during firmware update";
        LED_CONTROL_PATTERN_CUSTOM = 255, "Custom pattern using custom bytes fields";
    }
}
