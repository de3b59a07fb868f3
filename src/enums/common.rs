// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Common-dialect enums.
//!
//! Entry values and descriptions follow the published common message set.
//! `MAV_STATE` intentionally preserves the duplicate zero values the
//! upstream definitions carry; the enum catalog flags it at build time.

use super::macros::mav_enum;

mav_enum! {
    MavAutopilot("MAV_AUTOPILOT", u8, "Micro air vehicle / autopilot classes, generally distinguished by firmware") {
        MAV_AUTOPILOT_GENERIC = 0, "Generic autopilot, full support for everything";
        MAV_AUTOPILOT_RESERVED = 1, "Reserved for future use";
        MAV_AUTOPILOT_SLUGS = 2, "SLUGS autopilot";
        MAV_AUTOPILOT_ARDUPILOTMEGA = 3, "ArduPilotMega / ArduCopter";
        MAV_AUTOPILOT_OPENPILOT = 4, "OpenPilot";
        MAV_AUTOPILOT_GENERIC_WAYPOINTS_ONLY = 5, "Generic autopilot only supporting simple waypoints";
        MAV_AUTOPILOT_GENERIC_WAYPOINTS_AND_SIMPLE_NAVIGATION_ONLY = 6, "Generic autopilot supporting waypoints and other simple navigation commands";
        MAV_AUTOPILOT_GENERIC_MISSION_FULL = 7, "Generic autopilot supporting the full mission command set";
        MAV_AUTOPILOT_INVALID = 8, "No valid autopilot, e.g. a GCS or other component";
        MAV_AUTOPILOT_PPZ = 9, "PPZ UAV";
        MAV_AUTOPILOT_UDB = 10, "UAV Dev Board";
        MAV_AUTOPILOT_FP = 11, "FlexiPilot";
        MAV_AUTOPILOT_PX4 = 12, "PX4 Autopilot";
        MAV_AUTOPILOT_SMACCMPILOT = 13, "SMACCMPilot";
        MAV_AUTOPILOT_AUTOQUAD = 14, "AutoQuad";
        MAV_AUTOPILOT_ARMAZILA = 15, "Armazila";
        MAV_AUTOPILOT_AEROB = 16, "Aerob";
        MAV_AUTOPILOT_ASLUAV = 17, "ASLUAV autopilot";
    }
}

mav_enum! {
    MavType("MAV_TYPE", u8, "Type of micro air vehicle or component") {
        MAV_TYPE_GENERIC = 0, "Generic micro air vehicle";
        MAV_TYPE_FIXED_WING = 1, "Fixed wing aircraft";
        MAV_TYPE_QUADROTOR = 2, "Quadrotor";
        MAV_TYPE_COAXIAL = 3, "Coaxial helicopter";
        MAV_TYPE_HELICOPTER = 4, "Normal helicopter with tail rotor";
        MAV_TYPE_ANTENNA_TRACKER = 5, "Ground installation";
        MAV_TYPE_GCS = 6, "Operator control unit / ground control station";
        MAV_TYPE_AIRSHIP = 7, "Airship, controlled";
        MAV_TYPE_FREE_BALLOON = 8, "Free balloon, uncontrolled";
        MAV_TYPE_ROCKET = 9, "Rocket";
        MAV_TYPE_GROUND_ROVER = 10, "Ground rover";
        MAV_TYPE_SURFACE_BOAT = 11, "Surface vessel, boat, ship";
        MAV_TYPE_SUBMARINE = 12, "Submarine";
        MAV_TYPE_HEXAROTOR = 13, "Hexarotor";
        MAV_TYPE_OCTOROTOR = 14, "Octorotor";
        MAV_TYPE_TRICOPTER = 15, "Tricopter";
        MAV_TYPE_FLAPPING_WING = 16, "Flapping wing";
        MAV_TYPE_KITE = 17, "Kite";
        MAV_TYPE_ONBOARD_CONTROLLER = 18, "Onboard companion controller";
        MAV_TYPE_VTOL_DUOROTOR = 19, "Two-rotor VTOL using control surfaces in vertical operation";
        MAV_TYPE_VTOL_QUADROTOR = 20, "Quad-rotor VTOL using a V-shaped quad config in vertical operation";
        MAV_TYPE_VTOL_TILTROTOR = 21, "Tiltrotor VTOL";
        MAV_TYPE_VTOL_RESERVED2 = 22, "VTOL reserved 2";
        MAV_TYPE_VTOL_RESERVED3 = 23, "VTOL reserved 3";
        MAV_TYPE_VTOL_RESERVED4 = 24, "VTOL reserved 4";
        MAV_TYPE_VTOL_RESERVED5 = 25, "VTOL reserved 5";
        MAV_TYPE_GIMBAL = 26, "Onboard gimbal";
        MAV_TYPE_ADSB = 27, "Onboard ADSB peripheral";
    }
}

mav_enum! {
    MavModeFlag("MAV_MODE_FLAG", u8, "System mode bitmap; these flags encode the base operating mode") {
        MAV_MODE_FLAG_CUSTOM_MODE_ENABLED = 1, "Reserved for custom (autopilot-specific) mode";
        MAV_MODE_FLAG_TEST_ENABLED = 2, "System has a test mode enabled, for temporary system tests only";
        MAV_MODE_FLAG_AUTO_ENABLED = 4, "Autonomous mode enabled, system finds its own goal positions";
        MAV_MODE_FLAG_GUIDED_ENABLED = 8, "Guided mode enabled, system flies waypoints or mission items";
        MAV_MODE_FLAG_STABILIZE_ENABLED = 16, "Attitude stabilization enabled";
        MAV_MODE_FLAG_HIL_ENABLED = 32, "Hardware in the loop simulation: all motors and actuators are blocked, but internal software runs";
        MAV_MODE_FLAG_MANUAL_INPUT_ENABLED = 64, "Remote control input is enabled";
        MAV_MODE_FLAG_SAFETY_ARMED = 128, "MAV safety set to armed; motors are enabled, system is ready to fly";
    }
}

mav_enum! {
    MavState("MAV_STATE", u8, "System status flag; the published definitions assign zero to every entry") {
        MAV_STATE_UNINIT = 0, "Uninitialized system, state is unknown";
        MAV_STATE_BOOT = 0, "System is booting up";
        MAV_STATE_CALIBRATING = 0, "System is calibrating and not flight-ready";
        MAV_STATE_STANDBY = 0, "System is grounded and on standby, can be launched any time";
        MAV_STATE_ACTIVE = 0, "System is active and might be airborne, motors are engaged";
        MAV_STATE_CRITICAL = 0, "System is in a non-normal flight mode, can however still navigate";
        MAV_STATE_EMERGENCY = 0, "System is in a non-normal flight mode, lost control over parts or the whole airframe";
        MAV_STATE_POWEROFF = 0, "System just initialized its power-down sequence, will shut down now";
    }
}

mav_enum! {
    MavMode("MAV_MODE", u8, "Predefined operating modes built from the MAV_MODE_FLAG bits") {
        MAV_MODE_PREFLIGHT = 0, "System not ready to fly, booting or calibrating; may also be used while grounded";
        MAV_MODE_MANUAL_DISARMED = 64, "System allows manual RC control, motors disarmed";
        MAV_MODE_TEST_DISARMED = 66, "Undefined development mode, motors disarmed";
        MAV_MODE_STABILIZE_DISARMED = 80, "System allows stabilized manual control, motors disarmed";
        MAV_MODE_GUIDED_DISARMED = 88, "System flies autonomously between set points, motors disarmed";
        MAV_MODE_AUTO_DISARMED = 92, "System flies a stored mission autonomously, motors disarmed";
        MAV_MODE_MANUAL_ARMED = 192, "System allows manual RC control, motors armed";
        MAV_MODE_TEST_ARMED = 194, "Undefined development mode, motors armed";
        MAV_MODE_STABILIZE_ARMED = 208, "System allows stabilized manual control, motors armed";
        MAV_MODE_GUIDED_ARMED = 216, "System flies autonomously between set points, motors armed";
        MAV_MODE_AUTO_ARMED = 220, "System flies a stored mission autonomously, motors armed";
    }
}

mav_enum! {
    MavSysStatusSensor("MAV_SYS_STATUS_SENSOR", u32, "Onboard sensor and controller bitmap; used in SYS_STATUS present/enabled/health fields") {
        MAV_SYS_STATUS_SENSOR_3D_GYRO = 1, "3D gyro";
        MAV_SYS_STATUS_SENSOR_3D_ACCEL = 2, "3D accelerometer";
        MAV_SYS_STATUS_SENSOR_3D_MAG = 4, "3D magnetometer";
        MAV_SYS_STATUS_SENSOR_ABSOLUTE_PRESSURE = 8, "Absolute pressure";
        MAV_SYS_STATUS_SENSOR_DIFFERENTIAL_PRESSURE = 16, "Differential pressure";
        MAV_SYS_STATUS_SENSOR_GPS = 32, "GPS";
        MAV_SYS_STATUS_SENSOR_OPTICAL_FLOW = 64, "Optical flow";
        MAV_SYS_STATUS_SENSOR_VISION_POSITION = 128, "Computer vision position";
        MAV_SYS_STATUS_SENSOR_LASER_POSITION = 256, "Laser based position";
        MAV_SYS_STATUS_SENSOR_EXTERNAL_GROUND_TRUTH = 512, "External ground truth, e.g. Vicon or Leica";
        MAV_SYS_STATUS_SENSOR_ANGULAR_RATE_CONTROL = 1024, "3D angular rate control";
        MAV_SYS_STATUS_SENSOR_ATTITUDE_STABILIZATION = 2048, "Attitude stabilization";
        MAV_SYS_STATUS_SENSOR_YAW_POSITION = 4096, "Yaw position";
        MAV_SYS_STATUS_SENSOR_Z_ALTITUDE_CONTROL = 8192, "Z / altitude control";
        MAV_SYS_STATUS_SENSOR_XY_POSITION_CONTROL = 16384, "X/Y position control";
        MAV_SYS_STATUS_SENSOR_MOTOR_OUTPUTS = 32768, "Motor outputs / control";
        MAV_SYS_STATUS_SENSOR_RC_RECEIVER = 65536, "RC receiver";
        MAV_SYS_STATUS_SENSOR_3D_GYRO2 = 131072, "Second 3D gyro";
        MAV_SYS_STATUS_SENSOR_3D_ACCEL2 = 262144, "Second 3D accelerometer";
        MAV_SYS_STATUS_SENSOR_3D_MAG2 = 524288, "Second 3D magnetometer";
        MAV_SYS_STATUS_GEOFENCE = 1048576, "Geofence";
        MAV_SYS_STATUS_AHRS = 2097152, "AHRS subsystem health";
        MAV_SYS_STATUS_TERRAIN = 4194304, "Terrain subsystem health";
        MAV_SYS_STATUS_REVERSE_MOTOR = 8388608, "Motors are reversed";
        MAV_SYS_STATUS_LOGGING = 16777216, "Logging";
        MAV_SYS_STATUS_SENSOR_BATTERY = 33554432, "Battery";
    }
}

mav_enum! {
    MavFrame("MAV_FRAME", u8, "Coordinate frames used for position and setpoint values") {
        MAV_FRAME_GLOBAL = 0, "Global coordinate frame, WGS84; altitude over mean sea level";
        MAV_FRAME_LOCAL_NED = 1, "Local coordinate frame, Z-down (north, east, down)";
        MAV_FRAME_MISSION = 2, "Not a coordinate frame, indicates a mission command";
        MAV_FRAME_GLOBAL_RELATIVE_ALT = 3, "Global coordinate frame; altitude relative to home position";
        MAV_FRAME_LOCAL_ENU = 4, "Local coordinate frame, Z-up (east, north, up)";
        MAV_FRAME_GLOBAL_INT = 5, "Global frame with lat/lon scaled by 1e7; altitude over mean sea level";
        MAV_FRAME_GLOBAL_RELATIVE_ALT_INT = 6, "Global frame with lat/lon scaled by 1e7; altitude relative to home";
        MAV_FRAME_LOCAL_OFFSET_NED = 7, "NED offset relative to the current vehicle position";
        MAV_FRAME_BODY_NED = 8, "Body-fixed NED frame, rotated to vehicle heading";
        MAV_FRAME_BODY_OFFSET_NED = 9, "Offset in body NED frame, relative to the current position";
        MAV_FRAME_GLOBAL_TERRAIN_ALT = 10, "Global frame; altitude over terrain model";
        MAV_FRAME_GLOBAL_TERRAIN_ALT_INT = 11, "Global frame with lat/lon scaled by 1e7; altitude over terrain";
    }
}

mav_enum! {
    MavResult("MAV_RESULT", u8, "Result of a MAVLink command, reported in COMMAND_ACK") {
        MAV_RESULT_ACCEPTED = 0, "Command accepted and executed";
        MAV_RESULT_TEMPORARILY_REJECTED = 1, "Command temporarily rejected or denied; retrying later may work";
        MAV_RESULT_DENIED = 2, "Command permanently denied";
        MAV_RESULT_UNSUPPORTED = 3, "Command unknown or unsupported";
        MAV_RESULT_FAILED = 4, "Command executed but failed";
    }
}

mav_enum! {
    MavMissionResult("MAV_MISSION_RESULT", u8, "Result of a mission operation, reported in MISSION_ACK") {
        MAV_MISSION_ACCEPTED = 0, "Mission accepted";
        MAV_MISSION_ERROR = 1, "Generic error; mission cannot be accepted";
        MAV_MISSION_UNSUPPORTED_FRAME = 2, "Coordinate frame not supported";
        MAV_MISSION_UNSUPPORTED = 3, "Command not supported";
        MAV_MISSION_NO_SPACE = 4, "Mission item exceeds storage space";
        MAV_MISSION_INVALID = 5, "One of the parameters has an invalid value";
        MAV_MISSION_INVALID_PARAM1 = 6, "param1 has an invalid value";
        MAV_MISSION_INVALID_PARAM2 = 7, "param2 has an invalid value";
        MAV_MISSION_INVALID_PARAM3 = 8, "param3 has an invalid value";
        MAV_MISSION_INVALID_PARAM4 = 9, "param4 has an invalid value";
        MAV_MISSION_INVALID_PARAM5_X = 10, "x / param5 has an invalid value";
        MAV_MISSION_INVALID_PARAM6_Y = 11, "y / param6 has an invalid value";
        MAV_MISSION_INVALID_PARAM7 = 12, "z / param7 has an invalid value";
        MAV_MISSION_INVALID_SEQUENCE = 13, "Received mission item out of sequence";
        MAV_MISSION_DENIED = 14, "Not accepting any mission commands from this communication partner";
    }
}

mav_enum! {
    MavParamType("MAV_PARAM_TYPE", u8, "Onboard parameter value types") {
        MAV_PARAM_TYPE_UINT8 = 1, "8-bit unsigned integer";
        MAV_PARAM_TYPE_INT8 = 2, "8-bit signed integer";
        MAV_PARAM_TYPE_UINT16 = 3, "16-bit unsigned integer";
        MAV_PARAM_TYPE_INT16 = 4, "16-bit signed integer";
        MAV_PARAM_TYPE_UINT32 = 5, "32-bit unsigned integer";
        MAV_PARAM_TYPE_INT32 = 6, "32-bit signed integer";
        MAV_PARAM_TYPE_UINT64 = 7, "64-bit unsigned integer";
        MAV_PARAM_TYPE_INT64 = 8, "64-bit signed integer";
        MAV_PARAM_TYPE_REAL32 = 9, "32-bit floating point";
        MAV_PARAM_TYPE_REAL64 = 10, "64-bit floating point";
    }
}

mav_enum! {
    MavSeverity("MAV_SEVERITY", u8, "Severity of a STATUSTEXT message, following RFC 5424") {
        MAV_SEVERITY_EMERGENCY = 0, "System is unusable, a catastrophic failure";
        MAV_SEVERITY_ALERT = 1, "Action should be taken immediately";
        MAV_SEVERITY_CRITICAL = 2, "Action must be taken immediately";
        MAV_SEVERITY_ERROR = 3, "Indicates an error in secondary/redundant systems";
        MAV_SEVERITY_WARNING = 4, "Indicates about a possible future error if not resolved";
        MAV_SEVERITY_NOTICE = 5, "An unusual event occurred, not an error condition";
        MAV_SEVERITY_INFO = 6, "Normal operational messages";
        MAV_SEVERITY_DEBUG = 7, "Useful non-operational messages for debugging";
    }
}

mav_enum! {
    GpsFixType("GPS_FIX_TYPE", u8, "Type of GPS fix") {
        GPS_FIX_TYPE_NO_GPS = 0, "No GPS connected";
        GPS_FIX_TYPE_NO_FIX = 1, "No position information, GPS connected";
        GPS_FIX_TYPE_2D_FIX = 2, "2D position";
        GPS_FIX_TYPE_3D_FIX = 3, "3D position";
        GPS_FIX_TYPE_DGPS = 4, "DGPS / SBAS aided 3D position";
        GPS_FIX_TYPE_RTK_FLOAT = 5, "RTK float, 3D position";
        GPS_FIX_TYPE_RTK_FIXED = 6, "RTK fixed, 3D position";
        GPS_FIX_TYPE_STATIC = 7, "Static fixed, typically used for base stations";
        GPS_FIX_TYPE_PPP = 8, "PPP, 3D position";
    }
}

mav_enum! {
    MavPowerStatus("MAV_POWER_STATUS", u16, "Power supply status flags") {
        MAV_POWER_STATUS_BRICK_VALID = 1, "Main brick power supply valid";
        MAV_POWER_STATUS_SERVO_VALID = 2, "Main servo power supply valid for FMU";
        MAV_POWER_STATUS_USB_CONNECTED = 4, "USB power is connected";
        MAV_POWER_STATUS_PERIPH_OVERCURRENT = 8, "Peripheral supply is in over-current state";
        MAV_POWER_STATUS_PERIPH_HIPOWER_OVERCURRENT = 16, "High-power peripheral supply is in over-current state";
        MAV_POWER_STATUS_CHANGED = 32, "Power status has changed since boot";
    }
}

mav_enum! {
    SerialControlDev("SERIAL_CONTROL_DEV", u8, "Onboard serial devices addressable through SERIAL_CONTROL") {
        SERIAL_CONTROL_DEV_TELEM1 = 0, "First telemetry port";
        SERIAL_CONTROL_DEV_TELEM2 = 1, "Second telemetry port";
        SERIAL_CONTROL_DEV_GPS1 = 2, "First GPS port";
        SERIAL_CONTROL_DEV_GPS2 = 3, "Second GPS port";
        SERIAL_CONTROL_DEV_SHELL = 10, "System shell";
    }
}

mav_enum! {
    SerialControlFlag("SERIAL_CONTROL_FLAG", u8, "SERIAL_CONTROL transaction flags") {
        SERIAL_CONTROL_FLAG_REPLY = 1, "Set if this message is a reply";
        SERIAL_CONTROL_FLAG_RESPOND = 2, "Set if the sender wants the receiver to send a response";
        SERIAL_CONTROL_FLAG_EXCLUSIVE = 4, "Set to request exclusive access to the device";
        SERIAL_CONTROL_FLAG_BLOCKING = 8, "Block on writes to the serial port";
        SERIAL_CONTROL_FLAG_MULTI = 16, "More messages with this transaction follow";
    }
}

mav_enum! {
    MavDistanceSensor("MAV_DISTANCE_SENSOR", u8, "Type of distance sensor") {
        MAV_DISTANCE_SENSOR_LASER = 0, "Laser rangefinder, e.g. LightWare or PulsedLight units";
        MAV_DISTANCE_SENSOR_ULTRASOUND = 1, "Ultrasound rangefinder, e.g. MaxBotix units";
        MAV_DISTANCE_SENSOR_INFRARED = 2, "Infrared rangefinder, e.g. Sharp units";
        MAV_DISTANCE_SENSOR_RADAR = 3, "Radar";
        MAV_DISTANCE_SENSOR_UNKNOWN = 4, "Unknown sensor type";
    }
}

mav_enum! {
    MavSensorOrientation("MAV_SENSOR_ORIENTATION", u8, "Sensor mounting orientation as successive rotations") {
        MAV_SENSOR_ROTATION_NONE = 0, "Roll: 0, Pitch: 0, Yaw: 0";
        MAV_SENSOR_ROTATION_YAW_45 = 1, "Roll: 0, Pitch: 0, Yaw: 45";
        MAV_SENSOR_ROTATION_YAW_90 = 2, "Roll: 0, Pitch: 0, Yaw: 90";
        MAV_SENSOR_ROTATION_YAW_135 = 3, "Roll: 0, Pitch: 0, Yaw: 135";
        MAV_SENSOR_ROTATION_YAW_180 = 4, "Roll: 0, Pitch: 0, Yaw: 180";
        MAV_SENSOR_ROTATION_YAW_225 = 5, "Roll: 0, Pitch: 0, Yaw: 225";
        MAV_SENSOR_ROTATION_YAW_270 = 6, "Roll: 0, Pitch: 0, Yaw: 270";
        MAV_SENSOR_ROTATION_YAW_315 = 7, "Roll: 0, Pitch: 0, Yaw: 315";
        MAV_SENSOR_ROTATION_ROLL_180 = 8, "Roll: 180, Pitch: 0, Yaw: 0";
        MAV_SENSOR_ROTATION_ROLL_180_YAW_45 = 9, "Roll: 180, Pitch: 0, Yaw: 45";
        MAV_SENSOR_ROTATION_ROLL_180_YAW_90 = 10, "Roll: 180, Pitch: 0, Yaw: 90";
        MAV_SENSOR_ROTATION_ROLL_180_YAW_135 = 11, "Roll: 180, Pitch: 0, Yaw: 135";
        MAV_SENSOR_ROTATION_PITCH_180 = 12, "Roll: 0, Pitch: 180, Yaw: 0";
        MAV_SENSOR_ROTATION_ROLL_180_YAW_225 = 13, "Roll: 180, Pitch: 0, Yaw: 225";
        MAV_SENSOR_ROTATION_ROLL_180_YAW_270 = 14, "Roll: 180, Pitch: 0, Yaw: 270";
        MAV_SENSOR_ROTATION_ROLL_180_YAW_315 = 15, "Roll: 180, Pitch: 0, Yaw: 315";
        MAV_SENSOR_ROTATION_ROLL_90 = 16, "Roll: 90, Pitch: 0, Yaw: 0";
        MAV_SENSOR_ROTATION_ROLL_90_YAW_45 = 17, "Roll: 90, Pitch: 0, Yaw: 45";
        MAV_SENSOR_ROTATION_ROLL_90_YAW_90 = 18, "Roll: 90, Pitch: 0, Yaw: 90";
        MAV_SENSOR_ROTATION_ROLL_90_YAW_135 = 19, "Roll: 90, Pitch: 0, Yaw: 135";
        MAV_SENSOR_ROTATION_ROLL_270 = 20, "Roll: 270, Pitch: 0, Yaw: 0";
        MAV_SENSOR_ROTATION_ROLL_270_YAW_45 = 21, "Roll: 270, Pitch: 0, Yaw: 45";
        MAV_SENSOR_ROTATION_ROLL_270_YAW_90 = 22, "Roll: 270, Pitch: 0, Yaw: 90";
        MAV_SENSOR_ROTATION_ROLL_270_YAW_135 = 23, "Roll: 270, Pitch: 0, Yaw: 135";
        MAV_SENSOR_ROTATION_PITCH_90 = 24, "Roll: 0, Pitch: 90, Yaw: 0";
        MAV_SENSOR_ROTATION_PITCH_270 = 25, "Roll: 0, Pitch: 270, Yaw: 0";
        MAV_SENSOR_ROTATION_PITCH_180_YAW_90 = 26, "Roll: 0, Pitch: 180, Yaw: 90";
        MAV_SENSOR_ROTATION_PITCH_180_YAW_270 = 27, "Roll: 0, Pitch: 180, Yaw: 270";
        MAV_SENSOR_ROTATION_ROLL_90_PITCH_90 = 28, "Roll: 90, Pitch: 90, Yaw: 0";
        MAV_SENSOR_ROTATION_ROLL_180_PITCH_90 = 29, "Roll: 180, Pitch: 90, Yaw: 0";
        MAV_SENSOR_ROTATION_ROLL_270_PITCH_90 = 30, "Roll: 270, Pitch: 90, Yaw: 0";
        MAV_SENSOR_ROTATION_ROLL_90_PITCH_180 = 31, "Roll: 90, Pitch: 180, Yaw: 0";
        MAV_SENSOR_ROTATION_ROLL_270_PITCH_180 = 32, "Roll: 270, Pitch: 180, Yaw: 0";
        MAV_SENSOR_ROTATION_ROLL_90_PITCH_270 = 33, "Roll: 90, Pitch: 270, Yaw: 0";
        MAV_SENSOR_ROTATION_ROLL_180_PITCH_270 = 34, "Roll: 180, Pitch: 270, Yaw: 0";
        MAV_SENSOR_ROTATION_ROLL_270_PITCH_270 = 35, "Roll: 270, Pitch: 270, Yaw: 0";
        MAV_SENSOR_ROTATION_ROLL_90_PITCH_180_YAW_90 = 36, "Roll: 90, Pitch: 180, Yaw: 90";
        MAV_SENSOR_ROTATION_ROLL_90_YAW_270 = 37, "Roll: 90, Pitch: 0, Yaw: 270";
        MAV_SENSOR_ROTATION_MAX = 38, "End of rotation enumeration";
    }
}

mav_enum! {
    MavProtocolCapability("MAV_PROTOCOL_CAPABILITY", u64, "Autopilot capability flags, reported in AUTOPILOT_VERSION") {
        MAV_PROTOCOL_CAPABILITY_MISSION_FLOAT = 1, "Supports MISSION_ITEM float message type";
        MAV_PROTOCOL_CAPABILITY_PARAM_FLOAT = 2, "Supports PARAM float message type";
        MAV_PROTOCOL_CAPABILITY_MISSION_INT = 4, "Supports MISSION_ITEM_INT scaled integer message type";
        MAV_PROTOCOL_CAPABILITY_COMMAND_INT = 8, "Supports COMMAND_INT scaled integer message type";
        MAV_PROTOCOL_CAPABILITY_PARAM_UNION = 16, "Supports the PARAM union message type";
        MAV_PROTOCOL_CAPABILITY_FTP = 32, "Supports FILE_TRANSFER_PROTOCOL";
        MAV_PROTOCOL_CAPABILITY_SET_ATTITUDE_TARGET = 64, "Supports commanding attitude offboard";
        MAV_PROTOCOL_CAPABILITY_SET_POSITION_TARGET_LOCAL_NED = 128, "Supports commanding position and velocity targets in local NED frame";
        MAV_PROTOCOL_CAPABILITY_SET_POSITION_TARGET_GLOBAL_INT = 256, "Supports commanding position and velocity targets in global scaled integers";
        MAV_PROTOCOL_CAPABILITY_TERRAIN = 512, "Supports terrain protocol / data handling";
        MAV_PROTOCOL_CAPABILITY_SET_ACTUATOR_TARGET = 1024, "Supports direct actuator control";
        MAV_PROTOCOL_CAPABILITY_FLIGHT_TERMINATION = 2048, "Supports the flight termination command";
        MAV_PROTOCOL_CAPABILITY_COMPASS_CALIBRATION = 4096, "Supports onboard compass calibration";
        MAV_PROTOCOL_CAPABILITY_MAVLINK2 = 8192, "Supports MAVLink version 2";
    }
}

mav_enum! {
    MavEstimatorType("MAV_ESTIMATOR_TYPE", u8, "Source estimator for covariance position messages") {
        MAV_ESTIMATOR_TYPE_NAIVE = 1, "Plain (naive) position estimate";
        MAV_ESTIMATOR_TYPE_VISION = 2, "Computer vision based estimate, might be up to scale";
        MAV_ESTIMATOR_TYPE_VIO = 3, "Visual-inertial odometry estimate";
        MAV_ESTIMATOR_TYPE_GPS = 4, "Plain GPS estimate";
        MAV_ESTIMATOR_TYPE_GPS_INS = 5, "Estimator integrating GPS and inertial sensing";
    }
}

mav_enum! {
    MavBatteryFunction("MAV_BATTERY_FUNCTION", u8, "Battery function") {
        MAV_BATTERY_FUNCTION_UNKNOWN = 0, "Battery function is unknown";
        MAV_BATTERY_FUNCTION_ALL = 1, "Battery supports all flight systems";
        MAV_BATTERY_FUNCTION_PROPULSION = 2, "Battery for the propulsion system";
        MAV_BATTERY_FUNCTION_AVIONICS = 3, "Avionics battery";
        MAV_BATTERY_FUNCTION_PAYLOAD = 4, "Payload battery";
    }
}

mav_enum! {
    MavBatteryType("MAV_BATTERY_TYPE", u8, "Battery chemistry") {
        MAV_BATTERY_TYPE_UNKNOWN = 0, "Not specified";
        MAV_BATTERY_TYPE_LIPO = 1, "Lithium polymer";
        MAV_BATTERY_TYPE_LIFE = 2, "Lithium iron phosphate";
        MAV_BATTERY_TYPE_LION = 3, "Lithium ion";
        MAV_BATTERY_TYPE_NIMH = 4, "Nickel metal hydride";
    }
}

mav_enum! {
    MavVtolState("MAV_VTOL_STATE", u8, "VTOL transition state") {
        MAV_VTOL_STATE_UNDEFINED = 0, "MAV is not configured as VTOL";
        MAV_VTOL_STATE_TRANSITION_TO_FW = 1, "VTOL is in transition to fixed wing";
        MAV_VTOL_STATE_TRANSITION_TO_MC = 2, "VTOL is in transition to multicopter";
        MAV_VTOL_STATE_MC = 3, "VTOL is in multicopter state";
        MAV_VTOL_STATE_FW = 4, "VTOL is in fixed wing state";
    }
}

mav_enum! {
    MavLandedState("MAV_LANDED_STATE", u8, "Landed state of the vehicle") {
        MAV_LANDED_STATE_UNDEFINED = 0, "Landed state is unknown";
        MAV_LANDED_STATE_ON_GROUND = 1, "Vehicle is landed (on ground)";
        MAV_LANDED_STATE_IN_AIR = 2, "Vehicle is in air";
    }
}

mav_enum! {
    EstimatorStatusFlags("ESTIMATOR_STATUS_FLAGS", u16, "Estimator solution validity flags, reported in ESTIMATOR_STATUS") {
        ESTIMATOR_ATTITUDE = 1, "Attitude estimate is good";
        ESTIMATOR_VELOCITY_HORIZ = 2, "Horizontal velocity estimate is good";
        ESTIMATOR_VELOCITY_VERT = 4, "Vertical velocity estimate is good";
        ESTIMATOR_POS_HORIZ_REL = 8, "Horizontal position (relative) estimate is good";
        ESTIMATOR_POS_HORIZ_ABS = 16, "Horizontal position (absolute) estimate is good";
        ESTIMATOR_POS_VERT_ABS = 32, "Vertical position (absolute) estimate is good";
        ESTIMATOR_POS_VERT_AGL = 64, "Vertical position (above ground) estimate is good";
        ESTIMATOR_CONST_POS_MODE = 128, "In constant position mode, no sensors providing absolute or relative position";
        ESTIMATOR_PRED_POS_HORIZ_REL = 256, "Sufficient data for a reliable relative horizontal position estimate";
        ESTIMATOR_PRED_POS_HORIZ_ABS = 512, "Sufficient data for a reliable absolute horizontal position estimate";
        ESTIMATOR_GPS_GLITCH = 1024, "GPS glitch detected";
    }
}

mav_enum! {
    GpsInputIgnoreFlags("GPS_INPUT_IGNORE_FLAGS", u16, "Fields to ignore in a GPS_INPUT message") {
        GPS_INPUT_IGNORE_FLAG_ALT = 1, "Ignore altitude field";
        GPS_INPUT_IGNORE_FLAG_HDOP = 2, "Ignore hdop field";
        GPS_INPUT_IGNORE_FLAG_VDOP = 4, "Ignore vdop field";
        GPS_INPUT_IGNORE_FLAG_VEL_HORIZ = 8, "Ignore horizontal velocity fields";
        GPS_INPUT_IGNORE_FLAG_VEL_VERT = 16, "Ignore vertical velocity field";
        GPS_INPUT_IGNORE_FLAG_SPEED_ACCURACY = 32, "Ignore speed accuracy field";
        GPS_INPUT_IGNORE_FLAG_HORIZONTAL_ACCURACY = 64, "Ignore horizontal accuracy field";
        GPS_INPUT_IGNORE_FLAG_VERTICAL_ACCURACY = 128, "Ignore vertical accuracy field";
    }
}

mav_enum! {
    AdsbAltitudeType("ADSB_ALTITUDE_TYPE", u8, "Altitude reference of an ADSB vehicle report") {
        ADSB_ALTITUDE_TYPE_PRESSURE_QNH = 0, "Altitude reported from a Baro source using QNH reference";
        ADSB_ALTITUDE_TYPE_GEOMETRIC = 1, "Altitude reported from a GNSS source";
    }
}

mav_enum! {
    AdsbEmitterType("ADSB_EMITTER_TYPE", u8, "ADSB classification of the transmitting vehicle") {
        ADSB_EMITTER_TYPE_NO_INFO = 0, "No emitter info available";
        ADSB_EMITTER_TYPE_LIGHT = 1, "Light aircraft";
        ADSB_EMITTER_TYPE_SMALL = 2, "Small aircraft";
        ADSB_EMITTER_TYPE_LARGE = 3, "Large aircraft";
        ADSB_EMITTER_TYPE_HIGH_VORTEX_LARGE = 4, "Large aircraft generating high vortex";
        ADSB_EMITTER_TYPE_HEAVY = 5, "Heavy aircraft";
        ADSB_EMITTER_TYPE_HIGHLY_MANUV = 6, "Highly maneuverable aircraft";
        ADSB_EMITTER_TYPE_ROTOCRAFT = 7, "Rotorcraft";
        ADSB_EMITTER_TYPE_UNASSIGNED = 8, "Unassigned";
        ADSB_EMITTER_TYPE_GLIDER = 9, "Glider or sailplane";
        ADSB_EMITTER_TYPE_LIGHTER_AIR = 10, "Lighter than air";
        ADSB_EMITTER_TYPE_PARACHUTE = 11, "Parachute";
        ADSB_EMITTER_TYPE_ULTRA_LIGHT = 12, "Ultralight";
        ADSB_EMITTER_TYPE_UNASSIGNED2 = 13, "Unassigned 2";
        ADSB_EMITTER_TYPE_UAV = 14, "Unmanned aerial vehicle";
        ADSB_EMITTER_TYPE_SPACE = 15, "Space vehicle";
        ADSB_EMITTER_TYPE_UNASSGINED3 = 16, "Unassigned 3";
        ADSB_EMITTER_TYPE_EMERGENCY_SURFACE = 17, "Emergency surface vehicle";
        ADSB_EMITTER_TYPE_SERVICE_SURFACE = 18, "Service surface vehicle";
        ADSB_EMITTER_TYPE_POINT_OBSTACLE = 19, "Point obstacle";
    }
}

mav_enum! {
    AdsbFlags("ADSB_FLAGS", u16, "Validity flags of an ADSB vehicle report") {
        ADSB_FLAGS_VALID_COORDS = 1, "Coordinates are valid";
        ADSB_FLAGS_VALID_ALTITUDE = 2, "Altitude is valid";
        ADSB_FLAGS_VALID_HEADING = 4, "Heading is valid";
        ADSB_FLAGS_VALID_VELOCITY = 8, "Velocity is valid";
        ADSB_FLAGS_VALID_CALLSIGN = 16, "Callsign is valid";
        ADSB_FLAGS_VALID_SQUAWK = 32, "Squawk is valid";
        ADSB_FLAGS_SIMULATED = 64, "Report is simulated";
    }
}

mav_enum! {
    MavCollisionSrc("MAV_COLLISION_SRC", u8, "Source of information about a collision object") {
        MAV_COLLISION_SRC_ADSB = 0, "ADSB system";
        MAV_COLLISION_SRC_MAVLINK_GPS_GLOBAL_INT = 1, "Decoded from the GLOBAL_POSITION_INT of another vehicle";
    }
}

mav_enum! {
    MavCollisionAction("MAV_COLLISION_ACTION", u8, "Aircraft-rules-based action to take in response to a potential collision") {
        MAV_COLLISION_ACTION_NONE = 0, "Ignore any potential collisions";
        MAV_COLLISION_ACTION_REPORT = 1, "Report potential collision";
        MAV_COLLISION_ACTION_ASCEND_OR_DESCEND = 2, "Ascend or descend to avoid the threat";
        MAV_COLLISION_ACTION_MOVE_HORIZONTALLY = 3, "Move horizontally to avoid the threat";
        MAV_COLLISION_ACTION_MOVE_PERPENDICULAR = 4, "Move perpendicular to the threat's velocity vector";
        MAV_COLLISION_ACTION_RTL = 5, "Return to launch";
        MAV_COLLISION_ACTION_HOVER = 6, "Hover in place";
    }
}

mav_enum! {
    MavCollisionThreatLevel("MAV_COLLISION_THREAT_LEVEL", u8, "Threat level of a collision object") {
        MAV_COLLISION_THREAT_LEVEL_NONE = 0, "Not a threat";
        MAV_COLLISION_THREAT_LEVEL_LOW = 1, "Craft is mildly concerned about this threat";
        MAV_COLLISION_THREAT_LEVEL_HIGH = 2, "Craft is panicking, starts evasive maneuvers";
    }
}

mav_enum! {
    MavDataStream("MAV_DATA_STREAM", u8, "Data stream groups requestable through REQUEST_DATA_STREAM") {
        MAV_DATA_STREAM_ALL = 0, "Enable all data streams";
        MAV_DATA_STREAM_RAW_SENSORS = 1, "IMU, GPS raw, and scaled pressure";
        MAV_DATA_STREAM_EXTENDED_STATUS = 2, "System status, GPS status, and control status";
        MAV_DATA_STREAM_RC_CHANNELS = 3, "RC channel and servo output values";
        MAV_DATA_STREAM_RAW_CONTROLLER = 4, "Attitude and position controller outputs";
        MAV_DATA_STREAM_POSITION = 6, "Local and global position";
        MAV_DATA_STREAM_EXTRA1 = 10, "Autopilot-dependent stream 1";
        MAV_DATA_STREAM_EXTRA2 = 11, "Autopilot-dependent stream 2";
        MAV_DATA_STREAM_EXTRA3 = 12, "Autopilot-dependent stream 3";
    }
}

mav_enum! {
    FenceAction("FENCE_ACTION", u8, "Action to take on geofence breach") {
        FENCE_ACTION_NONE = 0, "Disable fenced mode";
        FENCE_ACTION_GUIDED = 1, "Fly to geofence return point in GUIDED mode";
        FENCE_ACTION_REPORT = 2, "Report fence breach, but take no action";
        FENCE_ACTION_GUIDED_THR_PASS = 3, "Fly to geofence return point with manual throttle";
        FENCE_ACTION_RTL = 4, "Return to launch and loiter";
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::FieldKind;
    use crate::wire::{PayloadCursor, PayloadWriter, WireScalar};

    #[test]
    fn test_known_entry_constants() {
        assert_eq!(MavType::MAV_TYPE_QUADROTOR.raw(), 2);
        assert_eq!(MavAutopilot::MAV_AUTOPILOT_ARDUPILOTMEGA.raw(), 3);
        assert_eq!(MavFrame::MAV_FRAME_GLOBAL_RELATIVE_ALT.raw(), 3);
        assert_eq!(MavSeverity::MAV_SEVERITY_DEBUG.raw(), 7);
    }

    #[test]
    fn test_name_lookup() {
        assert_eq!(
            MavType::MAV_TYPE_QUADROTOR.name(),
            Some("MAV_TYPE_QUADROTOR")
        );
        assert_eq!(MavType::new(200).name(), None);
    }

    #[test]
    fn test_unknown_value_passthrough() {
        let raw = MavResult::new(77);
        assert_eq!(raw.raw(), 77);
        assert_eq!(raw.to_string(), "MAV_RESULT(77)");
    }

    #[test]
    fn test_display_known_value() {
        assert_eq!(
            MavLandedState::MAV_LANDED_STATE_IN_AIR.to_string(),
            "MAV_LANDED_STATE_IN_AIR"
        );
    }

    #[test]
    fn test_underlying_widths() {
        assert_eq!(<MavType as WireScalar>::KIND, FieldKind::UInt8);
        assert_eq!(<MavPowerStatus as WireScalar>::KIND, FieldKind::UInt16);
        assert_eq!(<MavSysStatusSensor as WireScalar>::KIND, FieldKind::UInt32);
        assert_eq!(
            <MavProtocolCapability as WireScalar>::KIND,
            FieldKind::UInt64
        );
    }

    #[test]
    fn test_wire_round_trip_u16_width() {
        let flags = EstimatorStatusFlags::new(0x0155);
        let mut writer = PayloadWriter::new();
        flags.write(&mut writer);
        let payload = writer.finish();
        assert_eq!(payload, vec![0x55, 0x01]);
        let mut cursor = PayloadCursor::new(&payload);
        assert_eq!(
            EstimatorStatusFlags::read(&mut cursor).unwrap(),
            flags
        );
    }

    #[test]
    fn test_mav_state_duplicate_values() {
        assert!(MavState::META.has_duplicate_values());
        assert_eq!(MavState::MAV_STATE_ACTIVE.raw(), 0);
        assert_eq!(MavState::MAV_STATE_POWEROFF.raw(), 0);
        // first declared entry wins value lookups
        assert_eq!(MavState::new(0).name(), Some("MAV_STATE_UNINIT"));
    }

    #[test]
    fn test_from_conversions() {
        let t: MavType = 2u8.into();
        assert_eq!(t, MavType::MAV_TYPE_QUADROTOR);
        let raw: u8 = t.into();
        assert_eq!(raw, 2);
    }

    #[test]
    fn test_default_is_zero() {
        assert_eq!(MavType::default().raw(), 0);
        assert_eq!(MavSysStatusSensor::default().raw(), 0);
    }

    #[test]
    fn test_meta_entries() {
        assert_eq!(MavType::META.name, "MAV_TYPE");
        assert_eq!(MavType::META.entries.len(), 28);
        let entry = MavType::META.entry_named("MAV_TYPE_GCS").unwrap();
        assert_eq!(entry.value, 6);
        assert!(!entry.description.is_empty());
    }
}
