// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! ArduPilot-specific messages: calibration, camera, mount, fence, rally,
//! gimbal, GoPro, and remote log transport.

use super::macros::mav_message;
use crate::enums::{
    CameraFeedbackFlags, CameraStatusTypes, EkfStatusFlags, FenceBreach, GoproCaptureMode,
    GoproCommand, GoproHeartbeatFlags, GoproHeartbeatStatus, GoproRequestStatus,
    LedControlPattern, LimitModule, LimitsState, MagCalStatus, MavMountMode,
    MavRemoteLogDataBlockCommands, MavRemoteLogDataBlockStatuses, PidTuningAxis, RallyFlags,
};

mav_message! {
    SensorOffsets {
        id: 150,
        name: "SENSOR_OFFSETS",
        crc_extra: 134,
        description: "Offsets and calibrations values for hardware sensors",
        fields: {
            mag_declination: f32 = "Magnetic declination in radians",
            raw_press: i32 = "Raw pressure from the barometer",
            raw_temp: i32 = "Raw temperature from the barometer",
            gyro_cal_x: f32 = "Gyro X calibration",
            gyro_cal_y: f32 = "Gyro Y calibration",
            gyro_cal_z: f32 = "Gyro Z calibration",
            accel_cal_x: f32 = "Accel X calibration",
            accel_cal_y: f32 = "Accel Y calibration",
            accel_cal_z: f32 = "Accel Z calibration",
            mag_ofs_x: i16 = "Magnetometer X offset",
            mag_ofs_y: i16 = "Magnetometer Y offset",
            mag_ofs_z: i16 = "Magnetometer Z offset",
        }
    }

    SetMagOffsets {
        id: 151,
        name: "SET_MAG_OFFSETS",
        crc_extra: 219,
        description: "Set the magnetometer offsets; deprecated in favor of parameter writes",
        fields: {
            mag_ofs_x: i16 = "Magnetometer X offset",
            mag_ofs_y: i16 = "Magnetometer Y offset",
            mag_ofs_z: i16 = "Magnetometer Z offset",
            target_system: u8 = "System ID",
            target_component: u8 = "Component ID",
        }
    }

    Meminfo {
        id: 152,
        name: "MEMINFO",
        crc_extra: 208,
        description: "State of the APM memory",
        fields: {
            brkval: u16 = "Heap top",
            freemem: u16 = "Free memory in bytes",
        }
    }

    ApAdc {
        id: 153,
        name: "AP_ADC",
        crc_extra: 188,
        description: "Raw ADC output",
        fields: {
            adc1: u16 = "ADC output 1",
            adc2: u16 = "ADC output 2",
            adc3: u16 = "ADC output 3",
            adc4: u16 = "ADC output 4",
            adc5: u16 = "ADC output 5",
            adc6: u16 = "ADC output 6",
        }
    }

    DigicamConfigure {
        id: 154,
        name: "DIGICAM_CONFIGURE",
        crc_extra: 84,
        description: "Configure an onboard camera controller",
        fields: {
            extra_value: f32 = "Correspondent value to given extra_param",
            shutter_speed: u16 = "Divisor number, e.g. 1000 means 1/1000; 0 to ignore",
            target_system: u8 = "System ID",
            target_component: u8 = "Component ID",
            mode: u8 = "Mode enumeration from 1 to N; 0 to ignore",
            aperture: u8 = "F stop number multiplied by 10; 0 to ignore",
            iso: u8 = "ISO enumeration from 1 to N; 0 to ignore",
            exposure_type: u8 = "Exposure type enumeration from 1 to N; 0 to ignore",
            command_id: u8 = "Command identity; incremental loop so the camera can detect a new command",
            engine_cut_off: u8 = "Main engine cut-off time before camera trigger, in 0.1 s; 0 to ignore",
            extra_param: u8 = "Extra parameters enumeration, 0 to ignore",
        }
    }

    DigicamControl {
        id: 155,
        name: "DIGICAM_CONTROL",
        crc_extra: 22,
        description: "Control an onboard camera controller",
        fields: {
            extra_value: f32 = "Correspondent value to given extra_param",
            target_system: u8 = "System ID",
            target_component: u8 = "Component ID",
            session: u8 = "0 to stop or 1 to start the session, show or hide the lens",
            zoom_pos: u8 = "1 to N for a zoom position if the camera supports it; 0 to ignore",
            zoom_step: i8 = "Discrete zoom step, positive in or negative out; 0 to ignore",
            focus_lock: u8 = "0 unlock focus or keep unlocked, 1 lock focus, 2 relock focus",
            shot: u8 = "0 to ignore, 1 to shoot or start filming",
            command_id: u8 = "Command identity; incremental loop so the camera can detect a new command",
            extra_param: u8 = "Extra parameters enumeration, 0 to ignore",
        }
    }

    MountConfigure {
        id: 156,
        name: "MOUNT_CONFIGURE",
        crc_extra: 19,
        description: "Configure the camera mount stabilization axes",
        fields: {
            target_system: u8 = "System ID",
            target_component: u8 = "Component ID",
            mount_mode: MavMountMode = "Mount operating mode",
            stab_roll: u8 = "Stabilize roll, 0 or 1",
            stab_pitch: u8 = "Stabilize pitch, 0 or 1",
            stab_yaw: u8 = "Stabilize yaw, 0 or 1",
        }
    }

    MountControl {
        id: 157,
        name: "MOUNT_CONTROL",
        crc_extra: 21,
        description: "Point the camera mount; the input meaning depends on the configured mount mode",
        fields: {
            input_a: i32 = "Pitch in centidegrees, or latitude in 1e7 degrees when GPS targeting",
            input_b: i32 = "Roll in centidegrees, or longitude in 1e7 degrees when GPS targeting",
            input_c: i32 = "Yaw in centidegrees, or altitude in centimeters when GPS targeting",
            target_system: u8 = "System ID",
            target_component: u8 = "Component ID",
            save_position: u8 = "1 to save the current input as the new neutral position",
        }
    }

    MountStatus {
        id: 158,
        name: "MOUNT_STATUS",
        crc_extra: 134,
        description: "Orientation the camera mount is currently pointing at",
        fields: {
            pointing_a: i32 = "Pitch in centidegrees",
            pointing_b: i32 = "Roll in centidegrees",
            pointing_c: i32 = "Yaw in centidegrees",
            target_system: u8 = "System ID",
            target_component: u8 = "Component ID",
        }
    }

    FencePoint {
        id: 160,
        name: "FENCE_POINT",
        crc_extra: 78,
        description: "One geofence vertex; point 0 is the return point",
        fields: {
            lat: f32 = "Latitude of the point in degrees",
            lng: f32 = "Longitude of the point in degrees",
            target_system: u8 = "System ID",
            target_component: u8 = "Component ID",
            idx: u8 = "Point index, first is 1",
            count: u8 = "Total number of points; for polygons the count must be at least 4",
        }
    }

    FenceFetchPoint {
        id: 161,
        name: "FENCE_FETCH_POINT",
        crc_extra: 68,
        description: "Request one geofence vertex",
        fields: {
            target_system: u8 = "System ID",
            target_component: u8 = "Component ID",
            idx: u8 = "Point index, first is 1, 0 for the return point",
        }
    }

    FenceStatus {
        id: 162,
        name: "FENCE_STATUS",
        crc_extra: 189,
        description: "Status of the geofence; sent when fencing is enabled",
        fields: {
            breach_time: u32 = "Time of the last breach in milliseconds since boot",
            breach_count: u16 = "Number of fence breaches",
            breach_status: u8 = "0 inside the fence, 1 outside",
            breach_type: FenceBreach = "Kind of the last breach",
        }
    }

    Ahrs {
        id: 163,
        name: "AHRS",
        crc_extra: 127,
        description: "Status of the DCM attitude estimator",
        fields: {
            omega_ix as "omegaIx": f32 = "X gyro drift estimate in rad/s",
            omega_iy as "omegaIy": f32 = "Y gyro drift estimate in rad/s",
            omega_iz as "omegaIz": f32 = "Z gyro drift estimate in rad/s",
            accel_weight: f32 = "Average accel_weight",
            renorm_val: f32 = "Average renormalization value",
            error_rp: f32 = "Average error roll-pitch value",
            error_yaw: f32 = "Average error yaw value",
        }
    }

    Simstate {
        id: 164,
        name: "SIMSTATE",
        crc_extra: 154,
        description: "Status of the ArduPilot internal simulation state",
        fields: {
            roll: f32 = "Roll angle in rad",
            pitch: f32 = "Pitch angle in rad",
            yaw: f32 = "Yaw angle in rad",
            xacc: f32 = "X acceleration in m/s^2",
            yacc: f32 = "Y acceleration in m/s^2",
            zacc: f32 = "Z acceleration in m/s^2",
            xgyro: f32 = "Angular speed around X axis in rad/s",
            ygyro: f32 = "Angular speed around Y axis in rad/s",
            zgyro: f32 = "Angular speed around Z axis in rad/s",
            lat: i32 = "Latitude in degrees scaled by 1e7",
            lng: i32 = "Longitude in degrees scaled by 1e7",
        }
    }

    Hwstatus {
        id: 165,
        name: "HWSTATUS",
        crc_extra: 21,
        description: "Status of key hardware",
        fields: {
            vcc as "Vcc": u16 = "Board voltage in mV",
            i2cerr as "I2Cerr": u8 = "I2C error count",
        }
    }

    Radio {
        id: 166,
        name: "RADIO",
        crc_extra: 21,
        description: "Radio link status; superseded by RADIO_STATUS",
        fields: {
            rxerrors: u16 = "Count of radio packet receive errors since boot",
            fixed: u16 = "Count of error-corrected packets",
            rssi: u8 = "Local signal strength",
            remrssi: u8 = "Remote signal strength",
            txbuf: u8 = "Remaining free transmitter buffer space in percent",
            noise: u8 = "Local background noise level",
            remnoise: u8 = "Remote background noise level",
        }
    }

    LimitsStatus {
        id: 167,
        name: "LIMITS_STATUS",
        crc_extra: 144,
        description: "State of the AP_Limits flight envelope enforcement",
        fields: {
            last_trigger: u32 = "Time of the last breach in milliseconds since boot",
            last_action: u32 = "Time of the last recovery action in milliseconds since boot",
            last_recovery: u32 = "Time of the last successful recovery in milliseconds since boot",
            last_clear: u32 = "Time of the last all-clear in milliseconds since boot",
            breach_count: u16 = "Number of fence breaches",
            limits_state: LimitsState = "State of the limits machine",
            mods_enabled: LimitModule = "Bitmask of enabled modules",
            mods_required: LimitModule = "Bitmask of required modules",
            mods_triggered: LimitModule = "Bitmask of triggered modules",
        }
    }

    Wind {
        id: 168,
        name: "WIND",
        crc_extra: 1,
        description: "Wind estimate from the vehicle",
        fields: {
            direction: f32 = "Wind direction the wind is coming from, in degrees",
            speed: f32 = "Wind speed in the ground plane, in m/s",
            speed_z: f32 = "Vertical wind speed in m/s",
        }
    }

    Data16 {
        id: 169,
        name: "DATA16",
        crc_extra: 234,
        description: "16 byte encapsulated data block",
        fields: {
            mavtype as "type": u8 = "Data type",
            len: u8 = "Data length in bytes",
            data: [u8; 16] = "Raw data",
        }
    }

    Data32 {
        id: 170,
        name: "DATA32",
        crc_extra: 73,
        description: "32 byte encapsulated data block",
        fields: {
            mavtype as "type": u8 = "Data type",
            len: u8 = "Data length in bytes",
            data: [u8; 32] = "Raw data",
        }
    }

    Data64 {
        id: 171,
        name: "DATA64",
        crc_extra: 181,
        description: "64 byte encapsulated data block",
        fields: {
            mavtype as "type": u8 = "Data type",
            len: u8 = "Data length in bytes",
            data: [u8; 64] = "Raw data",
        }
    }

    Data96 {
        id: 172,
        name: "DATA96",
        crc_extra: 22,
        description: "96 byte encapsulated data block",
        fields: {
            mavtype as "type": u8 = "Data type",
            len: u8 = "Data length in bytes",
            data: [u8; 96] = "Raw data",
        }
    }

    Rangefinder {
        id: 173,
        name: "RANGEFINDER",
        crc_extra: 83,
        description: "Rangefinder reporting",
        fields: {
            distance: f32 = "Distance in meters",
            voltage: f32 = "Raw voltage if available, zero otherwise",
        }
    }

    AirspeedAutocal {
        id: 174,
        name: "AIRSPEED_AUTOCAL",
        crc_extra: 167,
        description: "Airspeed auto-calibration state",
        fields: {
            vx: f32 = "GPS velocity north in m/s",
            vy: f32 = "GPS velocity east in m/s",
            vz: f32 = "GPS velocity down in m/s",
            diff_pressure: f32 = "Differential pressure in Pa",
            eas2tas as "EAS2TAS": f32 = "Estimated to true airspeed ratio",
            ratio: f32 = "Airspeed ratio",
            state_x: f32 = "EKF state x",
            state_y: f32 = "EKF state y",
            state_z: f32 = "EKF state z",
            pax as "Pax": f32 = "EKF Pax",
            pby as "Pby": f32 = "EKF Pby",
            pcz as "Pcz": f32 = "EKF Pcz",
        }
    }

    RallyPoint {
        id: 175,
        name: "RALLY_POINT",
        crc_extra: 138,
        description: "One rally point; the vehicle loiters at rally points during a return",
        fields: {
            lat: i32 = "Latitude of the point in degrees scaled by 1e7",
            lng: i32 = "Longitude of the point in degrees scaled by 1e7",
            alt: i16 = "Transit and loiter altitude relative to home, in meters",
            break_alt: i16 = "Break altitude relative to home; descend below this when heading to a landing",
            land_dir: u16 = "Heading to aim for when landing, in centidegrees",
            target_system: u8 = "System ID",
            target_component: u8 = "Component ID",
            idx: u8 = "Point index, first is 0",
            count: u8 = "Total number of points; for polygons the count must be at least 1",
            flags: RallyFlags = "Configuration flags",
        }
    }

    RallyFetchPoint {
        id: 176,
        name: "RALLY_FETCH_POINT",
        crc_extra: 234,
        description: "Request one rally point",
        fields: {
            target_system: u8 = "System ID",
            target_component: u8 = "Component ID",
            idx: u8 = "Point index, first is 0",
        }
    }

    CompassmotStatus {
        id: 177,
        name: "COMPASSMOT_STATUS",
        crc_extra: 240,
        description: "Status of compass-motor interference calibration",
        fields: {
            current: f32 = "Battery current in A",
            compensation_x as "CompensationX": f32 = "Motor compensation on the X axis",
            compensation_y as "CompensationY": f32 = "Motor compensation on the Y axis",
            compensation_z as "CompensationZ": f32 = "Motor compensation on the Z axis",
            throttle: u16 = "Throttle in percent times 10",
            interference: u16 = "Interference in percent",
        }
    }

    Ahrs2 {
        id: 178,
        name: "AHRS2",
        crc_extra: 47,
        description: "Status of the secondary AHRS filter",
        fields: {
            roll: f32 = "Roll angle in rad",
            pitch: f32 = "Pitch angle in rad",
            yaw: f32 = "Yaw angle in rad",
            altitude: f32 = "Altitude MSL in meters",
            lat: i32 = "Latitude in degrees scaled by 1e7",
            lng: i32 = "Longitude in degrees scaled by 1e7",
        }
    }

    CameraStatus {
        id: 179,
        name: "CAMERA_STATUS",
        crc_extra: 189,
        description: "Camera event",
        fields: {
            time_usec: u64 = "Image timestamp in microseconds since epoch, according to the camera clock",
            p1: f32 = "Parameter 1, meaning depends on the event",
            p2: f32 = "Parameter 2, meaning depends on the event",
            p3: f32 = "Parameter 3, meaning depends on the event",
            p4: f32 = "Parameter 4, meaning depends on the event",
            img_idx: u16 = "Image index",
            target_system: u8 = "System ID",
            cam_idx: u8 = "Camera ID",
            event_id: CameraStatusTypes = "Kind of event",
        }
    }

    CameraFeedback {
        id: 180,
        name: "CAMERA_FEEDBACK",
        crc_extra: 52,
        description: "Camera capture feedback",
        fields: {
            time_usec: u64 = "Image timestamp in microseconds since epoch; the bootup time if no CCB detection",
            lat: i32 = "Latitude in degrees scaled by 1e7 where the image was taken",
            lng: i32 = "Longitude in degrees scaled by 1e7 where the image was taken",
            alt_msl: f32 = "Altitude MSL in meters",
            alt_rel: f32 = "Altitude relative to home in meters",
            roll: f32 = "Camera roll angle in degrees; earth frame, NED convention",
            pitch: f32 = "Camera pitch angle in degrees; earth frame, NED convention",
            yaw: f32 = "Camera yaw in degrees; earth frame, NED convention",
            foc_len: f32 = "Focal length in mm",
            img_idx: u16 = "Image index",
            target_system: u8 = "System ID",
            cam_idx: u8 = "Camera ID",
            flags: CameraFeedbackFlags = "Feedback flags",
        }
    }

    Battery2 {
        id: 181,
        name: "BATTERY2",
        crc_extra: 174,
        description: "State of the second battery; deprecated in favor of BATTERY_STATUS",
        fields: {
            voltage: u16 = "Voltage in mV",
            current_battery: i16 = "Battery current in 10 mA units; -1 if not measured",
        }
    }

    Ahrs3 {
        id: 182,
        name: "AHRS3",
        crc_extra: 229,
        description: "Status of the tertiary AHRS filter",
        fields: {
            roll: f32 = "Roll angle in rad",
            pitch: f32 = "Pitch angle in rad",
            yaw: f32 = "Yaw angle in rad",
            altitude: f32 = "Altitude MSL in meters",
            lat: i32 = "Latitude in degrees scaled by 1e7",
            lng: i32 = "Longitude in degrees scaled by 1e7",
            v1: f32 = "Test variable 1",
            v2: f32 = "Test variable 2",
            v3: f32 = "Test variable 3",
            v4: f32 = "Test variable 4",
        }
    }

    AutopilotVersionRequest {
        id: 183,
        name: "AUTOPILOT_VERSION_REQUEST",
        crc_extra: 85,
        description: "Request the autopilot version; answered by AUTOPILOT_VERSION",
        fields: {
            target_system: u8 = "System ID",
            target_component: u8 = "Component ID",
        }
    }

    RemoteLogDataBlock {
        id: 184,
        name: "REMOTE_LOG_DATA_BLOCK",
        crc_extra: 159,
        description: "One block of dataflash log data sent to a companion for remote logging",
        fields: {
            seqno: MavRemoteLogDataBlockCommands = "Log data block sequence number; the top values carry start and stop commands",
            target_system: u8 = "System ID",
            target_component: u8 = "Component ID",
            data: [u8; 200] = "Log data block",
        }
    }

    RemoteLogBlockStatus {
        id: 185,
        name: "REMOTE_LOG_BLOCK_STATUS",
        crc_extra: 186,
        description: "Companion acknowledgement of a remote log data block",
        fields: {
            seqno: u32 = "Log data block sequence number",
            target_system: u8 = "System ID",
            target_component: u8 = "Component ID",
            status: MavRemoteLogDataBlockStatuses = "Block reception status",
        }
    }

    LedControl {
        id: 186,
        name: "LED_CONTROL",
        crc_extra: 72,
        description: "Control vehicle LEDs",
        fields: {
            target_system: u8 = "System ID",
            target_component: u8 = "Component ID",
            instance: u8 = "Instance, 0 for the first LED, 255 for all",
            pattern: LedControlPattern = "Pattern to apply",
            custom_len: u8 = "Custom byte length",
            custom_bytes: [u8; 24] = "Custom bytes; interpretation depends on the pattern",
        }
    }

    MagCalProgress {
        id: 191,
        name: "MAG_CAL_PROGRESS",
        crc_extra: 92,
        description: "Progress of an onboard compass calibration",
        fields: {
            direction_x: f32 = "Body frame direction vector X for display",
            direction_y: f32 = "Body frame direction vector Y for display",
            direction_z: f32 = "Body frame direction vector Z for display",
            compass_id: u8 = "Compass being calibrated",
            cal_mask: u8 = "Bitmask of compasses being calibrated",
            cal_status: MagCalStatus = "Calibration status",
            attempt: u8 = "Attempt number",
            completion_pct: u8 = "Completion in percent",
            completion_mask: [u8; 10] = "Bitmask of sphere sections; see the ArduPilot documentation",
        }
    }

    MagCalReport {
        id: 192,
        name: "MAG_CAL_REPORT",
        crc_extra: 36,
        description: "Result of an onboard compass calibration",
        fields: {
            fitness: f32 = "RMS milligauss residual of the fit",
            ofs_x: f32 = "X offset",
            ofs_y: f32 = "Y offset",
            ofs_z: f32 = "Z offset",
            diag_x: f32 = "X diagonal of the soft-iron matrix",
            diag_y: f32 = "Y diagonal of the soft-iron matrix",
            diag_z: f32 = "Z diagonal of the soft-iron matrix",
            offdiag_x: f32 = "X off-diagonal of the soft-iron matrix",
            offdiag_y: f32 = "Y off-diagonal of the soft-iron matrix",
            offdiag_z: f32 = "Z off-diagonal of the soft-iron matrix",
            compass_id: u8 = "Compass being calibrated",
            cal_mask: u8 = "Bitmask of compasses being calibrated",
            cal_status: MagCalStatus = "Calibration status",
            autosaved: u8 = "0 if the calibration is still pending a save, 1 if automatically saved",
        }
    }

    EkfStatusReport {
        id: 193,
        name: "EKF_STATUS_REPORT",
        crc_extra: 71,
        description: "EKF state estimator health report",
        fields: {
            velocity_variance: f32 = "Velocity variance; below 0.5 is good, above 1 is bad",
            pos_horiz_variance: f32 = "Horizontal position variance",
            pos_vert_variance: f32 = "Vertical position variance",
            compass_variance: f32 = "Compass variance",
            terrain_alt_variance: f32 = "Terrain altitude variance",
            flags: EkfStatusFlags = "Bitmask of healthy estimates",
        }
    }

    PidTuning {
        id: 194,
        name: "PID_TUNING",
        crc_extra: 98,
        description: "PID tuning information for one axis",
        fields: {
            desired: f32 = "Desired rate",
            achieved: f32 = "Achieved rate",
            ff as "FF": f32 = "Feed-forward component",
            p as "P": f32 = "Proportional component",
            i as "I": f32 = "Integral component",
            d as "D": f32 = "Derivative component",
            axis: PidTuningAxis = "Axis the tuning values apply to",
        }
    }

    GimbalReport {
        id: 200,
        name: "GIMBAL_REPORT",
        crc_extra: 134,
        description: "Gimbal state report sent at a high rate",
        fields: {
            delta_time: f32 = "Time since last update in seconds",
            delta_angle_x: f32 = "Delta angle X in radians",
            delta_angle_y: f32 = "Delta angle Y in radians",
            delta_angle_z: f32 = "Delta angle Z in radians",
            delta_velocity_x: f32 = "Delta velocity X in m/s",
            delta_velocity_y: f32 = "Delta velocity Y in m/s",
            delta_velocity_z: f32 = "Delta velocity Z in m/s",
            joint_roll: f32 = "Joint roll in radians",
            joint_el: f32 = "Joint elevation in radians",
            joint_az: f32 = "Joint azimuth in radians",
            target_system: u8 = "System ID",
            target_component: u8 = "Component ID",
        }
    }

    GimbalControl {
        id: 201,
        name: "GIMBAL_CONTROL",
        crc_extra: 205,
        description: "Gimbal rate demand",
        fields: {
            demanded_rate_x: f32 = "Demanded angular rate X in rad/s",
            demanded_rate_y: f32 = "Demanded angular rate Y in rad/s",
            demanded_rate_z: f32 = "Demanded angular rate Z in rad/s",
            target_system: u8 = "System ID",
            target_component: u8 = "Component ID",
        }
    }

    GimbalTorqueCmdReport {
        id: 214,
        name: "GIMBAL_TORQUE_CMD_REPORT",
        crc_extra: 69,
        description: "Gimbal torque commands, 100 percent is 0x6C0",
        fields: {
            rl_torque_cmd: i16 = "Roll torque command",
            el_torque_cmd: i16 = "Elevation torque command",
            az_torque_cmd: i16 = "Azimuth torque command",
            target_system: u8 = "System ID",
            target_component: u8 = "Component ID",
        }
    }

    GoproHeartbeat {
        id: 215,
        name: "GOPRO_HEARTBEAT",
        crc_extra: 101,
        description: "Heartbeat from a gimbal-attached GoPro, sent at 1 Hz",
        fields: {
            status: GoproHeartbeatStatus = "Connection status",
            capture_mode: GoproCaptureMode = "Current capture mode",
            flags: GoproHeartbeatFlags = "Additional status flags",
        }
    }

    GoproGetRequest {
        id: 216,
        name: "GOPRO_GET_REQUEST",
        crc_extra: 50,
        description: "Request a GoPro setting",
        fields: {
            target_system: u8 = "System ID",
            target_component: u8 = "Component ID",
            cmd_id: GoproCommand = "Setting to read",
        }
    }

    GoproGetResponse {
        id: 217,
        name: "GOPRO_GET_RESPONSE",
        crc_extra: 202,
        description: "Response to a GOPRO_GET_REQUEST",
        fields: {
            cmd_id: GoproCommand = "Setting that was read",
            status: GoproRequestStatus = "Read status",
            value: [u8; 4] = "Setting value",
        }
    }

    GoproSetRequest {
        id: 218,
        name: "GOPRO_SET_REQUEST",
        crc_extra: 17,
        description: "Write a GoPro setting",
        fields: {
            target_system: u8 = "System ID",
            target_component: u8 = "Component ID",
            cmd_id: GoproCommand = "Setting to write",
            value: [u8; 4] = "Setting value",
        }
    }

    GoproSetResponse {
        id: 219,
        name: "GOPRO_SET_RESPONSE",
        crc_extra: 162,
        description: "Response to a GOPRO_SET_REQUEST",
        fields: {
            cmd_id: GoproCommand = "Setting that was written",
            status: GoproRequestStatus = "Write status",
        }
    }

    Rpm {
        id: 226,
        name: "RPM",
        crc_extra: 207,
        description: "RPM sensor output",
        fields: {
            rpm1: f32 = "RPM sensor 1",
            rpm2: f32 = "RPM sensor 2",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::messages::{from_payload, Message};

    #[test]
    fn test_encoded_lengths() {
        assert_eq!(SensorOffsets::ENCODED_LEN, 42);
        assert_eq!(SetMagOffsets::ENCODED_LEN, 8);
        assert_eq!(Meminfo::ENCODED_LEN, 4);
        assert_eq!(ApAdc::ENCODED_LEN, 12);
        assert_eq!(DigicamConfigure::ENCODED_LEN, 15);
        assert_eq!(DigicamControl::ENCODED_LEN, 13);
        assert_eq!(MountConfigure::ENCODED_LEN, 6);
        assert_eq!(MountControl::ENCODED_LEN, 15);
        assert_eq!(MountStatus::ENCODED_LEN, 14);
        assert_eq!(FencePoint::ENCODED_LEN, 12);
        assert_eq!(FenceFetchPoint::ENCODED_LEN, 3);
        assert_eq!(FenceStatus::ENCODED_LEN, 8);
        assert_eq!(Ahrs::ENCODED_LEN, 28);
        assert_eq!(Simstate::ENCODED_LEN, 44);
        assert_eq!(Hwstatus::ENCODED_LEN, 3);
        assert_eq!(Radio::ENCODED_LEN, 9);
        assert_eq!(LimitsStatus::ENCODED_LEN, 22);
        assert_eq!(Wind::ENCODED_LEN, 12);
        assert_eq!(Data16::ENCODED_LEN, 18);
        assert_eq!(Data32::ENCODED_LEN, 34);
        assert_eq!(Data64::ENCODED_LEN, 66);
        assert_eq!(Data96::ENCODED_LEN, 98);
        assert_eq!(Rangefinder::ENCODED_LEN, 8);
        assert_eq!(AirspeedAutocal::ENCODED_LEN, 48);
        assert_eq!(RallyPoint::ENCODED_LEN, 19);
        assert_eq!(RallyFetchPoint::ENCODED_LEN, 3);
        assert_eq!(CompassmotStatus::ENCODED_LEN, 20);
        assert_eq!(Ahrs2::ENCODED_LEN, 24);
        assert_eq!(CameraStatus::ENCODED_LEN, 29);
        assert_eq!(CameraFeedback::ENCODED_LEN, 45);
        assert_eq!(Battery2::ENCODED_LEN, 4);
        assert_eq!(Ahrs3::ENCODED_LEN, 40);
        assert_eq!(AutopilotVersionRequest::ENCODED_LEN, 2);
        assert_eq!(RemoteLogDataBlock::ENCODED_LEN, 206);
        assert_eq!(RemoteLogBlockStatus::ENCODED_LEN, 7);
        assert_eq!(LedControl::ENCODED_LEN, 29);
        assert_eq!(MagCalProgress::ENCODED_LEN, 27);
        assert_eq!(MagCalReport::ENCODED_LEN, 44);
        assert_eq!(EkfStatusReport::ENCODED_LEN, 22);
        assert_eq!(PidTuning::ENCODED_LEN, 25);
        assert_eq!(GimbalReport::ENCODED_LEN, 42);
        assert_eq!(GimbalControl::ENCODED_LEN, 14);
        assert_eq!(GimbalTorqueCmdReport::ENCODED_LEN, 8);
        assert_eq!(GoproHeartbeat::ENCODED_LEN, 3);
        assert_eq!(GoproGetRequest::ENCODED_LEN, 3);
        assert_eq!(GoproGetResponse::ENCODED_LEN, 6);
        assert_eq!(GoproSetRequest::ENCODED_LEN, 7);
        assert_eq!(GoproSetResponse::ENCODED_LEN, 2);
        assert_eq!(Rpm::ENCODED_LEN, 8);
    }

    #[test]
    fn test_hwstatus_wire_names() {
        let status = Hwstatus { vcc: 5000, i2cerr: 3 };
        let payload = status.to_payload();
        assert_eq!(&payload, &[0x88, 0x13, 3]);
        assert!(Hwstatus::SPEC.field("Vcc").is_some());
        assert!(Hwstatus::SPEC.field("I2Cerr").is_some());
        assert!(Hwstatus::SPEC.field("vcc").is_none());
    }

    #[test]
    fn test_remote_log_block_start_command() {
        let mut block = RemoteLogDataBlock::default();
        block.seqno = MavRemoteLogDataBlockCommands::MAV_REMOTE_LOG_DATA_BLOCK_START;
        block.target_system = 1;
        let payload = block.to_payload();
        assert_eq!(&payload[..4], &2_147_483_646u32.to_le_bytes());
        let back: RemoteLogDataBlock = from_payload(&payload).unwrap();
        assert_eq!(back.seqno.raw(), 2_147_483_646);
    }

    #[test]
    fn test_pid_tuning_single_letter_wire_names() {
        let names: Vec<&str> = PidTuning::SPEC.fields.iter().map(|f| f.name).collect();
        assert_eq!(names, ["desired", "achieved", "FF", "P", "I", "D", "axis"]);
        let tuning = PidTuning {
            desired: 1.5,
            achieved: 1.2,
            ff: 0.1,
            p: 0.2,
            i: 0.3,
            d: 0.4,
            axis: PidTuningAxis::PID_TUNING_ROLL,
        };
        let back: PidTuning = from_payload(&tuning.to_payload()).unwrap();
        assert_eq!(back, tuning);
    }

    #[test]
    fn test_limits_status_module_masks() {
        let mut limits = LimitsStatus::default();
        limits.limits_state = LimitsState::LIMITS_TRIGGERED;
        limits.mods_enabled = LimitModule::new(0b011);
        limits.mods_triggered = LimitModule::LIMIT_GPSLOCK;
        let back: LimitsStatus = from_payload(&limits.to_payload()).unwrap();
        assert_eq!(back.mods_enabled.raw(), 0b011);
        assert_eq!(back.mods_triggered, LimitModule::LIMIT_GPSLOCK);
    }

    #[test]
    fn test_gopro_get_response_value_bytes() {
        let response = GoproGetResponse {
            cmd_id: GoproCommand::GOPRO_COMMAND_SHUTTER,
            status: GoproRequestStatus::GOPRO_REQUEST_SUCCESS,
            value: [1, 0, 0, 0],
        };
        let back: GoproGetResponse = from_payload(&response.to_payload()).unwrap();
        assert_eq!(back, response);
    }
}
