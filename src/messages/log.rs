// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Onboard log transfer, serial tunneling, and bulk data messages.

use super::macros::mav_message;
use crate::enums::{SerialControlDev, SerialControlFlag};

mav_message! {
    LogRequestList {
        id: 117,
        name: "LOG_REQUEST_LIST",
        crc_extra: 128,
        description: "Request a list of available onboard logs",
        fields: {
            start: u16 = "First log ID, 0 for the first available",
            end: u16 = "Last log ID, 0xFFFF for the last available",
            target_system: u8 = "System ID",
            target_component: u8 = "Component ID",
        }
    }

    LogEntry {
        id: 118,
        name: "LOG_ENTRY",
        crc_extra: 56,
        description: "Reply to LOG_REQUEST_LIST with one log entry",
        fields: {
            time_utc: u32 = "UTC timestamp of the log in seconds since epoch, 0 if not available",
            size: u32 = "Size of the log in bytes",
            id: u16 = "Log ID",
            num_logs: u16 = "Total number of logs",
            last_log_num: u16 = "ID of the highest numbered log",
        }
    }

    LogRequestData {
        id: 119,
        name: "LOG_REQUEST_DATA",
        crc_extra: 116,
        description: "Request a block of log data",
        fields: {
            ofs: u32 = "Offset into the log",
            count: u32 = "Number of bytes requested",
            id: u16 = "Log ID from LOG_ENTRY",
            target_system: u8 = "System ID",
            target_component: u8 = "Component ID",
        }
    }

    LogData {
        id: 120,
        name: "LOG_DATA",
        crc_extra: 134,
        description: "Reply to LOG_REQUEST_DATA with one block of log data",
        fields: {
            ofs: u32 = "Offset into the log",
            id: u16 = "Log ID from LOG_ENTRY",
            count: u8 = "Number of valid bytes in the data block",
            data: [u8; 90] = "Log data block",
        }
    }

    LogErase {
        id: 121,
        name: "LOG_ERASE",
        crc_extra: 237,
        description: "Erase all onboard logs",
        fields: {
            target_system: u8 = "System ID",
            target_component: u8 = "Component ID",
        }
    }

    LogRequestEnd {
        id: 122,
        name: "LOG_REQUEST_END",
        crc_extra: 203,
        description: "Stop an in-progress log transfer",
        fields: {
            target_system: u8 = "System ID",
            target_component: u8 = "Component ID",
        }
    }

    SerialControl {
        id: 126,
        name: "SERIAL_CONTROL",
        crc_extra: 220,
        description: "Control and tunnel an onboard serial port, for example to talk to a GPS through the autopilot",
        fields: {
            baudrate: u32 = "Baudrate of the serial port, 0 to leave unchanged",
            timeout: u16 = "Timeout in milliseconds for replies on this port",
            device: SerialControlDev = "Serial device to operate on",
            flags: SerialControlFlag = "Transaction flags such as reply, respond, and exclusive",
            count: u8 = "Number of valid bytes in the data field",
            data: [u8; 70] = "Serial data",
        }
    }

    DataTransmissionHandshake {
        id: 130,
        name: "DATA_TRANSMISSION_HANDSHAKE",
        crc_extra: 29,
        description: "Handshake for the image transmission protocol carried by ENCAPSULATED_DATA",
        fields: {
            size: u32 = "Total size of the transferred data in bytes",
            width: u16 = "Width of the transferred image",
            height: u16 = "Height of the transferred image",
            packets: u16 = "Number of packets being sent",
            mavtype as "type": u8 = "Type of requested or acknowledged data; 0 handshake, 1 raw image, 2 JPEG, 3 PNG",
            payload: u8 = "Payload size per packet in bytes, 253 by default",
            jpg_quality: u8 = "JPEG quality 1..100",
        }
    }

    EncapsulatedData {
        id: 131,
        name: "ENCAPSULATED_DATA",
        crc_extra: 223,
        description: "One fragment of a data transmission started by DATA_TRANSMISSION_HANDSHAKE",
        fields: {
            seqnr: u16 = "Sequence number, starting from 0",
            data: [u8; 253] = "Image data fragment",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::messages::{from_payload, Message};

    #[test]
    fn test_encoded_lengths() {
        assert_eq!(LogRequestList::ENCODED_LEN, 6);
        assert_eq!(LogEntry::ENCODED_LEN, 14);
        assert_eq!(LogRequestData::ENCODED_LEN, 12);
        assert_eq!(LogData::ENCODED_LEN, 97);
        assert_eq!(LogErase::ENCODED_LEN, 2);
        assert_eq!(LogRequestEnd::ENCODED_LEN, 2);
        assert_eq!(SerialControl::ENCODED_LEN, 79);
        assert_eq!(DataTransmissionHandshake::ENCODED_LEN, 13);
        assert_eq!(EncapsulatedData::ENCODED_LEN, 255);
    }

    #[test]
    fn test_log_data_partial_block() {
        let mut block = LogData::default();
        block.ofs = 4096;
        block.id = 7;
        block.count = 3;
        block.data[0] = 0xDE;
        block.data[1] = 0xAD;
        block.data[2] = 0xBE;
        let back: LogData = from_payload(&block.to_payload()).unwrap();
        assert_eq!(back.count, 3);
        assert_eq!(&back.data[..3], &[0xDE, 0xAD, 0xBE]);
        assert_eq!(back.data[89], 0);
    }

    #[test]
    fn test_serial_control_flags() {
        let mut control = SerialControl::default();
        control.baudrate = 57_600;
        control.device = SerialControlDev::SERIAL_CONTROL_DEV_GPS1;
        control.flags = SerialControlFlag::SERIAL_CONTROL_FLAG_RESPOND;
        control.count = 2;
        control.data[0] = b'$';
        control.data[1] = b'G';
        let back: SerialControl = from_payload(&control.to_payload()).unwrap();
        assert_eq!(back, control);
    }

    #[test]
    fn test_encapsulated_data_full_fragment() {
        let mut frame = EncapsulatedData::default();
        frame.seqnr = 9;
        for (i, byte) in frame.data.iter_mut().enumerate() {
            *byte = (i % 251) as u8;
        }
        let payload = frame.to_payload();
        assert_eq!(payload.len(), 255);
        let back: EncapsulatedData = from_payload(&payload).unwrap();
        assert_eq!(back.data[252], frame.data[252]);
    }
}
