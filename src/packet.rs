//! DDC/CI frame encoding and validation.
//!
//! A full frame is `[destination, source, length, command, payload.., checksum]`.
//! Requests are addressed to the display (0x6E) from the host (0x51) and are
//! written without their first byte, since the I2C slave address carries it.
//! Replies are read back starting at the display's source byte; the host
//! destination (0x6F) is implicit and is restored with [`response_frame`]
//! before validation.

use std::iter;
use crate::commands::{self, Command, FeatureCode};
use crate::ErrorCode;

/// Destination byte of frames sent to the display (I2C address 0x37 shifted).
pub const DISPLAY_ADDRESS: u8 = 0x6e;

/// Destination byte of frames sent to the host.
pub const HOST_ADDRESS: u8 = 0x6f;

/// Source byte of frames sent by the host.
pub const HOST_SOURCE: u8 = 0x51;

/// Substituted for the destination byte when checksumming frames addressed to the host.
pub const VIRTUAL_HOST_ADDRESS: u8 = 0x50;

/// Largest data length (command byte included) a frame may declare.
pub const MAX_DATA_LEN: usize = 35;

/// Header bytes preceding the data: destination, source and length.
pub const HEADER_LEN: usize = 3;

/// XOR of all bytes.
pub fn checksum<I: IntoIterator<Item=u8>>(iter: I) -> u8 {
    iter.into_iter().fold(0u8, |sum, v| sum ^ v)
}

/// Checksum of a frame prefix, applying the virtual host address for frames
/// whose destination is the host.
pub fn frame_checksum(frame: &[u8]) -> u8 {
    match frame.split_first() {
        Some((&HOST_ADDRESS, rest)) => checksum(iter::once(VIRTUAL_HOST_ADDRESS).chain(rest.iter().cloned())),
        _ => checksum(frame.iter().cloned()),
    }
}

/// A DDC/CI frame.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DdcPacket {
    /// Destination address byte
    pub destination: u8,
    /// Source address byte
    pub source: u8,
    /// Command id, the first data byte
    pub command: u8,
    /// Bytes after the command id
    pub payload: Vec<u8>,
}

impl DdcPacket {
    /// A host to display frame.
    pub fn request(command: u8, payload: &[u8]) -> Self {
        DdcPacket {
            destination: DISPLAY_ADDRESS,
            source: HOST_SOURCE,
            command: command,
            payload: payload.to_vec(),
        }
    }

    /// A display to host frame.
    pub fn reply(command: u8, payload: &[u8]) -> Self {
        DdcPacket {
            destination: HOST_ADDRESS,
            source: DISPLAY_ADDRESS,
            command: command,
            payload: payload.to_vec(),
        }
    }

    /// Length byte: bit 7 set, data length in the low bits.
    pub fn length_byte(&self) -> u8 {
        0x80 | (1 + self.payload.len()) as u8
    }

    /// Serialize with the checksum appended.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut frame = Vec::with_capacity(HEADER_LEN + 2 + self.payload.len());
        frame.push(self.destination);
        frame.push(self.source);
        frame.push(self.length_byte());
        frame.push(self.command);
        frame.extend_from_slice(&self.payload);
        let sum = frame_checksum(&frame);
        frame.push(sum);
        frame
    }
}

/// Builds a complete request frame around encoded command data.
pub fn encode_request(data: &[u8]) -> Result<Vec<u8>, ErrorCode> {
    let (&command, payload) = data.split_first().ok_or(ErrorCode::InvalidData)?;
    if data.len() > MAX_DATA_LEN {
        return Err(ErrorCode::LengthMismatch { declared: data.len(), actual: MAX_DATA_LEN })
    }

    Ok(DdcPacket::request(command, payload).to_bytes())
}

/// Encodes a typed command into a complete request frame.
pub fn encode_command<C: Command>(command: &C) -> Result<Vec<u8>, ErrorCode> {
    let mut data = [0u8; MAX_DATA_LEN + 1];
    let len = command.encode(&mut data)?;
    encode_request(&data[..len])
}

/// Get VCP Feature request: `6E 51 82 01 code chk`.
pub fn encode_get_vcp(code: FeatureCode) -> Vec<u8> {
    DdcPacket::request(commands::GET_VCP_FEATURE, &[code]).to_bytes()
}

/// Set VCP Feature request: `6E 51 84 03 code hi lo chk`.
pub fn encode_set_vcp(code: FeatureCode, value: u16) -> Vec<u8> {
    DdcPacket::request(commands::SET_VCP_FEATURE, &[code, (value >> 8) as u8, value as u8]).to_bytes()
}

/// Capabilities Request at the given offset.
pub fn encode_capabilities_request(offset: u16) -> Vec<u8> {
    DdcPacket::request(commands::CAPABILITIES_REQUEST, &[(offset >> 8) as u8, offset as u8]).to_bytes()
}

/// Table Read request for a feature at the given offset.
pub fn encode_table_read_request(code: FeatureCode, offset: u16) -> Vec<u8> {
    DdcPacket::request(commands::TABLE_READ_REQUEST, &[code, (offset >> 8) as u8, offset as u8]).to_bytes()
}

/// Rebuilds the full reply frame from the bytes read off the bus.
pub fn response_frame(read: &[u8]) -> Vec<u8> {
    let mut frame = Vec::with_capacity(read.len() + 1);
    frame.push(HOST_ADDRESS);
    frame.extend_from_slice(read);
    frame
}

/// Validates a frame and returns its data (command byte followed by payload).
///
/// Checks the destination byte, the declared length against the bytes
/// present, the checksum and finally the command id. Bytes past the checksum
/// are ignored since reads fill a fixed-size buffer.
pub fn validate_frame(frame: &[u8], destination: u8, expected_command: u8) -> Result<&[u8], ErrorCode> {
    if frame.len() < HEADER_LEN + 1 {
        return Err(ErrorCode::LengthMismatch { declared: 0, actual: frame.len().saturating_sub(HEADER_LEN + 1) })
    }

    if frame[0] != destination {
        return Err(ErrorCode::InvalidEnvelope(frame[0]))
    }

    let len = (frame[2] & 0x7f) as usize;
    if len > MAX_DATA_LEN || frame.len() < HEADER_LEN + len + 1 {
        return Err(ErrorCode::LengthMismatch {
            declared: len,
            actual: frame.len() - HEADER_LEN - 1,
        })
    }

    let expected = frame_checksum(&frame[..HEADER_LEN + len]);
    let actual = frame[HEADER_LEN + len];
    if expected != actual {
        return Err(ErrorCode::ChecksumMismatch { expected: expected, actual: actual })
    }

    let data = &frame[HEADER_LEN..HEADER_LEN + len];
    match data.first() {
        None => Err(ErrorCode::NullResponse),
        Some(&command) if command != expected_command =>
            Err(ErrorCode::UnexpectedCommand { expected: expected_command, actual: command }),
        Some(_) => Ok(data),
    }
}

/// Validates a frame sent by the display to the host.
pub fn validate_response(frame: &[u8], expected_command: u8) -> Result<&[u8], ErrorCode> {
    validate_frame(frame, HOST_ADDRESS, expected_command)
}

/// Validates a frame sent by the host to the display.
pub fn validate_request(frame: &[u8], expected_command: u8) -> Result<&[u8], ErrorCode> {
    validate_frame(frame, DISPLAY_ADDRESS, expected_command)
}

/// Validates the raw bytes read from the bus and returns the reply data.
pub fn decode_read(read: &[u8], expected_command: u8) -> Result<Vec<u8>, ErrorCode> {
    if read.iter().all(|&b| b == 0) {
        return Err(ErrorCode::ReadAllZero)
    }

    let frame = response_frame(read);
    validate_response(&frame, expected_command).map(|data| data.to_vec())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn get_vcp_layout() {
        let frame = encode_get_vcp(0x10);
        assert_eq!(&frame[..5], &[0x6e, 0x51, 0x82, 0x01, 0x10]);
        assert_eq!(frame[5], 0x6e ^ 0x51 ^ 0x82 ^ 0x01 ^ 0x10);
    }

    #[test]
    fn set_vcp_layout() {
        let frame = encode_set_vcp(0x10, 0x1234);
        assert_eq!(&frame[..7], &[0x6e, 0x51, 0x84, 0x03, 0x10, 0x12, 0x34]);
        assert_eq!(frame.len(), 8);
        assert_eq!(checksum(frame.iter().cloned()), 0);
    }

    #[test]
    fn typed_commands_match() {
        assert_eq!(encode_command(&commands::GetVcpFeature::new(0x60)).unwrap(), encode_get_vcp(0x60));
        assert_eq!(encode_command(&commands::TableRead::new(0x73, 0x20)).unwrap(), encode_table_read_request(0x73, 0x20));
        assert_eq!(encode_command(&commands::CapabilitiesRequest::new(0x40)).unwrap(), encode_capabilities_request(0x40));
    }

    #[test]
    fn known_reply_checksums() {
        // host-addressed checksums use 0x50 in place of 0x6f
        assert_eq!(frame_checksum(&[0x6f, 0x6e, 0x82, 0xa1, 0x00]), 0x1d);
        assert_eq!(frame_checksum(&[0x6f, 0x6e, 0x80]), 0xbe);
        assert_eq!(frame_checksum(&[0x6e, 0x51, 0x81, 0xb1]), 0x0f);
    }

    #[test]
    fn requests_round_trip() {
        let frames = [
            (encode_get_vcp(0xdf), commands::GET_VCP_FEATURE),
            (encode_set_vcp(0x60, 0x0f), commands::SET_VCP_FEATURE),
            (encode_capabilities_request(0x0120), commands::CAPABILITIES_REQUEST),
            (encode_table_read_request(0x73, 0), commands::TABLE_READ_REQUEST),
        ];
        for &(ref frame, command) in frames.iter() {
            let data = validate_request(frame, command).unwrap();
            assert_eq!(data[0], command);
            assert_eq!(data.len(), (frame[2] & 0x7f) as usize);
        }
    }

    #[test]
    fn single_byte_flip_is_checksum_mismatch() {
        let frames = vec![
            encode_get_vcp(0x10),
            encode_set_vcp(0x10, 0x0102),
            encode_capabilities_request(0x20),
            encode_table_read_request(0x73, 0x40),
        ];
        for frame in frames {
            let command = frame[3];
            for idx in 4..frame.len() - 1 {
                for bit in 0..8 {
                    let mut corrupt = frame.clone();
                    corrupt[idx] ^= 1 << bit;
                    match validate_request(&corrupt, command) {
                        Err(ErrorCode::ChecksumMismatch { .. }) => (),
                        other => panic!("byte {} bit {}: {:?}", idx, bit, other),
                    }
                }
            }
        }
    }

    #[test]
    fn reply_round_trip() {
        let reply = DdcPacket::reply(0x02, &[0x00, 0x10, 0x00, 0x00, 0x64, 0x00, 0x32]).to_bytes();
        let data = decode_read(&reply[1..], 0x02).unwrap();
        assert_eq!(data, vec![0x02, 0x00, 0x10, 0x00, 0x00, 0x64, 0x00, 0x32]);

        let mut padded = reply[1..].to_vec();
        padded.extend_from_slice(&[0xff; 4]);
        assert!(decode_read(&padded, 0x02).is_ok());
    }

    #[test]
    fn reply_errors() {
        let reply = DdcPacket::reply(0x02, &[0x00, 0x10, 0x00, 0x00, 0x64, 0x00, 0x32]).to_bytes();
        assert_eq!(decode_read(&reply[1..], 0xe4), Err(ErrorCode::UnexpectedCommand { expected: 0xe4, actual: 0x02 }));
        assert_eq!(decode_read(&[0; 11], 0x02), Err(ErrorCode::ReadAllZero));
        assert_eq!(decode_read(&reply[1..5], 0x02), Err(ErrorCode::LengthMismatch { declared: 8, actual: 1 }));

        let mut wrong_source = reply.clone();
        wrong_source[0] = 0x6e;
        assert_eq!(validate_response(&wrong_source, 0x02), Err(ErrorCode::InvalidEnvelope(0x6e)));
    }

    #[test]
    fn null_message() {
        assert_eq!(decode_read(&[0x6e, 0x80, 0xbe], 0x02), Err(ErrorCode::NullResponse));
    }
}
