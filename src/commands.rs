#![allow(missing_docs)]
use std::fmt;
use crate::ErrorCode;

pub const GET_VCP_FEATURE: u8 = 0x01;
pub const VCP_FEATURE_REPLY: u8 = 0x02;
pub const SET_VCP_FEATURE: u8 = 0x03;
pub const GET_TIMING_REPORT: u8 = 0x07;
pub const SAVE_CURRENT_SETTINGS: u8 = 0x0c;
pub const TIMING_REPLY: u8 = 0x4e;
pub const TABLE_READ_REQUEST: u8 = 0xe2;
pub const CAPABILITIES_REPLY: u8 = 0xe3;
pub const TABLE_READ_REPLY: u8 = 0xe4;
pub const TABLE_WRITE: u8 = 0xe7;
pub const CAPABILITIES_REQUEST: u8 = 0xf3;

/// Largest fragment carried by a multi-part reply.
pub const MAX_READ_FRAGMENT: usize = 32;

/// Largest fragment sent in a Table Write.
pub const MAX_WRITE_FRAGMENT: usize = 28;

/// Name of a DDC/CI command or reply opcode.
pub fn command_name(opcode: u8) -> &'static str {
    match opcode {
        GET_VCP_FEATURE => "Get VCP Feature",
        VCP_FEATURE_REPLY => "Get VCP Feature Reply",
        SET_VCP_FEATURE => "Set VCP Feature",
        GET_TIMING_REPORT => "Get Timing Report",
        SAVE_CURRENT_SETTINGS => "Save Current Settings",
        TIMING_REPLY => "Timing Reply",
        TABLE_READ_REQUEST => "Table Read",
        CAPABILITIES_REPLY => "Capabilities Reply",
        TABLE_READ_REPLY => "Table Read Reply",
        TABLE_WRITE => "Table Write",
        CAPABILITIES_REQUEST => "Capabilities Request",
        0xf1 => "Identification Request",
        0xe1 => "Identification Reply",
        0xf5 => "Enable Application Report",
        _ => "Unrecognized command",
    }
}

pub trait Command {
    type Ok: CommandResult;
    const MIN_LEN: usize;
    const MAX_LEN: usize;
    const DELAY_RESPONSE_MS: u64;
    const DELAY_COMMAND_MS: u64;

    fn len(&self) -> usize;

    fn encode(&self, data: &mut [u8]) -> Result<usize, ErrorCode>;
}

pub trait CommandResult: Sized {
    /// Reply opcode, ignored for commands without a reply.
    const OPCODE: u8;
    const MAX_LEN: usize;
    fn decode(data: &[u8]) -> Result<Self, ErrorCode>;
}

pub type FeatureCode = u8;

fn check_len(data: &[u8], len: usize) -> Result<(), ErrorCode> {
    if data.len() < len {
        Err(ErrorCode::LengthMismatch { declared: len, actual: data.len() })
    } else {
        Ok(())
    }
}

#[derive(Copy, Clone, Debug)]
pub struct GetVcpFeature {
    pub code: FeatureCode,
}

impl GetVcpFeature {
    pub fn new(code: FeatureCode) -> Self {
        GetVcpFeature {
            code: code,
        }
    }
}

impl Command for GetVcpFeature {
    type Ok = VcpReply;
    const MIN_LEN: usize = 2;
    const MAX_LEN: usize = 2;
    const DELAY_RESPONSE_MS: u64 = 40;
    const DELAY_COMMAND_MS: u64 = 50;

    fn len(&self) -> usize { 2 }

    fn encode(&self, data: &mut [u8]) -> Result<usize, ErrorCode> {
        check_len(data, 2)?;
        data[0] = GET_VCP_FEATURE;
        data[1] = self.code;

        Ok(2)
    }
}

#[derive(Copy, Clone, Debug)]
pub struct SetVcpFeature {
    pub code: FeatureCode,
    pub value: u16,
}

impl SetVcpFeature {
    pub fn new(code: FeatureCode, value: u16) -> Self {
        SetVcpFeature {
            code: code,
            value: value,
        }
    }
}

impl Command for SetVcpFeature {
    type Ok = ();
    const MIN_LEN: usize = 4;
    const MAX_LEN: usize = 4;
    const DELAY_RESPONSE_MS: u64 = 0;
    const DELAY_COMMAND_MS: u64 = 50;

    fn len(&self) -> usize { 4 }

    fn encode(&self, data: &mut [u8]) -> Result<usize, ErrorCode> {
        check_len(data, 4)?;

        data[0] = SET_VCP_FEATURE;
        data[1] = self.code;
        data[2] = (self.value >> 8) as _;
        data[3] = self.value as _;

        Ok(4)
    }
}

/// A VCP feature value.
#[derive(Clone, PartialEq, Eq, Hash)]
pub enum VcpValue {
    /// Bytes of a table-type feature
    Table(Vec<u8>),
    /// Maximum and current value bytes of a continuous or non-continuous feature
    NonTable {
        mh: u8,
        ml: u8,
        sh: u8,
        sl: u8,
    },
}

impl VcpValue {
    /// Current value, for non-table features.
    pub fn value(&self) -> Option<u16> {
        match *self {
            VcpValue::NonTable { sh, sl, .. } => Some(((sh as u16) << 8) | sl as u16),
            VcpValue::Table(_) => None,
        }
    }

    /// Maximum value, for non-table features.
    pub fn maximum(&self) -> Option<u16> {
        match *self {
            VcpValue::NonTable { mh, ml, .. } => Some(((mh as u16) << 8) | ml as u16),
            VcpValue::Table(_) => None,
        }
    }

    pub fn bytes(&self) -> Option<&[u8]> {
        match *self {
            VcpValue::Table(ref bytes) => Some(bytes),
            VcpValue::NonTable { .. } => None,
        }
    }

    pub fn is_table(&self) -> bool {
        match *self {
            VcpValue::Table(_) => true,
            VcpValue::NonTable { .. } => false,
        }
    }
}

impl fmt::Debug for VcpValue {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            VcpValue::Table(ref bytes) => f.debug_tuple("Table")
                .field(bytes)
                .finish(),
            VcpValue::NonTable { mh, ml, sh, sl } => f.debug_struct("NonTable")
                .field("mh", &mh)
                .field("ml", &ml)
                .field("sh", &sh)
                .field("sl", &sl)
                .finish(),
        }
    }
}

/// Decoded Get VCP Feature reply.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct VcpReply {
    pub code: FeatureCode,
    /// VCP type code: 0 set parameter, 1 momentary
    pub kind: u8,
    pub mh: u8,
    pub ml: u8,
    pub sh: u8,
    pub sl: u8,
}

impl VcpReply {
    pub fn value(&self) -> u16 {
        ((self.sh as u16) << 8) | self.sl as u16
    }

    pub fn maximum(&self) -> u16 {
        ((self.mh as u16) << 8) | self.ml as u16
    }
}

impl From<VcpReply> for VcpValue {
    fn from(reply: VcpReply) -> Self {
        VcpValue::NonTable {
            mh: reply.mh,
            ml: reply.ml,
            sh: reply.sh,
            sl: reply.sl,
        }
    }
}

impl fmt::Debug for VcpReply {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("VcpReply")
            .field("code", &self.code)
            .field("maximum", &self.maximum())
            .field("value", &self.value())
            .finish()
    }
}

impl CommandResult for VcpReply {
    const OPCODE: u8 = VCP_FEATURE_REPLY;
    const MAX_LEN: usize = 8;

    fn decode(data: &[u8]) -> Result<Self, ErrorCode> {
        if data.len() != 8 {
            return Err(ErrorCode::LengthMismatch { declared: data.len(), actual: 8 })
        }

        if data[0] != VCP_FEATURE_REPLY {
            return Err(ErrorCode::UnexpectedCommand { expected: VCP_FEATURE_REPLY, actual: data[0] })
        }

        match data[1] {
            0x00 => (), // NoError
            0x01 => return Err(ErrorCode::UnsupportedFeature(data[2])),
            rc => return Err(ErrorCode::Invalid(format!("Unrecognized VCP result code 0x{:02x}", rc))),
        }

        Ok(VcpReply {
            code: data[2],
            kind: data[3],
            mh: data[4],
            ml: data[5],
            sh: data[6],
            sl: data[7],
        })
    }
}

#[derive(Copy, Clone, Debug)]
pub struct SaveCurrentSettings;

impl Command for SaveCurrentSettings {
    type Ok = ();
    const MIN_LEN: usize = 1;
    const MAX_LEN: usize = 1;
    const DELAY_RESPONSE_MS: u64 = 0;
    const DELAY_COMMAND_MS: u64 = 200;

    fn len(&self) -> usize { 1 }

    fn encode(&self, data: &mut [u8]) -> Result<usize, ErrorCode> {
        check_len(data, 1)?;
        data[0] = SAVE_CURRENT_SETTINGS;

        Ok(1)
    }
}

#[derive(Copy, Clone, Debug)]
pub struct TableWrite<'a> {
    pub code: FeatureCode,
    pub offset: u16,
    pub data: &'a [u8],
}

impl<'a> TableWrite<'a> {
    pub fn new(code: FeatureCode, offset: u16, data: &'a [u8]) -> Self {
        TableWrite {
            code: code,
            offset: offset,
            data: data,
        }
    }
}

impl<'a> Command for TableWrite<'a> {
    type Ok = ();
    const MIN_LEN: usize = 4;
    const MAX_LEN: usize = 4 + MAX_WRITE_FRAGMENT;
    const DELAY_RESPONSE_MS: u64 = 0;
    const DELAY_COMMAND_MS: u64 = 50;

    fn len(&self) -> usize { 4 + self.data.len() }

    fn encode(&self, data: &mut [u8]) -> Result<usize, ErrorCode> {
        if self.data.len() > MAX_WRITE_FRAGMENT {
            return Err(ErrorCode::LengthMismatch { declared: self.data.len(), actual: MAX_WRITE_FRAGMENT })
        }
        check_len(data, 4 + self.data.len())?;

        data[0] = TABLE_WRITE;
        data[1] = self.code;
        data[2] = (self.offset >> 8) as _;
        data[3] = self.offset as _;
        data[4..4 + self.data.len()].copy_from_slice(self.data);

        Ok(4 + self.data.len())
    }
}

#[derive(Copy, Clone, Debug)]
pub struct TableRead {
    pub code: FeatureCode,
    pub offset: u16,
}

impl TableRead {
    pub fn new(code: FeatureCode, offset: u16) -> Self {
        TableRead {
            code: code,
            offset: offset,
        }
    }
}

impl Command for TableRead {
    type Ok = TableResponse;
    const MIN_LEN: usize = 4;
    const MAX_LEN: usize = 4;
    const DELAY_RESPONSE_MS: u64 = 40;
    const DELAY_COMMAND_MS: u64 = 50;

    fn len(&self) -> usize { 4 }

    fn encode(&self, data: &mut [u8]) -> Result<usize, ErrorCode> {
        check_len(data, 4)?;

        data[0] = TABLE_READ_REQUEST;
        data[1] = self.code;
        data[2] = (self.offset >> 8) as _;
        data[3] = self.offset as _;

        Ok(4)
    }
}

#[derive(Copy, Clone, Debug)]
pub struct CapabilitiesRequest {
    pub offset: u16,
}

impl CapabilitiesRequest {
    pub fn new(offset: u16) -> Self {
        CapabilitiesRequest {
            offset: offset,
        }
    }
}

impl Command for CapabilitiesRequest {
    type Ok = CapabilitiesReply;
    const MIN_LEN: usize = 3;
    const MAX_LEN: usize = 3;
    const DELAY_RESPONSE_MS: u64 = 40;
    const DELAY_COMMAND_MS: u64 = 50;

    fn len(&self) -> usize { 3 }

    fn encode(&self, data: &mut [u8]) -> Result<usize, ErrorCode> {
        check_len(data, 3)?;

        data[0] = CAPABILITIES_REQUEST;
        data[1] = (self.offset >> 8) as _;
        data[2] = self.offset as _;

        Ok(3)
    }
}

/// One fragment of a multi-part reply: its offset and bytes.
fn decode_fragment(data: &[u8], opcode: u8) -> Result<(u16, &[u8]), ErrorCode> {
    if data.len() < 3 || data.len() > 3 + MAX_READ_FRAGMENT {
        return Err(ErrorCode::LengthMismatch { declared: data.len(), actual: 3 + MAX_READ_FRAGMENT })
    }

    if data[0] != opcode {
        return Err(ErrorCode::UnexpectedCommand { expected: opcode, actual: data[0] })
    }

    Ok((((data[1] as u16) << 8) | data[2] as u16, &data[3..]))
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TableResponse {
    pub offset: u16,
    pub data: Vec<u8>,
}

impl TableResponse {
    pub fn bytes(&self) -> &[u8] {
        &self.data
    }
}

impl CommandResult for TableResponse {
    const OPCODE: u8 = TABLE_READ_REPLY;
    const MAX_LEN: usize = 3 + MAX_READ_FRAGMENT;

    fn decode(data: &[u8]) -> Result<Self, ErrorCode> {
        let (offset, data) = decode_fragment(data, TABLE_READ_REPLY)?;
        Ok(TableResponse {
            offset: offset,
            data: data.to_vec(),
        })
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CapabilitiesReply {
    pub offset: u16,
    pub data: Vec<u8>,
}

impl CommandResult for CapabilitiesReply {
    const OPCODE: u8 = CAPABILITIES_REPLY;
    const MAX_LEN: usize = 3 + MAX_READ_FRAGMENT;

    fn decode(data: &[u8]) -> Result<Self, ErrorCode> {
        let (offset, data) = decode_fragment(data, CAPABILITIES_REPLY)?;
        Ok(CapabilitiesReply {
            offset: offset,
            data: data.to_vec(),
        })
    }
}

#[derive(Copy, Clone, Debug)]
pub struct GetTimingReport;

impl Command for GetTimingReport {
    type Ok = TimingMessage;
    const MIN_LEN: usize = 1;
    const MAX_LEN: usize = 1;
    const DELAY_RESPONSE_MS: u64 = 40;
    const DELAY_COMMAND_MS: u64 = 50;

    fn len(&self) -> usize { 1 }

    fn encode(&self, data: &mut [u8]) -> Result<usize, ErrorCode> {
        check_len(data, 1)?;
        data[0] = GET_TIMING_REPORT;

        Ok(1)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TimingMessage {
    pub timing_status: u8,
    pub horizontal_frequency: u16,
    pub vertical_frequency: u16,
}

impl CommandResult for TimingMessage {
    const OPCODE: u8 = TIMING_REPLY;
    const MAX_LEN: usize = 6;

    fn decode(data: &[u8]) -> Result<Self, ErrorCode> {
        if data.len() != 6 {
            return Err(ErrorCode::LengthMismatch { declared: data.len(), actual: 6 })
        }

        if data[0] != TIMING_REPLY {
            return Err(ErrorCode::UnexpectedCommand { expected: TIMING_REPLY, actual: data[0] })
        }

        Ok(TimingMessage {
            timing_status: data[1],
            horizontal_frequency: ((data[2] as u16) << 8) | data[3] as u16,
            vertical_frequency: ((data[4] as u16) << 8) | data[5] as u16,
        })
    }
}

impl CommandResult for () {
    const OPCODE: u8 = 0;
    const MAX_LEN: usize = 0;

    fn decode(_data: &[u8]) -> Result<Self, ErrorCode> {
        Ok(())
    }
}

impl<'a, C: Command> Command for &'a C {
    type Ok = C::Ok;
    const MIN_LEN: usize = C::MIN_LEN;
    const MAX_LEN: usize = C::MAX_LEN;
    const DELAY_RESPONSE_MS: u64 = C::DELAY_RESPONSE_MS;
    const DELAY_COMMAND_MS: u64 = C::DELAY_COMMAND_MS;

    fn len(&self) -> usize { (*self).len() }

    fn encode(&self, data: &mut [u8]) -> Result<usize, ErrorCode> {
        (*self).encode(data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vcp_reply_layout() {
        let reply = VcpReply::decode(&[0x02, 0x00, 0x10, 0x00, 0x00, 0x64, 0x00, 0x32]).unwrap();
        assert_eq!(reply.code, 0x10);
        assert_eq!(reply.maximum(), 100);
        assert_eq!(reply.value(), 50);
        assert_eq!(VcpValue::from(reply).value(), Some(50));
    }

    #[test]
    fn vcp_reply_unsupported() {
        assert_eq!(
            VcpReply::decode(&[0x02, 0x01, 0x99, 0x00, 0x00, 0x00, 0x00, 0x00]),
            Err(ErrorCode::UnsupportedFeature(0x99))
        );
    }

    #[test]
    fn fragments() {
        let caps = CapabilitiesReply::decode(b"\xe3\x00\x20(vcp(10))").unwrap();
        assert_eq!(caps.offset, 0x20);
        assert_eq!(caps.data, b"(vcp(10))".to_vec());

        let end = TableResponse::decode(&[0xe4, 0x00, 0x40]).unwrap();
        assert!(end.bytes().is_empty());

        assert!(TableResponse::decode(&[0xe4, 0x00]).is_err());
    }

    #[test]
    fn table_write_limit() {
        let mut data = [0u8; 64];
        let chunk = [0xaau8; MAX_WRITE_FRAGMENT + 1];
        assert!(TableWrite::new(0x73, 0, &chunk).encode(&mut data).is_err());
        assert_eq!(TableWrite::new(0x73, 0x10, &chunk[..4]).encode(&mut data), Ok(8));
        assert_eq!(&data[..4], &[0xe7, 0x73, 0x00, 0x10]);
    }

    #[test]
    fn table_value() {
        let value = VcpValue::Table(vec![1, 2, 3]);
        assert!(value.is_table());
        assert_eq!(value.value(), None);
        assert_eq!(value.bytes(), Some(&[1u8, 2, 3][..]));
    }
}
