//! Values spanning several DDC/CI frames.
//!
//! Capabilities strings and table features are read as a sequence of
//! fragments, each requested at the offset following the previous one. The
//! display ends the sequence with an empty fragment. Writes are split into
//! Table Write fragments followed by an empty one.

use log::{debug, warn};
use crate::commands::{self, CapabilitiesRequest, FeatureCode, TableRead, TableWrite};
use crate::context::{RetryClass, ThreadContext};
use crate::delay::Delay;
use crate::exchange::execute_in;
use crate::transport::Transport;
use crate::{Error, ErrorCode};

/// What a multi-part read fetches.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum MultiPartKind {
    /// The capabilities string
    Capabilities,
    /// The value of a table feature
    Table(FeatureCode),
}

fn fragment<T: Transport + ?Sized>(
    thread: &ThreadContext,
    transport: &mut T,
    delay: &mut Delay,
    kind: MultiPartKind,
    offset: u16,
) -> Result<(u16, Vec<u8>), Error> {
    match kind {
        MultiPartKind::Capabilities => {
            let reply = execute_in(thread, RetryClass::MultiPartRead, transport, delay, &CapabilitiesRequest::new(offset))?;
            Ok((reply.offset, reply.data))
        },
        MultiPartKind::Table(code) => {
            let reply = execute_in(thread, RetryClass::MultiPartRead, transport, delay, &TableRead::new(code, offset))?;
            Ok((reply.offset, reply.data))
        },
    }
}

/// Reads a complete multi-part value.
///
/// Reading stops at an empty fragment or, when `expected_len` is known, once
/// that many bytes arrived or a fragment came back shorter than the rest of
/// the value. Values growing past the configured maximum fail with
/// [`Error::DataOverflow`].
pub fn multi_part_read<T: Transport + ?Sized>(
    thread: &ThreadContext,
    transport: &mut T,
    delay: &mut Delay,
    kind: MultiPartKind,
    expected_len: Option<usize>,
) -> Result<Vec<u8>, Error> {
    let limit = thread.max_multi_part_len();
    let mut value = Vec::new();
    let mut offset = 0u16;
    loop {
        let (reply_offset, data) = fragment(thread, transport, delay, kind, offset)?;
        if reply_offset != offset {
            warn!("{:?}: requested offset {} but received {}", kind, offset, reply_offset);
            return Err(Error::Ddc(ErrorCode::InvalidOffset {
                expected: offset,
                actual: reply_offset,
            }))
        }

        debug!("{:?}: {} bytes at offset {}", kind, data.len(), offset);
        if data.is_empty() {
            break
        }

        if value.len() + data.len() > limit {
            warn!("{:?}: value exceeds {} bytes", kind, limit);
            return Err(Error::DataOverflow { limit: limit })
        }

        let remaining = expected_len.map(|expected| expected.saturating_sub(value.len()));
        value.extend_from_slice(&data);

        if let Some(remaining) = remaining {
            if data.len() >= remaining || data.len() < remaining.min(commands::MAX_READ_FRAGMENT) {
                value.truncate(value.len() - data.len() + data.len().min(remaining));
                break
            }
        }

        offset = match offset.checked_add(data.len() as u16) {
            Some(offset) => offset,
            None => return Err(Error::DataOverflow { limit: limit }),
        };
    }

    Ok(value)
}

/// Writes a table value as Table Write fragments followed by an empty one.
pub fn multi_part_write<T: Transport + ?Sized>(
    thread: &ThreadContext,
    transport: &mut T,
    delay: &mut Delay,
    code: FeatureCode,
    value: &[u8],
) -> Result<(), Error> {
    let limit = thread.max_multi_part_len();
    if value.len() > limit || value.len() > u16::max_value() as usize {
        return Err(Error::DataOverflow { limit: limit })
    }

    let mut offset = 0u16;
    for chunk in value.chunks(commands::MAX_WRITE_FRAGMENT) {
        debug!("table write 0x{:02x}: {} bytes at offset {}", code, chunk.len(), offset);
        execute_in(thread, RetryClass::MultiPartWrite, transport, delay, &TableWrite::new(code, offset, chunk))?;
        offset += chunk.len() as u16;
    }

    execute_in(thread, RetryClass::MultiPartWrite, transport, delay, &TableWrite::new(code, offset, &[]))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use super::*;
    use crate::config::Config;
    use crate::context::Context;
    use crate::packet::{self, DdcPacket};
    use crate::transport::mock::{ScriptedTransport, Step};

    fn thread(config: Config) -> ThreadContext {
        let _ = env_logger::builder().is_test(true).try_init();
        ThreadContext::new(Arc::new(Context::new(config).unwrap()))
    }

    fn fragment_reply(opcode: u8, offset: u16, data: &[u8]) -> Step {
        let mut payload = vec![(offset >> 8) as u8, offset as u8];
        payload.extend_from_slice(data);
        Step::Reply(DdcPacket::reply(opcode, &payload).to_bytes()[1..].to_vec())
    }

    fn caps_script(caps: &[u8]) -> Vec<Step> {
        let mut steps = Vec::new();
        let mut offset = 0;
        for chunk in caps.chunks(32) {
            steps.push(fragment_reply(commands::CAPABILITIES_REPLY, offset, chunk));
            offset += chunk.len() as u16;
        }
        steps.push(fragment_reply(commands::CAPABILITIES_REPLY, offset, &[]));
        steps
    }

    #[test]
    fn reads_capabilities() {
        let caps = b"(prot(monitor)type(lcd)cmds(01 02 03 07 0C E3 F3)vcp(02 04 05 08 10 12 14(05 08 0B) 16 18 1A 60(01 03 0F) DF)mccs_ver(2.1))";
        let thread = thread(Config::no_sleep());
        let mut transport = ScriptedTransport::new(caps_script(caps));
        let value = multi_part_read(&thread, &mut transport, &mut Delay::default(), MultiPartKind::Capabilities, None).unwrap();
        assert_eq!(&value[..], &caps[..]);
        assert_eq!(transport.writes[1], packet::encode_capabilities_request(32)[1..].to_vec());
        let stats = thread.stats().snapshot(RetryClass::MultiPartRead);
        assert_eq!(stats.successes_by_try_count[1] as usize, transport.writes.len());
    }

    #[test]
    fn offset_mismatch() {
        let thread = thread(Config::no_sleep());
        let mut transport = ScriptedTransport::new(vec![
            fragment_reply(commands::TABLE_READ_REPLY, 0, &[1, 2, 3]),
            fragment_reply(commands::TABLE_READ_REPLY, 0, &[1, 2, 3]),
        ]);
        match multi_part_read(&thread, &mut transport, &mut Delay::default(), MultiPartKind::Table(0x73), None) {
            Err(Error::Ddc(ErrorCode::InvalidOffset { expected: 3, actual: 0 })) => (),
            other => panic!("{:?}", other),
        }
    }

    #[test]
    fn overflow() {
        let config = Config {
            max_multi_part_len: 40,
            ..Config::no_sleep()
        };
        let thread = thread(config);
        let mut transport = ScriptedTransport::new(caps_script(&[b'x'; 64]));
        match multi_part_read(&thread, &mut transport, &mut Delay::default(), MultiPartKind::Capabilities, None) {
            Err(Error::DataOverflow { limit: 40 }) => (),
            other => panic!("{:?}", other),
        }
        assert_eq!(transport.writes.len(), 2);
    }

    #[test]
    fn known_length_stops_early() {
        let thread = thread(Config::no_sleep());
        let mut transport = ScriptedTransport::new(vec![
            fragment_reply(commands::TABLE_READ_REPLY, 0, &[9; 32]),
            fragment_reply(commands::TABLE_READ_REPLY, 32, &[8; 4]),
        ]);
        let value = multi_part_read(&thread, &mut transport, &mut Delay::default(), MultiPartKind::Table(0x73), Some(36)).unwrap();
        assert_eq!(value.len(), 36);
        assert_eq!(transport.writes.len(), 2);
    }

    #[test]
    fn writes_fragments() {
        let thread = thread(Config::no_sleep());
        let value = [0x5au8; 60];
        let mut transport = ScriptedTransport::new(vec![Step::Ack, Step::Ack, Step::Ack, Step::Ack]);
        multi_part_write(&thread, &mut transport, &mut Delay::default(), 0x73, &value).unwrap();
        let offsets: Vec<_> = transport.writes.iter()
            .map(|w| {
                assert_eq!(w[2], commands::TABLE_WRITE);
                ((w[4] as u16) << 8 | w[5] as u16, (w[1] & 0x7f) as usize - 4)
            })
            .collect();
        assert_eq!(offsets, vec![(0, 28), (28, 28), (56, 4), (60, 0)]);
        assert_eq!(thread.stats().snapshot(RetryClass::MultiPartWrite).successes_by_try_count[1], 4);
    }
}
