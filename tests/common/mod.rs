#![allow(dead_code)]

use std::collections::{BTreeMap, VecDeque};
use std::io;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Barrier, Mutex};
use std::thread;
use std::time::Duration;
use ddc_core::packet::{self, DdcPacket};
use ddc_core::{commands, Config, Context, ThreadContext, Transport};

pub fn init() {
    let _ = env_logger::builder().is_test(true).try_init();
}

pub fn thread_context() -> ThreadContext {
    init();
    ThreadContext::new(Arc::new(Context::new(Config::no_sleep()).unwrap()))
}

/// Misbehaviour injected into the next exchange.
#[derive(Copy, Clone, Debug)]
pub enum Fault {
    /// The exchange goes through untouched
    Clean,
    /// The write fails with EBUSY
    WriteBusy,
    /// The read fails with EBUSY
    ReadBusy,
    /// The read returns only zero bytes
    Zeros,
    /// The reply checksum is wrong
    Corrupt,
    /// The display answers with a Null Message
    Null,
}

#[derive(Default)]
struct State {
    values: BTreeMap<u8, (u16, u16)>,
    tables: BTreeMap<u8, Vec<u8>>,
    staged: Vec<u8>,
    caps: Vec<u8>,
    faults: VecDeque<Fault>,
    saved: usize,
}

/// Exchanges in progress across several displays.
#[derive(Default)]
pub struct Activity {
    current: AtomicUsize,
    peak: AtomicUsize,
}

impl Activity {
    pub fn new() -> Arc<Self> {
        Arc::new(Default::default())
    }

    /// Most exchanges ever in progress at once.
    pub fn peak(&self) -> usize {
        self.peak.load(Ordering::SeqCst)
    }
}

/// A monitor answering DDC/CI requests, shared by every transport opened on it.
#[derive(Default)]
pub struct FakeDisplay {
    state: Mutex<State>,
    in_flight: AtomicBool,
    overlaps: AtomicUsize,
    activity: Mutex<Option<Arc<Activity>>>,
    rendezvous: Mutex<Option<Arc<Barrier>>>,
    pub writes: AtomicUsize,
}

impl FakeDisplay {
    pub fn new() -> Arc<Self> {
        Arc::new(Default::default())
    }

    pub fn with_value(self: Arc<Self>, code: u8, value: u16, maximum: u16) -> Arc<Self> {
        self.state.lock().unwrap().values.insert(code, (value, maximum));
        self
    }

    pub fn with_table(self: Arc<Self>, code: u8, value: &[u8]) -> Arc<Self> {
        self.state.lock().unwrap().tables.insert(code, value.to_vec());
        self
    }

    pub fn with_capabilities(self: Arc<Self>, caps: &str) -> Arc<Self> {
        self.state.lock().unwrap().caps = caps.as_bytes().to_vec();
        self
    }

    /// Reports exchanges to an activity counter shared with other displays.
    pub fn with_activity(self: Arc<Self>, activity: Arc<Activity>) -> Arc<Self> {
        *self.activity.lock().unwrap() = Some(activity);
        self
    }

    /// Holds the next request mid-exchange until `barrier` is passed.
    pub fn with_rendezvous(self: Arc<Self>, barrier: Arc<Barrier>) -> Arc<Self> {
        *self.rendezvous.lock().unwrap() = Some(barrier);
        self
    }

    pub fn inject<I: IntoIterator<Item=Fault>>(&self, faults: I) {
        self.state.lock().unwrap().faults.extend(faults);
    }

    pub fn value(&self, code: u8) -> Option<u16> {
        self.state.lock().unwrap().values.get(&code).map(|&(value, _)| value)
    }

    pub fn table(&self, code: u8) -> Option<Vec<u8>> {
        self.state.lock().unwrap().tables.get(&code).cloned()
    }

    pub fn saved(&self) -> usize {
        self.state.lock().unwrap().saved
    }

    /// Times a request arrived while another exchange was still in progress.
    pub fn overlaps(&self) -> usize {
        self.overlaps.load(Ordering::SeqCst)
    }

    pub fn transport(self: &Arc<Self>) -> FakeTransport {
        FakeTransport {
            display: self.clone(),
            pending: None,
            fault: None,
        }
    }

    fn begin(&self) {
        if self.in_flight.swap(true, Ordering::SeqCst) {
            self.overlaps.fetch_add(1, Ordering::SeqCst);
        }
        self.writes.fetch_add(1, Ordering::SeqCst);
        if let Some(ref activity) = *self.activity.lock().unwrap() {
            let current = activity.current.fetch_add(1, Ordering::SeqCst) + 1;
            activity.peak.fetch_max(current, Ordering::SeqCst);
        }

        let rendezvous = self.rendezvous.lock().unwrap().take();
        if let Some(barrier) = rendezvous {
            barrier.wait();
        }
    }

    fn end(&self) {
        if self.in_flight.swap(false, Ordering::SeqCst) {
            if let Some(ref activity) = *self.activity.lock().unwrap() {
                activity.current.fetch_sub(1, Ordering::SeqCst);
            }
        }
    }

    fn handle(&self, request: &[u8]) -> Option<Vec<u8>> {
        let len = (request[1] & 0x7f) as usize;
        let data = &request[2..2 + len];
        let mut state = self.state.lock().unwrap();
        let offset_of = |data: &[u8]| ((data[0] as usize) << 8) | data[1] as usize;
        match data[0] {
            commands::GET_VCP_FEATURE => Some(match state.values.get(&data[1]) {
                Some(&(value, maximum)) => reply(commands::VCP_FEATURE_REPLY, &[
                    0x00, data[1], 0x00,
                    (maximum >> 8) as u8, maximum as u8,
                    (value >> 8) as u8, value as u8,
                ]),
                None => reply(commands::VCP_FEATURE_REPLY, &[0x01, data[1], 0, 0, 0, 0, 0]),
            }),
            commands::SET_VCP_FEATURE => {
                let value = ((data[2] as u16) << 8) | data[3] as u16;
                if let Some(entry) = state.values.get_mut(&data[1]) {
                    entry.0 = value;
                }
                None
            },
            commands::SAVE_CURRENT_SETTINGS => {
                state.saved += 1;
                None
            },
            commands::GET_TIMING_REPORT => Some(reply(commands::TIMING_REPLY, &[0x02, 0x7a, 0x12, 0x17, 0x70])),
            commands::CAPABILITIES_REQUEST => {
                let offset = offset_of(&data[1..]);
                let end = (offset + commands::MAX_READ_FRAGMENT).min(state.caps.len());
                let fragment = state.caps.get(offset..end).unwrap_or(&[]).to_vec();
                Some(reply(commands::CAPABILITIES_REPLY, &[&data[1..3], &fragment[..]].concat()))
            },
            commands::TABLE_READ_REQUEST => {
                let offset = offset_of(&data[2..]);
                let table = state.tables.get(&data[1]).cloned().unwrap_or_default();
                let end = (offset + commands::MAX_READ_FRAGMENT).min(table.len());
                let fragment = table.get(offset..end).unwrap_or(&[]).to_vec();
                Some(reply(commands::TABLE_READ_REPLY, &[&data[2..4], &fragment[..]].concat()))
            },
            commands::TABLE_WRITE => {
                let offset = offset_of(&data[2..]);
                let fragment = &data[4..];
                if fragment.is_empty() {
                    let staged = std::mem::replace(&mut state.staged, Vec::new());
                    state.tables.insert(data[1], staged);
                } else {
                    state.staged.truncate(offset);
                    state.staged.extend_from_slice(fragment);
                }
                None
            },
            opcode => panic!("unexpected opcode 0x{:02x}", opcode),
        }
    }
}

/// Reply bytes as read off the bus: the leading host address is implicit.
pub fn reply(opcode: u8, payload: &[u8]) -> Vec<u8> {
    DdcPacket::reply(opcode, payload).to_bytes()[1..].to_vec()
}

pub struct FakeTransport {
    display: Arc<FakeDisplay>,
    pending: Option<Vec<u8>>,
    fault: Option<Fault>,
}

impl Transport for FakeTransport {
    fn set_slave_address(&mut self, address: u16) -> io::Result<()> {
        assert_eq!(address, ddc_core::I2C_ADDRESS_DDC_CI);
        Ok(())
    }

    fn write(&mut self, data: &[u8]) -> io::Result<()> {
        self.display.begin();
        thread::sleep(Duration::from_millis(1));
        let fault = self.display.state.lock().unwrap().faults.pop_front();
        if let Some(Fault::WriteBusy) = fault {
            self.display.end();
            return Err(io::Error::from_raw_os_error(16))
        }

        self.pending = self.display.handle(data);
        if self.pending.is_none() {
            self.display.end();
        }
        self.fault = fault;
        Ok(())
    }

    fn read(&mut self, data: &mut [u8]) -> io::Result<usize> {
        thread::sleep(Duration::from_millis(1));
        let mut reply = self.pending.take().unwrap_or_default();
        let fault = self.fault.take();
        self.display.end();
        match fault {
            Some(Fault::ReadBusy) => return Err(io::Error::from_raw_os_error(16)),
            Some(Fault::Zeros) => reply.clear(),
            Some(Fault::Corrupt) => if let Some(last) = reply.last_mut() {
                *last ^= 0xff;
            },
            Some(Fault::Null) => reply = vec![0x6e, 0x80, packet::frame_checksum(&[0x6f, 0x6e, 0x80])],
            _ => (),
        }

        let len = reply.len().min(data.len());
        data[..len].copy_from_slice(&reply[..len]);
        for b in &mut data[len..] {
            *b = 0;
        }
        Ok(data.len())
    }
}
