//! Retrying request/reply exchanges.
//!
//! [`exchange`] is the only place retries are decided. Each try writes the
//! encoded request, waits the write-to-read delay, reads a reply when the
//! class expects one and hands the bytes to the decoder. Outcomes:
//!
//! - success is counted under the try it happened on;
//! - transient bus errors and all-zero reads are retried until the class limit;
//! - a garbled frame is retried once, a second one is fatal;
//! - anything else the display says (null message, unsupported feature,
//!   unexpected data) and hard bus errors are fatal immediately.

use log::{debug, warn};
use crate::commands::{Command, CommandResult};
use crate::context::{RetryClass, ThreadContext};
use crate::delay::{self, Delay, SleepEvent};
use crate::error::is_retryable_io;
use crate::packet::{self, HEADER_LEN, MAX_DATA_LEN};
use crate::transport::Transport;
use crate::{Error, ErrorCode, I2C_ADDRESS_DDC_CI};

/// Bytes read for a reply: source, length, data and checksum.
pub const MAX_REPLY_LEN: usize = HEADER_LEN - 1 + MAX_DATA_LEN + 1;

impl RetryClass {
    /// Whether exchanges of this class read a reply.
    pub fn expects_reply(&self) -> bool {
        match *self {
            RetryClass::WriteRead | RetryClass::MultiPartRead => true,
            RetryClass::WriteOnly | RetryClass::MultiPartWrite => false,
        }
    }
}

/// Timing and sizing of one exchange.
#[derive(Copy, Clone, Debug)]
pub struct Exchange {
    /// Retry class, selecting the try limit and statistics bucket
    pub class: RetryClass,
    /// Bytes to read for the reply, 0 for none
    pub reply_len: usize,
    /// Delay between the write and the read
    pub response_delay_ms: u64,
    /// Delay required after the command before the next one
    pub command_delay_ms: u64,
}

impl Exchange {
    /// Defaults for a class: a full-size reply if the class reads one.
    pub fn new(class: RetryClass) -> Self {
        Exchange {
            class: class,
            reply_len: if class.expects_reply() { MAX_REPLY_LEN } else { 0 },
            response_delay_ms: if class.expects_reply() { 40 } else { 0 },
            command_delay_ms: 50,
        }
    }

    /// Timing of a typed command.
    pub fn for_command<C: Command>(class: RetryClass) -> Self {
        Exchange {
            class: class,
            reply_len: if class.expects_reply() { C::Ok::MAX_LEN + HEADER_LEN } else { 0 },
            response_delay_ms: C::DELAY_RESPONSE_MS,
            command_delay_ms: C::DELAY_COMMAND_MS,
        }
    }
}

enum Verdict {
    Retry,
    Fatal,
}

/// State kept across the tries of one exchange.
struct Tries {
    corruption_seen: bool,
    all_zero: bool,
}

impl Tries {
    fn classify(&mut self, e: &Error) -> Verdict {
        match *e {
            Error::I2c(ref e) if is_retryable_io(e) => {
                self.all_zero = false;
                Verdict::Retry
            },
            Error::Ddc(ref code) if code.is_retryable() => {
                if !code.is_corruption() {
                    return Verdict::Retry
                }

                self.all_zero = false;
                if self.corruption_seen {
                    Verdict::Fatal
                } else {
                    self.corruption_seen = true;
                    Verdict::Retry
                }
            },
            _ => Verdict::Fatal,
        }
    }
}

fn attempt<T, D, R>(params: &Exchange, multiplier: f32, transport: &mut T, request: &[u8], decode: &mut D) -> Result<R, Error> where
    T: Transport + ?Sized,
    D: FnMut(&[u8]) -> Result<R, ErrorCode>,
{
    transport.write(&request[1..]).map_err(Error::I2c)?;
    if params.reply_len == 0 {
        return decode(&[]).map_err(Error::Ddc)
    }

    delay::sleep_scaled(SleepEvent::WriteToRead, params.response_delay_ms, multiplier);
    let mut reply = vec![0u8; params.reply_len];
    let len = transport.read(&mut reply).map_err(Error::I2c)?;
    reply.truncate(len);

    decode(&reply).map_err(Error::Ddc)
}

/// Runs one logical exchange with bounded retries.
///
/// `encode` builds the full request frame (destination byte included; it is
/// not written, the slave address carries it) and is called once per try.
/// `decode` receives the raw bytes read, or an empty slice for classes that
/// read nothing. `delay` holds the inter-command deadline of the display and
/// is updated for the next command.
pub fn exchange<T, E, D, R>(
    thread: &ThreadContext,
    params: Exchange,
    transport: &mut T,
    delay: &mut Delay,
    mut encode: E,
    mut decode: D,
) -> Result<R, Error> where
    T: Transport + ?Sized,
    E: FnMut() -> Result<Vec<u8>, ErrorCode>,
    D: FnMut(&[u8]) -> Result<R, ErrorCode>,
{
    let class = params.class;
    let max_tries = thread.max_tries(class);
    let multiplier = thread.sleep_multiplier();
    let stats = thread.stats();

    if let Err(e) = transport.set_slave_address(I2C_ADDRESS_DDC_CI) {
        warn!("{} exchange: failed to select DDC/CI address: {}", class, e);
        stats.record_fatal(class, 1);
        return Err(Error::I2c(e))
    }

    let mut tries = Tries {
        corruption_seen: false,
        all_zero: true,
    };
    let mut try_counter = 1u16;
    loop {
        let request = encode()?;
        delay.sleep();
        let e = match attempt(&params, multiplier, transport, &request, &mut decode) {
            Ok(res) => {
                *delay = Delay::scaled(params.command_delay_ms, multiplier);
                stats.record_success(class, try_counter);
                if try_counter > 1 {
                    debug!("{} exchange succeeded on try {}", class, try_counter);
                }
                return Ok(res)
            },
            Err(e) => e,
        };

        *delay = Delay::scaled(delay::DELAY_COMMAND_FAILED_MS, multiplier);
        match tries.classify(&e) {
            Verdict::Fatal => {
                if let Error::Ddc(ErrorCode::NullResponse) = e {
                    delay::sleep_scaled(SleepEvent::NullResponse, delay::DELAY_NULL_RESPONSE_MS, multiplier);
                }
                if e.is_unsupported() {
                    debug!("{} exchange: {}", class, e);
                } else {
                    warn!("{} exchange failed on try {}: {}", class, try_counter, e);
                }
                stats.record_fatal(class, try_counter);
                return Err(e)
            },
            Verdict::Retry if try_counter >= max_tries => {
                warn!("{} exchange: maximum tries ({}) exceeded, last error: {}", class, max_tries, e);
                stats.record_exhausted(class, try_counter);
                return Err(if tries.all_zero {
                    Error::AllTriesZero {
                        class: class,
                        tries: try_counter,
                    }
                } else {
                    Error::RetriesExhausted {
                        class: class,
                        tries: try_counter,
                        last: Box::new(e),
                    }
                })
            },
            Verdict::Retry => {
                debug!("{} exchange try {}/{} failed, retrying: {}", class, try_counter, max_tries, e);
                delay::sleep_scaled(SleepEvent::Retry, delay::DELAY_RETRY_MS, multiplier);
                try_counter += 1;
            },
        }
    }
}

/// Executes a typed command in the given retry class.
pub fn execute_in<C: Command, T: Transport + ?Sized>(
    thread: &ThreadContext,
    class: RetryClass,
    transport: &mut T,
    delay: &mut Delay,
    command: &C,
) -> Result<C::Ok, Error> {
    exchange(
        thread,
        Exchange::for_command::<C>(class),
        transport,
        delay,
        || packet::encode_command(command),
        |read| if class.expects_reply() {
            C::Ok::decode(&packet::decode_read(read, C::Ok::OPCODE)?)
        } else {
            C::Ok::decode(read)
        },
    )
}

/// Executes a typed command: write-read if it has a reply, write-only otherwise.
pub fn execute<C: Command, T: Transport + ?Sized>(
    thread: &ThreadContext,
    transport: &mut T,
    delay: &mut Delay,
    command: &C,
) -> Result<C::Ok, Error> {
    let class = if C::Ok::MAX_LEN == 0 { RetryClass::WriteOnly } else { RetryClass::WriteRead };
    execute_in(thread, class, transport, delay, command)
}
