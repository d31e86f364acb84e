#![deny(missing_docs)]

//! DDC/CI protocol engine.
//!
//! Talks to monitors over the I2C side channel of a video link: frames and
//! validates DDC/CI packets, runs request/reply exchanges with bounded
//! retries, transfers multi-part values, parses capabilities strings and
//! describes VCP features per MCCS version.
//!
//! # Example
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use ddc_core::{Context, Ddc, LockMode, ThreadContext};
//!
//! # #[cfg(feature = "i2c-linux")] fn ddc() -> Result<(), ddc_core::Error> {
//! let context = Arc::new(Context::default());
//! let mut ddc = Ddc::open_bus(4, ThreadContext::new(context.clone()), LockMode::Wait)?;
//! let caps = ddc.capabilities()?;
//! let brightness = ddc.get_value(0x10, caps.parsed_version)?;
//! println!("brightness: {:?}", brightness);
//! println!("{}", context.stats());
//! # Ok(())
//! # }
//! ```

/// DDC/CI command and control I2C address
pub const I2C_ADDRESS_DDC_CI: u16 = 0x37;

/// DDC sub-address command prefix
pub const SUB_ADDRESS_DDC_CI: u8 = 0x51;

/// DDC/CI command request and response types.
pub mod commands;
pub use commands::{Command, CommandResult, FeatureCode, VcpValue};

mod error;
pub use error::{Error, ErrorCode};

pub mod packet;
pub mod config;
pub use config::{Config, IoStrategy, RetryLimits};
pub mod context;
pub use context::{Context, RetryClass, ThreadContext, ThreadRetrySettings};
pub mod stats;
pub use stats::{ClassStats, TryStatistics};
/// Inter-command and retry sleeps.
pub mod delay;
pub mod transport;
pub use transport::Transport;
pub mod exchange;
pub mod multipart;
pub use multipart::MultiPartKind;
pub mod lock;
pub use lock::{DisplayId, DisplayLockGuard, EdidIdentity, LockMode};
pub mod capabilities;
pub use capabilities::{parse_capabilities, ParsedCapabilities, Validity};
pub mod version;
pub use version::VersionSpec;
pub mod features;
pub mod feature_table;
pub use features::{FeatureDescriptor, ResolvedFeature, ValueFormat};
pub mod feature_set;
pub use feature_set::{FeatureSet, FeatureSetFlags, FeatureSubset};

use log::debug;
use delay::Delay;

/// A DDC/CI session with one display.
///
/// Owns the transport and the thread's retry state, and holds the display
/// lock (when opened with one) until dropped.
#[derive(Debug)]
pub struct Ddc<T> {
    inner: T,
    thread: ThreadContext,
    lock: Option<DisplayLockGuard>,
    delay: Delay,
}

#[cfg(feature = "i2c-linux")]
impl Ddc<Box<dyn Transport + Send>> {
    /// Opens `/dev/i2c-{bus}` using the configured I/O strategy and locks the
    /// display on it.
    pub fn open_bus(bus: u32, thread: ThreadContext, mode: LockMode) -> Result<Self, Error> {
        let strategy = thread.context().config().io_strategy;
        let transport = transport::open(format!("/dev/i2c-{}", bus), strategy)?;
        Ddc::open_locked(transport, thread, &DisplayId::bus(bus), mode)
    }
}

impl<T> Ddc<T> {
    /// Create a session over an open transport without taking a display lock.
    pub fn new(transport: T, thread: ThreadContext) -> Self {
        Ddc {
            inner: transport,
            thread: thread,
            lock: None,
            delay: Default::default(),
        }
    }

    /// Create a session holding the lock on the display named by `id`.
    pub fn open_locked(transport: T, thread: ThreadContext, id: &DisplayId, mode: LockMode) -> Result<Self, Error> {
        let guard = thread.context().displays().lock(id, mode)?;
        debug!("opened session on {}", id);
        let mut ddc = Ddc::new(transport, thread);
        ddc.lock = Some(guard);
        Ok(ddc)
    }

    /// Consume the session, releasing the display lock, to return the transport.
    pub fn into_inner(self) -> T {
        self.inner
    }

    /// Borrow the transport.
    pub fn inner_ref(&self) -> &T {
        &self.inner
    }

    /// Mutably borrow the transport.
    pub fn inner_mut(&mut self) -> &mut T {
        &mut self.inner
    }

    /// The thread state exchanges run with.
    pub fn thread_context(&self) -> &ThreadContext {
        &self.thread
    }

    /// Mutable thread state, to adjust try limits for this session.
    pub fn thread_context_mut(&mut self) -> &mut ThreadContext {
        &mut self.thread
    }

    /// The locked display, if the session holds a lock.
    pub fn display(&self) -> Option<&DisplayId> {
        self.lock.as_ref().map(|lock| lock.display())
    }

    /// Wait for any previous commands to complete.
    ///
    /// The DDC specification defines delay intervals that must occur between
    /// execution of two subsequent commands, this waits for the amount of time
    /// remaining since the last command was executed. It may be desireable to
    /// run this before handing the display to another process.
    pub fn sleep(&mut self) {
        self.delay.sleep()
    }
}

impl<T: Transport> Ddc<T> {
    /// Execute a DDC/CI command. See the `commands` module for all available
    /// commands. The return type is dependent on the executed command.
    pub fn execute<C: Command>(&mut self, command: C) -> Result<C::Ok, Error> {
        exchange::execute(&self.thread, &mut self.inner, &mut self.delay, &command)
    }

    /// Read a non-table VCP feature.
    pub fn get_vcp_feature(&mut self, code: FeatureCode) -> Result<commands::VcpReply, Error> {
        let reply = self.execute(commands::GetVcpFeature::new(code))?;
        if reply.code != code {
            return Err(Error::Ddc(ErrorCode::InvalidData))
        }

        Ok(reply)
    }

    /// Set a non-table VCP feature.
    pub fn set_vcp_feature(&mut self, code: FeatureCode, value: u16) -> Result<(), Error> {
        self.execute(commands::SetVcpFeature::new(code, value))
    }

    /// Ask the display to persist its current settings.
    pub fn save_current_settings(&mut self) -> Result<(), Error> {
        self.execute(commands::SaveCurrentSettings)
    }

    /// Read the display's timing report.
    pub fn get_timing_report(&mut self) -> Result<commands::TimingMessage, Error> {
        self.execute(commands::GetTimingReport)
    }

    /// Retrieve the raw capability string from the device.
    pub fn capabilities_string(&mut self) -> Result<Vec<u8>, Error> {
        multipart::multi_part_read(&self.thread, &mut self.inner, &mut self.delay, MultiPartKind::Capabilities, None)
    }

    /// Retrieve and parse the capability string.
    pub fn capabilities(&mut self) -> Result<ParsedCapabilities, Error> {
        self.capabilities_string().map(|caps| capabilities::parse_capabilities_bytes(&caps))
    }

    /// Read a table value from the device.
    pub fn table_read(&mut self, code: FeatureCode) -> Result<Vec<u8>, Error> {
        multipart::multi_part_read(&self.thread, &mut self.inner, &mut self.delay, MultiPartKind::Table(code), None)
    }

    /// Write a table value to the device.
    pub fn table_write(&mut self, code: FeatureCode, value: &[u8]) -> Result<(), Error> {
        multipart::multi_part_write(&self.thread, &mut self.inner, &mut self.delay, code, value)
    }

    /// Read a feature as a table or non-table value, as MCCS `version`
    /// defines it.
    pub fn get_value(&mut self, code: FeatureCode, version: VersionSpec) -> Result<VcpValue, Error> {
        let feature = FeatureDescriptor::lookup_or_dummy(code).resolve_version_sensitive(version);
        if feature.is_table() {
            self.table_read(code).map(VcpValue::Table)
        } else {
            self.get_vcp_feature(code).map(VcpValue::from)
        }
    }

    /// Read a feature and render it the way MCCS `version` interprets it.
    pub fn get_formatted_value(&mut self, code: FeatureCode, version: VersionSpec) -> Result<String, Error> {
        let feature = FeatureDescriptor::lookup_or_dummy(code).resolve_version_sensitive(version);
        let value = self.get_value(code, version)?;
        Ok(feature.format_value(&value))
    }
}
