//! Retry limits, sleep scaling and I/O strategy.

use std::ops::{Index, IndexMut};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use crate::context::RetryClass;
use crate::Error;

/// Upper bound for any per-class try limit.
pub const MAX_MAX_TRIES: u16 = 15;

/// Maximum tries for each retry class.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RetryLimits {
    /// Commands without a reply
    pub write_only: u16,
    /// Commands with a single reply
    pub write_read: u16,
    /// Fragments of a multi-part read
    pub multi_part_read: u16,
    /// Fragments of a multi-part write
    pub multi_part_write: u16,
}

impl Default for RetryLimits {
    fn default() -> Self {
        RetryLimits {
            write_only: 2,
            write_read: 2,
            multi_part_read: 8,
            multi_part_write: 8,
        }
    }
}

impl Index<RetryClass> for RetryLimits {
    type Output = u16;

    fn index(&self, class: RetryClass) -> &u16 {
        match class {
            RetryClass::WriteOnly => &self.write_only,
            RetryClass::WriteRead => &self.write_read,
            RetryClass::MultiPartRead => &self.multi_part_read,
            RetryClass::MultiPartWrite => &self.multi_part_write,
        }
    }
}

impl IndexMut<RetryClass> for RetryLimits {
    fn index_mut(&mut self, class: RetryClass) -> &mut u16 {
        match class {
            RetryClass::WriteOnly => &mut self.write_only,
            RetryClass::WriteRead => &mut self.write_read,
            RetryClass::MultiPartRead => &mut self.multi_part_read,
            RetryClass::MultiPartWrite => &mut self.multi_part_write,
        }
    }
}

/// How transports talk to `/dev/i2c-N`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum IoStrategy {
    /// Plain `read()` and `write()` calls
    FileIo,
    /// `ioctl(I2C_RDWR)` transfers
    Ioctl,
}

impl Default for IoStrategy {
    fn default() -> Self {
        IoStrategy::FileIo
    }
}

/// Process wide DDC settings.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Config {
    /// Default try limits, copied into each new thread context
    pub max_tries: RetryLimits,
    /// Scales every protocol delay; 0 disables sleeping
    pub sleep_multiplier: f32,
    /// Largest multi-part value accepted, in bytes
    pub max_multi_part_len: usize,
    /// Transport strategy used by [`crate::transport::open`]
    pub io_strategy: IoStrategy,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            max_tries: Default::default(),
            sleep_multiplier: 1.0,
            max_multi_part_len: 2048,
            io_strategy: Default::default(),
        }
    }
}

/// Checks a try limit against `1..=MAX_MAX_TRIES`.
pub fn validate_max_tries(class: RetryClass, tries: u16) -> Result<u16, Error> {
    if tries < 1 || tries > MAX_MAX_TRIES {
        Err(Error::Config(format!("{} max tries must be between 1 and {}, got {}", class, MAX_MAX_TRIES, tries)))
    } else {
        Ok(tries)
    }
}

/// Checks a sleep multiplier is finite and not negative.
pub fn validate_sleep_multiplier(multiplier: f32) -> Result<f32, Error> {
    if !multiplier.is_finite() || multiplier < 0.0 {
        Err(Error::Config(format!("invalid sleep multiplier {}", multiplier)))
    } else {
        Ok(multiplier)
    }
}

impl Config {
    /// Settings that never sleep, for tests and simulated transports.
    pub fn no_sleep() -> Self {
        Config {
            sleep_multiplier: 0.0,
            ..Default::default()
        }
    }

    /// Rejects out of range values.
    pub fn validate(&self) -> Result<(), Error> {
        for &class in RetryClass::ALL.iter() {
            validate_max_tries(class, self.max_tries[class])?;
        }
        validate_sleep_multiplier(self.sleep_multiplier)?;
        if self.max_multi_part_len == 0 {
            return Err(Error::Config("maximum multi-part length must be positive".into()))
        }

        Ok(())
    }
}
