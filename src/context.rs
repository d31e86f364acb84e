//! Process and per-thread DDC state.
//!
//! A [`Context`] holds the global configuration, the shared statistics and
//! the registry of display locks. Each worker thread builds its own
//! [`ThreadContext`] from it, which starts from the global try limits and
//! can override them without affecting other threads.

use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use crate::config::{self, Config, RetryLimits};
use crate::lock::DisplayRegistry;
use crate::stats::TryStatistics;
use crate::Error;

/// Kind of exchange, each with its own try limit and statistics.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum RetryClass {
    /// A request without a reply
    WriteOnly,
    /// A request followed by one reply
    WriteRead,
    /// One fragment of a multi-part read
    MultiPartRead,
    /// One fragment of a multi-part write
    MultiPartWrite,
}

impl RetryClass {
    /// Every class, in index order.
    pub const ALL: [RetryClass; 4] = [
        RetryClass::WriteOnly,
        RetryClass::WriteRead,
        RetryClass::MultiPartRead,
        RetryClass::MultiPartWrite,
    ];

    pub(crate) fn index(&self) -> usize {
        match *self {
            RetryClass::WriteOnly => 0,
            RetryClass::WriteRead => 1,
            RetryClass::MultiPartRead => 2,
            RetryClass::MultiPartWrite => 3,
        }
    }
}

impl fmt::Display for RetryClass {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(match *self {
            RetryClass::WriteOnly => "write-only",
            RetryClass::WriteRead => "write-read",
            RetryClass::MultiPartRead => "multi-part read",
            RetryClass::MultiPartWrite => "multi-part write",
        })
    }
}

/// Shared DDC state: configuration, statistics and display locks.
#[derive(Debug)]
pub struct Context {
    config: Mutex<Config>,
    stats: TryStatistics,
    displays: DisplayRegistry,
}

impl Context {
    /// Creates a context after validating `config`.
    pub fn new(config: Config) -> Result<Self, Error> {
        config.validate()?;
        Ok(Context {
            config: Mutex::new(config),
            stats: TryStatistics::new(),
            displays: DisplayRegistry::new(),
        })
    }

    fn config_lock(&self) -> MutexGuard<Config> {
        self.config.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// A copy of the current configuration.
    pub fn config(&self) -> Config {
        self.config_lock().clone()
    }

    /// Replaces the configuration. Existing thread contexts keep their limits.
    pub fn set_config(&self, config: Config) -> Result<(), Error> {
        config.validate()?;
        *self.config_lock() = config;
        Ok(())
    }

    /// Changes the default try limit inherited by new thread contexts.
    pub fn set_default_max_tries(&self, class: RetryClass, tries: u16) -> Result<(), Error> {
        let tries = config::validate_max_tries(class, tries)?;
        self.config_lock().max_tries[class] = tries;
        Ok(())
    }

    /// Changes the global sleep multiplier.
    pub fn set_sleep_multiplier(&self, multiplier: f32) -> Result<(), Error> {
        let multiplier = config::validate_sleep_multiplier(multiplier)?;
        self.config_lock().sleep_multiplier = multiplier;
        Ok(())
    }

    /// Exchange statistics.
    pub fn stats(&self) -> &TryStatistics {
        &self.stats
    }

    /// Locks for physically distinct displays.
    pub fn displays(&self) -> &DisplayRegistry {
        &self.displays
    }
}

impl Default for Context {
    fn default() -> Self {
        Context {
            config: Mutex::new(Config::default()),
            stats: TryStatistics::new(),
            displays: DisplayRegistry::new(),
        }
    }
}

/// Per-thread try limits, with the extremes ever set on the thread.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct ThreadRetrySettings {
    /// Limits in effect
    pub current: RetryLimits,
    /// Highest limit set per class
    pub highest: RetryLimits,
    /// Lowest limit set per class
    pub lowest: RetryLimits,
}

impl ThreadRetrySettings {
    /// Starts all three from `defaults`.
    pub fn new(defaults: RetryLimits) -> Self {
        ThreadRetrySettings {
            current: defaults,
            highest: defaults,
            lowest: defaults,
        }
    }

    fn set(&mut self, class: RetryClass, tries: u16) {
        self.current[class] = tries;
        if tries > self.highest[class] {
            self.highest[class] = tries;
        }
        if tries < self.lowest[class] {
            self.lowest[class] = tries;
        }
    }
}

/// State owned by one worker thread.
///
/// Build one per thread with [`ThreadContext::new`]; it copies the global
/// defaults at that moment, so a new thread never inherits another thread's
/// overrides.
#[derive(Debug)]
pub struct ThreadContext {
    context: Arc<Context>,
    retry: ThreadRetrySettings,
    sleep_multiplier: Option<f32>,
}

impl ThreadContext {
    /// Thread state initialized from the global defaults.
    pub fn new(context: Arc<Context>) -> Self {
        let defaults = context.config_lock().max_tries;
        ThreadContext {
            context: context,
            retry: ThreadRetrySettings::new(defaults),
            sleep_multiplier: None,
        }
    }

    /// The shared context.
    pub fn context(&self) -> &Arc<Context> {
        &self.context
    }

    /// Exchange statistics.
    pub fn stats(&self) -> &TryStatistics {
        self.context.stats()
    }

    /// Try limit for `class` on this thread.
    pub fn max_tries(&self, class: RetryClass) -> u16 {
        self.retry.current[class]
    }

    /// Overrides the try limit for `class` on this thread.
    pub fn set_max_tries(&mut self, class: RetryClass, tries: u16) -> Result<(), Error> {
        let tries = config::validate_max_tries(class, tries)?;
        self.retry.set(class, tries);
        Ok(())
    }

    /// Current, highest and lowest limits of this thread.
    pub fn retry_settings(&self) -> &ThreadRetrySettings {
        &self.retry
    }

    /// Discards overrides, returning to the global defaults.
    pub fn reset(&mut self) {
        let defaults = self.context.config_lock().max_tries;
        self.retry = ThreadRetrySettings::new(defaults);
        self.sleep_multiplier = None;
    }

    /// Sleep multiplier in effect: the thread override or the global value.
    pub fn sleep_multiplier(&self) -> f32 {
        self.sleep_multiplier.unwrap_or_else(|| self.context.config_lock().sleep_multiplier)
    }

    /// Overrides the sleep multiplier for this thread; `None` follows the global value.
    pub fn set_sleep_multiplier(&mut self, multiplier: Option<f32>) -> Result<(), Error> {
        if let Some(multiplier) = multiplier {
            config::validate_sleep_multiplier(multiplier)?;
        }
        self.sleep_multiplier = multiplier;
        Ok(())
    }

    /// Largest accepted multi-part value.
    pub fn max_multi_part_len(&self) -> usize {
        self.context.config_lock().max_multi_part_len
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn thread_overrides_are_private() {
        let context = Arc::new(Context::new(Config::no_sleep()).unwrap());
        let mut main = ThreadContext::new(context.clone());
        main.set_max_tries(RetryClass::WriteRead, 7).unwrap();
        main.set_max_tries(RetryClass::WriteRead, 1).unwrap();
        assert_eq!(main.max_tries(RetryClass::WriteRead), 1);
        assert_eq!(main.retry_settings().highest[RetryClass::WriteRead], 7);
        assert_eq!(main.retry_settings().lowest[RetryClass::WriteRead], 1);

        let spawned = {
            let context = context.clone();
            thread::spawn(move || ThreadContext::new(context).max_tries(RetryClass::WriteRead))
        };
        assert_eq!(spawned.join().unwrap(), 2);

        main.reset();
        assert_eq!(main.max_tries(RetryClass::WriteRead), 2);
    }

    #[test]
    fn limits_are_validated() {
        let context = Arc::new(Context::default());
        let mut thread = ThreadContext::new(context.clone());
        assert!(thread.set_max_tries(RetryClass::MultiPartRead, 0).is_err());
        assert!(thread.set_max_tries(RetryClass::MultiPartRead, 16).is_err());
        assert!(context.set_default_max_tries(RetryClass::WriteOnly, 16).is_err());
        assert!(thread.set_sleep_multiplier(Some(-0.5)).is_err());

        context.set_default_max_tries(RetryClass::WriteOnly, 5).unwrap();
        assert_eq!(ThreadContext::new(context.clone()).max_tries(RetryClass::WriteOnly), 5);
        assert_eq!(thread.max_tries(RetryClass::WriteOnly), 2);

        context.set_sleep_multiplier(0.5).unwrap();
        assert_eq!(thread.sleep_multiplier(), 0.5);
        thread.set_sleep_multiplier(Some(2.0)).unwrap();
        assert_eq!(thread.sleep_multiplier(), 2.0);
    }
}
