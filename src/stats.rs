//! Counters of exchange outcomes per retry class.

use std::fmt;
use std::sync::{Mutex, MutexGuard, PoisonError};
use crate::config::MAX_MAX_TRIES;
use crate::context::RetryClass;

/// Outcome counters of one retry class.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct ClassStats {
    /// `successes_by_try_count[k]` counts exchanges that succeeded on try `k`; index 0 is unused
    pub successes_by_try_count: [u32; MAX_MAX_TRIES as usize + 1],
    /// Exchanges that ran out of tries
    pub failures_exhausted: u32,
    /// Exchanges that stopped on a fatal error
    pub failures_fatal: u32,
    /// Tries spent by failed exchanges
    pub failure_attempts: u64,
}

impl ClassStats {
    /// Number of successful exchanges.
    pub fn successes(&self) -> u32 {
        self.successes_by_try_count.iter().sum()
    }

    /// Number of completed exchanges.
    pub fn exchanges(&self) -> u32 {
        self.successes() + self.failures_exhausted + self.failures_fatal
    }

    /// Tries across all exchanges, successful or not.
    pub fn total_attempts(&self) -> u64 {
        let successful: u64 = self.successes_by_try_count.iter().enumerate()
            .map(|(tries, &count)| tries as u64 * count as u64)
            .sum();
        successful + self.failure_attempts
    }
}

/// Shared counters for all retry classes, one mutex per class.
#[derive(Debug, Default)]
pub struct TryStatistics {
    classes: [Mutex<ClassStats>; 4],
}

impl TryStatistics {
    /// Zeroed counters.
    pub fn new() -> Self {
        Default::default()
    }

    fn class(&self, class: RetryClass) -> MutexGuard<ClassStats> {
        self.classes[class.index()].lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Records a success on try `tries`, counting from 1.
    pub fn record_success(&self, class: RetryClass, tries: u16) {
        let idx = (tries as usize).min(MAX_MAX_TRIES as usize).max(1);
        self.class(class).successes_by_try_count[idx] += 1;
    }

    /// Records an exchange that used all `tries` without success.
    pub fn record_exhausted(&self, class: RetryClass, tries: u16) {
        let mut stats = self.class(class);
        stats.failures_exhausted += 1;
        stats.failure_attempts += tries as u64;
    }

    /// Records an exchange that stopped with a fatal error on try `tries`.
    pub fn record_fatal(&self, class: RetryClass, tries: u16) {
        let mut stats = self.class(class);
        stats.failures_fatal += 1;
        stats.failure_attempts += tries as u64;
    }

    /// A copy of one class's counters.
    pub fn snapshot(&self, class: RetryClass) -> ClassStats {
        *self.class(class)
    }

    /// Tries across every class.
    pub fn total_attempts(&self) -> u64 {
        RetryClass::ALL.iter().map(|&class| self.snapshot(class).total_attempts()).sum()
    }

    /// Zeroes one class.
    pub fn reset_class(&self, class: RetryClass) {
        *self.class(class) = Default::default();
    }

    /// Zeroes every class.
    pub fn reset(&self) {
        for &class in RetryClass::ALL.iter() {
            self.reset_class(class);
        }
    }
}

impl fmt::Display for TryStatistics {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for &class in RetryClass::ALL.iter() {
            let stats = self.snapshot(class);
            writeln!(f, "{} exchanges: {} ({} attempts)", class, stats.exchanges(), stats.total_attempts())?;
            let counts = stats.successes_by_try_count.iter().enumerate().skip(1)
                .filter(|&(_, &count)| count > 0);
            for (tries, count) in counts {
                writeln!(f, "  succeeded on try {:2}: {}", tries, count)?;
            }
            writeln!(f, "  retries exhausted: {}", stats.failures_exhausted)?;
            writeln!(f, "  fatal errors: {}", stats.failures_fatal)?;
        }
        Ok(())
    }
}
