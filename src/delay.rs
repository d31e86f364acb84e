use std::fmt;
use std::thread::sleep;
use std::time::{Instant, Duration};
use log::trace;

/// Pause between failed tries of an exchange.
pub const DELAY_RETRY_MS: u64 = 200;

/// Extra pause after the display answers with a Null Message.
pub const DELAY_NULL_RESPONSE_MS: u64 = 100;

/// Pause after a command that failed.
pub const DELAY_COMMAND_FAILED_MS: u64 = 40;

/// Why the engine is sleeping.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SleepEvent {
    /// Between writing a request and reading its reply
    WriteToRead,
    /// Required gap after a command before the next one
    PostCommand,
    /// Before retrying a failed try
    Retry,
    /// After a Null Message reply
    NullResponse,
}

impl fmt::Display for SleepEvent {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(match *self {
            SleepEvent::WriteToRead => "write to read",
            SleepEvent::PostCommand => "post command",
            SleepEvent::Retry => "retry",
            SleepEvent::NullResponse => "null response",
        })
    }
}

/// `ms` scaled by the sleep multiplier.
pub fn scaled(ms: u64, multiplier: f32) -> Duration {
    if ms == 0 || !(multiplier > 0.0) {
        return Duration::default()
    }

    Duration::from_micros((ms as f64 * 1000.0 * multiplier as f64) as u64)
}

/// Sleeps for `ms` scaled by the sleep multiplier.
pub fn sleep_scaled(event: SleepEvent, ms: u64, multiplier: f32) {
    let duration = scaled(ms, multiplier);
    if duration > Duration::default() {
        trace!("sleeping {:?} ({})", duration, event);
        sleep(duration);
    }
}

/// A deadline before which the next command must not be sent.
#[derive(Clone, Debug)]
pub struct Delay {
    time: Option<Instant>,
    delay: Duration,
}

impl Delay {
    /// Creates a new delay starting now.
    pub fn new(delay: Duration) -> Self {
        Delay {
            time: Some(Instant::now()),
            delay: delay,
        }
    }

    /// A delay of `ms` scaled by `multiplier`, starting now.
    pub fn scaled(ms: u64, multiplier: f32) -> Self {
        Delay::new(scaled(ms, multiplier))
    }

    /// The time remaining in this delay.
    pub fn remaining(&self) -> Duration {
        self.time.as_ref().and_then(|time| self.delay.checked_sub(time.elapsed())).unwrap_or(Duration::default())
    }

    /// Waits out the remaining time in this delay.
    pub fn sleep(&mut self) {
        if let Some(delay) = self.time.take().and_then(|time| self.delay.checked_sub(time.elapsed())) {
            trace!("sleeping {:?} ({})", delay, SleepEvent::PostCommand);
            sleep(delay);
        }
    }
}

impl Default for Delay {
    fn default() -> Self {
        Delay {
            time: None,
            delay: Default::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scaling() {
        assert_eq!(scaled(200, 1.0), Duration::from_millis(200));
        assert_eq!(scaled(200, 0.5), Duration::from_millis(100));
        assert_eq!(scaled(200, 0.0), Duration::default());
        assert_eq!(scaled(0, 3.0), Duration::default());
    }

    #[test]
    fn zero_delay_is_immediate() {
        let mut delay = Delay::scaled(50, 0.0);
        assert_eq!(delay.remaining(), Duration::default());
        delay.sleep();
        assert_eq!(Delay::default().remaining(), Duration::default());
    }
}
