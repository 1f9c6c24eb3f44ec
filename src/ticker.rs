use chrono::NaiveDate;
use std::time::{Duration, Instant};

/// Default tick interval in milliseconds
pub const DEFAULT_TICK_MS: u64 = 50;

/// Get tick duration
pub fn tick_duration() -> Duration {
    Duration::from_millis(DEFAULT_TICK_MS)
}

/// Source of the calendar date used for daily buckets
pub trait Clock {
    fn today(&self) -> NaiveDate;
}

/// Local wall-clock date
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        chrono::Local::now().date_naive()
    }
}

/// Measures elapsed time between loop iterations
#[derive(Debug)]
pub struct Ticker {
    last: Instant,
}

impl Ticker {
    pub fn new() -> Self {
        Self {
            last: Instant::now(),
        }
    }

    /// Seconds since the previous call (or since construction)
    pub fn tick(&mut self) -> f64 {
        let now = Instant::now();
        let dt = now.duration_since(self.last).as_secs_f64();
        self.last = now;
        dt
    }
}

impl Default for Ticker {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
pub(crate) mod test_clock {
    use super::*;
    use std::cell::Cell;

    /// Clock pinned to a settable date
    pub struct FixedClock {
        date: Cell<NaiveDate>,
    }

    impl FixedClock {
        pub fn new(y: i32, m: u32, d: u32) -> Self {
            Self {
                date: Cell::new(NaiveDate::from_ymd_opt(y, m, d).unwrap()),
            }
        }

        pub fn advance_days(&self, days: i64) {
            self.date.set(self.date.get() + chrono::Duration::days(days));
        }
    }

    impl Clock for FixedClock {
        fn today(&self) -> NaiveDate {
            self.date.get()
        }
    }
}
