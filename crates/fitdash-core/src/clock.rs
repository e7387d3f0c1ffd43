//! Time source for ids and timestamps.

use std::cell::Cell;

use chrono::{DateTime, Duration, Local, Utc};

pub trait Clock {
    fn now(&self) -> DateTime<Utc>;

    /// Local wall-clock time of day, `HH:MM:SS`.
    fn time_of_day(&self) -> String {
        self.now().with_timezone(&Local).format("%H:%M:%S").to_string()
    }
}

/// The real clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// A clock that only moves when told to. Reports time of day in UTC so
/// output doesn't depend on the host timezone.
#[derive(Debug, Clone)]
pub struct FixedClock {
    at: Cell<DateTime<Utc>>,
}

impl FixedClock {
    pub fn new(at: DateTime<Utc>) -> Self {
        Self { at: Cell::new(at) }
    }

    pub fn advance(&self, by: Duration) {
        self.at.set(self.at.get() + by);
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.at.get()
    }

    fn time_of_day(&self) -> String {
        self.at.get().format("%H:%M:%S").to_string()
    }
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now(&self) -> DateTime<Utc> {
        (**self).now()
    }

    fn time_of_day(&self) -> String {
        (**self).time_of_day()
    }
}
