use std::cell::Cell;
use std::rc::Rc;
use chrono::{Duration, NaiveDateTime, Utc};

// Clock abstracts the source of "now" for lending transitions
pub trait Clock {
    fn now(&self) -> NaiveDateTime;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Utc::now().naive_utc()
    }
}

/// A clock that only moves when told to. Clones share the same instant, so a
/// handle kept by the caller can advance a clock owned by a service.
#[derive(Debug, Clone)]
pub struct ManualClock {
    now: Rc<Cell<NaiveDateTime>>,
}

impl ManualClock {
    pub fn new(start: NaiveDateTime) -> Self {
        Self {
            now: Rc::new(Cell::new(start)),
        }
    }

    pub fn starting_now() -> Self {
        Self::new(Utc::now().naive_utc())
    }

    pub fn set(&self, at: NaiveDateTime) {
        self.now.set(at);
    }

    pub fn advance_days(&self, days: i64) {
        self.now.set(self.now.get() + Duration::days(days));
    }
}

impl Clock for ManualClock {
    fn now(&self) -> NaiveDateTime {
        self.now.get()
    }
}

#[cfg(test)]
mod tests {
    use chrono::Duration;
    use crate::core::clock::{Clock, ManualClock, SystemClock};

    #[test]
    fn test_should_share_manual_clock_between_clones() {
        let clock = ManualClock::starting_now();
        let start = clock.now();
        let handle = clock.clone();
        handle.advance_days(10);
        assert_eq!(start + Duration::days(10), clock.now());
    }

    #[test]
    fn test_should_read_system_clock() {
        let first = SystemClock.now();
        let second = SystemClock.now();
        assert!(second >= first);
    }
}
