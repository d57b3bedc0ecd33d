use crate::domain::ports::Clock;
use chrono::{Local, NaiveTime};
use std::sync::Mutex;

/// Local wall-clock time of day.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveTime {
        Local::now().time()
    }
}

/// A clock pinned to one time of day, adjustable through a shared reference.
#[derive(Debug)]
pub struct FixedClock {
    time: Mutex<NaiveTime>,
}

impl FixedClock {
    pub fn new(time: NaiveTime) -> Self {
        Self {
            time: Mutex::new(time),
        }
    }

    pub fn set(&self, time: NaiveTime) {
        match self.time.lock() {
            Ok(mut guard) => *guard = time,
            Err(poisoned) => *poisoned.into_inner() = time,
        }
    }
}

impl Clock for FixedClock {
    fn now(&self) -> NaiveTime {
        match self.time.lock() {
            Ok(guard) => *guard,
            Err(poisoned) => *poisoned.into_inner(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_clock_can_be_moved() {
        let clock = FixedClock::new(NaiveTime::from_hms_opt(11, 0, 0).unwrap());
        assert_eq!(clock.now(), NaiveTime::from_hms_opt(11, 0, 0).unwrap());

        clock.set(NaiveTime::from_hms_opt(23, 0, 0).unwrap());
        assert_eq!(clock.now(), NaiveTime::from_hms_opt(23, 0, 0).unwrap());
    }
}
