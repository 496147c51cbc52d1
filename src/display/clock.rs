use chrono::{Datelike, Local, NaiveDateTime, Timelike};

/// Earliest year a synchronised clock can report
const MIN_VALID_YEAR: i32 = 2020;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ClockReading {
    pub valid: bool,
    pub time: NaiveDateTime,
}

impl ClockReading {
    pub fn from_time(time: NaiveDateTime) -> Self {
        Self {
            valid: time.year() >= MIN_VALID_YEAR,
            time,
        }
    }

    pub fn is_valid(&self) -> bool {
        self.valid
    }

    pub fn second(&self) -> u32 {
        self.time.second()
    }

    /// Seconds since the unix epoch, treating local time as UTC
    pub fn timestamp(&self) -> i64 {
        self.time.and_utc().timestamp()
    }
}

/// Wall-clock source.
pub trait Clock {
    fn now(&self) -> ClockReading;
}

/// Local system time
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> ClockReading {
        ClockReading::from_time(Local::now().naive_local())
    }
}
