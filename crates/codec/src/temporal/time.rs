use std::fmt;

use chrono::{NaiveTime, Timelike};

use super::{MILLIS_PER_DAY, total_millis};
use crate::error::{CodecError, CodecResult};

/// Naive time of day with millisecond precision
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Time {
    time: NaiveTime,
}

impl Time {
    /// Midnight
    pub const MIDNIGHT: Self = Self {
        time: NaiveTime::MIN,
    };

    /// Creates a new Time with validation
    pub fn new(hour: u32, minute: u32, second: u32, millisecond: u32) -> CodecResult<Self> {
        if hour >= 24 {
            return Err(CodecError::invalid_component("hour", hour));
        }
        if minute >= 60 {
            return Err(CodecError::invalid_component("minute", minute));
        }
        if second >= 60 {
            return Err(CodecError::invalid_component("second", second));
        }
        if millisecond >= 1_000 {
            return Err(CodecError::invalid_component("millisecond", millisecond));
        }
        NaiveTime::from_hms_milli_opt(hour, minute, second, millisecond)
            .map(|time| Self { time })
            .ok_or_else(|| CodecError::invalid_component("millisecond", millisecond))
    }

    /// Wraps a chrono time, truncating below the millisecond
    pub fn from_naive(time: NaiveTime) -> Self {
        let millis = time.nanosecond() % 1_000_000_000 / 1_000_000 * 1_000_000;
        Self {
            time: time.with_nanosecond(millis).unwrap_or(time),
        }
    }

    /// Build from possibly out-of-range parts, wrapping around midnight
    pub(crate) fn wrapping(hour: i64, minute: i64, second: i64, millisecond: i64) -> Option<Self> {
        let millis = total_millis(hour, minute, second, millisecond)?.rem_euclid(MILLIS_PER_DAY);
        let secs = u32::try_from(millis / 1_000).ok()?;
        let nanos = u32::try_from(millis % 1_000).ok()? * 1_000_000;
        NaiveTime::from_num_seconds_from_midnight_opt(secs, nanos).map(|time| Self { time })
    }

    /// Hour
    pub fn hour(&self) -> u32 {
        self.time.hour()
    }

    /// Minute
    pub fn minute(&self) -> u32 {
        self.time.minute()
    }

    /// Second
    pub fn second(&self) -> u32 {
        self.time.second()
    }

    /// Millisecond within the second
    pub fn millisecond(&self) -> u32 {
        self.time.nanosecond() / 1_000_000
    }

    /// Underlying chrono time
    pub const fn as_naive(&self) -> NaiveTime {
        self.time
    }
}

impl From<NaiveTime> for Time {
    fn from(time: NaiveTime) -> Self {
        Self::from_naive(time)
    }
}

impl fmt::Display for Time {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:02}:{:02}:{:02}.{:03}",
            self.hour(),
            self.minute(),
            self.second(),
            self.millisecond()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_creation() {
        let time = Time::new(5, 30, 15, 250).unwrap();
        assert_eq!(
            (time.hour(), time.minute(), time.second(), time.millisecond()),
            (5, 30, 15, 250)
        );
        assert_eq!(time.to_string(), "05:30:15.250");
    }

    #[test]
    fn test_invalid() {
        assert!(Time::new(24, 0, 0, 0).is_err());
        assert!(Time::new(0, 60, 0, 0).is_err());
        assert!(Time::new(0, 0, 60, 0).is_err());
        assert!(Time::new(0, 0, 0, 1000).is_err());
    }

    #[test]
    fn test_wrapping() {
        assert_eq!(Time::wrapping(25, 0, 0, 0), Time::new(1, 0, 0, 0).ok());
        assert_eq!(Time::wrapping(0, -1, 0, 0), Time::new(23, 59, 0, 0).ok());
        assert_eq!(Time::wrapping(0, 0, 0, 1500), Time::new(0, 0, 1, 500).ok());
        assert_eq!(Time::wrapping(i64::MAX, 0, 0, 0), None);
    }

    #[test]
    fn test_from_naive_truncates() {
        let naive = NaiveTime::from_hms_nano_opt(1, 2, 3, 456_789_000).unwrap();
        assert_eq!(Time::from_naive(naive).millisecond(), 456);
        assert_eq!(Time::from_naive(naive).as_naive().nanosecond(), 456_000_000);
    }
}
