use std::fmt;

use chrono::{Datelike, NaiveDateTime, SecondsFormat, Timelike, Utc};

use super::{Date, Time};
use crate::clock::Clock;
use crate::delta::Delta;
use crate::error::{CodecError, CodecResult};

/// UTC date and time with millisecond precision, optionally carrying a
/// relative [`Delta`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DateTime {
    instant: chrono::DateTime<Utc>,
    delta: Option<Delta>,
}

impl DateTime {
    /// Earliest representable instant
    pub const MIN: Self = Self {
        instant: chrono::DateTime::<Utc>::MIN_UTC,
        delta: None,
    };

    /// Latest representable instant
    pub const MAX: Self = Self {
        instant: chrono::DateTime::<Utc>::MAX_UTC,
        delta: None,
    };

    // ==================== Constructors ====================

    /// Creates a new UTC DateTime from a 0-based month
    pub fn new(
        year: i32,
        month0: u32,
        day: u32,
        hour: u32,
        minute: u32,
        second: u32,
        millisecond: u32,
    ) -> CodecResult<Self> {
        let date = Date::new(year, month0, day)?;
        let time = Time::new(hour, minute, second, millisecond)?;
        Ok(Self::combine(&date, &time))
    }

    /// Wraps a chrono instant, truncating below the millisecond
    pub fn from_utc(instant: chrono::DateTime<Utc>) -> Self {
        let millis = instant.nanosecond() / 1_000_000 * 1_000_000;
        Self {
            instant: instant.with_nanosecond(millis).unwrap_or(instant),
            delta: None,
        }
    }

    /// Current instant according to `clock`
    pub fn now(clock: &dyn Clock) -> Self {
        Self::from_utc(clock.now())
    }

    /// Now plus `delta`; an empty delta yields plain now
    pub fn relative(delta: Delta, clock: &dyn Clock) -> CodecResult<Self> {
        let now = Self::now(clock);
        let Some(delta) = delta.non_empty() else {
            return Ok(now);
        };
        let instant = delta
            .apply_to_datetime(now.instant)
            .ok_or_else(|| CodecError::out_of_range("relative datetime"))?;
        Ok(Self {
            instant,
            delta: Some(delta),
        })
    }

    /// Date part of `date` with the time of day of `time`, read as UTC
    pub fn combine(date: &Date, time: &Time) -> Self {
        Self::from_utc(NaiveDateTime::new(date.as_naive(), time.as_naive()).and_utc())
    }

    // ==================== Accessors ====================

    /// Year (UTC)
    pub fn year(&self) -> i32 {
        self.instant.year()
    }

    /// Month, 0-based (UTC)
    pub fn month0(&self) -> u32 {
        self.instant.month0()
    }

    /// Month, 1-based (UTC)
    pub fn month(&self) -> u32 {
        self.instant.month()
    }

    /// Day of month (UTC)
    pub fn day(&self) -> u32 {
        self.instant.day()
    }

    /// Hour (UTC)
    pub fn hour(&self) -> u32 {
        self.instant.hour()
    }

    /// Minute (UTC)
    pub fn minute(&self) -> u32 {
        self.instant.minute()
    }

    /// Second (UTC)
    pub fn second(&self) -> u32 {
        self.instant.second()
    }

    /// Millisecond within the second
    pub fn millisecond(&self) -> u32 {
        self.instant.nanosecond() / 1_000_000
    }

    /// Attached relative offset
    pub const fn delta(&self) -> Option<&Delta> {
        self.delta.as_ref()
    }

    /// True when the value carries a delta
    pub const fn is_relative(&self) -> bool {
        self.delta.is_some()
    }

    /// Underlying chrono instant
    pub const fn as_utc(&self) -> chrono::DateTime<Utc> {
        self.instant
    }

    /// Milliseconds since the Unix epoch
    pub fn timestamp_millis(&self) -> i64 {
        self.instant.timestamp_millis()
    }

    /// Date part
    pub fn date(&self) -> Date {
        Date::from_naive(self.instant.date_naive())
    }

    /// Time-of-day part
    pub fn time(&self) -> Time {
        Time::from_naive(self.instant.time())
    }
}

impl From<chrono::DateTime<Utc>> for DateTime {
    fn from(instant: chrono::DateTime<Utc>) -> Self {
        Self::from_utc(instant)
    }
}

impl fmt::Display for DateTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.instant.to_rfc3339_opts(SecondsFormat::Millis, true))?;
        if let Some(delta) = &self.delta {
            write!(f, " +{delta}")?;
        }
        Ok(())
    }
}
