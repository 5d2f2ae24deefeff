use std::fmt;

use chrono::{Datelike, NaiveDate};

use crate::clock::Clock;
use crate::delta::{Delta, DeltaScope};
use crate::error::{CodecError, CodecResult};

/// Naive calendar date, optionally carrying a relative [`Delta`].
///
/// A date with a delta is symbolic: its calendar fields hold the delta
/// evaluated at construction time, and the delta itself is what the server
/// receives back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Date {
    date: NaiveDate,
    delta: Option<Delta>,
}

impl Date {
    /// Earliest representable date
    pub const MIN: Self = Self::from_naive(NaiveDate::MIN);

    /// Latest representable date
    pub const MAX: Self = Self::from_naive(NaiveDate::MAX);

    // ==================== Constructors ====================

    /// Creates a new Date from a 0-based month
    pub fn new(year: i32, month0: u32, day: u32) -> CodecResult<Self> {
        if month0 >= 12 {
            return Err(CodecError::invalid_component("month", month0));
        }
        NaiveDate::from_ymd_opt(year, month0 + 1, day)
            .map(Self::from_naive)
            .ok_or_else(|| CodecError::invalid_component("day", day))
    }

    /// Wraps a chrono date
    pub const fn from_naive(date: NaiveDate) -> Self {
        Self { date, delta: None }
    }

    /// Today according to `clock`
    pub fn today(clock: &dyn Clock) -> Self {
        Self::from_naive(clock.today())
    }

    /// Today plus `delta`. Time components of the delta are dropped; an
    /// empty delta yields plain today.
    pub fn relative(delta: Delta, clock: &dyn Clock) -> CodecResult<Self> {
        let Some(delta) = delta.restrict(DeltaScope::Date).non_empty() else {
            return Ok(Self::today(clock));
        };
        let date = delta
            .apply_to_date(clock.today())
            .ok_or_else(|| CodecError::out_of_range("relative date"))?;
        Ok(Self {
            date,
            delta: Some(delta),
        })
    }

    // ==================== Accessors ====================

    /// Year
    pub fn year(&self) -> i32 {
        self.date.year()
    }

    /// Month, 0-based
    pub fn month0(&self) -> u32 {
        self.date.month0()
    }

    /// Month, 1-based
    pub fn month(&self) -> u32 {
        self.date.month()
    }

    /// Day of month
    pub fn day(&self) -> u32 {
        self.date.day()
    }

    /// Attached relative offset
    pub const fn delta(&self) -> Option<&Delta> {
        self.delta.as_ref()
    }

    /// True when the date carries a delta
    pub const fn is_relative(&self) -> bool {
        self.delta.is_some()
    }

    /// Underlying chrono date
    pub const fn as_naive(&self) -> NaiveDate {
        self.date
    }
}

impl From<NaiveDate> for Date {
    fn from(date: NaiveDate) -> Self {
        Self::from_naive(date)
    }
}

impl fmt::Display for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.date.format("%Y-%m-%d"))?;
        if let Some(delta) = &self.delta {
            write!(f, " +{delta}")?;
        }
        Ok(())
    }
}
