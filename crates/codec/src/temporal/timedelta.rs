use std::fmt;

/// Calendar-aware interval.
///
/// Only the elapsed seconds travel over the wire, so years and months are
/// informational: [`TimeDelta::total_seconds`] treats them as zero.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TimeDelta {
    years: i32,
    months: i32,
    days: i64,
    hours: i64,
    minutes: i64,
    seconds: f64,
}

impl TimeDelta {
    /// Zero-length interval
    pub const ZERO: Self = Self {
        years: 0,
        months: 0,
        days: 0,
        hours: 0,
        minutes: 0,
        seconds: 0.0,
    };

    /// Creates an interval from its components
    pub const fn new(
        years: i32,
        months: i32,
        days: i64,
        hours: i64,
        minutes: i64,
        seconds: f64,
    ) -> Self {
        Self {
            years,
            months,
            days,
            hours,
            minutes,
            seconds,
        }
    }

    /// Interval of `seconds` with every other component zero
    pub const fn from_seconds(seconds: f64) -> Self {
        Self::new(0, 0, 0, 0, 0, seconds)
    }

    /// Elapsed seconds, ignoring years and months
    pub fn total_seconds(&self) -> f64 {
        let whole = self
            .days
            .saturating_mul(86_400)
            .saturating_add(self.hours.saturating_mul(3_600))
            .saturating_add(self.minutes.saturating_mul(60));
        whole as f64 + self.seconds
    }

    /// True when years or months are set and would be lost on the wire
    pub const fn has_calendar_components(&self) -> bool {
        self.years != 0 || self.months != 0
    }

    /// Years
    pub const fn years(&self) -> i32 {
        self.years
    }

    /// Months
    pub const fn months(&self) -> i32 {
        self.months
    }

    /// Days
    pub const fn days(&self) -> i64 {
        self.days
    }

    /// Hours
    pub const fn hours(&self) -> i64 {
        self.hours
    }

    /// Minutes
    pub const fn minutes(&self) -> i64 {
        self.minutes
    }

    /// Seconds component, possibly fractional
    pub const fn seconds(&self) -> f64 {
        self.seconds
    }

    /// Exact duration at millisecond precision; `None` when not finite or
    /// outside chrono's range
    pub fn to_chrono(&self) -> Option<chrono::TimeDelta> {
        let millis = (self.total_seconds() * 1_000.0).round();
        if !millis.is_finite() || millis.abs() >= i64::MAX as f64 {
            return None;
        }
        chrono::TimeDelta::try_milliseconds(millis as i64)
    }

    /// Interval holding the elapsed seconds of a chrono duration
    pub fn from_chrono(duration: chrono::TimeDelta) -> Self {
        let seconds = duration.num_seconds() as f64
            + f64::from(duration.subsec_nanos()) / 1_000_000_000.0;
        Self::from_seconds(seconds)
    }
}

impl From<chrono::TimeDelta> for TimeDelta {
    fn from(duration: chrono::TimeDelta) -> Self {
        Self::from_chrono(duration)
    }
}

impl fmt::Display for TimeDelta {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}s", self.total_seconds())
    }
}
