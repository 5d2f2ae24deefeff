//! Relative offsets attached to dates and datetimes
//!
//! A [`Delta`] marks a date as symbolic ("today + 3 months") rather than
//! absolute. The server evaluates such expressions itself, so the encoder
//! sends the offset back verbatim under the short wire names
//! `dy dM dd dh dm ds`, and the decoder reconstructs a concrete value by
//! applying the offset to the current moment.

use std::fmt;

use chrono::{DateTime, Months, NaiveDate, TimeDelta, Utc};

use crate::value::{Map, Value};
use crate::wire;

/// Symbolic relative offset. `None` components are absent on the wire.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Delta {
    /// Years
    pub years: Option<i64>,
    /// Months
    pub months: Option<i64>,
    /// Days
    pub days: Option<i64>,
    /// Hours (datetimes only)
    pub hours: Option<i64>,
    /// Minutes (datetimes only)
    pub minutes: Option<i64>,
    /// Seconds (datetimes only)
    pub seconds: Option<i64>,
}

/// Which delta components a value kind carries
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeltaScope {
    /// `dy dM dd`
    Date,
    /// `dy dM dd dh dm ds`
    DateTime,
}

#[derive(Debug, Clone, Copy)]
enum Component {
    Years,
    Months,
    Days,
    Hours,
    Minutes,
    Seconds,
}

impl Component {
    const fn wire_name(self) -> &'static str {
        match self {
            Component::Years => "dy",
            Component::Months => "dM",
            Component::Days => "dd",
            Component::Hours => "dh",
            Component::Minutes => "dm",
            Component::Seconds => "ds",
        }
    }
}

impl DeltaScope {
    const fn components(self) -> &'static [Component] {
        match self {
            DeltaScope::Date => &[Component::Years, Component::Months, Component::Days],
            DeltaScope::DateTime => &[
                Component::Years,
                Component::Months,
                Component::Days,
                Component::Hours,
                Component::Minutes,
                Component::Seconds,
            ],
        }
    }
}

impl Delta {
    /// An empty delta
    pub const fn new() -> Self {
        Self {
            years: None,
            months: None,
            days: None,
            hours: None,
            minutes: None,
            seconds: None,
        }
    }

    /// Set the years component
    pub const fn with_years(mut self, years: i64) -> Self {
        self.years = Some(years);
        self
    }

    /// Set the months component
    pub const fn with_months(mut self, months: i64) -> Self {
        self.months = Some(months);
        self
    }

    /// Set the days component
    pub const fn with_days(mut self, days: i64) -> Self {
        self.days = Some(days);
        self
    }

    /// Set the hours component
    pub const fn with_hours(mut self, hours: i64) -> Self {
        self.hours = Some(hours);
        self
    }

    /// Set the minutes component
    pub const fn with_minutes(mut self, minutes: i64) -> Self {
        self.minutes = Some(minutes);
        self
    }

    /// Set the seconds component
    pub const fn with_seconds(mut self, seconds: i64) -> Self {
        self.seconds = Some(seconds);
        self
    }

    /// True when no component is set
    pub fn is_empty(&self) -> bool {
        *self == Self::new()
    }

    /// Drop the components `scope` does not carry
    pub fn restrict(self, scope: DeltaScope) -> Self {
        match scope {
            DeltaScope::DateTime => self,
            DeltaScope::Date => Self {
                hours: None,
                minutes: None,
                seconds: None,
                ..self
            },
        }
    }

    /// `Some(self)` unless empty
    pub fn non_empty(self) -> Option<Self> {
        (!self.is_empty()).then_some(self)
    }

    const fn get(&self, component: Component) -> Option<i64> {
        match component {
            Component::Years => self.years,
            Component::Months => self.months,
            Component::Days => self.days,
            Component::Hours => self.hours,
            Component::Minutes => self.minutes,
            Component::Seconds => self.seconds,
        }
    }

    fn set(&mut self, component: Component, value: i64) {
        let slot = match component {
            Component::Years => &mut self.years,
            Component::Months => &mut self.months,
            Component::Days => &mut self.days,
            Component::Hours => &mut self.hours,
            Component::Minutes => &mut self.minutes,
            Component::Seconds => &mut self.seconds,
        };
        *slot = Some(value);
    }

    /// Collect the truthy delta fields of a tagged wire object.
    ///
    /// Zero, `null`, absent and non-numeric fields are skipped. Returns
    /// `None` when nothing was collected, in which case the value is absolute.
    pub fn from_wire(map: &Map, scope: DeltaScope) -> Option<Self> {
        let mut delta = Self::new();
        for &component in scope.components() {
            if let Some(offset) = map.get(component.wire_name()).and_then(truthy_offset) {
                delta.set(component, offset);
            }
        }
        delta.non_empty()
    }

    /// Write the set components under their short wire names.
    ///
    /// `ds` is taken from [`Delta::seconds`].
    pub fn write_wire(&self, out: &mut serde_json::Map<String, serde_json::Value>, scope: DeltaScope) {
        for &component in scope.components() {
            if let Some(offset) = self.get(component) {
                out.insert(component.wire_name().to_string(), offset.into());
            }
        }
    }

    /// Apply to a calendar date: years and months first, clamping the day
    /// to the end of the target month, then days.
    pub fn apply_to_date(&self, date: NaiveDate) -> Option<NaiveDate> {
        let shifted = match self.month_shift()? {
            (true, months) => date.checked_add_months(months)?,
            (false, months) => date.checked_sub_months(months)?,
        };
        shifted.checked_add_signed(TimeDelta::try_days(self.days.unwrap_or(0))?)
    }

    /// Apply to an instant: years and months first (day clamped), then days,
    /// hours, minutes and seconds as exact durations.
    pub fn apply_to_datetime(&self, instant: DateTime<Utc>) -> Option<DateTime<Utc>> {
        let shifted = match self.month_shift()? {
            (true, months) => instant.checked_add_months(months)?,
            (false, months) => instant.checked_sub_months(months)?,
        };
        let offset = TimeDelta::try_days(self.days.unwrap_or(0))?
            .checked_add(&TimeDelta::try_hours(self.hours.unwrap_or(0))?)?
            .checked_add(&TimeDelta::try_minutes(self.minutes.unwrap_or(0))?)?
            .checked_add(&TimeDelta::try_seconds(self.seconds.unwrap_or(0))?)?;
        shifted.checked_add_signed(offset)
    }

    /// Total month shift as (forward, magnitude)
    fn month_shift(&self) -> Option<(bool, Months)> {
        let total = self
            .years
            .unwrap_or(0)
            .checked_mul(12)?
            .checked_add(self.months.unwrap_or(0))?;
        let magnitude = u32::try_from(total.unsigned_abs()).ok()?;
        Some((total >= 0, Months::new(magnitude)))
    }
}

impl fmt::Display for Delta {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        const UNITS: [(Component, &str); 6] = [
            (Component::Years, "y"),
            (Component::Months, "M"),
            (Component::Days, "d"),
            (Component::Hours, "h"),
            (Component::Minutes, "m"),
            (Component::Seconds, "s"),
        ];
        write!(f, "{{")?;
        let mut first = true;
        for (component, unit) in UNITS {
            if let Some(offset) = self.get(component) {
                if !first {
                    write!(f, " ")?;
                }
                first = false;
                write!(f, "{offset:+}{unit}")?;
            }
        }
        write!(f, "}}")
    }
}

/// Integral offset of a truthy wire field
fn truthy_offset(value: &Value) -> Option<i64> {
    wire::coerce(value)
        .and_then(wire::truncate)
        .filter(|offset| *offset != 0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use serde_json::json;

    fn map(json: serde_json::Value) -> Map {
        match Value::from(json) {
            Value::Object(map) => map,
            other => panic!("expected object, got {other:?}"),
        }
    }

    #[test]
    fn test_from_wire_collects_truthy_fields() {
        let m = map(json!({"dy": 1, "dM": 0, "dd": null, "dh": 4}));
        let delta = Delta::from_wire(&m, DeltaScope::DateTime).unwrap();
        assert_eq!(delta, Delta::new().with_years(1).with_hours(4));
    }

    #[test]
    fn test_from_wire_date_scope_ignores_time_fields() {
        let m = map(json!({"dd": -2, "dh": 4, "dm": 5, "ds": 6}));
        let delta = Delta::from_wire(&m, DeltaScope::Date).unwrap();
        assert_eq!(delta, Delta::new().with_days(-2));
    }

    #[test]
    fn test_from_wire_all_falsy_is_absent() {
        let m = map(json!({"dy": 0, "dM": null, "dd": "", "year": 2024}));
        assert_eq!(Delta::from_wire(&m, DeltaScope::DateTime), None);
    }

    #[test]
    fn test_write_wire_omits_unset_fields() {
        let delta = Delta::new().with_months(3).with_seconds(30);
        let mut out = serde_json::Map::new();
        delta.write_wire(&mut out, DeltaScope::DateTime);
        assert_eq!(serde_json::Value::Object(out), json!({"dM": 3, "ds": 30}));
    }

    #[test]
    fn test_write_wire_date_scope() {
        let delta = Delta::new().with_days(1).with_hours(2);
        let mut out = serde_json::Map::new();
        delta.write_wire(&mut out, DeltaScope::Date);
        assert_eq!(serde_json::Value::Object(out), json!({"dd": 1}));
    }

    #[test]
    fn test_zero_is_kept_on_encode() {
        let delta = Delta::new().with_days(0);
        assert!(!delta.is_empty());
        let mut out = serde_json::Map::new();
        delta.write_wire(&mut out, DeltaScope::Date);
        assert_eq!(serde_json::Value::Object(out), json!({"dd": 0}));
    }

    #[test]
    fn test_apply_to_date_clamps_month_end() {
        let jan31 = NaiveDate::from_ymd_opt(2023, 1, 31).unwrap();
        let delta = Delta::new().with_months(1);
        assert_eq!(
            delta.apply_to_date(jan31),
            NaiveDate::from_ymd_opt(2023, 2, 28)
        );
    }

    #[test]
    fn test_apply_to_date_negative() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
        let delta = Delta::new().with_years(-1).with_months(-1).with_days(-1);
        assert_eq!(
            delta.apply_to_date(date),
            NaiveDate::from_ymd_opt(2023, 1, 31)
        );
    }

    #[test]
    fn test_apply_to_datetime_uses_each_component() {
        let now = Utc.with_ymd_and_hms(2024, 1, 15, 10, 0, 0).unwrap();
        let delta = Delta::new()
            .with_days(1)
            .with_hours(2)
            .with_minutes(3)
            .with_seconds(4);
        assert_eq!(
            delta.apply_to_datetime(now),
            Some(Utc.with_ymd_and_hms(2024, 1, 16, 12, 3, 4).unwrap())
        );
    }

    #[test]
    fn test_apply_overflow_is_none() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        assert_eq!(Delta::new().with_years(i64::MAX).apply_to_date(date), None);
        assert_eq!(Delta::new().with_days(i64::MAX).apply_to_date(date), None);
    }

    #[test]
    fn test_restrict() {
        let delta = Delta::new().with_years(1).with_seconds(5);
        assert_eq!(delta.restrict(DeltaScope::Date), Delta::new().with_years(1));
        assert!(Delta::new().with_hours(1).restrict(DeltaScope::Date).is_empty());
    }

    #[test]
    fn test_display() {
        let delta = Delta::new().with_years(1).with_days(-3);
        assert_eq!(delta.to_string(), "{+1y -3d}");
        assert_eq!(Delta::new().to_string(), "{}");
    }
}
