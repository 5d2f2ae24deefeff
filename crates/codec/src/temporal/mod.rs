//! Temporal value types
//!
//! Months are 0-based in this model (January is `0`); the wire uses 1-based
//! months and the encoder/decoder convert exactly once at the boundary.

mod date;
mod datetime;
mod time;
mod timedelta;

pub use date::Date;
pub use datetime::DateTime;
pub use time::Time;
pub use timedelta::TimeDelta;

use chrono::NaiveDate;

pub(crate) const MILLIS_PER_DAY: i64 = 86_400_000;

/// Build a date from possibly out-of-range parts, rolling surplus months into
/// years and surplus days into following months (2023-02-31 is 2023-03-03).
pub(crate) fn normalize_date(year: i64, month0: i64, day: i64) -> Option<NaiveDate> {
    let total_months = year.checked_mul(12)?.checked_add(month0)?;
    let year = i32::try_from(total_months.div_euclid(12)).ok()?;
    let month = u32::try_from(total_months.rem_euclid(12) + 1).ok()?;
    let first = NaiveDate::from_ymd_opt(year, month, 1)?;
    first.checked_add_signed(chrono::TimeDelta::try_days(day.checked_sub(1)?)?)
}

/// Milliseconds since midnight for possibly out-of-range parts
pub(crate) fn total_millis(hour: i64, minute: i64, second: i64, millisecond: i64) -> Option<i64> {
    hour.checked_mul(3_600_000)?
        .checked_add(minute.checked_mul(60_000)?)?
        .checked_add(second.checked_mul(1_000)?)?
        .checked_add(millisecond)
}
