//! # TT2000 Time Model
//!
//! Timestamps are stored as signed 64-bit nanoseconds relative to
//! 2000-01-01T12:00:00 Terrestrial Time, the epoch encoding used by ImagCDF
//! for every time-series variable.
//!
//! Conversion to and from UTC calendar fields honours the leap-second table,
//! so `23:59:60` is a legal input on days that end with a leap second and
//! formatting shows it back as `:60`.
//!
//! ## Example
//!
//! ```
//! use imagcdf::time::{self, Tt2000};
//!
//! let start = Tt2000::to_epoch(2000, 1, 1, 0, 0, 0)?;
//! let next = time::increment(start, 60);
//! assert_eq!(time::format(next), "2000-01-01T00:01:00");
//!
//! let series = time::make_series(start, 60, 3);
//! assert_eq!(time::sample_period(&series), Some(60.0));
//! # Ok::<(), imagcdf::time::TimeError>(())
//! ```

mod calendar;
mod error;


use std::fmt;

use chrono::{DateTime, Datelike, NaiveDate, NaiveTime, TimeZone, Timelike, Utc};
use serde::{Deserialize, Serialize};

pub use error::TimeError;

use calendar::NANOS_PER_SECOND;

const NANOS: i64 = 1_000_000_000;
const HALF_SECOND: u32 = 500_000_000;

/// Nanoseconds since 2000-01-01T12:00:00 TT
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Tt2000(i64);

/// Whole-second UTC calendar fields of an epoch time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UtcParts {
    /// Year
    pub year: i32,
    /// Month (1-12)
    pub month: u32,
    /// Day of month (1-31)
    pub day: u32,
    /// Hour (0-23)
    pub hour: u32,
    /// Minute (0-59)
    pub minute: u32,
    /// Second (0-60, 60 only during a leap second)
    pub second: u32,
}

impl Tt2000 {
    /// The TT2000 reference instant itself
    pub const EPOCH: Tt2000 = Tt2000(0);

    /// Wrap a raw nanosecond count
    pub const fn from_nanos(nanos: i64) -> Self {
        Self(nanos)
    }

    /// The raw nanosecond count
    pub const fn as_nanos(self) -> i64 {
        self.0
    }

    /// Convert UTC calendar fields to an epoch time.
    pub fn to_epoch(
        year: i32,
        month: u32,
        day: u32,
        hour: u32,
        minute: u32,
        second: u32,
    ) -> Result<Self, TimeError> {
        Self::to_epoch_nanos(year, month, day, hour, minute, second, 0)
    }

    /// Like [`Tt2000::to_epoch`] with a sub-second part.
    pub fn to_epoch_nanos(
        year: i32,
        month: u32,
        day: u32,
        hour: u32,
        minute: u32,
        second: u32,
        nanosecond: u32,
    ) -> Result<Self, TimeError> {
        if i128::from(nanosecond) >= NANOS_PER_SECOND {
            return Err(TimeError::IllegalNanosecond(nanosecond));
        }
        calendar::compose(year, month, day, hour, minute, second, nanosecond)
            .map(Self)
            .ok_or(TimeError::IllegalValue {
                year,
                month,
                day,
                hour,
                minute,
                second,
            })
    }

    /// UTC calendar fields, rounded to the nearest whole second.
    ///
    /// Rounding carries into minutes, hours and days, so an instant at
    /// `23:59:59.6` yields midnight of the next day.
    pub fn utc_parts(self) -> UtcParts {
        let civil = calendar::decompose(self.0);
        let civil = if civil.nanosecond >= HALF_SECOND {
            let to_next = NANOS - i64::from(civil.nanosecond);
            calendar::decompose(self.0.saturating_add(to_next))
        } else {
            civil
        };
        UtcParts {
            year: civil.year as i32,
            month: civil.month,
            day: civil.day,
            hour: civil.hour,
            minute: civil.minute,
            second: civil.second,
        }
    }

    /// Shift by a whole number of seconds, which may be negative.
    pub fn increment(self, seconds: i64) -> Self {
        Self(self.0.saturating_add(seconds.saturating_mul(NANOS)))
    }

    /// Render as `YYYY-MM-DDTHH:MM:SS`, truncating any fraction of a second.
    pub fn format(self) -> String {
        let civil = calendar::decompose(self.0);
        format!(
            "{:04}-{:02}-{:02}T{:02}:{:02}:{:02}",
            civil.year, civil.month, civil.day, civil.hour, civil.minute, civil.second
        )
    }

    /// Convert from a chrono UTC timestamp. A chrono leap second (nanoseconds
    /// of one second or more) maps to second 60.
    pub fn from_datetime(datetime: &DateTime<Utc>) -> Result<Self, TimeError> {
        let (second, nanosecond) = match datetime.nanosecond() {
            leap if i128::from(leap) >= NANOS_PER_SECOND => {
                (datetime.second() + 1, leap - NANOS_PER_SECOND as u32)
            }
            nanos => (datetime.second(), nanos),
        };
        Self::to_epoch_nanos(
            datetime.year(),
            datetime.month(),
            datetime.day(),
            datetime.hour(),
            datetime.minute(),
            second,
            nanosecond,
        )
    }

    /// Convert to a chrono UTC timestamp, or `None` past chrono's range.
    pub fn to_datetime(self) -> Option<DateTime<Utc>> {
        let civil = calendar::decompose(self.0);
        let date = NaiveDate::from_ymd_opt(i32::try_from(civil.year).ok()?, civil.month, civil.day)?;
        let time = if civil.second == 60 {
            NaiveTime::from_hms_nano_opt(
                civil.hour,
                civil.minute,
                59,
                NANOS_PER_SECOND as u32 + civil.nanosecond,
            )?
        } else {
            NaiveTime::from_hms_nano_opt(civil.hour, civil.minute, civil.second, civil.nanosecond)?
        };
        Some(Utc.from_utc_datetime(&date.and_time(time)))
    }
}

impl fmt::Display for Tt2000 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format())
    }
}

impl From<i64> for Tt2000 {
    fn from(nanos: i64) -> Self {
        Self(nanos)
    }
}

impl From<Tt2000> for i64 {
    fn from(epoch: Tt2000) -> Self {
        epoch.0
    }
}

/// Convert UTC calendar fields to an epoch time.
pub fn to_epoch(
    year: i32,
    month: u32,
    day: u32,
    hour: u32,
    minute: u32,
    second: u32,
) -> Result<Tt2000, TimeError> {
    Tt2000::to_epoch(year, month, day, hour, minute, second)
}

/// UTC calendar fields of an epoch time, rounded to the nearest second.
pub fn from_epoch(epoch: Tt2000) -> UtcParts {
    epoch.utc_parts()
}

/// Add `seconds` (possibly negative) to an epoch time.
pub fn increment(epoch: Tt2000, seconds: i64) -> Tt2000 {
    epoch.increment(seconds)
}

/// `YYYY-MM-DDTHH:MM:SS`, truncated to whole seconds.
pub fn format(epoch: Tt2000) -> String {
    epoch.format()
}

/// `count` timestamps starting at `start`, `increment_seconds` apart.
pub fn make_series(start: Tt2000, increment_seconds: i64, count: usize) -> Vec<Tt2000> {
    (0..count)
        .map(|index| start.increment(increment_seconds.saturating_mul(index as i64)))
        .collect()
}

/// [`make_series`] with the start given as UTC calendar fields.
pub fn make_series_from_parts(
    year: i32,
    month: u32,
    day: u32,
    hour: u32,
    minute: u32,
    second: u32,
    increment_seconds: i64,
    count: usize,
) -> Result<Vec<Tt2000>, TimeError> {
    let start = Tt2000::to_epoch(year, month, day, hour, minute, second)?;
    Ok(make_series(start, increment_seconds, count))
}

/// Seconds between the first two timestamps, or `None` with fewer than two.
///
/// Only the first interval is inspected; irregular series are not detected.
pub fn sample_period(series: &[Tt2000]) -> Option<f64> {
    match series {
        [first, second, ..] => Some(second.0.saturating_sub(first.0) as f64 / NANOS as f64),
        _ => None,
    }
}
