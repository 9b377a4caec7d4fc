//! Proleptic Gregorian day arithmetic and the UTC leap-second table.
//!
//! Day numbers count days since 1970-01-01 (negative before it).

use chrono::NaiveDate;

pub(super) const NANOS_PER_SECOND: i128 = 1_000_000_000;
const SECONDS_PER_DAY: i128 = 86_400;
const NANOS_PER_DAY: i128 = SECONDS_PER_DAY * NANOS_PER_SECOND;

/// Day number of 2000-01-01
const J2000_DAY: i64 = days_from_civil(2000, 1, 1);

/// TT2000 of 2000-01-01T00:00:00 UTC: TT leads UTC by 64.184 s at J2000 and
/// the TT2000 origin is noon.
const J2000_MIDNIGHT_NANOS: i128 = 64_184_000_000 - 43_200 * NANOS_PER_SECOND;

/// TAI-UTC in effect at J2000
const J2000_TAI_MINUS_UTC: i64 = 32;

/// TAI-UTC (seconds) and the day it takes effect.
const LEAP_SECONDS: [(i64, i64); 28] = [
    (days_from_civil(1972, 1, 1), 10),
    (days_from_civil(1972, 7, 1), 11),
    (days_from_civil(1973, 1, 1), 12),
    (days_from_civil(1974, 1, 1), 13),
    (days_from_civil(1975, 1, 1), 14),
    (days_from_civil(1976, 1, 1), 15),
    (days_from_civil(1977, 1, 1), 16),
    (days_from_civil(1978, 1, 1), 17),
    (days_from_civil(1979, 1, 1), 18),
    (days_from_civil(1980, 1, 1), 19),
    (days_from_civil(1981, 7, 1), 20),
    (days_from_civil(1982, 7, 1), 21),
    (days_from_civil(1983, 7, 1), 22),
    (days_from_civil(1985, 7, 1), 23),
    (days_from_civil(1988, 1, 1), 24),
    (days_from_civil(1990, 1, 1), 25),
    (days_from_civil(1991, 1, 1), 26),
    (days_from_civil(1992, 7, 1), 27),
    (days_from_civil(1993, 7, 1), 28),
    (days_from_civil(1994, 7, 1), 29),
    (days_from_civil(1996, 1, 1), 30),
    (days_from_civil(1997, 7, 1), 31),
    (days_from_civil(1999, 1, 1), 32),
    (days_from_civil(2006, 1, 1), 33),
    (days_from_civil(2009, 1, 1), 34),
    (days_from_civil(2012, 7, 1), 35),
    (days_from_civil(2015, 7, 1), 36),
    (days_from_civil(2017, 1, 1), 37),
];

/// A UTC instant split into civil fields. `second` is 60 inside a leap second.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) struct CivilTime {
    pub year: i64,
    pub month: u32,
    pub day: u32,
    pub hour: u32,
    pub minute: u32,
    pub second: u32,
    pub nanosecond: u32,
}

pub(super) const fn days_from_civil(year: i64, month: i64, day: i64) -> i64 {
    let y = if month <= 2 { year - 1 } else { year };
    let era = if y >= 0 { y } else { y - 399 } / 400;
    let yoe = y - era * 400;
    let mp = (month + 9) % 12;
    let doy = (153 * mp + 2) / 5 + day - 1;
    let doe = yoe * 365 + yoe / 4 - yoe / 100 + doy;
    era * 146_097 + doe - 719_468
}

fn civil_from_days(days: i64) -> (i64, u32, u32) {
    let z = days + 719_468;
    let era = if z >= 0 { z } else { z - 146_096 } / 146_097;
    let doe = z - era * 146_097;
    let yoe = (doe - doe / 1460 + doe / 36_524 - doe / 146_096) / 365;
    let doy = doe - (365 * yoe + yoe / 4 - yoe / 100);
    let mp = (5 * doy + 2) / 153;
    let day = doy - (153 * mp + 2) / 5 + 1;
    let month = if mp < 10 { mp + 3 } else { mp - 9 };
    let year = yoe + era * 400 + i64::from(month <= 2);
    (year, month as u32, day as u32)
}

/// TAI-UTC in seconds for a whole UTC day. Days before 1972 use the 1972 value.
fn tai_minus_utc(day: i64) -> i64 {
    LEAP_SECONDS
        .iter()
        .rev()
        .find(|(start, _)| *start <= day)
        .map_or(LEAP_SECONDS[0].1, |(_, offset)| *offset)
}

/// True when the last minute of `day` has 61 seconds.
pub(super) fn ends_with_leap_second(day: i64) -> bool {
    tai_minus_utc(day + 1) > tai_minus_utc(day)
}

/// TT2000 of UTC midnight starting `day`, given the TAI-UTC in force that day.
fn midnight_nanos(day: i64, tai_minus_utc: i64) -> i128 {
    i128::from(day - J2000_DAY) * NANOS_PER_DAY
        + J2000_MIDNIGHT_NANOS
        + i128::from(tai_minus_utc - J2000_TAI_MINUS_UTC) * NANOS_PER_SECOND
}

/// Convert civil UTC fields to TT2000 nanoseconds.
///
/// Returns `None` for an illegal calendar date, an out-of-range time field,
/// a second of 60 anywhere but a real leap second, or a result outside `i64`.
pub(super) fn compose(
    year: i32,
    month: u32,
    day: u32,
    hour: u32,
    minute: u32,
    second: u32,
    nanosecond: u32,
) -> Option<i64> {
    NaiveDate::from_ymd_opt(year, month, day)?;
    if hour > 23 || minute > 59 || second > 60 || i128::from(nanosecond) >= NANOS_PER_SECOND {
        return None;
    }

    let day_number = days_from_civil(i64::from(year), i64::from(month), i64::from(day));
    if second == 60 && !(hour == 23 && minute == 59 && ends_with_leap_second(day_number)) {
        return None;
    }

    let seconds_of_day = i128::from(hour * 3600 + minute * 60 + second);
    let nanos = midnight_nanos(day_number, tai_minus_utc(day_number))
        + seconds_of_day * NANOS_PER_SECOND
        + i128::from(nanosecond);
    i64::try_from(nanos).ok()
}

/// Split TT2000 nanoseconds into civil UTC fields, truncating to the nanosecond.
pub(super) fn decompose(tt2000: i64) -> CivilTime {
    let tt2000 = i128::from(tt2000);

    // Find the last table entry already in force; before 1972 the first
    // entry's offset applies and that entry is the next boundary.
    let in_force = LEAP_SECONDS
        .iter()
        .rposition(|&(day, offset)| midnight_nanos(day, offset) <= tt2000);
    let (offset, next) = match in_force {
        Some(index) => (LEAP_SECONDS[index].1, LEAP_SECONDS.get(index + 1)),
        None => (LEAP_SECONDS[0].1, LEAP_SECONDS.first()),
    };

    // Nanoseconds since 2000-01-01T00:00:00 UTC on a clock without leap seconds
    let elapsed = tt2000
        - J2000_MIDNIGHT_NANOS
        - i128::from(offset - J2000_TAI_MINUS_UTC) * NANOS_PER_SECOND;

    if let Some(&(next_day, next_offset)) = next {
        let next_midnight = i128::from(next_day - J2000_DAY) * NANOS_PER_DAY;
        if next_offset > offset && elapsed >= next_midnight {
            let (year, month, day) = civil_from_days(next_day - 1);
            return CivilTime {
                year,
                month,
                day,
                hour: 23,
                minute: 59,
                second: 60,
                nanosecond: (elapsed - next_midnight) as u32,
            };
        }
    }

    let days = elapsed.div_euclid(NANOS_PER_DAY);
    let nanos_of_day = elapsed.rem_euclid(NANOS_PER_DAY);
    let (year, month, day) = civil_from_days(J2000_DAY + days as i64);
    let seconds_of_day = (nanos_of_day / NANOS_PER_SECOND) as u32;

    CivilTime {
        year,
        month,
        day,
        hour: seconds_of_day / 3600,
        minute: seconds_of_day / 60 % 60,
        second: seconds_of_day % 60,
        nanosecond: (nanos_of_day % NANOS_PER_SECOND) as u32,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_day_numbers() {
        assert_eq!(days_from_civil(1970, 1, 1), 0);
        assert_eq!(days_from_civil(2000, 1, 1), 10_957);
        assert_eq!(days_from_civil(1969, 12, 31), -1);
        assert_eq!(civil_from_days(10_957), (2000, 1, 1));
        assert_eq!(civil_from_days(days_from_civil(2016, 2, 29)), (2016, 2, 29));
        assert_eq!(civil_from_days(-1), (1969, 12, 31));
    }

    #[test]
    fn test_tt2000_origin() {
        let civil = decompose(0);
        assert_eq!((civil.year, civil.month, civil.day), (2000, 1, 1));
        assert_eq!((civil.hour, civil.minute, civil.second), (11, 58, 55));
        assert_eq!(civil.nanosecond, 816_000_000);
    }

    #[test]
    fn test_leap_second_days() {
        assert!(ends_with_leap_second(days_from_civil(2016, 12, 31)));
        assert!(ends_with_leap_second(days_from_civil(2015, 6, 30)));
        assert!(!ends_with_leap_second(days_from_civil(2016, 12, 30)));
        assert!(!ends_with_leap_second(days_from_civil(1971, 12, 31)));
    }

    #[test]
    fn test_compose_decompose_across_leap_second() {
        let before = compose(2016, 12, 31, 23, 59, 59, 0).unwrap();
        let leap = compose(2016, 12, 31, 23, 59, 60, 0).unwrap();
        let after = compose(2017, 1, 1, 0, 0, 0, 0).unwrap();
        assert_eq!(leap - before, 1_000_000_000);
        assert_eq!(after - leap, 1_000_000_000);

        let civil = decompose(leap + 250);
        assert_eq!((civil.year, civil.month, civil.day), (2016, 12, 31));
        assert_eq!((civil.hour, civil.minute, civil.second), (23, 59, 60));
        assert_eq!(civil.nanosecond, 250);

        let civil = decompose(after);
        assert_eq!((civil.year, civil.month, civil.day), (2017, 1, 1));
        assert_eq!((civil.hour, civil.minute, civil.second), (0, 0, 0));
    }

    #[test]
    fn test_compose_rejects_illegal_values() {
        assert!(compose(2015, 2, 29, 0, 0, 0, 0).is_none());
        assert!(compose(2015, 13, 1, 0, 0, 0, 0).is_none());
        assert!(compose(2015, 1, 1, 24, 0, 0, 0).is_none());
        assert!(compose(2015, 1, 1, 0, 60, 0, 0).is_none());
        assert!(compose(2015, 1, 1, 23, 59, 60, 0).is_none());
        assert!(compose(3000, 1, 1, 0, 0, 0, 0).is_none());
    }

    #[test]
    fn test_pre_1972_is_continuous() {
        let last_1971 = compose(1971, 12, 31, 23, 59, 59, 0).unwrap();
        let first_1972 = compose(1972, 1, 1, 0, 0, 0, 0).unwrap();
        assert_eq!(first_1972 - last_1971, 1_000_000_000);
        let civil = decompose(last_1971);
        assert_eq!((civil.year, civil.month, civil.day, civil.second), (1971, 12, 31, 59));
    }
}
