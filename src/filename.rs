//! # Filename Synthesis
//!
//! ImagCDF file names follow
//! `<prefix><station>_<date fragment>_<cadence>_<publication level>.cdf`,
//! where the date fragment's precision follows the file's coverage and the
//! cadence tag is an ISO 8601 duration.
//!
//! ```
//! use imagcdf::filename::{make_filename, Cadence, Coverage};
//! use imagcdf::schema::PublicationLevel;
//! use imagcdf::time::Tt2000;
//!
//! let start = Tt2000::to_epoch(1980, 1, 1, 0, 0, 0)?;
//! let name = make_filename("", "AFO", start, PublicationLevel::Level1, Cadence::Minute, Coverage::Daily, true);
//! assert_eq!(name, "afo_19800101_pt1m_1.cdf");
//! # Ok::<(), imagcdf::time::TimeError>(())
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::schema::{PublicationLevel, IMAGCDF_EXTENSION};
use crate::time::Tt2000;

const SECOND: f64 = 1.0;
const MINUTE: f64 = 60.0;
const HOUR: f64 = 3600.0;
const DAY: f64 = 86_400.0;
const MONTH: f64 = 2_678_400.0;

/// Interval between samples
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Cadence {
    /// One sample per year
    Annual,
    /// One sample per month
    Monthly,
    /// One sample per day
    Daily,
    /// One sample per hour
    Hourly,
    /// One sample per minute
    Minute,
    /// One sample per second
    Second,
    /// Anything else
    #[default]
    Unknown,
}

impl Cadence {
    /// Tag used in file names
    pub fn tag(&self) -> &'static str {
        match self {
            Cadence::Annual => "p1y",
            Cadence::Monthly => "p1m",
            Cadence::Daily => "p1d",
            Cadence::Hourly => "pt1h",
            Cadence::Minute => "pt1m",
            Cadence::Second => "pt1s",
            Cadence::Unknown => "unkn",
        }
    }

    /// Classify a sample period in seconds.
    ///
    /// Each cadence covers periods up to its own length, so 30 s data is
    /// minute cadence. Periods that are not positive and finite are unknown.
    pub fn from_sample_period(seconds: f64) -> Self {
        if !seconds.is_finite() || seconds <= 0.0 {
            Cadence::Unknown
        } else if seconds <= SECOND {
            Cadence::Second
        } else if seconds <= MINUTE {
            Cadence::Minute
        } else if seconds <= HOUR {
            Cadence::Hourly
        } else if seconds <= DAY {
            Cadence::Daily
        } else if seconds <= MONTH {
            Cadence::Monthly
        } else {
            Cadence::Annual
        }
    }
}

impl fmt::Display for Cadence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for Cadence {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "annual" | "year" | "p1y" => Ok(Cadence::Annual),
            "monthly" | "month" | "p1m" => Ok(Cadence::Monthly),
            "daily" | "day" | "p1d" => Ok(Cadence::Daily),
            "hourly" | "hour" | "pt1h" => Ok(Cadence::Hourly),
            "minute" | "pt1m" => Ok(Cadence::Minute),
            "second" | "pt1s" => Ok(Cadence::Second),
            "unknown" | "unkn" => Ok(Cadence::Unknown),
            other => Err(format!("unknown cadence '{other}'")),
        }
    }
}

/// Time span covered by one file, which sets the date fragment's precision
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Coverage {
    /// `yyyy`
    Annual,
    /// `yyyymm`
    Monthly,
    /// `yyyymmdd`
    #[default]
    Daily,
    /// `yyyymmdd_hh`
    Hourly,
    /// `yyyymmdd_hhmm`
    Minute,
    /// `yyyymmdd_hhmmss`
    Second,
}

impl Coverage {
    /// Coverage matching a sample period, with the same thresholds as
    /// [`Cadence::from_sample_period`]. Non-finite periods give annual.
    pub fn from_sample_period(seconds: f64) -> Self {
        if seconds <= SECOND {
            Coverage::Second
        } else if seconds <= MINUTE {
            Coverage::Minute
        } else if seconds <= HOUR {
            Coverage::Hourly
        } else if seconds <= DAY {
            Coverage::Daily
        } else if seconds <= MONTH {
            Coverage::Monthly
        } else {
            Coverage::Annual
        }
    }

    /// Date fragment for `start`, at this coverage's precision
    pub fn date_fragment(&self, start: Tt2000) -> String {
        let t = start.utc_parts();
        match self {
            Coverage::Annual => format!("{:04}", t.year),
            Coverage::Monthly => format!("{:04}{:02}", t.year, t.month),
            Coverage::Daily => format!("{:04}{:02}{:02}", t.year, t.month, t.day),
            Coverage::Hourly => format!("{:04}{:02}{:02}_{:02}", t.year, t.month, t.day, t.hour),
            Coverage::Minute => format!(
                "{:04}{:02}{:02}_{:02}{:02}",
                t.year, t.month, t.day, t.hour, t.minute
            ),
            Coverage::Second => format!(
                "{:04}{:02}{:02}_{:02}{:02}{:02}",
                t.year, t.month, t.day, t.hour, t.minute, t.second
            ),
        }
    }
}

impl fmt::Display for Coverage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Coverage::Annual => "annual",
            Coverage::Monthly => "monthly",
            Coverage::Daily => "daily",
            Coverage::Hourly => "hourly",
            Coverage::Minute => "minute",
            Coverage::Second => "second",
        })
    }
}

impl FromStr for Coverage {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "annual" | "year" => Ok(Coverage::Annual),
            "monthly" | "month" => Ok(Coverage::Monthly),
            "daily" | "day" => Ok(Coverage::Daily),
            "hourly" | "hour" => Ok(Coverage::Hourly),
            "minute" => Ok(Coverage::Minute),
            "second" => Ok(Coverage::Second),
            other => Err(format!("unknown coverage '{other}'")),
        }
    }
}

/// Build an ImagCDF file name.
///
/// With `lowercase` every character after `prefix` is lowercased; the
/// prefix (which may hold a directory) is kept as given.
pub fn make_filename(
    prefix: &str,
    station_code: &str,
    start: Tt2000,
    publication_level: PublicationLevel,
    cadence: Cadence,
    coverage: Coverage,
    lowercase: bool,
) -> String {
    let name = format!(
        "{}_{}_{}_{}{}",
        station_code,
        coverage.date_fragment(start),
        cadence.tag(),
        publication_level,
        IMAGCDF_EXTENSION
    );
    if lowercase {
        format!("{prefix}{}", name.to_lowercase())
    } else {
        format!("{prefix}{name}")
    }
}

/// [`make_filename`] with cadence and coverage both derived from a sample
/// period in seconds.
pub fn make_filename_for_period(
    prefix: &str,
    station_code: &str,
    start: Tt2000,
    publication_level: PublicationLevel,
    sample_period: f64,
    lowercase: bool,
) -> String {
    make_filename(
        prefix,
        station_code,
        start,
        publication_level,
        Cadence::from_sample_period(sample_period),
        Coverage::from_sample_period(sample_period),
        lowercase,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn epoch(year: i32, month: u32, day: u32, hour: u32, minute: u32, second: u32) -> Tt2000 {
        Tt2000::to_epoch(year, month, day, hour, minute, second).unwrap()
    }

    #[test]
    fn test_reference_filename() {
        let name = make_filename(
            "",
            "AFO",
            epoch(1980, 1, 1, 0, 0, 0),
            PublicationLevel::Level1,
            Cadence::Minute,
            Coverage::Daily,
            true,
        );
        assert_eq!(name, "afo_19800101_pt1m_1.cdf");
    }

    #[test]
    fn test_fragments_by_coverage() {
        let start = epoch(2015, 7, 14, 9, 26, 53);
        let fragments: Vec<String> = [
            Coverage::Annual,
            Coverage::Monthly,
            Coverage::Daily,
            Coverage::Hourly,
            Coverage::Minute,
            Coverage::Second,
        ]
        .iter()
        .map(|coverage| coverage.date_fragment(start))
        .collect();
        assert_eq!(
            fragments,
            vec![
                "2015",
                "201507",
                "20150714",
                "20150714_09",
                "20150714_0926",
                "20150714_092653"
            ]
        );
    }

    #[test]
    fn test_prefix_keeps_case() {
        let name = make_filename(
            "/Data/IMAG/",
            "ESK",
            epoch(2024, 2, 1, 0, 0, 0),
            PublicationLevel::Level4,
            Cadence::Second,
            Coverage::Monthly,
            true,
        );
        assert_eq!(name, "/Data/IMAG/esk_202402_pt1s_4.cdf");

        let name = make_filename(
            "/Data/",
            "ESK",
            epoch(2024, 2, 1, 0, 0, 0),
            PublicationLevel::Level2,
            Cadence::Unknown,
            Coverage::Annual,
            false,
        );
        assert_eq!(name, "/Data/ESK_2024_unkn_2.cdf");
    }

    #[test]
    fn test_start_is_rounded_to_second() {
        let start = Tt2000::to_epoch_nanos(2020, 12, 31, 23, 59, 59, 700_000_000).unwrap();
        assert_eq!(Coverage::Daily.date_fragment(start), "20210101");
    }

    #[test]
    fn test_cadence_from_sample_period() {
        assert_eq!(Cadence::from_sample_period(1.0), Cadence::Second);
        assert_eq!(Cadence::from_sample_period(0.2), Cadence::Second);
        assert_eq!(Cadence::from_sample_period(60.0), Cadence::Minute);
        assert_eq!(Cadence::from_sample_period(3600.0), Cadence::Hourly);
        assert_eq!(Cadence::from_sample_period(86400.0), Cadence::Daily);
        assert_eq!(Cadence::from_sample_period(2_678_400.0), Cadence::Monthly);
        assert_eq!(Cadence::from_sample_period(31_536_000.0), Cadence::Annual);
        assert_eq!(Cadence::from_sample_period(0.0), Cadence::Unknown);
        assert_eq!(Cadence::from_sample_period(f64::NAN), Cadence::Unknown);
    }

    #[test]
    fn test_filename_for_period() {
        let name = make_filename_for_period(
            "",
            "HER",
            epoch(2012, 6, 30, 12, 0, 0),
            PublicationLevel::Level3,
            60.0,
            true,
        );
        assert_eq!(name, "her_20120630_1200_pt1m_3.cdf");
    }

    #[test]
    fn test_parse_names() {
        assert_eq!("pt1m".parse::<Cadence>().unwrap(), Cadence::Minute);
        assert_eq!("Hourly".parse::<Cadence>().unwrap(), Cadence::Hourly);
        assert_eq!("daily".parse::<Coverage>().unwrap(), Coverage::Daily);
        assert!("fortnight".parse::<Coverage>().is_err());
        assert_eq!(Cadence::Annual.to_string(), "p1y");
        assert_eq!(Coverage::Minute.to_string(), "minute");
    }
}
