use anyhow::{Context, Result};
use chrono::{Datelike, NaiveDate, NaiveDateTime, Timelike};
use log::warn;
use std::path::PathBuf;

use imagcdf::filename::{make_filename, Cadence, Coverage};
use imagcdf::schema::PublicationLevel;
use imagcdf::time::Tt2000;

use super::config::Config;

/// Print the conventional ImagCDF file name
pub fn run(
    station: String,
    start: String,
    cadence: Option<Cadence>,
    coverage: Option<Coverage>,
    level: PublicationLevel,
    prefix: Option<String>,
    lowercase: bool,
    config: Option<PathBuf>,
) -> Result<()> {
    let config = Config::load(config.as_deref())?.output;

    let start = parse_start(&start)?;
    let cadence = cadence.or(config.cadence).unwrap_or_else(|| {
        warn!("No cadence given; using '{}'", Cadence::Unknown);
        Cadence::Unknown
    });
    let coverage = coverage.or(config.coverage).unwrap_or_default();
    let prefix = prefix.or(config.prefix).unwrap_or_default();
    let lowercase = lowercase || config.lowercase.unwrap_or(false);

    println!(
        "{}",
        make_filename(&prefix, &station, start, level, cadence, coverage, lowercase)
    );
    Ok(())
}

/// Parse `YYYY-MM-DD` or `YYYY-MM-DDTHH:MM:SS` as UTC.
fn parse_start(text: &str) -> Result<Tt2000> {
    let text = text.trim();
    let datetime = NaiveDateTime::parse_from_str(text, "%Y-%m-%dT%H:%M:%S")
        .or_else(|_| {
            NaiveDate::parse_from_str(text, "%Y-%m-%d")
                .map(|date| date.and_time(chrono::NaiveTime::MIN))
        })
        .with_context(|| format!("Invalid start time '{text}'"))?;

    Tt2000::to_epoch(
        datetime.year(),
        datetime.month(),
        datetime.day(),
        datetime.hour(),
        datetime.minute(),
        datetime.second(),
    )
    .with_context(|| format!("Start time '{text}' is out of range"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_start() {
        assert_eq!(
            parse_start("2024-03-01").unwrap(),
            Tt2000::to_epoch(2024, 3, 1, 0, 0, 0).unwrap()
        );
        assert_eq!(
            parse_start(" 2024-03-01T12:30:15 ").unwrap(),
            Tt2000::to_epoch(2024, 3, 1, 12, 30, 15).unwrap()
        );
        assert!(parse_start("2024-02-30").is_err());
        assert!(parse_start("yesterday").is_err());
    }
}
