//! Error types for epoch-time conversion

use thiserror::Error;

/// Errors that can occur when converting calendar values to TT2000
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TimeError {
    /// A calendar or clock field is out of range, or names a leap second
    /// that never happened
    #[error(
        "Illegal time value: {year:04}-{month:02}-{day:02}T{hour:02}:{minute:02}:{second:02}"
    )]
    IllegalValue {
        /// Year
        year: i32,
        /// Month (1-12)
        month: u32,
        /// Day of month
        day: u32,
        /// Hour (0-23)
        hour: u32,
        /// Minute (0-59)
        minute: u32,
        /// Second (0-60)
        second: u32,
    },

    /// Sub-second part of a chrono timestamp is out of range
    #[error("Illegal nanosecond value: {0}")]
    IllegalNanosecond(u32),
}
