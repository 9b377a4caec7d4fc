use std::fmt;

/// Statistics from a completed dataset write
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WriteStats {
    /// Channels written
    pub variables_written: usize,

    /// Time series written
    pub time_series_written: usize,

    /// Samples written across all channels
    pub samples_written: usize,

    /// Timestamps written across all time series
    pub timestamps_written: usize,

    /// Channels whose length differs from their time series
    pub length_mismatches: usize,
}

impl fmt::Display for WriteStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Dataset: {} variables ({} samples), {} time series ({} timestamps)",
            self.variables_written,
            self.samples_written,
            self.time_series_written,
            self.timestamps_written
        )?;
        if self.length_mismatches > 0 {
            write!(f, ", {} length mismatches", self.length_mismatches)?;
        }
        Ok(())
    }
}
