//! # ImagCDF Dataset
//!
//! Whole-dataset orchestration over the metadata, variable and time-series
//! codecs.
//!
//! Write path: metadata first, then every channel (samples and attributes),
//! then every time series. Read path: metadata (validated), the geomagnetic
//! elements listed in `ElementsRecorded`, temperature channels discovered by
//! probing "1", "2", ... and finally each distinct `DEPEND_0` series once.
//!
//! ```
//! use imagcdf::container::MemoryContainer;
//! use imagcdf::dataset::{read_dataset, write_dataset, Dataset};
//! use imagcdf::metadata::Metadata;
//! use imagcdf::time::Tt2000;
//! use imagcdf::variable::{TimeSeries, Variable};
//!
//! let metadata = Metadata {
//!     iaga_code: "ESK".to_string(),
//!     elements_recorded: "H".to_string(),
//!     ..Metadata::default()
//! };
//! let start = Tt2000::to_epoch(2024, 1, 1, 0, 0, 0)?;
//! let dataset = Dataset::new(metadata)
//!     .with_variable(Variable::geomagnetic("H").with_data(vec![17210.5, 17210.6]))
//!     .with_time_series(TimeSeries::regular("GeomagneticVectorTimes", start, 60, 2));
//!
//! let mut container = MemoryContainer::new();
//! let stats = write_dataset(&mut container, &dataset)?;
//! assert_eq!(stats.samples_written, 2);
//!
//! let read = read_dataset(&mut container)?;
//! assert_eq!(read.variables[0].data, vec![17210.5, 17210.6]);
//! assert_eq!(read.time_series[0].len(), 2);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod stats;


use log::{info, warn};
use serde::{Deserialize, Serialize};

use crate::container::Container;
use crate::error::Result;
use crate::filename::make_filename_for_period;
use crate::metadata::{read_metadata, write_metadata, Metadata};
use crate::schema::VariableType;
use crate::variable::{
    read_temperatures, read_time_series, read_variable, write_time_series, write_variable,
    TimeSeries, Variable,
};

pub use stats::WriteStats;

/// Metadata, channels and time series of one ImagCDF file
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    /// Global metadata
    pub metadata: Metadata,

    /// Measured channels
    pub variables: Vec<Variable>,

    /// Time series referenced by the channels
    pub time_series: Vec<TimeSeries>,
}

impl Dataset {
    /// A dataset with no channels yet
    pub fn new(metadata: Metadata) -> Self {
        Self {
            metadata,
            variables: Vec::new(),
            time_series: Vec::new(),
        }
    }

    /// Add a channel
    pub fn with_variable(mut self, variable: Variable) -> Self {
        self.variables.push(variable);
        self
    }

    /// Add a time series
    pub fn with_time_series(mut self, series: TimeSeries) -> Self {
        self.time_series.push(series);
        self
    }

    /// Look up a channel by type and code
    pub fn variable(&self, var_type: VariableType, code: &str) -> Option<&Variable> {
        self.variables
            .iter()
            .find(|v| v.var_type == var_type && v.code == code)
    }

    /// Look up a time series by name
    pub fn series(&self, name: &str) -> Option<&TimeSeries> {
        self.time_series.iter().find(|s| s.name == name)
    }

    /// The time series a channel pairs with: its explicit `depend_0` if set,
    /// otherwise the default link for its type and code.
    pub fn series_for(&self, variable: &Variable) -> Option<&TimeSeries> {
        let name = variable.dependency_name(variable.depend_0.is_some()).ok()?;
        self.series(&name)
    }

    /// Conventional file name derived from the first time series' start and
    /// sample period, or `None` with fewer than two timestamps.
    pub fn suggested_filename(&self, prefix: &str, lowercase: bool) -> Option<String> {
        let series = self.time_series.first()?;
        Some(make_filename_for_period(
            prefix,
            &self.metadata.iaga_code,
            series.start()?,
            self.metadata.publication_level,
            series.sample_period()?,
            lowercase,
        ))
    }
}

/// Write a whole dataset.
///
/// Channels with an explicit `depend_0` keep it; others get the default
/// link. Length mismatches and geomagnetic elements missing from
/// `ElementsRecorded` are written anyway, with a warning.
pub fn write_dataset<C: Container + ?Sized>(container: &mut C, dataset: &Dataset) -> Result<WriteStats> {
    let mut stats = WriteStats::default();

    write_metadata(container, &dataset.metadata)?;

    for variable in &dataset.variables {
        if variable.var_type == VariableType::GeomagneticFieldElement
            && !dataset.metadata.elements_recorded.contains(variable.code.as_str())
        {
            warn!(
                "Element {} is not listed in ElementsRecorded '{}'",
                variable.code, dataset.metadata.elements_recorded
            );
        }

        match dataset.series_for(variable) {
            Some(series) if series.len() != variable.len() => {
                warn!(
                    "{} {} has {} samples but {} has {} timestamps",
                    variable.var_type,
                    variable.code,
                    variable.len(),
                    series.name,
                    series.len()
                );
                stats.length_mismatches += 1;
            }
            Some(_) => {}
            None => warn!(
                "{} {} has no matching time series in the dataset",
                variable.var_type, variable.code
            ),
        }

        write_variable(container, variable, variable.depend_0.is_some())?;
        stats.variables_written += 1;
        stats.samples_written += variable.len();
    }

    for series in &dataset.time_series {
        write_time_series(container, series)?;
        stats.time_series_written += 1;
        stats.timestamps_written += series.len();
    }

    info!("{}", stats);
    Ok(stats)
}

/// Read a whole dataset.
pub fn read_dataset<C: Container + ?Sized>(container: &mut C) -> Result<Dataset> {
    let metadata = read_metadata(container)?;

    let mut variables = Vec::new();
    for element in metadata.elements() {
        variables.push(read_variable(
            container,
            VariableType::GeomagneticFieldElement,
            &element.to_string(),
        )?);
    }
    variables.extend(read_temperatures(container)?);

    let mut time_series: Vec<TimeSeries> = Vec::new();
    for name in variables.iter().filter_map(|v| v.depend_0.as_deref()) {
        if time_series.iter().all(|s| s.name != name) {
            time_series.push(read_time_series(container, name)?);
        }
    }

    info!(
        "Read dataset {}: {} variables, {} time series",
        metadata.iaga_code,
        variables.len(),
        time_series.len()
    );
    Ok(Dataset {
        metadata,
        variables,
        time_series,
    })
}
