use serde::{Deserialize, Serialize};

use crate::error::{ErrorContext, ImagCdfError, Result};
use crate::schema::{self, VariableType, MISSING_DATA_VALUE};
use crate::time::{self, Tt2000};

/// One measured channel: its attributes and samples.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Variable {
    /// Geomagnetic element or temperature channel
    pub var_type: VariableType,

    /// Element letter ("H", "S", ...) or temperature channel number ("1", ...)
    pub code: String,

    /// Display name (`FIELDNAM`)
    pub field_name: String,

    /// Physical units (`UNITS`), e.g. "nT" or "Celsius"
    pub units: String,

    /// Value marking a missing sample (`FILLVAL`)
    pub fill_value: f64,

    /// Smallest valid sample (`VALIDMIN`)
    pub valid_min: f64,

    /// Largest valid sample (`VALIDMAX`)
    pub valid_max: f64,

    /// Time series the samples pair with (`DEPEND_0`). Filled on read; on
    /// write only used when the caller asks for the given dependency.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub depend_0: Option<String>,

    /// Samples, paired by index with the time series
    pub data: Vec<f64>,
}

impl Variable {
    /// An empty channel with the canonical fill value
    pub fn new(var_type: VariableType, code: impl Into<String>) -> Self {
        Self {
            var_type,
            code: code.into(),
            field_name: String::new(),
            units: String::new(),
            fill_value: MISSING_DATA_VALUE,
            valid_min: 0.0,
            valid_max: 0.0,
            depend_0: None,
            data: Vec::new(),
        }
    }

    /// A geomagnetic field element
    pub fn geomagnetic(code: impl Into<String>) -> Self {
        Self::new(VariableType::GeomagneticFieldElement, code)
    }

    /// A temperature channel
    pub fn temperature(code: impl Into<String>) -> Self {
        Self::new(VariableType::Temperature, code)
    }

    /// Set display name and units
    pub fn with_description(mut self, field_name: impl Into<String>, units: impl Into<String>) -> Self {
        self.field_name = field_name.into();
        self.units = units.into();
        self
    }

    /// Set the valid range
    pub fn with_valid_range(mut self, valid_min: f64, valid_max: f64) -> Self {
        self.valid_min = valid_min;
        self.valid_max = valid_max;
        self
    }

    /// Set an explicit dependency
    pub fn with_depend_0(mut self, depend_0: impl Into<String>) -> Self {
        self.depend_0 = Some(depend_0.into());
        self
    }

    /// Set the samples
    pub fn with_data(mut self, data: Vec<f64>) -> Self {
        self.data = data;
        self
    }

    /// Number of samples
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// True when there are no samples
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Container variable name
    pub fn container_name(&self) -> Result<String> {
        schema::variable_name(self.var_type, &self.code)
    }

    /// True for a vector geomagnetic element
    pub fn is_vector(&self) -> bool {
        schema::is_vector(self.var_type, &self.code)
    }

    /// True for a scalar geomagnetic element
    pub fn is_scalar(&self) -> bool {
        schema::is_scalar(self.var_type, &self.code)
    }

    /// Time series name to link to: the explicit `depend_0` when
    /// `use_given_dependency` is set, otherwise the schema default.
    pub fn dependency_name(&self, use_given_dependency: bool) -> Result<String> {
        if !use_given_dependency {
            return schema::default_dependency(self.var_type, &self.code);
        }
        self.depend_0.clone().ok_or_else(|| {
            ImagCdfError::invalid_argument(
                ErrorContext::new("resolve dependency").with_parameter(self.code.as_str()),
                "explicit dependency requested but DEPEND_0 is not set",
            )
        })
    }

    /// Number of samples equal to the fill value
    pub fn missing_count(&self) -> usize {
        self.data
            .iter()
            .filter(|value| value.to_bits() == self.fill_value.to_bits())
            .count()
    }
}

/// A named, ordered sequence of epoch times.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeSeries {
    /// Container variable name, e.g. "GeomagneticVectorTimes"
    pub name: String,

    /// Timestamps in sample order
    pub timestamps: Vec<Tt2000>,
}

impl TimeSeries {
    /// A series from existing timestamps
    pub fn new(name: impl Into<String>, timestamps: Vec<Tt2000>) -> Self {
        Self {
            name: name.into(),
            timestamps,
        }
    }

    /// `count` equally spaced timestamps
    pub fn regular(name: impl Into<String>, start: Tt2000, increment_seconds: i64, count: usize) -> Self {
        Self::new(name, time::make_series(start, increment_seconds, count))
    }

    /// Number of timestamps
    pub fn len(&self) -> usize {
        self.timestamps.len()
    }

    /// True when there are no timestamps
    pub fn is_empty(&self) -> bool {
        self.timestamps.is_empty()
    }

    /// First timestamp
    pub fn start(&self) -> Option<Tt2000> {
        self.timestamps.first().copied()
    }

    /// Seconds between the first two timestamps
    pub fn sample_period(&self) -> Option<f64> {
        time::sample_period(&self.timestamps)
    }
}
