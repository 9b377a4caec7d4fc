/// Canonical value of the `Title` global attribute
pub const IMAGCDF_TITLE: &str = "Geomagnetic time series data";

/// Canonical value of the `FormatDescription` global attribute
pub const IMAGCDF_FORMAT_DESCRIPTION: &str = "INTERMAGNET CDF Format";

/// Format version written when none is given
pub const IMAGCDF_DEFAULT_FORMAT_VERSION: &str = "1.3";

/// Oldest readable format version, in tenths
pub const MIN_FORMAT_VERSION_TENTHS: u32 = 11;

/// Newest readable format version, in tenths
pub const MAX_FORMAT_VERSION_TENTHS: u32 = 13;

/// File extension for ImagCDF files
pub const IMAGCDF_EXTENSION: &str = ".cdf";

/// Fill value marking a missing sample
pub const MISSING_DATA_VALUE: f64 = 99999.0;

/// Value of the `DISPLAY_TYPE` variable attribute
pub const DISPLAY_TYPE_TIME_SERIES: &str = "time_series";

/// Container variable name prefix for geomagnetic field elements
pub const GEOMAGNETIC_FIELD_PREFIX: &str = "GeomagneticField";

/// Container variable name prefix for temperature channels
pub const TEMPERATURE_PREFIX: &str = "Temperature";

/// Time series shared by the vector field elements
pub const VECTOR_TIMES: &str = "GeomagneticVectorTimes";

/// Time series shared by the scalar field elements
pub const SCALAR_TIMES: &str = "GeomagneticScalarTimes";

/// Suffix of a temperature channel's time series name
pub const TEMPERATURE_TIMES_SUFFIX: &str = "Times";

/// Element codes measured by the vector instrument
pub const VECTOR_ELEMENTS: &str = "XYZHDEVIF";

/// Element codes measured by the scalar instrument
pub const SCALAR_ELEMENTS: &str = "SG";

/// Longest container variable name
pub const MAX_VARIABLE_NAME_LEN: usize = 29;

/// Longest element or temperature channel code
pub const MAX_ELEMENT_CODE_LEN: usize = 9;
