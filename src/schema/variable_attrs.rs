/// Display name of the field
pub const FIELDNAM: &str = "FIELDNAM";
/// Physical units
pub const UNITS: &str = "UNITS";
/// Fill value for missing samples
pub const FILLVAL: &str = "FILLVAL";
/// Smallest valid sample
pub const VALIDMIN: &str = "VALIDMIN";
/// Largest valid sample
pub const VALIDMAX: &str = "VALIDMAX";
/// Name of the time series the samples are paired with
pub const DEPEND_0: &str = "DEPEND_0";
/// Always [`crate::schema::DISPLAY_TYPE_TIME_SERIES`]
pub const DISPLAY_TYPE: &str = "DISPLAY_TYPE";
/// Axis label
pub const LABLAXIS: &str = "LABLAXIS";
