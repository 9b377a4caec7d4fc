//! Container variable naming, element classification and dependency links.

use super::constants::*;
use super::levels::VariableType;
use crate::error::{ErrorContext, ImagCdfError, Result};

/// Check that a code can be embedded in a variable name.
pub fn validate_element_code(code: &str) -> Result<()> {
    let context = || ErrorContext::new("validate element code").with_parameter(code);
    if code.is_empty() || code.len() > MAX_ELEMENT_CODE_LEN {
        return Err(ImagCdfError::invalid_argument(
            context(),
            format!("code must be 1 to {MAX_ELEMENT_CODE_LEN} characters"),
        ));
    }
    if !code.chars().all(|c| c.is_ascii_alphanumeric()) {
        return Err(ImagCdfError::invalid_argument(
            context(),
            "code must be ASCII letters or digits",
        ));
    }
    Ok(())
}

fn prefix(var_type: VariableType) -> &'static str {
    match var_type {
        VariableType::GeomagneticFieldElement => GEOMAGNETIC_FIELD_PREFIX,
        VariableType::Temperature => TEMPERATURE_PREFIX,
    }
}

/// Container variable name: type prefix followed by the code.
///
/// ```
/// use imagcdf::schema::{variable_name, VariableType};
///
/// assert_eq!(variable_name(VariableType::GeomagneticFieldElement, "H")?, "GeomagneticFieldH");
/// assert_eq!(variable_name(VariableType::Temperature, "1")?, "Temperature1");
/// # Ok::<(), imagcdf::ImagCdfError>(())
/// ```
pub fn variable_name(var_type: VariableType, code: &str) -> Result<String> {
    validate_element_code(code)?;
    let name = format!("{}{}", prefix(var_type), code);
    if name.len() > MAX_VARIABLE_NAME_LEN {
        return Err(ImagCdfError::invalid_argument(
            ErrorContext::new("make variable name").with_parameter(code),
            format!("name '{name}' exceeds {MAX_VARIABLE_NAME_LEN} characters"),
        ));
    }
    Ok(name)
}

fn single_element(var_type: VariableType, code: &str) -> Option<char> {
    if var_type != VariableType::GeomagneticFieldElement {
        return None;
    }
    let mut chars = code.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Some(c.to_ascii_uppercase()),
        _ => None,
    }
}

/// True for geomagnetic elements measured by the vector instrument.
pub fn is_vector(var_type: VariableType, code: &str) -> bool {
    single_element(var_type, code).is_some_and(|c| VECTOR_ELEMENTS.contains(c))
}

/// True for geomagnetic elements measured by the scalar instrument.
pub fn is_scalar(var_type: VariableType, code: &str) -> bool {
    single_element(var_type, code).is_some_and(|c| SCALAR_ELEMENTS.contains(c))
}

/// Time series name for a temperature channel
pub fn temperature_times_name(code: &str) -> String {
    format!("{TEMPERATURE_PREFIX}{code}{TEMPERATURE_TIMES_SUFFIX}")
}

/// The time series a channel depends on when no explicit name is given.
pub fn default_dependency(var_type: VariableType, code: &str) -> Result<String> {
    match var_type {
        VariableType::Temperature => {
            validate_element_code(code)?;
            Ok(temperature_times_name(code))
        }
        _ if is_vector(var_type, code) => Ok(VECTOR_TIMES.to_string()),
        _ if is_scalar(var_type, code) => Ok(SCALAR_TIMES.to_string()),
        _ => Err(ImagCdfError::invalid_argument(
            ErrorContext::new("resolve dependency").with_parameter(code),
            "not a vector or scalar geomagnetic element",
        )),
    }
}

/// `LABLAXIS` text for a channel
pub fn label_axis(var_type: VariableType, code: &str) -> String {
    match var_type {
        VariableType::Temperature => format!("{TEMPERATURE_PREFIX} {code}"),
        VariableType::GeomagneticFieldElement => code.to_string(),
    }
}
