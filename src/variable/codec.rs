use log::{debug, info};

use super::records::{read_double_array, read_tt2000_array, write_double_array, write_tt2000_array};
use super::types::{TimeSeries, Variable};
use crate::attributes::{get_variable, put_variable};
use crate::container::Container;
use crate::error::{ErrorContext, ImagCdfError, Result};
use crate::schema::variable_attrs::*;
use crate::schema::{self, VariableType, DISPLAY_TYPE_TIME_SERIES};

/// Write one channel: its samples, then its attributes.
///
/// With `use_given_dependency` the variable's own `depend_0` is written as
/// `DEPEND_0`; otherwise the link is derived from the type and code. Names
/// are resolved before anything is written, so an unmappable channel
/// leaves the container untouched.
pub fn write_variable<C: Container + ?Sized>(
    container: &mut C,
    variable: &Variable,
    use_given_dependency: bool,
) -> Result<()> {
    let name = variable.container_name()?;
    let depend_0 = variable.dependency_name(use_given_dependency)?;

    write_double_array(container, &name, &variable.data)?;

    put_variable(container, FIELDNAM, &name, variable.field_name.as_str())?;
    put_variable(container, UNITS, &name, variable.units.as_str())?;
    put_variable(container, FILLVAL, &name, variable.fill_value)?;
    put_variable(container, VALIDMIN, &name, variable.valid_min)?;
    put_variable(container, VALIDMAX, &name, variable.valid_max)?;
    put_variable(container, DEPEND_0, &name, depend_0.as_str())?;
    put_variable(container, DISPLAY_TYPE, &name, DISPLAY_TYPE_TIME_SERIES)?;
    put_variable(
        container,
        LABLAXIS,
        &name,
        schema::label_axis(variable.var_type, &variable.code),
    )?;

    info!(
        "Wrote variable {} ({} samples, depends on {})",
        name,
        variable.len(),
        depend_0
    );
    Ok(())
}

/// Read one channel by type and code.
///
/// A channel that is not in the container is reported as
/// [`ImagCdfError::NotFound`]. Use [`probe_variable`] to tell an absent
/// channel apart from one with missing attributes.
pub fn read_variable<C: Container + ?Sized>(
    container: &mut C,
    var_type: VariableType,
    code: &str,
) -> Result<Variable> {
    let name = schema::variable_name(var_type, code)?;
    probe_variable(container, var_type, code)?.ok_or_else(|| ImagCdfError::NotFound {
        context: ErrorContext::new("read variable").with_parameter(name),
    })
}

/// Read one channel if its variable exists.
///
/// `Ok(None)` means only that no variable of that name is present. A
/// channel that exists but lacks a required attribute is an error.
pub fn probe_variable<C: Container + ?Sized>(
    container: &mut C,
    var_type: VariableType,
    code: &str,
) -> Result<Option<Variable>> {
    let name = schema::variable_name(var_type, code)?;
    if !container.has_variable(&name) {
        return Ok(None);
    }

    let variable = Variable {
        var_type,
        code: code.to_string(),
        field_name: get_variable(container, FIELDNAM, &name)?,
        units: get_variable(container, UNITS, &name)?,
        fill_value: get_variable(container, FILLVAL, &name)?,
        valid_min: get_variable(container, VALIDMIN, &name)?,
        valid_max: get_variable(container, VALIDMAX, &name)?,
        depend_0: Some(get_variable(container, DEPEND_0, &name)?),
        data: read_double_array(container, &name)?,
    };

    debug!("Read variable {} ({} samples)", name, variable.len());
    Ok(Some(variable))
}

/// Read temperature channels "1", "2", ... until one is absent.
///
/// Discovery ends at the first missing variable; an incomplete channel
/// fails the whole read.
pub fn read_temperatures<C: Container + ?Sized>(container: &mut C) -> Result<Vec<Variable>> {
    let mut temperatures = Vec::new();
    let mut channel = 1;
    while let Some(variable) =
        probe_variable(container, VariableType::Temperature, &channel.to_string())?
    {
        temperatures.push(variable);
        channel += 1;
    }
    debug!("Found {} temperature channels", temperatures.len());
    Ok(temperatures)
}

/// Append a time series under its name, creating it on first use.
pub fn write_time_series<C: Container + ?Sized>(container: &mut C, series: &TimeSeries) -> Result<()> {
    write_tt2000_array(container, &series.name, &series.timestamps)?;
    info!("Wrote time series {} ({} timestamps)", series.name, series.len());
    Ok(())
}

/// Read a whole time series by name.
pub fn read_time_series<C: Container + ?Sized>(container: &mut C, name: &str) -> Result<TimeSeries> {
    let timestamps = read_tt2000_array(container, name)?;
    Ok(TimeSeries::new(name, timestamps))
}
