use std::fmt;

use super::types::{TimeSeries, Variable};

/// A channel listed sample by sample next to its timestamps
#[derive(Debug, Clone, Copy)]
pub struct VariableDump<'a> {
    variable: &'a Variable,
    series: &'a TimeSeries,
}

impl Variable {
    /// Pair this channel with `series` for display.
    pub fn dump<'a>(&'a self, series: &'a TimeSeries) -> VariableDump<'a> {
        VariableDump {
            variable: self,
            series,
        }
    }
}

impl fmt::Display for VariableDump<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let variable = self.variable;
        writeln!(f, "ImagCDF Variable {} {}", variable.var_type, variable.code)?;
        writeln!(f, "    FIELDNAM: {}", variable.field_name)?;
        writeln!(f, "    UNITS: {}", variable.units)?;
        writeln!(f, "    FILLVAL: {:.6}", variable.fill_value)?;
        writeln!(f, "    VALIDMIN: {:.6}", variable.valid_min)?;
        writeln!(f, "    VALIDMAX: {:.6}", variable.valid_max)?;
        writeln!(f, "    Depend_0: {}", variable.depend_0.as_deref().unwrap_or(""))?;
        writeln!(f, "    Data length: {}", variable.len())?;
        writeln!(f, "    Time stamps from: {}", self.series.name)?;

        for (index, value) in variable.data.iter().enumerate() {
            match self.series.timestamps.get(index) {
                Some(timestamp) => write!(f, "      {timestamp} ")?,
                None => write!(f, "      Missing time stamp ")?,
            }
            writeln!(f, "{value:.3}")?;
        }
        Ok(())
    }
}
