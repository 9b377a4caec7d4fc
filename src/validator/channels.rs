use std::collections::BTreeMap;

use super::report::{Section, ValidationCheck, ValidationReport};
use crate::container::Container;
use crate::metadata::Metadata;
use crate::schema::VariableType;
use crate::variable::{read_temperatures, read_time_series, read_variable, Variable};

/// Check every recorded element and temperature channel: presence, valid
/// range, and pairing with its DEPEND_0 time series.
pub(super) fn check_channels<C: Container + ?Sized>(
    container: &mut C,
    metadata: &Metadata,
    report: &mut ValidationReport,
) {
    let mut channels = Vec::new();
    for element in metadata.elements() {
        let code = element.to_string();
        let name = format!("Element {code} present");
        match read_variable(container, VariableType::GeomagneticFieldElement, &code) {
            Ok(variable) => {
                report.add_check(ValidationCheck::ok(Section::Channels, name));
                channels.push(variable);
            }
            Err(e) => report.add_check(ValidationCheck::failed(Section::Channels, name, e.to_string())),
        }
    }

    match read_temperatures(container) {
        Ok(temperatures) if temperatures.is_empty() => {}
        Ok(temperatures) => {
            report.add_check(ValidationCheck::ok(
                Section::Channels,
                format!("{} temperature channel(s) readable", temperatures.len()),
            ));
            channels.extend(temperatures);
        }
        Err(e) => report.add_check(ValidationCheck::failed(
            Section::Channels,
            "Temperature channels readable",
            e.to_string(),
        )),
    }

    // series name -> timestamp count, or why it could not be read
    let mut series: BTreeMap<String, Result<usize, String>> = BTreeMap::new();
    for variable in &channels {
        let label = variable
            .container_name()
            .unwrap_or_else(|_| format!("{} {}", variable.var_type, variable.code));
        check_valid_range(variable, &label, report);
        check_dependency(container, variable, &label, &mut series, report);
    }

    check_unreferenced(container, &channels, &series, report);
}

fn check_valid_range(variable: &Variable, label: &str, report: &mut ValidationReport) {
    let name = format!("{label} valid range");
    if variable.valid_min <= variable.valid_max {
        report.add_check(ValidationCheck::ok(Section::Channels, name));
    } else {
        report.add_check(ValidationCheck::failed(
            Section::Channels,
            name,
            format!(
                "VALIDMIN {} exceeds VALIDMAX {}",
                variable.valid_min, variable.valid_max
            ),
        ));
    }
}

fn check_dependency<C: Container + ?Sized>(
    container: &mut C,
    variable: &Variable,
    label: &str,
    series: &mut BTreeMap<String, Result<usize, String>>,
    report: &mut ValidationReport,
) {
    let name = format!("{label} time series");
    let Some(depend_0) = variable.depend_0.as_deref() else {
        report.add_check(ValidationCheck::failed(Section::TimeSeries, name, "no DEPEND_0 attribute"));
        return;
    };

    let timestamps = series
        .entry(depend_0.to_string())
        .or_insert_with(|| {
            read_time_series(container, depend_0)
                .map(|s| s.len())
                .map_err(|e| e.to_string())
        })
        .clone();

    match timestamps {
        Err(message) => report.add_check(ValidationCheck::failed(Section::TimeSeries, name, message)),
        Ok(count) if count != variable.len() => report.add_check(ValidationCheck::failed(
            Section::TimeSeries,
            name,
            format!(
                "{} samples but {} has {} timestamps",
                variable.len(),
                depend_0,
                count
            ),
        )),
        Ok(_) => report.add_check(ValidationCheck::ok(Section::TimeSeries, name)),
    }
}

fn check_unreferenced<C: Container + ?Sized>(
    container: &mut C,
    channels: &[Variable],
    series: &BTreeMap<String, Result<usize, String>>,
    report: &mut ValidationReport,
) {
    let known: Vec<String> = channels
        .iter()
        .filter_map(|v| v.container_name().ok())
        .chain(series.keys().cloned())
        .collect();
    let unreferenced: Vec<String> = container
        .variable_names()
        .into_iter()
        .filter(|name| !known.contains(name))
        .collect();

    if unreferenced.is_empty() {
        report.add_check(ValidationCheck::ok(Section::Structure, "No unreferenced variables"));
    } else {
        report.add_check(ValidationCheck::warning(
            Section::Structure,
            "No unreferenced variables",
            unreferenced.join(", "),
        ));
    }
}
