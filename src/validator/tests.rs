use super::*;
use crate::container::{AttrValue, DataType, MemoryContainer};
use crate::dataset::{write_dataset, Dataset};
use crate::metadata::Metadata;
use crate::schema::{global_attrs, variable_attrs, VECTOR_TIMES};
use crate::time::Tt2000;
use crate::variable::{TimeSeries, Variable};

fn valid_container() -> MemoryContainer {
    let metadata = Metadata {
        iaga_code: "ESK".to_string(),
        elements_recorded: "HDZ".to_string(),
        ..Metadata::default()
    };
    let start = Tt2000::to_epoch(2024, 1, 1, 0, 0, 0).unwrap();
    let mut dataset = Dataset::new(metadata)
        .with_time_series(TimeSeries::regular(VECTOR_TIMES, start, 60, 2));
    for code in ["H", "D", "Z"] {
        dataset = dataset.with_variable(
            Variable::geomagnetic(code)
                .with_description(format!("Geomagnetic Field Element {code}"), "nT")
                .with_valid_range(-88000.0, 88000.0)
                .with_data(vec![1.0, 2.0]),
        );
    }

    let mut container = MemoryContainer::new();
    write_dataset(&mut container, &dataset).unwrap();
    container
}

fn failed(report: &ValidationReport, name: &str) -> String {
    match &report.check(name).unwrap().status {
        CheckStatus::Failed(message) => message.clone(),
        other => panic!("{name} did not fail: {other:?}"),
    }
}

#[test]
fn test_validation_report_display() {
    let mut report = ValidationReport::new("esk.cdf");
    report.add_check(ValidationCheck::warning(Section::Structure, "Test check 2", "This is a warning"));
    report.add_check(ValidationCheck::ok(Section::Metadata, "Test check 1"));
    report.add_check(ValidationCheck::failed(Section::Metadata, "Test check 3", "This failed"));

    let output = format!("{}", report);
    assert!(output.starts_with("ImagCDF validation of esk.cdf\n"));
    assert!(output.contains("\nMetadata (1 passed, 0 warnings, 1 failed)\n  ✓ Test check 1\n  ✗ Test check 3: This failed\n"));
    assert!(output.contains("\nStructure (0 passed, 1 warnings, 0 failed)\n  ⚠ Test check 2: This is a warning\n"));
    // sections print in file order, not insertion order
    assert!(output.find("Metadata").unwrap() < output.find("Structure").unwrap());
    assert!(!output.contains("Channels"));
    assert!(output.contains("3 checks: 1 passed, 1 warnings, 1 failed"));
    assert!(output.ends_with("Validation FAILED\n"));
}

#[test]
fn test_checks_are_grouped_by_section() {
    let mut container = valid_container();
    let report = validate_container(&mut container, "memory");
    assert_eq!(report.section(Section::Metadata).count(), 3);
    assert_eq!(report.section(Section::Channels).count(), 6);
    assert_eq!(report.section(Section::TimeSeries).count(), 3);
    assert_eq!(report.section(Section::Structure).count(), 1);
    assert_eq!(
        report.tally(),
        Tally {
            passed: 13,
            warnings: 0,
            failed: 0
        }
    );
    assert!(report.to_string().contains("\nTime series (3 passed, 0 warnings, 0 failed)\n"));
}

#[test]
fn test_incomplete_temperature_channel_fails() {
    let mut container = valid_container();
    container.create_variable("Temperature1", DataType::Double).unwrap();
    let report = validate_container(&mut container, "memory");
    assert!(failed(&report, "Temperature channels readable").contains("Temperature1.FIELDNAM"));
    assert_eq!(
        report.check("Temperature channels readable").unwrap().section,
        Section::Channels
    );
}

#[test]
fn test_valid_container_passes() {
    let mut container = valid_container();
    let report = validate_container(&mut container, "memory");
    assert!(!report.has_failures(), "{report}");
    assert!(!report.has_warnings(), "{report}");
    assert!(report.check("Element D present").is_some());
    assert!(report.check("GeomagneticFieldZ time series").is_some());
}

#[test]
fn test_empty_container_fails_metadata() {
    let mut container = MemoryContainer::new();
    let report = validate_container(&mut container, "memory");
    assert_eq!(report.checks.len(), 1);
    assert!(failed(&report, "Global attributes readable").contains("not found"));
}

#[test]
fn test_bad_version_still_checks_channels() {
    let mut container = valid_container();
    container
        .put_global_attr(global_attrs::FORMAT_VERSION, 0, AttrValue::from("2.0"))
        .unwrap();
    let report = validate_container(&mut container, "memory");
    assert!(failed(&report, "Title, description and format version").contains("2.0"));
    assert!(report.check("Element H present").is_some());
}

#[test]
fn test_missing_element_and_unknown_code() {
    let mut container = valid_container();
    container
        .put_global_attr(global_attrs::ELEMENTS_RECORDED, 0, AttrValue::from("HDZQ"))
        .unwrap();
    let report = validate_container(&mut container, "memory");
    assert!(failed(&report, "Element Q present").contains("GeomagneticFieldQ"));
    assert!(matches!(
        report.check("Elements recorded").unwrap().status,
        CheckStatus::Warning(_)
    ));
}

#[test]
fn test_inverted_valid_range() {
    let mut container = valid_container();
    container
        .put_variable_attr(variable_attrs::VALIDMIN, "GeomagneticFieldD", AttrValue::Double(10.0))
        .unwrap();
    container
        .put_variable_attr(variable_attrs::VALIDMAX, "GeomagneticFieldD", AttrValue::Double(-10.0))
        .unwrap();
    let report = validate_container(&mut container, "memory");
    assert_eq!(
        failed(&report, "GeomagneticFieldD valid range"),
        "VALIDMIN 10 exceeds VALIDMAX -10"
    );
}

#[test]
fn test_time_series_problems() {
    let mut container = valid_container();
    container.put_double_records("GeomagneticFieldH", 2, &[3.0]).unwrap();
    container
        .put_variable_attr(variable_attrs::DEPEND_0, "GeomagneticFieldZ", AttrValue::from("Extra"))
        .unwrap();
    container.create_variable("Extra", DataType::Double).unwrap();

    let report = validate_container(&mut container, "memory");
    assert_eq!(
        failed(&report, "GeomagneticFieldH time series"),
        format!("3 samples but {VECTOR_TIMES} has 2 timestamps")
    );
    assert!(failed(&report, "GeomagneticFieldZ time series").contains("expected"));
    assert!(report.check("GeomagneticFieldD time series").unwrap().status == CheckStatus::Ok);
}

#[test]
fn test_unreferenced_variable_warns() {
    let mut container = valid_container();
    container.create_variable("Notes", DataType::Char).unwrap();
    let report = validate_container(&mut container, "memory");
    assert!(!report.has_failures());
    assert_eq!(
        report.check("No unreferenced variables").unwrap().status,
        CheckStatus::Warning("Notes".to_string())
    );
}

#[test]
fn test_validate_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let err = validate_file(&dir.path().join("absent.cdf")).unwrap_err();
    assert!(err.to_string().starts_with("open container"));
}
