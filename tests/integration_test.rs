//! Integration tests for imagcdf
//!
//! These tests drive the public API end to end: metadata, channels and time
//! series through both container implementations, plus the naming and time
//! rules every ImagCDF reader relies on.

use imagcdf::container::{Compression, Container, FileContainer, MemoryContainer, OpenMode};
use imagcdf::dataset::{read_dataset, write_dataset, Dataset};
use imagcdf::filename::{make_filename, Cadence, Coverage};
use imagcdf::metadata::{read_metadata, write_metadata, Metadata};
use imagcdf::schema::{
    default_dependency, is_scalar, is_vector, PublicationLevel, StandardLevel, VariableType,
    MISSING_DATA_VALUE, VECTOR_TIMES,
};
use imagcdf::time::{self, Tt2000};
use imagcdf::validator::validate_file;
use imagcdf::variable::{
    read_temperatures, read_time_series, read_variable, write_time_series, write_variable,
    TimeSeries, Variable,
};
use tempfile::tempdir;

fn observatory_metadata() -> Metadata {
    Metadata {
        iaga_code: "HER".to_string(),
        elements_recorded: "HDZF".to_string(),
        publication_level: PublicationLevel::Level4,
        publication_date: Tt2000::to_epoch(2024, 5, 1, 0, 0, 0).unwrap(),
        observatory_name: "Hermanus".to_string(),
        latitude: -34.425,
        longitude: 19.225,
        elevation: 26.0,
        institution: "SANSA".to_string(),
        vector_sens_orient: Some("HDZ".to_string()),
        standard_level: StandardLevel::Partial,
        standard_name: Some("INTERMAGNET_1-Minute".to_string()),
        partial_stand_desc: Some("IMOM-11,IMOM-12".to_string()),
        source: "institute".to_string(),
        unique_identifier: Some("doi:10.0000/her.2023".to_string()),
        parent_identifiers: vec!["her_2023_pt1s".to_string(), "her_2023_raw".to_string()],
        reference_links: vec!["https://www.intermagnet.org".to_string()],
        ..Metadata::default()
    }
}

fn minute_dataset() -> Dataset {
    let start = Tt2000::to_epoch(2023, 1, 1, 0, 0, 0).unwrap();
    let count = 1440;
    let mut dataset = Dataset::new(observatory_metadata())
        .with_time_series(TimeSeries::regular(VECTOR_TIMES, start, 60, count));
    for (code, base) in [("H", 10_250.0), ("D", -22.5), ("Z", -25_300.0), ("F", 27_310.0)] {
        let mut data: Vec<f64> = (0..count).map(|i| base + (i as f64).sin()).collect();
        data[100] = MISSING_DATA_VALUE;
        dataset = dataset.with_variable(
            Variable::geomagnetic(code)
                .with_description(format!("Geomagnetic Field Element {code}"), "nT")
                .with_valid_range(-88_000.0, 88_000.0)
                .with_depend_0(VECTOR_TIMES)
                .with_data(data),
        );
    }
    dataset
}

/// Test the complete write-read cycle through the in-memory container
#[test]
fn test_memory_write_read_cycle() {
    let mut container = MemoryContainer::new();
    let dataset = minute_dataset();
    write_dataset(&mut container, &dataset).unwrap();

    let read = read_dataset(&mut container).unwrap();
    assert_eq!(read, dataset);
}

/// Test the complete write-read cycle through files, with every compression
#[test]
fn test_file_write_read_cycle() {
    let dir = tempdir().unwrap();
    let dataset = minute_dataset();

    for compression in [
        Compression::None,
        Compression::Rle,
        Compression::Huffman,
        Compression::AdaptiveHuffman,
        Compression::Gzip(1),
        Compression::Gzip(9),
    ] {
        let path = dir.path().join(format!("her_20230101_pt1m_4_{compression}.cdf"));
        let mut file = FileContainer::open(&path, OpenMode::Create, compression).unwrap();
        write_dataset(&mut file, &dataset).unwrap();
        file.close().unwrap();

        let mut reopened = FileContainer::open(&path, OpenMode::Open, Compression::None).unwrap();
        assert_eq!(reopened.compression(), compression);
        assert_eq!(read_dataset(&mut reopened).unwrap(), dataset);
    }
}

#[test]
fn test_gzip_is_smaller() {
    let dir = tempdir().unwrap();
    let dataset = minute_dataset();
    let mut sizes = Vec::new();
    for compression in [Compression::None, Compression::gzip()] {
        let path = dir.path().join(format!("{compression}.cdf"));
        let mut file = FileContainer::open(&path, OpenMode::Create, compression).unwrap();
        write_dataset(&mut file, &dataset).unwrap();
        file.close().unwrap();
        sizes.push(std::fs::metadata(&path).unwrap().len());
    }
    assert!(sizes[1] < sizes[0]);
}

#[test]
fn test_open_modes() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("esk.cdf");

    assert!(FileContainer::open(&path, OpenMode::Open, Compression::None).is_err());
    FileContainer::open(&path, OpenMode::Create, Compression::None)
        .unwrap()
        .close()
        .unwrap();
    assert!(FileContainer::open(&path, OpenMode::Create, Compression::None).is_err());

    let mut session = FileContainer::open(&path, OpenMode::ForceCreate, Compression::None).unwrap();
    write_metadata(&mut session, &observatory_metadata()).unwrap();
    session.close().unwrap();

    let mut session = FileContainer::open(&path, OpenMode::Open, Compression::None).unwrap();
    assert_eq!(read_metadata(&mut session).unwrap().iaga_code, "HER");
}

/// Metadata round trip: required fields equal, optionals equal or both absent
#[test]
fn test_metadata_round_trip() {
    let mut container = MemoryContainer::new();
    let metadata = observatory_metadata();
    write_metadata(&mut container, &metadata).unwrap();
    let read = read_metadata(&mut container).unwrap();
    assert_eq!(read, metadata);
    assert_eq!(read.standard_version, None);

    let sparse = Metadata {
        iaga_code: "ABK".to_string(),
        ..Metadata::default()
    };
    let mut container = MemoryContainer::new();
    write_metadata(&mut container, &sparse).unwrap();
    let read = read_metadata(&mut container).unwrap();
    assert_eq!(read.vector_sens_orient, None);
    assert_eq!(read.unique_identifier, None);
    assert!(read.parent_identifiers.is_empty());
}

#[test]
fn test_format_versions() {
    for (version, accepted) in [("1.0", false), ("1.1", true), ("1.2", true), ("1.3", true), ("1.4", false)] {
        let metadata = Metadata {
            format_version: version.to_string(),
            ..observatory_metadata()
        };
        let mut container = MemoryContainer::new();
        write_metadata(&mut container, &metadata).unwrap();
        let result = read_metadata(&mut container);
        assert_eq!(result.is_ok(), accepted, "format version {version}");
        if !accepted {
            assert!(result.unwrap_err().is_validation());
        }
    }
}

#[test]
fn test_variable_round_trip_bit_exact() {
    let mut container = MemoryContainer::new();
    let samples = vec![
        f64::NAN,
        f64::INFINITY,
        -0.0,
        f64::MIN_POSITIVE,
        MISSING_DATA_VALUE,
        17_215.123_456_789,
    ];
    let z = Variable::geomagnetic("Z")
        .with_description("Geomagnetic Field Element Z", "nT")
        .with_valid_range(-88_000.0, 88_000.0)
        .with_data(samples.clone());
    write_variable(&mut container, &z, false).unwrap();

    let read = read_variable(&mut container, VariableType::GeomagneticFieldElement, "Z").unwrap();
    assert_eq!(read.field_name, "Geomagnetic Field Element Z");
    assert_eq!(read.units, "nT");
    assert_eq!(read.fill_value, MISSING_DATA_VALUE);
    assert_eq!(read.valid_min, -88_000.0);
    assert_eq!(read.valid_max, 88_000.0);
    let bits = |values: &[f64]| values.iter().map(|v| v.to_bits()).collect::<Vec<_>>();
    assert_eq!(bits(&read.data), bits(&samples));
}

#[test]
fn test_time_series_round_trip() {
    let mut container = MemoryContainer::new();
    let start = Tt2000::to_epoch(2016, 12, 31, 23, 59, 58).unwrap();
    let series = TimeSeries::regular("GeomagneticScalarTimes", start, 1, 4);
    write_time_series(&mut container, &series).unwrap();

    let read = read_time_series(&mut container, "GeomagneticScalarTimes").unwrap();
    assert_eq!(read, series);
    let formatted: Vec<String> = read.timestamps.iter().map(|t| t.format()).collect();
    assert_eq!(
        formatted,
        vec![
            "2016-12-31T23:59:58",
            "2016-12-31T23:59:59",
            "2016-12-31T23:59:60",
            "2017-01-01T00:00:00"
        ]
    );
}

#[test]
fn test_element_classification() {
    let geo = VariableType::GeomagneticFieldElement;
    assert!(is_vector(geo, "H"));
    assert!(!is_vector(geo, "S"));
    assert!(is_scalar(geo, "S"));
    assert!(!is_vector(VariableType::Temperature, "1"));
    assert!(!is_scalar(VariableType::Temperature, "1"));
}

#[test]
fn test_default_dependencies() {
    assert_eq!(
        default_dependency(VariableType::GeomagneticFieldElement, "D").unwrap(),
        "GeomagneticVectorTimes"
    );
    assert_eq!(
        default_dependency(VariableType::Temperature, "2").unwrap(),
        "Temperature2Times"
    );
}

#[test]
fn test_temperature_probe_stops_at_first_gap() {
    let mut container = MemoryContainer::new();
    for code in ["1", "2"] {
        let t = Variable::temperature(code)
            .with_description(format!("Temperature {code}"), "Celsius")
            .with_data(vec![20.0]);
        write_variable(&mut container, &t, false).unwrap();
    }

    let found = read_temperatures(&mut container).unwrap();
    assert_eq!(found.len(), 2);
    let err = read_variable(&mut container, VariableType::Temperature, "3").unwrap_err();
    assert!(err.is_not_found());
}

#[test]
fn test_reference_filename() {
    let start = time::to_epoch(1980, 1, 1, 0, 0, 0).unwrap();
    let name = make_filename(
        "",
        "AFO",
        start,
        PublicationLevel::Level1,
        Cadence::Minute,
        Coverage::Daily,
        true,
    );
    assert_eq!(name, "afo_19800101_pt1m_1.cdf");
}

#[test]
fn test_increment_matches_calendar() {
    let start = time::to_epoch(2000, 1, 1, 0, 0, 0).unwrap();
    assert_eq!(
        time::format(time::increment(start, 60)),
        time::format(time::to_epoch(2000, 1, 1, 0, 1, 0).unwrap())
    );
}

#[test]
fn test_session_status() {
    let mut container = MemoryContainer::new();
    assert!(read_metadata(&mut container).is_err());
    assert!(!container.last_status().is_ok());
    write_metadata(&mut container, &observatory_metadata()).unwrap();
    assert_eq!(container.last_status().to_string(), "Success");
}

#[test]
fn test_validate_written_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("her_20230101_pt1m_4.cdf");
    let mut file = FileContainer::open(&path, OpenMode::Create, Compression::gzip()).unwrap();
    write_dataset(&mut file, &minute_dataset()).unwrap();
    file.close().unwrap();

    let report = validate_file(&path).unwrap();
    assert!(!report.has_failures(), "{report}");
    assert!(report.to_string().contains("Validation PASSED"));
}

#[test]
fn test_suggested_filename_matches_data() {
    let dataset = minute_dataset();
    assert_eq!(
        dataset.suggested_filename("", true).as_deref(),
        Some("her_20230101_0000_pt1m_4.cdf")
    );
}
