use super::*;
use crate::container::{AttrValue, Container, MemoryContainer};
use crate::schema::{global_attrs, PublicationLevel, StandardLevel};
use crate::time::Tt2000;
use crate::ImagCdfError;

fn sample_metadata() -> Metadata {
    Metadata {
        iaga_code: "ESK".to_string(),
        elements_recorded: "HDZS".to_string(),
        publication_level: PublicationLevel::Level4,
        publication_date: Tt2000::to_epoch(2024, 3, 1, 0, 0, 0).unwrap(),
        observatory_name: "Eskdalemuir".to_string(),
        latitude: 55.314,
        longitude: 356.794,
        elevation: 245.0,
        institution: "British Geological Survey".to_string(),
        vector_sens_orient: Some("HDZ".to_string()),
        standard_level: StandardLevel::Partial,
        standard_name: Some("INTERMAGNET_1-Minute".to_string()),
        standard_version: Some("1.1".to_string()),
        partial_stand_desc: Some("IMOM-11,IMOM-12".to_string()),
        source: "institute".to_string(),
        unique_identifier: Some("doi:10.0000/esk".to_string()),
        parent_identifiers: vec!["esk-raw".to_string(), "esk-baseline".to_string()],
        reference_links: vec!["https://www.intermagnet.org".to_string()],
        ..Metadata::default()
    }
}

#[test]
fn test_defaults() {
    let metadata = Metadata::new();
    assert_eq!(metadata.title, "Geomagnetic time series data");
    assert_eq!(metadata.format_description, "INTERMAGNET CDF Format");
    assert_eq!(metadata.format_version, "1.3");
    assert_eq!(metadata.terms_of_use.as_deref(), Some(INTERMAGNET_TERMS_OF_USE));
    assert!(metadata.validate().is_ok());

    let blank = Metadata {
        title: String::new(),
        format_description: "  ".to_string(),
        format_version: String::new(),
        terms_of_use: Some(String::new()),
        ..Metadata::default()
    }
    .with_defaults();
    assert_eq!(blank, Metadata::default());
}

#[test]
fn test_format_version_range() {
    for accepted in ["1.1", "1.2", "1.3"] {
        let metadata = Metadata {
            format_version: accepted.to_string(),
            ..Metadata::default()
        };
        assert!(metadata.validate().is_ok(), "{accepted} should validate");
    }
    for rejected in ["1.0", "1.4", "2.0", "1", "1.x", "", "+1.3", "1.+3", "01.3", "1.03", "1.3.0"] {
        let metadata = Metadata {
            format_version: rejected.to_string(),
            ..Metadata::default()
        };
        assert_eq!(
            metadata.validate(),
            Err(crate::error::ValidationError::FormatVersion(rejected.to_string()))
        );
    }
}

#[test]
fn test_title_and_description_case_insensitive() {
    let metadata = Metadata {
        title: "GEOMAGNETIC TIME SERIES DATA".to_string(),
        format_description: "intermagnet cdf format".to_string(),
        ..Metadata::default()
    };
    assert!(metadata.validate().is_ok());

    let metadata = Metadata {
        title: "Magnetic data".to_string(),
        ..Metadata::default()
    };
    assert!(matches!(
        metadata.validate(),
        Err(crate::error::ValidationError::Title(_))
    ));
}

#[test]
fn test_round_trip() {
    let mut container = MemoryContainer::new();
    let metadata = sample_metadata();
    write_metadata(&mut container, &metadata).unwrap();

    let read = read_metadata(&mut container).unwrap();
    assert_eq!(read, metadata);
}

#[test]
fn test_absent_optionals_stay_absent() {
    let mut container = MemoryContainer::new();
    let metadata = Metadata {
        vector_sens_orient: None,
        standard_name: None,
        standard_version: None,
        partial_stand_desc: None,
        unique_identifier: None,
        parent_identifiers: Vec::new(),
        reference_links: Vec::new(),
        ..sample_metadata()
    };
    write_metadata(&mut container, &metadata).unwrap();

    assert!(container
        .get_global_attr(global_attrs::STANDARD_NAME, 0)
        .unwrap_err()
        .is_not_found());

    let read = read_metadata(&mut container).unwrap();
    assert_eq!(read, metadata);
    assert!(read.parent_identifiers.is_empty());
}

#[test]
fn test_rewrite_drops_surplus_entries() {
    let mut container = MemoryContainer::new();
    write_metadata(&mut container, &sample_metadata()).unwrap();

    let rewritten = Metadata {
        parent_identifiers: vec!["esk-definitive".to_string()],
        reference_links: Vec::new(),
        ..sample_metadata()
    };
    write_metadata(&mut container, &rewritten).unwrap();

    let read = read_metadata(&mut container).unwrap();
    assert_eq!(read.parent_identifiers, vec!["esk-definitive"]);
    assert!(read.reference_links.is_empty());
    assert!(container
        .get_global_attr(global_attrs::PARENT_IDENTIFIERS, 1)
        .unwrap_err()
        .is_not_found());
}

#[test]
fn test_write_fills_terms_of_use() {
    let mut container = MemoryContainer::new();
    let metadata = Metadata {
        terms_of_use: None,
        ..sample_metadata()
    };
    write_metadata(&mut container, &metadata).unwrap();
    let read = read_metadata(&mut container).unwrap();
    assert_eq!(read.terms_of_use.as_deref(), Some(INTERMAGNET_TERMS_OF_USE));
}

#[test]
fn test_missing_required_attribute_is_fatal() {
    let mut container = MemoryContainer::new();
    write_metadata(&mut container, &sample_metadata()).unwrap();

    let mut partial = MemoryContainer::new();
    for name in container.global_attribute_names() {
        if name == global_attrs::INSTITUTION {
            continue;
        }
        let value = container.get_global_attr(&name, 0).unwrap();
        partial.put_global_attr(&name, 0, value).unwrap();
    }

    let err = read_metadata(&mut partial).unwrap_err();
    assert!(err.is_not_found());
    assert_eq!(err.context().and_then(|c| c.parameter()), Some("Institution"));
}

#[test]
fn test_wrong_attribute_type() {
    let mut container = MemoryContainer::new();
    write_metadata(&mut container, &sample_metadata()).unwrap();
    container
        .put_global_attr(global_attrs::LATITUDE, 0, AttrValue::from("55.3"))
        .unwrap();

    let err = read_metadata(&mut container).unwrap_err();
    assert!(matches!(err, ImagCdfError::TypeMismatch { .. }));
}

#[test]
fn test_format_version_requires_plain_digits() {
    assert_eq!(parse_format_version(" 1.3 "), Some(13));
    assert_eq!(parse_format_version("0.9"), Some(9));
    assert_eq!(parse_format_version("12.0"), Some(120));
    for text in ["+1.3", "1.+3", "-1.3", "01.3", "1.03", ".3", "1.", "1.3.0", "１.3"] {
        assert_eq!(parse_format_version(text), None, "{text:?} should not parse");
    }
}

#[test]
fn test_invalid_version_is_validation_failure() {
    let mut container = MemoryContainer::new();
    let metadata = Metadata {
        format_version: "1.4".to_string(),
        ..sample_metadata()
    };
    // written with a warning, rejected on read
    write_metadata(&mut container, &metadata).unwrap();
    let err = read_metadata(&mut container).unwrap_err();
    assert!(err.is_validation());
    assert!(!err.is_not_found());
}

#[test]
fn test_unknown_publication_level() {
    let mut container = MemoryContainer::new();
    write_metadata(&mut container, &sample_metadata()).unwrap();
    container
        .put_global_attr(global_attrs::PUBLICATION_LEVEL, 0, AttrValue::from("7"))
        .unwrap();
    let err = read_metadata(&mut container).unwrap_err();
    assert!(err.is_validation());
}

#[test]
fn test_display_dump() {
    let text = sample_metadata().to_string();
    assert!(text.starts_with("ImagCDF Global Attributes:\n"));
    assert!(text.contains("    IagaCode: ESK\n"));
    assert!(text.contains("    PublicationLevel: 4\n"));
    assert!(text.contains("    PublicationDate: 2024-03-01T00:00:00\n"));
    assert!(text.contains("    Latitude: 55.314000\n"));
    assert!(text.contains("    ParentIdentifiers: esk-raw\n"));
    assert!(text.contains("\n                       esk-baseline\n"));

    let terms_line = text
        .lines()
        .find(|line| line.starts_with("    TermsOfUse: "))
        .unwrap();
    assert_eq!(terms_line.len(), "    TermsOfUse: ".len() + 50);
}
