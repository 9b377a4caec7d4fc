use serde::{Deserialize, Serialize};

use super::terms::INTERMAGNET_TERMS_OF_USE;
use crate::error::ValidationError;
use crate::schema::{
    PublicationLevel, StandardLevel, IMAGCDF_DEFAULT_FORMAT_VERSION, IMAGCDF_FORMAT_DESCRIPTION,
    IMAGCDF_TITLE, MAX_FORMAT_VERSION_TENTHS, MIN_FORMAT_VERSION_TENTHS,
};
use crate::time::Tt2000;

/// Dataset-level metadata, stored as ImagCDF global attributes.
///
/// `Default` fills the canonical title, format description, format version
/// and INTERMAGNET terms of use; everything else starts empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Metadata {
    /// Always "INTERMAGNET CDF Format"
    pub format_description: String,

    /// "major.minor", 1.1 to 1.3
    pub format_version: String,

    /// Always "Geomagnetic time series data"
    pub title: String,

    /// IAGA station code, e.g. "ESK"
    pub iaga_code: String,

    /// Recorded element codes in storage order, e.g. "HDZS"
    pub elements_recorded: String,

    /// Publication level
    pub publication_level: PublicationLevel,

    /// Date the data was published
    pub publication_date: Tt2000,

    /// Full observatory name
    pub observatory_name: String,

    /// Geodetic latitude in degrees
    pub latitude: f64,

    /// Geodetic longitude in degrees
    pub longitude: f64,

    /// Elevation in metres
    pub elevation: f64,

    /// Operating institution
    pub institution: String,

    /// Orientation of the vector sensor, e.g. "HDZF"
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vector_sens_orient: Option<String>,

    /// Standard conformance level
    pub standard_level: StandardLevel,

    /// Name of the standard conformed to, e.g. "INTERMAGNET_1-Minute"
    #[serde(skip_serializing_if = "Option::is_none")]
    pub standard_name: Option<String>,

    /// Version of the standard
    #[serde(skip_serializing_if = "Option::is_none")]
    pub standard_version: Option<String>,

    /// Which parts of the standard are met, for partial conformance
    #[serde(skip_serializing_if = "Option::is_none")]
    pub partial_stand_desc: Option<String>,

    /// Data source, e.g. "institute"
    pub source: String,

    /// Conditions of use
    #[serde(skip_serializing_if = "Option::is_none")]
    pub terms_of_use: Option<String>,

    /// Unique identifier, e.g. a DOI
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unique_identifier: Option<String>,

    /// Identifiers of the datasets this one was derived from
    #[serde(default)]
    pub parent_identifiers: Vec<String>,

    /// Related links
    #[serde(default)]
    pub reference_links: Vec<String>,
}

impl Default for Metadata {
    fn default() -> Self {
        Self {
            format_description: IMAGCDF_FORMAT_DESCRIPTION.to_string(),
            format_version: IMAGCDF_DEFAULT_FORMAT_VERSION.to_string(),
            title: IMAGCDF_TITLE.to_string(),
            iaga_code: String::new(),
            elements_recorded: String::new(),
            publication_level: PublicationLevel::default(),
            publication_date: Tt2000::default(),
            observatory_name: String::new(),
            latitude: 0.0,
            longitude: 0.0,
            elevation: 0.0,
            institution: String::new(),
            vector_sens_orient: None,
            standard_level: StandardLevel::default(),
            standard_name: None,
            standard_version: None,
            partial_stand_desc: None,
            source: String::new(),
            terms_of_use: Some(INTERMAGNET_TERMS_OF_USE.to_string()),
            unique_identifier: None,
            parent_identifiers: Vec::new(),
            reference_links: Vec::new(),
        }
    }
}

fn is_blank(text: &str) -> bool {
    text.trim().is_empty()
}

fn fill_if_blank(field: &mut String, default: &str) {
    if is_blank(field) {
        *field = default.to_string();
    }
}

/// Parse "major.minor" into tenths, e.g. "1.3" -> 13.
///
/// Both parts are plain decimal digits; the minor part is a single digit
/// and the major part has no leading zero.
///
/// ```
/// use imagcdf::metadata::parse_format_version;
///
/// assert_eq!(parse_format_version("1.2"), Some(12));
/// assert_eq!(parse_format_version("1.12"), None);
/// assert_eq!(parse_format_version("+1.2"), None);
/// assert_eq!(parse_format_version("one"), None);
/// ```
pub fn parse_format_version(text: &str) -> Option<u32> {
    let (major, minor) = text.trim().split_once('.')?;
    let is_digits = |part: &str| !part.is_empty() && part.bytes().all(|b| b.is_ascii_digit());
    if !is_digits(major) || !is_digits(minor) || minor.len() != 1 {
        return None;
    }
    if major.len() > 1 && major.starts_with('0') {
        return None;
    }
    let major: u32 = major.parse().ok()?;
    let minor: u32 = minor.parse().ok()?;
    major.checked_mul(10)?.checked_add(minor)
}

impl Metadata {
    /// Metadata with the canonical defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace blank title, format description, format version and terms of
    /// use with their defaults.
    pub fn apply_defaults(&mut self) {
        fill_if_blank(&mut self.title, IMAGCDF_TITLE);
        fill_if_blank(&mut self.format_description, IMAGCDF_FORMAT_DESCRIPTION);
        fill_if_blank(&mut self.format_version, IMAGCDF_DEFAULT_FORMAT_VERSION);
        if self.terms_of_use.as_deref().map_or(true, is_blank) {
            self.terms_of_use = Some(INTERMAGNET_TERMS_OF_USE.to_string());
        }
    }

    /// [`Metadata::apply_defaults`] by value
    pub fn with_defaults(mut self) -> Self {
        self.apply_defaults();
        self
    }

    /// Format version in tenths, if it parses and is supported.
    pub fn format_version_tenths(&self) -> Result<u32, ValidationError> {
        parse_format_version(&self.format_version)
            .filter(|tenths| (MIN_FORMAT_VERSION_TENTHS..=MAX_FORMAT_VERSION_TENTHS).contains(tenths))
            .ok_or_else(|| ValidationError::FormatVersion(self.format_version.clone()))
    }

    /// Check the cross-field schema rules: canonical title and description
    /// (case-insensitive) and a supported format version.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !self.title.trim().eq_ignore_ascii_case(IMAGCDF_TITLE) {
            return Err(ValidationError::Title(self.title.clone()));
        }
        if !self
            .format_description
            .trim()
            .eq_ignore_ascii_case(IMAGCDF_FORMAT_DESCRIPTION)
        {
            return Err(ValidationError::FormatDescription(
                self.format_description.clone(),
            ));
        }
        self.format_version_tenths()?;
        Ok(())
    }

    /// Element codes from `elements_recorded`, in order
    pub fn elements(&self) -> impl Iterator<Item = char> + '_ {
        self.elements_recorded.chars().filter(|c| !c.is_whitespace())
    }
}
