/// Format description, always [`crate::schema::IMAGCDF_FORMAT_DESCRIPTION`]
pub const FORMAT_DESCRIPTION: &str = "FormatDescription";
/// Format version text, e.g. "1.3"
pub const FORMAT_VERSION: &str = "FormatVersion";
/// Title, always [`crate::schema::IMAGCDF_TITLE`]
pub const TITLE: &str = "Title";
/// IAGA station code
pub const IAGA_CODE: &str = "IagaCode";
/// Concatenated element codes, e.g. "HDZS"
pub const ELEMENTS_RECORDED: &str = "ElementsRecorded";
/// Publication level "1" to "4"
pub const PUBLICATION_LEVEL: &str = "PublicationLevel";
/// Publication date (epoch time)
pub const PUBLICATION_DATE: &str = "PublicationDate";
/// Observatory name
pub const OBSERVATORY_NAME: &str = "ObservatoryName";
/// Geodetic latitude in degrees
pub const LATITUDE: &str = "Latitude";
/// Geodetic longitude in degrees
pub const LONGITUDE: &str = "Longitude";
/// Elevation in metres
pub const ELEVATION: &str = "Elevation";
/// Operating institution
pub const INSTITUTION: &str = "Institution";
/// Vector sensor orientation (optional)
pub const VECTOR_SENS_ORIENT: &str = "VectorSensOrient";
/// Standard conformance level
pub const STANDARD_LEVEL: &str = "StandardLevel";
/// Standard name (optional)
pub const STANDARD_NAME: &str = "StandardName";
/// Standard version (optional)
pub const STANDARD_VERSION: &str = "StandardVersion";
/// Partial standard description (optional)
pub const PARTIAL_STAND_DESC: &str = "PartialStandDesc";
/// Data source
pub const SOURCE: &str = "Source";
/// Conditions of use (optional)
pub const TERMS_OF_USE: &str = "TermsOfUse";
/// Unique identifier (optional)
pub const UNIQUE_IDENTIFIER: &str = "UniqueIdentifier";
/// Parent identifiers, one entry each
pub const PARENT_IDENTIFIERS: &str = "ParentIdentifiers";
/// Reference links, one entry each
pub const REFERENCE_LINKS: &str = "ReferenceLinks";
