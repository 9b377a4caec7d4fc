//! # Metadata Codec
//!
//! Dataset-level ImagCDF metadata and its mapping onto global attributes.
//!
//! Every attribute is a single entry of a fixed primitive type, except
//! `ParentIdentifiers` and `ReferenceLinks`, which use one entry per value
//! and are discovered on read by probing entries 0, 1, 2, ... until one is
//! absent.
//!
//! | Kind | Attributes |
//! |------|------------|
//! | text | FormatDescription, FormatVersion, Title, IagaCode, ElementsRecorded, PublicationLevel, ObservatoryName, Institution, StandardLevel, Source |
//! | double | Latitude, Longitude, Elevation |
//! | epoch time | PublicationDate |
//! | optional text | VectorSensOrient, StandardName, StandardVersion, PartialStandDesc, TermsOfUse, UniqueIdentifier |
//! | repeatable text | ParentIdentifiers, ReferenceLinks |

mod codec;
mod display;
mod model;
mod terms;

#[cfg(test)]
mod tests;

pub use codec::{read_metadata, write_metadata};
pub(crate) use codec::read_metadata_unvalidated;
pub use model::{parse_format_version, Metadata};
pub use terms::INTERMAGNET_TERMS_OF_USE;
