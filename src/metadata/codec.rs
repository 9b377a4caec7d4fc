use log::{debug, info, warn};

use super::model::Metadata;
use crate::attributes::{
    get_global, get_global_entries, probe_global, put_global, truncate_global_entries,
};
use crate::container::Container;
use crate::error::Result;
use crate::schema::global_attrs::*;
use crate::schema::{PublicationLevel, StandardLevel};
use crate::time::Tt2000;

fn put_optional<C: Container + ?Sized>(
    container: &mut C,
    name: &str,
    value: Option<&str>,
) -> Result<()> {
    match value {
        Some(text) => put_global(container, name, 0, text),
        None => {
            debug!("Skipping absent optional attribute {}", name);
            Ok(())
        }
    }
}

/// Write a repeatable attribute as entries 0..n, dropping any entries a
/// previous write left beyond n.
fn put_entries<C: Container + ?Sized>(
    container: &mut C,
    name: &str,
    values: &[String],
) -> Result<()> {
    for (entry, value) in values.iter().enumerate() {
        put_global(container, name, entry, value.as_str())?;
    }
    truncate_global_entries(container, name, values.len())?;
    Ok(())
}

/// Write dataset metadata as global attributes.
///
/// Blank defaultable fields are filled first (see
/// [`Metadata::apply_defaults`]). Metadata that would not validate on read
/// is still written, with a warning.
pub fn write_metadata<C: Container + ?Sized>(container: &mut C, metadata: &Metadata) -> Result<()> {
    let metadata = metadata.clone().with_defaults();
    if let Err(e) = metadata.validate() {
        warn!("Writing metadata that will not validate: {}", e);
    }

    put_global(container, FORMAT_DESCRIPTION, 0, metadata.format_description.as_str())?;
    put_global(container, FORMAT_VERSION, 0, metadata.format_version.as_str())?;
    put_global(container, TITLE, 0, metadata.title.as_str())?;
    put_global(container, IAGA_CODE, 0, metadata.iaga_code.as_str())?;
    put_global(container, ELEMENTS_RECORDED, 0, metadata.elements_recorded.as_str())?;
    put_global(container, PUBLICATION_LEVEL, 0, metadata.publication_level.as_str())?;
    put_global(container, PUBLICATION_DATE, 0, metadata.publication_date)?;
    put_global(container, OBSERVATORY_NAME, 0, metadata.observatory_name.as_str())?;
    put_global(container, LATITUDE, 0, metadata.latitude)?;
    put_global(container, LONGITUDE, 0, metadata.longitude)?;
    put_global(container, ELEVATION, 0, metadata.elevation)?;
    put_global(container, INSTITUTION, 0, metadata.institution.as_str())?;
    put_optional(container, VECTOR_SENS_ORIENT, metadata.vector_sens_orient.as_deref())?;
    put_global(container, STANDARD_LEVEL, 0, metadata.standard_level.as_str())?;
    put_optional(container, STANDARD_NAME, metadata.standard_name.as_deref())?;
    put_optional(container, STANDARD_VERSION, metadata.standard_version.as_deref())?;
    put_optional(container, PARTIAL_STAND_DESC, metadata.partial_stand_desc.as_deref())?;
    put_global(container, SOURCE, 0, metadata.source.as_str())?;
    put_optional(container, TERMS_OF_USE, metadata.terms_of_use.as_deref())?;
    put_optional(container, UNIQUE_IDENTIFIER, metadata.unique_identifier.as_deref())?;
    put_entries(container, PARENT_IDENTIFIERS, &metadata.parent_identifiers)?;
    put_entries(container, REFERENCE_LINKS, &metadata.reference_links)?;

    info!(
        "Wrote metadata for {} ({} elements)",
        metadata.iaga_code, metadata.elements_recorded
    );
    Ok(())
}

/// Read dataset metadata and validate it.
///
/// A validation failure is reported as [`crate::ImagCdfError::Validation`],
/// distinct from container errors.
pub fn read_metadata<C: Container + ?Sized>(container: &mut C) -> Result<Metadata> {
    let metadata = read_metadata_unvalidated(container)?;
    metadata.validate()?;
    info!(
        "Read metadata for {} ({} elements)",
        metadata.iaga_code, metadata.elements_recorded
    );
    Ok(metadata)
}

/// Read every global attribute without the schema checks, so a report can
/// describe a file that does not validate.
pub(crate) fn read_metadata_unvalidated<C: Container + ?Sized>(
    container: &mut C,
) -> Result<Metadata> {
    Ok(Metadata {
        format_description: get_global(container, FORMAT_DESCRIPTION, 0)?,
        format_version: get_global(container, FORMAT_VERSION, 0)?,
        title: get_global(container, TITLE, 0)?,
        iaga_code: get_global(container, IAGA_CODE, 0)?,
        elements_recorded: get_global(container, ELEMENTS_RECORDED, 0)?,
        publication_level: get_global::<String, _>(container, PUBLICATION_LEVEL, 0)?
            .parse::<PublicationLevel>()?,
        publication_date: get_global::<Tt2000, _>(container, PUBLICATION_DATE, 0)?,
        observatory_name: get_global(container, OBSERVATORY_NAME, 0)?,
        latitude: get_global(container, LATITUDE, 0)?,
        longitude: get_global(container, LONGITUDE, 0)?,
        elevation: get_global(container, ELEVATION, 0)?,
        institution: get_global(container, INSTITUTION, 0)?,
        vector_sens_orient: probe_optional(container, VECTOR_SENS_ORIENT)?,
        standard_level: get_global::<String, _>(container, STANDARD_LEVEL, 0)?
            .parse::<StandardLevel>()?,
        standard_name: probe_optional(container, STANDARD_NAME)?,
        standard_version: probe_optional(container, STANDARD_VERSION)?,
        partial_stand_desc: probe_optional(container, PARTIAL_STAND_DESC)?,
        source: get_global(container, SOURCE, 0)?,
        terms_of_use: probe_optional(container, TERMS_OF_USE)?,
        unique_identifier: probe_optional(container, UNIQUE_IDENTIFIER)?,
        parent_identifiers: get_global_entries(container, PARENT_IDENTIFIERS)?,
        reference_links: get_global_entries(container, REFERENCE_LINKS)?,
    })
}

fn probe_optional<C: Container + ?Sized>(container: &mut C, name: &str) -> Result<Option<String>> {
    let value = probe_global(container, name, 0)?;
    if value.is_none() {
        debug!("Optional attribute {} is absent", name);
    }
    Ok(value)
}
