//! # ImagCDF Validation Module
//!
//! Integrity checks over an opened container, collected into a
//! [`ValidationReport`] instead of stopping at the first problem.
//!
//! ## Validation Checklist
//!
//! 1. **Metadata**: global attributes readable, canonical title and
//!    description, supported format version, usable `ElementsRecorded`
//! 2. **Channels**: every recorded element present, temperature channels
//!    readable, `VALIDMIN <= VALIDMAX`
//! 3. **Time series**: every `DEPEND_0` present, typed as epoch time, and as
//!    long as the channel it indexes
//! 4. **Structure**: no variables outside the schema
//!
//! ## Usage
//!
//! ```rust,no_run
//! use imagcdf::validator::validate_file;
//! use std::path::Path;
//!
//! let report = validate_file(Path::new("esk_20240101_pt1m_4.cdf"))?;
//! println!("{}", report);
//! # Ok::<(), imagcdf::ImagCdfError>(())
//! ```

use std::path::Path;

use log::info;

pub use report::{CheckStatus, Section, Tally, ValidationCheck, ValidationReport};

use crate::container::{Compression, Container, FileContainer, OpenMode};
use crate::error::{ErrorContext, ImagCdfError, Result};

mod channels;
mod metadata;
mod report;

#[cfg(test)]
mod tests;

/// Run every check against an open container.
pub fn validate_container<C: Container + ?Sized>(
    container: &mut C,
    target: impl Into<String>,
) -> ValidationReport {
    let mut report = ValidationReport::new(target);

    if let Some(metadata) = metadata::check_metadata(container, &mut report) {
        channels::check_channels(container, &metadata, &mut report);
    }

    info!(
        "Validated {}: {} passed, {} warnings, {} failed",
        report.target,
        report.success_count(),
        report.warning_count(),
        report.failure_count()
    );
    report
}

/// Open a container file read-only and validate it.
///
/// Only failing to open the file is an error; everything found inside it is
/// reported as a check.
pub fn validate_file(path: &Path) -> Result<ValidationReport> {
    let target = path.display().to_string();
    let mut container = FileContainer::open(path, OpenMode::Open, Compression::None).map_err(|e| {
        ImagCdfError::from_container(
            e,
            ErrorContext::new("open container").with_parameter(target.clone()),
        )
    })?;
    Ok(validate_container(&mut container, target))
}
