//! # imagcdf - INTERMAGNET ImagCDF Schema Layer
//!
//! `imagcdf` maps geomagnetic-observatory metadata and time series to and
//! from a generic attribute/record container, following the INTERMAGNET
//! ImagCDF conventions.
//!
//! ## Key Features
//!
//! - **Typed metadata**: the global attributes of an ImagCDF file as one
//!   [`Metadata`](metadata::Metadata) record, with canonical defaults and
//!   title/description/format-version validation on read.
//!
//! - **Bit-exact naming**: container variable names, `DEPEND_0` links and
//!   axis labels are derived from the element code, so files written here
//!   read back in any ImagCDF tool.
//!
//! - **TT2000 time**: nanoseconds since J2000 with the full leap-second
//!   table, exact to the nanosecond across conversions.
//!
//! - **Pluggable storage**: everything goes through the
//!   [`Container`](container::Container) trait; an in-memory container and a
//!   file-backed session are included.
//!
//! ## Quick Start
//!
//! ```rust
//! use imagcdf::container::MemoryContainer;
//! use imagcdf::metadata::{read_metadata, write_metadata, Metadata};
//! use imagcdf::schema::{PublicationLevel, VECTOR_TIMES};
//! use imagcdf::time::Tt2000;
//! use imagcdf::variable::{read_variable, write_time_series, write_variable, TimeSeries, Variable};
//! use imagcdf::schema::VariableType;
//!
//! let mut container = MemoryContainer::new();
//!
//! let metadata = Metadata {
//!     iaga_code: "ESK".to_string(),
//!     elements_recorded: "XYZ".to_string(),
//!     publication_level: PublicationLevel::Level4,
//!     ..Metadata::default()
//! };
//! write_metadata(&mut container, &metadata)?;
//!
//! let x = Variable::geomagnetic("X")
//!     .with_description("Geomagnetic Field Element X", "nT")
//!     .with_data(vec![17180.2, 17180.4]);
//! write_variable(&mut container, &x, false)?;
//!
//! let start = Tt2000::to_epoch(2024, 1, 1, 0, 0, 0)?;
//! write_time_series(&mut container, &TimeSeries::regular(VECTOR_TIMES, start, 60, 2))?;
//!
//! assert_eq!(read_metadata(&mut container)?.iaga_code, "ESK");
//! let read = read_variable(&mut container, VariableType::GeomagneticFieldElement, "X")?;
//! assert_eq!(read.depend_0.as_deref(), Some(VECTOR_TIMES));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! ## Architecture
//!
//! - [`time`]: TT2000 epoch type, calendar conversion and timestamp series
//! - [`schema`]: attribute names, canonical strings, levels and naming rules
//! - [`container`]: the storage trait and its memory/file implementations
//! - [`metadata`]: global metadata model and codec
//! - [`variable`]: channel and time-series models and codecs
//! - [`dataset`]: whole-file read and write
//! - [`filename`]: conventional ImagCDF file names
//! - [`validator`]: integrity report for an existing file
//! - [`error`]: the error taxonomy shared by all of the above

#![warn(missing_docs)]
#![deny(rustdoc::missing_crate_level_docs)]
#![allow(clippy::too_many_arguments)]

mod attributes;
pub mod container;
pub mod dataset;
pub mod error;
pub mod filename;
pub mod metadata;
pub mod schema;
pub mod time;
pub mod validator;
pub mod variable;

pub use error::{ImagCdfError, Result};

/// Re-export commonly used types for convenience
pub mod prelude {
    pub use crate::container::{
        AttrValue, Compression, Container, DataType, FileContainer, MemoryContainer, OpenMode,
        Status,
    };
    pub use crate::dataset::{read_dataset, write_dataset, Dataset, WriteStats};
    pub use crate::error::{describe_error, ImagCdfError, Result, ValidationError};
    pub use crate::filename::{make_filename, make_filename_for_period, Cadence, Coverage};
    pub use crate::metadata::{read_metadata, write_metadata, Metadata};
    pub use crate::schema::{PublicationLevel, StandardLevel, VariableType};
    pub use crate::time::{Tt2000, TimeError};
    pub use crate::validator::{validate_container, validate_file, ValidationReport};
    pub use crate::variable::{
        probe_variable, read_temperatures, read_time_series, read_variable, write_time_series,
        write_variable, TimeSeries, Variable,
    };
}
