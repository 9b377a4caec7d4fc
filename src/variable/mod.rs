//! # Variable and Time-Series Codecs
//!
//! Each measured channel is one record-varying double variable carrying the
//! attributes `FIELDNAM`, `UNITS`, `FILLVAL`, `VALIDMIN`, `VALIDMAX`,
//! `DEPEND_0`, `DISPLAY_TYPE` and `LABLAXIS`. `DEPEND_0` names the epoch-time
//! variable holding the channel's timestamps; one time series may be shared
//! by several channels.
//!
//! ```
//! use imagcdf::container::MemoryContainer;
//! use imagcdf::time::Tt2000;
//! use imagcdf::variable::{read_variable, write_time_series, write_variable, TimeSeries, Variable};
//! use imagcdf::schema::VariableType;
//!
//! let mut container = MemoryContainer::new();
//! let start = Tt2000::to_epoch(2024, 1, 1, 0, 0, 0)?;
//! write_time_series(&mut container, &TimeSeries::regular("GeomagneticVectorTimes", start, 60, 3))?;
//!
//! let h = Variable::geomagnetic("H")
//!     .with_description("Geomagnetic Field Element H", "nT")
//!     .with_valid_range(-88000.0, 88000.0)
//!     .with_data(vec![17210.5, 17210.7, 17211.0]);
//! write_variable(&mut container, &h, false)?;
//!
//! let read = read_variable(&mut container, VariableType::GeomagneticFieldElement, "H")?;
//! assert_eq!(read.depend_0.as_deref(), Some("GeomagneticVectorTimes"));
//! assert_eq!(read.data, h.data);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod codec;
mod display;
mod records;
mod types;


pub use codec::{
    probe_variable, read_temperatures, read_time_series, read_variable, write_time_series,
    write_variable,
};
pub use display::VariableDump;
pub use types::{TimeSeries, Variable};
