//! # ImagCDF Schema Definition
//!
//! Bit-exact names and canonical values of the ImagCDF layout, plus the
//! rules that derive container variable names and time-series links from
//! an element code.
//!
//! ## Variables
//!
//! | Channel | Variable | Depends on |
//! |---------|----------|------------|
//! | vector element (X Y Z H D E V I F) | `GeomagneticField<code>` | `GeomagneticVectorTimes` |
//! | scalar element (S G) | `GeomagneticField<code>` | `GeomagneticScalarTimes` |
//! | temperature channel | `Temperature<code>` | `Temperature<code>Times` |
//!
//! Every variable carries the attributes listed in [`variable_attrs`]; the
//! dataset-level attributes are listed in [`global_attrs`].

mod constants;
/// Global attribute name constants.
pub mod global_attrs;
mod levels;
mod naming;
/// Variable attribute name constants.
pub mod variable_attrs;


pub use constants::*;
pub use levels::{PublicationLevel, StandardLevel, VariableType};
pub use naming::{
    default_dependency, is_scalar, is_vector, label_axis, temperature_times_name,
    validate_element_code, variable_name,
};
