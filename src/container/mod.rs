//! # Container Collaborator
//!
//! The ImagCDF mapping layer stores everything through the [`Container`]
//! trait: indexed global attribute entries, per-variable attributes and
//! record-varying arrays of doubles or epoch times.
//!
//! Two sessions implement it:
//!
//! - [`MemoryContainer`]: everything in memory, used by tests and as the
//!   state behind a file session
//! - [`FileContainer`]: a path-bound session with create/open modes that
//!   persists its state on [`FileContainer::close`]
//!
//! Each session tracks the status of its most recent operation, so there is
//! no process-wide "last status" to consult.
//!
//! ```
//! use imagcdf::container::{AttrValue, Container, MemoryContainer};
//!
//! let mut container = MemoryContainer::new();
//! container.put_global_attr("IagaCode", 0, AttrValue::from("ESK"))?;
//! assert_eq!(container.get_global_attr("IagaCode", 0)?, AttrValue::from("ESK"));
//! assert_eq!(container.last_status().to_string(), "Success");
//! # Ok::<(), imagcdf::container::ContainerError>(())
//! ```

mod config;
mod error;
mod file;
mod memory;
mod status;
mod value;


pub use config::{Compression, OpenMode};
pub use error::ContainerError;
pub use file::FileContainer;
pub use memory::MemoryContainer;
pub use status::{Severity, Status};
pub use value::{AttrValue, DataType, VariableInfo};

use crate::time::Tt2000;

/// Storage operations the ImagCDF mapping layer needs from a container engine.
///
/// Every method takes `&mut self` because every call updates the session's
/// [`Container::last_status`].
pub trait Container {
    /// Write entry `entry` of a global attribute, creating the attribute if needed.
    fn put_global_attr(
        &mut self,
        name: &str,
        entry: usize,
        value: AttrValue,
    ) -> Result<(), ContainerError>;

    /// Read entry `entry` of a global attribute.
    fn get_global_attr(&mut self, name: &str, entry: usize) -> Result<AttrValue, ContainerError>;

    /// Delete entry `entry` of a global attribute. Other entries keep their
    /// indexes.
    fn delete_global_entry(&mut self, name: &str, entry: usize) -> Result<(), ContainerError>;

    /// Write a variable attribute. The variable must already exist.
    fn put_variable_attr(
        &mut self,
        attribute: &str,
        variable: &str,
        value: AttrValue,
    ) -> Result<(), ContainerError>;

    /// Read a variable attribute.
    fn get_variable_attr(
        &mut self,
        attribute: &str,
        variable: &str,
    ) -> Result<AttrValue, ContainerError>;

    /// Create a record-varying, zero-dimensional variable.
    ///
    /// Fails with [`ContainerError::VariableExists`] if the name is taken.
    fn create_variable(&mut self, name: &str, data_type: DataType) -> Result<(), ContainerError>;

    /// Type and shape of a variable.
    fn inquire_variable(&mut self, name: &str) -> Result<VariableInfo, ContainerError>;

    /// True if a variable with this name exists.
    fn has_variable(&mut self, name: &str) -> bool;

    /// Names of all variables, in a stable order.
    fn variable_names(&mut self) -> Vec<String>;

    /// Highest written record index, `None` if nothing was written.
    fn max_written_record(&mut self, name: &str) -> Result<Option<usize>, ContainerError>;

    /// Number of written records.
    fn num_written_records(&mut self, name: &str) -> Result<usize, ContainerError> {
        Ok(self.max_written_record(name)?.map_or(0, |max| max + 1))
    }

    /// Write double records starting at `first_record`.
    fn put_double_records(
        &mut self,
        name: &str,
        first_record: usize,
        values: &[f64],
    ) -> Result<(), ContainerError>;

    /// Write epoch-time records starting at `first_record`.
    fn put_tt2000_records(
        &mut self,
        name: &str,
        first_record: usize,
        values: &[Tt2000],
    ) -> Result<(), ContainerError>;

    /// Append every written double record to `out`.
    fn read_double_records(&mut self, name: &str, out: &mut Vec<f64>)
        -> Result<(), ContainerError>;

    /// Append every written epoch-time record to `out`.
    fn read_tt2000_records(
        &mut self,
        name: &str,
        out: &mut Vec<Tt2000>,
    ) -> Result<(), ContainerError>;

    /// Status of the most recent operation.
    fn last_status(&self) -> &Status;
}
