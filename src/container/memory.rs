use std::collections::BTreeMap;

use log::debug;
use serde::{Deserialize, Serialize};

use super::error::ContainerError;
use super::status::Status;
use super::value::{f64_vec_bits, AttrValue, DataType, VariableInfo};
use super::Container;
use crate::time::Tt2000;

/// Records of one variable, typed by the variable's data type
#[derive(Debug, Clone, Serialize, Deserialize)]
enum Records {
    Char,
    Double(#[serde(with = "f64_vec_bits")] Vec<f64>),
    Tt2000(Vec<Tt2000>),
}

impl Records {
    fn new(data_type: DataType) -> Self {
        match data_type {
            DataType::Char => Records::Char,
            DataType::Double => Records::Double(Vec::new()),
            DataType::Tt2000 => Records::Tt2000(Vec::new()),
        }
    }

    fn len(&self) -> usize {
        match self {
            Records::Char => 0,
            Records::Double(values) => values.len(),
            Records::Tt2000(values) => values.len(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct StoredVariable {
    data_type: DataType,
    num_dims: usize,
    attributes: BTreeMap<String, AttrValue>,
    records: Records,
}

/// Write `values` over `records` starting at `first`, extending as needed.
fn splice_records<T: Copy>(
    variable: &str,
    records: &mut Vec<T>,
    first: usize,
    values: &[T],
) -> Result<(), ContainerError> {
    if first > records.len() {
        return Err(ContainerError::RecordGap {
            variable: variable.to_string(),
            first_record: first,
            written: records.len(),
        });
    }
    let overlap = (records.len() - first).min(values.len());
    records[first..first + overlap].copy_from_slice(&values[..overlap]);
    records.extend_from_slice(&values[overlap..]);
    Ok(())
}

/// In-memory container session.
///
/// Attributes and variables are kept in sorted maps so iteration order, and
/// therefore the persisted snapshot, is deterministic.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MemoryContainer {
    global_attributes: BTreeMap<String, BTreeMap<usize, AttrValue>>,
    variables: BTreeMap<String, StoredVariable>,
    #[serde(skip)]
    status: Status,
}

impl MemoryContainer {
    /// An empty container
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a variable with `num_dims` dimensions per record.
    ///
    /// The ImagCDF layer only creates zero-dimensional variables; this exists
    /// so foreign layouts can be represented.
    pub fn create_variable_with_dims(
        &mut self,
        name: &str,
        data_type: DataType,
        num_dims: usize,
    ) -> Result<(), ContainerError> {
        let result = if self.variables.contains_key(name) {
            Err(ContainerError::VariableExists(name.to_string()))
        } else {
            debug!("Creating variable {} ({}, {} dims)", name, data_type, num_dims);
            self.variables.insert(
                name.to_string(),
                StoredVariable {
                    data_type,
                    num_dims,
                    attributes: BTreeMap::new(),
                    records: Records::new(data_type),
                },
            );
            Ok(())
        };
        self.track(result)
    }

    /// Names of all global attributes
    pub fn global_attribute_names(&self) -> Vec<String> {
        self.global_attributes.keys().cloned().collect()
    }

    /// True if nothing has been stored
    pub fn is_empty(&self) -> bool {
        self.global_attributes.is_empty() && self.variables.is_empty()
    }

    fn track<T>(&mut self, result: Result<T, ContainerError>) -> Result<T, ContainerError> {
        self.status = match &result {
            Ok(_) => Status::ok(),
            Err(err) => err.status(),
        };
        result
    }

    fn variable(&self, name: &str) -> Result<&StoredVariable, ContainerError> {
        self.variables
            .get(name)
            .ok_or_else(|| ContainerError::NoSuchVariable(name.to_string()))
    }

    fn variable_mut(&mut self, name: &str) -> Result<&mut StoredVariable, ContainerError> {
        self.variables
            .get_mut(name)
            .ok_or_else(|| ContainerError::NoSuchVariable(name.to_string()))
    }

    fn records_type_error(name: &str, stored: DataType, supplied: DataType) -> ContainerError {
        ContainerError::DataType {
            name: name.to_string(),
            expected: stored.to_string(),
            found: supplied.to_string(),
        }
    }
}

impl Container for MemoryContainer {
    fn put_global_attr(
        &mut self,
        name: &str,
        entry: usize,
        value: AttrValue,
    ) -> Result<(), ContainerError> {
        self.global_attributes
            .entry(name.to_string())
            .or_default()
            .insert(entry, value);
        self.track(Ok(()))
    }

    fn get_global_attr(&mut self, name: &str, entry: usize) -> Result<AttrValue, ContainerError> {
        let result = match self.global_attributes.get(name) {
            None => Err(ContainerError::NoSuchAttribute(name.to_string())),
            Some(entries) => entries.get(&entry).cloned().ok_or_else(|| {
                ContainerError::NoSuchEntry {
                    attribute: name.to_string(),
                    entry,
                }
            }),
        };
        self.track(result)
    }

    fn delete_global_entry(&mut self, name: &str, entry: usize) -> Result<(), ContainerError> {
        let result = match self.global_attributes.get_mut(name) {
            None => Err(ContainerError::NoSuchAttribute(name.to_string())),
            Some(entries) => entries.remove(&entry).map(drop).ok_or_else(|| {
                ContainerError::NoSuchEntry {
                    attribute: name.to_string(),
                    entry,
                }
            }),
        };
        self.track(result)
    }

    fn put_variable_attr(
        &mut self,
        attribute: &str,
        variable: &str,
        value: AttrValue,
    ) -> Result<(), ContainerError> {
        let result = self.variable_mut(variable).map(|stored| {
            stored.attributes.insert(attribute.to_string(), value);
        });
        self.track(result)
    }

    fn get_variable_attr(
        &mut self,
        attribute: &str,
        variable: &str,
    ) -> Result<AttrValue, ContainerError> {
        let result = self.variable(variable).and_then(|stored| {
            stored
                .attributes
                .get(attribute)
                .cloned()
                .ok_or_else(|| ContainerError::NoSuchAttribute(attribute.to_string()))
        });
        self.track(result)
    }

    fn create_variable(&mut self, name: &str, data_type: DataType) -> Result<(), ContainerError> {
        self.create_variable_with_dims(name, data_type, 0)
    }

    fn inquire_variable(&mut self, name: &str) -> Result<VariableInfo, ContainerError> {
        let result = self.variable(name).map(|stored| VariableInfo {
            data_type: stored.data_type,
            num_dims: stored.num_dims,
        });
        self.track(result)
    }

    fn has_variable(&mut self, name: &str) -> bool {
        self.status = Status::ok();
        self.variables.contains_key(name)
    }

    fn variable_names(&mut self) -> Vec<String> {
        self.status = Status::ok();
        self.variables.keys().cloned().collect()
    }

    fn max_written_record(&mut self, name: &str) -> Result<Option<usize>, ContainerError> {
        let result = self
            .variable(name)
            .map(|stored| stored.records.len().checked_sub(1));
        self.track(result)
    }

    fn put_double_records(
        &mut self,
        name: &str,
        first_record: usize,
        values: &[f64],
    ) -> Result<(), ContainerError> {
        let result = self.variable_mut(name).and_then(|stored| match &mut stored.records {
            Records::Double(records) => splice_records(name, records, first_record, values),
            _ => Err(Self::records_type_error(
                name,
                stored.data_type,
                DataType::Double,
            )),
        });
        self.track(result)
    }

    fn put_tt2000_records(
        &mut self,
        name: &str,
        first_record: usize,
        values: &[Tt2000],
    ) -> Result<(), ContainerError> {
        let result = self.variable_mut(name).and_then(|stored| match &mut stored.records {
            Records::Tt2000(records) => splice_records(name, records, first_record, values),
            _ => Err(Self::records_type_error(
                name,
                stored.data_type,
                DataType::Tt2000,
            )),
        });
        self.track(result)
    }

    fn read_double_records(
        &mut self,
        name: &str,
        out: &mut Vec<f64>,
    ) -> Result<(), ContainerError> {
        let result = self.variable(name).and_then(|stored| match &stored.records {
            Records::Double(records) => {
                out.extend_from_slice(records);
                Ok(())
            }
            _ => Err(Self::records_type_error(
                name,
                stored.data_type,
                DataType::Double,
            )),
        });
        self.track(result)
    }

    fn read_tt2000_records(
        &mut self,
        name: &str,
        out: &mut Vec<Tt2000>,
    ) -> Result<(), ContainerError> {
        let result = self.variable(name).and_then(|stored| match &stored.records {
            Records::Tt2000(records) => {
                out.extend_from_slice(records);
                Ok(())
            }
            _ => Err(Self::records_type_error(
                name,
                stored.data_type,
                DataType::Tt2000,
            )),
        });
        self.track(result)
    }

    fn last_status(&self) -> &Status {
        &self.status
    }
}
