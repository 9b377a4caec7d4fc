//! Typed attribute access over the untyped container interface.
//!
//! Every read checks the stored primitive type against the one the schema
//! requires; a mismatch is an error, never a silent conversion.

use log::debug;

use crate::container::{AttrValue, Container, DataType};
use crate::error::{ErrorContext, ImagCdfError, Result};
use crate::time::Tt2000;

/// Rust types that can be read back from an attribute entry
pub(crate) trait FromAttrValue: Sized {
    const DATA_TYPE: DataType;

    fn from_attr_value(value: AttrValue) -> std::result::Result<Self, AttrValue>;
}

impl FromAttrValue for String {
    const DATA_TYPE: DataType = DataType::Char;

    fn from_attr_value(value: AttrValue) -> std::result::Result<Self, AttrValue> {
        match value {
            AttrValue::Text(text) => Ok(text),
            other => Err(other),
        }
    }
}

impl FromAttrValue for f64 {
    const DATA_TYPE: DataType = DataType::Double;

    fn from_attr_value(value: AttrValue) -> std::result::Result<Self, AttrValue> {
        match value {
            AttrValue::Double(number) => Ok(number),
            other => Err(other),
        }
    }
}

impl FromAttrValue for Tt2000 {
    const DATA_TYPE: DataType = DataType::Tt2000;

    fn from_attr_value(value: AttrValue) -> std::result::Result<Self, AttrValue> {
        match value {
            AttrValue::Tt2000(epoch) => Ok(epoch),
            other => Err(other),
        }
    }
}

fn convert<T: FromAttrValue>(value: AttrValue, context: ErrorContext) -> Result<T> {
    T::from_attr_value(value).map_err(|stored| ImagCdfError::TypeMismatch {
        context,
        expected: T::DATA_TYPE.to_string(),
        found: stored.data_type().to_string(),
    })
}

fn variable_parameter(attribute: &str, variable: &str) -> String {
    format!("{variable}.{attribute}")
}

pub(crate) fn put_global<C: Container + ?Sized>(
    container: &mut C,
    name: &str,
    entry: usize,
    value: impl Into<AttrValue>,
) -> Result<()> {
    let value = value.into();
    debug!("Writing global attribute {}[{}] = {}", name, entry, value);
    container.put_global_attr(name, entry, value).map_err(|e| {
        ImagCdfError::from_container(
            e,
            ErrorContext::new("write global attribute").with_parameter(name),
        )
    })
}

pub(crate) fn get_global<T: FromAttrValue, C: Container + ?Sized>(
    container: &mut C,
    name: &str,
    entry: usize,
) -> Result<T> {
    let context = ErrorContext::new("read global attribute").with_parameter(name);
    let value = container
        .get_global_attr(name, entry)
        .map_err(|e| ImagCdfError::from_container(e, context.clone()))?;
    debug!("Read global attribute {}[{}] = {}", name, entry, value);
    convert(value, context)
}

/// Like [`get_global`], with absence reported as `None`.
pub(crate) fn probe_global<T: FromAttrValue, C: Container + ?Sized>(
    container: &mut C,
    name: &str,
    entry: usize,
) -> Result<Option<T>> {
    match get_global(container, name, entry) {
        Ok(value) => Ok(Some(value)),
        Err(e) if e.is_not_found() => Ok(None),
        Err(e) => Err(e),
    }
}

/// Read entries 0, 1, 2, ... of a repeatable attribute until one is absent.
pub(crate) fn get_global_entries<T: FromAttrValue, C: Container + ?Sized>(
    container: &mut C,
    name: &str,
) -> Result<Vec<T>> {
    let mut values = Vec::new();
    while let Some(value) = probe_global(container, name, values.len())? {
        values.push(value);
    }
    Ok(values)
}

/// Delete entries `from`, `from + 1`, ... until one is absent. Returns how
/// many were removed.
pub(crate) fn truncate_global_entries<C: Container + ?Sized>(
    container: &mut C,
    name: &str,
    from: usize,
) -> Result<usize> {
    let mut entry = from;
    loop {
        match container.delete_global_entry(name, entry) {
            Ok(()) => entry += 1,
            Err(e) if e.is_not_found() => break,
            Err(e) => {
                return Err(ImagCdfError::from_container(
                    e,
                    ErrorContext::new("delete global attribute entry").with_parameter(name),
                ))
            }
        }
    }
    if entry > from {
        debug!("Deleted {} stale entries of {}", entry - from, name);
    }
    Ok(entry - from)
}

pub(crate) fn put_variable<C: Container + ?Sized>(
    container: &mut C,
    attribute: &str,
    variable: &str,
    value: impl Into<AttrValue>,
) -> Result<()> {
    let value = value.into();
    debug!("Writing {}.{} = {}", variable, attribute, value);
    container
        .put_variable_attr(attribute, variable, value)
        .map_err(|e| {
            ImagCdfError::from_container(
                e,
                ErrorContext::new("write variable attribute")
                    .with_parameter(variable_parameter(attribute, variable)),
            )
        })
}

pub(crate) fn get_variable<T: FromAttrValue, C: Container + ?Sized>(
    container: &mut C,
    attribute: &str,
    variable: &str,
) -> Result<T> {
    let context = ErrorContext::new("read variable attribute")
        .with_parameter(variable_parameter(attribute, variable));
    let value = container
        .get_variable_attr(attribute, variable)
        .map_err(|e| ImagCdfError::from_container(e, context.clone()))?;
    debug!("Read {}.{} = {}", variable, attribute, value);
    convert(value, context)
}
