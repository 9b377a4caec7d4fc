//! Record-varying arrays: create-or-extend on write, checked full reads.

use log::debug;

use crate::container::{Container, ContainerError, DataType};
use crate::error::{ErrorContext, ImagCdfError, Result};
use crate::time::Tt2000;

/// Make sure `name` exists with `data_type` and return the record index to
/// append at. An existing variable is reused; its type must match.
fn prepare_append<C: Container + ?Sized>(
    container: &mut C,
    name: &str,
    data_type: DataType,
    context: &ErrorContext,
) -> Result<usize> {
    match container.create_variable(name, data_type) {
        Ok(()) => debug!("Created {} variable {}", data_type, name),
        Err(ContainerError::VariableExists(_)) => {
            let info = container
                .inquire_variable(name)
                .map_err(|e| ImagCdfError::from_container(e, context.clone()))?;
            if info.data_type != data_type {
                return Err(ImagCdfError::TypeMismatch {
                    context: context.clone(),
                    expected: data_type.to_string(),
                    found: info.data_type.to_string(),
                });
            }
        }
        Err(e) => return Err(ImagCdfError::from_container(e, context.clone())),
    }

    let first = container
        .max_written_record(name)
        .map_err(|e| ImagCdfError::from_container(e, context.clone()))?
        .map_or(0, |max| max + 1);
    Ok(first)
}

/// Check type and shape, then return the number of records to read.
fn prepare_read<C: Container + ?Sized>(
    container: &mut C,
    name: &str,
    data_type: DataType,
    context: &ErrorContext,
) -> Result<usize> {
    let info = container
        .inquire_variable(name)
        .map_err(|e| ImagCdfError::from_container(e, context.clone()))?;
    if info.data_type != data_type {
        return Err(ImagCdfError::TypeMismatch {
            context: context.clone(),
            expected: data_type.to_string(),
            found: info.data_type.to_string(),
        });
    }
    if info.num_dims != 0 {
        return Err(ImagCdfError::TypeMismatch {
            context: context.clone(),
            expected: "0 dimensions".to_string(),
            found: format!("{} dimensions", info.num_dims),
        });
    }
    container
        .num_written_records(name)
        .map_err(|e| ImagCdfError::from_container(e, context.clone()))
}

fn reserve<T>(count: usize, context: &ErrorContext) -> Result<Vec<T>> {
    let mut values = Vec::new();
    values
        .try_reserve_exact(count)
        .map_err(|_| ImagCdfError::Allocation {
            context: context.clone(),
        })?;
    Ok(values)
}

pub(crate) fn write_double_array<C: Container + ?Sized>(
    container: &mut C,
    name: &str,
    values: &[f64],
) -> Result<()> {
    let context = ErrorContext::new("write sample array").with_parameter(name);
    let first = prepare_append(container, name, DataType::Double, &context)?;
    debug!("Writing {} samples to {} from record {}", values.len(), name, first);
    container
        .put_double_records(name, first, values)
        .map_err(|e| ImagCdfError::from_container(e, context))
}

pub(crate) fn write_tt2000_array<C: Container + ?Sized>(
    container: &mut C,
    name: &str,
    values: &[Tt2000],
) -> Result<()> {
    let context = ErrorContext::new("write time series").with_parameter(name);
    let first = prepare_append(container, name, DataType::Tt2000, &context)?;
    debug!("Writing {} timestamps to {} from record {}", values.len(), name, first);
    container
        .put_tt2000_records(name, first, values)
        .map_err(|e| ImagCdfError::from_container(e, context))
}

pub(crate) fn read_double_array<C: Container + ?Sized>(container: &mut C, name: &str) -> Result<Vec<f64>> {
    let context = ErrorContext::new("read sample array").with_parameter(name);
    let count = prepare_read(container, name, DataType::Double, &context)?;
    let mut values = reserve(count, &context)?;
    container
        .read_double_records(name, &mut values)
        .map_err(|e| ImagCdfError::from_container(e, context))?;
    debug!("Read {} samples from {}", values.len(), name);
    Ok(values)
}

pub(crate) fn read_tt2000_array<C: Container + ?Sized>(
    container: &mut C,
    name: &str,
) -> Result<Vec<Tt2000>> {
    let context = ErrorContext::new("read time series").with_parameter(name);
    let count = prepare_read(container, name, DataType::Tt2000, &context)?;
    let mut values = reserve(count, &context)?;
    container
        .read_tt2000_records(name, &mut values)
        .map_err(|e| ImagCdfError::from_container(e, context))?;
    debug!("Read {} timestamps from {}", values.len(), name);
    Ok(values)
}
