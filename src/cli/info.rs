use anyhow::{Context, Result};
use std::path::PathBuf;

use imagcdf::container::{Compression, FileContainer, OpenMode};
use imagcdf::dataset::read_dataset;
use imagcdf::variable::TimeSeries;

/// Display information about an ImagCDF file
pub fn run(file: PathBuf, data: bool) -> Result<()> {
    if !file.exists() {
        anyhow::bail!("File does not exist: {}", file.display());
    }

    let mut container = FileContainer::open(&file, OpenMode::Open, Compression::None)
        .with_context(|| format!("Failed to open container {}", file.display()))?;
    let compression = container.compression();
    let dataset = read_dataset(&mut container).context("Failed to read ImagCDF dataset")?;

    println!("ImagCDF File Information");
    println!("========================");
    println!("File: {}", file.display());
    println!("Compression: {}", compression);
    println!();
    print!("{}", dataset.metadata);
    println!();

    if data {
        for variable in &dataset.variables {
            let missing;
            let series = match dataset.series_for(variable) {
                Some(series) => series,
                None => {
                    missing = TimeSeries::new(variable.depend_0.clone().unwrap_or_default(), Vec::new());
                    &missing
                }
            };
            print!("{}", variable.dump(series));
        }
        return Ok(());
    }

    println!("Channels:");
    for variable in &dataset.variables {
        let name = variable
            .container_name()
            .unwrap_or_else(|_| variable.code.clone());
        println!(
            "  {:<20} {:>8} samples ({} missing)  {} -> {}",
            name,
            variable.len(),
            variable.missing_count(),
            variable.units,
            variable.depend_0.as_deref().unwrap_or("<none>")
        );
    }
    println!();

    println!("Time series:");
    for series in &dataset.time_series {
        let span = match (series.timestamps.first(), series.timestamps.last()) {
            (Some(first), Some(last)) => format!("{first} .. {last}"),
            _ => "empty".to_string(),
        };
        let period = series
            .sample_period()
            .map(|p| format!(", every {p} s"))
            .unwrap_or_default();
        println!("  {:<24} {:>8} timestamps  {}{}", series.name, series.len(), span, period);
    }

    Ok(())
}
