use anyhow::{Context, Result};
use log::info;
use std::path::PathBuf;

use imagcdf::container::{Compression, FileContainer, OpenMode};
use imagcdf::dataset::{read_dataset, write_dataset};

use super::config::Config;

/// Read a whole ImagCDF file and write it to a new container
pub fn run(
    input: PathBuf,
    output: Option<PathBuf>,
    compression: Option<Compression>,
    force: bool,
    config: Option<PathBuf>,
) -> Result<()> {
    let config = Config::load(config.as_deref())?.output;

    let mut source = FileContainer::open(&input, OpenMode::Open, Compression::None)
        .with_context(|| format!("Failed to open container {}", input.display()))?;
    let dataset = read_dataset(&mut source).context("Failed to read ImagCDF dataset")?;
    let compression = compression
        .or(config.compression)
        .unwrap_or_else(|| source.compression());

    let output = match output {
        Some(path) => path,
        None => {
            let prefix = config.prefix.unwrap_or_default();
            let name = dataset
                .suggested_filename(&prefix, config.lowercase.unwrap_or(true))
                .context("Cannot derive an output name from fewer than two timestamps; give OUTPUT")?;
            match input.parent() {
                Some(dir) if prefix.is_empty() => dir.join(name),
                _ => PathBuf::from(name),
            }
        }
    };
    if output == input {
        anyhow::bail!("Output would overwrite the input file: {}", input.display());
    }

    let mode = if force {
        OpenMode::ForceCreate
    } else {
        OpenMode::Create
    };
    let mut target = FileContainer::open(&output, mode, compression)
        .with_context(|| format!("Failed to create container {}", output.display()))?;
    let stats = write_dataset(&mut target, &dataset).context("Failed to write ImagCDF dataset")?;
    target
        .close()
        .with_context(|| format!("Failed to write {}", output.display()))?;

    info!("{}", stats);
    println!("Wrote {} ({} compression)", output.display(), compression);
    Ok(())
}
