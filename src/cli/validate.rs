use anyhow::Result;
use log::info;
use std::path::PathBuf;

/// Validate ImagCDF file integrity
pub fn run(file: PathBuf) -> Result<()> {
    use imagcdf::validator::validate_file;

    info!("ImagCDF Validator");
    info!("=================");
    info!("File: {}", file.display());

    match validate_file(&file) {
        Ok(report) => {
            println!("{}", report.format_colored());

            // Exit with error code if validation failed
            if report.has_failures() {
                std::process::exit(1);
            }

            Ok(())
        }
        Err(e) => {
            eprintln!("Validation error: {}", e);
            std::process::exit(1);
        }
    }
}
