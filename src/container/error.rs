use thiserror::Error;

use super::status::Status;

/// Errors reported by a container engine
#[derive(Debug, Error)]
pub enum ContainerError {
    /// No global or variable attribute with this name
    #[error("No such attribute: {0}")]
    NoSuchAttribute(String),

    /// The attribute exists but has no entry at this index
    #[error("No such entry {entry} for attribute {attribute}")]
    NoSuchEntry {
        /// Attribute name
        attribute: String,
        /// Requested entry index
        entry: usize,
    },

    /// No variable with this name
    #[error("No such variable: {0}")]
    NoSuchVariable(String),

    /// A variable with this name was already created
    #[error("Variable already exists: {0}")]
    VariableExists(String),

    /// Records or an entry of the wrong type
    #[error("Data type mismatch for {name}: expected {expected}, found {found}")]
    DataType {
        /// Attribute or variable name
        name: String,
        /// Type stored in the container
        expected: String,
        /// Type supplied by the caller
        found: String,
    },

    /// Records would leave a gap after the last written record
    #[error("Record {first_record} of {variable} would leave a gap after {written} records")]
    RecordGap {
        /// Variable name
        variable: String,
        /// First record the caller tried to write
        first_record: usize,
        /// Records currently written
        written: usize,
    },

    /// Create mode was requested but the file is already there
    #[error("File already exists: {0}")]
    FileExists(String),

    /// Open mode was requested but there is no such file
    #[error("No such file: {0}")]
    NoSuchFile(String),

    /// I/O failure while reading or writing the file
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The file does not hold a readable container snapshot
    #[error("Corrupt container file: {0}")]
    Corrupt(String),

    /// Any other engine failure, as reported by the engine
    #[error("{0}")]
    Engine(Status),
}

impl ContainerError {
    /// True for the "absent" family of errors
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::NoSuchAttribute(_) | Self::NoSuchEntry { .. } | Self::NoSuchVariable(_)
        )
    }

    /// The error as an engine status
    pub fn status(&self) -> Status {
        match self {
            Self::Engine(status) => status.clone(),
            other => Status::error(other.to_string()),
        }
    }
}
