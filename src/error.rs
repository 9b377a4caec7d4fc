//! Error taxonomy shared by the metadata, variable and time-series codecs.
//!
//! Every codec operation returns exactly one [`ImagCdfError`]. Failures
//! reported by the container collaborator are translated at the boundary
//! (see [`ImagCdfError::from_container`]), never passed through untyped.

use std::fmt;

use crate::container::{ContainerError, Status};

/// Compose a short human-readable error message.
///
/// The message is built from an operation label, an optional parameter name
/// (attribute, variable or series) and an optional container status:
///
/// ```
/// use imagcdf::container::Status;
/// use imagcdf::error::describe_error;
///
/// assert_eq!(describe_error("read global attribute", None, None), "read global attribute");
/// assert_eq!(
///     describe_error("read global attribute", Some("Title"), Some(&Status::error("No such attribute"))),
///     "read global attribute 'Title': Error: No such attribute"
/// );
/// ```
pub fn describe_error(operation: &str, parameter: Option<&str>, status: Option<&Status>) -> String {
    let mut message = String::from(operation);
    if let Some(parameter) = parameter {
        message.push_str(" '");
        message.push_str(parameter);
        message.push('\'');
    }
    if let Some(status) = status {
        message.push_str(": ");
        message.push_str(&status.to_string());
    }
    message
}

/// Where an error happened: the operation and the field it was working on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorContext {
    operation: &'static str,
    parameter: Option<String>,
}

impl ErrorContext {
    /// Context for an operation with no particular field.
    pub fn new(operation: &'static str) -> Self {
        Self {
            operation,
            parameter: None,
        }
    }

    /// Attach the attribute, variable or series name being processed.
    pub fn with_parameter(mut self, parameter: impl Into<String>) -> Self {
        self.parameter = Some(parameter.into());
        self
    }

    /// The operation label
    pub fn operation(&self) -> &'static str {
        self.operation
    }

    /// The parameter name, if any
    pub fn parameter(&self) -> Option<&str> {
        self.parameter.as_deref()
    }

    /// Render this context, optionally followed by a container status.
    pub fn describe(&self, status: Option<&Status>) -> String {
        describe_error(self.operation, self.parameter.as_deref(), status)
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.describe(None))
    }
}

/// Schema violations found in otherwise well-formed metadata
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// Title is not the canonical ImagCDF title
    #[error("Title of data incorrect: '{0}'")]
    Title(String),

    /// FormatDescription is not the canonical ImagCDF description
    #[error("Description of data incorrect: '{0}'")]
    FormatDescription(String),

    /// FormatVersion does not parse, or is outside the supported range
    #[error("Unsupported format version: '{0}'")]
    FormatVersion(String),

    /// PublicationLevel holds something other than 1, 2, 3 or 4
    #[error("Unknown publication level: '{0}'")]
    PublicationLevel(String),

    /// StandardLevel holds something other than Full, Partial or None
    #[error("Unknown standard level: '{0}'")]
    StandardLevel(String),
}

/// Errors produced by the ImagCDF mapping layer
#[derive(Debug, thiserror::Error)]
pub enum ImagCdfError {
    /// The container engine reported a failure
    #[error("{}", .context.describe(Some(.status)))]
    Container {
        /// Operation and field that failed
        context: ErrorContext,
        /// Status reported by the container
        status: Status,
    },

    /// An attribute, entry, variable or series is absent under its name
    #[error("{context}: not found")]
    NotFound {
        /// Operation and field that was looked up
        context: ErrorContext,
    },

    /// The field exists but with the wrong primitive type or dimensionality
    #[error("{context}: expected {expected}, found {found}")]
    TypeMismatch {
        /// Operation and field that was read
        context: ErrorContext,
        /// What the schema requires
        expected: String,
        /// What the container holds
        found: String,
    },

    /// Metadata is readable but breaks the ImagCDF schema
    #[error("Metadata validation failed: {0}")]
    Validation(#[from] ValidationError),

    /// A caller-supplied type/code combination cannot be mapped
    #[error("{context}: {reason}")]
    InvalidArgument {
        /// Operation and argument that was rejected
        context: ErrorContext,
        /// Why it was rejected
        reason: String,
    },

    /// Memory could not be reserved for a read result
    #[error("{context}: memory allocation failed")]
    Allocation {
        /// Operation and field being materialized
        context: ErrorContext,
    },
}

impl ImagCdfError {
    /// Translate a container failure, keeping absence distinguishable.
    pub fn from_container(error: ContainerError, context: ErrorContext) -> Self {
        if error.is_not_found() {
            Self::NotFound { context }
        } else {
            Self::Container {
                context,
                status: error.status(),
            }
        }
    }

    pub(crate) fn invalid_argument(context: ErrorContext, reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            context,
            reason: reason.into(),
        }
    }

    /// True for the "absent" condition used to end discovery probes
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// True for schema validation failures
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// The context of the failure, when the variant carries one
    pub fn context(&self) -> Option<&ErrorContext> {
        match self {
            Self::Container { context, .. }
            | Self::NotFound { context }
            | Self::TypeMismatch { context, .. }
            | Self::InvalidArgument { context, .. }
            | Self::Allocation { context } => Some(context),
            Self::Validation(_) => None,
        }
    }
}

/// Result alias used throughout the crate
pub type Result<T> = std::result::Result<T, ImagCdfError>;
