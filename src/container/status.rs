use std::fmt;

use serde::{Deserialize, Serialize};

/// Severity of a container status
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Severity {
    /// The operation completed
    #[default]
    Success,
    /// The operation completed with a note
    Information,
    /// The operation completed but something looked wrong
    Warning,
    /// The operation failed
    Error,
}

/// Outcome of the most recent container operation
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Status {
    /// How serious the outcome is
    pub severity: Severity,
    /// Engine message, empty on plain success
    pub text: String,
}

impl Status {
    /// Plain success
    pub fn ok() -> Self {
        Self::default()
    }

    /// A failure with the given message
    pub fn error(text: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            text: text.into(),
        }
    }

    /// A non-fatal warning
    pub fn warning(text: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            text: text.into(),
        }
    }

    /// An informational note
    pub fn information(text: impl Into<String>) -> Self {
        Self {
            severity: Severity::Information,
            text: text.into(),
        }
    }

    /// True unless the severity is [`Severity::Error`]
    pub fn is_ok(&self) -> bool {
        self.severity != Severity::Error
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self.severity {
            Severity::Success => "Success",
            Severity::Information => "Information",
            Severity::Warning => "Warning",
            Severity::Error => "Error",
        };
        if self.text.is_empty() {
            f.write_str(label)
        } else {
            write!(f, "{label}: {}", self.text)
        }
    }
}
