use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{ErrorContext, ImagCdfError, ValidationError};

/// Data publication level, written as "1" to "4"
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum PublicationLevel {
    /// Raw data, no quality control
    #[default]
    Level1,
    /// Edited data, some corrections applied
    Level2,
    /// Corrected, adjusted data
    Level3,
    /// Definitive data
    Level4,
}

impl PublicationLevel {
    /// Canonical attribute text
    pub fn as_str(&self) -> &'static str {
        match self {
            PublicationLevel::Level1 => "1",
            PublicationLevel::Level2 => "2",
            PublicationLevel::Level3 => "3",
            PublicationLevel::Level4 => "4",
        }
    }

    /// Map an IAGA-2002 / IMF data-type code (full word or first letter)
    /// onto a publication level. Unknown codes are treated as level 1.
    ///
    /// ```
    /// use imagcdf::schema::PublicationLevel;
    ///
    /// assert_eq!(PublicationLevel::from_data_type("definitive"), PublicationLevel::Level4);
    /// assert_eq!(PublicationLevel::from_data_type("Q"), PublicationLevel::Level3);
    /// assert_eq!(PublicationLevel::from_data_type("?"), PublicationLevel::Level1);
    /// ```
    pub fn from_data_type(data_type: &str) -> Self {
        match data_type.chars().next().map(|c| c.to_ascii_uppercase()) {
            Some('P') | Some('A') => PublicationLevel::Level2,
            Some('Q') => PublicationLevel::Level3,
            Some('D') => PublicationLevel::Level4,
            _ => PublicationLevel::Level1,
        }
    }
}

impl fmt::Display for PublicationLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PublicationLevel {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "1" => Ok(PublicationLevel::Level1),
            "2" => Ok(PublicationLevel::Level2),
            "3" => Ok(PublicationLevel::Level3),
            "4" => Ok(PublicationLevel::Level4),
            _ => Err(ValidationError::PublicationLevel(s.to_string())),
        }
    }
}

/// How far the data conforms to an INTERMAGNET standard
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StandardLevel {
    /// No conformance claimed
    #[default]
    None,
    /// Some parts conform, see `PartialStandDesc`
    Partial,
    /// Fully conformant
    Full,
}

impl StandardLevel {
    /// Canonical attribute text
    pub fn as_str(&self) -> &'static str {
        match self {
            StandardLevel::None => "None",
            StandardLevel::Partial => "Partial",
            StandardLevel::Full => "Full",
        }
    }
}

impl fmt::Display for StandardLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StandardLevel {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "none" => Ok(StandardLevel::None),
            "partial" => Ok(StandardLevel::Partial),
            "full" => Ok(StandardLevel::Full),
            _ => Err(ValidationError::StandardLevel(s.to_string())),
        }
    }
}

/// Kind of measured channel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VariableType {
    /// A geomagnetic field element (vector or scalar)
    GeomagneticFieldElement,
    /// A temperature channel
    Temperature,
}

impl VariableType {
    /// Canonical text
    pub fn as_str(&self) -> &'static str {
        match self {
            VariableType::GeomagneticFieldElement => "GeomagneticFieldElement",
            VariableType::Temperature => "Temperature",
        }
    }
}

impl fmt::Display for VariableType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for VariableType {
    type Err = ImagCdfError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("GeomagneticFieldElement") {
            Ok(VariableType::GeomagneticFieldElement)
        } else if s.eq_ignore_ascii_case("Temperature") {
            Ok(VariableType::Temperature)
        } else {
            Err(ImagCdfError::invalid_argument(
                ErrorContext::new("parse variable type").with_parameter(s),
                "expected GeomagneticFieldElement or Temperature",
            ))
        }
    }
}
