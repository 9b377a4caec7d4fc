use std::fmt;

use serde::{Deserialize, Serialize};

use crate::time::Tt2000;

/// Primitive type of an attribute entry or a variable's records
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DataType {
    /// Character text
    Char,
    /// 64-bit IEEE float
    Double,
    /// TT2000 epoch time
    Tt2000,
}

impl fmt::Display for DataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            DataType::Char => "CDF_CHAR",
            DataType::Double => "CDF_DOUBLE",
            DataType::Tt2000 => "CDF_TIME_TT2000",
        })
    }
}

/// One attribute entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum AttrValue {
    /// Text entry
    Text(String),
    /// Double entry, persisted by bit pattern
    Double(#[serde(with = "f64_bits")] f64),
    /// Epoch time entry
    Tt2000(Tt2000),
}

impl AttrValue {
    /// The entry's primitive type
    pub fn data_type(&self) -> DataType {
        match self {
            AttrValue::Text(_) => DataType::Char,
            AttrValue::Double(_) => DataType::Double,
            AttrValue::Tt2000(_) => DataType::Tt2000,
        }
    }
}

impl PartialEq for AttrValue {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (AttrValue::Text(a), AttrValue::Text(b)) => a == b,
            (AttrValue::Double(a), AttrValue::Double(b)) => a.to_bits() == b.to_bits(),
            (AttrValue::Tt2000(a), AttrValue::Tt2000(b)) => a == b,
            _ => false,
        }
    }
}

impl fmt::Display for AttrValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AttrValue::Text(text) => f.write_str(text),
            AttrValue::Double(value) => write!(f, "{value}"),
            AttrValue::Tt2000(epoch) => write!(f, "{epoch}"),
        }
    }
}

impl From<&str> for AttrValue {
    fn from(value: &str) -> Self {
        AttrValue::Text(value.to_string())
    }
}

impl From<String> for AttrValue {
    fn from(value: String) -> Self {
        AttrValue::Text(value)
    }
}

impl From<f64> for AttrValue {
    fn from(value: f64) -> Self {
        AttrValue::Double(value)
    }
}

impl From<Tt2000> for AttrValue {
    fn from(value: Tt2000) -> Self {
        AttrValue::Tt2000(value)
    }
}

/// Shape of a stored variable
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VariableInfo {
    /// Record type
    pub data_type: DataType,
    /// Dimensions per record, 0 for a scalar-per-record series
    pub num_dims: usize,
}

/// Serialize doubles by bit pattern so NaN payloads and signed zeros survive.
pub(crate) mod f64_bits {
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u64(value.to_bits())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
        u64::deserialize(deserializer).map(f64::from_bits)
    }
}

/// [`f64_bits`] for a whole record array
pub(crate) mod f64_vec_bits {
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(values: &[f64], serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(values.iter().map(|value| value.to_bits()))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<f64>, D::Error> {
        Vec::<u64>::deserialize(deserializer)
            .map(|bits| bits.into_iter().map(f64::from_bits).collect())
    }
}
