use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// How [`super::FileContainer::open`] treats an existing file
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OpenMode {
    /// Create a new file, deleting any existing one
    ForceCreate,
    /// Create a new file, failing if one exists
    Create,
    /// Open an existing file
    #[default]
    Open,
}

impl fmt::Display for OpenMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            OpenMode::ForceCreate => "force-create",
            OpenMode::Create => "create",
            OpenMode::Open => "open",
        })
    }
}

impl FromStr for OpenMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "force-create" | "force_create" | "overwrite" => Ok(OpenMode::ForceCreate),
            "create" => Ok(OpenMode::Create),
            "open" => Ok(OpenMode::Open),
            other => Err(format!("unknown open mode '{other}'")),
        }
    }
}

/// Compression applied to a container file
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Compression {
    /// Stored as is
    #[default]
    None,
    /// Run-length encoding
    Rle,
    /// Huffman coding
    Huffman,
    /// Adaptive Huffman coding
    AdaptiveHuffman,
    /// Gzip at level 1 to 9
    Gzip(u8),
}

impl Compression {
    /// Default gzip level
    pub const DEFAULT_GZIP_LEVEL: u8 = 6;

    /// Gzip at the default level
    pub fn gzip() -> Self {
        Self::Gzip(Self::DEFAULT_GZIP_LEVEL)
    }

    /// The gzip level, when this is gzip compression
    pub fn gzip_level(&self) -> Option<u32> {
        match self {
            Self::Gzip(level) => Some(u32::from((*level).clamp(1, 9))),
            _ => None,
        }
    }
}

impl fmt::Display for Compression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Compression::None => f.write_str("none"),
            Compression::Rle => f.write_str("rle"),
            Compression::Huffman => f.write_str("huff"),
            Compression::AdaptiveHuffman => f.write_str("ahuff"),
            Compression::Gzip(level) => write!(f, "gzip{level}"),
        }
    }
}

impl FromStr for Compression {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_ascii_lowercase();
        match lower.as_str() {
            "none" | "" => Ok(Compression::None),
            "rle" => Ok(Compression::Rle),
            "huff" | "huffman" => Ok(Compression::Huffman),
            "ahuff" | "adaptive-huffman" => Ok(Compression::AdaptiveHuffman),
            "gzip" => Ok(Compression::gzip()),
            _ => match lower.strip_prefix("gzip").map(str::parse::<u8>) {
                Some(Ok(level @ 1..=9)) => Ok(Compression::Gzip(level)),
                _ => Err(format!(
                    "unknown compression '{s}' (expected none, rle, huff, ahuff or gzip1..gzip9)"
                )),
            },
        }
    }
}

impl TryFrom<String> for Compression {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Compression> for String {
    fn from(value: Compression) -> Self {
        value.to_string()
    }
}
