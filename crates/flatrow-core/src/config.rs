//! Per-fragment resolver configuration and upstream token conventions.
//!
//! The fragmenter that discovers data fragments hands every fragment
//! processor three strings: a serde-selection token, an encoded
//! partition-keys token, and the user's delimiter spec. The token
//! constants here are the shared wire convention between the two sides.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::schema::ColumnDescriptor;

/// Separator between partition entries in the partition-keys token.
pub const PARTITIONS_DELIM: &str = "!PAD!";
/// Separator between name/type/value inside one partition entry.
pub const PARTITION_FIELD_DELIM: &str = "!P1D!";
/// Sentinel meaning the table carries no partition columns.
pub const NO_PARTITIONS: &str = "!NPT!";

/// Which columnar serde the fragmenter selected for this fragment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SerdeKind {
    Columnar,
    LazyBinaryColumnar,
}

impl SerdeKind {
    pub fn parse(token: &str) -> Result<Self> {
        match token {
            "COLUMNAR_SERDE" => Ok(SerdeKind::Columnar),
            "LAZY_BINARY_COLUMNAR_SERDE" => Ok(SerdeKind::LazyBinaryColumnar),
            other => Err(Error::UnsupportedType(format!(
                "unsupported serde: {other}"
            ))),
        }
    }

    pub fn token(&self) -> &'static str {
        match self {
            SerdeKind::Columnar => "COLUMNAR_SERDE",
            SerdeKind::LazyBinaryColumnar => "LAZY_BINARY_COLUMNAR_SERDE",
        }
    }
}

/// Everything a `RecordResolver` needs at construction. Immutable once the
/// resolver is built; one config per fragment-processing context.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResolverConfig {
    /// All output columns in order, trailing partition columns included.
    pub columns: Vec<ColumnDescriptor>,
    /// Serde-selection token from the fragmenter.
    pub serde_token: String,
    /// Encoded partition-keys token (`name!P1D!type!P1D!value`, entries
    /// joined by `!PAD!`, or `!NPT!` for none).
    pub partition_keys: String,
    /// User delimiter spec: one ASCII char, or `\xHH`.
    pub delimiter: String,
}
