//! Partition-column reconstruction.
//!
//! Partition values never live in the stored records; the fragmenter
//! extracts them from the fragment path and ships them as one encoded
//! token. They are constant for every record of a fragment, so the
//! rendered suffix is computed once and appended verbatim to each row.
//! Partition columns always trail the data columns.

use std::fmt;
use std::str::FromStr;

use flatrow_core::config::{NO_PARTITIONS, PARTITIONS_DELIM, PARTITION_FIELD_DELIM};
use flatrow_core::error::{Error, Result};
use flatrow_core::value::{format_timestamp, parse_timestamp, Decimal128};

/// One partition column as shipped by the fragmenter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PartitionEntry {
    pub name: String,
    pub type_name: String,
    pub value: String,
}

/// Decode the fragmenter's partition-keys token into ordered entries.
pub fn parse_partition_keys(encoded: &str) -> Result<Vec<PartitionEntry>> {
    if encoded == NO_PARTITIONS {
        return Ok(Vec::new());
    }
    encoded
        .split(PARTITIONS_DELIM)
        .map(|level| {
            let mut fields = level.split(PARTITION_FIELD_DELIM);
            match (fields.next(), fields.next(), fields.next(), fields.next()) {
                (Some(name), Some(type_name), Some(value), None) => Ok(PartitionEntry {
                    name: name.to_string(),
                    type_name: type_name.to_string(),
                    value: value.to_string(),
                }),
                _ => Err(Error::InvalidConfig(format!(
                    "malformed partition entry: {level:?}"
                ))),
            }
        })
        .collect()
}

/// Render the fixed trailing suffix: for each entry in order, the
/// delimiter followed by the canonical text form of its literal.
pub fn render_partition_suffix(entries: &[PartitionEntry], delimiter: u8) -> Result<String> {
    let mut suffix = String::new();
    for entry in entries {
        suffix.push(delimiter as char);
        suffix.push_str(&render_literal(entry)?);
    }
    Ok(suffix)
}

fn render_literal(entry: &PartitionEntry) -> Result<String> {
    match entry.type_name.as_str() {
        "string" => Ok(entry.value.clone()),
        "smallint" => Ok(parse_literal::<i16>(entry)?.to_string()),
        "int" => Ok(parse_literal::<i32>(entry)?.to_string()),
        "bigint" => Ok(parse_literal::<i64>(entry)?.to_string()),
        "float" => Ok(parse_literal::<f32>(entry)?.to_string()),
        "double" => Ok(parse_literal::<f64>(entry)?.to_string()),
        "timestamp" => Ok(format_timestamp(&parse_timestamp(&entry.value)?)),
        "decimal" => Ok(entry.value.parse::<Decimal128>()?.to_string()),
        other => Err(Error::UnsupportedType(format!(
            "unsupported partition type: {other}"
        ))),
    }
}

/// Partition literals are fixed per fragment, so a parse failure is a
/// configuration error, not a per-record one.
fn parse_literal<T>(entry: &PartitionEntry) -> Result<T>
where
    T: FromStr,
    T::Err: fmt::Display,
{
    entry.value.parse().map_err(|e| {
        Error::InvalidConfig(format!(
            "invalid {} literal {:?} for partition column {:?}: {e}",
            entry.type_name, entry.value, entry.name
        ))
    })
}
