//! Logical column types. Pure data; no reader dependency here.
//!
//! `DataType` is the closed set of type codes the metadata layer can hand
//! us. The formatter in `flatrow-resolve` supports every code except
//! `Date64`, which exists so an unformattable category has somewhere to
//! come from.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DataType {
    Boolean,
    TinyInt,
    SmallInt,
    Int32,
    Int64,
    Float32,
    Float64,
    Decimal128,
    Utf8,
    Binary,
    Timestamp,
    Date64,
}

impl DataType {
    /// SQL-style type name used in partition-keys tokens and serde
    /// column configuration.
    pub fn type_name(&self) -> &'static str {
        match self {
            DataType::Boolean => "boolean",
            DataType::TinyInt => "tinyint",
            DataType::SmallInt => "smallint",
            DataType::Int32 => "int",
            DataType::Int64 => "bigint",
            DataType::Float32 => "float",
            DataType::Float64 => "double",
            DataType::Decimal128 => "decimal",
            DataType::Utf8 => "string",
            DataType::Binary => "binary",
            DataType::Timestamp => "timestamp",
            DataType::Date64 => "date",
        }
    }

    pub fn parse_type_name(name: &str) -> Result<Self> {
        match name {
            "boolean" => Ok(DataType::Boolean),
            "tinyint" => Ok(DataType::TinyInt),
            "smallint" => Ok(DataType::SmallInt),
            "int" => Ok(DataType::Int32),
            "bigint" => Ok(DataType::Int64),
            "float" => Ok(DataType::Float32),
            "double" => Ok(DataType::Float64),
            "decimal" => Ok(DataType::Decimal128),
            "string" => Ok(DataType::Utf8),
            "binary" => Ok(DataType::Binary),
            "timestamp" => Ok(DataType::Timestamp),
            "date" => Ok(DataType::Date64),
            other => Err(Error::UnsupportedType(format!(
                "unknown type name: {other}"
            ))),
        }
    }
}

/// One resolved output column, in declaration order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnDescriptor {
    pub name: String,
    pub data_type: DataType,
}

impl ColumnDescriptor {
    pub fn new(name: impl Into<String>, data_type: DataType) -> Self {
        Self {
            name: name.into(),
            data_type,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn type_names_round_trip() {
        for dt in [
            DataType::Boolean,
            DataType::TinyInt,
            DataType::SmallInt,
            DataType::Int32,
            DataType::Int64,
            DataType::Float32,
            DataType::Float64,
            DataType::Decimal128,
            DataType::Utf8,
            DataType::Binary,
            DataType::Timestamp,
            DataType::Date64,
        ] {
            assert_eq!(DataType::parse_type_name(dt.type_name()).unwrap(), dt);
        }
    }

    #[test]
    fn unknown_type_name_is_rejected() {
        let err = DataType::parse_type_name("varchar2").unwrap_err();
        assert!(matches!(err, Error::UnsupportedType(_)));
    }
}
