//! Depth-first traversal of a deserialized value against its shape.
//!
//! Supported shape categories:
//! - primitive, including NULL values;
//! - composite (the columnar serdes store their primitives in one
//!   top-level composite), which cannot be NULL.
//!
//! Any other category fails with `UnsupportedType`.

use flatrow_core::error::{Error, Result};
use flatrow_core::value::{Datum, RecordShape};

use crate::format::{append_primitive, RowBuffer};

/// Walk `value` in the declared field order of `shape`, appending every
/// primitive leaf to `out`. Field declaration order is output column order.
pub fn traverse(value: &Datum, shape: &RecordShape, out: &mut RowBuffer) -> Result<()> {
    match shape {
        RecordShape::Primitive(data_type) => append_primitive(out, value, *data_type),
        RecordShape::Composite(fields) => {
            let children = match value {
                Datum::Composite(children) => children,
                Datum::Null => {
                    return Err(Error::BadRecord("illegal NULL for composite value".into()));
                }
                other => {
                    return Err(Error::BadRecord(format!(
                        "expected composite value, got {other:?}"
                    )));
                }
            };
            if children.len() != fields.len() {
                return Err(Error::BadRecord(format!(
                    "composite carries {} values but declares {} fields",
                    children.len(),
                    fields.len()
                )));
            }
            for (child, field) in children.iter().zip(fields) {
                traverse(child, &field.shape, out)?;
            }
            Ok(())
        }
        other => Err(Error::UnsupportedType(format!(
            "record shape category {} unsupported",
            other.category()
        ))),
    }
}
