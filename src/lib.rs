#![forbid(unsafe_code)]
//! flatrow: flatten columnar-storage records into delimited text rows.
//!
//! Umbrella crate re-exporting the workspace members' public surface; the
//! integration suite in `tests/` exercises the full resolution pipeline
//! through it.

pub use flatrow_core::config::{ResolverConfig, SerdeKind};
pub use flatrow_core::error::{Error, Result};
pub use flatrow_core::reader::{DeserializerRegistry, RawRecord, RecordDeserializer};
pub use flatrow_core::schema::{ColumnDescriptor, DataType};
pub use flatrow_core::value::{Datum, Decimal128, FieldShape, RecordShape};
pub use flatrow_resolve::{RecordResolver, ResolvedField};
