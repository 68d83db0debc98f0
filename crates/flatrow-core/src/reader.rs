//! The external columnar reader capability.
//!
//! The resolver never reads storage itself. A host runtime implements
//! `RecordDeserializer` for its storage format, registers a factory per
//! `SerdeKind`, and feeds opaque `RawRecord` handles to the resolver.

use std::collections::HashMap;

use crate::config::SerdeKind;
use crate::error::Result;
use crate::schema::ColumnDescriptor;
use crate::value::{Datum, RecordShape};

/// Opaque raw record payload handed over by the storage reader.
#[derive(Debug, Clone)]
pub struct RawRecord(Vec<u8>);

impl RawRecord {
    pub fn new(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }
}

/// Deserialize raw records into typed values.
///
/// Lifecycle: `configure` is called exactly once, before any
/// `deserialize`, with the data columns only (partition columns are never
/// part of the payload). `shape` must be stable after `configure`.
pub trait RecordDeserializer {
    fn configure(&mut self, columns: &[ColumnDescriptor]) -> Result<()>;

    fn deserialize(&self, raw: &RawRecord) -> Result<Datum>;

    fn shape(&self) -> &RecordShape;
}

/// Maps serde kinds to boxed deserializer factories.
///
/// Intentionally simple: hosts register their readers at startup, the
/// resolver instantiates one per fragment.
#[derive(Default)]
pub struct DeserializerRegistry {
    makers: HashMap<SerdeKind, fn() -> Box<dyn RecordDeserializer>>,
}

impl DeserializerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, kind: SerdeKind, f: fn() -> Box<dyn RecordDeserializer>) {
        self.makers.insert(kind, f);
    }

    pub fn make(&self, kind: SerdeKind) -> Option<Box<dyn RecordDeserializer>> {
        self.makers.get(&kind).map(|f| f())
    }
}
