//! The per-fragment orchestrator.
//!
//! A `RecordResolver` is built once per data fragment and owns everything
//! mutable: the configured deserializer, the row buffer, and the cached
//! partition suffix. Instances are independent; hosts that process
//! fragments in parallel create one resolver per fragment and share
//! nothing.

use std::fmt;

use flatrow_core::config::{ResolverConfig, SerdeKind};
use flatrow_core::error::{Error, Result};
use flatrow_core::reader::{DeserializerRegistry, RawRecord, RecordDeserializer};
use flatrow_core::schema::DataType;

use crate::delimiter::resolve_delimiter;
use crate::format::RowBuffer;
use crate::partition::{parse_partition_keys, render_partition_suffix};
use crate::traverse::traverse;

/// The single output column: one flattened, delimited row per record,
/// always text-typed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedField {
    pub data_type: DataType,
    pub value: String,
}

impl ResolvedField {
    pub fn text(value: String) -> Self {
        Self {
            data_type: DataType::Utf8,
            value,
        }
    }
}

pub struct RecordResolver {
    deserializer: Box<dyn RecordDeserializer>,
    partition_suffix: String,
    out: RowBuffer,
}

impl fmt::Debug for RecordResolver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RecordResolver")
            .field("partition_suffix", &self.partition_suffix)
            .field("out", &self.out)
            .finish_non_exhaustive()
    }
}

impl RecordResolver {
    /// Validate the fragmenter tokens, precompute the partition suffix,
    /// and configure a deserializer for the fragment's data columns.
    pub fn new(config: &ResolverConfig, registry: &DeserializerRegistry) -> Result<Self> {
        let serde_kind = SerdeKind::parse(&config.serde_token)?;
        let delimiter = resolve_delimiter(&config.delimiter)?;
        let partitions = parse_partition_keys(&config.partition_keys)?;
        let partition_suffix = render_partition_suffix(&partitions, delimiter)?;

        // Partition columns trail the column list and are never part of
        // the deserialized payload.
        let data_columns = config.columns.len().checked_sub(partitions.len()).ok_or_else(|| {
            Error::InvalidConfig(format!(
                "{} partition entries for only {} columns",
                partitions.len(),
                config.columns.len()
            ))
        })?;

        tracing::debug!(
            serde = serde_kind.token(),
            data_columns,
            partitions = partitions.len(),
            "configuring columnar deserializer"
        );

        let mut deserializer = registry.make(serde_kind).ok_or_else(|| {
            Error::UnsupportedType(format!(
                "no deserializer registered for serde {}",
                serde_kind.token()
            ))
        })?;
        deserializer.configure(&config.columns[..data_columns])?;

        Ok(Self {
            deserializer,
            partition_suffix,
            out: RowBuffer::new(delimiter),
        })
    }

    /// Resolve one raw record into its flattened text row.
    pub fn resolve(&mut self, raw: &RawRecord) -> Result<ResolvedField> {
        self.out.reset();
        let tuple = self.deserializer.deserialize(raw)?;
        traverse(&tuple, self.deserializer.shape(), &mut self.out)?;
        self.out.push_raw(&self.partition_suffix);
        Ok(ResolvedField::text(self.out.take()))
    }
}
