#![forbid(unsafe_code)]
//! flatrow-core: shared kernel for the flatrow record resolver.
//!
//! This crate contains only *pure* types, small helpers, and interfaces
//! (traits) that other crates implement. There is **no I/O**, **no async**,
//! and no deserializer implementation here, by design.
//!
//! Crates that use this:
//! - flatrow-resolve: the resolution engine (delimiter, partition suffix,
//!   formatting, traversal, orchestration).
//! - host runtimes: implement `RecordDeserializer` for their storage format
//!   and register it in a `DeserializerRegistry`.

pub mod config;
pub mod error;
pub mod reader;
pub mod schema;
pub mod value;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
