#![forbid(unsafe_code)]
//! flatrow-resolve: the record resolution engine.
//!
//! - `delimiter`: validate the user's output delimiter spec.
//! - `partition`: parse partition-keys tokens and render the cached
//!   trailing suffix.
//! - `format`: the accumulator buffer and per-primitive text formatter.
//! - `traverse`: depth-first walk of a value against its shape.
//! - `resolver`: the per-fragment orchestrator tying it all together.
//!
//! No I/O happens here; raw records come from an external
//! `RecordDeserializer` and the finished row string goes back to the
//! caller as a single text field.

pub mod delimiter;
pub mod format;
pub mod partition;
pub mod resolver;
pub mod traverse;

pub use resolver::{RecordResolver, ResolvedField};
