//! helio-core
//!
//! Core types, traits, and utilities shared across the helio ecosystem.
//!
//! - `types`: common data structures (observations, series containers).
//! - `source`: the `IndexSource` trait and chunking strategies.
//! - `timeseries`: cadence inference, canonical axis construction, and the
//!   priority-sweep merge engine.
//!
//! Execution model
//! ---------------
//! Everything in this crate is synchronous and single-threaded. Source loads
//! are blocking calls made directly on the calling thread; the merge sweep
//! blocks at each load until data is resident. The only mutation a sweep
//! performs on shared objects is each source's own resident cache, which it
//! may trigger to refresh but never tears down.
#![warn(missing_docs)]

/// The `IndexSource` contract and chunking strategies.
pub mod source;
/// Time-series utilities for inferring cadence and merging ranked sources.
pub mod timeseries;
pub mod types;

pub use source::{Chunking, IndexSource, Ranked};
pub use timeseries::infer::{estimate_cadence, estimate_step_seconds, is_subdaily};
pub use timeseries::merge::{CombineRequest, combine, derive_window};
pub use types::*;

pub use helio_types::{HelioError, MergeWindow, Provenance, Segment, SeriesId, SourceKey, SourceRole};
