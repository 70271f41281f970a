//! Time-series utilities shared by source adapters and the merge call sites.
//!
//! Modules include:
//! - `infer`: estimate cadence and detect sub-daily sampling
//! - `axis`: canonical axis construction, edge padding, fill-aware reindexing
//! - `merge`: the priority sweep joining ranked sources into one series
/// Cadence inference and sub-daily detection helpers.
pub mod infer;
/// Canonical axis, padding, and reindexing utilities.
pub mod axis;
/// Priority-sweep merge of ranked index sources.
pub mod merge;
