//! Helio merges ranked space weather index sources into continuous series.
//!
//! Overview
//! - Combines up to three ranked sources (standard/measured, recent/
//!   preliminary, forecast) covering the same scalar geophysical index into
//!   one gapless, regularly-sampled series over a window.
//! - Higher-priority sources are preferred; lower-priority sources fill in
//!   only past the point where the higher-priority source ran dry.
//! - Slots no source could supply carry a fill sentinel, never interpolated
//!   values, and every merge reports per-source provenance.
//!
//! Key behaviors and trade-offs
//! - Priority is fixed for the whole sweep: once a source offers nothing at
//!   the cursor it is permanently retired, even if it has data again later.
//!   An interior gap therefore stays at the fill value rather than being
//!   patched from a less reliable source.
//! - Loads are blocking and scoped: date-chunked sources load one partition
//!   per cache miss (with an optional skip-ahead for generation-dated block
//!   stores), file-chunked sources load each overlapping file exactly once.
//! - The output cadence is inferred from the merged observations (modal
//!   spacing, lower-median tiebreak) and falls back to the index's native
//!   cadence when too little was accumulated.
//!
//! Examples
//! Merging the three Kp feeds:
//! ```rust,ignore
//! use helio::combine_kp;
//! use helio_mock::fixtures;
//!
//! let mut standard = fixtures::kp::standard();
//! let mut recent = fixtures::kp::recent().preloaded();
//! let mut forecast = fixtures::kp::forecast().preloaded();
//!
//! let merged = combine_kp(
//!     Some(&mut standard),
//!     Some(&mut recent),
//!     Some(&mut forecast),
//!     None,
//!     f64::NAN,
//! )?;
//! println!("{}", merged.notes());
//! ```
//!
//! Deriving the daily Ap index from a merged 3-hourly series:
//! ```rust,ignore
//! use helio::calc_daily_ap;
//!
//! calc_daily_ap(&mut merged.series, "Kp", "Ap", None)?;
//! ```
//!
//! See `helio/examples/` for runnable end-to-end demonstrations.
#![warn(missing_docs)]

/// Derived-quantity helpers for the geomagnetic ap index.
pub mod ap;
/// The per-index combine call sites (Kp and F10.7).
pub mod combine;

pub use ap::calc_daily_ap;
pub use combine::f107::combine_f107;
pub use combine::kp::combine_kp;

// Re-export core types for convenience
pub use helio_core::{
    Chunking,
    CombineRequest,
    CombinedSeries,
    HelioError,
    IndexSeries,
    IndexSource,
    MergeWindow,
    Observation,
    Provenance,
    Ranked,
    Segment,
    SeriesId,
    SourceKey,
    SourceRole,
    combine,
    derive_window,
    estimate_cadence,
    estimate_step_seconds,
    is_subdaily,
};
