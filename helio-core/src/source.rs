use chrono::{DateTime, Utc};
use helio_types::{HelioError, SourceKey, SourceRole};

use crate::types::Observation;

/// How a source's backing store is partitioned for on-demand loading.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Chunking {
    /// Loads are keyed by calendar date: asking for a date materializes the
    /// partition containing it.
    ByDate {
        /// For stores partitioned in fixed multi-day blocks, the number of
        /// days to add to the requested date so the load lands inside the
        /// block that also covers the request (e.g. `Some(30)` for a store
        /// chunked in 30-day files).
        skip_ahead_days: Option<u32>,
    },
    /// Loads are keyed by file; the files overlapping a window can be
    /// enumerated up front.
    ByFile,
}

/// Contract implemented by index source adapters.
///
/// Loads are blocking calls on the calling thread and must be idempotent when
/// the requested data is already resident; the only state a load may change
/// is the source's own resident cache. `observations_in` reads resident data
/// only and never triggers a load.
pub trait IndexSource {
    /// A stable identifier used in provenance and error tagging
    /// (e.g. `"sw-kp-archive"`).
    fn name(&self) -> &'static str;

    /// Canonical source key constructed from the static name.
    fn key(&self) -> SourceKey {
        SourceKey::new(self.name())
    }

    /// Human-friendly vendor string.
    fn vendor(&self) -> &'static str {
        "unknown"
    }

    /// Fill sentinel this source uses for missing values in `column`.
    ///
    /// Sentinels differ between sources (a reviewed archive and a forecast
    /// feed rarely agree), which is why the sweep filters per source rather
    /// than against a global constant.
    fn fill_value(&self, column: &str) -> f64;

    /// Whether any observations are currently resident in memory.
    fn has_resident_data(&self) -> bool;

    /// Earliest resident timestamp, if any data is resident.
    fn earliest_resident(&self) -> Option<DateTime<Utc>>;

    /// Latest resident timestamp, if any data is resident.
    fn latest_resident(&self) -> Option<DateTime<Utc>>;

    /// Whether an observation at exactly `ts` is resident.
    fn covers(&self, ts: DateTime<Utc>) -> bool;

    /// Partitioning strategy deciding which load operation the sweep uses.
    fn chunking(&self) -> Chunking;

    /// Load the partition containing `date` into the resident cache.
    ///
    /// # Errors
    /// Returns a `Source`-tagged error when the backing store cannot be read
    /// or decoded. A date with no backing partition is not an error; the
    /// cache is simply left as it was.
    fn load_date(&mut self, date: DateTime<Utc>) -> Result<(), HelioError>;

    /// Names of files whose coverage overlaps `[start, stop)`, in coverage
    /// order. Only meaningful for [`Chunking::ByFile`] sources.
    fn files_overlapping(&self, start: DateTime<Utc>, stop: DateTime<Utc>) -> Vec<String> {
        let _ = (start, stop);
        Vec::new()
    }

    /// Load a single named file into the resident cache.
    ///
    /// # Errors
    /// Returns `Unsupported` unless the source is file-chunked; file-chunked
    /// sources return a `Source`-tagged error on read or decode failure.
    fn load_file(&mut self, file: &str) -> Result<(), HelioError> {
        let _ = file;
        Err(HelioError::unsupported("load_file"))
    }

    /// Resident observations for `column` within `[start, stop)`, sorted by
    /// strictly increasing timestamp.
    fn observations_in(
        &self,
        column: &str,
        start: DateTime<Utc>,
        stop: DateTime<Utc>,
    ) -> Vec<Observation>;
}

/// A source paired with its reliability rank for one merge invocation.
pub struct Ranked<'a> {
    /// Rank deciding merge priority and provenance labelling.
    pub role: SourceRole,
    /// The source adapter; the sweep may trigger loads through it.
    pub source: &'a mut dyn IndexSource,
}

impl<'a> Ranked<'a> {
    /// Pair a source with its rank.
    pub fn new(role: SourceRole, source: &'a mut dyn IndexSource) -> Self {
        Self { role, source }
    }
}
