//! Observation and series containers shared by sources and the merge engine.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use helio_types::{HelioError, Provenance, SeriesId};
use serde::{Deserialize, Serialize};

/// A single timestamped scalar observation of an index.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Observation {
    /// Observation timestamp.
    pub ts: DateTime<Utc>,
    /// Observed value. Missing values carry the owning source's fill sentinel.
    pub value: f64,
}

impl Observation {
    /// Construct an observation.
    #[must_use]
    pub const fn new(ts: DateTime<Utc>, value: f64) -> Self {
        Self { ts, value }
    }
}

/// Thin tabular time-indexed container: one strictly increasing timestamp
/// axis plus named scalar columns of equal length.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct IndexSeries {
    timestamps: Vec<DateTime<Utc>>,
    columns: BTreeMap<String, Vec<f64>>,
}

impl IndexSeries {
    /// Create a series with the given timestamp axis and no columns yet.
    #[must_use]
    pub const fn new(timestamps: Vec<DateTime<Utc>>) -> Self {
        Self {
            timestamps,
            columns: BTreeMap::new(),
        }
    }

    /// Build a single-column series from observations. The observations'
    /// timestamps become the axis.
    #[must_use]
    pub fn from_observations(column: impl Into<String>, points: &[Observation]) -> Self {
        let mut series = Self::new(points.iter().map(|p| p.ts).collect());
        series
            .columns
            .insert(column.into(), points.iter().map(|p| p.value).collect());
        series
    }

    /// The shared timestamp axis.
    #[must_use]
    pub fn timestamps(&self) -> &[DateTime<Utc>] {
        &self.timestamps
    }

    /// Number of rows.
    #[must_use]
    pub fn len(&self) -> usize {
        self.timestamps.len()
    }

    /// True when the series holds no rows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.timestamps.is_empty()
    }

    /// Whether a column with this name exists.
    #[must_use]
    pub fn has_column(&self, name: &str) -> bool {
        self.columns.contains_key(name)
    }

    /// Values of a named column, aligned with [`timestamps`](Self::timestamps).
    #[must_use]
    pub fn column(&self, name: &str) -> Option<&[f64]> {
        self.columns.get(name).map(Vec::as_slice)
    }

    /// Names of all columns, in sorted order.
    pub fn column_names(&self) -> impl Iterator<Item = &str> {
        self.columns.keys().map(String::as_str)
    }

    /// Attach a derived column.
    ///
    /// # Errors
    /// Returns `Validation` if a column with this name already exists or the
    /// value count does not match the timestamp axis.
    pub fn insert_column(
        &mut self,
        name: impl Into<String>,
        values: Vec<f64>,
    ) -> Result<(), HelioError> {
        let name = name.into();
        if self.columns.contains_key(&name) {
            return Err(HelioError::validation(format!(
                "column name already exists: {name}"
            )));
        }
        if values.len() != self.timestamps.len() {
            return Err(HelioError::validation(format!(
                "column {name} has {} values for {} timestamps",
                values.len(),
                self.timestamps.len()
            )));
        }
        self.columns.insert(name, values);
        Ok(())
    }

    /// View a named column as timestamped observations.
    #[must_use]
    pub fn observations(&self, name: &str) -> Option<Vec<Observation>> {
        let values = self.columns.get(name)?;
        Some(
            self.timestamps
                .iter()
                .zip(values.iter())
                .map(|(&ts, &value)| Observation::new(ts, value))
                .collect(),
        )
    }
}

/// Result of combining ranked sources over a window: the merged series, its
/// identity tag, the provenance of every contributed stretch, and the fill
/// sentinel used for slots no source could supply.
#[derive(Debug, Clone, PartialEq)]
pub struct CombinedSeries {
    /// Identity of the combined output (platform, index name, source tag).
    pub id: SeriesId,
    /// The gapless merged series.
    pub series: IndexSeries,
    /// Which source supplied which stretch, in contribution order.
    pub provenance: Provenance,
    /// Fill sentinel used for slots no source could supply.
    pub fill_value: f64,
}

impl CombinedSeries {
    /// Rendered provenance notes, e.g. `"Combines data from the standard
    /// source (... to ...), in that order"`.
    #[must_use]
    pub fn notes(&self) -> String {
        self.provenance.notes()
    }
}
