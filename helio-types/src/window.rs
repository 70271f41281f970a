//! Merge window and series identity value objects.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Half-open time window `[start, stop)` over which sources are merged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MergeWindow {
    /// Inclusive start of the window.
    pub start: DateTime<Utc>,
    /// Exclusive end of the window.
    pub stop: DateTime<Utc>,
}

impl MergeWindow {
    /// Construct a window from its bounds. No ordering is enforced here;
    /// call sites decide whether a degenerate window is acceptable.
    #[must_use]
    pub const fn new(start: DateTime<Utc>, stop: DateTime<Utc>) -> Self {
        Self { start, stop }
    }

    /// True when the window contains no instants at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.start >= self.stop
    }

    /// True when `ts` falls inside the half-open window.
    #[must_use]
    pub fn contains(&self, ts: DateTime<Utc>) -> bool {
        ts >= self.start && ts < self.stop
    }
}

/// Identity of a produced series: which platform and index it belongs to,
/// and a tag recording which ranked sources were combined
/// (e.g. `"combined_standard_recent_forecast"`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeriesId {
    /// Observing platform, e.g. `"sw"` for space weather indices.
    pub platform: String,
    /// Index name, e.g. `"kp"` or `"f107"`.
    pub name: String,
    /// Tag identifying the constituent sources of a combined series.
    pub tag: String,
}

impl SeriesId {
    /// Construct a series identity.
    pub fn new(platform: impl Into<String>, name: impl Into<String>, tag: impl Into<String>) -> Self {
        Self {
            platform: platform.into(),
            name: name.into(),
            tag: tag.into(),
        }
    }
}
