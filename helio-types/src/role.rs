//! Fixed priority ranking for merged index sources.

use serde::{Deserialize, Serialize};

/// Reliability rank of a source feeding a merge.
///
/// Ranks are fixed for the lifetime of a merge: measured values outrank
/// preliminary ones, which outrank forecasts. The derived `Ord` follows
/// declaration order, so a smaller role is a higher-priority source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum SourceRole {
    /// Definitive measured values published after review.
    Standard,
    /// Preliminary values for the recent past, replaced once reviewed.
    Recent,
    /// Predicted values for dates that have not yet occurred.
    Forecast,
}

impl SourceRole {
    /// Stable lowercase label used in provenance notes and combined tags.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Standard => "standard",
            Self::Recent => "recent",
            Self::Forecast => "forecast",
        }
    }
}

impl core::fmt::Display for SourceRole {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}
