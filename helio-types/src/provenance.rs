//! Provenance types for merged index series.

use chrono::{DateTime, Utc};

use crate::SourceRole;

/// A continuous stretch of the merge window supplied by a single source.
///
/// Boundaries are cursor positions: `start` is where the source became the
/// active provider and `end` is where it was retired (or where the sweep
/// finished). A source that was activated but offered nothing records a
/// zero-length stretch (`start == end`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segment {
    /// Rank of the source that supplied this stretch.
    pub role: SourceRole,
    /// Cursor position when the source became active.
    pub start: DateTime<Utc>,
    /// Cursor position when the source was retired.
    pub end: DateTime<Utc>,
}

/// Ordered record of which source supplied which stretch of a merged series.
///
/// Built during the priority sweep: a segment is pushed each time the active
/// source changes, so segments appear in contribution order and never overlap.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Provenance {
    /// Collected segments in contribution order.
    pub segments: Vec<Segment>,
}

impl Provenance {
    /// Create an empty provenance record.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            segments: Vec::new(),
        }
    }

    /// Record a source stretch.
    pub fn push(&mut self, segment: Segment) {
        self.segments.push(segment);
    }

    /// Roles that actually contributed, in contribution order.
    #[must_use]
    pub fn roles(&self) -> Vec<SourceRole> {
        self.segments.iter().map(|s| s.role).collect()
    }

    /// Render the human-readable notes string attached to combined output,
    /// e.g. `"Combines data from the standard source (2009-01-01 to
    /// 2009-01-08), the forecast source (2009-01-08 to 2009-01-11), in that
    /// order"`.
    #[must_use]
    pub fn notes(&self) -> String {
        if self.segments.is_empty() {
            return "Combines data from no sources".to_string();
        }
        let mut notes = String::from("Combines data from");
        for (i, seg) in self.segments.iter().enumerate() {
            if i > 0 {
                notes.push(',');
            }
            notes.push_str(&format!(
                " the {} source ({} to {})",
                seg.role,
                seg.start.format("%Y-%m-%d"),
                seg.end.format("%Y-%m-%d")
            ));
        }
        notes.push_str(", in that order");
        notes
    }
}
