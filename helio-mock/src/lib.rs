use std::collections::HashSet;

use chrono::{DateTime, Utc};
use helio_core::{Chunking, IndexSource, Observation};
use helio_types::HelioError;

pub mod fixtures;

/// One partition of a mock source's backing store.
///
/// `from`/`until` bound the load-request dates that resolve to this
/// partition; the points themselves may lie anywhere (a generation-dated
/// block file holds data *before* its request range).
#[derive(Debug, Clone)]
pub struct Partition {
    from: DateTime<Utc>,
    until: DateTime<Utc>,
    file: Option<String>,
    points: Vec<Observation>,
}

/// Mock index source for CI-safe tests and examples. Serves deterministic
/// observations from in-memory partitions and records every load request.
pub struct MockSource {
    name: &'static str,
    column: String,
    fill: f64,
    chunking: Chunking,
    partitions: Vec<Partition>,
    resident: Vec<Observation>,
    loaded: HashSet<usize>,
    fail_loads: bool,
    load_log: Vec<String>,
}

impl MockSource {
    /// Date-chunked source: `load_date` materializes the partition whose
    /// request range contains the date.
    #[must_use]
    pub fn by_date(name: &'static str, column: impl Into<String>, fill: f64) -> Self {
        Self::new(
            name,
            column,
            fill,
            Chunking::ByDate {
                skip_ahead_days: None,
            },
        )
    }

    /// Date-chunked source backed by fixed multi-day blocks; the merge sweep
    /// will request dates `skip_ahead_days` ahead of its cursor.
    #[must_use]
    pub fn by_blocks(
        name: &'static str,
        column: impl Into<String>,
        fill: f64,
        skip_ahead_days: u32,
    ) -> Self {
        Self::new(
            name,
            column,
            fill,
            Chunking::ByDate {
                skip_ahead_days: Some(skip_ahead_days),
            },
        )
    }

    /// File-chunked source: partitions are named files enumerable by window.
    #[must_use]
    pub fn by_file(name: &'static str, column: impl Into<String>, fill: f64) -> Self {
        Self::new(name, column, fill, Chunking::ByFile)
    }

    fn new(name: &'static str, column: impl Into<String>, fill: f64, chunking: Chunking) -> Self {
        Self {
            name,
            column: column.into(),
            fill,
            chunking,
            partitions: Vec::new(),
            resident: Vec::new(),
            loaded: HashSet::new(),
            fail_loads: false,
            load_log: Vec::new(),
        }
    }

    /// Add a date-keyed partition resolving load requests in `[from, until)`.
    #[must_use]
    pub fn with_partition(
        mut self,
        from: DateTime<Utc>,
        until: DateTime<Utc>,
        points: Vec<Observation>,
    ) -> Self {
        self.partitions.push(Partition {
            from,
            until,
            file: None,
            points,
        });
        self
    }

    /// Add a named file covering `[from, until)`.
    #[must_use]
    pub fn with_file(
        mut self,
        file: impl Into<String>,
        from: DateTime<Utc>,
        until: DateTime<Utc>,
        points: Vec<Observation>,
    ) -> Self {
        self.partitions.push(Partition {
            from,
            until,
            file: Some(file.into()),
            points,
        });
        self
    }

    /// Make every partition resident, as if the caller had already loaded it.
    #[must_use]
    pub fn preloaded(mut self) -> Self {
        for idx in 0..self.partitions.len() {
            self.make_resident(idx);
        }
        self
    }

    /// Make every load request fail with a source-tagged error.
    #[must_use]
    pub const fn failing(mut self) -> Self {
        self.fail_loads = true;
        self
    }

    /// Load requests received so far, in order.
    #[must_use]
    pub fn load_log(&self) -> &[String] {
        &self.load_log
    }

    /// Number of partitions actually materialized.
    #[must_use]
    pub fn partitions_loaded(&self) -> usize {
        self.loaded.len()
    }

    fn make_resident(&mut self, idx: usize) {
        if !self.loaded.insert(idx) {
            return;
        }
        for o in &self.partitions[idx].points {
            if !self.resident.iter().any(|r| r.ts == o.ts) {
                self.resident.push(*o);
            }
        }
        self.resident.sort_by_key(|o| o.ts);
    }

    fn check_failure(&self) -> Result<(), HelioError> {
        if self.fail_loads {
            Err(HelioError::source(self.name, "forced load failure"))
        } else {
            Ok(())
        }
    }
}

impl IndexSource for MockSource {
    fn name(&self) -> &'static str {
        self.name
    }
    fn vendor(&self) -> &'static str {
        "Mock"
    }

    fn fill_value(&self, _column: &str) -> f64 {
        self.fill
    }

    fn has_resident_data(&self) -> bool {
        !self.resident.is_empty()
    }

    fn earliest_resident(&self) -> Option<DateTime<Utc>> {
        self.resident.first().map(|o| o.ts)
    }

    fn latest_resident(&self) -> Option<DateTime<Utc>> {
        self.resident.last().map(|o| o.ts)
    }

    fn covers(&self, ts: DateTime<Utc>) -> bool {
        self.resident.iter().any(|o| o.ts == ts)
    }

    fn chunking(&self) -> Chunking {
        self.chunking
    }

    fn load_date(&mut self, date: DateTime<Utc>) -> Result<(), HelioError> {
        self.check_failure()?;
        self.load_log.push(format!("date:{}", date.format("%Y-%m-%dT%H:%M")));
        if let Some(idx) = self
            .partitions
            .iter()
            .position(|p| p.file.is_none() && date >= p.from && date < p.until)
        {
            self.make_resident(idx);
        }
        Ok(())
    }

    fn files_overlapping(&self, start: DateTime<Utc>, stop: DateTime<Utc>) -> Vec<String> {
        self.partitions
            .iter()
            .filter(|p| p.from < stop && p.until > start)
            .filter_map(|p| p.file.clone())
            .collect()
    }

    fn load_file(&mut self, file: &str) -> Result<(), HelioError> {
        self.check_failure()?;
        self.load_log.push(format!("file:{file}"));
        match self
            .partitions
            .iter()
            .position(|p| p.file.as_deref() == Some(file))
        {
            Some(idx) => {
                self.make_resident(idx);
                Ok(())
            }
            None => Err(HelioError::source(self.name, format!("no such file: {file}"))),
        }
    }

    fn observations_in(
        &self,
        column: &str,
        start: DateTime<Utc>,
        stop: DateTime<Utc>,
    ) -> Vec<Observation> {
        if column != self.column {
            return Vec::new();
        }
        self.resident
            .iter()
            .filter(|o| o.ts >= start && o.ts < stop)
            .copied()
            .collect()
    }
}
