//! helio-archive
//!
//! `IndexSource` adapter backed by local CSV archive files. The caller hands
//! the adapter explicit partition boundaries (which file serves which load
//! requests); discovering files on disk and downloading them belong to
//! separate tooling and never happen here.
#![warn(missing_docs)]

mod decode;

use std::collections::{BTreeMap, HashSet};
use std::path::PathBuf;

use chrono::{DateTime, Utc};
use helio_core::{Chunking, IndexSource, Observation};
use helio_types::HelioError;

/// One CSV file of a local archive and the load-request range it serves.
///
/// `from`/`until` bound the load-request dates that resolve to this file.
/// For generation-dated stores the data inside the file lies *before* the
/// request range.
#[derive(Debug, Clone)]
pub struct ArchivePartition {
    /// Path of the CSV file on disk.
    pub path: PathBuf,
    /// Inclusive start of the load-request range.
    pub from: DateTime<Utc>,
    /// Exclusive end of the load-request range.
    pub until: DateTime<Utc>,
}

/// Blocking, file-backed index source reading CSV partitions on demand.
///
/// Each partition is read at most once; decoded rows accumulate in the
/// resident cache. Read and decode failures surface as `Source`-tagged
/// errors and are never retried.
pub struct ArchiveSource {
    name: &'static str,
    column: String,
    fill: f64,
    chunking: Chunking,
    partitions: Vec<ArchivePartition>,
    resident: BTreeMap<DateTime<Utc>, f64>,
    loaded: HashSet<usize>,
}

impl ArchiveSource {
    /// Date-chunked archive: a load request for date D reads the partition
    /// whose request range contains D.
    #[must_use]
    pub fn daily(name: &'static str, column: impl Into<String>, fill: f64) -> Self {
        Self::new(
            name,
            column,
            fill,
            Chunking::ByDate {
                skip_ahead_days: None,
            },
        )
    }

    /// Date-chunked archive stored in fixed multi-day blocks keyed by
    /// generation date; the merge sweep will request dates `skip_ahead_days`
    /// ahead of its cursor.
    #[must_use]
    pub fn blocks(
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

    /// File-chunked archive: the sweep enumerates files overlapping its
    /// window and loads each once.
    #[must_use]
    pub fn file_chunked(name: &'static str, column: impl Into<String>, fill: f64) -> Self {
        Self::new(name, column, fill, Chunking::ByFile)
    }

    fn new(name: &'static str, column: impl Into<String>, fill: f64, chunking: Chunking) -> Self {
        Self {
            name,
            column: column.into(),
            fill,
            chunking,
            partitions: Vec::new(),
            resident: BTreeMap::new(),
            loaded: HashSet::new(),
        }
    }

    /// Declare a partition file and the load-request range it serves.
    #[must_use]
    pub fn with_partition(
        mut self,
        path: impl Into<PathBuf>,
        from: DateTime<Utc>,
        until: DateTime<Utc>,
    ) -> Self {
        self.partitions.push(ArchivePartition {
            path: path.into(),
            from,
            until,
        });
        self
    }

    /// Eagerly read every declared partition.
    ///
    /// # Errors
    /// Returns the first `Source`-tagged read or decode failure.
    pub fn preload(mut self) -> Result<Self, HelioError> {
        for idx in 0..self.partitions.len() {
            self.read_partition(idx)?;
        }
        Ok(self)
    }

    fn read_partition(&mut self, idx: usize) -> Result<(), HelioError> {
        if self.loaded.contains(&idx) {
            return Ok(());
        }
        let partition = &self.partitions[idx];
        let rows = decode::read_observations(&partition.path, &self.column, self.fill)
            .map_err(|msg| HelioError::source(self.name, msg))?;
        for o in rows {
            self.resident.entry(o.ts).or_insert(o.value);
        }
        self.loaded.insert(idx);
        Ok(())
    }

    fn file_label(partition: &ArchivePartition) -> String {
        partition
            .path
            .file_name()
            .map_or_else(|| partition.path.display().to_string(), |n| {
                n.to_string_lossy().into_owned()
            })
    }
}

impl IndexSource for ArchiveSource {
    fn name(&self) -> &'static str {
        self.name
    }

    fn vendor(&self) -> &'static str {
        "local archive"
    }

    fn fill_value(&self, _column: &str) -> f64 {
        self.fill
    }

    fn has_resident_data(&self) -> bool {
        !self.resident.is_empty()
    }

    fn earliest_resident(&self) -> Option<DateTime<Utc>> {
        self.resident.keys().next().copied()
    }

    fn latest_resident(&self) -> Option<DateTime<Utc>> {
        self.resident.keys().next_back().copied()
    }

    fn covers(&self, ts: DateTime<Utc>) -> bool {
        self.resident.contains_key(&ts)
    }

    fn chunking(&self) -> Chunking {
        self.chunking
    }

    fn load_date(&mut self, date: DateTime<Utc>) -> Result<(), HelioError> {
        if let Some(idx) = self
            .partitions
            .iter()
            .position(|p| date >= p.from && date < p.until)
        {
            self.read_partition(idx)?;
        }
        Ok(())
    }

    fn files_overlapping(&self, start: DateTime<Utc>, stop: DateTime<Utc>) -> Vec<String> {
        self.partitions
            .iter()
            .filter(|p| p.from < stop && p.until > start)
            .map(Self::file_label)
            .collect()
    }

    fn load_file(&mut self, file: &str) -> Result<(), HelioError> {
        match self
            .partitions
            .iter()
            .position(|p| Self::file_label(p) == file)
        {
            Some(idx) => self.read_partition(idx),
            None => Err(HelioError::source(
                self.name,
                format!("no such partition file: {file}"),
            )),
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
            .range(start..stop)
            .map(|(&ts, &value)| Observation::new(ts, value))
            .collect()
    }
}
