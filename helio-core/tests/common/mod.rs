//! In-memory `IndexSource` used by the integration tests.
#![allow(dead_code)]

use chrono::{DateTime, Utc};
use helio_core::{Chunking, IndexSource, Observation};
use helio_types::HelioError;

pub struct InMemorySource {
    name: &'static str,
    fill: f64,
    chunking: Chunking,
    /// Full backing store; `load_date` materializes one UTC day of it.
    archive: Vec<Observation>,
    resident: Vec<Observation>,
    fail_loads: bool,
    pub load_dates: Vec<DateTime<Utc>>,
}

impl InMemorySource {
    pub fn by_date(name: &'static str, fill: f64, archive: Vec<Observation>) -> Self {
        Self {
            name,
            fill,
            chunking: Chunking::ByDate {
                skip_ahead_days: None,
            },
            archive,
            resident: Vec::new(),
            fail_loads: false,
            load_dates: Vec::new(),
        }
    }

    /// Everything already resident; no loads will ever be needed.
    pub fn preloaded(name: &'static str, fill: f64, archive: Vec<Observation>) -> Self {
        let mut src = Self::by_date(name, fill, archive);
        src.resident = src.archive.clone();
        src
    }

    pub fn failing(name: &'static str, fill: f64, archive: Vec<Observation>) -> Self {
        let mut src = Self::by_date(name, fill, archive);
        src.fail_loads = true;
        src
    }
}

impl IndexSource for InMemorySource {
    fn name(&self) -> &'static str {
        self.name
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
        if self.fail_loads {
            return Err(HelioError::source(self.name, "backing store unreadable"));
        }
        self.load_dates.push(date);
        let day_start = date
            .date_naive()
            .and_hms_opt(0, 0, 0)
            .unwrap()
            .and_utc();
        let day_end = day_start + chrono::TimeDelta::days(1);
        for o in &self.archive {
            if o.ts >= day_start && o.ts < day_end && !self.resident.iter().any(|r| r.ts == o.ts) {
                self.resident.push(*o);
            }
        }
        self.resident.sort_by_key(|o| o.ts);
        Ok(())
    }

    fn observations_in(
        &self,
        _column: &str,
        start: DateTime<Utc>,
        stop: DateTime<Utc>,
    ) -> Vec<Observation> {
        self.resident
            .iter()
            .filter(|o| o.ts >= start && o.ts < stop)
            .copied()
            .collect()
    }
}
