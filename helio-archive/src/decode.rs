//! CSV decoding for archive partition files.
//!
//! Archive files carry a `time` column followed by one column per index,
//! e.g.:
//!
//! ```text
//! time,f107
//! 2009-01-01,70.5
//! 2009-01-02,71.0
//! ```
//!
//! Timestamps are RFC 3339, `YYYY-MM-DD HH:MM:SS`, or bare dates (midnight
//! UTC). A blank value cell keeps the source's fill sentinel.

use std::path::Path;

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use helio_core::Observation;

pub(crate) fn read_observations(
    path: &Path,
    column: &str,
    fill: f64,
) -> Result<Vec<Observation>, String> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_path(path)
        .map_err(|e| format!("{}: {e}", path.display()))?;

    let headers = rdr.headers().map_err(|e| e.to_string())?.clone();
    let t_idx = headers
        .iter()
        .position(|h| h == "time")
        .ok_or_else(|| format!("{}: missing time column", path.display()))?;
    let v_idx = headers
        .iter()
        .position(|h| h == column)
        .ok_or_else(|| format!("{}: missing column {column}", path.display()))?;

    let mut out = Vec::new();
    for record in rdr.records() {
        let record = record.map_err(|e| e.to_string())?;
        let raw_ts = record
            .get(t_idx)
            .ok_or_else(|| format!("{}: short row", path.display()))?;
        let ts = parse_timestamp(raw_ts)
            .ok_or_else(|| format!("{}: bad timestamp {raw_ts:?}", path.display()))?;
        let raw_val = record.get(v_idx).unwrap_or("");
        let value = if raw_val.is_empty() {
            fill
        } else {
            raw_val
                .parse::<f64>()
                .map_err(|_| format!("{}: bad value {raw_val:?} at {raw_ts}", path.display()))?
        };
        out.push(Observation::new(ts, value));
    }
    out.sort_by_key(|o| o.ts);
    Ok(out)
}

fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    if let Ok(ts) = DateTime::parse_from_rfc3339(raw) {
        return Some(ts.with_timezone(&Utc));
    }
    if let Ok(ts) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S") {
        return Some(ts.and_utc());
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|dt| dt.and_utc())
}
