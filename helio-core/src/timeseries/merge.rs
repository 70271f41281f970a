use chrono::{DateTime, TimeDelta, Utc};
use helio_types::{HelioError, MergeWindow, Provenance, Segment, SeriesId};

use crate::source::{Chunking, IndexSource, Ranked};
use crate::timeseries::{axis, infer};
use crate::types::{CombinedSeries, IndexSeries, Observation};

/// Parameters for one combine invocation.
#[derive(Debug)]
pub struct CombineRequest {
    /// Column read from every source and emitted in the output.
    pub column: String,
    /// Native cadence of the index. Drives cursor advancement during the
    /// sweep and is the fallback when too few points were accumulated to
    /// infer a cadence.
    pub native_step: TimeDelta,
    /// Explicit merge window, or `None` to derive one from resident data.
    pub window: Option<MergeWindow>,
    /// Fill sentinel written into output slots no source could supply.
    pub fill_value: f64,
    /// Reject a window with `start >= stop` instead of producing an empty
    /// merge.
    pub reject_empty_window: bool,
    /// Identity stamped onto the output.
    pub id: SeriesId,
}

/// Merge ranked sources into one continuous, regularly-sampled series.
///
/// Sources are swept in priority order: the highest-priority source supplies
/// values for as long as it keeps producing data, and lower-priority sources
/// fill in only where it had nothing to offer. The accumulated values are then gridded onto a gapless axis at the
/// inferred cadence covering exactly `[start, stop)`, with fill entries at
/// every slot no source could supply.
///
/// # Errors
/// - `Config` if fewer than two sources are supplied, no window can be
///   derived from resident data, or (when `reject_empty_window` is set) the
///   window is zero or negative.
/// - Any error raised by a source load propagates unmodified; a load failure
///   indicates a corrupt or missing backing store the merge cannot route
///   around.
#[cfg_attr(
    feature = "tracing",
    tracing::instrument(
        name = "helio_core::timeseries::combine",
        skip(sources, req),
        fields(column = %req.column, tag = %req.id.tag, sources = sources.len()),
    )
)]
pub fn combine(
    mut sources: Vec<Ranked<'_>>,
    req: CombineRequest,
) -> Result<CombinedSeries, HelioError> {
    if sources.len() < 2 {
        return Err(HelioError::config(
            "need at least two index sources to combine them",
        ));
    }
    sources.sort_by_key(|r| r.role);

    let window = match req.window {
        Some(w) => w,
        None => derive_window(&sources, req.native_step)?,
    };
    if req.reject_empty_window && window.is_empty() {
        return Err(HelioError::config("date range is zero or negative"));
    }

    let (mut points, provenance) = sweep(&mut sources, &req.column, window, req.native_step)?;

    let times: Vec<DateTime<Utc>> = points.iter().map(|p| p.ts).collect();
    let step = infer::estimate_cadence(&times).unwrap_or(req.native_step);
    let grid = axis::canonical_axis(window.start, window.stop, step);
    axis::pad_edges(&mut points, &grid, req.fill_value);
    let gridded = axis::reindex(&points, &grid, step, req.fill_value);

    Ok(CombinedSeries {
        series: IndexSeries::from_observations(req.column, &gridded),
        id: req.id,
        provenance,
        fill_value: req.fill_value,
    })
}

/// Derive the merge window from currently resident data across sources:
/// start is the minimum earliest resident timestamp, stop the maximum latest
/// resident timestamp plus one cadence step (so the final period is
/// included).
///
/// # Errors
/// Returns `Config` when no source has any resident data.
pub fn derive_window(sources: &[Ranked<'_>], step: TimeDelta) -> Result<MergeWindow, HelioError> {
    let mut start: Option<DateTime<Utc>> = None;
    let mut last: Option<DateTime<Utc>> = None;
    for r in sources {
        if let Some(e) = r.source.earliest_resident() {
            start = Some(start.map_or(e, |s| s.min(e)));
        }
        if let Some(l) = r.source.latest_resident() {
            last = Some(last.map_or(l, |s| s.max(l)));
        }
    }
    match (start, last) {
        (Some(start), Some(last)) => Ok(MergeWindow::new(start, last + step)),
        _ => Err(HelioError::config(
            "must either load data into the sources or provide starting and ending times",
        )),
    }
}

/// The priority sweep with source fallthrough.
///
/// A cursor starts at `window.start` and the highest-priority source is
/// active. Each round, the active source is asked for non-fill observations
/// in `[cursor, stop)` — after a date- or file-triggered load when its
/// resident data does not already cover the cursor. When it yields data the
/// cursor jumps past the last appended observation and the same source is
/// asked again; the first time it offers nothing it is permanently retired
/// and the next-ranked source takes over. Ties at the hand-off are resolved
/// by the cursor, not the clock: the next source is only asked for times at
/// or after the cursor, so no observation is double-counted.
fn sweep(
    sources: &mut [Ranked<'_>],
    column: &str,
    window: MergeWindow,
    step: TimeDelta,
) -> Result<(Vec<Observation>, Provenance), HelioError> {
    let mut points: Vec<Observation> = Vec::new();
    let mut provenance = Provenance::new();
    let mut itime = window.start;
    let mut seg_start = itime;
    let mut idx = 0usize;

    while itime < window.stop && idx < sources.len() {
        let ranked = &mut sources[idx];
        let retired = match ranked.source.chunking() {
            Chunking::ByDate { skip_ahead_days } => {
                if !ranked.source.covers(itime) {
                    let target = skip_ahead_days
                        .map_or(itime, |d| itime + TimeDelta::days(i64::from(d)));
                    ranked.source.load_date(target)?;
                }
                let fresh = select(ranked.source, column, itime, window.stop);
                match fresh.last().copied() {
                    Some(last) => {
                        itime = last.ts + step;
                        points.extend(fresh);
                        false
                    }
                    None => true,
                }
            }
            Chunking::ByFile => {
                if ranked.source.has_resident_data() {
                    let fresh = select(ranked.source, column, itime, window.stop);
                    if let Some(last) = fresh.last().copied() {
                        itime = last.ts + step;
                        points.extend(fresh);
                    }
                } else {
                    for file in ranked.source.files_overlapping(itime, window.stop) {
                        ranked.source.load_file(&file)?;
                        let fresh = select(ranked.source, column, itime, window.stop);
                        if let Some(last) = fresh.last().copied() {
                            itime = last.ts + step;
                            points.extend(fresh);
                        }
                    }
                }
                // File-chunked sources are visited once, then hand over.
                true
            }
        };

        if retired {
            #[cfg(feature = "tracing")]
            tracing::debug!(
                source = ranked.source.name(),
                role = %ranked.role,
                cursor = %itime,
                "source exhausted; falling through"
            );
            provenance.push(Segment {
                role: ranked.role,
                start: seg_start,
                end: itime,
            });
            seg_start = itime;
            idx += 1;
        }
    }

    if idx < sources.len() {
        provenance.push(Segment {
            role: sources[idx].role,
            start: seg_start,
            end: itime,
        });
    }

    Ok((points, provenance))
}

/// Resident observations of `source` in `[start, stop)` whose value is not
/// the source's own fill sentinel. With a NaN sentinel nothing compares
/// equal, so every resident value passes.
fn select(
    source: &dyn IndexSource,
    column: &str,
    start: DateTime<Utc>,
    stop: DateTime<Utc>,
) -> Vec<Observation> {
    let fill = source.fill_value(column);
    source
        .observations_in(column, start, stop)
        .into_iter()
        .filter(|o| o.value != fill)
        .collect()
}
