use chrono::{DateTime, TimeDelta, Utc};

use crate::types::Observation;

/// Build the gapless arithmetic axis covering `[start, stop)` at `step`.
///
/// Empty when the window is degenerate or the step is non-positive.
#[must_use]
pub fn canonical_axis(
    start: DateTime<Utc>,
    stop: DateTime<Utc>,
    step: TimeDelta,
) -> Vec<DateTime<Utc>> {
    let mut axis = Vec::new();
    if step <= TimeDelta::zero() {
        return axis;
    }
    let mut t = start;
    while t < stop {
        axis.push(t);
        t += step;
    }
    axis
}

/// Extend sorted observations with fill entries at axis slots strictly before
/// the first real observation and strictly after the last one.
///
/// A window whose bounds already coincide with the observed extremes is left
/// unchanged. With no observations at all, every axis slot becomes a fill
/// entry.
pub fn pad_edges(points: &mut Vec<Observation>, axis: &[DateTime<Utc>], fill: f64) {
    let (Some(&first_slot), Some(&last_slot)) = (axis.first(), axis.last()) else {
        return;
    };
    let Some(first_obs) = points.first().map(|p| p.ts) else {
        *points = axis.iter().map(|&ts| Observation::new(ts, fill)).collect();
        return;
    };
    let last_obs = points.last().map_or(first_obs, |p| p.ts);

    if first_slot < first_obs {
        let lead: Vec<Observation> = axis
            .iter()
            .take_while(|&&ts| ts < first_obs)
            .map(|&ts| Observation::new(ts, fill))
            .collect();
        points.splice(0..0, lead);
    }
    if last_slot > last_obs {
        points.extend(
            axis.iter()
                .skip_while(|&&ts| ts <= last_obs)
                .map(|&ts| Observation::new(ts, fill)),
        );
    }
}

/// Reindex sorted observations onto the canonical axis.
///
/// Each axis slot `[t, t + step)` takes the first observation falling inside
/// it; slots with no observation take the fill value. Values are never
/// interpolated.
#[must_use]
pub fn reindex(
    points: &[Observation],
    axis: &[DateTime<Utc>],
    step: TimeDelta,
    fill: f64,
) -> Vec<Observation> {
    let mut out = Vec::with_capacity(axis.len());
    let mut i = 0usize;
    for &slot in axis {
        let slot_end = slot + step;
        while i < points.len() && points[i].ts < slot {
            i += 1;
        }
        if i < points.len() && points[i].ts < slot_end {
            out.push(Observation::new(slot, points[i].value));
            while i < points.len() && points[i].ts < slot_end {
                i += 1;
            }
        } else {
            out.push(Observation::new(slot, fill));
        }
    }
    out
}
