use chrono::{DateTime, TimeDelta, Utc};

/// Estimate a representative step (in seconds) from positive adjacent
/// timestamp deltas in the input sequence.
///
/// Prefer the mode (most frequent positive delta); if there is no unique
/// mode, return the lower median so the result is an actually observed
/// cadence.
///
/// The input order does not matter; duplicates are ignored. Returns `None`
/// if fewer than two distinct timestamps are present.
///
/// ```
/// use helio_core::estimate_step_seconds;
/// use chrono::DateTime;
///
/// let t = |sec: i64| DateTime::from_timestamp(sec, 0).unwrap();
/// // Adjacent deltas: 10800,10800,10800,21600 => unique mode is 10800 (3 h)
/// let times = vec![t(0), t(10_800), t(21_600), t(32_400), t(54_000)];
/// assert_eq!(estimate_step_seconds(times), Some(10_800));
/// ```
#[must_use]
pub fn estimate_step_seconds(mut times: Vec<DateTime<Utc>>) -> Option<i64> {
    if times.len() < 2 {
        return None;
    }
    times.sort_unstable();

    let mut deltas: Vec<i64> = Vec::with_capacity(times.len().saturating_sub(1));
    let mut last = times[0];
    for ts in times.into_iter().skip(1) {
        let dt: TimeDelta = ts - last;
        if dt > TimeDelta::zero() {
            deltas.push(dt.num_seconds());
            last = ts;
        }
    }
    if deltas.is_empty() {
        return None;
    }
    deltas.sort_unstable();

    // Prefer the mode (most frequent positive delta). If there is no unique
    // mode, return the lower median.
    let mut best_delta: i64 = deltas[0];
    let mut best_count: usize = 0;
    let mut num_best_candidates: usize = 0;

    let mut cur_delta: i64 = deltas[0];
    let mut cur_count: usize = 1;
    for &d in deltas.iter().skip(1) {
        if d == cur_delta {
            cur_count += 1;
            continue;
        }
        if cur_count > best_count {
            best_count = cur_count;
            best_delta = cur_delta;
            num_best_candidates = 1;
        } else if cur_count == best_count {
            num_best_candidates = num_best_candidates.saturating_add(1);
        }
        cur_delta = d;
        cur_count = 1;
    }
    if cur_count > best_count {
        best_delta = cur_delta;
        num_best_candidates = 1;
    } else if cur_count == best_count {
        num_best_candidates = num_best_candidates.saturating_add(1);
    }

    if num_best_candidates == 1 {
        return Some(best_delta);
    }

    // Lower median
    let mid = deltas.len() / 2;
    if deltas.len() % 2 == 1 {
        Some(deltas[mid])
    } else {
        Some(deltas[mid - 1])
    }
}

/// Estimate the cadence of a timestamp sequence as a [`TimeDelta`].
///
/// Convenience wrapper over [`estimate_step_seconds`].
#[must_use]
pub fn estimate_cadence(times: &[DateTime<Utc>]) -> Option<TimeDelta> {
    estimate_step_seconds(times.to_vec()).map(TimeDelta::seconds)
}

/// Heuristic: determine if a timestamp sequence is sub-daily.
///
/// Requires evidence of sub-daily cadence. Returns `true` only if BOTH
/// conditions hold:
/// - At least 3 adjacent deltas are strictly less than 86,400 seconds (1 day)
/// - At least 60% of adjacent deltas are strictly less than 86,400 seconds
#[must_use]
pub fn is_subdaily(times: &[DateTime<Utc>]) -> bool {
    const DAY: i64 = 86_400;
    if times.len() < 2 {
        return false;
    }

    // Compute positive adjacent deltas after sorting; ignore duplicates.
    let mut ts: Vec<_> = times.to_vec();
    ts.sort_unstable();
    let mut deltas: Vec<i64> = Vec::with_capacity(ts.len().saturating_sub(1));
    let mut last = ts[0];
    for &cur in ts.iter().skip(1) {
        let dt: TimeDelta = cur - last;
        if dt > TimeDelta::zero() {
            deltas.push(dt.num_seconds());
            last = cur;
        }
    }

    if deltas.is_empty() {
        return false;
    }

    let total: usize = deltas.len();
    let subdaily: usize = deltas.iter().filter(|&&d| d > 0 && d < DAY).count();

    let min_count: usize = 3;
    let min_ratio_num: usize = 3;
    let min_ratio_den: usize = 5;

    if subdaily < min_count {
        return false;
    }
    // subdaily/total >= 3/5  =>  subdaily * 5 >= total * 3
    subdaily.saturating_mul(min_ratio_den) >= total.saturating_mul(min_ratio_num)
}
