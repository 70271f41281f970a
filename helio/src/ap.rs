use chrono::{DateTime, TimeDelta, Timelike, Utc};
use helio_core::IndexSeries;
use helio_types::HelioError;

/// Number of valid samples a trailing 24-hour window must hold before the
/// rolling mean is defined (eight 3-hour intervals per day).
const SAMPLES_PER_DAY: usize = 8;

/// Calculate the daily Ap index from the 3-hourly ap index.
///
/// Ap is the mean of the 3-hourly ap values measured for a given day. The
/// canonical value for a calendar day is the trailing 24-hour rolling mean
/// evaluated at that day's 21:00 sample (the last window lying entirely
/// within the day); it is then backfilled across the day's earlier 3-hour
/// slots so every row within a day carries that day's mean. Slots after the
/// last 21:00 sample stay unset (NaN).
///
/// The rolling window is time-based and counts only finite samples, so with
/// samples missing earlier in a day the window can reach into the previous
/// day and still clear the eight-sample floor.
///
/// The option for a running average (`running_name`) is included since this
/// information is used by MSIS when running with sub-daily geophysical
/// inputs.
///
/// # Errors
/// Returns `Validation` if `ap_name` is absent from the series, or if
/// `daily_name` (or `running_name`) already exists.
pub fn calc_daily_ap(
    series: &mut IndexSeries,
    ap_name: &str,
    daily_name: &str,
    running_name: Option<&str>,
) -> Result<(), HelioError> {
    let Some(ap) = series.column(ap_name) else {
        return Err(HelioError::validation(format!(
            "bad 3-hourly ap column name: {ap_name}"
        )));
    };
    if series.has_column(daily_name) {
        return Err(HelioError::validation(format!(
            "daily Ap column name already exists: {daily_name}"
        )));
    }
    if let Some(name) = running_name
        && series.has_column(name)
    {
        return Err(HelioError::validation(format!(
            "running Ap column name already exists: {name}"
        )));
    }

    let ap = ap.to_vec();
    let times = series.timestamps().to_vec();
    let rolling = rolling_daily_mean(&times, &ap);

    if let Some(name) = running_name {
        series.insert_column(name, rolling.clone())?;
    }
    series.insert_column(daily_name, backfill_from_evening(&times, &rolling))?;
    Ok(())
}

/// Trailing 24-hour mean over `(t - 24h, t]`, requiring at least
/// [`SAMPLES_PER_DAY`] finite samples in the window.
fn rolling_daily_mean(times: &[DateTime<Utc>], values: &[f64]) -> Vec<f64> {
    let window = TimeDelta::days(1);
    times
        .iter()
        .enumerate()
        .map(|(i, &t)| {
            let open = t - window;
            let mut sum = 0.0;
            let mut count = 0usize;
            for j in (0..=i).rev() {
                if times[j] <= open {
                    break;
                }
                if values[j].is_finite() {
                    sum += values[j];
                    count += 1;
                }
            }
            if count >= SAMPLES_PER_DAY {
                sum / count as f64
            } else {
                f64::NAN
            }
        })
        .collect()
}

/// Assign each slot the rolling value of the next 21:00 sample at or after
/// it, so all of a day's slots carry the day's mean.
fn backfill_from_evening(times: &[DateTime<Utc>], rolling: &[f64]) -> Vec<f64> {
    let marks: Vec<usize> = times
        .iter()
        .enumerate()
        .filter(|(_, t)| t.hour() == 21)
        .map(|(i, _)| i)
        .collect();

    let mut out = vec![f64::NAN; times.len()];
    let mut m = 0usize;
    for (i, &t) in times.iter().enumerate() {
        while m < marks.len() && times[marks[m]] < t {
            m += 1;
        }
        if m < marks.len() {
            out[i] = rolling[marks[m]];
        }
    }
    out
}
