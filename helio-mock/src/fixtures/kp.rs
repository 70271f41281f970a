use chrono::{DateTime, TimeDelta, TimeZone, Utc};
use helio_core::Observation;

use crate::MockSource;

/// Midnight UTC on the given January 2009 day.
#[must_use]
pub fn jan(day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2009, 1, day, 0, 0, 0).unwrap()
}

fn three_hourly(from: DateTime<Utc>, until: DateTime<Utc>, seed: usize) -> Vec<Observation> {
    let mut pts = Vec::new();
    let mut ts = from;
    let mut i = seed;
    while ts < until {
        // Kp is reported in thirds between 0 and 9.
        pts.push(Observation::new(ts, ((i * 7) % 28) as f64 / 3.0));
        ts += TimeDelta::hours(3);
        i += 1;
    }
    pts
}

/// Reviewed Kp values covering `[Jan 1, Jan 10)` at 3-hour cadence, one
/// day-keyed partition per day, already resident.
#[must_use]
pub fn standard() -> MockSource {
    let mut src = MockSource::by_date("sw-kp", "Kp", f64::NAN);
    for day in 1..10 {
        let from = jan(day);
        let until = jan(day + 1);
        src = src.with_partition(from, until, three_hourly(from, until, (day as usize - 1) * 8));
    }
    src.preloaded()
}

/// Preliminary Kp values covering `[Jan 8, Jan 12)` in two 2-day files.
/// Not resident until loaded; uses the `-1` fill convention of the
/// preliminary feed.
#[must_use]
pub fn recent() -> MockSource {
    MockSource::by_file("sw-kp-recent", "Kp", -1.0)
        .with_file(
            "kp_recent_2009-01-08.txt",
            jan(8),
            jan(10),
            three_hourly(jan(8), jan(10), 100),
        )
        .with_file(
            "kp_recent_2009-01-10.txt",
            jan(10),
            jan(12),
            three_hourly(jan(10), jan(12), 116),
        )
}

/// Forecast Kp values covering `[Jan 11, Jan 14)` in one 3-day file.
#[must_use]
pub fn forecast() -> MockSource {
    MockSource::by_file("sw-kp-forecast", "Kp", -1.0).with_file(
        "kp_forecast_2009-01-11.txt",
        jan(11),
        jan(14),
        three_hourly(jan(11), jan(14), 200),
    )
}
