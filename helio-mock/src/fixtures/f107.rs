use chrono::{DateTime, TimeDelta, TimeZone, Utc};
use helio_core::Observation;

use crate::MockSource;

/// Midnight UTC on the given 2009 month/day.
#[must_use]
pub fn date(month: u32, day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2009, month, day, 0, 0, 0).unwrap()
}

fn daily(from: DateTime<Utc>, until: DateTime<Utc>, seed: usize) -> Vec<Observation> {
    let mut pts = Vec::new();
    let mut ts = from;
    let mut i = seed;
    while ts < until {
        pts.push(Observation::new(ts, 70.0 + (i % 9) as f64 * 0.5));
        ts += TimeDelta::days(1);
        i += 1;
    }
    pts
}

/// Measured daily F10.7 chunked in 30-day blocks keyed by generation date:
/// the file generated on day G holds the 30 days before G, so a request for
/// date D resolves the block generated around D + 30 days. Pair with the
/// merge sweep's 30-day skip-ahead.
///
/// Block one holds `[Jan 1, Jan 31)`, block two `[Jan 31, Mar 2)`. Nothing is
/// resident until loaded.
#[must_use]
pub fn standard() -> MockSource {
    MockSource::by_blocks("sw-f107", "f107", f64::NAN, 30)
        .with_partition(
            date(1, 31),
            date(3, 2),
            daily(date(1, 1), date(1, 31), 0),
        )
        .with_partition(
            date(3, 2),
            date(4, 1),
            daily(date(1, 31), date(3, 2), 30),
        )
}

/// Forecast F10.7 for `[Mar 2, Mar 5)` in one generation-dated file.
#[must_use]
pub fn forecast() -> MockSource {
    MockSource::by_file("sw-f107-forecast", "f107", -99_999.0).with_file(
        "f107_forecast_2009-03-02.txt",
        date(3, 2),
        date(3, 5),
        vec![
            Observation::new(date(3, 2), 72.0),
            Observation::new(date(3, 3), 71.0),
            Observation::new(date(3, 4), 70.0),
        ],
    )
}
