use chrono::{DateTime, TimeDelta, TimeZone, Utc};
use helio::{HelioError, IndexSource, MergeWindow, SourceRole, combine_kp};
use helio_mock::fixtures;

fn jan(day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2009, 1, day, 0, 0, 0).unwrap()
}

fn slot_index(times: &[DateTime<Utc>], ts: DateTime<Utc>) -> usize {
    times.iter().position(|&t| t == ts).unwrap()
}

/// Standard covers [Jan 1, Jan 10) every 3 h, recent [Jan 8, Jan 12),
/// forecast [Jan 11, Jan 14). Merging with no explicit window yields a
/// continuous series over [Jan 1, Jan 14) at 3 h steps with no gaps, each
/// stretch supplied by the highest-priority source that still had data.
#[test]
fn three_source_scenario_is_continuous_and_ranked() {
    let mut standard = fixtures::kp::standard();
    let mut recent = fixtures::kp::recent().preloaded();
    let mut forecast = fixtures::kp::forecast().preloaded();

    let merged = combine_kp(
        Some(&mut standard),
        Some(&mut recent),
        Some(&mut forecast),
        None,
        f64::NAN,
    )
    .unwrap();

    assert_eq!(merged.id.platform, "sw");
    assert_eq!(merged.id.name, "kp");
    assert_eq!(merged.id.tag, "combined_standard_recent_forecast");

    let times = merged.series.timestamps();
    let col = merged.series.column("Kp").unwrap();

    // Gapless 3-hourly axis spanning [Jan 1, Jan 14): 13 days x 8 slots.
    assert_eq!(times.len(), 104);
    assert_eq!(times[0], jan(1));
    assert_eq!(*times.last().unwrap(), jan(14) - TimeDelta::hours(3));
    assert!(
        times
            .windows(2)
            .all(|w| w[1] - w[0] == TimeDelta::hours(3))
    );
    assert!(col.iter().all(|v| v.is_finite()));

    // Priority preference: wherever the standard source had data its value
    // wins verbatim, including the [Jan 8, Jan 10) stretch the recent source
    // also covers.
    for o in standard.observations_in("Kp", jan(1), jan(10)) {
        assert_eq!(col[slot_index(times, o.ts)], o.value);
    }
    // Fallthrough: the recent source supplies [Jan 10, Jan 12) ...
    for o in recent.observations_in("Kp", jan(10), jan(12)) {
        assert_eq!(col[slot_index(times, o.ts)], o.value);
    }
    // ... and the forecast source the tail, but only past the cursor: its
    // [Jan 11, Jan 12) overlap with the recent source is never consulted.
    for o in forecast.observations_in("Kp", jan(12), jan(14)) {
        assert_eq!(col[slot_index(times, o.ts)], o.value);
    }

    assert_eq!(
        merged.provenance.roles(),
        vec![SourceRole::Standard, SourceRole::Recent, SourceRole::Forecast]
    );
    let segments = &merged.provenance.segments;
    assert_eq!((segments[0].start, segments[0].end), (jan(1), jan(10)));
    assert_eq!((segments[1].start, segments[1].end), (jan(10), jan(12)));
    assert_eq!((segments[2].start, segments[2].end), (jan(12), jan(14)));
    assert!(merged.notes().starts_with("Combines data from the standard source (2009-01-01"));
    assert!(merged.notes().ends_with(", in that order"));
}

/// Same scenario, but recent and forecast start unloaded: the sweep
/// enumerates only the files overlapping the remaining window and loads each
/// exactly once.
#[test]
fn file_chunked_sources_load_on_demand() {
    let mut standard = fixtures::kp::standard();
    let mut recent = fixtures::kp::recent();
    let mut forecast = fixtures::kp::forecast();

    let window = MergeWindow::new(jan(1), jan(14));
    let merged = combine_kp(
        Some(&mut standard),
        Some(&mut recent),
        Some(&mut forecast),
        Some(window),
        f64::NAN,
    )
    .unwrap();

    // The cursor sat at Jan 10 when the recent source took over, so its
    // Jan 8 file never overlapped the remaining window.
    assert_eq!(recent.load_log(), ["file:kp_recent_2009-01-10.txt"]);
    assert_eq!(forecast.load_log(), ["file:kp_forecast_2009-01-11.txt"]);

    let col = merged.series.column("Kp").unwrap();
    assert_eq!(col.len(), 104);
    assert!(col.iter().all(|v| v.is_finite()));
}

#[test]
fn one_source_is_a_configuration_error() {
    let mut standard = fixtures::kp::standard();
    let err = combine_kp(Some(&mut standard), None, None, None, f64::NAN).unwrap_err();
    assert!(matches!(err, HelioError::Config { .. }));
}

#[test]
fn two_sources_build_the_matching_tag() {
    let mut standard = fixtures::kp::standard();
    let mut forecast = fixtures::kp::forecast().preloaded();

    let merged = combine_kp(
        Some(&mut standard),
        None,
        Some(&mut forecast),
        None,
        f64::NAN,
    )
    .unwrap();
    assert_eq!(merged.id.tag, "combined_standard_forecast");
}

#[test]
fn degenerate_window_produces_an_empty_merge() {
    let mut standard = fixtures::kp::standard();
    let mut recent = fixtures::kp::recent().preloaded();

    let window = MergeWindow::new(jan(5), jan(5));
    let merged = combine_kp(
        Some(&mut standard),
        Some(&mut recent),
        None,
        Some(window),
        f64::NAN,
    )
    .unwrap();
    assert!(merged.series.is_empty());
}
