mod common;

use chrono::{DateTime, TimeDelta, TimeZone, Utc};
use common::InMemorySource;
use helio_core::{CombineRequest, Observation, Ranked, combine};
use helio_types::{HelioError, MergeWindow, SeriesId, SourceRole};

fn t0() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2009, 1, 1, 0, 0, 0).unwrap()
}

fn slot(i: usize) -> DateTime<Utc> {
    t0() + TimeDelta::hours(3) * i32::try_from(i).unwrap()
}

fn request(window: Option<MergeWindow>, reject_empty_window: bool) -> CombineRequest {
    CombineRequest {
        column: "Kp".to_string(),
        native_step: TimeDelta::hours(3),
        window,
        fill_value: f64::NAN,
        reject_empty_window,
        id: SeriesId::new("sw", "kp", "combined_standard_recent"),
    }
}

#[test]
fn fewer_than_two_sources_is_a_configuration_error() {
    let mut only = InMemorySource::preloaded("standard-kp", f64::NAN, vec![]);
    let sources = vec![Ranked::new(SourceRole::Standard, &mut only)];

    let err = combine(sources, request(None, false)).unwrap_err();
    assert!(matches!(err, HelioError::Config { .. }));
}

#[test]
fn no_resident_data_and_no_window_is_a_configuration_error() {
    let mut standard = InMemorySource::by_date("standard-kp", f64::NAN, vec![]);
    let mut recent = InMemorySource::by_date("recent-kp", f64::NAN, vec![]);
    let sources = vec![
        Ranked::new(SourceRole::Standard, &mut standard),
        Ranked::new(SourceRole::Recent, &mut recent),
    ];

    let err = combine(sources, request(None, false)).unwrap_err();
    assert!(matches!(err, HelioError::Config { .. }));
}

#[test]
fn inverted_window_is_rejected_when_requested() {
    let mut standard = InMemorySource::preloaded("standard-kp", f64::NAN, vec![]);
    let mut recent = InMemorySource::preloaded("recent-kp", f64::NAN, vec![]);
    let sources = vec![
        Ranked::new(SourceRole::Standard, &mut standard),
        Ranked::new(SourceRole::Recent, &mut recent),
    ];

    let window = MergeWindow::new(slot(4), slot(4));
    let err = combine(sources, request(Some(window), true)).unwrap_err();
    assert!(matches!(err, HelioError::Config { .. }));
}

#[test]
fn degenerate_window_is_tolerated_when_not_rejected() {
    let mut standard =
        InMemorySource::preloaded("standard-kp", f64::NAN, vec![Observation::new(slot(0), 1.0)]);
    let mut recent = InMemorySource::preloaded("recent-kp", f64::NAN, vec![]);
    let sources = vec![
        Ranked::new(SourceRole::Standard, &mut standard),
        Ranked::new(SourceRole::Recent, &mut recent),
    ];

    let window = MergeWindow::new(slot(4), slot(4));
    let merged = combine(sources, request(Some(window), false)).unwrap();
    assert!(merged.series.is_empty());
}

#[test]
fn load_failure_propagates_unmodified() {
    let pts: Vec<Observation> = (0..4).map(|i| Observation::new(slot(i), 1.0)).collect();
    let mut standard = InMemorySource::failing("standard-kp", f64::NAN, pts);
    let mut recent = InMemorySource::preloaded("recent-kp", f64::NAN, vec![]);
    let sources = vec![
        Ranked::new(SourceRole::Standard, &mut standard),
        Ranked::new(SourceRole::Recent, &mut recent),
    ];

    let window = MergeWindow::new(slot(0), slot(4));
    let err = combine(sources, request(Some(window), false)).unwrap_err();
    assert!(matches!(err, HelioError::Source { name, .. } if name == "standard-kp"));
}
