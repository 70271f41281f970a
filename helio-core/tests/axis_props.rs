use chrono::{DateTime, TimeDelta, Utc};
use helio_core::Observation;
use helio_core::timeseries::axis::{canonical_axis, pad_edges, reindex};
use proptest::prelude::*;

fn t(sec: i64) -> DateTime<Utc> {
    DateTime::from_timestamp(sec, 0).unwrap()
}

proptest! {
    #[test]
    fn axis_is_gapless_and_half_open(
        start in -1_000_000i64..1_000_000i64,
        slots in 0i64..500,
        step in prop::sample::select(vec![3_600i64, 10_800, 86_400]),
    ) {
        let stop = start + slots * step;
        let axis = canonical_axis(t(start), t(stop), TimeDelta::seconds(step));

        prop_assert_eq!(axis.len(), usize::try_from(slots.max(0)).unwrap());
        for w in axis.windows(2) {
            prop_assert_eq!((w[1] - w[0]).num_seconds(), step);
        }
        if let (Some(first), Some(last)) = (axis.first(), axis.last()) {
            prop_assert_eq!(*first, t(start));
            prop_assert!(*last < t(stop));
        }
    }

    #[test]
    fn reindex_covers_every_slot_without_interpolation(
        slots in 1usize..100,
        present in proptest::collection::vec(any::<bool>(), 1..100),
    ) {
        let step = TimeDelta::hours(3);
        let axis = canonical_axis(t(0), t(i64::try_from(slots).unwrap() * 10_800), step);
        let points: Vec<Observation> = axis
            .iter()
            .enumerate()
            .filter(|(i, _)| *present.get(i % present.len()).unwrap_or(&false))
            .map(|(i, &ts)| Observation::new(ts, i as f64))
            .collect();

        let out = reindex(&points, &axis, step, f64::NAN);
        prop_assert_eq!(out.len(), axis.len());
        for (i, o) in out.iter().enumerate() {
            prop_assert_eq!(o.ts, axis[i]);
            if *present.get(i % present.len()).unwrap_or(&false) {
                prop_assert_eq!(o.value, i as f64);
            } else {
                prop_assert!(o.value.is_nan());
            }
        }
    }

    #[test]
    fn padding_is_idempotent_when_window_matches_observations(n in 2usize..100) {
        let step = TimeDelta::hours(3);
        let axis = canonical_axis(t(0), t(i64::try_from(n).unwrap() * 10_800), step);
        let mut points: Vec<Observation> =
            axis.iter().map(|&ts| Observation::new(ts, 1.5)).collect();
        let before = points.clone();

        pad_edges(&mut points, &axis, -1.0);
        prop_assert_eq!(points, before);
    }

    #[test]
    fn padding_fills_exactly_the_missing_edges(
        n in 2usize..50,
        lead in 0usize..10,
        trail in 0usize..10,
    ) {
        let step = TimeDelta::hours(3);
        let total = n + lead + trail;
        let axis = canonical_axis(t(0), t(i64::try_from(total).unwrap() * 10_800), step);
        let mut points: Vec<Observation> = axis[lead..lead + n]
            .iter()
            .map(|&ts| Observation::new(ts, 2.0))
            .collect();

        pad_edges(&mut points, &axis, -1.0);
        prop_assert_eq!(points.len(), total);
        for (i, o) in points.iter().enumerate() {
            prop_assert_eq!(o.ts, axis[i]);
            let expected = if i < lead || i >= lead + n { -1.0 } else { 2.0 };
            prop_assert_eq!(o.value, expected);
        }
    }
}

#[test]
fn first_observation_in_slot_wins() {
    let step = TimeDelta::hours(3);
    let axis = canonical_axis(t(0), t(21_600), step);
    // Two off-grid observations inside the first slot; the earlier one wins.
    let points = vec![
        Observation::new(t(600), 4.0),
        Observation::new(t(1_200), 9.0),
        Observation::new(t(10_800), 7.0),
    ];

    let out = reindex(&points, &axis, step, f64::NAN);
    assert_eq!(out.len(), 2);
    assert_eq!(out[0].value, 4.0);
    assert_eq!(out[1].value, 7.0);
}

#[test]
fn degenerate_window_produces_empty_axis() {
    assert!(canonical_axis(t(100), t(100), TimeDelta::hours(3)).is_empty());
    assert!(canonical_axis(t(200), t(100), TimeDelta::hours(3)).is_empty());
    assert!(canonical_axis(t(0), t(100), TimeDelta::zero()).is_empty());
}
