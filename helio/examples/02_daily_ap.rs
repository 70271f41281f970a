use chrono::{TimeDelta, TimeZone, Utc};
use helio::{IndexSeries, Observation, calc_daily_ap};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 1. Two days of 3-hourly ap: a quiet day followed by an active one.
    let start = Utc.with_ymd_and_hms(2009, 1, 1, 0, 0, 0).unwrap();
    let pts: Vec<Observation> = (0..16)
        .map(|i| {
            let value = if i < 8 { 4.0 } else { 15.0 };
            Observation::new(start + TimeDelta::hours(3 * i), value)
        })
        .collect();
    let mut series = IndexSeries::from_observations("3hr_ap", &pts);

    // 2. Derive the daily Ap plus the continuously updated 24-hour mean.
    calc_daily_ap(&mut series, "3hr_ap", "Ap", Some("ap_24h"))?;

    // 3. Print all three columns side by side.
    let ap = series.column("3hr_ap").expect("input column");
    let daily = series.column("Ap").expect("daily column");
    let running = series.column("ap_24h").expect("running column");
    println!("{:>20} {:>8} {:>8} {:>8}", "time", "3hr_ap", "Ap", "ap_24h");
    for (i, ts) in series.timestamps().iter().enumerate() {
        println!(
            "{:>20} {:>8.2} {:>8.2} {:>8.2}",
            ts.format("%m-%d %H:%M").to_string(),
            ap[i],
            daily[i],
            running[i],
        );
    }

    Ok(())
}
