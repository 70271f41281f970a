use chrono::{DateTime, TimeZone, Utc};
use helio::combine_f107;
use helio_archive::ArchiveSource;
use helio_mock::fixtures;

fn date(month: u32, day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2009, month, day, 0, 0, 0).unwrap()
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 1. Write a small measured-F10.7 archive file, the way the download
    //    tooling would leave it on disk.
    let dir = std::env::temp_dir().join(format!("helio-example-{}", std::process::id()));
    std::fs::create_dir_all(&dir)?;
    let path = dir.join("f107_monthly_2009-03.txt");
    std::fs::write(
        &path,
        "time,f107\n\
         2009-03-01,69.5\n\
         2009-03-02,70.0\n\
         2009-03-03,70.5\n",
    )?;

    // 2. A date-chunked archive source over that file, plus the canned
    //    forecast feed as the lower-ranked fallback.
    let mut standard =
        ArchiveSource::daily("sw-f107", "f107", f64::NAN).with_partition(&path, date(3, 1), date(4, 1));
    let mut forecast = fixtures::f107::forecast().preloaded();

    // 3. Merge; the archive is loaded on demand during the sweep.
    let window = helio::MergeWindow::new(date(3, 1), date(3, 5));
    let merged = combine_f107(&mut standard, &mut forecast, Some(window))?;

    let f107 = merged.series.column("f107").expect("merged f107 column");
    for (ts, value) in merged.series.timestamps().iter().zip(f107) {
        println!("{}: F10.7 = {value:.1} SFU", ts.format("%Y-%m-%d"));
    }
    println!("\n{}", merged.notes());

    std::fs::remove_dir_all(&dir)?;
    Ok(())
}
