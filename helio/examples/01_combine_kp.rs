use helio::combine_kp;
use helio_mock::fixtures;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Run with `--features helio/tracing` and RUST_LOG=debug to watch the
    // sweep fall through the ranked sources.
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    // 1. The three ranked Kp feeds, all resident.
    let mut standard = fixtures::kp::standard();
    let mut recent = fixtures::kp::recent().preloaded();
    let mut forecast = fixtures::kp::forecast().preloaded();

    // 2. Merge over the union of resident data, filling holes with NaN.
    let merged = combine_kp(
        Some(&mut standard),
        Some(&mut recent),
        Some(&mut forecast),
        None,
        f64::NAN,
    )?;

    // 3. Print the results.
    println!("## Merged {} ({} rows):", merged.id.tag, merged.series.len());
    let kp = merged.series.column("Kp").expect("merged Kp column");
    for (ts, value) in merged.series.timestamps().iter().zip(kp).take(10) {
        println!(" - {ts}: Kp = {value:.2}");
    }
    if merged.series.len() > 10 {
        println!("... and more");
    }

    println!("\n## Provenance:");
    for seg in &merged.provenance.segments {
        println!(
            " - the {} source supplied {} to {}",
            seg.role,
            seg.start.format("%Y-%m-%d %H:%M"),
            seg.end.format("%Y-%m-%d %H:%M"),
        );
    }
    println!("\n{}", merged.notes());

    Ok(())
}
