use chrono::TimeDelta;
use helio_core::{CombineRequest, CombinedSeries, IndexSource, Ranked, combine};
use helio_types::{HelioError, MergeWindow, SeriesId, SourceRole};

/// Column name carrying planetary Kp values.
pub const KP_COLUMN: &str = "Kp";

/// Combine the output from the different Kp sources for a range of dates.
///
/// Merging prioritizes the standard data, then the recent data, and finally
/// the forecast data. Pass `None` for a source to exclude it; at least two
/// sources are required. When `window` is omitted it is derived from the
/// data currently resident across the supplied sources.
///
/// Will not attempt to download any missing data, but will load it: the
/// standard source reloads by date, the recent and forecast sources by file.
///
/// The `fill_value` ends up in output slots no source could supply; it is a
/// caller choice because the standard feed's own sentinel differs from the
/// other sources'.
///
/// A degenerate window (`start == stop`) produces an empty merge rather than
/// an error.
///
/// # Errors
/// - `Config` if fewer than two sources are supplied, or no window was given
///   and no source has resident data.
/// - Source load failures propagate unmodified.
#[cfg_attr(
    feature = "tracing",
    tracing::instrument(skip(standard, recent, forecast), fields(window = ?window))
)]
pub fn combine_kp(
    standard: Option<&mut dyn IndexSource>,
    recent: Option<&mut dyn IndexSource>,
    forecast: Option<&mut dyn IndexSource>,
    window: Option<MergeWindow>,
    fill_value: f64,
) -> Result<CombinedSeries, HelioError> {
    let mut sources = Vec::new();
    if let Some(source) = standard {
        sources.push(Ranked::new(SourceRole::Standard, source));
    }
    if let Some(source) = recent {
        sources.push(Ranked::new(SourceRole::Recent, source));
    }
    if let Some(source) = forecast {
        sources.push(Ranked::new(SourceRole::Forecast, source));
    }

    let tag = super::tag_for(&sources);
    combine(
        sources,
        CombineRequest {
            column: KP_COLUMN.to_string(),
            native_step: TimeDelta::hours(3),
            window,
            fill_value,
            reject_empty_window: false,
            id: SeriesId::new("sw", "kp", tag),
        },
    )
}
