use chrono::TimeDelta;
use helio_core::{CombineRequest, CombinedSeries, IndexSource, Ranked, combine};
use helio_types::{HelioError, MergeWindow, SeriesId, SourceRole};

/// Column name carrying the F10.7 cm solar radio flux.
pub const F107_COLUMN: &str = "f107";

/// Combine the measured and forecasted F10.7 sources for a range of dates.
///
/// Merging prioritizes the standard data over the forecast data. When
/// `window` is omitted it is derived from the data currently resident across
/// both sources. The output fill sentinel is the standard source's own
/// convention.
///
/// Will not attempt to download any missing data, but will load it: the
/// standard source reloads by date (with its declared skip-ahead when the
/// store is chunked in multi-day blocks), the forecast source by file.
///
/// # Errors
/// - `Config` if the window is zero or negative, or no window was given and
///   neither source has resident data.
/// - Source load failures propagate unmodified.
#[cfg_attr(
    feature = "tracing",
    tracing::instrument(skip(standard, forecast), fields(window = ?window))
)]
pub fn combine_f107(
    standard: &mut dyn IndexSource,
    forecast: &mut dyn IndexSource,
    window: Option<MergeWindow>,
) -> Result<CombinedSeries, HelioError> {
    let fill_value = standard.fill_value(F107_COLUMN);
    let sources = vec![
        Ranked::new(SourceRole::Standard, standard),
        Ranked::new(SourceRole::Forecast, forecast),
    ];

    let tag = super::tag_for(&sources);
    combine(
        sources,
        CombineRequest {
            column: F107_COLUMN.to_string(),
            native_step: TimeDelta::days(1),
            window,
            fill_value,
            reject_empty_window: true,
            id: SeriesId::new("sw", "f107", tag),
        },
    )
}
