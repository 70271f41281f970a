//! The per-index combine call sites.
//!
//! Both call sites parameterize the same sweep engine in `helio-core`; they
//! differ only in cadence (3 hours vs. 1 day), the number of ranked sources
//! (up to 3 vs. exactly 2), and how strict they are about degenerate
//! windows.

/// Daily F10.7 solar radio flux combination.
pub mod f107;
/// 3-hourly planetary Kp combination.
pub mod kp;

use helio_core::Ranked;

/// Build the combined-series tag from the roles present, in rank order,
/// e.g. `"combined_standard_recent_forecast"`.
pub(crate) fn tag_for(sources: &[Ranked<'_>]) -> String {
    let mut tag = String::from("combined");
    let mut roles: Vec<_> = sources.iter().map(|r| r.role).collect();
    roles.sort_unstable();
    for role in roles {
        tag.push('_');
        tag.push_str(role.as_str());
    }
    tag
}
