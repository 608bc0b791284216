#[cfg(test)]
#[path = "skip_trace_dialog_test.rs"]
mod skip_trace_dialog_test;

use crate::net::types::TownSkipTraceStats;

/// What the skip-trace dialog shows.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DialogPhase {
    /// Stats fetch in flight (or not yet arrived).
    Loading,
    /// Town has never been scraped; no counts to show, no action.
    NotScraped,
    /// Town scraped; show counts and, when cases remain, the action.
    Stats,
}

/// Derive the dialog phase from the loading flag and the fetched stats.
pub fn dialog_phase(loading: bool, stats: Option<&TownSkipTraceStats>) -> DialogPhase {
    match (loading, stats) {
        (true, _) | (false, None) => DialogPhase::Loading,
        (false, Some(stats)) if !stats.scraped => DialogPhase::NotScraped,
        (false, Some(_)) => DialogPhase::Stats,
    }
}

/// Estimated cost of tracing `untraced` cases, as a dollar label.
///
/// Integer cents all the way down, so `7 × 7¢` is exactly `"$0.49"`.
pub fn estimated_cost_label(untraced: u32, cost_per_lookup_cents: u32) -> String {
    let cents = u64::from(untraced) * u64::from(cost_per_lookup_cents);
    format!("${}.{:02}", cents / 100, cents % 100)
}

/// Per-lookup rate as a dollar label, for the "($0.07 per lookup)" hint.
pub fn rate_label(cost_per_lookup_cents: u32) -> String {
    estimated_cost_label(1, cost_per_lookup_cents)
}
