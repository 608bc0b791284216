//! Documented fallback values for degraded read operations.
//!
//! The client itself returns `Result`; pages apply these wrappers so the UI
//! stays usable when the backend is down, and so tests can distinguish real
//! responses from substituted ones. Every substitution logs the underlying
//! failure. Action operations (scrape, skip-trace batch) have no fallback.

#[cfg(test)]
#[path = "fallback_test.rs"]
mod fallback_test;

use super::error::ApiError;
use super::types::{Case, TownSkipTraceStats};

/// Built-in Connecticut town list used when the towns endpoint is
/// unreachable.
pub const CONNECTICUT_TOWNS: [&str; 30] = [
    "Bridgeport",
    "Hartford",
    "New Haven",
    "Stamford",
    "Waterbury",
    "Norwalk",
    "Danbury",
    "New Britain",
    "Bristol",
    "Meriden",
    "Milford",
    "West Haven",
    "Middletown",
    "Norwich",
    "Shelton",
    "Torrington",
    "Naugatuck",
    "Newington",
    "Cheshire",
    "Glastonbury",
    "Vernon",
    "Windsor",
    "Fairfield",
    "Hamden",
    "Stratford",
    "Manchester",
    "Wallingford",
    "East Haven",
    "Enfield",
    "Southington",
];

/// Full town list, or the built-in list (sorted) when the fetch failed.
pub fn towns(result: Result<Vec<String>, ApiError>) -> Vec<String> {
    result.unwrap_or_else(|err| {
        log::warn!("town list unavailable, using built-in fallback: {err}");
        let mut towns: Vec<String> = CONNECTICUT_TOWNS.iter().map(|&t| t.to_owned()).collect();
        towns.sort();
        towns
    })
}

/// Scraped-town list, or the one town known to hold data.
pub fn scraped_towns(result: Result<Vec<String>, ApiError>) -> Vec<String> {
    result.unwrap_or_else(|err| {
        log::warn!("scraped-town list unavailable, falling back: {err}");
        vec!["Middletown".to_owned()]
    })
}

/// Case list, or empty when the fetch failed.
pub fn cases(result: Result<Vec<Case>, ApiError>) -> Vec<Case> {
    result.unwrap_or_else(|err| {
        log::warn!("case list unavailable, showing none: {err}");
        Vec::new()
    })
}

/// Total case count, or zero when the fetch failed.
pub fn case_count(result: Result<u64, ApiError>) -> u64 {
    result.unwrap_or_else(|err| {
        log::warn!("case count unavailable, showing 0: {err}");
        0
    })
}

/// Town skip-trace stats, or a synthetic "not scraped" record carrying an
/// error message for the dialog to surface.
pub fn town_stats(town: &str, result: Result<TownSkipTraceStats, ApiError>) -> TownSkipTraceStats {
    result.unwrap_or_else(|err| {
        log::warn!("skip-trace stats for {town} unavailable: {err}");
        TownSkipTraceStats {
            town: town.to_owned(),
            scraped: false,
            total_cases: 0,
            traced_cases: 0,
            untraced_cases: 0,
            error: Some("Failed to fetch statistics".to_owned()),
        }
    })
}
