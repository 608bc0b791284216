#[cfg(test)]
#[path = "skip_traces_test.rs"]
mod skip_traces_test;

use crate::net::api::{ApiClient, Backend};
use crate::net::error::ApiError;
use crate::net::fallback;
use crate::net::types::TownSkipTraceStats;
use crate::state::requests::RequestEpoch;

/// Connecticut counties offered by the by-county trigger.
pub const CONNECTICUT_COUNTIES: [&str; 8] = [
    "Fairfield",
    "Hartford",
    "Litchfield",
    "Middlesex",
    "New Haven",
    "New London",
    "Tolland",
    "Windham",
];

/// Which skip-trace trigger is currently running.
///
/// One tagged union instead of a shared boolean: submitting the town batch
/// must not disable the county or docket triggers, and vice versa.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ActiveTrace {
    #[default]
    Idle,
    ByTown,
    ByCounty,
    ByDocket,
}

/// Skip-traces page state: selections for the three trigger sections plus
/// the by-town dialog.
#[derive(Clone, Debug, Default)]
pub struct SkipTracesState {
    pub towns: Vec<String>,
    pub selected_town: String,
    pub selected_county: String,
    pub docket_number: String,
    pub active: ActiveTrace,
    pub dialog_open: bool,
    pub loading_stats: bool,
    pub stats: Option<TownSkipTraceStats>,
    pub requests: RequestEpoch,
}

impl SkipTracesState {
    pub fn validated_town(&self) -> Result<String, ApiError> {
        let town = self.selected_town.trim();
        if town.is_empty() {
            return Err(ApiError::empty_selection("town"));
        }
        Ok(town.to_owned())
    }

    pub fn validated_county(&self) -> Result<String, ApiError> {
        let county = self.selected_county.trim();
        if county.is_empty() {
            return Err(ApiError::empty_selection("county"));
        }
        Ok(county.to_owned())
    }

    pub fn validated_docket(&self) -> Result<String, ApiError> {
        let docket = self.docket_number.trim();
        if docket.is_empty() {
            return Err(ApiError::Validation(
                "Please enter a docket number".to_owned(),
            ));
        }
        Ok(docket.to_owned())
    }

    /// Whether `which` is blocked. Only its own activity blocks a trigger.
    pub fn is_busy(&self, which: ActiveTrace) -> bool {
        self.active == which
    }

    /// Open the dialog and start the stats fetch.
    pub fn open_dialog(&mut self) {
        self.dialog_open = true;
        self.loading_stats = true;
        self.stats = None;
    }

    pub fn stats_loaded(&mut self, stats: TownSkipTraceStats) {
        self.stats = Some(stats);
        self.loading_stats = false;
    }

    pub fn close_dialog(&mut self) {
        self.dialog_open = false;
    }

    pub fn begin(&mut self, which: ActiveTrace) {
        self.active = which;
    }

    pub fn finish(&mut self) {
        self.active = ActiveTrace::Idle;
    }
}

/// User-facing summary of a completed town batch, computed from the fresh
/// post-batch stats rather than the stale pre-action untraced count.
pub fn completion_message(
    town: &str,
    before: &TownSkipTraceStats,
    after: &TownSkipTraceStats,
) -> String {
    let processed = after.traced_cases.saturating_sub(before.traced_cases);
    format!("Skip trace completed for {town}. Processed {processed} cases.")
}

/// Fetch stats for the dialog; degrades to the synthetic error record.
pub async fn load_stats<B: Backend>(api: &ApiClient<B>, town: &str) -> TownSkipTraceStats {
    fallback::town_stats(town, api.town_stats(town).await)
}

/// Run the town batch, then re-fetch stats for the summary message.
///
/// The batch call propagates failure; the follow-up stats read degrades
/// like any other read.
pub async fn run_town_batch<B: Backend>(
    api: &ApiClient<B>,
    town: &str,
) -> Result<TownSkipTraceStats, ApiError> {
    api.town_skip_trace(town).await?;
    Ok(fallback::town_stats(town, api.town_stats(town).await))
}

/// Placeholder: the by-county batch has no backend contract yet.
pub fn trace_county_stub(county: &str) {
    log::info!("skip trace by county requested for {county}; backend endpoint not yet defined");
}

/// Placeholder: the by-docket lookup has no backend contract yet.
pub fn trace_docket_stub(docket: &str) {
    log::info!("skip trace by docket requested for {docket}; backend endpoint not yet defined");
}
