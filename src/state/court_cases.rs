#[cfg(test)]
#[path = "court_cases_test.rs"]
mod court_cases_test;

use crate::net::api::{ApiClient, Backend};
use crate::net::error::ApiError;
use crate::net::fallback;
use crate::net::types::{Case, ScrapeOutcome};
use crate::state::requests::RequestEpoch;

/// Lifecycle of the court-cases page as a whole.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PagePhase {
    #[default]
    Idle,
    LoadingInitial,
    Ready,
}

/// Court-cases page state: town selections, the displayed case list, and
/// the two independent sub-flows (scrape, view) layered on `Ready`.
#[derive(Clone, Debug, Default)]
pub struct CourtCasesState {
    pub phase: PagePhase,
    pub all_towns: Vec<String>,
    pub scraped_towns: Vec<String>,
    /// Town selected in the scrape dropdown (full CT list).
    pub scrape_town: String,
    /// Town selected in the view dropdown (scraped towns only).
    pub view_town: String,
    pub scraping: bool,
    pub loading_cases: bool,
    pub cases: Vec<Case>,
    pub total_cases: u64,
    pub requests: RequestEpoch,
}

/// Data gathered on page mount.
#[derive(Clone, Debug, Default)]
pub struct InitialData {
    pub all_towns: Vec<String>,
    pub scraped_towns: Vec<String>,
    pub total_cases: u64,
}

/// Everything refreshed after a successful scrape.
#[derive(Clone, Debug)]
pub struct ScrapeRefresh {
    pub outcome: ScrapeOutcome,
    pub scraped_towns: Vec<String>,
    pub total_cases: u64,
    /// Fresh case list for the scraped town, present only when the view
    /// needed refreshing per [`CourtCasesState::should_refresh_view`].
    pub refreshed_cases: Option<Vec<Case>>,
}

impl CourtCasesState {
    pub fn begin_initial_load(&mut self) {
        self.phase = PagePhase::LoadingInitial;
    }

    pub fn apply_initial(&mut self, data: InitialData) {
        self.all_towns = data.all_towns;
        self.scraped_towns = data.scraped_towns;
        self.total_cases = data.total_cases;
        self.phase = PagePhase::Ready;
    }

    /// The scrape selection, or a validation error when blank.
    pub fn validated_scrape_town(&self) -> Result<String, ApiError> {
        let town = self.scrape_town.trim();
        if town.is_empty() {
            return Err(ApiError::empty_selection("town to scrape"));
        }
        Ok(town.to_owned())
    }

    /// The view selection, or a validation error when blank.
    pub fn validated_view_town(&self) -> Result<String, ApiError> {
        let town = self.view_town.trim();
        if town.is_empty() {
            return Err(ApiError::empty_selection("town to view"));
        }
        Ok(town.to_owned())
    }

    /// Whether finishing a scrape of `scraped` must refresh the displayed
    /// list: yes when that town is being viewed, or when nothing is.
    pub fn should_refresh_view(&self, scraped: &str) -> bool {
        self.view_town.is_empty() || self.view_town == scraped
    }

    pub fn begin_scrape(&mut self) {
        self.scraping = true;
    }

    pub fn apply_scrape(&mut self, scraped: &str, refresh: ScrapeRefresh) {
        self.scraped_towns = refresh.scraped_towns;
        self.total_cases = refresh.total_cases;
        // Auto-select the scraped town for viewing if none was chosen.
        if self.view_town.is_empty() {
            self.view_town = scraped.to_owned();
        }
        if let Some(cases) = refresh.refreshed_cases {
            self.cases = cases;
        }
        self.scraping = false;
    }

    pub fn scrape_failed(&mut self) {
        self.scraping = false;
    }

    pub fn begin_view(&mut self) {
        self.loading_cases = true;
    }

    pub fn apply_view(&mut self, cases: Vec<Case>) {
        self.cases = cases;
        self.loading_cases = false;
    }

    pub fn view_failed(&mut self) {
        self.loading_cases = false;
    }
}

/// Fetch everything the page needs on mount. Reads degrade to their
/// documented fallbacks, so this never fails.
pub async fn load_initial<B: Backend>(api: &ApiClient<B>) -> InitialData {
    InitialData {
        all_towns: fallback::towns(api.connecticut_towns().await),
        scraped_towns: fallback::scraped_towns(api.scraped_towns().await),
        total_cases: fallback::case_count(api.total_case_count().await),
    }
}

/// Scrape `town`, then refresh the derived lists and counters.
///
/// The scrape call itself propagates failure — any error means the scrape
/// did not complete, with no status-code second-guessing. The follow-up
/// reads degrade to fallbacks like every other read.
pub async fn run_scrape<B: Backend>(
    api: &ApiClient<B>,
    town: &str,
    refresh_view: bool,
) -> Result<ScrapeRefresh, ApiError> {
    let outcome = api.scrape_town(town).await?;
    let scraped_towns = fallback::scraped_towns(api.scraped_towns().await);
    let total_cases = fallback::case_count(api.total_case_count().await);
    let refreshed_cases = if refresh_view {
        Some(fallback::cases(api.cases_by_town(town).await))
    } else {
        None
    };
    Ok(ScrapeRefresh {
        outcome,
        scraped_towns,
        total_cases,
        refreshed_cases,
    })
}

/// Fetch the case list for the view flow. Failures propagate so the page
/// can show an error notice instead of silently clearing the table.
pub async fn load_town_cases<B: Backend>(
    api: &ApiClient<B>,
    town: &str,
) -> Result<Vec<Case>, ApiError> {
    api.cases_by_town(town).await
}
