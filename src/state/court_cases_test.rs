use futures::executor::block_on;

use super::*;
use crate::net::api::ApiClient;
use crate::net::fake::FakeBackend;
use crate::net::types::ScrapeOutcome;

fn case_json(docket: &str, town: &str) -> serde_json::Value {
    serde_json::json!({
        "case_name": format!("Bank v. {docket}"),
        "docket_number": docket,
        "town": town,
    })
}

fn middletown_cases(n: usize) -> serde_json::Value {
    let cases: Vec<serde_json::Value> = (1..=n)
        .map(|i| case_json(&format!("MMX-{i}"), "Middletown"))
        .collect();
    serde_json::json!({"cases": cases, "total": n, "town": "Middletown"})
}

// =============================================================
// Phase transitions
// =============================================================

#[test]
fn page_starts_idle() {
    let state = CourtCasesState::default();
    assert_eq!(state.phase, PagePhase::Idle);
    assert!(!state.scraping);
    assert!(!state.loading_cases);
}

#[test]
fn initial_load_moves_through_loading_to_ready() {
    let mut state = CourtCasesState::default();
    state.begin_initial_load();
    assert_eq!(state.phase, PagePhase::LoadingInitial);

    state.apply_initial(InitialData {
        all_towns: vec!["Avon".to_owned()],
        scraped_towns: vec!["Middletown".to_owned()],
        total_cases: 9,
    });
    assert_eq!(state.phase, PagePhase::Ready);
    assert_eq!(state.total_cases, 9);
    assert_eq!(state.scraped_towns, ["Middletown"]);
}

// =============================================================
// Validation
// =============================================================

#[test]
fn blank_scrape_selection_is_a_validation_error() {
    let state = CourtCasesState::default();
    let err = state.validated_scrape_town().expect_err("validation");
    assert!(matches!(err, crate::net::error::ApiError::Validation(_)));
}

#[test]
fn blank_view_selection_is_a_validation_error() {
    let state = CourtCasesState::default();
    assert!(state.validated_view_town().is_err());
}

#[test]
fn selections_are_trimmed() {
    let state = CourtCasesState {
        scrape_town: " Middletown ".to_owned(),
        ..CourtCasesState::default()
    };
    assert_eq!(state.validated_scrape_town().expect("town"), "Middletown");
}

// =============================================================
// View-refresh policy after a scrape
// =============================================================

#[test]
fn refreshes_view_when_no_town_is_viewed() {
    let state = CourtCasesState::default();
    assert!(state.should_refresh_view("Middletown"));
}

#[test]
fn refreshes_view_when_viewed_town_was_scraped() {
    let state = CourtCasesState {
        view_town: "Middletown".to_owned(),
        ..CourtCasesState::default()
    };
    assert!(state.should_refresh_view("Middletown"));
}

#[test]
fn keeps_view_when_a_different_town_was_scraped() {
    let state = CourtCasesState {
        view_town: "Bristol".to_owned(),
        ..CourtCasesState::default()
    };
    assert!(!state.should_refresh_view("Middletown"));
}

// =============================================================
// Scrape flow end to end (fake transport)
// =============================================================

#[test]
fn scrape_of_viewed_town_refreshes_displayed_cases() {
    let backend = FakeBackend::new()
        .on_post(
            "/api/v1/scraper/scrape-town",
            Ok(serde_json::json!({"message": "ok", "cases_found": 5})),
        )
        .on_get(
            "/api/v1/cases/?limit=1000",
            Ok(serde_json::json!({
                "items": [case_json("MMX-1", "Middletown")],
                "total": 5
            })),
        )
        .on_get(
            "/api/v1/cases/",
            Ok(serde_json::json!({"items": [], "total": 5})),
        )
        .on_get("/api/v1/cases/by-town/Middletown", Ok(middletown_cases(5)));
    let api = ApiClient::new(backend, 1000);

    let mut state = CourtCasesState {
        phase: PagePhase::Ready,
        scrape_town: "Middletown".to_owned(),
        view_town: "Middletown".to_owned(),
        ..CourtCasesState::default()
    };

    let town = state.validated_scrape_town().expect("town");
    state.begin_scrape();
    assert!(state.scraping);

    let refresh_view = state.should_refresh_view(&town);
    let refresh = block_on(run_scrape(&api, &town, refresh_view)).expect("scrape");
    assert_eq!(refresh.outcome.cases_found, 5);

    state.apply_scrape(&town, refresh);
    assert!(!state.scraping);
    assert_eq!(state.cases.len(), 5);
    assert_eq!(state.total_cases, 5);
    assert_eq!(state.view_town, "Middletown");
}

#[test]
fn scrape_with_other_town_viewed_leaves_table_alone() {
    let backend = FakeBackend::new()
        .on_post(
            "/api/v1/scraper/scrape-town",
            Ok(serde_json::json!({"message": "ok", "cases_found": 2})),
        )
        .on_get(
            "/api/v1/cases/?limit=1000",
            Ok(serde_json::json!({"items": [], "total": 0})),
        )
        .on_get(
            "/api/v1/cases/",
            Ok(serde_json::json!({"items": [], "total": 2})),
        );
    let api = ApiClient::new(backend, 1000);

    let mut state = CourtCasesState {
        phase: PagePhase::Ready,
        scrape_town: "Middletown".to_owned(),
        view_town: "Bristol".to_owned(),
        ..CourtCasesState::default()
    };

    let refresh_view = state.should_refresh_view("Middletown");
    assert!(!refresh_view);
    let refresh = block_on(run_scrape(&api, "Middletown", refresh_view)).expect("scrape");
    assert!(refresh.refreshed_cases.is_none());

    state.apply_scrape("Middletown", refresh);
    assert!(state.cases.is_empty());
    assert_eq!(state.view_town, "Bristol");
    // No by-town fetch happened.
    assert!(
        !api.backend_ref()
            .calls()
            .iter()
            .any(|c| c.contains("by-town"))
    );
}

#[test]
fn scrape_failure_propagates_and_clears_the_flag() {
    let backend = FakeBackend::new().on_post(
        "/api/v1/scraper/scrape-town",
        Err(crate::net::error::ApiError::Status { status: 500 }),
    );
    let api = ApiClient::new(backend, 1000);

    let mut state = CourtCasesState {
        scrape_town: "Middletown".to_owned(),
        ..CourtCasesState::default()
    };
    state.begin_scrape();

    let err = block_on(run_scrape(&api, "Middletown", true)).expect_err("scrape fails");
    assert_eq!(err, crate::net::error::ApiError::Status { status: 500 });

    state.scrape_failed();
    assert!(!state.scraping);
    // Failure short-circuits the refresh reads.
    assert_eq!(api.backend_ref().call_count(), 1);
}

#[test]
fn scrape_auto_selects_view_town_when_none_chosen() {
    let mut state = CourtCasesState::default();
    state.apply_scrape(
        "Middletown",
        ScrapeRefresh {
            outcome: ScrapeOutcome::default(),
            scraped_towns: vec!["Middletown".to_owned()],
            total_cases: 1,
            refreshed_cases: Some(Vec::new()),
        },
    );
    assert_eq!(state.view_town, "Middletown");
}

// =============================================================
// View flow + initial load
// =============================================================

#[test]
fn view_flow_populates_cases() {
    let backend =
        FakeBackend::new().on_get("/api/v1/cases/by-town/Middletown", Ok(middletown_cases(3)));
    let api = ApiClient::new(backend, 1000);

    let mut state = CourtCasesState {
        view_town: "Middletown".to_owned(),
        ..CourtCasesState::default()
    };
    state.begin_view();
    assert!(state.loading_cases);

    let cases = block_on(load_town_cases(&api, "Middletown")).expect("cases");
    state.apply_view(cases);
    assert!(!state.loading_cases);
    assert_eq!(state.cases.len(), 3);
}

#[test]
fn initial_load_degrades_to_fallbacks_when_backend_is_down() {
    // No routes registered: every read fails at the transport.
    let api = ApiClient::new(FakeBackend::new(), 1000);
    let data = block_on(load_initial(&api));
    assert_eq!(data.all_towns.len(), 30);
    assert_eq!(data.scraped_towns, ["Middletown"]);
    assert_eq!(data.total_cases, 0);
}

// =============================================================
// Stale-response guard
// =============================================================

#[test]
fn late_response_after_page_disposal_is_dropped() {
    use leptos::prelude::*;

    let owner = Owner::new();
    let state = owner.with(|| RwSignal::new(CourtCasesState::default()));
    let token = state
        .try_update(|s| {
            s.begin_scrape();
            s.requests.begin()
        })
        .expect("page still mounted");

    // Navigating away disposes the page's signals.
    drop(owner);

    // The token check must report "gone", never panic, and follow-up
    // writes must be no-ops.
    assert_eq!(
        state.try_with_untracked(|s| s.requests.is_current(token)),
        None
    );
    assert!(state.try_update(CourtCasesState::scrape_failed).is_none());
}

#[test]
fn stale_scrape_response_is_discarded() {
    let mut state = CourtCasesState::default();
    let stale = state.requests.begin();
    // A second action starts before the first resolves.
    let fresh = state.requests.begin();

    assert!(!state.requests.is_current(stale));
    assert!(state.requests.is_current(fresh));
}
