//! Court-cases page: scrape trigger, scraped-town viewer, and case table.

use leptos::prelude::*;

use crate::components::case_table::CaseTable;
use crate::components::toast::notify;
use crate::net::api::{ApiClient, HttpBackend};
use crate::state::court_cases::{CourtCasesState, PagePhase};
use crate::state::toast::{ToastKind, ToastState};

/// Court-cases page.
///
/// Loads the town lists and total count on mount, then drives two
/// independent flows: scraping a town (full CT list) and viewing the cases
/// of an already-scraped town. Every spawned request carries a token so a
/// response landing after a newer action is silently discarded.
#[component]
pub fn CourtCasesPage() -> impl IntoView {
    let api = expect_context::<ApiClient<HttpBackend>>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let state = RwSignal::new(CourtCasesState::default());

    // Initial load on mount.
    {
        state.update(CourtCasesState::begin_initial_load);
        #[cfg(feature = "csr")]
        {
            let api = api.clone();
            leptos::task::spawn_local(async move {
                let data = crate::state::court_cases::load_initial(&api).await;
                state.try_update(|s| s.apply_initial(data));
            });
        }
    }

    let on_scrape = {
        let api = api.clone();
        move |_| {
            let town = match state.with_untracked(CourtCasesState::validated_scrape_town) {
                Ok(town) => town,
                Err(err) => {
                    notify(toasts, ToastKind::Error, err.to_string());
                    return;
                }
            };
            if state.with_untracked(|s| s.scraping) {
                return;
            }
            let refresh_view = state.with_untracked(|s| s.should_refresh_view(&town));
            let Some(token) = state.try_update(|s| {
                s.begin_scrape();
                s.requests.begin()
            }) else {
                return;
            };

            #[cfg(feature = "csr")]
            {
                let api = api.clone();
                leptos::task::spawn_local(async move {
                    let result =
                        crate::state::court_cases::run_scrape(&api, &town, refresh_view).await;
                    // `None` means the page was disposed mid-flight; drop
                    // the response without touching the dead signal.
                    if state.try_with_untracked(|s| s.requests.is_current(token)) != Some(true) {
                        return;
                    }
                    match result {
                        Ok(refresh) => {
                            let found = refresh.outcome.cases_found;
                            state.try_update(|s| s.apply_scrape(&town, refresh));
                            notify(
                                toasts,
                                ToastKind::Success,
                                format!("Scraping completed for {town}. Found {found} total cases."),
                            );
                        }
                        Err(err) => {
                            log::error!("scrape failed for {town}: {err}");
                            state.try_update(CourtCasesState::scrape_failed);
                            notify(
                                toasts,
                                ToastKind::Error,
                                format!("Error scraping {town}. Please try again."),
                            );
                        }
                    }
                });
            }
            #[cfg(not(feature = "csr"))]
            {
                let _ = (&api, town, refresh_view, token);
            }
        }
    };

    let on_view = {
        let api = api.clone();
        move |_| {
            let town = match state.with_untracked(CourtCasesState::validated_view_town) {
                Ok(town) => town,
                Err(err) => {
                    notify(toasts, ToastKind::Error, err.to_string());
                    return;
                }
            };
            if state.with_untracked(|s| s.loading_cases) {
                return;
            }
            let Some(token) = state.try_update(|s| {
                s.begin_view();
                s.requests.begin()
            }) else {
                return;
            };

            #[cfg(feature = "csr")]
            {
                let api = api.clone();
                leptos::task::spawn_local(async move {
                    let result = crate::state::court_cases::load_town_cases(&api, &town).await;
                    if state.try_with_untracked(|s| s.requests.is_current(token)) != Some(true) {
                        return;
                    }
                    match result {
                        Ok(cases) => {
                            let empty = cases.is_empty();
                            state.try_update(|s| s.apply_view(cases));
                            if empty {
                                notify(
                                    toasts,
                                    ToastKind::Info,
                                    format!("No cases found for {town}."),
                                );
                            }
                        }
                        Err(err) => {
                            log::error!("loading cases for {town} failed: {err}");
                            state.try_update(CourtCasesState::view_failed);
                            notify(
                                toasts,
                                ToastKind::Error,
                                format!("Error loading cases for {town}. Please try again."),
                            );
                        }
                    }
                });
            }
            #[cfg(not(feature = "csr"))]
            {
                let _ = (&api, town, token);
            }
        }
    };

    view! {
        <div class="page">
            <header class="page__header">
                <h2 class="page__title">"Court Cases"</h2>
                <p class="page__subtitle">"Manage and view foreclosure court cases"</p>
            </header>

            <Show when=move || state.get().phase == PagePhase::LoadingInitial>
                <p class="page__loading">"Loading towns..."</p>
            </Show>

            <div class="card">
                <div class="stat-card stat-card--total">
                    <h3 class="stat-card__label">"Total Cases"</h3>
                    <p class="stat-card__value">{move || state.get().total_cases}</p>
                </div>

                <section class="section section--scrape">
                    <h3 class="section__title">"Scrape Court Cases"</h3>
                    <div class="section__controls">
                        <select
                            class="section__select"
                            prop:value=move || state.get().scrape_town
                            on:change=move |ev| {
                                state.update(|s| s.scrape_town = event_target_value(&ev));
                            }
                        >
                            <option value="">"Choose a town to scrape..."</option>
                            {move || {
                                state
                                    .get()
                                    .all_towns
                                    .into_iter()
                                    .map(|town| {
                                        let value = town.clone();
                                        view! { <option value=value>{town}</option> }
                                    })
                                    .collect::<Vec<_>>()
                            }}
                        </select>
                        <button
                            class="btn btn--primary"
                            prop:disabled=move || {
                                let s = state.get();
                                s.scrape_town.is_empty() || s.scraping
                            }
                            on:click=on_scrape
                        >
                            {move || if state.get().scraping { "Scraping..." } else { "Scrape" }}
                        </button>
                    </div>
                    <Show when=move || !state.get().scrape_town.is_empty()>
                        <p class="section__hint">
                            {move || {
                                format!(
                                    "Ready to scrape court cases from {}",
                                    state.get().scrape_town,
                                )
                            }}
                        </p>
                    </Show>
                </section>

                <section class="section section--view">
                    <h3 class="section__title">"View Court Cases"</h3>
                    <div class="section__controls">
                        <select
                            class="section__select"
                            prop:value=move || state.get().view_town
                            on:change=move |ev| {
                                state.update(|s| s.view_town = event_target_value(&ev));
                            }
                        >
                            <option value="">"Choose a scraped town to view..."</option>
                            {move || {
                                state
                                    .get()
                                    .scraped_towns
                                    .into_iter()
                                    .map(|town| {
                                        let value = town.clone();
                                        view! { <option value=value>{town}</option> }
                                    })
                                    .collect::<Vec<_>>()
                            }}
                        </select>
                        <button
                            class="btn btn--secondary"
                            prop:disabled=move || {
                                let s = state.get();
                                s.view_town.is_empty() || s.loading_cases
                                    || s.scraped_towns.is_empty()
                            }
                            on:click=on_view
                        >
                            {move || if state.get().loading_cases { "Loading..." } else { "View" }}
                        </button>
                    </div>
                    <Show when=move || state.get().scraped_towns.is_empty()>
                        <p class="section__hint section__hint--warn">
                            "No towns have been scraped yet. Please scrape a town first."
                        </p>
                    </Show>
                </section>

                {move || {
                    let s = state.get();
                    if s.cases.is_empty() {
                        view! {
                            <div class="cases-empty">
                                <p>
                                    "No cases displayed. Select a town and click View to see court cases."
                                </p>
                            </div>
                        }
                            .into_any()
                    } else {
                        view! { <CaseTable cases=s.cases.clone() town=s.view_town.clone()/> }
                            .into_any()
                    }
                }}
            </div>
        </div>
    }
}
