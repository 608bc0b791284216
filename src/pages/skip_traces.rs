//! Skip-traces page: by-town dialog flow plus the by-county and by-docket
//! placeholder triggers.

use leptos::prelude::*;

use crate::components::skip_trace_dialog::SkipTraceDialog;
use crate::components::toast::notify;
use crate::config::AppConfig;
use crate::net::api::{ApiClient, HttpBackend};
use crate::state::skip_traces::{self, ActiveTrace, CONNECTICUT_COUNTIES, SkipTracesState};
use crate::state::toast::{ToastKind, ToastState};

/// Skip-traces page.
///
/// Each trigger section is gated only by its own activity. By-town opens
/// the stats dialog and drives the batch; by-county and by-docket validate
/// their input but have no backend contract yet.
#[component]
pub fn SkipTracesPage() -> impl IntoView {
    let api = expect_context::<ApiClient<HttpBackend>>();
    let config = expect_context::<AppConfig>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let state = RwSignal::new(SkipTracesState::default());
    let processing = RwSignal::new(false);

    // Town list on mount; degrades to the built-in fallback.
    {
        #[cfg(feature = "csr")]
        {
            let api = api.clone();
            leptos::task::spawn_local(async move {
                let towns = crate::net::fallback::towns(api.connecticut_towns().await);
                state.try_update(|s| s.towns = towns);
            });
        }
    }

    let on_trace_town = {
        let api = api.clone();
        move |_| {
            let town = match state.with_untracked(SkipTracesState::validated_town) {
                Ok(town) => town,
                Err(err) => {
                    notify(toasts, ToastKind::Error, err.to_string());
                    return;
                }
            };
            let Some(token) = state.try_update(|s| {
                s.open_dialog();
                s.requests.begin()
            }) else {
                return;
            };

            #[cfg(feature = "csr")]
            {
                let api = api.clone();
                leptos::task::spawn_local(async move {
                    let stats = skip_traces::load_stats(&api, &town).await;
                    // `None` means the page was disposed mid-flight; drop
                    // the response without touching the dead signal.
                    if state.try_with_untracked(|s| s.requests.is_current(token)) != Some(true) {
                        return;
                    }
                    state.try_update(|s| s.stats_loaded(stats));
                });
            }
            #[cfg(not(feature = "csr"))]
            {
                let _ = (&api, town, token);
            }
        }
    };

    let on_cancel = Callback::new(move |()| {
        if !processing.get_untracked() {
            state.update(SkipTracesState::close_dialog);
        }
    });

    let on_proceed = {
        let api = api.clone();
        Callback::new(move |()| {
            let Ok(town) = state.with_untracked(SkipTracesState::validated_town) else {
                processing.set(false);
                return;
            };
            let Some(before) = state.with_untracked(|s| s.stats.clone()) else {
                processing.set(false);
                return;
            };
            let Some(token) = state.try_update(|s| {
                s.begin(ActiveTrace::ByTown);
                s.requests.begin()
            }) else {
                processing.set(false);
                return;
            };

            #[cfg(feature = "csr")]
            {
                let api = api.clone();
                leptos::task::spawn_local(async move {
                    let result = skip_traces::run_town_batch(&api, &town).await;
                    if state.try_with_untracked(|s| s.requests.is_current(token)) != Some(true) {
                        // A discarded response still releases its own gate.
                        state.try_update(SkipTracesState::finish);
                        processing.try_set(false);
                        return;
                    }
                    match result {
                        Ok(after) => {
                            let message = skip_traces::completion_message(&town, &before, &after);
                            state.try_update(|s| {
                                s.stats_loaded(after);
                                s.finish();
                                s.close_dialog();
                            });
                            notify(toasts, ToastKind::Success, message);
                        }
                        Err(err) => {
                            log::error!("skip trace batch for {town} failed: {err}");
                            state.try_update(|s| {
                                s.finish();
                                s.close_dialog();
                            });
                            notify(
                                toasts,
                                ToastKind::Error,
                                "Failed to perform skip trace. Please try again.",
                            );
                        }
                    }
                    processing.try_set(false);
                });
            }
            #[cfg(not(feature = "csr"))]
            {
                let _ = (&api, town, before, token);
                processing.set(false);
            }
        })
    };

    let on_trace_county = move |_| {
        match state.with_untracked(SkipTracesState::validated_county) {
            Ok(county) => skip_traces::trace_county_stub(&county),
            Err(err) => notify(toasts, ToastKind::Error, err.to_string()),
        }
    };

    let on_trace_docket = move |_| {
        match state.with_untracked(SkipTracesState::validated_docket) {
            Ok(docket) => skip_traces::trace_docket_stub(&docket),
            Err(err) => notify(toasts, ToastKind::Error, err.to_string()),
        }
    };

    let dialog_loading = Signal::derive(move || state.get().loading_stats);
    let dialog_stats = Signal::derive(move || state.get().stats);
    let cost_per_lookup_cents = config.cost_per_lookup_cents;

    view! {
        <div class="page">
            <header class="page__header">
                <h2 class="page__title">"Skip Traces"</h2>
                <p class="page__subtitle">"Manage skip trace lookups and results"</p>
            </header>

            <div class="card">
                <div class="stat-card-row">
                    <div class="stat-card stat-card--lookups">
                        <h3 class="stat-card__label">"Total Lookups"</h3>
                        <p class="stat-card__value">"0"</p>
                    </div>
                    <div class="stat-card stat-card--traced">
                        <h3 class="stat-card__label">"Successful Traces"</h3>
                        <p class="stat-card__value">"0"</p>
                    </div>
                    <div class="stat-card stat-card--cost">
                        <h3 class="stat-card__label">"Total Cost"</h3>
                        <p class="stat-card__value">"$0.00"</p>
                    </div>
                </div>

                <section class="section">
                    <h3 class="section__title">"Skip Trace by Town"</h3>
                    <div class="section__controls">
                        <select
                            class="section__select"
                            prop:value=move || state.get().selected_town
                            on:change=move |ev| {
                                state.update(|s| s.selected_town = event_target_value(&ev));
                            }
                        >
                            <option value="">"Select a town"</option>
                            {move || {
                                state
                                    .get()
                                    .towns
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
                                s.selected_town.is_empty() || s.is_busy(ActiveTrace::ByTown)
                            }
                            on:click=on_trace_town
                        >
                            {move || {
                                if state.get().is_busy(ActiveTrace::ByTown) {
                                    "Processing..."
                                } else {
                                    "Skip Trace"
                                }
                            }}
                        </button>
                    </div>
                </section>

                <section class="section">
                    <h3 class="section__title">"Skip Trace by County"</h3>
                    <div class="section__controls">
                        <select
                            class="section__select"
                            prop:value=move || state.get().selected_county
                            on:change=move |ev| {
                                state.update(|s| s.selected_county = event_target_value(&ev));
                            }
                        >
                            <option value="">"Select a county"</option>
                            {CONNECTICUT_COUNTIES
                                .iter()
                                .map(|&county| view! { <option value=county>{county}</option> })
                                .collect::<Vec<_>>()}
                        </select>
                        <button
                            class="btn btn--primary"
                            prop:disabled=move || {
                                let s = state.get();
                                s.selected_county.is_empty() || s.is_busy(ActiveTrace::ByCounty)
                            }
                            on:click=on_trace_county
                        >
                            "Skip Trace"
                        </button>
                    </div>
                </section>

                <section class="section">
                    <h3 class="section__title">"Skip Trace by Docket"</h3>
                    <div class="section__controls">
                        <input
                            class="section__input"
                            type="text"
                            placeholder="Enter docket number"
                            prop:value=move || state.get().docket_number
                            on:input=move |ev| {
                                state.update(|s| s.docket_number = event_target_value(&ev));
                            }
                        />
                        <button
                            class="btn btn--primary"
                            prop:disabled=move || {
                                let s = state.get();
                                s.docket_number.trim().is_empty()
                                    || s.is_busy(ActiveTrace::ByDocket)
                            }
                            on:click=on_trace_docket
                        >
                            "Skip Trace"
                        </button>
                    </div>
                </section>
            </div>

            <Show when=move || state.get().dialog_open>
                <SkipTraceDialog
                    loading=dialog_loading
                    stats=dialog_stats
                    processing=processing
                    cost_per_lookup_cents=cost_per_lookup_cents
                    on_cancel=on_cancel
                    on_proceed=on_proceed
                />
            </Show>
        </div>
    }
}
