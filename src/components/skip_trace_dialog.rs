//! Skip-trace status dialog: loading, not-scraped, and stats views, with
//! the cost estimate and the proceed action.

use leptos::prelude::*;

use crate::net::types::TownSkipTraceStats;
use crate::state::skip_trace_dialog::{DialogPhase, dialog_phase, estimated_cost_label, rate_label};

/// Modal dialog for the by-town skip-trace flow.
///
/// The page owns the stats fetch and the `processing` flag: clicking
/// Proceed flips `processing` and fires `on_proceed`; the page clears the
/// flag when its async work settles. While processing, both buttons and the
/// backdrop are inert. An `error` field on the stats renders as a
/// persistent inline block in every phase that has stats.
#[component]
pub fn SkipTraceDialog(
    loading: Signal<bool>,
    stats: Signal<Option<TownSkipTraceStats>>,
    processing: RwSignal<bool>,
    cost_per_lookup_cents: u32,
    on_cancel: Callback<()>,
    on_proceed: Callback<()>,
) -> impl IntoView {
    let phase = move || dialog_phase(loading.get(), stats.get().as_ref());

    let title = move || match phase() {
        DialogPhase::Loading => "Loading Skip Trace Information...".to_owned(),
        DialogPhase::NotScraped | DialogPhase::Stats => {
            let town = stats.get().map(|s| s.town).unwrap_or_default();
            format!("Skip Trace Status for {town}")
        }
    };

    let subtitle = move || match phase() {
        DialogPhase::Loading => None,
        DialogPhase::NotScraped => Some("This town has not been scraped yet"),
        DialogPhase::Stats => Some("Review the skip trace status for this town"),
    };

    let body = move || match phase() {
        DialogPhase::Loading => view! {
            <div class="dialog__spinner" aria-label="loading"></div>
        }
        .into_any(),
        DialogPhase::NotScraped => view! {
            <div class="dialog__panel dialog__panel--muted">
                <p class="dialog__panel-title">"No data available"</p>
                <p class="dialog__panel-hint">
                    "This town needs to be scraped first before skip tracing can be performed"
                </p>
            </div>
        }
        .into_any(),
        DialogPhase::Stats => {
            let stats = stats.get().unwrap_or_default();
            let untraced = stats.untraced_for_display();
            view! {
                <div class="dialog__stats">
                    <div class="dialog__grid">
                        <div class="dialog__panel dialog__panel--total">
                            <p class="dialog__panel-title">"Total Cases"</p>
                            <p class="dialog__panel-value">{stats.total_cases}</p>
                            <p class="dialog__panel-hint">"Unique docket numbers"</p>
                        </div>
                        <div class="dialog__panel dialog__panel--traced">
                            <p class="dialog__panel-title">"Already Traced"</p>
                            <p class="dialog__panel-value">{stats.traced_cases}</p>
                            <p class="dialog__panel-hint">"Completed lookups"</p>
                        </div>
                    </div>
                    {if untraced > 0 {
                        view! {
                            <div class="dialog__panel dialog__panel--pending">
                                <p class="dialog__panel-title">
                                    {format!("{untraced} cases need skip tracing")}
                                </p>
                                <p class="dialog__panel-hint">
                                    {format!(
                                        "Estimated cost: {} ({} per lookup)",
                                        estimated_cost_label(untraced, cost_per_lookup_cents),
                                        rate_label(cost_per_lookup_cents),
                                    )}
                                </p>
                            </div>
                        }
                            .into_any()
                    } else {
                        view! {
                            <div class="dialog__panel dialog__panel--done">
                                <p class="dialog__panel-title">"All cases have been skip traced"</p>
                                <p class="dialog__panel-hint">
                                    "No additional lookups needed for this town"
                                </p>
                            </div>
                        }
                            .into_any()
                    }}
                </div>
            }
            .into_any()
        }
    };

    // Persistent inline error block, independent of the phase.
    let error_block = move || {
        stats.get().and_then(|s| s.error).map(|message| {
            view! {
                <div class="dialog__panel dialog__panel--error">
                    <p class="dialog__panel-title">"Error"</p>
                    <p class="dialog__panel-hint">{message}</p>
                </div>
            }
        })
    };

    let show_action = move || {
        stats
            .get()
            .as_ref()
            .is_some_and(TownSkipTraceStats::action_available)
    };

    let action_label = move || {
        if processing.get() {
            "Processing...".to_owned()
        } else {
            let untraced = stats.get().map(|s| s.untraced_for_display()).unwrap_or(0);
            format!("Skip Trace {untraced} Cases")
        }
    };

    view! {
        <div
            class="dialog-backdrop"
            on:click=move |_| {
                if !processing.get_untracked() {
                    on_cancel.run(());
                }
            }
        >
            <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                <h2 class="dialog__title">{title}</h2>
                {move || subtitle().map(|text| view! { <p class="dialog__subtitle">{text}</p> })}
                {body}
                {error_block}
                <div class="dialog__actions">
                    <button
                        class="btn"
                        prop:disabled=move || processing.get()
                        on:click=move |_| on_cancel.run(())
                    >
                        "Cancel"
                    </button>
                    <Show when=show_action>
                        <button
                            class="btn btn--primary"
                            prop:disabled=move || processing.get()
                            on:click=move |_| {
                                processing.set(true);
                                on_proceed.run(());
                            }
                        >
                            {action_label}
                        </button>
                    </Show>
                </div>
            </div>
        </div>
    }
}
