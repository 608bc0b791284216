//! Non-blocking notice stack replacing the modal alerts of the old UI.

use leptos::prelude::*;

use crate::state::toast::{ToastKind, ToastState};

/// Auto-dismiss delay for pushed notices.
#[cfg(feature = "csr")]
const DISMISS_AFTER_SECS: u64 = 6;

/// Push a notice and schedule its auto-dismissal (browser only; native
/// builds keep it until dismissed, which only tests ever observe).
pub fn notify(toasts: RwSignal<ToastState>, kind: ToastKind, text: impl Into<String>) {
    let Some(id) = toasts.try_update(|state| state.push(kind, text.into())) else {
        return;
    };
    #[cfg(feature = "csr")]
    leptos::task::spawn_local(async move {
        gloo_timers::future::sleep(std::time::Duration::from_secs(DISMISS_AFTER_SECS)).await;
        toasts.update(|state| state.dismiss(id));
    });
    #[cfg(not(feature = "csr"))]
    let _ = id;
}

/// Renders the notice stack in a fixed corner overlay.
#[component]
pub fn ToastHost() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();

    view! {
        <div class="toast-stack">
            {move || {
                toasts
                    .get()
                    .toasts
                    .into_iter()
                    .map(|toast| {
                        let id = toast.id;
                        let class = match toast.kind {
                            ToastKind::Success => "toast toast--success",
                            ToastKind::Error => "toast toast--error",
                            ToastKind::Info => "toast toast--info",
                        };
                        view! {
                            <div class=class>
                                <span class="toast__text">{toast.text}</span>
                                <button
                                    class="toast__dismiss"
                                    on:click=move |_| toasts.update(|state| state.dismiss(id))
                                >
                                    "\u{00d7}"
                                </button>
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()
            }}
        </div>
    }
}
