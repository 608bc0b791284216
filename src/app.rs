//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Redirect, Route, Router, Routes},
};

use crate::components::sidebar::Sidebar;
use crate::components::toast::ToastHost;
use crate::config::AppConfig;
use crate::net::api::{ApiClient, HttpBackend};
use crate::pages::{court_cases::CourtCasesPage, skip_traces::SkipTracesPage};
use crate::state::toast::ToastState;

/// Root application component.
///
/// Builds the one configured API client for the process, provides the
/// shared contexts, and sets up the sidebar/main-pane shell with
/// client-side routing. `/` redirects to the court-cases page.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = AppConfig::load();
    let api = ApiClient::new(
        HttpBackend::new(config.api_base_url.clone()),
        config.case_fetch_limit,
    );
    let toasts = RwSignal::new(ToastState::default());

    provide_context(config);
    provide_context(api);
    provide_context(toasts);

    view! {
        <Title text="Foreclosure Tracker"/>

        <Router>
            <div class="shell">
                <Sidebar/>
                <main class="shell__main">
                    <Routes fallback=|| "Page not found.".into_view()>
                        <Route
                            path=StaticSegment("")
                            view=|| view! { <Redirect path="/cases"/> }
                        />
                        <Route path=StaticSegment("cases") view=CourtCasesPage/>
                        <Route path=StaticSegment("skip-traces") view=SkipTracesPage/>
                    </Routes>
                </main>
                <ToastHost/>
            </div>
        </Router>
    }
}
