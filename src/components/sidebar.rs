//! Navigation sidebar with the static route table.

use leptos::prelude::*;
use leptos_router::hooks::use_location;

/// One entry in the navigation rail.
pub struct NavItem {
    pub label: &'static str,
    pub path: &'static str,
    pub glyph: &'static str,
}

/// Static route table; the router in `app.rs` mounts the matching pages.
pub const NAV_ITEMS: [NavItem; 2] = [
    NavItem {
        label: "Court Cases",
        path: "/cases",
        glyph: "\u{2696}",
    },
    NavItem {
        label: "Skip Traces",
        path: "/skip-traces",
        glyph: "\u{1f465}",
    },
];

/// Sidebar with brand header, nav links, and a version footer.
#[component]
pub fn Sidebar() -> impl IntoView {
    let pathname = use_location().pathname;

    view! {
        <aside class="sidebar">
            <div class="sidebar__header">
                <span class="sidebar__brand">"Foreclosure Tracker"</span>
            </div>
            <nav class="sidebar__nav">
                {NAV_ITEMS
                    .iter()
                    .map(|item| {
                        let path = item.path;
                        let class = move || {
                            if pathname.get() == path {
                                "sidebar__link sidebar__link--active"
                            } else {
                                "sidebar__link"
                            }
                        };
                        view! {
                            <a class=class href=path>
                                <span class="sidebar__glyph">{item.glyph}</span>
                                <span>{item.label}</span>
                            </a>
                        }
                    })
                    .collect::<Vec<_>>()}
            </nav>
            <div class="sidebar__footer">"Skip Trace Database v1.0"</div>
        </aside>
    }
}
