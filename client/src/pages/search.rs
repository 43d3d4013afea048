//! Landing page hosting the product search panel.

use leptos::prelude::*;

use crate::components::query_panel::QueryPanel;

/// Title plus a single query panel.
#[component]
pub fn SearchPage() -> impl IntoView {
    view! {
        <div class="app-container">
            <h1>"TikTok Shop AI Search"</h1>
            <QueryPanel/>
        </div>
    }
}
