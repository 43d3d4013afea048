//! Search input, submit action, and answer rendering.
//!
//! SYSTEM CONTEXT
//! ==============
//! Owns a private `SearchState` signal. Submissions are handed to
//! `net::api::post_chat` on a local task; the task feeds its outcome back
//! through `SearchState::settle`, which drops it if a newer submission exists.

#[cfg(test)]
#[path = "query_panel_test.rs"]
mod query_panel_test;

use leptos::prelude::*;

use crate::components::product_card::{ProductCard, card_key};
#[cfg(not(feature = "hydrate"))]
use crate::net::error::ChatError;
use crate::state::search::SearchState;
#[cfg(feature = "hydrate")]
use crate::state::search::Settlement;

/// Whether a keydown submits: Enter, unless it confirms an IME composition.
fn is_submit_key(key: &str, composing: bool) -> bool {
    key == "Enter" && !composing
}

/// Start a submission and arrange for it to settle exactly once.
fn submit(search: RwSignal<SearchState>) {
    let Some(submission) = search.try_update(SearchState::begin_submit).flatten() else {
        return;
    };

    #[cfg(feature = "hydrate")]
    {
        log::debug!("chat submit seq={} len={}", submission.seq, submission.message.len());
        leptos::task::spawn_local(async move {
            let outcome = crate::net::api::post_chat(&submission.message).await;
            if let Err(err) = &outcome {
                log::warn!("chat seq={} failed: {err}", submission.seq);
            }
            let applied = search.try_update(|s| s.settle(submission.seq, outcome));
            if applied == Some(Settlement::Stale) {
                log::debug!("chat seq={} superseded, result dropped", submission.seq);
            }
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        search.update(|s| {
            s.settle(submission.seq, Err(ChatError::Unavailable));
        });
    }
}

/// Query input plus the AI answer and matched products.
#[component]
pub fn QueryPanel() -> impl IntoView {
    let search = RwSignal::new(SearchState::default());

    let on_click = move |_| submit(search);

    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if is_submit_key(&ev.key(), ev.is_composing()) {
            ev.prevent_default();
            submit(search);
        }
    };

    view! {
        <div class="search-bar">
            <input
                type="text"
                placeholder="Type your query..."
                prop:value=move || search.with(|s| s.query.clone())
                on:input=move |ev| search.update(|s| s.set_query(event_target_value(&ev)))
                on:keydown=on_keydown
            />
            <button on:click=on_click>"Search"</button>
        </div>

        <Show when=move || search.with(|s| s.loading)>
            <p class="loading-text">"Loading..."</p>
        </Show>

        <Show when=move || search.with(SearchState::shows_response)>
            <div class="response-container">
                <h3>"AI Response:"</h3>
                <p>{move || search.with(|s| s.response.clone())}</p>

                <Show when=move || search.with(SearchState::shows_products)>
                    <h4>"Products:"</h4>
                    <div class="products-grid">
                        <For
                            each=move || search.with(|s| s.products.clone().into_iter().enumerate().collect::<Vec<_>>())
                            key=|(index, product)| card_key(*index, product)
                            children=|(_, product)| view! { <ProductCard product/> }
                        />
                    </div>
                </Show>
            </div>
        </Show>
    }
}
