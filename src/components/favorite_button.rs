//! Star toggle shown on country cards and detail views.
//!
//! Hidden for anonymous visitors; favorites are only offered once signed in.

use leptos::prelude::*;

use crate::net::types::FavoriteEntry;
use crate::state::context::use_session;

#[component]
pub fn FavoriteButton(entry: FavoriteEntry) -> impl IntoView {
    let session = use_session();
    let is_favorite = {
        let code = entry.code().to_owned();
        move || session.is_favorite(&code)
    };
    let aria_label = {
        let is_favorite = is_favorite.clone();
        move || if is_favorite() { "Remove from favorites" } else { "Add to favorites" }
    };
    let entry = StoredValue::new(entry);

    view! {
        <Show when=move || session.is_authenticated()>
            <button
                class="favorite-button"
                class:favorite-button--active=is_favorite.clone()
                aria-label=aria_label.clone()
                on:click=move |ev: leptos::ev::MouseEvent| {
                    ev.prevent_default();
                    ev.stop_propagation();
                    session.toggle_favorite(entry.get_value());
                }
            >
                "★"
            </button>
        </Show>
    }
}
