//! Favorites page listing the saved countries. Signed-in users only.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::favorite_button::FavoriteButton;
use crate::net::types::FavoriteEntry;
use crate::state::context::use_session;
use crate::util::auth::install_unauth_redirect;

#[component]
pub fn FavoritesPage() -> impl IntoView {
    let session = use_session();
    install_unauth_redirect(session, use_navigate());

    let entries = move || session.favorites().as_slice().to_vec();

    view! {
        <section class="favorites-page">
            <h1>"Your Favorite Countries"</h1>
            <Show
                when=move || !session.favorites().is_empty()
                fallback=|| view! { <p class="favorites-page__empty">"You haven't added any favorites yet."</p> }
            >
                <ul class="favorites-list">
                    <For each=entries key=|entry| entry.code().to_owned() let:entry>
                        <FavoriteRow entry/>
                    </For>
                </ul>
            </Show>
        </section>
    }
}

#[component]
fn FavoriteRow(entry: FavoriteEntry) -> impl IntoView {
    let label = entry.name().unwrap_or(entry.code()).to_owned();
    let code = entry.code().to_owned();

    view! {
        <li class="favorites-list__item">
            <span class="favorites-list__name">{label}</span>
            <span class="favorites-list__code">{code}</span>
            <FavoriteButton entry/>
        </li>
    }
}
