//! Landing page greeting the visitor according to the session state.

use leptos::prelude::*;

use crate::state::context::use_session;

#[component]
pub fn HomePage() -> impl IntoView {
    let session = use_session();
    let greeting = move || match session.current_user() {
        Some(user) => format!("Welcome back, {}", user.username),
        None => "Explore the world's countries".to_owned(),
    };
    let favorite_count = move || session.favorites().len();

    view! {
        <section class="home-page">
            <h1>{greeting}</h1>
            <Show when=move || session.is_authenticated()>
                <p class="home-page__favorites">
                    <a href="/favorites">{favorite_count}" saved favorites"</a>
                </p>
            </Show>
        </section>
    }
}
