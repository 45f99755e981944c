//! Top navigation bar with auth-aware links and the account menu.
//!
//! SYSTEM CONTEXT
//! ==============
//! Renders nothing until the startup restore finishes, so a returning user
//! never sees a flash of the logged-out menu.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::state::context::use_session;
use crate::util::auth::visible_nav_items;

#[component]
pub fn NavBar() -> impl IntoView {
    let session = use_session();
    let navigate = StoredValue::new_local(use_navigate());

    let on_logout = move |_: leptos::ev::MouseEvent| {
        session.logout();
        navigate.with_value(|nav| nav("/login", NavigateOptions::default()));
    };

    let links = move || {
        visible_nav_items(&session.snapshot())
            .into_iter()
            .map(|item| view! { <a class="nav-bar__link" href=item.path>{item.label}</a> })
            .collect_view()
    };

    let username = move || session.current_user().map(|u| u.username).unwrap_or_default();

    view! {
        <Show when=move || session.auth_checked()>
            <nav class="nav-bar">
                <span class="nav-bar__brand">"Country Explorer"</span>
                <div class="nav-bar__links">{links}</div>
                <Show
                    when=move || session.is_authenticated()
                    fallback=|| view! { <a class="nav-bar__login" href="/login">"Login"</a> }
                >
                    <span class="nav-bar__user">{username}</span>
                    <button class="nav-bar__logout" on:click=on_logout>
                        "Logout"
                    </button>
                </Show>
            </nav>
        </Show>
    }
}
