//! Root application component with routing and the session context.

use std::rc::Rc;

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Redirect, Route, Router, Routes},
};

use crate::components::nav_bar::NavBar;
use crate::config::ClientConfig;
use crate::net::api::HttpAuthTransport;
use crate::pages::{favorites::FavoritesPage, home::HomePage, login::LoginPage, signup::SignupPage};
use crate::state::context::provide_session;
use crate::state::session::Session;
use crate::util::storage::BrowserStore;

/// Paths mounted by [`App`]; anything else redirects to `/`.
pub const ROUTE_PATHS: &[&str] = &["/", "/login", "/signup", "/favorites"];

/// Build the process-wide session over browser storage and the HTTP transport.
pub fn build_session(config: &ClientConfig) -> Session {
    Session::new(Rc::new(BrowserStore), Rc::new(HttpAuthTransport::from_config(config)))
}

/// Root application component.
///
/// `session` is built once at startup and outlives any mount of this tree.
/// Routes stay behind a neutral loading state until the restore finishes.
#[component]
pub fn App(session: Session) -> impl IntoView {
    provide_meta_context();

    let ctx = provide_session(session);

    // Latched: a re-mount awaits the first restore instead of starting one.
    #[cfg(feature = "csr")]
    leptos::task::spawn_local(ctx.initialize());

    view! {
        <Title text="Country Explorer"/>

        <Router>
            <NavBar/>
            <main class="app-main">
                <Show
                    when=move || ctx.auth_checked()
                    fallback=|| view! { <p class="session-loading">"Loading..."</p> }
                >
                    <Routes fallback=|| view! { <Redirect path="/"/> }>
                        <Route path=StaticSegment("") view=HomePage/>
                        <Route path=StaticSegment("login") view=LoginPage/>
                        <Route path=StaticSegment("signup") view=SignupPage/>
                        <Route path=StaticSegment("favorites") view=FavoritesPage/>
                    </Routes>
                </Show>
            </main>
        </Router>
    }
}
