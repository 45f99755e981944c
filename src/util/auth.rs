//! Shared auth gating rules for routes and navigation.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every consumer must treat a missing user as "unknown" until the startup
//! restore has finished. These helpers centralize that rule so pages and
//! the nav bar apply it identically.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::state::context::SessionContext;
use crate::state::session::SessionSnapshot;

/// A primary navigation link.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavItem {
    pub path: &'static str,
    pub label: &'static str,
    pub requires_auth: bool,
}

pub const NAV_ITEMS: &[NavItem] = &[
    NavItem { path: "/", label: "Home", requires_auth: false },
    NavItem { path: "/favorites", label: "Favorites", requires_auth: true },
];

/// Whether an auth-only route should send the visitor to `/login`.
pub fn should_redirect_unauth(snapshot: &SessionSnapshot) -> bool {
    snapshot.is_anonymous()
}

/// Whether a guest-only route (login, signup) should send the visitor home.
pub fn should_redirect_authed(snapshot: &SessionSnapshot) -> bool {
    snapshot.is_authenticated()
}

/// Nav links visible for `snapshot`; auth-only links need a signed-in user.
pub fn visible_nav_items(snapshot: &SessionSnapshot) -> Vec<NavItem> {
    NAV_ITEMS
        .iter()
        .filter(|item| !item.requires_auth || snapshot.is_authenticated())
        .copied()
        .collect()
}

/// Redirect to `/login` once the restore has finished and no user is present.
pub fn install_unauth_redirect<F>(session: SessionContext, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if should_redirect_unauth(&session.snapshot()) {
            navigate("/login", NavigateOptions::default());
        }
    });
}

/// Redirect to `/` whenever a user is signed in.
pub fn install_authed_redirect<F>(session: SessionContext, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if should_redirect_authed(&session.snapshot()) {
            navigate("/", NavigateOptions::default());
        }
    });
}
