//! Leptos context handle over the shared [`Session`].
//!
//! SYSTEM CONTEXT
//! ==============
//! Components call [`use_session`] to read `{current_user, favorites,
//! auth_checked}` reactively and to trigger mutations. They never see
//! storage or transport. The handle is `Copy`, so it can be moved into any
//! number of event closures and spawned tasks.

#[cfg(test)]
#[path = "context_test.rs"]
mod context_test;

use leptos::prelude::*;

use super::favorites::Favorites;
use super::session::{InitTask, Session, SessionSnapshot};
use crate::net::types::{FavoriteEntry, NewAccount, UserProfile};

/// Consumer-facing session handle.
///
/// Reads go through an `RwSignal` mirror of the session snapshot, so views
/// re-render on every committed change. Writes are forwarded to the session.
#[derive(Clone, Copy)]
pub struct SessionContext {
    snapshot: RwSignal<SessionSnapshot>,
    session: StoredValue<Session, LocalStorage>,
}

impl SessionContext {
    /// Mirror `session` into a signal owned by the current reactive owner.
    ///
    /// The subscription is removed when that owner is cleaned up, so a
    /// re-mounted `App` does not accumulate mirrors.
    pub fn new(session: Session) -> Self {
        let snapshot = RwSignal::new(session.snapshot());
        let subscription = session.subscribe(move |snap| {
            let _ = snapshot.try_set(snap.clone());
        });
        let session = StoredValue::new_local(session);
        on_cleanup(move || {
            session.try_with_value(|s| s.unsubscribe(subscription));
        });
        Self { snapshot, session }
    }

    /// Tracked read of the whole snapshot.
    pub fn snapshot(&self) -> SessionSnapshot {
        self.snapshot.get()
    }

    pub fn current_user(&self) -> Option<UserProfile> {
        self.snapshot.with(|s| s.current_user.clone())
    }

    pub fn auth_checked(&self) -> bool {
        self.snapshot.with(|s| s.auth_checked)
    }

    pub fn is_authenticated(&self) -> bool {
        self.snapshot.with(SessionSnapshot::is_authenticated)
    }

    pub fn pending(&self) -> bool {
        self.snapshot.with(|s| s.pending)
    }

    pub fn favorites(&self) -> Favorites {
        self.snapshot.with(|s| s.favorites.clone())
    }

    pub fn is_favorite(&self, code: &str) -> bool {
        self.snapshot.with(|s| s.is_favorite(code))
    }

    /// The underlying session, for callers outside the view layer.
    pub fn session(&self) -> Session {
        self.session.get_value()
    }

    pub fn initialize(&self) -> InitTask {
        self.session().initialize()
    }

    /// # Errors
    ///
    /// Returns the user-facing failure message from [`Session::login`].
    pub async fn login(self, identifier: String, secret: String) -> Result<(), String> {
        self.session().login(&identifier, &secret).await
    }

    /// # Errors
    ///
    /// Returns the user-facing failure message from [`Session::signup`].
    pub async fn signup(self, account: NewAccount) -> Result<serde_json::Value, String> {
        self.session().signup(&account).await
    }

    pub fn logout(&self) {
        self.session().logout();
    }

    pub fn add_favorite(&self, entry: FavoriteEntry) -> bool {
        self.session().add_favorite(entry)
    }

    pub fn remove_favorite(&self, code: &str) -> bool {
        self.session().remove_favorite(code)
    }

    pub fn toggle_favorite(&self, entry: FavoriteEntry) -> bool {
        self.session().toggle_favorite(entry)
    }
}

/// Wrap `session` in a context handle and provide it to descendants.
pub fn provide_session(session: Session) -> SessionContext {
    let ctx = SessionContext::new(session);
    provide_context(ctx);
    ctx
}

/// The session handle provided by the root `App`.
pub fn use_session() -> SessionContext {
    expect_context::<SessionContext>()
}
