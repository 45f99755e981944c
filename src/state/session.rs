//! Process-wide session: bearer token, current user and favorites.
//!
//! SYSTEM CONTEXT
//! ==============
//! One [`Session`] is built when the app starts and handed to every consumer
//! through context. It reconciles three sources: the token persisted in the
//! tab-lifetime storage scope, the profile fetched from the identity service,
//! and the favorites persisted in the durable scope.
//!
//! DESIGN
//! ======
//! - State lives behind `Rc<RefCell<..>>`; the client runs on a single event
//!   loop and no borrow is held across an `.await`.
//! - Every change goes through `commit`: storage and the default
//!   authorization header are written first, then the snapshot is replaced in
//!   one step and published to subscribers. There is no suspension point in
//!   between, so subscribers never see the header and the token disagree.
//! - `initialize` is latched by a cached shared future. Re-mounted consumers
//!   that call it again await the same task instead of starting another.
//! - A login or signup issued while another is still in flight is refused.
//!
//! INVARIANTS
//! ==========
//! - `current_user.is_some()` implies `token.is_some()`.
//! - `auth_checked` flips to `true` once and never back.
//! - The token is only ever written to [`StorageScope::Ephemeral`].

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use futures::FutureExt as _;
use futures::future::{LocalBoxFuture, Shared};

use super::favorites::Favorites;
use crate::net::transport::AuthTransport;
use crate::net::types::{FavoriteEntry, NewAccount, UserProfile};
use crate::util::storage::{PersistentStore, StorageScope};

/// Ephemeral-scope key holding the raw bearer token.
pub const TOKEN_KEY: &str = "token";
/// Durable-scope key holding the favorites JSON array.
pub const FAVORITES_KEY: &str = "favorites";

pub const LOGIN_FAILED_MESSAGE: &str = "Failed to login";
pub const SIGNUP_FAILED_MESSAGE: &str = "Failed to signup";
pub const REQUEST_IN_PROGRESS_MESSAGE: &str = "Another sign-in request is already in progress.";

/// Read-only view of the session handed to consumers.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SessionSnapshot {
    pub token: Option<String>,
    pub current_user: Option<UserProfile>,
    pub favorites: Favorites,
    /// `false` until the startup restore has finished. While `false`, an
    /// absent user means "unknown", not "logged out".
    pub auth_checked: bool,
    /// A login or signup round trip is in flight.
    pub pending: bool,
}

impl SessionSnapshot {
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.current_user.is_some()
    }

    /// Startup restore finished and nobody is signed in.
    #[must_use]
    pub fn is_anonymous(&self) -> bool {
        self.auth_checked && self.current_user.is_none()
    }

    #[must_use]
    pub fn is_favorite(&self, code: &str) -> bool {
        self.favorites.contains(code)
    }
}

type Listener = Rc<dyn Fn(&SessionSnapshot)>;

/// Handle returned by [`Session::subscribe`], used to unsubscribe.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);
pub type InitTask = Shared<LocalBoxFuture<'static, ()>>;

struct SessionInner {
    store: Rc<dyn PersistentStore>,
    transport: Rc<dyn AuthTransport>,
    state: RefCell<SessionSnapshot>,
    listeners: RefCell<Vec<(SubscriptionId, Listener)>>,
    next_listener: Cell<u64>,
    init: RefCell<Option<InitTask>>,
    favorites_loaded: Cell<bool>,
    /// Bumped whenever the identity changes (login, logout); a restore that
    /// started under an older generation must not commit.
    generation: Cell<u64>,
}

/// Cloneable handle to the shared session.
#[derive(Clone)]
pub struct Session {
    inner: Rc<SessionInner>,
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let state = self.inner.state.borrow();
        f.debug_struct("Session")
            .field("authenticated", &state.is_authenticated())
            .field("favorites", &state.favorites.len())
            .field("auth_checked", &state.auth_checked)
            .finish_non_exhaustive()
    }
}

impl Session {
    pub fn new(store: Rc<dyn PersistentStore>, transport: Rc<dyn AuthTransport>) -> Self {
        Self {
            inner: Rc::new(SessionInner {
                store,
                transport,
                state: RefCell::new(SessionSnapshot::default()),
                listeners: RefCell::new(Vec::new()),
                next_listener: Cell::new(0),
                init: RefCell::new(None),
                favorites_loaded: Cell::new(false),
                generation: Cell::new(0),
            }),
        }
    }

    // =========================================================================
    // READS
    // =========================================================================

    #[must_use]
    pub fn snapshot(&self) -> SessionSnapshot {
        self.inner.state.borrow().clone()
    }

    #[must_use]
    pub fn token(&self) -> Option<String> {
        self.inner.state.borrow().token.clone()
    }

    #[must_use]
    pub fn current_user(&self) -> Option<UserProfile> {
        self.inner.state.borrow().current_user.clone()
    }

    #[must_use]
    pub fn auth_checked(&self) -> bool {
        self.inner.state.borrow().auth_checked
    }

    #[must_use]
    pub fn favorites(&self) -> Favorites {
        self.inner.state.borrow().favorites.clone()
    }

    #[must_use]
    pub fn is_favorite(&self, code: &str) -> bool {
        self.inner.state.borrow().favorites.contains(code)
    }

    /// Register a callback invoked with every committed snapshot.
    pub fn subscribe(&self, listener: impl Fn(&SessionSnapshot) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.inner.next_listener.get());
        self.inner.next_listener.set(id.0 + 1);
        self.inner.listeners.borrow_mut().push((id, Rc::new(listener)));
        id
    }

    /// Drop a listener; returns `false` if it was already gone.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut listeners = self.inner.listeners.borrow_mut();
        let before = listeners.len();
        listeners.retain(|(other, _)| *other != id);
        listeners.len() != before
    }

    #[cfg(test)]
    pub(crate) fn listener_count(&self) -> usize {
        self.inner.listeners.borrow().len()
    }

    // =========================================================================
    // STARTUP
    // =========================================================================

    /// Restore the session from storage, at most once per session object.
    ///
    /// The first call loads favorites immediately and starts validating any
    /// stored token; later calls return the same shared task. The returned
    /// future always resolves, and resolving implies `auth_checked`.
    pub fn initialize(&self) -> InitTask {
        if let Some(task) = self.inner.init.borrow().as_ref() {
            return task.clone();
        }

        self.ensure_favorites_loaded();
        let stored_token = self
            .inner
            .store
            .get(StorageScope::Ephemeral, TOKEN_KEY)
            .filter(|t| !t.trim().is_empty());

        // The shared future drops its body (and this handle) on completion.
        let session = self.clone();
        let generation = self.inner.generation.get();
        let task = async move { session.restore_user(stored_token, generation).await }
            .boxed_local()
            .shared();
        *self.inner.init.borrow_mut() = Some(task.clone());
        task
    }

    /// Load the durable favorites the first time anything needs them, so a
    /// favorite added before startup cannot overwrite the stored collection.
    fn ensure_favorites_loaded(&self) {
        if self.inner.favorites_loaded.replace(true) {
            return;
        }
        let stored = self
            .inner
            .store
            .get(StorageScope::Durable, FAVORITES_KEY)
            .map(|raw| Favorites::from_json(&raw))
            .unwrap_or_default();
        log::debug!("session: loaded {} favorites", stored.len());
        self.commit(|s| s.favorites = stored);
    }

    async fn restore_user(&self, stored_token: Option<String>, generation: u64) {
        let Some(token) = stored_token else {
            log::debug!("session: no stored token");
            self.commit(|s| s.auth_checked = true);
            return;
        };

        match self.inner.transport.fetch_current_user(&token).await {
            Ok(user) => {
                let slot = self.inner.store.get(StorageScope::Ephemeral, TOKEN_KEY);
                if self.inner.generation.get() != generation || slot.as_deref() != Some(token.as_str()) {
                    // A login or logout happened meanwhile; it wins.
                    log::debug!("session: identity changed during restore");
                    self.commit(|s| s.auth_checked = true);
                    return;
                }
                log::info!("session: restored user {}", user.username);
                self.inner.transport.set_bearer(Some(&token));
                self.commit(|s| {
                    s.token = Some(token);
                    s.current_user = Some(user);
                    s.auth_checked = true;
                });
            }
            Err(e) => {
                log::warn!("session: discarding stored token: {e}");
                let slot = self.inner.store.get(StorageScope::Ephemeral, TOKEN_KEY);
                if slot.as_deref() == Some(token.as_str()) {
                    self.write_token_slot(None);
                }
                self.commit(|s| s.auth_checked = true);
            }
        }
    }

    // =========================================================================
    // AUTH
    // =========================================================================

    /// Authenticate and load the matching profile.
    ///
    /// On success the token, the default authorization header and the user
    /// change together. On failure none of them change.
    ///
    /// # Errors
    ///
    /// Returns a user-facing message when another request is in flight, the
    /// credentials are rejected, the service is unreachable, or the profile
    /// cannot be loaded.
    pub async fn login(&self, identifier: &str, secret: &str) -> Result<(), String> {
        let _pending = self.begin_request()?;

        let token = self.inner.transport.login(identifier, secret).await.map_err(|e| {
            log::warn!("session: login failed: {e}");
            e.user_message(LOGIN_FAILED_MESSAGE)
        })?;

        // The slot is written before the profile fetch so an interrupted
        // load can still restore from it.
        let previous_slot = self.inner.store.get(StorageScope::Ephemeral, TOKEN_KEY);
        self.write_token_slot(Some(&token));

        match self.inner.transport.fetch_current_user(&token).await {
            Ok(user) => {
                log::info!("session: logged in as {}", user.username);
                self.bump_generation();
                self.inner.transport.set_bearer(Some(&token));
                self.commit(|s| {
                    s.token = Some(token);
                    s.current_user = Some(user);
                });
                Ok(())
            }
            Err(e) => {
                log::warn!("session: profile fetch after login failed: {e}");
                self.write_token_slot(previous_slot.as_deref());
                Err(e.user_message(LOGIN_FAILED_MESSAGE))
            }
        }
    }

    /// Register a new account. Does not sign in.
    ///
    /// # Errors
    ///
    /// Returns a user-facing message when another request is in flight or the
    /// service refuses the registration.
    pub async fn signup(&self, account: &NewAccount) -> Result<serde_json::Value, String> {
        let _pending = self.begin_request()?;

        match self.inner.transport.signup(account).await {
            Ok(data) => {
                log::info!("session: registered {}", account.username);
                Ok(data)
            }
            Err(e) => {
                log::warn!("session: signup failed: {e}");
                Err(e.user_message(SIGNUP_FAILED_MESSAGE))
            }
        }
    }

    /// Forget the token and user. Favorites are left untouched.
    pub fn logout(&self) {
        self.bump_generation();
        self.write_token_slot(None);
        self.inner.transport.set_bearer(None);
        self.commit(|s| {
            s.token = None;
            s.current_user = None;
        });
        log::info!("session: logged out");
    }

    fn bump_generation(&self) {
        let generation = &self.inner.generation;
        generation.set(generation.get().wrapping_add(1));
    }

    fn begin_request(&self) -> Result<PendingGuard, String> {
        let busy = self.inner.state.borrow().pending;
        if busy {
            return Err(REQUEST_IN_PROGRESS_MESSAGE.to_owned());
        }
        self.commit(|s| s.pending = true);
        Ok(PendingGuard { session: self.clone() })
    }

    // =========================================================================
    // FAVORITES
    // =========================================================================

    /// Add `entry`; returns `false` when its code was already favorited.
    pub fn add_favorite(&self, entry: FavoriteEntry) -> bool {
        self.update_favorites(|f| f.insert(entry))
    }

    /// Remove the favorite for `code`; returns `false` when it was absent.
    pub fn remove_favorite(&self, code: &str) -> bool {
        self.update_favorites(|f| f.remove(code))
    }

    /// Remove `entry` if favorited, add it otherwise. Returns whether it is
    /// favorited afterwards.
    pub fn toggle_favorite(&self, entry: FavoriteEntry) -> bool {
        let code = entry.code().to_owned();
        self.update_favorites(|f| if f.remove(&code) { false } else { f.insert(entry) })
    }

    fn update_favorites(&self, update: impl FnOnce(&mut Favorites) -> bool) -> bool {
        self.ensure_favorites_loaded();
        let mut next = self.favorites();
        let result = update(&mut next);
        self.persist_favorites(&next);
        self.commit(|s| s.favorites = next);
        result
    }

    // =========================================================================
    // PERSISTENCE
    // =========================================================================

    fn persist_favorites(&self, favorites: &Favorites) {
        let raw = match favorites.to_json() {
            Ok(raw) => raw,
            Err(e) => {
                log::error!("session: favorites not serializable: {e}");
                return;
            }
        };
        if let Err(e) = self.inner.store.set(StorageScope::Durable, FAVORITES_KEY, &raw) {
            log::warn!("session: favorites not persisted: {e}");
        }
    }

    fn write_token_slot(&self, token: Option<&str>) {
        let store = &self.inner.store;
        let result = match token {
            Some(token) => store.set(StorageScope::Ephemeral, TOKEN_KEY, token),
            None => store.remove(StorageScope::Ephemeral, TOKEN_KEY),
        };
        if let Err(e) = result {
            log::warn!("session: token slot not updated: {e}");
        }
    }

    fn commit(&self, update: impl FnOnce(&mut SessionSnapshot)) {
        let snapshot = {
            let mut state = self.inner.state.borrow_mut();
            update(&mut state);
            debug_assert!(state.current_user.is_none() || state.token.is_some());
            state.clone()
        };
        let listeners: Vec<Listener> =
            self.inner.listeners.borrow().iter().map(|(_, l)| l.clone()).collect();
        for listener in listeners {
            listener(&snapshot);
        }
    }
}

/// Clears the in-flight flag when a login/signup finishes or is dropped.
struct PendingGuard {
    session: Session,
}

impl Drop for PendingGuard {
    fn drop(&mut self) {
        self.session.commit(|s| s.pending = false);
    }
}
