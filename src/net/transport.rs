//! Identity-service transport contract and its error taxonomy.
//!
//! ERROR HANDLING
//! ==============
//! Every expected failure mode is a [`TransportError`] value. Callers decide
//! whether a failure is silent (session restore) or user-facing (login form);
//! the transport itself never panics and never retries.

#[cfg(test)]
#[path = "transport_test.rs"]
mod transport_test;

use super::types::{NewAccount, UserProfile};

// =============================================================================
// ERROR
// =============================================================================

/// Failure of a single identity-service round trip.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TransportError {
    /// No response was received (offline, DNS, CORS, aborted).
    #[error("network error: {0}")]
    Network(String),

    /// The service answered with a non-success status.
    #[error("rejected by identity service: status {status}")]
    Unauthorized { status: u16, message: Option<String> },

    /// A response arrived but lacked the expected fields.
    #[error("malformed response: {0}")]
    Malformed(String),
}

impl TransportError {
    /// Whether repeating the same request could succeed without user action.
    #[must_use]
    pub fn retryable(&self) -> bool {
        matches!(self, Self::Network(_))
    }

    /// The `{error}` text supplied by the service, if any.
    #[must_use]
    pub fn server_message(&self) -> Option<&str> {
        match self {
            Self::Unauthorized { message, .. } => message.as_deref().filter(|m| !m.trim().is_empty()),
            _ => None,
        }
    }

    /// Message suitable for showing next to a login or signup form.
    ///
    /// `fallback` is the generic text used when nothing more specific is
    /// known (e.g. "Failed to login").
    #[must_use]
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            Self::Network(_) => NETWORK_FAILURE_MESSAGE.to_owned(),
            Self::Unauthorized { .. } => self.server_message().unwrap_or(REJECTED_MESSAGE).to_owned(),
            Self::Malformed(_) => fallback.to_owned(),
        }
    }
}

pub const NETWORK_FAILURE_MESSAGE: &str = "Unable to reach the server. Please try again.";
pub const REJECTED_MESSAGE: &str = "Invalid credentials";

// =============================================================================
// TRANSPORT TRAIT
// =============================================================================

/// Identity-service operations used by the session. Enables mocking in tests.
///
/// Futures are `?Send`: the browser event loop is single-threaded and the
/// HTTP futures hold JS handles.
#[async_trait::async_trait(?Send)]
pub trait AuthTransport {
    /// Exchange credentials for a bearer token.
    ///
    /// # Errors
    ///
    /// Returns [`TransportError`] on network failure, rejection, or a
    /// response without a `token` field.
    async fn login(&self, identifier: &str, secret: &str) -> Result<String, TransportError>;

    /// Register a new account. Does not authenticate.
    ///
    /// # Errors
    ///
    /// Returns [`TransportError`] on network failure or rejection.
    async fn signup(&self, account: &NewAccount) -> Result<serde_json::Value, TransportError>;

    /// Resolve the profile that owns `token`.
    ///
    /// # Errors
    ///
    /// Returns [`TransportError`] on network failure, an invalid or expired
    /// token, or a response without a `User` object.
    async fn fetch_current_user(&self, token: &str) -> Result<UserProfile, TransportError>;

    /// Replace the default bearer token sent with subsequent calls.
    fn set_bearer(&self, token: Option<&str>);

    /// Current default `Authorization` header value, if any.
    fn authorization(&self) -> Option<String>;
}

/// Format an `Authorization` header value; `None` when there is no usable token.
#[must_use]
pub fn bearer_header(token: Option<&str>) -> Option<String> {
    token
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(|t| format!("Bearer {t}"))
}
