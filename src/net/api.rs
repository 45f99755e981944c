//! HTTP implementation of [`AuthTransport`] against the identity service.
//!
//! Browser build (`csr`): real HTTP calls via `gloo-net`.
//! Native builds and unit tests: every call resolves to a
//! [`TransportError::Network`] since there is no browser fetch available.
//!
//! ERROR HANDLING
//! ==============
//! Non-2xx responses become [`TransportError::Unauthorized`] carrying the
//! service's `{error}` text when the body has one; 2xx responses missing
//! their payload become [`TransportError::Malformed`].

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use std::cell::RefCell;

use super::transport::{AuthTransport, TransportError, bearer_header};
use super::types::{NewAccount, UserProfile};
#[cfg(any(test, feature = "csr"))]
use super::types::{ErrorBody, TokenResponse, UserEnvelope};
use crate::config::ClientConfig;

/// Identity-service client holding the default bearer token.
#[derive(Debug)]
pub struct HttpAuthTransport {
    base_url: String,
    bearer: RefCell<Option<String>>,
}

impl HttpAuthTransport {
    /// Create a transport rooted at `base_url` (e.g. `http://host/api/v1/user`).
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_owned();
        Self { base_url, bearer: RefCell::new(None) }
    }

    #[must_use]
    pub fn from_config(config: &ClientConfig) -> Self {
        Self::new(config.auth_base_url.clone())
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[cfg(any(test, feature = "csr"))]
fn endpoint(base_url: &str, path: &str) -> String {
    format!("{base_url}/{}", path.trim_start_matches('/'))
}

/// Classify a non-2xx response from its status and raw body text.
#[cfg(any(test, feature = "csr"))]
fn rejection(status: u16, body: &str) -> TransportError {
    let message = serde_json::from_str::<ErrorBody>(body).ok().and_then(|b| b.error);
    TransportError::Unauthorized { status, message }
}

#[cfg(any(test, feature = "csr"))]
fn token_from(body: TokenResponse) -> Result<String, TransportError> {
    body.token
        .filter(|t| !t.trim().is_empty())
        .ok_or_else(|| TransportError::Malformed("login response has no token".to_owned()))
}

#[cfg(any(test, feature = "csr"))]
fn user_from(body: UserEnvelope) -> Result<UserProfile, TransportError> {
    body.user
        .ok_or_else(|| TransportError::Malformed("user response has no User object".to_owned()))
}

#[cfg(feature = "csr")]
async fn send(request: Result<gloo_net::http::Request, gloo_net::Error>) -> Result<gloo_net::http::Response, TransportError> {
    let request = request.map_err(|e| TransportError::Malformed(e.to_string()))?;
    let resp = request
        .send()
        .await
        .map_err(|e| TransportError::Network(e.to_string()))?;
    if resp.ok() {
        return Ok(resp);
    }
    let status = resp.status();
    let body = resp.text().await.unwrap_or_default();
    Err(rejection(status, &body))
}

#[cfg(feature = "csr")]
impl HttpAuthTransport {
    fn builder(&self, method: gloo_net::http::Method, path: &str) -> gloo_net::http::RequestBuilder {
        let url = endpoint(&self.base_url, path);
        let builder = gloo_net::http::RequestBuilder::new(&url).method(method);
        match self.authorization() {
            Some(header) => builder.header("Authorization", &header),
            None => builder,
        }
    }
}

#[async_trait::async_trait(?Send)]
impl AuthTransport for HttpAuthTransport {
    async fn login(&self, identifier: &str, secret: &str) -> Result<String, TransportError> {
        #[cfg(feature = "csr")]
        {
            let payload = super::types::LoginRequest { username: identifier, password: secret };
            let resp = send(self.builder(gloo_net::http::Method::POST, "login").json(&payload)).await?;
            let body: TokenResponse = resp
                .json()
                .await
                .map_err(|e| TransportError::Malformed(e.to_string()))?;
            token_from(body)
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (identifier, secret);
            Err(TransportError::Network("not available outside the browser".to_owned()))
        }
    }

    async fn signup(&self, account: &NewAccount) -> Result<serde_json::Value, TransportError> {
        #[cfg(feature = "csr")]
        {
            let payload = super::types::SignupRequest::from(account);
            let resp = send(self.builder(gloo_net::http::Method::POST, "signup").json(&payload)).await?;
            // Some deployments answer 201 with an empty body.
            let text = resp.text().await.map_err(|e| TransportError::Malformed(e.to_string()))?;
            if text.trim().is_empty() {
                return Ok(serde_json::Value::Null);
            }
            serde_json::from_str(&text).map_err(|e| TransportError::Malformed(e.to_string()))
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = account;
            Err(TransportError::Network("not available outside the browser".to_owned()))
        }
    }

    async fn fetch_current_user(&self, token: &str) -> Result<UserProfile, TransportError> {
        let Some(header) = bearer_header(Some(token)) else {
            return Err(TransportError::Unauthorized { status: 401, message: None });
        };
        #[cfg(feature = "csr")]
        {
            let url = endpoint(&self.base_url, "user-by");
            let request = gloo_net::http::Request::get(&url).header("Authorization", &header).build();
            let resp = send(request).await?;
            let body: UserEnvelope = resp
                .json()
                .await
                .map_err(|e| TransportError::Malformed(e.to_string()))?;
            user_from(body)
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = header;
            Err(TransportError::Network("not available outside the browser".to_owned()))
        }
    }

    fn set_bearer(&self, token: Option<&str>) {
        *self.bearer.borrow_mut() = token.map(str::to_owned);
    }

    fn authorization(&self) -> Option<String> {
        bearer_header(self.bearer.borrow().as_deref())
    }
}
