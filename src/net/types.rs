//! Wire DTOs for the identity service and the favorites store.
//!
//! DESIGN
//! ======
//! Responses from the identity service and country records from the
//! country-data API arrive as loosely shaped JSON. Everything admitted into
//! session state passes through the typed records below, so optional fields
//! are explicit and records without a usable key never reach the store.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// Roles requested for a new account when the caller does not pick any.
pub const DEFAULT_ROLES: &[&str] = &["User"];

/// Authenticated user as returned by `GET /user-by`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    /// Account identifier. The service emits either a string (`_id`) or an
    /// integer; both are normalized to a string.
    #[serde(alias = "_id", deserialize_with = "deserialize_id")]
    pub id: String,
    /// Login name.
    pub username: String,
    /// Contact address, when the service includes it.
    #[serde(default)]
    pub email: Option<String>,
    /// Granted roles (e.g. `"User"`, `"Admin"`).
    #[serde(default, alias = "roles")]
    pub role: Vec<String>,
}

impl UserProfile {
    /// Whether the profile carries the given role.
    #[must_use]
    pub fn has_role(&self, role: &str) -> bool {
        self.role.iter().any(|r| r == role)
    }
}

/// Registration payload for `POST /signup`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NewAccount {
    pub username: String,
    pub email: String,
    pub password: String,
    pub roles: Vec<String>,
}

impl NewAccount {
    /// Build a registration with the default `["User"]` role set.
    pub fn new(username: impl Into<String>, email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            email: email.into(),
            password: password.into(),
            roles: DEFAULT_ROLES.iter().map(|r| (*r).to_owned()).collect(),
        }
    }

    /// Replace the requested role set.
    #[must_use]
    pub fn with_roles<I, S>(mut self, roles: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.roles = roles.into_iter().map(Into::into).collect();
        self
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct LoginRequest<'a> {
    pub username: &'a str,
    pub password: &'a str,
}

#[derive(Debug, Serialize)]
pub(crate) struct SignupRequest<'a> {
    pub username: &'a str,
    pub email: &'a str,
    pub password: &'a str,
    pub role: &'a [String],
}

impl<'a> From<&'a NewAccount> for SignupRequest<'a> {
    fn from(account: &'a NewAccount) -> Self {
        Self {
            username: &account.username,
            email: &account.email,
            password: &account.password,
            role: &account.roles,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct TokenResponse {
    #[serde(default)]
    pub token: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct UserEnvelope {
    #[serde(rename = "User", default)]
    pub user: Option<UserProfile>,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct ErrorBody {
    #[serde(default)]
    pub error: Option<String>,
}

// =============================================================================
// FAVORITES
// =============================================================================

/// A country record rejected at the favorites boundary.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvalidFavorite {
    #[error("country record has no cca3 or alpha3Code")]
    MissingCode,
}

/// A favorited country: the full record as received, keyed by its
/// three-letter code.
///
/// The key is read from `cca3` (current API) and falls back to `alpha3Code`
/// (legacy API). The record itself is kept verbatim so whatever the list and
/// detail views render survives a reload.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Map<String, Value>", into = "Map<String, Value>")]
pub struct FavoriteEntry {
    code: String,
    record: Map<String, Value>,
}

impl FavoriteEntry {
    /// Narrow a raw country record into a favorite.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidFavorite::MissingCode`] when the record carries no
    /// non-empty `cca3` or `alpha3Code` string.
    pub fn from_record(record: Map<String, Value>) -> Result<Self, InvalidFavorite> {
        let code = ["cca3", "alpha3Code"]
            .iter()
            .find_map(|field| record.get(*field).and_then(Value::as_str).filter(|c| !c.is_empty()))
            .ok_or(InvalidFavorite::MissingCode)?
            .to_owned();
        Ok(Self { code, record })
    }

    /// Narrow an arbitrary JSON value; non-objects are rejected.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidFavorite::MissingCode`] for non-object values or
    /// objects without a code.
    pub fn from_value(value: Value) -> Result<Self, InvalidFavorite> {
        match value {
            Value::Object(record) => Self::from_record(record),
            _ => Err(InvalidFavorite::MissingCode),
        }
    }

    /// Three-letter country code used as the set key.
    #[must_use]
    pub fn code(&self) -> &str {
        &self.code
    }

    /// Display name: a plain `name` string, or `name.common` for v3 records.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        match self.record.get("name")? {
            Value::String(name) => Some(name),
            Value::Object(names) => names.get("common").and_then(Value::as_str),
            _ => None,
        }
    }

    /// The full record as stored.
    #[must_use]
    pub fn record(&self) -> &Map<String, Value> {
        &self.record
    }
}

impl TryFrom<Map<String, Value>> for FavoriteEntry {
    type Error = InvalidFavorite;

    fn try_from(record: Map<String, Value>) -> Result<Self, Self::Error> {
        Self::from_record(record)
    }
}

impl From<FavoriteEntry> for Map<String, Value> {
    fn from(entry: FavoriteEntry) -> Self {
        entry.record
    }
}

fn deserialize_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    match value {
        Value::String(id) if !id.is_empty() => Ok(id),
        Value::Number(number) => {
            if let Some(int) = number.as_i64() {
                return Ok(int.to_string());
            }
            if let Some(uint) = number.as_u64() {
                return Ok(uint.to_string());
            }
            Err(D::Error::custom("expected integer id"))
        }
        _ => Err(D::Error::custom("expected non-empty string or integer id")),
    }
}
