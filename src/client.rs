//! Async client for the Lost Ark developer API sibling lookup.
//!
//! One call per lookup: builds the sibling URL, forwards the caller's key as a
//! bearer token, and validates the response against [`CharacterRecord`]
//! before handing it back. There is no retry and no response cache.

use std::time::Duration;

use reqwest::header::{ACCEPT, AUTHORIZATION, CACHE_CONTROL};
use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, warn};

use crate::config;
use crate::error::{Result, SiblingsError};
use crate::models::{ApiKey, CharacterRecord};

// ---------------------------------------------------------------------------
// SiblingsClientBuilder
// ---------------------------------------------------------------------------

/// Builder for configuring and constructing a [`SiblingsClient`].
///
/// Use [`SiblingsClient::builder()`] to obtain a builder.
#[derive(Default)]
pub struct SiblingsClientBuilder {
    base_url: Option<String>,
    timeout: Option<Duration>,
    user_agent: Option<String>,
}

impl SiblingsClientBuilder {
    /// Point the client at a different API host.
    ///
    /// Defaults to [`config::API_BASE`]. A trailing slash is ignored.
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Set a total request timeout.
    ///
    /// Unset by default, in which case reqwest's defaults apply.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Override the `User-Agent` sent upstream.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    pub fn build(self) -> Result<SiblingsClient> {
        let base_url = self
            .base_url
            .unwrap_or_else(|| config::API_BASE.to_string());
        let base_url = base_url.trim_end_matches('/').to_string();
        if !base_url.starts_with("http://") && !base_url.starts_with("https://") {
            return Err(SiblingsError::InvalidArgument(format!(
                "Base URL must start with http:// or https://, got '{base_url}'"
            )));
        }

        let user_agent = self
            .user_agent
            .unwrap_or_else(|| concat!("lostark-siblings/", env!("CARGO_PKG_VERSION")).to_string());

        let mut http = reqwest::Client::builder()
            .user_agent(user_agent)
            .redirect(reqwest::redirect::Policy::limited(10));
        if let Some(timeout) = self.timeout {
            http = http.timeout(timeout);
        }

        Ok(SiblingsClient {
            http: http.build()?,
            base_url,
        })
    }
}

// ---------------------------------------------------------------------------
// SiblingsClient
// ---------------------------------------------------------------------------

/// Client for `GET /characters/{name}/siblings`.
///
/// Cheap to clone; clones share one connection pool.
#[derive(Debug, Clone)]
pub struct SiblingsClient {
    http: reqwest::Client,
    base_url: String,
}

impl SiblingsClient {
    /// Create a new builder for configuring the client.
    pub fn builder() -> SiblingsClientBuilder {
        SiblingsClientBuilder::default()
    }

    /// Client against the public API host with default settings.
    pub fn new() -> Result<Self> {
        Self::builder().build()
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Full upstream URL for a character name, with the name percent-encoded.
    pub fn siblings_url(&self, character_name: &str) -> String {
        format!("{}{}", self.base_url, config::siblings_path(character_name))
    }

    /// Fetch the sibling list as the raw JSON array the API returned.
    ///
    /// The name is trimmed before lookup; a blank name is rejected with
    /// [`SiblingsError::InvalidArgument`] without contacting the API.
    ///
    /// The body is validated against [`CharacterRecord`] but returned
    /// untouched, extra fields included. A `null` body (unknown character) is
    /// returned as an empty array.
    pub async fn fetch_siblings_json(&self, character_name: &str, key: &ApiKey) -> Result<Value> {
        let (raw, _) = self.fetch(character_name, key).await?;
        Ok(raw)
    }

    /// Fetch the sibling list as typed records.
    pub async fn fetch_siblings(
        &self,
        character_name: &str,
        key: &ApiKey,
    ) -> Result<Vec<CharacterRecord>> {
        let (_, records) = self.fetch(character_name, key).await?;
        Ok(records)
    }

    async fn fetch(
        &self,
        character_name: &str,
        key: &ApiKey,
    ) -> Result<(Value, Vec<CharacterRecord>)> {
        let character_name = character_name.trim();
        if character_name.is_empty() {
            return Err(SiblingsError::InvalidArgument(
                "Character name is blank".to_string(),
            ));
        }

        let url = self.siblings_url(character_name);
        debug!(%url, "Fetching siblings");

        let resp = self
            .http
            .get(&url)
            .header(ACCEPT, "application/json")
            .header(AUTHORIZATION, key.bearer())
            .header(CACHE_CONTROL, "no-cache")
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            warn!(%url, status = status.as_u16(), "Upstream returned non-success status");
            return Err(SiblingsError::Upstream {
                status: status.as_u16(),
            });
        }

        let body = resp.bytes().await?;
        let value: Value = serde_json::from_slice(&body)?;
        parse_siblings(value)
    }
}

/// Validate an upstream body, returning it alongside the typed records.
fn parse_siblings(value: Value) -> Result<(Value, Vec<CharacterRecord>)> {
    match value {
        Value::Null => Ok((Value::Array(Vec::new()), Vec::new())),
        Value::Array(_) => {
            let records = Vec::<CharacterRecord>::deserialize(&value)
                .map_err(|e| SiblingsError::MalformedResponse(e.to_string()))?;
            Ok((value, records))
        }
        other => Err(SiblingsError::MalformedResponse(format!(
            "expected an array of characters, got {}",
            json_kind(&other)
        ))),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
