//! The `api_key` cookie that keeps the user's key in the browser.

use axum::http::header::COOKIE;
use axum::http::HeaderMap;
use lostark_siblings::ApiKey;
use percent_encoding::{percent_decode_str, utf8_percent_encode, NON_ALPHANUMERIC};

pub const API_KEY_COOKIE: &str = "api_key";

/// Seven days.
pub const API_KEY_MAX_AGE_SECS: u64 = 7 * 24 * 60 * 60;

/// `Set-Cookie` value persisting the key for [`API_KEY_MAX_AGE_SECS`].
pub fn api_key_cookie(key: &ApiKey) -> String {
    format!(
        "{API_KEY_COOKIE}={}; Max-Age={API_KEY_MAX_AGE_SECS}; Path=/; SameSite=Lax",
        utf8_percent_encode(key.as_str(), NON_ALPHANUMERIC)
    )
}

/// Read the key back from any `Cookie` header on the request.
pub fn api_key_from_headers(headers: &HeaderMap) -> Option<ApiKey> {
    headers
        .get_all(COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|value| value.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(name, _)| *name == API_KEY_COOKIE)
        .and_then(|(_, value)| percent_decode_str(value).decode_utf8().ok())
        .and_then(ApiKey::new)
}
