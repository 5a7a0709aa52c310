use std::sync::Arc;

use axum::extract::rejection::PathRejection;
use axum::extract::{Path, State};
use axum::http::HeaderMap;
use axum::response::Json;
use lostark_siblings::config::API_KEY_HEADER;
use lostark_siblings::ApiKey;
use serde_json::Value;
use tracing::info;

use crate::error::AppError;
use crate::state::AppState;

/// GET /api/characters/{character_name}
///
/// Relays the sibling list for a character. The caller's key comes from the
/// `x-api-key` header and is forwarded upstream as a bearer token. Without a
/// key, or with a name that is blank or not valid UTF-8, the request is
/// rejected before anything is sent upstream.
pub async fn get_siblings(
    State(state): State<Arc<AppState>>,
    character_name: Result<Path<String>, PathRejection>,
    headers: HeaderMap,
) -> Result<Json<Value>, AppError> {
    let Path(character_name) = character_name?;
    let key: ApiKey = headers
        .get(API_KEY_HEADER)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .parse()?;

    let siblings = state
        .client
        .fetch_siblings_json(&character_name, &key)
        .await?;

    info!(
        character = %character_name,
        count = siblings.as_array().map_or(0, Vec::len),
        "Relayed siblings"
    );
    Ok(Json(siblings))
}
