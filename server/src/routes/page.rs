use std::sync::Arc;

use axum::extract::{Form, Query, State};
use axum::http::header::SET_COOKIE;
use axum::http::HeaderMap;
use axum::response::{Html, IntoResponse, Redirect, Response};
use lostark_siblings::ApiKey;
use serde::Deserialize;
use tracing::{info, warn};

use crate::cookies::{api_key_cookie, api_key_from_headers};
use crate::page::{render, PageState, KEY_SAVED_NOTICE, NO_KEY_ERROR};
use crate::state::AppState;

#[derive(Deserialize)]
pub struct SearchParams {
    pub name: Option<String>,
    pub saved: Option<String>,
}

#[derive(Deserialize)]
pub struct ApiKeyForm {
    pub api_key: String,
}

/// GET /?name=모코코
///
/// Renders the search page. With a `name` the search runs before rendering,
/// using the key from the `api_key` cookie.
pub async fn index(
    State(state): State<Arc<AppState>>,
    Query(params): Query<SearchParams>,
    headers: HeaderMap,
) -> Html<String> {
    let mut page = PageState::new(api_key_from_headers(&headers));
    if params.saved.as_deref() == Some("1") {
        page.notice = Some(KEY_SAVED_NOTICE.to_string());
    }

    let name = params.name.as_deref().map(str::trim).unwrap_or_default();
    if !name.is_empty() {
        match page.api_key.clone() {
            None => {
                page.character_name = name.to_string();
                page.error = Some(NO_KEY_ERROR.to_string());
            }
            Some(key) => {
                page.begin_search(name);
                let outcome = state.client.fetch_siblings(name, &key).await;
                if let Err(e) = &outcome {
                    warn!(character = %name, error = %e, "Search failed");
                }
                page.finish_search(outcome);
            }
        }
    }

    Html(render(&page))
}

/// POST /api-key
///
/// Stores the submitted key in the `api_key` cookie for seven days and
/// sends the browser back to the page. The key is not checked upstream.
pub async fn save_api_key(Form(form): Form<ApiKeyForm>) -> Response {
    match ApiKey::new(&form.api_key) {
        Some(key) => {
            info!("API key saved to cookie");
            (
                [(SET_COOKIE, api_key_cookie(&key))],
                Redirect::to("/?saved=1"),
            )
                .into_response()
        }
        None => Redirect::to("/").into_response(),
    }
}
