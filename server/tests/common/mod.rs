//! Shared fixtures for the web server integration tests.
//!
//! `spawn_app()` starts a `wiremock` server standing in for the Lost Ark API
//! and the real router on an ephemeral local port pointed at it.

use std::sync::Arc;
use std::time::Duration;

use lostark_siblings::SiblingsClient;
use lostark_siblings_web::{app, state::AppState};
use serde_json::{json, Value};
use tokio::net::TcpListener;
use wiremock::MockServer;

pub const TEST_KEY: &str = "test-api-key";

pub struct TestApp {
    /// `http://127.0.0.1:<port>` of the app under test.
    pub address: String,
    pub upstream: MockServer,
    /// Plain client that does not follow redirects.
    pub http: reqwest::Client,
}

impl TestApp {
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.address, path)
    }

    /// Number of requests the fake upstream has received so far.
    pub async fn upstream_hits(&self) -> usize {
        self.upstream
            .received_requests()
            .await
            .map(|r| r.len())
            .unwrap_or(0)
    }
}

pub async fn spawn_app() -> TestApp {
    let upstream = MockServer::start().await;
    let client = SiblingsClient::builder()
        .base_url(upstream.uri())
        .timeout(Duration::from_millis(500))
        .build()
        .unwrap();
    let address = spawn_with_client(client).await;
    TestApp {
        address,
        upstream,
        http: http_client(),
    }
}

/// Start the router with an arbitrary upstream client; returns its base URL.
pub async fn spawn_with_client(client: SiblingsClient) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let router = app(Arc::new(AppState::new(client)));
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{addr}")
}

pub fn http_client() -> reqwest::Client {
    reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .build()
        .unwrap()
}

/// Three siblings in the exact shape the upstream returns them.
pub fn sample_siblings() -> Value {
    json!([
        {
            "ServerName": "루페온",
            "CharacterName": "모코코",
            "CharacterLevel": 60,
            "CharacterClassName": "바드",
            "ItemAvgLevel": "1,620.00",
            "ItemMaxLevel": "1,625.83"
        },
        {
            "ServerName": "루페온",
            "CharacterName": "Alt Sorc",
            "CharacterLevel": 55,
            "CharacterClassName": "소서리스",
            "ItemAvgLevel": "1,490.00",
            "ItemMaxLevel": "1,490.00"
        },
        {
            "ServerName": "아브렐슈드",
            "CharacterName": "Tank <3",
            "CharacterLevel": 50,
            "CharacterClassName": "워로드",
            "ItemAvgLevel": "1,340.00",
            "ItemMaxLevel": "1,340.00"
        }
    ])
}
