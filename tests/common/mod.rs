//! Shared fixtures for the sibling client integration tests.
//!
//! Provides sample upstream payloads and a client pointed at a `wiremock`
//! server standing in for the Lost Ark API.

use lostark_siblings::{ApiKey, SiblingsClient};
use serde_json::{json, Value};
use wiremock::MockServer;

pub const TEST_KEY: &str = "test-api-key";

pub fn test_key() -> ApiKey {
    ApiKey::new(TEST_KEY).unwrap()
}

/// A client whose base URL is the mock server.
pub fn client_for(server: &MockServer) -> SiblingsClient {
    SiblingsClient::builder()
        .base_url(server.uri())
        .build()
        .unwrap()
}

/// Two siblings in the exact shape the upstream returns them.
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
        }
    ])
}
