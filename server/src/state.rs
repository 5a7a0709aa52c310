use lostark_siblings::SiblingsClient;

/// Shared application state available to all route handlers via Axum's
/// `State` extractor.
pub struct AppState {
    /// Upstream client. Holds no credentials; every call takes the caller's
    /// key.
    pub client: SiblingsClient,
}

impl AppState {
    pub fn new(client: SiblingsClient) -> Self {
        Self { client }
    }
}
