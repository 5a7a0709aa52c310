#[derive(Debug, thiserror::Error)]
pub enum SiblingsError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Upstream returned status {status}")]
    Upstream { status: u16 },

    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    #[error("API key is missing")]
    MissingApiKey,

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

pub type Result<T> = std::result::Result<T, SiblingsError>;
