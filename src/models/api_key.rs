use std::fmt;
use std::str::FromStr;

use crate::error::SiblingsError;

/// An opaque Lost Ark developer API key.
///
/// The format is never validated; only presence matters. An empty or
/// whitespace-only string is treated as "no key".
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    /// Wrap a raw key, trimming surrounding whitespace.
    ///
    /// Returns `None` if nothing is left after trimming.
    pub fn new(raw: impl AsRef<str>) -> Option<Self> {
        let trimmed = raw.as_ref().trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Self(trimmed.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Value for the upstream `Authorization` header.
    pub fn bearer(&self) -> String {
        format!("bearer {}", self.0)
    }
}

impl FromStr for ApiKey {
    type Err = SiblingsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s).ok_or(SiblingsError::MissingApiKey)
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiKey(<redacted>)")
    }
}
