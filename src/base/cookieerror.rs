use thiserror::Error;

/// Errors surfaced by [`CookieManager`](crate::manager::CookieManager).
///
/// A missing cookie is not an error. Only codec failures are reported, and
/// they carry the cookie key but never the cookie value.
#[derive(Debug, Error)]
pub enum CookieError {
    /// The stored text could not be decoded into the requested type.
    #[error("Failed to decode cookie '{key}': {source}")]
    Decode {
        key: String,
        source: serde_json::Error,
    },

    /// The value could not be represented as cookie text.
    #[error("Failed to encode cookie '{key}': {source}")]
    Encode {
        key: String,
        source: serde_json::Error,
    },
}

/// Result type alias for cookie manager operations.
pub type CookieResult<T> = Result<T, CookieError>;

impl CookieError {
    pub fn decode(key: impl Into<String>, source: serde_json::Error) -> Self {
        CookieError::Decode {
            key: key.into(),
            source,
        }
    }

    pub fn encode(key: impl Into<String>, source: serde_json::Error) -> Self {
        CookieError::Encode {
            key: key.into(),
            source,
        }
    }

    /// The cookie key the failed operation was addressing.
    pub fn key(&self) -> &str {
        match self {
            CookieError::Decode { key, .. } | CookieError::Encode { key, .. } => key,
        }
    }

    pub fn is_decode(&self) -> bool {
        matches!(self, CookieError::Decode { .. })
    }

    pub fn is_encode(&self) -> bool {
        matches!(self, CookieError::Encode { .. })
    }
}
