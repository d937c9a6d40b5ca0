//! Ergonomic error context helpers.
//!
//! Provides an extension trait for attaching the cookie key to codec
//! failures, converting `serde_json` errors into `CookieError` variants.

use crate::base::cookieerror::CookieError;

/// Extension trait for adding context to codec Results.
pub trait CodecResultExt<T> {
    /// Mark a failure as a decode error for `key`.
    ///
    /// # Example
    /// ```
    /// use cookiemanager::base::context::CodecResultExt;
    ///
    /// let err = serde_json::from_str::<u32>("not-json")
    ///     .decode_context("visits")
    ///     .unwrap_err();
    /// assert_eq!(err.key(), "visits");
    /// ```
    fn decode_context(self, key: &str) -> Result<T, CookieError>;

    /// Mark a failure as an encode error for `key`.
    fn encode_context(self, key: &str) -> Result<T, CookieError>;
}

impl<T> CodecResultExt<T> for Result<T, serde_json::Error> {
    fn decode_context(self, key: &str) -> Result<T, CookieError> {
        self.map_err(|e| CookieError::decode(key, e))
    }

    fn encode_context(self, key: &str) -> Result<T, CookieError> {
        self.map_err(|e| CookieError::encode(key, e))
    }
}
