//! Default attributes for cookies written through the simple expiration path.

use crate::cookies::options::{CookieOptions, SameSite};

/// Configuration for [`HttpCookieStore`](crate::cookies::httpjar::HttpCookieStore).
///
/// Applied to every cookie written with [`CookieStore::set`](crate::cookies::store::CookieStore::set)
/// and to removal cookies. Cookies written with explicit options ignore it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CookieConfig {
    /// Path attribute (default `/`).
    pub path: Option<String>,

    /// Domain attribute (default host-only).
    pub domain: Option<String>,

    /// Send only over HTTPS.
    pub secure: bool,

    /// Hide from client-side scripts.
    pub http_only: bool,

    pub same_site: Option<SameSite>,
}

impl Default for CookieConfig {
    fn default() -> Self {
        Self {
            path: Some("/".to_string()),
            domain: None,
            secure: false,
            http_only: true,
            same_site: Some(SameSite::Lax),
        }
    }
}

impl CookieConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_path(mut self, path: Option<String>) -> Self {
        self.path = path;
        self
    }

    pub fn with_domain(mut self, domain: Option<String>) -> Self {
        self.domain = domain;
        self
    }

    pub fn with_secure(mut self, secure: bool) -> Self {
        self.secure = secure;
        self
    }

    pub fn with_http_only(mut self, http_only: bool) -> Self {
        self.http_only = http_only;
        self
    }

    pub fn with_same_site(mut self, same_site: Option<SameSite>) -> Self {
        self.same_site = same_site;
        self
    }

    /// The attribute set used for the simple expiration path, without a lifetime.
    pub fn default_options(&self) -> CookieOptions {
        CookieOptions {
            path: self.path.clone(),
            domain: self.domain.clone(),
            secure: self.secure,
            http_only: self.http_only,
            same_site: self.same_site,
            expires: None,
            max_age: None,
        }
    }
}
