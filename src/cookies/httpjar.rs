//! Request-scoped cookie store backed by [`cookie::CookieJar`].
//!
//! The jar is seeded from the request's `Cookie` headers. Writes and removals
//! made while handling the request are tracked as a delta, which is rendered
//! into `Set-Cookie` headers for the response.
//!
//! ```
//! use cookiemanager::cookies::config::CookieConfig;
//! use cookiemanager::cookies::httpjar::HttpCookieStore;
//! use cookiemanager::cookies::store::CookieStore;
//! use http::header::{HeaderMap, HeaderValue, COOKIE};
//!
//! let mut request = HeaderMap::new();
//! request.insert(COOKIE, HeaderValue::from_static("sid=abc; theme=dark"));
//!
//! let store = HttpCookieStore::from_headers(&request, CookieConfig::default());
//! assert_eq!(store.get("theme").as_deref(), Some("dark"));
//!
//! store.set("theme", "light", None);
//! let headers = store.set_cookie_headers();
//! assert_eq!(headers.len(), 1);
//! ```

use crate::cookies::config::CookieConfig;
use crate::cookies::options::CookieOptions;
use crate::cookies::store::CookieStore;
use cookie::{Cookie, CookieJar};
use http::header::{HeaderMap, HeaderValue, COOKIE, SET_COOKIE};
use std::sync::{Mutex, MutexGuard, PoisonError};
use time::Duration;

#[derive(Debug, Default)]
pub struct HttpCookieStore {
    jar: Mutex<CookieJar>,
    config: CookieConfig,
}

impl HttpCookieStore {
    /// An empty store, as for a request that carried no cookies.
    pub fn new(config: CookieConfig) -> Self {
        Self {
            jar: Mutex::new(CookieJar::new()),
            config,
        }
    }

    /// Seed the store from every `Cookie` header in `headers`.
    ///
    /// Values are percent-decoded and may carry raw UTF-8. Pairs that fail to
    /// parse, or are not UTF-8, are skipped without affecting their neighbours.
    pub fn from_headers(headers: &HeaderMap, config: CookieConfig) -> Self {
        let mut jar = CookieJar::new();

        for header in headers.get_all(COOKIE) {
            for pair in header.as_bytes().split(|b| *b == b';') {
                let Ok(pair) = std::str::from_utf8(pair) else {
                    tracing::debug!("skipping non-UTF-8 request cookie");
                    continue;
                };
                let pair = pair.trim();
                if pair.is_empty() {
                    continue;
                }

                match Cookie::parse_encoded(pair) {
                    Ok(cookie) => jar.add_original(cookie.into_owned()),
                    Err(e) => tracing::debug!(error = %e, "skipping malformed request cookie"),
                }
            }
        }

        Self {
            jar: Mutex::new(jar),
            config,
        }
    }

    pub fn config(&self) -> &CookieConfig {
        &self.config
    }

    /// `Set-Cookie` values for every cookie written or removed through this store.
    pub fn set_cookie_headers(&self) -> Vec<HeaderValue> {
        self.jar()
            .delta()
            .filter_map(|cookie| match HeaderValue::from_str(&cookie.encoded().to_string()) {
                Ok(value) => Some(value),
                Err(e) => {
                    tracing::warn!(cookie = %cookie.name(), error = %e, "dropping unrenderable Set-Cookie");
                    None
                }
            })
            .collect()
    }

    /// Append [`set_cookie_headers`](Self::set_cookie_headers) to a response header map.
    pub fn write_set_cookie_headers(&self, headers: &mut HeaderMap) {
        for value in self.set_cookie_headers() {
            headers.append(SET_COOKIE, value);
        }
    }

    fn jar(&self) -> MutexGuard<'_, CookieJar> {
        // The jar holds no invariants a panicking writer could break.
        self.jar.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl CookieStore for HttpCookieStore {
    fn contains(&self, key: &str) -> bool {
        self.jar().get(key).is_some()
    }

    fn get(&self, key: &str) -> Option<String> {
        self.jar().get(key).map(|c| c.value().to_string())
    }

    fn set(&self, key: &str, value: &str, expire: Option<Duration>) {
        let options = CookieOptions {
            max_age: expire,
            ..self.config.default_options()
        };
        self.set_with_options(key, value, &options);
    }

    fn set_with_options(&self, key: &str, value: &str, options: &CookieOptions) {
        tracing::trace!(key, "queueing Set-Cookie");
        self.jar().add(options.build_cookie(key, value));
    }

    fn remove(&self, key: &str) {
        let mut removal = Cookie::new(key.to_owned(), "");
        if let Some(path) = &self.config.path {
            removal.set_path(path.clone());
        }
        if let Some(domain) = &self.config.domain {
            removal.set_domain(domain.clone());
        }

        tracing::trace!(key, "queueing cookie removal");
        self.jar().remove(removal);
    }
}
