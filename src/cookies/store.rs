//! The cookie store seam.
//!
//! A **cookie store** is the raw key/value mechanism a
//! [`CookieManager`](crate::manager::CookieManager) delegates to. It only ever
//! sees strings; encoding and decoding happen in the manager.
//!
//! Two implementations ship with the crate:
//! - [`MemoryCookieStore`](crate::cookies::memory::MemoryCookieStore): in-memory,
//!   expiry-aware. Useful in tests and for non-HTTP callers.
//! - [`HttpCookieStore`](crate::cookies::httpjar::HttpCookieStore): request-scoped,
//!   reads the request `Cookie` header and collects `Set-Cookie` output.
//!
//! Methods take `&self`, so implementations handle their own interior
//! mutability. Nothing here is atomic across calls.

use crate::cookies::options::CookieOptions;
use std::sync::Arc;
use time::Duration;

pub trait CookieStore {
    /// Whether a cookie named `key` is currently present.
    fn contains(&self, key: &str) -> bool;

    /// The raw value of `key`, if present.
    fn get(&self, key: &str) -> Option<String>;

    /// Writes `value` under `key`. `expire` of `None` makes a session cookie.
    fn set(&self, key: &str, value: &str, expire: Option<Duration>);

    /// Writes `value` under `key` with an explicit attribute set.
    fn set_with_options(&self, key: &str, value: &str, options: &CookieOptions);

    /// Removes `key`. Removing a missing key is a no-op.
    fn remove(&self, key: &str);
}

impl<S: CookieStore + ?Sized> CookieStore for &S {
    fn contains(&self, key: &str) -> bool {
        (**self).contains(key)
    }

    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str, expire: Option<Duration>) {
        (**self).set(key, value, expire)
    }

    fn set_with_options(&self, key: &str, value: &str, options: &CookieOptions) {
        (**self).set_with_options(key, value, options)
    }

    fn remove(&self, key: &str) {
        (**self).remove(key)
    }
}

impl<S: CookieStore + ?Sized> CookieStore for Box<S> {
    fn contains(&self, key: &str) -> bool {
        (**self).contains(key)
    }

    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str, expire: Option<Duration>) {
        (**self).set(key, value, expire)
    }

    fn set_with_options(&self, key: &str, value: &str, options: &CookieOptions) {
        (**self).set_with_options(key, value, options)
    }

    fn remove(&self, key: &str) {
        (**self).remove(key)
    }
}

impl<S: CookieStore + ?Sized> CookieStore for Arc<S> {
    fn contains(&self, key: &str) -> bool {
        (**self).contains(key)
    }

    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str, expire: Option<Duration>) {
        (**self).set(key, value, expire)
    }

    fn set_with_options(&self, key: &str, value: &str, options: &CookieOptions) {
        (**self).set_with_options(key, value, options)
    }

    fn remove(&self, key: &str) {
        (**self).remove(key)
    }
}
