use crate::cookies::canonical_cookie::CanonicalCookie;
use crate::cookies::options::CookieOptions;
use crate::cookies::store::CookieStore;
use dashmap::DashMap;
use std::sync::Arc;
use time::{Duration, OffsetDateTime};

/// In-memory cookie store with expiry.
///
/// Cookies are keyed by name only. Expired cookies are invisible to
/// [`contains`](CookieStore::contains) and [`get`](CookieStore::get) and are
/// dropped the next time they are looked up. Clones share the same storage.
#[derive(Debug, Clone)]
pub struct MemoryCookieStore {
    // Store: Map<Name, Cookie>
    store: Arc<DashMap<String, CanonicalCookie>>,
}

impl Default for MemoryCookieStore {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryCookieStore {
    pub fn new() -> Self {
        Self {
            store: Arc::new(DashMap::new()),
        }
    }

    pub fn set_canonical_cookie(&self, cookie: CanonicalCookie) {
        self.store.insert(cookie.name.clone(), cookie);
    }

    /// Snapshot of the live cookie stored under `key`.
    pub fn cookie(&self, key: &str) -> Option<CanonicalCookie> {
        if self.purge_if_expired(key, OffsetDateTime::now_utc()) {
            return None;
        }
        self.store.get(key).map(|c| c.value().clone())
    }

    /// Number of stored cookies, including expired ones not yet purged.
    pub fn len(&self) -> usize {
        self.store.len()
    }

    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    pub fn clear(&self) {
        self.store.clear();
    }

    /// Drop every expired cookie. Returns how many were removed.
    pub fn purge_expired(&self) -> usize {
        let now = OffsetDateTime::now_utc();
        let before = self.store.len();
        self.store.retain(|_, c| !c.is_expired(now));
        let purged = before.saturating_sub(self.store.len());
        if purged > 0 {
            tracing::debug!(count = purged, "purged expired cookies");
        }
        purged
    }

    fn purge_if_expired(&self, key: &str, now: OffsetDateTime) -> bool {
        let purged = self.store.remove_if(key, |_, c| c.is_expired(now)).is_some();
        if purged {
            tracing::trace!(key, "dropping expired cookie");
        }
        purged
    }
}

impl CookieStore for MemoryCookieStore {
    fn contains(&self, key: &str) -> bool {
        if self.purge_if_expired(key, OffsetDateTime::now_utc()) {
            return false;
        }
        self.store.contains_key(key)
    }

    fn get(&self, key: &str) -> Option<String> {
        if self.purge_if_expired(key, OffsetDateTime::now_utc()) {
            return None;
        }
        self.store.get(key).map(|c| c.value.clone())
    }

    fn set(&self, key: &str, value: &str, expire: Option<Duration>) {
        let options = CookieOptions {
            max_age: expire,
            ..CookieOptions::default()
        };
        self.set_with_options(key, value, &options);
    }

    fn set_with_options(&self, key: &str, value: &str, options: &CookieOptions) {
        let now = OffsetDateTime::now_utc();
        tracing::trace!(key, "storing cookie");
        self.set_canonical_cookie(CanonicalCookie::with_options(
            key.to_owned(),
            value.to_owned(),
            now,
            options.clone(),
        ));
    }

    fn remove(&self, key: &str) {
        if self.store.remove(key).is_some() {
            tracing::trace!(key, "removed cookie");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_get_remove() {
        let store = MemoryCookieStore::new();
        assert!(!store.contains("sid"));
        assert_eq!(store.get("sid"), None);

        store.set("sid", "abc", None);
        assert!(store.contains("sid"));
        assert_eq!(store.get("sid").as_deref(), Some("abc"));

        store.remove("sid");
        assert!(!store.contains("sid"));
        assert!(store.is_empty());
    }

    #[test]
    fn test_remove_missing_is_noop() {
        let store = MemoryCookieStore::new();
        store.remove("nothing");
        assert!(store.is_empty());
    }

    #[test]
    fn test_overwrite_replaces_value() {
        let store = MemoryCookieStore::new();
        store.set("theme", "light", None);
        store.set("theme", "dark", None);
        assert_eq!(store.len(), 1);
        assert_eq!(store.get("theme").as_deref(), Some("dark"));
    }

    #[test]
    fn test_zero_lifetime_expires_immediately() {
        let store = MemoryCookieStore::new();
        store.set("flash", "saved", Some(Duration::ZERO));

        assert!(!store.contains("flash"));
        assert_eq!(store.get("flash"), None);
        // Lookup purged it.
        assert!(store.is_empty());
    }

    #[test]
    fn test_expired_via_options() {
        let store = MemoryCookieStore::new();
        let past = OffsetDateTime::now_utc() - Duration::hours(1);
        store.set_with_options("old", "v", &CookieOptions::new().expires(past));
        assert!(!store.contains("old"));
    }

    #[test]
    fn test_options_are_recorded() {
        let store = MemoryCookieStore::new();
        let options = CookieOptions::new()
            .path("/cart")
            .secure(true)
            .max_age(Duration::days(7));
        store.set_with_options("cart", "[]", &options);

        let cookie = store.cookie("cart").unwrap();
        assert_eq!(cookie.options, options);
        assert!(cookie.expiration_time.is_some());
    }

    #[test]
    fn test_purge_expired() {
        let store = MemoryCookieStore::new();
        store.set("live", "1", Some(Duration::hours(1)));
        store.set("dead", "1", Some(Duration::seconds(-1)));
        store.set("session", "1", None);

        assert_eq!(store.purge_expired(), 1);
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_clones_share_storage() {
        let a = MemoryCookieStore::new();
        let b = a.clone();
        a.set("k", "v", None);
        assert_eq!(b.get("k").as_deref(), Some("v"));
    }

    #[test]
    fn test_set_canonical_cookie() {
        let store = MemoryCookieStore::new();
        let now = OffsetDateTime::now_utc();
        store.set_canonical_cookie(CanonicalCookie::new(
            "sid".into(),
            "abc".into(),
            now,
            Some(now + Duration::hours(1)),
        ));
        store.set_canonical_cookie(CanonicalCookie::new(
            "gone".into(),
            "x".into(),
            now - Duration::hours(2),
            Some(now - Duration::hours(1)),
        ));

        assert_eq!(store.get("sid").as_deref(), Some("abc"));
        assert!(!store.contains("gone"));
        assert_eq!(store.cookie("sid").unwrap().creation_time, now);
    }
}
