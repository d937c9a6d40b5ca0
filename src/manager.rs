//! Typed access to a [`CookieStore`].
//!
//! [`CookieManager`] encodes values on the way in and decodes them on the way
//! out. Which encoding applies is fixed by the value's [`CookieValue`] impl:
//! strings are stored verbatim, [`Json<T>`](crate::cookies::value::Json) and
//! scalars as JSON text.
//!
//! ```
//! use cookiemanager::cookies::memory::MemoryCookieStore;
//! use cookiemanager::cookies::value::Json;
//! use cookiemanager::manager::CookieManager;
//!
//! let cookies = CookieManager::new(MemoryCookieStore::new());
//!
//! cookies.set("user", "ada", None)?;
//! let recent: Json<Vec<u32>> = cookies.get_or_set("recent", || Json(vec![7, 9]), None)?;
//!
//! assert_eq!(cookies.get::<String>("user")?, "ada");
//! assert_eq!(recent.0, vec![7, 9]);
//! assert_eq!(cookies.get::<u32>("missing")?, 0);
//! # Ok::<(), cookiemanager::base::cookieerror::CookieError>(())
//! ```

use crate::base::context::CodecResultExt;
use crate::base::cookieerror::{CookieError, CookieResult};
use crate::cookies::options::CookieOptions;
use crate::cookies::store::CookieStore;
use crate::cookies::value::{CookieEncode, CookieValue};
use time::Duration;

/// How a write sets the cookie's lifetime.
#[derive(Debug, Clone, Copy)]
enum Lifetime<'a> {
    Expires(Option<Duration>),
    Options(&'a CookieOptions),
}

/// Typed façade over a cookie store.
///
/// Holds nothing but the store. `get_or_set` is a check followed by a write,
/// so two callers racing on the same missing key may both run their acquirer;
/// the later write wins.
#[derive(Debug, Clone, Default)]
pub struct CookieManager<S> {
    store: S,
}

impl<S: CookieStore> From<S> for CookieManager<S> {
    fn from(store: S) -> Self {
        Self::new(store)
    }
}

impl<S: CookieStore> CookieManager<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_inner(self) -> S {
        self.store
    }

    pub fn contains(&self, key: &str) -> bool {
        self.store.contains(key)
    }

    /// Read `key` as `T`, falling back to `T::default()` when the cookie is
    /// missing or empty.
    ///
    /// # Errors
    /// [`CookieError::Decode`] if the stored text is not a valid `T`.
    pub fn get<T: CookieValue + Default>(&self, key: &str) -> CookieResult<T> {
        Ok(self.try_get(key)?.unwrap_or_default())
    }

    /// Like [`get`](Self::get), but reports a missing or empty cookie as `None`.
    pub fn try_get<T: CookieValue>(&self, key: &str) -> CookieResult<Option<T>> {
        match self.store.get(key) {
            Some(raw) if !raw.is_empty() => T::decode(&raw).decode_context(key).map(Some),
            _ => Ok(None),
        }
    }

    /// Write `value` under `key`. `expire` of `None` makes a session cookie.
    ///
    /// # Errors
    /// [`CookieError::Encode`] if `value` cannot be encoded; the store is not touched.
    pub fn set<V: CookieEncode + ?Sized>(
        &self,
        key: &str,
        value: &V,
        expire: Option<Duration>,
    ) -> CookieResult<()> {
        self.write(key, value, Lifetime::Expires(expire))
    }

    pub fn set_with_options<V: CookieEncode + ?Sized>(
        &self,
        key: &str,
        value: &V,
        options: &CookieOptions,
    ) -> CookieResult<()> {
        self.write(key, value, Lifetime::Options(options))
    }

    /// Return the value stored under `key`, or compute it with `acquirer`,
    /// store it and return it.
    ///
    /// `acquirer` runs at most once, and never when `key` already exists.
    pub fn get_or_set<T, F>(&self, key: &str, acquirer: F, expire: Option<Duration>) -> CookieResult<T>
    where
        T: CookieValue + Default,
        F: FnOnce() -> T,
    {
        self.get_or_insert_with(key, || Ok(acquirer()), Lifetime::Expires(expire))
    }

    pub fn get_or_set_with_options<T, F>(
        &self,
        key: &str,
        acquirer: F,
        options: &CookieOptions,
    ) -> CookieResult<T>
    where
        T: CookieValue + Default,
        F: FnOnce() -> T,
    {
        self.get_or_insert_with(key, || Ok(acquirer()), Lifetime::Options(options))
    }

    /// [`get_or_set`](Self::get_or_set) with a fallible acquirer.
    ///
    /// An acquirer error is returned as-is and nothing is stored.
    pub fn try_get_or_set<T, E, F>(
        &self,
        key: &str,
        acquirer: F,
        expire: Option<Duration>,
    ) -> Result<T, E>
    where
        T: CookieValue + Default,
        E: From<CookieError>,
        F: FnOnce() -> Result<T, E>,
    {
        self.get_or_insert_with(key, acquirer, Lifetime::Expires(expire))
    }

    pub fn try_get_or_set_with_options<T, E, F>(
        &self,
        key: &str,
        acquirer: F,
        options: &CookieOptions,
    ) -> Result<T, E>
    where
        T: CookieValue + Default,
        E: From<CookieError>,
        F: FnOnce() -> Result<T, E>,
    {
        self.get_or_insert_with(key, acquirer, Lifetime::Options(options))
    }

    pub fn remove(&self, key: &str) {
        self.store.remove(key);
    }

    fn write<V: CookieEncode + ?Sized>(
        &self,
        key: &str,
        value: &V,
        lifetime: Lifetime<'_>,
    ) -> CookieResult<()> {
        let encoded = value.encode().encode_context(key)?;
        match lifetime {
            Lifetime::Expires(expire) => self.store.set(key, &encoded, expire),
            Lifetime::Options(options) => self.store.set_with_options(key, &encoded, options),
        }
        Ok(())
    }

    fn get_or_insert_with<T, E, F>(
        &self,
        key: &str,
        acquirer: F,
        lifetime: Lifetime<'_>,
    ) -> Result<T, E>
    where
        T: CookieValue + Default,
        E: From<CookieError>,
        F: FnOnce() -> Result<T, E>,
    {
        if self.store.contains(key) {
            tracing::debug!(key, "cookie hit");
            return Ok(self.get(key)?);
        }

        tracing::debug!(key, "cookie miss, acquiring value");
        let value = acquirer()?;
        self.write(key, &value, lifetime)?;
        Ok(value)
    }
}
