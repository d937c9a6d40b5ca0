//! # cookiemanager
//!
//! Typed, serialization-transparent access to HTTP cookies.
//!
//! `cookiemanager` lets application code treat cookies as a typed key/value
//! store. Strings go in and out untouched; structured values are written as
//! JSON and decoded on read. A get-or-set accessor memoizes computed values
//! in the cookie itself.
//!
//! ## Features
//!
//! - **Typed access**: raw text or JSON, picked at compile time by the value type
//! - **Get-or-set**: compute a value only when the cookie is missing
//! - **Lifetimes**: session cookies, a simple duration, or a full attribute set
//! - **Pluggable stores**: in-memory with expiry, or a request-scoped HTTP jar
//!
//! ## Quick Start
//!
//! ```rust
//! use cookiemanager::cookies::config::CookieConfig;
//! use cookiemanager::cookies::httpjar::HttpCookieStore;
//! use cookiemanager::cookies::value::Json;
//! use cookiemanager::manager::CookieManager;
//! use http::HeaderMap;
//! use time::Duration;
//!
//! let request_headers = HeaderMap::new();
//! let cookies = CookieManager::new(HttpCookieStore::from_headers(
//!     &request_headers,
//!     CookieConfig::default(),
//! ));
//!
//! let cart: Json<Vec<u32>> = cookies.get_or_set("cart", || Json(vec![]), Some(Duration::days(7)))?;
//! assert!(cart.is_empty());
//!
//! let mut response_headers = HeaderMap::new();
//! cookies.store().write_set_cookie_headers(&mut response_headers);
//! assert!(response_headers.contains_key(http::header::SET_COOKIE));
//! # Ok::<(), cookiemanager::base::cookieerror::CookieError>(())
//! ```
//!
//! ## Modules
//!
//! - [`base`] - Error types and context helpers
//! - [`cookies`] - Cookie stores, options and value codecs
//! - [`manager`] - The typed [`CookieManager`](manager::CookieManager)

pub mod base;
pub mod cookies;
pub mod manager;
