//! Cookie stores, options and value codecs.
//!
//! # Architecture
//!
//! | Type | Responsibility |
//! |------|----------------|
//! | [`CookieStore`](store::CookieStore) | Raw key/value seam the manager delegates to |
//! | [`MemoryCookieStore`](memory::MemoryCookieStore) | In-memory store with expiry |
//! | [`HttpCookieStore`](httpjar::HttpCookieStore) | Request `Cookie` in, response `Set-Cookie` out |
//! | [`CanonicalCookie`](canonical_cookie::CanonicalCookie) | Single stored cookie |
//! | [`CookieOptions`](options::CookieOptions) | Attributes for an outgoing cookie |
//! | [`CookieConfig`](config::CookieConfig) | Defaults for the simple expiration path |
//! | [`CookieValue`](value::CookieValue) | Raw text vs JSON, picked by type |

pub mod canonical_cookie;
pub mod config;
pub mod httpjar;
pub mod memory;
pub mod options;
pub mod store;
pub mod value;
