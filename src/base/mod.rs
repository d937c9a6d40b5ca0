//! Base types and error handling.
//!
//! - [`CookieError`](cookieerror::CookieError): codec failures with the cookie key attached
//! - [`CodecResultExt`](context::CodecResultExt): context helpers for `serde_json` results

pub mod context;
pub mod cookieerror;
