//! Cookie value codecs.
//!
//! The text written to a cookie is chosen at compile time by the value's
//! type:
//!
//! | Type | Cookie text |
//! |------|-------------|
//! | `String`, `&str` | the string itself, unencoded |
//! | [`Json<T>`] | `serde_json` encoding of `T` |
//! | `bool`, integers, floats | `serde_json` encoding (same text as `Display`) |

use serde::de::DeserializeOwned;
use serde::Serialize;
use std::borrow::Cow;
use std::ops::{Deref, DerefMut};

/// A value that can be written into a cookie.
pub trait CookieEncode {
    fn encode(&self) -> Result<Cow<'_, str>, serde_json::Error>;
}

/// A value that can be written into a cookie and read back out.
pub trait CookieValue: CookieEncode + Sized {
    fn decode(raw: &str) -> Result<Self, serde_json::Error>;
}

impl CookieEncode for str {
    fn encode(&self) -> Result<Cow<'_, str>, serde_json::Error> {
        Ok(Cow::Borrowed(self))
    }
}

impl CookieEncode for String {
    fn encode(&self) -> Result<Cow<'_, str>, serde_json::Error> {
        Ok(Cow::Borrowed(self.as_str()))
    }
}

impl CookieValue for String {
    fn decode(raw: &str) -> Result<Self, serde_json::Error> {
        Ok(raw.to_owned())
    }
}

/// Structured cookie value, stored as JSON text.
///
/// ```
/// use cookiemanager::cookies::value::{CookieEncode, CookieValue, Json};
///
/// let cart = Json(vec![3u32, 5, 8]);
/// assert_eq!(cart.encode().unwrap(), "[3,5,8]");
///
/// let back = Json::<Vec<u32>>::decode("[3,5,8]").unwrap();
/// assert_eq!(back.into_inner(), vec![3, 5, 8]);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Json<T>(pub T);

impl<T> Json<T> {
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T> From<T> for Json<T> {
    fn from(value: T) -> Self {
        Json(value)
    }
}

impl<T> Deref for Json<T> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.0
    }
}

impl<T> DerefMut for Json<T> {
    fn deref_mut(&mut self) -> &mut T {
        &mut self.0
    }
}

impl<T: Serialize> CookieEncode for Json<T> {
    fn encode(&self) -> Result<Cow<'_, str>, serde_json::Error> {
        serde_json::to_string(&self.0).map(Cow::Owned)
    }
}

impl<T: Serialize + DeserializeOwned> CookieValue for Json<T> {
    fn decode(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw).map(Json)
    }
}

macro_rules! json_scalar {
    ($($ty:ty),* $(,)?) => {
        $(
            impl CookieEncode for $ty {
                fn encode(&self) -> Result<Cow<'_, str>, serde_json::Error> {
                    serde_json::to_string(self).map(Cow::Owned)
                }
            }

            impl CookieValue for $ty {
                fn decode(raw: &str) -> Result<Self, serde_json::Error> {
                    serde_json::from_str(raw)
                }
            }
        )*
    };
}

json_scalar!(bool, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64);

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Profile {
        name: String,
        theme: Option<String>,
    }

    #[test]
    fn test_string_is_not_quoted() {
        let value = "hello".to_string();
        assert_eq!(value.encode().unwrap(), "hello");
        assert_eq!(String::decode("{not json").unwrap(), "{not json");
    }

    #[test]
    fn test_str_borrows() {
        let encoded = "abc".encode().unwrap();
        assert!(matches!(encoded, Cow::Borrowed("abc")));
    }

    #[test]
    fn test_json_struct() {
        let profile = Json(Profile {
            name: "ada".into(),
            theme: None,
        });
        let text = profile.encode().unwrap();
        assert_eq!(text, r#"{"name":"ada","theme":null}"#);
        assert_eq!(Json::<Profile>::decode(&text).unwrap(), profile);
    }

    #[test]
    fn test_json_string_is_quoted() {
        // Unlike a bare String, Json<String> goes through the codec.
        assert_eq!(Json("hi".to_string()).encode().unwrap(), "\"hi\"");
    }

    #[test]
    fn test_scalars() {
        assert_eq!(42u32.encode().unwrap(), "42");
        assert_eq!(u32::decode("42").unwrap(), 42);
        assert!(bool::decode("true").unwrap());
        assert_eq!(f64::decode("1.5").unwrap(), 1.5);
        assert!(i32::decode("forty-two").is_err());
    }

    #[test]
    fn test_json_deref() {
        let mut ids = Json(vec![1, 2]);
        ids.push(3);
        assert_eq!(ids.len(), 3);
    }
}
