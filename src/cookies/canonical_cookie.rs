use crate::cookies::options::CookieOptions;
use time::OffsetDateTime;

/// Represents one stored cookie.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CanonicalCookie {
    pub name: String,
    pub value: String,
    pub creation_time: OffsetDateTime,
    pub expiration_time: Option<OffsetDateTime>,
    pub options: CookieOptions,
}

impl CanonicalCookie {
    pub fn new(
        name: String,
        value: String,
        creation_time: OffsetDateTime,
        expiration_time: Option<OffsetDateTime>,
    ) -> Self {
        Self {
            name,
            value,
            creation_time,
            expiration_time,
            options: CookieOptions::default(),
        }
    }

    /// Build a cookie written at `now` with the given attributes.
    pub fn with_options(
        name: String,
        value: String,
        creation_time: OffsetDateTime,
        options: CookieOptions,
    ) -> Self {
        Self {
            name,
            value,
            creation_time,
            expiration_time: options.expiration_time(creation_time),
            options,
        }
    }

    /// A cookie whose expiration time has been reached is expired, so a
    /// zero-length lifetime never survives past the write.
    pub fn is_expired(&self, current_time: OffsetDateTime) -> bool {
        match self.expiration_time {
            Some(expiry) => expiry <= current_time,
            None => false, // Session cookie
        }
    }

    pub fn is_session(&self) -> bool {
        self.expiration_time.is_none()
    }
}
