use cookie::Cookie;
use time::{Duration, OffsetDateTime};

/// SameSite attribute of an outgoing cookie.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SameSite {
    NoRestriction,
    Lax,
    Strict,
}

impl From<SameSite> for cookie::SameSite {
    fn from(value: SameSite) -> Self {
        match value {
            SameSite::NoRestriction => cookie::SameSite::None,
            SameSite::Lax => cookie::SameSite::Lax,
            SameSite::Strict => cookie::SameSite::Strict,
        }
    }
}

/// Attributes attached to a cookie when it is written.
///
/// `None` fields are left off the `Set-Cookie` line entirely. When both
/// `max_age` and `expires` are set, `max_age` decides the expiration time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CookieOptions {
    pub path: Option<String>,
    pub domain: Option<String>,
    pub secure: bool,
    pub http_only: bool,
    pub same_site: Option<SameSite>,
    pub expires: Option<OffsetDateTime>,
    pub max_age: Option<Duration>,
}

impl CookieOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }

    pub fn domain(mut self, domain: impl Into<String>) -> Self {
        self.domain = Some(domain.into());
        self
    }

    pub fn secure(mut self, secure: bool) -> Self {
        self.secure = secure;
        self
    }

    pub fn http_only(mut self, http_only: bool) -> Self {
        self.http_only = http_only;
        self
    }

    pub fn same_site(mut self, same_site: SameSite) -> Self {
        self.same_site = Some(same_site);
        self
    }

    pub fn expires(mut self, expires: OffsetDateTime) -> Self {
        self.expires = Some(expires);
        self
    }

    pub fn max_age(mut self, max_age: Duration) -> Self {
        self.max_age = Some(max_age);
        self
    }

    /// Absolute expiration time for a cookie written at `now`.
    ///
    /// `None` means a session cookie, or a `max_age` too large to represent.
    pub fn expiration_time(&self, now: OffsetDateTime) -> Option<OffsetDateTime> {
        match self.max_age {
            Some(max_age) => now.checked_add(max_age),
            None => self.expires,
        }
    }

    pub(crate) fn build_cookie(&self, name: &str, value: &str) -> Cookie<'static> {
        let mut builder = Cookie::build((name.to_owned(), value.to_owned()))
            .secure(self.secure)
            .http_only(self.http_only);

        if let Some(path) = &self.path {
            builder = builder.path(path.clone());
        }
        if let Some(domain) = &self.domain {
            builder = builder.domain(domain.clone());
        }
        if let Some(same_site) = self.same_site {
            builder = builder.same_site(same_site.into());
        }
        if let Some(max_age) = self.max_age {
            builder = builder.max_age(max_age);
        }
        if let Some(expires) = self.expires {
            builder = builder.expires(expires);
        }

        builder.build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_max_age_wins_over_expires() {
        let now = OffsetDateTime::now_utc();
        let options = CookieOptions::new()
            .expires(now + Duration::days(30))
            .max_age(Duration::minutes(5));

        assert_eq!(options.expiration_time(now), Some(now + Duration::minutes(5)));
    }

    #[test]
    fn test_session_cookie_has_no_expiration() {
        let options = CookieOptions::new().path("/");
        assert_eq!(options.expiration_time(OffsetDateTime::now_utc()), None);
    }

    #[test]
    fn test_build_cookie_attributes() {
        let cookie = CookieOptions::new()
            .path("/app")
            .domain("example.com")
            .secure(true)
            .http_only(true)
            .same_site(SameSite::Strict)
            .max_age(Duration::hours(1))
            .build_cookie("theme", "dark");

        assert_eq!(cookie.name(), "theme");
        assert_eq!(cookie.value(), "dark");
        assert_eq!(cookie.path(), Some("/app"));
        assert_eq!(cookie.domain(), Some("example.com"));
        assert_eq!(cookie.secure(), Some(true));
        assert_eq!(cookie.http_only(), Some(true));
        assert_eq!(cookie.same_site(), Some(cookie::SameSite::Strict));
        assert_eq!(cookie.max_age(), Some(Duration::hours(1)));
    }

    #[test]
    fn test_build_cookie_omits_unset_attributes() {
        let cookie = CookieOptions::new().build_cookie("a", "b");
        assert_eq!(cookie.path(), None);
        assert_eq!(cookie.domain(), None);
        assert_eq!(cookie.same_site(), None);
        assert_eq!(cookie.max_age(), None);
        assert!(cookie.expires().is_none());
    }
}
