//! Shape translation between browser cookies and jar cookies.
//!
//! Both directions copy an explicit allow-list of fields into a fresh
//! record. Browser engine metadata (`size`, `session`, `priority`,
//! `sameParty`, `sourceScheme`, `sourcePort`) has no jar counterpart and is
//! dropped.

use cookieshift_core::{Error, Result};
use tracing::debug;

use crate::types::{is_host_only, BrowserCookie, BrowserSameSite, Expiry, JarCookie, JarSameSite};

/// Same-site policy the jar assumes when the browser cookie has none.
pub const JAR_DEFAULT_SAME_SITE: JarSameSite = JarSameSite::None;

/// Same-site policy the browser driver assumes when the jar cookie has none.
pub const BROWSER_DEFAULT_SAME_SITE: BrowserSameSite = BrowserSameSite::Lax;

/// Convert a browser cookie into jar form. Never fails.
pub fn to_jar_format(cookie: &BrowserCookie) -> JarCookie {
    let jar = JarCookie {
        key: cookie.name.clone(),
        value: cookie.value.clone(),
        domain: Some(cookie.domain.clone()),
        path: cookie.path.clone(),
        expires: Expiry::from_browser_seconds(cookie.expires),
        secure: cookie.secure,
        http_only: cookie.http_only,
        host_only: is_host_only(&cookie.domain),
        same_site: Some(
            cookie
                .same_site
                .map(JarSameSite::from)
                .unwrap_or(JAR_DEFAULT_SAME_SITE),
        ),
    };
    if cookie.has_engine_metadata() {
        debug!("Dropping engine metadata of browser cookie {}", cookie.name);
    }
    debug!(
        "Converted browser cookie {} ({}) to jar form, hostOnly={}, session={}",
        cookie.name,
        cookie.domain,
        jar.host_only,
        jar.expires.is_never()
    );
    jar
}

/// Convert a jar cookie into browser form.
///
/// Fails with [`Error::MissingDomain`] when the jar cookie has no domain.
pub fn to_browser_format(cookie: &JarCookie) -> Result<BrowserCookie> {
    let domain = cookie.domain.clone().ok_or_else(|| Error::MissingDomain {
        key: cookie.key.clone(),
    })?;

    let mut browser = BrowserCookie::new(
        cookie.key.clone(),
        cookie.value.clone(),
        domain,
        cookie.path.clone(),
    );
    browser.expires = cookie.expires.to_browser_millis();
    browser.http_only = cookie.http_only;
    browser.secure = cookie.secure;
    browser.same_site = Some(
        cookie
            .same_site
            .map(BrowserSameSite::from)
            .unwrap_or(BROWSER_DEFAULT_SAME_SITE),
    );

    debug!(
        "Converted jar cookie {} ({}) to browser form",
        browser.name, browser.domain
    );
    Ok(browser)
}

/// Convert a batch of browser cookies into jar form.
pub fn to_jar_format_all(cookies: &[BrowserCookie]) -> Vec<JarCookie> {
    cookies.iter().map(to_jar_format).collect()
}

/// Convert a batch of jar cookies into browser form.
///
/// All or nothing: the first failing cookie aborts the batch.
pub fn to_browser_format_all(cookies: &[JarCookie]) -> Result<Vec<BrowserCookie>> {
    cookies.iter().map(to_browser_format).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session_id() -> BrowserCookie {
        let mut cookie = BrowserCookie::new("session_id", "abc", "example.com", "/");
        cookie.expires = 1758122904.332952;
        cookie.secure = true;
        cookie
    }

    #[test]
    fn test_to_jar_format_example() {
        let jar = to_jar_format(&session_id());
        assert_eq!(jar.key, "session_id");
        assert_eq!(jar.value, "abc");
        assert_eq!(jar.domain.as_deref(), Some("example.com"));
        assert_eq!(jar.path, "/");
        assert!(jar.host_only);
        assert!(jar.secure);
        assert!(!jar.http_only);
        assert_eq!(jar.same_site, Some(JarSameSite::None));
        assert_eq!(jar.expires.timestamp_millis(), Some(1758122904332));
    }

    #[test]
    fn test_to_browser_format_example() {
        let browser = to_browser_format(&to_jar_format(&session_id())).unwrap();
        assert_eq!(browser.expires, 1758122904332.0);
        assert_eq!(browser.same_site, Some(BrowserSameSite::None));
        assert_eq!(browser.name, "session_id");
        assert!(browser.secure);
    }

    #[test]
    fn test_dot_domain_is_not_host_only() {
        let cookie = BrowserCookie::new("a", "b", ".example.com", "/");
        assert!(!to_jar_format(&cookie).host_only);
    }

    #[test]
    fn test_never_expiring_sentinels() {
        let cookie = BrowserCookie::new("a", "b", "example.com", "/");
        let jar = to_jar_format(&cookie);
        assert_eq!(jar.expires, Expiry::Never);
        assert_eq!(to_browser_format(&jar).unwrap().expires, -1.0);
    }

    #[test]
    fn test_same_site_is_lowercased() {
        for (browser, jar) in [
            (BrowserSameSite::Strict, JarSameSite::Strict),
            (BrowserSameSite::Lax, JarSameSite::Lax),
            (BrowserSameSite::None, JarSameSite::None),
        ] {
            let mut cookie = BrowserCookie::new("a", "b", "example.com", "/");
            cookie.same_site = Some(browser);
            assert_eq!(to_jar_format(&cookie).same_site, Some(jar));
        }
    }

    #[test]
    fn test_same_site_defaults_differ_per_direction() {
        let jar = to_jar_format(&BrowserCookie::new("a", "b", "example.com", "/"));
        assert_eq!(jar.same_site, Some(JarSameSite::None));

        let bare = JarCookie {
            same_site: None,
            ..jar
        };
        let browser = to_browser_format(&bare).unwrap();
        assert_eq!(browser.same_site, Some(BrowserSameSite::Lax));
    }

    #[test]
    fn test_missing_domain_fails() {
        let mut jar = to_jar_format(&session_id());
        jar.domain = None;
        match to_browser_format(&jar) {
            Err(Error::MissingDomain { key }) => assert_eq!(key, "session_id"),
            other => panic!("expected MissingDomain, got {:?}", other),
        }
    }

    #[test]
    fn test_host_only_is_recomputed_not_copied() {
        let mut jar = to_jar_format(&BrowserCookie::new("a", "b", ".example.com", "/"));
        jar.host_only = true;
        let back = to_jar_format(&to_browser_format(&jar).unwrap());
        assert!(!back.host_only);
    }

    #[test]
    fn test_batch_is_all_or_nothing() {
        let good = to_jar_format(&session_id());
        let mut bad = good.clone();
        bad.domain = None;

        assert_eq!(to_browser_format_all(&[good.clone(), good.clone()]).unwrap().len(), 2);
        assert!(to_browser_format_all(&[good, bad]).is_err());
        assert!(to_jar_format_all(&[]).is_empty());
    }
}
