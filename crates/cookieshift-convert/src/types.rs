//! Cookie record shapes — the browser automation form and the cookie jar form.
//!
//! The two shapes never share an in-memory type; [`crate::convert`] is the
//! only bridge between them. Field names on the wire match each ecosystem
//! exactly.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use tracing::warn;

/// Browser-side expiry sentinel: the cookie never expires.
pub const BROWSER_NEVER_EXPIRES: f64 = -1.0;

/// Jar-side expiry sentinel: the cookie never expires.
pub const JAR_NEVER_EXPIRES: &str = "Infinity";

/// Same-site policy as spelled by the browser automation driver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BrowserSameSite {
    Strict,
    Lax,
    None,
}

impl BrowserSameSite {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Strict => "Strict",
            Self::Lax => "Lax",
            Self::None => "None",
        }
    }
}

/// Same-site policy as spelled by the cookie jar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JarSameSite {
    Strict,
    Lax,
    None,
}

impl JarSameSite {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Strict => "strict",
            Self::Lax => "lax",
            Self::None => "none",
        }
    }
}

impl From<BrowserSameSite> for JarSameSite {
    fn from(value: BrowserSameSite) -> Self {
        match value {
            BrowserSameSite::Strict => Self::Strict,
            BrowserSameSite::Lax => Self::Lax,
            BrowserSameSite::None => Self::None,
        }
    }
}

impl From<JarSameSite> for BrowserSameSite {
    fn from(value: JarSameSite) -> Self {
        match value {
            JarSameSite::Strict => Self::Strict,
            JarSameSite::Lax => Self::Lax,
            JarSameSite::None => Self::None,
        }
    }
}

impl std::fmt::Display for BrowserSameSite {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::fmt::Display for JarSameSite {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Cookie expiry, independent of either side's sentinel convention.
///
/// Sentinels (`-1` in browser form, `"Infinity"` in jar form) are only
/// produced and recognised at the boundary helpers below, so `Never` can
/// never leak into timestamp arithmetic.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Expiry {
    #[default]
    Never,
    At(DateTime<Utc>),
}

impl Expiry {
    /// Read a browser `expires` value (epoch seconds, fractional allowed).
    ///
    /// The timestamp is built from `seconds * 1000` and truncated toward zero
    /// at millisecond resolution only. Values with no representable
    /// timestamp (NaN, infinities, beyond the calendar range) are treated as
    /// never-expiring.
    pub fn from_browser_seconds(seconds: f64) -> Self {
        if seconds == BROWSER_NEVER_EXPIRES {
            return Self::Never;
        }
        let millis = (seconds * 1000.0).trunc();
        if !millis.is_finite() {
            warn!("Unrepresentable cookie expiry {}, treating as session-persistent", seconds);
            return Self::Never;
        }
        match DateTime::<Utc>::from_timestamp_millis(millis as i64) {
            Some(at) => Self::At(at),
            None => {
                warn!("Cookie expiry {} out of range, treating as session-persistent", seconds);
                Self::Never
            }
        }
    }

    /// Write a browser `expires` value: `-1` for `Never`, otherwise the
    /// integer epoch milliseconds of the timestamp.
    ///
    /// A real timestamp at exactly -1 ms is indistinguishable from the
    /// sentinel once written; it is emitted as `-1` with a warning.
    pub fn to_browser_millis(&self) -> f64 {
        match self {
            Self::Never => BROWSER_NEVER_EXPIRES,
            Self::At(at) => {
                let millis = at.timestamp_millis();
                if millis as f64 == BROWSER_NEVER_EXPIRES {
                    warn!("Cookie expiry {} collides with the never-expires sentinel", at);
                }
                millis as f64
            }
        }
    }

    pub fn timestamp_millis(&self) -> Option<i64> {
        match self {
            Self::Never => None,
            Self::At(at) => Some(at.timestamp_millis()),
        }
    }

    pub fn is_never(&self) -> bool {
        matches!(self, Self::Never)
    }
}

impl Serialize for Expiry {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Never => serializer.serialize_str(JAR_NEVER_EXPIRES),
            Self::At(at) => {
                serializer.serialize_str(&at.to_rfc3339_opts(SecondsFormat::Millis, true))
            }
        }
    }
}

impl<'de> Deserialize<'de> for Expiry {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        if raw == JAR_NEVER_EXPIRES {
            return Ok(Self::Never);
        }
        DateTime::parse_from_rfc3339(&raw)
            .map(|at| Self::At(at.with_timezone(&Utc)))
            .map_err(|e| {
                serde::de::Error::custom(format!("invalid cookie expiry '{}': {}", raw, e))
            })
    }
}

/// A cookie as supplied to / consumed by the browser automation driver.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BrowserCookie {
    pub name: String,
    pub value: String,
    pub domain: String,
    pub path: String,
    /// `-1` means the cookie never expires. Read as epoch seconds
    /// (fractional allowed); written by conversion as integer epoch
    /// milliseconds.
    pub expires: f64,
    #[serde(rename = "httpOnly")]
    pub http_only: bool,
    pub secure: bool,
    #[serde(default, skip_serializing_if = "Option::is_none", rename = "sameSite")]
    pub same_site: Option<BrowserSameSite>,

    // Read-only engine metadata. Accepted on input, never produced by
    // conversion.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub session: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none", rename = "sameParty")]
    pub same_party: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none", rename = "sourceScheme")]
    pub source_scheme: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none", rename = "sourcePort")]
    pub source_port: Option<i64>,
}

impl BrowserCookie {
    /// A non-secure, never-expiring cookie with no same-site policy and no
    /// engine metadata.
    pub fn new(
        name: impl Into<String>,
        value: impl Into<String>,
        domain: impl Into<String>,
        path: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            domain: domain.into(),
            path: path.into(),
            expires: BROWSER_NEVER_EXPIRES,
            http_only: false,
            secure: false,
            same_site: None,
            size: None,
            session: None,
            priority: None,
            same_party: None,
            source_scheme: None,
            source_port: None,
        }
    }

    /// Whether any engine-computed metadata field is present.
    pub fn has_engine_metadata(&self) -> bool {
        self.size.is_some()
            || self.session.is_some()
            || self.priority.is_some()
            || self.same_party.is_some()
            || self.source_scheme.is_some()
            || self.source_port.is_some()
    }
}

/// A cookie in the cookie jar's own record format.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JarCookie {
    pub key: String,
    pub value: String,
    /// The jar permits a domain-less cookie; the browser shape does not.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub domain: Option<String>,
    pub path: String,
    #[serde(default)]
    pub expires: Expiry,
    #[serde(default)]
    pub secure: bool,
    #[serde(default, rename = "httpOnly")]
    pub http_only: bool,
    #[serde(default, rename = "hostOnly")]
    pub host_only: bool,
    #[serde(default, skip_serializing_if = "Option::is_none", rename = "sameSite")]
    pub same_site: Option<JarSameSite>,
}

/// A cookie is host-only unless its domain carries a leading dot.
pub fn is_host_only(domain: &str) -> bool {
    !domain.starts_with('.')
}
