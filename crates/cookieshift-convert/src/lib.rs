//! Cookie shape translation — browser automation cookies to cookie jar
//! records and back.
//!
//! Two pure functions form the core: [`to_jar_format`] and
//! [`to_browser_format`]. Both are stateless and safe to call from any
//! number of threads.

pub mod convert;
pub mod types;

pub use convert::{
    to_browser_format, to_browser_format_all, to_jar_format, to_jar_format_all,
    BROWSER_DEFAULT_SAME_SITE, JAR_DEFAULT_SAME_SITE,
};
pub use types::*;
