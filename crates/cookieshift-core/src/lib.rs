//! cookieshift core — shared error taxonomy and configuration.

pub mod config;
pub mod error;

pub use config::CookieShiftConfig;
pub use error::{Error, Result};
