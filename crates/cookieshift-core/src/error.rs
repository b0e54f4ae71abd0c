//! Error types for cookieshift.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    /// A jar cookie without a domain cannot be expressed in browser form.
    #[error("Missing domain: jar cookie '{key}' has no domain")]
    MissingDomain { key: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, Error>;
