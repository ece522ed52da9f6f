// ================================================================
// File: dynmap-common/src/error.rs
// ================================================================

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Config parse error: {0}")]
    TomlDe(#[from] toml::de::Error),

    #[error("Config serialize error: {0}")]
    TomlSer(#[from] toml::ser::Error),

    #[error("Regex error: {0}")]
    Regex(#[from] regex::Error),

    #[error("Parse error: {0}")]
    Parse(String),
}

/// Why a Dynmap status fetch failed.
///
/// Callers show the same "server unreachable" reply for every variant; the
/// distinction only survives into the logs.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("invalid Dynmap base URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },

    #[error("transport error: {0}")]
    Transport(String),

    #[error("malformed status body: {0}")]
    MalformedBody(#[from] serde_json::Error),
}
