//! Error types for persistence and configuration.

use thiserror::Error;

/// Failure reading or writing a persisted value.
///
/// Never surfaced to the user: callers log it and fall back to the default
/// (empty favorites, signed out).
#[derive(Debug, Error)]
pub enum PersistError {
    #[error("malformed value under `{key}`: {source}")]
    Malformed {
        key: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("failed to encode value for `{key}`: {source}")]
    Encode {
        key: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Failure parsing `storyswap.toml`.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),
}
