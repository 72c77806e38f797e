use std::path::PathBuf;

use thiserror::Error;

/// Errors surfaced by the revealer and by deck loading.
#[derive(Debug, Error)]
pub enum RevealError {
    /// A delay was zero or negative.
    #[error("invalid configuration: {field} must be a positive number of milliseconds, got {value}")]
    InvalidConfiguration { field: &'static str, value: i64 },

    /// A deck without entries was asked to play.
    #[error("scenario sequence is empty")]
    EmptySequence,

    #[error("failed to read deck {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse TOML deck: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("failed to parse JSON deck: {0}")]
    Json(#[from] serde_json::Error),

    #[error("unsupported deck format '{0}' (expected .toml or .json)")]
    UnsupportedFormat(String),

    #[error("unknown built-in deck '{0}'")]
    UnknownDeck(String),
}

pub type Result<T> = std::result::Result<T, RevealError>;
