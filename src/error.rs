use std::path::PathBuf;

use thiserror::Error;

/// Errors from everything around the formatter. Formatting itself never fails.
#[derive(Debug, Error)]
pub enum Error {
    #[error("failed to access {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config: {0}")]
    Config(#[from] toml::de::Error),

    #[error("invalid transcript: {0}")]
    Transcript(#[source] serde_json::Error),

    #[error("failed to serialize output: {0}")]
    Json(#[source] serde_json::Error),

    #[error("currency symbol must not be empty")]
    InvalidCurrencySymbol,

    #[error("failed to build pattern: {0}")]
    Pattern(#[from] regex::Error),
}

impl Error {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::Io {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
