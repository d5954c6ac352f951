use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Failures that stop a validation run before any content rule is checked.
#[derive(Debug, Error)]
pub enum ContentError {
    #[error("file {} not found", .path.display())]
    NotFound { path: PathBuf },

    #[error("unable to read {}: {source}", .path.display())]
    Read { path: PathBuf, source: io::Error },

    #[error("{} is not a valid JSON file: {source}", .path.display())]
    Json {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("invalid rules file {}: {source}", .path.display())]
    Rules {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("invalid pattern '{pattern}': {source}")]
    Pattern {
        pattern: String,
        source: regex::Error,
    },
}

impl ContentError {
    pub(crate) fn from_io(path: PathBuf, source: io::Error) -> Self {
        if source.kind() == io::ErrorKind::NotFound {
            ContentError::NotFound { path }
        } else {
            ContentError::Read { path, source }
        }
    }
}
