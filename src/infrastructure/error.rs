// src/infrastructure/error.rs
use thiserror::Error;

pub type SourceResult<T> = Result<T, SourceError>;

/// Failures inside a content adapter. These never cross the
/// `ContentSource` boundary: adapters log them and degrade to "no content".
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("request to content source failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("content source answered {status} for {url}")]
    Status { status: u16, url: String },

    #[error("malformed content payload: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("invalid content source url: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("failed to read content file: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid front-matter in {path}: {reason}")]
    FrontMatter { path: String, reason: String },
}

impl SourceError {
    /// True for a 404 or a missing file, which callers treat as absence
    /// rather than a failure.
    pub fn is_not_found(&self) -> bool {
        match self {
            Self::Status { status, .. } => *status == 404,
            Self::Io(err) => err.kind() == std::io::ErrorKind::NotFound,
            _ => false,
        }
    }
}
