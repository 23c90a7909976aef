// src/error.rs
use thiserror::Error;

/// One failed transport attempt.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum NetError {
    #[error("invalid URL {url}: {reason}")]
    BadUrl { url: String, reason: String },

    #[error("request to {url} failed: {reason}")]
    Request { url: String, reason: String },
}

impl NetError {
    pub fn url(&self) -> &str {
        match self {
            NetError::BadUrl { url, .. }
            | NetError::Request { url, .. } => url,
        }
    }
}

/// Anything that stops a load. All variants collapse to one message in the UI.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum LoadError {
    #[error(transparent)]
    Network(#[from] NetError),

    #[error("data table not found (tried: {})", .tried.join(", "))]
    TableNotFound { tried: Vec<String> },
}

pub type LoadResult<T> = Result<T, LoadError>;
