//! Error types for the octodir library.
//! Covers nested lookup failures, transport failures, and payload shape errors.

use reqwest::StatusCode;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum OctodirError {
    /// A nested lookup could not resolve a key. Carries the first key that
    /// failed, not the full remaining path.
    #[error("key {0:?} not found")]
    MissingKey(String),

    #[error("fetch failed: {0}")]
    Fetch(#[from] reqwest::Error),

    #[error("fetch failed: HTTP {status} for {url}")]
    Status { status: StatusCode, url: String },

    #[error("invalid JSON in response: {0}")]
    Json(#[from] serde_json::Error),

    #[error("unexpected type for {0}")]
    UnexpectedType(String),

    #[error("invalid API token")]
    InvalidToken,
}

pub type Result<T> = std::result::Result<T, OctodirError>;
