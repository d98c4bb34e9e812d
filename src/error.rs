// src/error.rs
use thiserror::Error;

/// Failures that stop a command. No-data conditions (nothing stored, no
/// matches, no booths) are not errors; see `runner::Outcome`.
#[derive(Debug, Error)]
pub enum Error {
    /// Scrape requested on a page that is not a following list.
    #[error("not a following page: {url}")]
    InvalidContext { url: String },

    /// A scrape session is already active for this page.
    #[error("scraper is already running")]
    AlreadyRunning,

    #[error("fetch failed for {url}: {reason}")]
    Fetch { url: String, reason: String },

    #[error("config: {0}")]
    Config(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
