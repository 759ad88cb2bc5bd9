//! Poll service error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum PollError {
    #[error("poll service returned status {status}: {message}")]
    Api { status: u16, message: String },

    #[error("no poll found for id '{0}'")]
    NotFound(String),

    #[error("unrecognized selection value '{0}'")]
    UnknownSelectionValue(String),

    #[error("failed to decode poll service response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),
}
