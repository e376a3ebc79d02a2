/// Failure taxonomy for a scan attempt
///
/// Variants carry plain strings so the error stays `Clone` and can travel
/// inside UI messages. Every variant is caught at the submission boundary
/// and shown as a single blocking alert.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ScanError {
    /// Submit was pressed with no file selected; no request is sent.
    #[error("Please select an image first.")]
    NoImageSelected,

    /// The selected file could not be read back at submit time.
    #[error("could not read {path}: {reason}")]
    FileRead { path: String, reason: String },

    /// The request never completed (connectivity, DNS, TLS).
    #[error("{0}")]
    Transport(String),

    /// The backend answered with a non-success status.
    #[error("{0}")]
    Api(String),

    /// The response body was not the JSON we expect.
    #[error("the server returned an unreadable response")]
    MalformedResponse,
}

impl From<reqwest::Error> for ScanError {
    fn from(err: reqwest::Error) -> Self {
        ScanError::Transport(err.to_string())
    }
}
