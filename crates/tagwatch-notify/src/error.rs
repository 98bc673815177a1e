use thiserror::Error;

/// Errors returned while sending the compliance report.
#[derive(Debug, Error)]
pub enum NotifyError {
    /// Network or TLS failure from the underlying HTTP client.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The email API answered with a non-2xx status.
    #[error("email API rejected the message (HTTP {status}): {message}")]
    Rejected {
        status: u16,
        error_code: Option<i64>,
        message: String,
    },

    #[error("invalid email API base URL \"{base_url}\": {reason}")]
    InvalidBaseUrl { base_url: String, reason: String },
}
