//! Postmark `/email` request and response bodies.
//!
//! Postmark uses PascalCase field names on both sides of the wire.

use serde::{Deserialize, Serialize};

/// A single plaintext message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct OutboundEmail {
    pub from: String,
    pub to: String,
    pub subject: String,
    pub text_body: String,
}

/// Response body from `POST /email`. Error responses share the same shape
/// with a non-zero `ErrorCode`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub(crate) struct PostmarkResponse {
    #[serde(default)]
    pub error_code: Option<i64>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default, rename = "MessageID")]
    pub message_id: Option<String>,
}

/// What Postmark told us about an accepted message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SendReceipt {
    pub message_id: Option<String>,
}
