//! HTTP client for the Postmark transactional email API.

use std::time::Duration;

use reqwest::{Client, Url};

use crate::error::NotifyError;
use crate::types::{OutboundEmail, PostmarkResponse, SendReceipt};

const SERVER_TOKEN_HEADER: &str = "X-Postmark-Server-Token";

/// Client for Postmark's `POST /email` endpoint.
///
/// The base URL comes from `CheckConfig::postmark_base_url`, which defaults to
/// the production API and can point at a mock server in tests.
pub struct PostmarkClient {
    client: Client,
    server_token: String,
    base_url: Url,
}

impl PostmarkClient {
    /// Creates a client with a custom base URL.
    ///
    /// # Errors
    ///
    /// Returns [`NotifyError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed, or [`NotifyError::InvalidBaseUrl`] if
    /// `base_url` is not a valid URL.
    pub fn with_base_url(
        server_token: &str,
        timeout_secs: u64,
        user_agent: &str,
        base_url: &str,
    ) -> Result<Self, NotifyError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;

        // Exactly one trailing slash so `join("email")` appends instead of
        // replacing the last path segment.
        let normalised = format!("{}/", base_url.trim_end_matches('/'));
        let parsed = Url::parse(&normalised).map_err(|e| NotifyError::InvalidBaseUrl {
            base_url: base_url.to_owned(),
            reason: e.to_string(),
        })?;

        Ok(Self {
            client,
            server_token: server_token.to_owned(),
            base_url: parsed,
        })
    }

    /// Sends one message. Never retried.
    ///
    /// # Errors
    ///
    /// - [`NotifyError::Rejected`] for any non-2xx status, carrying Postmark's
    ///   `ErrorCode` and `Message` when the body has them.
    /// - [`NotifyError::Http`] on network failure.
    pub async fn send_email(&self, email: &OutboundEmail) -> Result<SendReceipt, NotifyError> {
        let url = self
            .base_url
            .join("email")
            .map_err(|e| NotifyError::InvalidBaseUrl {
                base_url: self.base_url.to_string(),
                reason: e.to_string(),
            })?;

        let response = self
            .client
            .post(url)
            .header(reqwest::header::ACCEPT, "application/json")
            .header(SERVER_TOKEN_HEADER, &self.server_token)
            .json(email)
            .send()
            .await?;
        let status = response.status();
        let body = response.text().await?;
        let parsed = serde_json::from_str::<PostmarkResponse>(&body).ok();

        if !status.is_success() {
            let (error_code, message) = match parsed {
                Some(p) => (p.error_code, p.message.unwrap_or_else(|| body.clone())),
                None => (None, body),
            };
            return Err(NotifyError::Rejected {
                status: status.as_u16(),
                error_code,
                message,
            });
        }

        Ok(SendReceipt {
            message_id: parsed.and_then(|p| p.message_id),
        })
    }
}
