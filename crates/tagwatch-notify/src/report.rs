//! Missing-tags report composition and delivery.

use tagwatch_core::{CheckConfig, ProductId};

use crate::client::PostmarkClient;
use crate::error::NotifyError;
use crate::types::OutboundEmail;

pub const REPORT_SUBJECT: &str = "Missing Tags Report";

/// Result of a notification attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NotifyOutcome {
    /// Nothing to report; no email was sent.
    Skipped,
    Sent { message_id: Option<String> },
}

/// Builds the plaintext report: a heading, a blank line, then one product id
/// per line in the order given.
#[must_use]
pub fn compose_report(config: &CheckConfig, missing: &[ProductId]) -> OutboundEmail {
    let mut text_body = String::from("Products missing required tags:\n\n");
    let ids: Vec<String> = missing.iter().map(ToString::to_string).collect();
    text_body.push_str(&ids.join("\n"));

    OutboundEmail {
        from: config.email_from.clone(),
        to: config.email_to.clone(),
        subject: REPORT_SUBJECT.to_string(),
        text_body,
    }
}

/// Emails the report when `missing` is non-empty; otherwise does nothing.
///
/// # Errors
///
/// Returns [`NotifyError`] if the client cannot be built or Postmark does not
/// accept the message.
pub async fn notify(
    config: &CheckConfig,
    missing: &[ProductId],
) -> Result<NotifyOutcome, NotifyError> {
    if missing.is_empty() {
        tracing::info!("no non-compliant products; skipping report email");
        return Ok(NotifyOutcome::Skipped);
    }

    let client = PostmarkClient::with_base_url(
        &config.postmark_token,
        config.request_timeout_secs,
        &config.user_agent,
        &config.postmark_base_url,
    )?;
    let receipt = client.send_email(&compose_report(config, missing)).await?;

    tracing::info!(
        to = %config.email_to,
        products = missing.len(),
        message_id = receipt.message_id.as_deref().unwrap_or("-"),
        "report email sent"
    );
    Ok(NotifyOutcome::Sent {
        message_id: receipt.message_id,
    })
}
