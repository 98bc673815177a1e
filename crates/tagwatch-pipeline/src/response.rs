//! JSON result shapes returned to whoever triggered a run.

use serde::Serialize;
use tagwatch_core::ProductId;

use crate::error::RunError;
use crate::run::RunReport;

const COMPLETE: &str = "Check complete.";
const FULLY_COMPLIANT: &str = "Check complete. All products carry a required tag.";

/// Success body: `{ "message": ..., "missing": [...] }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckResponse {
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub missing: Option<Vec<ProductId>>,
}

impl CheckResponse {
    /// Full response for synchronous triggers, including every missing id.
    #[must_use]
    pub fn for_request(report: &RunReport) -> Self {
        Self {
            message: message_for(report).to_string(),
            missing: Some(report.missing.clone()),
        }
    }

    /// Message only, for triggers with nobody waiting on the result.
    #[must_use]
    pub fn summary(report: &RunReport) -> Self {
        Self {
            message: message_for(report).to_string(),
            missing: None,
        }
    }
}

fn message_for(report: &RunReport) -> &'static str {
    if report.missing.is_empty() {
        FULLY_COMPLIANT
    } else {
        COMPLETE
    }
}

/// Failure body: `{ "error": ... }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckFailure {
    pub error: String,
}

impl From<&RunError> for CheckFailure {
    fn from(error: &RunError) -> Self {
        Self {
            error: error.to_string(),
        }
    }
}
