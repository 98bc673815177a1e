use std::collections::HashSet;
use std::env::VarError;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use tagwatch_catalog::CatalogClient;
use tagwatch_core::{build_check_config, find_non_compliant, CheckConfig, ProductId};
use tagwatch_notify::{notify, NotifyOutcome};

use crate::error::RunError;
use crate::state::{Progress, RunState};

/// Shared environment lookup handed to every run by long-lived triggers.
pub type EnvLookup = Arc<dyn Fn(&str) -> Result<String, VarError> + Send + Sync>;

/// An [`EnvLookup`] backed by the process environment.
#[must_use]
pub fn process_env() -> EnvLookup {
    Arc::new(|key: &str| std::env::var(key))
}

/// Summary of a successful run.
#[derive(Debug, Clone)]
pub struct RunReport {
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
    pub products_scanned: usize,
    /// Non-compliant product ids in fetch order.
    pub missing: Vec<ProductId>,
    pub notification: NotifyOutcome,
}

/// Runs one full compliance check, reading configuration through `lookup`.
///
/// Configuration is validated before any network call; a missing or blank
/// required variable ends the run with [`RunError::Config`].
///
/// # Errors
///
/// Returns the first [`RunError`] raised by any stage.
pub async fn run_compliance_check<F>(lookup: F) -> Result<RunReport, RunError>
where
    F: Fn(&str) -> Result<String, VarError>,
{
    let mut progress = Progress::start();
    progress.advance(RunState::Configuring);
    let config = build_check_config(lookup).map_err(|e| progress.fail(e.into()))?;
    tracing::debug!(?config, "check configuration loaded");
    run_stages(&config, &mut progress).await
}

async fn run_stages(config: &CheckConfig, progress: &mut Progress) -> Result<RunReport, RunError> {
    progress.advance(RunState::Fetching);
    let client = CatalogClient::from_config(config).map_err(|e| progress.fail(e.into()))?;
    let products = client
        .fetch_all_products()
        .await
        .map_err(|e| progress.fail(e.into()))?;

    progress.advance(RunState::Evaluating);
    let missing = find_non_compliant(&products, &config.required_tags);
    tracing::info!(
        products = products.len(),
        missing = missing.len(),
        "tag evaluation complete"
    );
    if !missing.is_empty() {
        tracing::info!(ids = ?missing, "products missing required tags");
    }
    if tracing::enabled!(tracing::Level::DEBUG) {
        let missing_ids: HashSet<ProductId> = missing.iter().copied().collect();
        for product in products.iter().filter(|p| missing_ids.contains(&p.id)) {
            tracing::debug!(
                id = product.id,
                title = product.display_title(),
                "missing required tags"
            );
        }
    }

    progress.advance(RunState::Notifying);
    let notification = notify(config, &missing)
        .await
        .map_err(|e| progress.fail(e.into()))?;

    progress.advance(RunState::Done);
    Ok(RunReport {
        started_at: progress.started_at(),
        finished_at: Utc::now(),
        products_scanned: products.len(),
        missing,
        notification,
    })
}
