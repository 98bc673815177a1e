use tagwatch_catalog::CatalogError;
use tagwatch_core::ConfigError;
use tagwatch_notify::NotifyError;
use thiserror::Error;

/// Any fatal failure of a compliance run. Nothing is retried.
#[derive(Debug, Error)]
pub enum RunError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("catalog fetch failed: {0}")]
    Catalog(#[from] CatalogError),

    #[error("notification failed: {0}")]
    Notification(#[from] NotifyError),
}
