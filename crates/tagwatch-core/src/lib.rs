pub mod app_config;
pub mod compliance;
pub mod config;

pub use app_config::{CheckConfig, ServerConfig};
pub use compliance::{find_non_compliant, is_compliant, normalize_tags, ProductId, TaggedProduct};
pub use config::{
    build_check_config, build_server_config, load_check_config, load_check_config_from_env,
    load_server_config,
};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable: {0}")]
    MissingEnvVar(String),

    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}
