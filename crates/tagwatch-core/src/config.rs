use crate::app_config::{CheckConfig, ServerConfig};
use crate::compliance::normalize_tags;
use crate::ConfigError;

const DEFAULT_SHOPIFY_API_VERSION: &str = "2023-10";
const DEFAULT_POSTMARK_BASE_URL: &str = "https://api.postmarkapp.com";
const DEFAULT_USER_AGENT: &str = "tagwatch/0.1 (tag-compliance)";
const DEFAULT_SCHEDULE: &str = "0 0 7 * * FRI";

/// Load the per-run check configuration.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if required env vars are missing or values are invalid.
pub fn load_check_config() -> Result<CheckConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_check_config_from_env()
}

/// Load the per-run check configuration from variables already in the process.
///
/// # Errors
///
/// Returns `ConfigError` if required env vars are missing or values are invalid.
pub fn load_check_config_from_env() -> Result<CheckConfig, ConfigError> {
    build_check_config(|key| std::env::var(key))
}

/// Load server settings from the process environment (after `.env`).
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but cannot be parsed.
pub fn load_server_config() -> Result<ServerConfig, ConfigError> {
    dotenvy::dotenv().ok();
    build_server_config(|key| std::env::var(key))
}

/// Build a [`CheckConfig`] using the provided env-var lookup function.
///
/// Blank values count as missing. `TAGS_TO_CHECK` must contain at least one
/// non-empty tag after splitting on commas.
///
/// # Errors
///
/// Returns [`ConfigError::MissingEnvVar`] for the first absent required key,
/// or [`ConfigError::InvalidEnvVar`] for an unusable value.
pub fn build_check_config<F>(lookup: F) -> Result<CheckConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    let require = |var: &str| -> Result<String, ConfigError> {
        match lookup(var) {
            Ok(value) if !value.trim().is_empty() => Ok(value.trim().to_string()),
            _ => Err(ConfigError::MissingEnvVar(var.to_string())),
        }
    };

    let or_default = |var: &str, default: &str| -> String {
        lookup(var)
            .ok()
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| default.to_string())
    };

    let store_domain = require("SHOPIFY_STORE_DOMAIN")?;
    let access_token = require("SHOPIFY_ACCESS_TOKEN")?;
    let raw_tags = require("TAGS_TO_CHECK")?;
    let email_to = require("EMAIL_TO")?;
    let email_from = require("EMAIL_FROM")?;
    let postmark_token = require("POSTMARK_API_KEY")?;

    let required_tags = normalize_tags(&raw_tags);
    if required_tags.is_empty() {
        return Err(ConfigError::InvalidEnvVar {
            var: "TAGS_TO_CHECK".to_string(),
            reason: "no tags left after splitting on commas".to_string(),
        });
    }

    let request_timeout_secs = or_default("TAGWATCH_REQUEST_TIMEOUT_SECS", "30")
        .parse::<u64>()
        .map_err(|e| ConfigError::InvalidEnvVar {
            var: "TAGWATCH_REQUEST_TIMEOUT_SECS".to_string(),
            reason: e.to_string(),
        })?;

    Ok(CheckConfig {
        store_domain,
        access_token,
        required_tags,
        email_from,
        email_to,
        postmark_token,
        shopify_api_version: or_default("SHOPIFY_API_VERSION", DEFAULT_SHOPIFY_API_VERSION),
        request_timeout_secs,
        user_agent: or_default("TAGWATCH_USER_AGENT", DEFAULT_USER_AGENT),
        postmark_base_url: or_default("POSTMARK_BASE_URL", DEFAULT_POSTMARK_BASE_URL),
    })
}

/// Build a [`ServerConfig`] using the provided env-var lookup function.
///
/// # Errors
///
/// Returns [`ConfigError::InvalidEnvVar`] if a value cannot be parsed.
pub fn build_server_config<F>(lookup: F) -> Result<ServerConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    use std::net::SocketAddr;

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let raw_addr = or_default("TAGWATCH_BIND_ADDR", "0.0.0.0:3000");
    let bind_addr = raw_addr
        .parse::<SocketAddr>()
        .map_err(|e| ConfigError::InvalidEnvVar {
            var: "TAGWATCH_BIND_ADDR".to_string(),
            reason: e.to_string(),
        })?;

    let schedule_enabled = parse_bool(
        "TAGWATCH_SCHEDULE_ENABLED",
        &or_default("TAGWATCH_SCHEDULE_ENABLED", "true"),
    )?;

    Ok(ServerConfig {
        bind_addr,
        log_level: or_default("TAGWATCH_LOG_LEVEL", "info"),
        schedule: or_default("TAGWATCH_SCHEDULE", DEFAULT_SCHEDULE),
        schedule_enabled,
    })
}

fn parse_bool(var: &str, raw: &str) -> Result<bool, ConfigError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => Err(ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: format!("expected a boolean, got \"{other}\""),
        }),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
