use std::collections::BTreeSet;
use std::net::SocketAddr;

/// Settings for the long-running server process. Loaded once at startup.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub bind_addr: SocketAddr,
    pub log_level: String,
    /// Six-field cron expression (seconds first) for the weekly run.
    pub schedule: String,
    pub schedule_enabled: bool,
}

/// Everything a single compliance run needs.
///
/// Built fresh for every run and passed by reference to each stage; nothing
/// reads the environment after this value exists.
#[derive(Clone)]
pub struct CheckConfig {
    /// Bare host (`example.myshopify.com`) or full origin URL.
    pub store_domain: String,
    pub access_token: String,
    /// Lowercased, trimmed, never empty.
    pub required_tags: BTreeSet<String>,
    pub email_from: String,
    pub email_to: String,
    pub postmark_token: String,
    pub shopify_api_version: String,
    pub request_timeout_secs: u64,
    pub user_agent: String,
    pub postmark_base_url: String,
}

impl std::fmt::Debug for CheckConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CheckConfig")
            .field("store_domain", &self.store_domain)
            .field("access_token", &"[redacted]")
            .field("required_tags", &self.required_tags)
            .field("email_from", &self.email_from)
            .field("email_to", &self.email_to)
            .field("postmark_token", &"[redacted]")
            .field("shopify_api_version", &self.shopify_api_version)
            .field("request_timeout_secs", &self.request_timeout_secs)
            .field("user_agent", &self.user_agent)
            .field("postmark_base_url", &self.postmark_base_url)
            .finish()
    }
}
