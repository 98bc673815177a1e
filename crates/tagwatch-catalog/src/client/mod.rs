//! HTTP client for the Shopify Admin `products.json` endpoint.

mod fetch_all;
mod origin;

use std::time::Duration;

use reqwest::{Client, Url};
use tagwatch_core::CheckConfig;

use crate::error::CatalogError;
use crate::pagination::extract_next_cursor;
use crate::types::{CatalogPage, ProductsResponse};

pub use origin::store_origin;

/// Products requested per page. 250 is the Admin API maximum.
pub const PAGE_LIMIT: u32 = 250;

/// Upper bound on pages per fetch (2.5M products at [`PAGE_LIMIT`]).
/// Repeated cursors are caught separately, long before this.
pub const MAX_PAGES: usize = 10_000;

const ACCESS_TOKEN_HEADER: &str = "X-Shopify-Access-Token";

/// Authenticated client for one store's product catalog.
///
/// Every request carries the access token in `X-Shopify-Access-Token`.
/// Non-2xx responses surface as [`CatalogError::UnexpectedStatus`]; nothing
/// is retried.
pub struct CatalogClient {
    client: Client,
    origin: Url,
    api_version: String,
    access_token: String,
}

impl CatalogClient {
    /// Builds a client from the run's [`CheckConfig`].
    ///
    /// # Errors
    ///
    /// - [`CatalogError::InvalidStoreUrl`] if the store domain is not usable.
    /// - [`CatalogError::Http`] if the underlying `reqwest::Client` cannot
    ///   be constructed.
    pub fn from_config(config: &CheckConfig) -> Result<Self, CatalogError> {
        Self::new(
            &config.store_domain,
            &config.access_token,
            &config.shopify_api_version,
            config.request_timeout_secs,
            &config.user_agent,
        )
    }

    /// Creates a `CatalogClient` with configured timeout and `User-Agent`.
    ///
    /// `store_domain` may be a bare host or a full origin URL.
    ///
    /// # Errors
    ///
    /// Same as [`Self::from_config`].
    pub fn new(
        store_domain: &str,
        access_token: &str,
        api_version: &str,
        timeout_secs: u64,
        user_agent: &str,
    ) -> Result<Self, CatalogError> {
        let origin = store_origin(store_domain)?;
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;
        Ok(Self {
            client,
            origin,
            api_version: api_version.to_owned(),
            access_token: access_token.to_owned(),
        })
    }

    /// Fetches one page of products.
    ///
    /// # Errors
    ///
    /// - [`CatalogError::UnexpectedStatus`] for any non-2xx status.
    /// - [`CatalogError::Http`] on network or TLS failure.
    /// - [`CatalogError::Deserialize`] if the body is not the expected JSON.
    pub async fn fetch_page(&self, page_info: Option<&str>) -> Result<CatalogPage, CatalogError> {
        let url = self.products_url(page_info);

        let response = self
            .client
            .get(url.clone())
            .header(ACCESS_TOKEN_HEADER, &self.access_token)
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await?;
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::warn!(
                status = status.as_u16(),
                body = %truncate(&body, 300),
                "catalog API returned an error status"
            );
            return Err(CatalogError::UnexpectedStatus {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        // Read the Link header before consuming the body.
        let link_header = response
            .headers()
            .get(reqwest::header::LINK)
            .and_then(|v| v.to_str().ok())
            .map(str::to_owned);

        let body = response.text().await?;
        let parsed = serde_json::from_str::<ProductsResponse>(&body).map_err(|e| {
            CatalogError::Deserialize {
                context: format!("products page from {}", self.origin),
                source: e,
            }
        })?;

        Ok(CatalogPage {
            products: parsed.products,
            next_cursor: extract_next_cursor(link_header.as_deref()),
        })
    }

    /// Builds `{origin}/admin/api/{version}/products.json?limit=250[&page_info=..]`.
    fn products_url(&self, page_info: Option<&str>) -> Url {
        let mut url = self.origin.clone();
        url.set_path(&format!("/admin/api/{}/products.json", self.api_version));
        url.query_pairs_mut()
            .append_pair("limit", &PAGE_LIMIT.to_string());
        if let Some(cursor) = page_info {
            url.query_pairs_mut().append_pair("page_info", cursor);
        }
        url
    }

    pub(crate) fn store(&self) -> &str {
        self.origin.host_str().unwrap_or("<unknown>")
    }
}

fn truncate(text: &str, max_chars: usize) -> &str {
    text.char_indices()
        .nth(max_chars)
        .map_or(text, |(idx, _)| &text[..idx])
}

#[cfg(test)]
#[path = "../client_test.rs"]
mod tests;
