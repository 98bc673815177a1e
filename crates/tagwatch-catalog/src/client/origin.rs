//! Store domain to origin URL conversion.

use reqwest::Url;

use crate::error::CatalogError;

/// Turns the configured store domain into a scheme+host origin.
///
/// `"tagwatch-demo.myshopify.com"` becomes `https://tagwatch-demo.myshopify.com/`.
/// A value that already has an `http` or `https` scheme keeps it, and any
/// path, query, or fragment is dropped so requests always target the root.
///
/// # Errors
///
/// Returns [`CatalogError::InvalidStoreUrl`] if the value does not parse as a
/// URL with a host, or uses a scheme other than `http`/`https`.
pub fn store_origin(store_domain: &str) -> Result<Url, CatalogError> {
    let trimmed = store_domain.trim().trim_end_matches('/');
    let candidate = if trimmed.contains("://") {
        trimmed.to_owned()
    } else {
        format!("https://{trimmed}")
    };

    let invalid = |reason: String| CatalogError::InvalidStoreUrl {
        store: store_domain.to_owned(),
        reason,
    };

    let mut url = Url::parse(&candidate).map_err(|e| invalid(e.to_string()))?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(invalid(format!("unsupported scheme \"{}\"", url.scheme())));
    }
    if url.host_str().is_none_or(str::is_empty) {
        return Err(invalid("missing host".to_owned()));
    }

    url.set_path("/");
    url.set_query(None);
    url.set_fragment(None);
    Ok(url)
}
