//! Catalog response types for `GET /admin/api/{version}/products.json`.
//!
//! Only the fields the compliance check consumes are modelled; everything
//! else in the payload is ignored.
//!
//! ### Tags
//! The Admin API returns tags as a comma-separated string (`"VIP, sale"`).
//! The public storefront `products.json` returns a JSON array instead, and
//! some stores send `null`. All three shapes deserialize into one
//! comma-separated string so evaluation has a single input format.
//!
//! ### `products`
//! A body without a `products` key is treated as end of data by the fetcher,
//! so the field is `Option`.

use serde::{Deserialize, Deserializer};
use tagwatch_core::{ProductId, TaggedProduct};

/// Top-level response body.
#[derive(Debug, Deserialize)]
pub struct ProductsResponse {
    #[serde(default)]
    pub products: Option<Vec<CatalogProduct>>,
}

/// A single catalog product.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CatalogProduct {
    /// Shopify numeric product ID.
    pub id: ProductId,

    /// Display name, logged next to non-compliant ids.
    #[serde(default)]
    pub title: Option<String>,

    /// Comma-separated tag string; empty when the product has no tags.
    #[serde(default, deserialize_with = "deserialize_tags")]
    pub tags: String,
}

impl CatalogProduct {
    /// Title for log lines; `"<untitled>"` when the payload had none.
    #[must_use]
    pub fn display_title(&self) -> &str {
        self.title.as_deref().unwrap_or("<untitled>")
    }
}

impl TaggedProduct for CatalogProduct {
    fn product_id(&self) -> ProductId {
        self.id
    }

    fn raw_tags(&self) -> &str {
        &self.tags
    }
}

/// One fetched page: its products (if the body had a list) and the cursor
/// for the following page (if the `Link` header carried one).
#[derive(Debug)]
pub struct CatalogPage {
    pub products: Option<Vec<CatalogProduct>>,
    pub next_cursor: Option<String>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawTags {
    Csv(String),
    List(Vec<String>),
}

fn deserialize_tags<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<RawTags>::deserialize(deserializer)?;
    Ok(match raw {
        Some(RawTags::Csv(tags)) => tags,
        Some(RawTags::List(tags)) => tags.join(", "),
        None => String::new(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(json: &str) -> CatalogProduct {
        serde_json::from_str(json).expect("product should deserialize")
    }

    #[test]
    fn tags_as_string() {
        let product = parse(r#"{"id": 1, "title": "Tee", "tags": "VIP, sale"}"#);
        assert_eq!(product.tags, "VIP, sale");
        assert_eq!(product.raw_tags(), "VIP, sale");
    }

    #[test]
    fn display_title_falls_back_when_absent() {
        assert_eq!(parse(r#"{"id": 1, "title": "Tee", "tags": ""}"#).display_title(), "Tee");
        assert_eq!(parse(r#"{"id": 2, "tags": ""}"#).display_title(), "<untitled>");
    }

    #[test]
    fn tags_as_array_are_joined() {
        let product = parse(r#"{"id": 2, "tags": ["vip", "sale"]}"#);
        assert_eq!(product.tags, "vip, sale");
    }

    #[test]
    fn null_or_missing_tags_are_empty() {
        assert_eq!(parse(r#"{"id": 3, "tags": null}"#).tags, "");
        assert_eq!(parse(r#"{"id": 4}"#).tags, "");
    }

    #[test]
    fn unknown_fields_are_ignored() {
        let product = parse(
            r#"{"id": 5, "handle": "tee", "variants": [{"id": 9}], "tags": "", "status": "active"}"#,
        );
        assert_eq!(product.product_id(), 5);
    }

    #[test]
    fn response_without_products_key() {
        let body: ProductsResponse = serde_json::from_str(r#"{"errors": "none"}"#).unwrap();
        assert!(body.products.is_none());
    }
}
