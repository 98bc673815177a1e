//! Required-tag evaluation.
//!
//! A product is compliant when at least one of its tags, compared
//! case-insensitively after trimming, is in the required set. Products with
//! no tags are never compliant.

use std::collections::BTreeSet;

/// Catalog product identifier.
pub type ProductId = i64;

/// Anything that carries a product id and a raw comma-separated tag string.
pub trait TaggedProduct {
    fn product_id(&self) -> ProductId;

    /// Raw tag string as stored in the catalog, e.g. `"VIP, sale"`.
    fn raw_tags(&self) -> &str;
}

/// Splits a comma-separated tag string into a lowercase, trimmed set.
/// Empty tokens are dropped.
#[must_use]
pub fn normalize_tags(raw: &str) -> BTreeSet<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|tag| !tag.is_empty())
        .map(str::to_lowercase)
        .collect()
}

/// Returns `true` if `raw_tags` shares at least one tag with `required`.
///
/// `required` must already be lowercased.
#[must_use]
pub fn is_compliant(raw_tags: &str, required: &BTreeSet<String>) -> bool {
    normalize_tags(raw_tags)
        .iter()
        .any(|tag| required.contains(tag))
}

/// Returns the ids of every product lacking all required tags, in input order.
#[must_use]
pub fn find_non_compliant<P: TaggedProduct>(
    products: &[P],
    required: &BTreeSet<String>,
) -> Vec<ProductId> {
    products
        .iter()
        .filter(|product| !is_compliant(product.raw_tags(), required))
        .map(TaggedProduct::product_id)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Item {
        id: ProductId,
        tags: &'static str,
    }

    impl TaggedProduct for Item {
        fn product_id(&self) -> ProductId {
            self.id
        }

        fn raw_tags(&self) -> &str {
            self.tags
        }
    }

    fn required(tags: &[&str]) -> BTreeSet<String> {
        tags.iter().map(|t| (*t).to_string()).collect()
    }

    #[test]
    fn normalize_tags_lowercases_and_trims() {
        let tags = normalize_tags("  VIP , Sale,wholesale ");
        let tags: Vec<&str> = tags.iter().map(String::as_str).collect();
        assert_eq!(tags, vec!["sale", "vip", "wholesale"]);
    }

    #[test]
    fn normalize_tags_empty_string_yields_empty_set() {
        assert!(normalize_tags("").is_empty());
        assert!(normalize_tags(" , ,, ").is_empty());
    }

    #[test]
    fn is_compliant_matches_case_insensitively() {
        assert!(is_compliant("VIP, sale", &required(&["vip", "wholesale"])));
        assert!(is_compliant(" WholeSale ", &required(&["vip", "wholesale"])));
    }

    #[test]
    fn is_compliant_requires_whole_tag_match() {
        // "vip-lounge" is a different tag from "vip"
        assert!(!is_compliant("vip-lounge, sale", &required(&["vip"])));
    }

    #[test]
    fn empty_tags_are_never_compliant() {
        assert!(!is_compliant("", &required(&["vip"])));
    }

    #[test]
    fn find_non_compliant_reports_expected_ids_in_order() {
        let products = vec![
            Item { id: 1, tags: "VIP, sale" },
            Item { id: 2, tags: "sale" },
            Item { id: 3, tags: "" },
        ];
        let missing = find_non_compliant(&products, &required(&["vip", "wholesale"]));
        assert_eq!(missing, vec![2, 3]);
    }

    #[test]
    fn find_non_compliant_preserves_fetch_order() {
        let products = vec![
            Item { id: 30, tags: "a" },
            Item { id: 10, tags: "b" },
            Item { id: 20, tags: "c" },
        ];
        let missing = find_non_compliant(&products, &required(&["z"]));
        assert_eq!(missing, vec![30, 10, 20]);
    }

    #[test]
    fn find_non_compliant_is_idempotent() {
        let products = vec![
            Item { id: 5, tags: "Wholesale" },
            Item { id: 6, tags: "retail, clearance" },
            Item { id: 7, tags: "" },
        ];
        let tags = required(&["wholesale"]);
        let first = find_non_compliant(&products, &tags);
        let second = find_non_compliant(&products, &tags);
        assert_eq!(first, second);
        assert_eq!(first, vec![6, 7]);
    }

    #[test]
    fn find_non_compliant_on_empty_catalog_is_empty() {
        let products: Vec<Item> = Vec::new();
        assert!(find_non_compliant(&products, &required(&["vip"])).is_empty());
    }
}
