//! Cursor extraction from the Shopify Admin `Link` response header.
//!
//! The Admin REST API paginates `products.json` with opaque `page_info`
//! cursors carried inside the `Link` header:
//!
//! ```text
//! <https://shop.myshopify.com/admin/api/2023-10/products.json?limit=250&page_info=PREV>; rel="previous",
//! <https://shop.myshopify.com/admin/api/2023-10/products.json?limit=250&page_info=NEXT>; rel="next"
//! ```
//!
//! Anything that does not look like that (no header, no `rel="next"`
//! directive, an unparseable URL, no `page_info`) means there is no next page.

use reqwest::Url;

/// Returns the `page_info` cursor of the `rel="next"` link, if any.
#[must_use]
pub fn extract_next_cursor(link_header: Option<&str>) -> Option<String> {
    link_header?
        .split(',')
        .filter_map(parse_link)
        .find(|(_, rel)| rel.eq_ignore_ascii_case("next"))
        .and_then(|(target, _)| cursor_from_url(target))
}

/// Splits one `<url>; rel="x"` directive into `(url, rel)`.
fn parse_link(directive: &str) -> Option<(&str, &str)> {
    let mut parts = directive.trim().split(';');
    let target = parts
        .next()?
        .trim()
        .strip_prefix('<')?
        .strip_suffix('>')?;

    let rel = parts.find_map(|param| {
        let (key, value) = param.split_once('=')?;
        key.trim()
            .eq_ignore_ascii_case("rel")
            .then(|| value.trim().trim_matches('"'))
    })?;

    Some((target, rel))
}

fn cursor_from_url(target: &str) -> Option<String> {
    let url = Url::parse(target).ok()?;
    url.query_pairs()
        .find(|(key, _)| key == "page_info")
        .map(|(_, value)| value.into_owned())
        .filter(|value| !value.is_empty())
}
