use super::*;

fn client_for(domain: &str) -> CatalogClient {
    CatalogClient::new(domain, "shpat_test", "2023-10", 5, "tagwatch-test/0.1")
        .expect("failed to build test CatalogClient")
}

#[test]
fn products_url_without_cursor() {
    let url = client_for("tagwatch-demo.myshopify.com").products_url(None);
    assert_eq!(
        url.as_str(),
        "https://tagwatch-demo.myshopify.com/admin/api/2023-10/products.json?limit=250"
    );
}

#[test]
fn products_url_with_cursor() {
    let url = client_for("tagwatch-demo.myshopify.com").products_url(Some("eyJsYXN0X2lkIjo0Mn0"));
    assert_eq!(
        url.as_str(),
        "https://tagwatch-demo.myshopify.com/admin/api/2023-10/products.json?limit=250&page_info=eyJsYXN0X2lkIjo0Mn0"
    );
}

#[test]
fn products_url_uses_configured_api_version() {
    let client = CatalogClient::new("shop.example.com", "t", "2024-04", 5, "ua").unwrap();
    assert_eq!(
        client.products_url(None).path(),
        "/admin/api/2024-04/products.json"
    );
}

#[test]
fn store_origin_adds_https_to_bare_host() {
    let origin = store_origin("tagwatch-demo.myshopify.com").unwrap();
    assert_eq!(origin.as_str(), "https://tagwatch-demo.myshopify.com/");
}

#[test]
fn store_origin_keeps_explicit_scheme_and_port() {
    let origin = store_origin("http://127.0.0.1:8080/").unwrap();
    assert_eq!(origin.as_str(), "http://127.0.0.1:8080/");
}

#[test]
fn store_origin_strips_path_and_query() {
    let origin = store_origin("https://shop.example.com/collections/all?x=1").unwrap();
    assert_eq!(origin.as_str(), "https://shop.example.com/");
}

#[test]
fn store_origin_rejects_garbage() {
    let err = store_origin("not a domain").unwrap_err();
    assert!(
        matches!(err, CatalogError::InvalidStoreUrl { .. }),
        "expected InvalidStoreUrl, got: {err:?}"
    );
}

#[test]
fn store_origin_rejects_non_http_scheme() {
    let err = store_origin("ftp://shop.example.com").unwrap_err();
    assert!(matches!(err, CatalogError::InvalidStoreUrl { .. }));
}

#[test]
fn truncate_respects_char_boundaries() {
    assert_eq!(truncate("héllo", 2), "hé");
    assert_eq!(truncate("short", 300), "short");
}
