//! Multi-page product fetch loop for `CatalogClient`.

use std::collections::HashSet;

use crate::error::CatalogError;
use crate::types::CatalogProduct;

use super::CatalogClient;
use super::MAX_PAGES;

impl CatalogClient {
    /// Fetches every product in the catalog, following `Link` header cursors.
    ///
    /// Stops when a page has no `rel="next"` cursor, or when a page body has
    /// no `products` list at all. A cursor the parser does not recognise
    /// counts as "no next page", so an unfamiliar encoding degrades to a
    /// single-page fetch instead of an error.
    ///
    /// All-or-nothing: if any page fails, products from earlier pages are
    /// discarded and the error is returned.
    ///
    /// # Errors
    ///
    /// Propagates any error from [`Self::fetch_page`].
    /// Returns [`CatalogError::CursorCycle`] if a `page_info` cursor comes back
    /// a second time, and [`CatalogError::PaginationLimit`] if the number of
    /// pages exceeds [`MAX_PAGES`].
    pub async fn fetch_all_products(&self) -> Result<Vec<CatalogProduct>, CatalogError> {
        let mut all_products: Vec<CatalogProduct> = Vec::new();
        let mut cursor: Option<String> = None;
        let mut seen_cursors: HashSet<String> = HashSet::new();
        let mut page_count = 0usize;

        loop {
            page_count += 1;
            if page_count > MAX_PAGES {
                return Err(CatalogError::PaginationLimit {
                    store: self.store().to_owned(),
                    max_pages: MAX_PAGES,
                });
            }

            let page = self.fetch_page(cursor.as_deref()).await?;

            let Some(products) = page.products else {
                tracing::debug!(page = page_count, "catalog page had no product list; stopping");
                break;
            };
            tracing::debug!(page = page_count, count = products.len(), "fetched catalog page");
            all_products.extend(products);

            let Some(next) = page.next_cursor else {
                break;
            };
            if !seen_cursors.insert(next.clone()) {
                return Err(CatalogError::CursorCycle {
                    store: self.store().to_owned(),
                    cursor: next,
                });
            }
            cursor = Some(next);
        }

        tracing::info!(
            store = self.store(),
            pages = page_count,
            products = all_products.len(),
            "catalog fetch complete"
        );
        Ok(all_products)
    }
}
