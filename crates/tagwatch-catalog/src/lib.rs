pub mod client;
pub mod error;
pub mod pagination;
pub mod types;

pub use client::{CatalogClient, MAX_PAGES, PAGE_LIMIT};
pub use error::CatalogError;
pub use types::{CatalogPage, CatalogProduct, ProductsResponse};
