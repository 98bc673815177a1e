use thiserror::Error;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("catalog API returned HTTP {status} for {url}")]
    UnexpectedStatus { status: u16, url: String },

    #[error("cursor {cursor:?} repeated while paginating {store}")]
    CursorCycle { store: String, cursor: String },

    #[error("pagination limit reached for {store}: exceeded {max_pages} pages")]
    PaginationLimit { store: String, max_pages: usize },

    #[error("invalid store domain \"{store}\": {reason}")]
    InvalidStoreUrl { store: String, reason: String },
}
