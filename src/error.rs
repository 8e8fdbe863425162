#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Lock poisoned: {0}")]
    LockPoisoned(&'static str),

    #[error("Request was cancelled before its result was committed")]
    Cancelled,
}

pub type Result<T> = std::result::Result<T, CatalogError>;
