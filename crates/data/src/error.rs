use looplab_domain::DomainError;

#[derive(Debug, thiserror::Error)]
pub enum DataError {
    #[error("Market not found: {0}")]
    MarketNotFound(String),
    #[error("No saved strategy or points model with id {0}")]
    EntryNotFound(String),
    #[error("Storage I/O failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("Malformed snapshot JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Domain(#[from] DomainError),
}
