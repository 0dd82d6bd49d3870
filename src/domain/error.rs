use thiserror::Error;

pub type Result<T> = std::result::Result<T, HubError>;

/// Crate-wide error taxonomy.
#[derive(Error, Debug)]
pub enum HubError {
    #[error("decode error: {0}")]
    Decode(String),

    #[error("validation error: {0}")]
    Validation(#[from] validator::ValidationErrors),

    #[error("cost snapshot absent")]
    SnapshotAbsent,

    #[error("store error: {0}")]
    Store(#[from] crate::store::StoreError),
}
