use thiserror::Error;

/// Errors surfaced by the state store adapter. The core algorithms never
/// see raw `redis` types, only this taxonomy.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("key not found")]
    NotFound,

    #[error("store transport error: {0}")]
    Transport(String),

    #[error("store encoding error: {0}")]
    Encoding(#[from] serde_json::Error),
}
