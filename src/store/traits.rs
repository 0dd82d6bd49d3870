use async_trait::async_trait;

use super::error::StoreError;
use crate::domain::{AgentJob, CostPayload};

/// Flat key/value operations the Aggregator needs. Implementations
/// never leak their backing protocol through this surface.
#[async_trait]
pub trait StateStore: Send + Sync {
    /// Overwrite the `cost:latest` slot. No TTL.
    async fn set_latest_cost(&self, payload: &CostPayload) -> Result<(), StoreError>;

    /// Fetch the `cost:latest` slot. `StoreError::NotFound` signals an
    /// empty store, not a transport failure.
    async fn get_latest_cost(&self) -> Result<CostPayload, StoreError>;

    /// Read the cooldown timestamp (Unix seconds) for a deployment name,
    /// or `None` if no cooldown has ever been recorded.
    async fn get_cooldown(&self, name: &str) -> Result<Option<u64>, StoreError>;

    /// Record a cooldown timestamp (Unix seconds) for a deployment name.
    async fn set_cooldown(&self, name: &str, unix_seconds: u64) -> Result<(), StoreError>;

    /// Left-push a job onto `queue:agent:jobs`.
    async fn publish_job(&self, job: &AgentJob) -> Result<(), StoreError>;
}
