use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::error::StoreError;
use super::traits::StateStore;
use crate::domain::{AgentJob, CostPayload};

/// In-process test double for [`StateStore`], mirroring the shape of the
/// teacher's `InMemoryRateLimiter`. The job queue is append-only here;
/// tests inspect it directly rather than popping from it.
#[derive(Clone, Default)]
pub struct InMemoryStateStore {
    latest_cost: Arc<RwLock<Option<CostPayload>>>,
    cooldowns: Arc<RwLock<HashMap<String, u64>>>,
    jobs: Arc<RwLock<Vec<AgentJob>>>,
}

impl InMemoryStateStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Published jobs in publish order (left-pushed, so the most recent
    /// is at the front — callers that want queue order should reverse).
    pub async fn jobs(&self) -> Vec<AgentJob> {
        self.jobs.read().await.clone()
    }
}

#[async_trait]
impl StateStore for InMemoryStateStore {
    async fn set_latest_cost(&self, payload: &CostPayload) -> Result<(), StoreError> {
        *self.latest_cost.write().await = Some(payload.clone());
        Ok(())
    }

    async fn get_latest_cost(&self) -> Result<CostPayload, StoreError> {
        self.latest_cost
            .read()
            .await
            .clone()
            .ok_or(StoreError::NotFound)
    }

    async fn get_cooldown(&self, name: &str) -> Result<Option<u64>, StoreError> {
        Ok(self.cooldowns.read().await.get(name).copied())
    }

    async fn set_cooldown(&self, name: &str, unix_seconds: u64) -> Result<(), StoreError> {
        self.cooldowns
            .write()
            .await
            .insert(name.to_string(), unix_seconds);
        Ok(())
    }

    async fn publish_job(&self, job: &AgentJob) -> Result<(), StoreError> {
        self.jobs.write().await.insert(0, job.clone());
        Ok(())
    }
}
