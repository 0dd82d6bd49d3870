use async_trait::async_trait;
use redis::AsyncCommands;
use tracing::debug;

use super::error::StoreError;
use super::keys::{cooldown_key, AGENT_QUEUE_KEY, COST_LATEST_KEY};
use super::traits::StateStore;
use crate::domain::{AgentJob, CostPayload};
use crate::metrics::StoreMetrics;

/// Redis-backed state store. One connection is opened per operation,
/// since a pooled connection manager adds a dependency this adapter's
/// four operations don't need.
#[derive(Clone)]
pub struct RedisStateStore {
    client: redis::Client,
    password: Option<String>,
}

impl RedisStateStore {
    pub fn new(addr: &str, password: Option<String>) -> Result<Self, StoreError> {
        let client = redis::Client::open(addr).map_err(|e| StoreError::Transport(e.to_string()))?;
        Ok(Self { client, password })
    }

    async fn connection(&self) -> Result<redis::aio::Connection, StoreError> {
        let mut con = self
            .client
            .get_async_connection()
            .await
            .map_err(|e| StoreError::Transport(e.to_string()))?;

        if let Some(password) = &self.password {
            redis::cmd("AUTH")
                .arg(password)
                .query_async::<_, ()>(&mut con)
                .await
                .map_err(|e| StoreError::Transport(e.to_string()))?;
        }

        Ok(con)
    }
}

#[async_trait]
impl StateStore for RedisStateStore {
    async fn set_latest_cost(&self, payload: &CostPayload) -> Result<(), StoreError> {
        let value = serde_json::to_string(payload)?;
        let result: Result<(), StoreError> = async move {
            let mut con = self.connection().await?;
            con.set::<_, _, ()>(COST_LATEST_KEY, value)
                .await
                .map_err(|e| StoreError::Transport(e.to_string()))
        }
        .await;

        StoreMetrics::record_operation("set_latest_cost", result.is_ok());
        if result.is_ok() {
            debug!("wrote cost:latest");
        }
        result
    }

    async fn get_latest_cost(&self) -> Result<CostPayload, StoreError> {
        let mut con = self.connection().await?;
        let raw: Option<String> = con
            .get(COST_LATEST_KEY)
            .await
            .map_err(|e| StoreError::Transport(e.to_string()))?;

        let result = match raw {
            Some(raw) => Ok(serde_json::from_str(&raw)?),
            None => Err(StoreError::NotFound),
        };
        let transport_ok = !matches!(result, Err(StoreError::Transport(_)));
        StoreMetrics::record_operation("get_latest_cost", transport_ok);
        result
    }

    async fn get_cooldown(&self, name: &str) -> Result<Option<u64>, StoreError> {
        let mut con = self.connection().await?;
        let raw: Option<String> = con
            .get(cooldown_key(name))
            .await
            .map_err(|e| StoreError::Transport(e.to_string()))?;

        raw.map(|raw| {
            raw.parse::<u64>()
                .map_err(|e| StoreError::Transport(format!("malformed cooldown value: {e}")))
        })
        .transpose()
    }

    async fn set_cooldown(&self, name: &str, unix_seconds: u64) -> Result<(), StoreError> {
        let mut con = self.connection().await?;
        con.set::<_, _, ()>(cooldown_key(name), unix_seconds.to_string())
            .await
            .map_err(|e| StoreError::Transport(e.to_string()))?;
        Ok(())
    }

    async fn publish_job(&self, job: &AgentJob) -> Result<(), StoreError> {
        let value = serde_json::to_string(job)?;
        let result: Result<(), StoreError> = async move {
            let mut con = self.connection().await?;
            con.lpush::<_, _, ()>(AGENT_QUEUE_KEY, value)
                .await
                .map_err(|e| StoreError::Transport(e.to_string()))
        }
        .await;

        StoreMetrics::record_operation("publish_job", result.is_ok());
        result
    }
}
