use std::sync::Arc;

use tracing::info;

use crate::domain::{AgentJob, ClusterInfo, CostDeployment, TriggerReason};
use crate::metrics::EvaluationMetrics;
use crate::store::{StateStore, StoreError};

pub const COOLDOWN_SECONDS: u64 = 1800;

/// Gate a trigger through the cooldown rules and publish if it clears
/// them. Forecast-derived triggers bypass the cooldown entirely and
/// never touch the cooldown key.
pub async fn gate_and_publish(
    store: &Arc<dyn StateStore>,
    reason: TriggerReason,
    namespace: &str,
    deployment: &CostDeployment,
    cluster_info: &ClusterInfo,
    now_unix: u64,
) -> Result<(), StoreError> {
    if reason.is_forecast_derived() {
        return publish(store, reason, namespace, deployment, cluster_info).await;
    }

    let last = store.get_cooldown(&deployment.name).await?;
    if let Some(last) = last {
        if now_unix.saturating_sub(last) < COOLDOWN_SECONDS {
            info!(deployment = %deployment.name, reason = %reason, "cooldown active, suppressing job");
            EvaluationMetrics::record_suppressed();
            return Ok(());
        }
    }

    publish(store, reason, namespace, deployment, cluster_info).await?;
    store.set_cooldown(&deployment.name, now_unix).await
}

async fn publish(
    store: &Arc<dyn StateStore>,
    reason: TriggerReason,
    namespace: &str,
    deployment: &CostDeployment,
    cluster_info: &ClusterInfo,
) -> Result<(), StoreError> {
    let job = AgentJob {
        reason,
        namespace: namespace.to_string(),
        deployment: deployment.clone(),
        cluster_info: cluster_info.clone(),
    };
    EvaluationMetrics::record_trigger(reason.as_str());
    store.publish_job(&job).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Resources;
    use crate::store::InMemoryStateStore;

    fn deployment() -> CostDeployment {
        CostDeployment {
            name: "svc-a".to_string(),
            current_requests: Resources {
                cpu_cores: 0.5,
                memory_mb: 512.0,
            },
            current_usage: Resources {
                cpu_cores: 0.03,
                memory_mb: 115.0,
            },
            predicted_peak_24h: None,
        }
    }

    fn cluster_info() -> ClusterInfo {
        ClusterInfo {
            vm_count: 3.0,
            current_hourly_cost: 0.12,
        }
    }

    #[tokio::test]
    async fn first_trigger_publishes_and_sets_cooldown() {
        let store: Arc<dyn StateStore> = Arc::new(InMemoryStateStore::new());
        gate_and_publish(
            &store,
            TriggerReason::HighMemoryWaste,
            "default",
            &deployment(),
            &cluster_info(),
            1_700_000_000,
        )
        .await
        .unwrap();

        assert_eq!(store.get_cooldown("svc-a").await.unwrap(), Some(1_700_000_000));
    }

    #[tokio::test]
    async fn second_trigger_within_window_is_suppressed() {
        let store: Arc<dyn StateStore> = Arc::new(InMemoryStateStore::new());
        gate_and_publish(
            &store,
            TriggerReason::HighMemoryWaste,
            "default",
            &deployment(),
            &cluster_info(),
            1_700_000_000,
        )
        .await
        .unwrap();

        gate_and_publish(
            &store,
            TriggerReason::HighMemoryWaste,
            "default",
            &deployment(),
            &cluster_info(),
            1_700_000_600,
        )
        .await
        .unwrap();

        // cooldown timestamp unchanged by the suppressed attempt
        assert_eq!(store.get_cooldown("svc-a").await.unwrap(), Some(1_700_000_000));
    }

    #[tokio::test]
    async fn trigger_after_window_publishes_again() {
        let store: Arc<dyn StateStore> = Arc::new(InMemoryStateStore::new());
        gate_and_publish(
            &store,
            TriggerReason::HighMemoryWaste,
            "default",
            &deployment(),
            &cluster_info(),
            1_700_000_000,
        )
        .await
        .unwrap();

        gate_and_publish(
            &store,
            TriggerReason::HighMemoryWaste,
            "default",
            &deployment(),
            &cluster_info(),
            1_700_001_900,
        )
        .await
        .unwrap();

        assert_eq!(
            store.get_cooldown("svc-a").await.unwrap(),
            Some(1_700_001_900)
        );
    }

    #[tokio::test]
    async fn forecast_trigger_bypasses_cooldown_and_does_not_set_it() {
        let inner = InMemoryStateStore::new();
        let store: Arc<dyn StateStore> = Arc::new(inner.clone());
        gate_and_publish(
            &store,
            TriggerReason::PredictedCapacityRiskCpu,
            "default",
            &deployment(),
            &cluster_info(),
            1_700_000_000,
        )
        .await
        .unwrap();

        assert_eq!(store.get_cooldown("svc-a").await.unwrap(), None);
        assert_eq!(inner.jobs().await.len(), 1);
    }
}
