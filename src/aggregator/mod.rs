//! The behavioural heart of the hub: stream merge, threshold evaluation,
//! cooldown gating, and job construction.

mod background;
mod cooldown;
mod cost_eval;
mod forecast_eval;

use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use tracing::{info, warn};

use crate::domain::{CostDeployment, CostPayload, ForecastPayload, HubError, Result};
use crate::metrics::EvaluationMetrics;
use crate::store::{StateStore, StoreError};

pub use background::BackgroundTasks;

const EVALUATION_DEADLINE: Duration = Duration::from_secs(10);

/// Correlates cost and forecast reports, evaluates thresholds, and
/// publishes optimisation jobs. Generic over the store trait object so
/// the production Redis adapter and the in-memory test double are
/// interchangeable: the adapter is injected, never imported as a
/// module-level singleton.
#[derive(Clone)]
pub struct Aggregator {
    store: Arc<dyn StateStore>,
    background: Arc<BackgroundTasks>,
}

impl Aggregator {
    pub fn new(store: Arc<dyn StateStore>) -> Self {
        Self {
            store,
            background: Arc::new(BackgroundTasks::new()),
        }
    }

    /// Persist the snapshot, then hand per-deployment threshold
    /// evaluation to a detached, deadline-bounded task.
    pub async fn on_cost(&self, payload: CostPayload) -> Result<()> {
        self.store
            .set_latest_cost(&payload)
            .await
            .map_err(HubError::from)?;

        let store = self.store.clone();
        self.background
            .spawn(async move {
                evaluate_cost(store, payload).await;
            })
            .await;

        Ok(())
    }

    /// Correlate against the stored snapshot, then hand forecast
    /// evaluation to a detached, deadline-bounded task. Fails outright
    /// if no snapshot has ever been stored — a forecast is meaningless
    /// without one.
    pub async fn on_forecast(&self, payload: ForecastPayload) -> Result<()> {
        let snapshot = match self.store.get_latest_cost().await {
            Ok(snapshot) => snapshot,
            Err(StoreError::NotFound) => return Err(HubError::SnapshotAbsent),
            Err(e) => return Err(HubError::from(e)),
        };

        let store = self.store.clone();
        self.background
            .spawn(async move {
                evaluate_forecast(store, payload, snapshot).await;
            })
            .await;

        Ok(())
    }
}

fn unix_now() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs()
}

async fn evaluate_cost(store: Arc<dyn StateStore>, payload: CostPayload) {
    let started = Instant::now();
    let deadline = started + EVALUATION_DEADLINE;

    for deployment in &payload.deployments {
        if Instant::now() >= deadline {
            warn!("cost evaluation deadline exceeded, aborting remaining deployments");
            EvaluationMetrics::record_deadline_exceeded("cost");
            break;
        }

        let Some(reason) = cost_eval::evaluate(deployment) else {
            continue;
        };

        let now = unix_now();
        if let Err(err) = cooldown::gate_and_publish(
            &store,
            reason,
            &payload.namespace,
            deployment,
            &payload.cluster_info,
            now,
        )
        .await
        {
            warn!(deployment = %deployment.name, error = %err, "failed to publish cost-derived job");
        }
    }

    EvaluationMetrics::record_duration_ms("cost", started.elapsed().as_secs_f64() * 1000.0);
}

async fn evaluate_forecast(store: Arc<dyn StateStore>, payload: ForecastPayload, snapshot: CostPayload) {
    let started = Instant::now();
    let deadline = started + EVALUATION_DEADLINE;

    let index: HashMap<&str, &CostDeployment> = snapshot
        .deployments
        .iter()
        .map(|d| (d.name.as_str(), d))
        .collect();

    for forecast_deployment in &payload.deployments {
        if Instant::now() >= deadline {
            warn!("forecast evaluation deadline exceeded, aborting remaining deployments");
            EvaluationMetrics::record_deadline_exceeded("forecast");
            break;
        }

        let Some(&cost_deployment) = index.get(forecast_deployment.name.as_str()) else {
            info!(deployment = %forecast_deployment.name, "forecast entry has no matching snapshot, skipping");
            continue;
        };

        let Some(reason) = forecast_eval::evaluate(cost_deployment, &forecast_deployment.predicted_peak_24h)
        else {
            continue;
        };

        // Copy-before-mutate: populate the predicted peak on a clone of
        // the snapshot deployment, never on the shared snapshot itself.
        let mut published_deployment = cost_deployment.clone();
        published_deployment.predicted_peak_24h = Some(forecast_deployment.predicted_peak_24h);

        let now = unix_now();
        if let Err(err) = cooldown::gate_and_publish(
            &store,
            reason,
            &payload.namespace,
            &published_deployment,
            &snapshot.cluster_info,
            now,
        )
        .await
        {
            warn!(deployment = %forecast_deployment.name, error = %err, "failed to publish forecast-derived job");
        }
    }

    EvaluationMetrics::record_duration_ms("forecast", started.elapsed().as_secs_f64() * 1000.0);
}
