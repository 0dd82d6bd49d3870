//! Canonical payload shapes for the Metric Hub.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

/// A resource pair. Values are absolute, not ratios.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Validate)]
pub struct Resources {
    #[validate(range(min = 0.0))]
    pub cpu_cores: f64,

    #[validate(range(min = 0.0))]
    pub memory_mb: f64,
}

/// Cluster-wide billing context attached to a cost payload.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Validate)]
pub struct ClusterInfo {
    #[validate(custom = "validate_vm_count")]
    pub vm_count: f64,

    #[validate(custom = "validate_strictly_positive")]
    pub current_hourly_cost: f64,
}

fn validate_strictly_positive(value: &f64) -> Result<(), ValidationError> {
    if *value > 0.0 {
        Ok(())
    } else {
        let mut err = ValidationError::new("must_be_positive");
        err.message = Some("value must be strictly positive".into());
        Err(err)
    }
}

fn validate_vm_count(value: &f64) -> Result<(), ValidationError> {
    validate_strictly_positive(value)?;
    if value.fract() == 0.0 {
        Ok(())
    } else {
        let mut err = ValidationError::new("integer_valued");
        err.message = Some("vm_count must be a whole number".into());
        Err(err)
    }
}

/// A deployment as reported by the Cost Engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct CostDeployment {
    #[validate(length(min = 1))]
    pub name: String,

    #[validate]
    pub current_requests: Resources,

    #[validate]
    pub current_usage: Resources,

    /// Empty on ingest; filled transiently during forecast evaluation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub predicted_peak_24h: Option<Resources>,
}

/// A deployment as reported by the Forecast Service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct ForecastDeployment {
    #[validate(length(min = 1))]
    pub name: String,

    #[validate]
    pub predicted_peak_24h: Resources,
}

fn validate_namespace(namespace: &str) -> Result<(), ValidationError> {
    if namespace == "default" {
        Ok(())
    } else {
        let mut err = ValidationError::new("namespace");
        err.message = Some("namespace must equal \"default\"".into());
        Err(err)
    }
}

/// Inbound cost report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct CostPayload {
    pub timestamp: DateTime<Utc>,

    #[validate(custom = "validate_namespace")]
    pub namespace: String,

    #[validate]
    pub cluster_info: ClusterInfo,

    #[validate(length(min = 1))]
    pub deployments: Vec<CostDeployment>,
}

/// Inbound forecast report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct ForecastPayload {
    pub timestamp: DateTime<Utc>,

    #[validate(custom = "validate_namespace")]
    pub namespace: String,

    #[validate(length(min = 1))]
    pub deployments: Vec<ForecastDeployment>,
}

/// Closed set of trigger labels. Serializes to the exact label string a
/// downstream consumer expects, not the Rust variant name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TriggerReason {
    #[serde(rename = "High Memory Waste")]
    HighMemoryWaste,
    #[serde(rename = "High Memory Risk")]
    HighMemoryRisk,
    #[serde(rename = "High CPU Waste")]
    HighCpuWaste,
    #[serde(rename = "High CPU Risk")]
    HighCpuRisk,
    #[serde(rename = "Predicted Capacity Risk (CPU)")]
    PredictedCapacityRiskCpu,
    #[serde(rename = "Predicted Safe Downscale (CPU)")]
    PredictedSafeDownscaleCpu,
    #[serde(rename = "Predicted Capacity Risk (Memory)")]
    PredictedCapacityRiskMemory,
    #[serde(rename = "Predicted Safe Downscale (Memory)")]
    PredictedSafeDownscaleMemory,
}

impl TriggerReason {
    /// Whether this trigger bypasses cooldown gating. Forecast-derived
    /// triggers encode predictive, not observational,
    /// information and always publish.
    pub fn is_forecast_derived(self) -> bool {
        matches!(
            self,
            TriggerReason::PredictedCapacityRiskCpu
                | TriggerReason::PredictedSafeDownscaleCpu
                | TriggerReason::PredictedCapacityRiskMemory
                | TriggerReason::PredictedSafeDownscaleMemory
        )
    }

    pub fn as_str(self) -> &'static str {
        match self {
            TriggerReason::HighMemoryWaste => "High Memory Waste",
            TriggerReason::HighMemoryRisk => "High Memory Risk",
            TriggerReason::HighCpuWaste => "High CPU Waste",
            TriggerReason::HighCpuRisk => "High CPU Risk",
            TriggerReason::PredictedCapacityRiskCpu => "Predicted Capacity Risk (CPU)",
            TriggerReason::PredictedSafeDownscaleCpu => "Predicted Safe Downscale (CPU)",
            TriggerReason::PredictedCapacityRiskMemory => "Predicted Capacity Risk (Memory)",
            TriggerReason::PredictedSafeDownscaleMemory => "Predicted Safe Downscale (Memory)",
        }
    }
}

impl std::fmt::Display for TriggerReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A self-contained optimisation job, published onto `queue:agent:jobs`.
/// The wire contract names the deployment field `deployments`
/// (singular-scoped).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgentJob {
    pub reason: TriggerReason,
    pub namespace: String,
    #[serde(rename = "deployments")]
    pub deployment: CostDeployment,
    pub cluster_info: ClusterInfo,
}
