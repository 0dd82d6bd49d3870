//! Structural and semantic validation. Each payload type carries its
//! own field-level rules via `validator::Validate`; this module is
//! just the single entry point the HTTP layer calls.

use validator::Validate;

use crate::domain::HubError;

pub fn validate<T: Validate>(payload: &T) -> Result<(), HubError> {
    payload.validate().map_err(HubError::from)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{ClusterInfo, CostDeployment, CostPayload, Resources};
    use chrono::Utc;

    fn valid_payload() -> CostPayload {
        CostPayload {
            timestamp: Utc::now(),
            namespace: "default".to_string(),
            cluster_info: ClusterInfo {
                vm_count: 3.0,
                current_hourly_cost: 0.12,
            },
            deployments: vec![CostDeployment {
                name: "svc-a".to_string(),
                current_requests: Resources {
                    cpu_cores: 0.5,
                    memory_mb: 512.0,
                },
                current_usage: Resources {
                    cpu_cores: 0.03,
                    memory_mb: 110.0,
                },
                predicted_peak_24h: None,
            }],
        }
    }

    #[test]
    fn accepts_well_formed_payload() {
        assert!(validate(&valid_payload()).is_ok());
    }

    #[test]
    fn rejects_wrong_namespace() {
        let mut payload = valid_payload();
        payload.namespace = "kube-system".to_string();
        assert!(validate(&payload).is_err());
    }

    #[test]
    fn rejects_nested_deployment_violation() {
        let mut payload = valid_payload();
        payload.deployments[0].name = String::new();
        assert!(validate(&payload).is_err());
    }
}
