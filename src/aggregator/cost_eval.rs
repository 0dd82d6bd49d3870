use crate::domain::{CostDeployment, TriggerReason};

/// Evaluate the cost-threshold priority chain for one deployment.
/// Memory precedes CPU because memory pressure is non-reclaimable
/// (OOM kill) while CPU pressure is merely throttled.
pub fn evaluate(deployment: &CostDeployment) -> Option<TriggerReason> {
    let rc = deployment.current_requests.cpu_cores;
    let uc = deployment.current_usage.cpu_cores;
    let rm = deployment.current_requests.memory_mb;
    let um = deployment.current_usage.memory_mb;

    if rc == 0.0 || rm == 0.0 {
        return None;
    }

    let waste_m = (rm - um) / rm;
    let util_m = um / rm;
    let waste_c = (rc - uc) / rc;
    let util_c = uc / rc;

    if waste_m > 0.50 {
        return Some(TriggerReason::HighMemoryWaste);
    }
    if util_m > 0.85 {
        return Some(TriggerReason::HighMemoryRisk);
    }
    if waste_c > 0.50 {
        return Some(TriggerReason::HighCpuWaste);
    }
    if util_c > 0.85 {
        return Some(TriggerReason::HighCpuRisk);
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Resources;

    fn deployment(rc: f64, uc: f64, rm: f64, um: f64) -> CostDeployment {
        CostDeployment {
            name: "svc-a".to_string(),
            current_requests: Resources {
                cpu_cores: rc,
                memory_mb: rm,
            },
            current_usage: Resources {
                cpu_cores: uc,
                memory_mb: um,
            },
            predicted_peak_24h: None,
        }
    }

    #[test]
    fn flags_high_memory_waste() {
        let d = deployment(0.5, 0.03, 512.0, 115.0);
        assert_eq!(evaluate(&d), Some(TriggerReason::HighMemoryWaste));
    }

    #[test]
    fn memory_risk_outranks_cpu_waste() {
        // cpu waste = (1 - 0.05)/1 = 0.95 > 0.50
        // mem util = 2000/2048 = 0.976 > 0.85
        let d = deployment(1.0, 0.05, 2048.0, 2000.0);
        assert_eq!(evaluate(&d), Some(TriggerReason::HighMemoryRisk));
    }

    #[test]
    fn zero_requested_cpu_is_skipped() {
        let d = deployment(0.0, 0.0, 512.0, 10.0);
        assert_eq!(evaluate(&d), None);
    }

    #[test]
    fn zero_requested_memory_is_skipped() {
        let d = deployment(0.5, 0.03, 0.0, 0.0);
        assert_eq!(evaluate(&d), None);
    }

    #[test]
    fn healthy_deployment_has_no_trigger() {
        let d = deployment(1.0, 0.6, 1024.0, 700.0);
        assert_eq!(evaluate(&d), None);
    }

    #[test]
    fn high_cpu_waste_fires_when_memory_is_healthy() {
        let d = deployment(1.0, 0.1, 512.0, 300.0);
        assert_eq!(evaluate(&d), Some(TriggerReason::HighCpuWaste));
    }

    #[test]
    fn high_cpu_risk_fires_when_nothing_else_matches() {
        let d = deployment(1.0, 0.9, 512.0, 300.0);
        assert_eq!(evaluate(&d), Some(TriggerReason::HighCpuRisk));
    }
}
