use crate::domain::{CostDeployment, Resources, TriggerReason};

/// Evaluate the forecast-threshold rules for one matched deployment.
/// The memory branch is only consulted when the CPU branch produced
/// no trigger.
pub fn evaluate(cost_deployment: &CostDeployment, predicted_peak_24h: &Resources) -> Option<TriggerReason> {
    let rc = cost_deployment.current_requests.cpu_cores;
    let uc = cost_deployment.current_usage.cpu_cores;
    let rm = cost_deployment.current_requests.memory_mb;
    let um = cost_deployment.current_usage.memory_mb;
    let pc = predicted_peak_24h.cpu_cores;
    let pm = predicted_peak_24h.memory_mb;

    if rc > 0.0 {
        if pc > 0.9 * rc {
            return Some(TriggerReason::PredictedCapacityRiskCpu);
        }
        if (rc - uc) / rc > 0.40 && pc < 0.6 * rc {
            return Some(TriggerReason::PredictedSafeDownscaleCpu);
        }
    }

    if rm > 0.0 {
        if pm > 0.9 * rm {
            return Some(TriggerReason::PredictedCapacityRiskMemory);
        }
        if (rm - um) / rm > 0.40 && pm < 0.6 * rm {
            return Some(TriggerReason::PredictedSafeDownscaleMemory);
        }
    }

    None
}
