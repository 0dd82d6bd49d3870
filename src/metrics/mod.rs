//! A slim set of `metrics` crate instruments: one zero-sized struct per
//! subsystem with static recording methods, scoped to what this service
//! actually does. No exporter is wired up — see the design notes for
//! why that's out of scope here.

pub struct IngestionMetrics;

impl IngestionMetrics {
    pub fn record_cost_accepted() {
        metrics::counter!("metric_hub_cost_ingest_accepted_total").increment(1);
    }

    pub fn record_forecast_accepted() {
        metrics::counter!("metric_hub_forecast_ingest_accepted_total").increment(1);
    }

    pub fn record_rejected(kind: &'static str) {
        metrics::counter!("metric_hub_ingest_rejected_total", "kind" => kind).increment(1);
    }
}

pub struct EvaluationMetrics;

impl EvaluationMetrics {
    pub fn record_duration_ms(kind: &'static str, duration_ms: f64) {
        metrics::histogram!("metric_hub_evaluation_duration_ms", "kind" => kind)
            .record(duration_ms);
    }

    pub fn record_trigger(reason: &'static str) {
        metrics::counter!("metric_hub_triggers_total", "reason" => reason).increment(1);
    }

    pub fn record_suppressed() {
        metrics::counter!("metric_hub_cooldown_suppressed_total").increment(1);
    }

    pub fn record_deadline_exceeded(kind: &'static str) {
        metrics::counter!("metric_hub_evaluation_deadline_exceeded_total", "kind" => kind)
            .increment(1);
    }
}

pub struct StoreMetrics;

impl StoreMetrics {
    pub fn record_operation(operation: &'static str, success: bool) {
        let outcome = if success { "ok" } else { "error" };
        metrics::counter!("metric_hub_store_operations_total", "operation" => operation, "outcome" => outcome)
            .increment(1);
    }
}
