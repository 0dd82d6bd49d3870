//! Metric Hub: ingestion, aggregation, and dispatch between cost and
//! forecast producers and the downstream optimisation agent's work
//! queue.

pub mod aggregator;
pub mod api;
pub mod config;
pub mod domain;
pub mod metrics;
pub mod observability;
pub mod store;
pub mod validation;

pub use aggregator::Aggregator;
pub use config::HubConfig;
pub use domain::{HubError, Result};

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Initialize process-wide ambient state (tracing). Call once at
/// startup before constructing an `Aggregator`.
pub fn init() -> Result<()> {
    observability::init_tracing();
    Ok(())
}
