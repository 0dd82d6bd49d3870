mod error;
mod schema;

pub use error::{HubError, Result};
pub use schema::{
    ClusterInfo, CostDeployment, CostPayload, ForecastDeployment, ForecastPayload, AgentJob,
    Resources, TriggerReason,
};
