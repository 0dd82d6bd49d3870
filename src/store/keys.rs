pub const COST_LATEST_KEY: &str = "cost:latest";
pub const AGENT_QUEUE_KEY: &str = "queue:agent:jobs";

pub fn cooldown_key(deployment_name: &str) -> String {
    format!("trigger:cooldown:{deployment_name}")
}
