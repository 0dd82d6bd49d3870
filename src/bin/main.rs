use std::sync::Arc;

use anyhow::Result;
use tracing::info;

use metric_hub::aggregator::Aggregator;
use metric_hub::api::{self, AppState};
use metric_hub::store::{RedisStateStore, StateStore};
use metric_hub::HubConfig;

#[tokio::main]
async fn main() -> Result<()> {
    metric_hub::init()?;
    info!("metric-hub v{}", metric_hub::VERSION);

    let config = HubConfig::from_env();
    let store: Arc<dyn StateStore> =
        Arc::new(RedisStateStore::new(&config.redis_addr, config.redis_pass.clone())?);
    let aggregator = Aggregator::new(store);

    api::serve(AppState { aggregator }).await
}
