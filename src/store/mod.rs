mod error;
mod keys;
mod memory;
mod redis;
mod traits;

pub use error::StoreError;
pub use keys::{cooldown_key, AGENT_QUEUE_KEY, COST_LATEST_KEY};
pub use memory::InMemoryStateStore;
pub use redis::RedisStateStore;
pub use traits::StateStore;
