//! Environment-driven settings. The hub has exactly two external knobs
//! and no file format to parse, so this follows a plain
//! `std::env::var(...).unwrap_or_else(...)` idiom rather than a
//! config-file layer.

const DEFAULT_REDIS_ADDR: &str = "redis://127.0.0.1:6379";

#[derive(Debug, Clone)]
pub struct HubConfig {
    pub redis_addr: String,
    pub redis_pass: Option<String>,
}

impl HubConfig {
    pub fn from_env() -> Self {
        Self {
            redis_addr: std::env::var("REDIS_SERVICE_ADDR")
                .unwrap_or_else(|_| DEFAULT_REDIS_ADDR.to_string()),
            redis_pass: std::env::var("REDIS_SERVICE_PASS").ok(),
        }
    }
}
