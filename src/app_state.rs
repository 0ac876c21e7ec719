use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};

use crate::config::Config;

/// Source of the `timestamp` field, injectable so tests can pin time.
pub type Clock = Arc<dyn Fn() -> f64 + Send + Sync>;

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub clock: Clock,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self::with_clock(config, Arc::new(wall_clock))
    }

    pub fn with_clock(config: Config, clock: Clock) -> Self {
        Self { config, clock }
    }
}

fn wall_clock() -> f64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs_f64()
}
