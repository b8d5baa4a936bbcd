use parking_lot::RwLock;
use std::sync::Arc;

use crate::config::Config;
use crate::engine::RankingEngine;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub engine: Arc<RwLock<RankingEngine>>,
    pub http_client: reqwest::Client,
}

impl AppState {
    pub fn new(config: Config) -> anyhow::Result<Self> {
        Ok(Self {
            config,
            engine: Arc::new(RwLock::new(RankingEngine::new())),
            http_client: reqwest::Client::builder()
                .connect_timeout(std::time::Duration::from_secs(10))
                .timeout(std::time::Duration::from_secs(60))
                .build()?,
        })
    }
}
