use std::sync::Arc;

use crate::config::AppConfig;
use crate::errors::Result;
use crate::services::{EngineClient, SearchService};

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub engine: Arc<EngineClient>,
    pub search: Arc<SearchService>,
}

impl AppState {
    pub fn new(config: AppConfig) -> Result<Self> {
        let engine = Arc::new(EngineClient::new(&config)?);
        Ok(AppState {
            config: Arc::new(config),
            search: Arc::new(SearchService::new(engine.clone())),
            engine,
        })
    }
}
