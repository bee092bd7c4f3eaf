use std::sync::Arc;

use crate::config::Config;
use crate::db::DatabaseBackend;
use crate::error::Result;
use crate::llm::DispatchService;
use crate::services::AnalyticsService;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub db: Arc<dyn DatabaseBackend>,
    pub dispatch: DispatchService,
    pub analytics: AnalyticsService,
}

impl AppState {
    pub fn new(config: Config, db: Arc<dyn DatabaseBackend>) -> Result<Self> {
        let config = Arc::new(config);
        let dispatch = DispatchService::new(config.clone(), db.clone())?;
        let analytics = AnalyticsService::new(db.clone());

        Ok(Self {
            config,
            db,
            dispatch,
            analytics,
        })
    }
}
