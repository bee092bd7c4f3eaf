use std::sync::Arc;

use crate::db::{DatabaseBackend, OrgTokenUsage, UserPromptCount, UserUsage};
use crate::error::Result;

/// Read-only reporting over recorded prompts and responses.
#[derive(Clone)]
pub struct AnalyticsService {
    db: Arc<dyn DatabaseBackend>,
}

impl AnalyticsService {
    pub fn new(db: Arc<dyn DatabaseBackend>) -> Self {
        Self { db }
    }

    /// Per-user prompt counts and summed token usage.
    pub async fn usage_report(&self) -> Result<Vec<UserUsage>> {
        self.db.usage_report().await
    }

    /// The heaviest prompt submitters, most active first.
    pub async fn top_users(&self, limit: u32) -> Result<Vec<UserPromptCount>> {
        self.db.top_users_by_prompt_count(limit).await
    }

    /// Token consumption grouped by organization. Users without an
    /// organization aggregate under a null key.
    pub async fn token_usage_by_organization(&self) -> Result<Vec<OrgTokenUsage>> {
        self.db.token_usage_by_organization().await
    }
}
