mod analytics;
mod organizations;
mod prompts;
mod providers;
mod responses;
mod teams;
mod users;

pub use analytics::AnalyticsRepository;
pub use organizations::OrganizationRepository;
pub use prompts::PromptRepository;
pub use providers::ProviderRepository;
pub use responses::ResponseRepository;
pub use teams::TeamRepository;
pub use users::UserRepository;

use chrono::{DateTime, Utc};

/// Parse a stored RFC 3339 timestamp, falling back to now for corrupt rows.
pub(crate) fn parse_ts(value: &str) -> DateTime<Utc> {
    DateTime::parse_from_rfc3339(value)
        .map(|dt| dt.with_timezone(&Utc))
        .unwrap_or_else(|_| Utc::now())
}
