mod analytics;

pub use analytics::AnalyticsService;
