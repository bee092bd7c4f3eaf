pub mod analytics;
pub mod auth;
pub mod health;
pub mod organizations;
pub mod prompts;
pub mod providers;
pub mod responses;
pub mod teams;
pub mod users;

pub use health::health_check;
