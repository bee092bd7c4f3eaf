pub mod analytics;
pub mod auth;
pub mod organizations;
pub mod prompts;
pub mod providers;
pub mod responses;
pub mod teams;
pub mod users;

pub use analytics::*;
pub use auth::*;
pub use organizations::*;
pub use prompts::*;
pub use providers::*;
pub use responses::*;
pub use teams::*;
pub use users::*;
