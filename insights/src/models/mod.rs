mod common;
mod organization;
mod prompt;
mod provider;
mod response;
mod team;
mod user;

pub use common::Metadata;
pub use organization::Organization;
pub use prompt::Prompt;
pub use provider::{AuthMethod, LlmProvider};
pub use response::LlmResponse;
pub use team::{Team, TeamMember, TeamRole};
pub use user::User;
