use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::{Team, TeamMember, TeamRole};

#[derive(Debug, Clone, Deserialize, utoipa::ToSchema)]
pub struct CreateTeamRequest {
    pub name: String,
}

#[derive(Debug, Clone, Serialize, utoipa::ToSchema)]
pub struct TeamResponse {
    pub id: String,
    pub name: String,
    pub organization_id: String,
    pub created_at: DateTime<Utc>,
}

impl From<Team> for TeamResponse {
    fn from(team: Team) -> Self {
        Self {
            id: team.id,
            name: team.name,
            organization_id: team.organization_id,
            created_at: team.created_at,
        }
    }
}

#[derive(Debug, Clone, Deserialize, utoipa::ToSchema)]
pub struct AddTeamMemberRequest {
    pub user_id: String,
    #[serde(default)]
    pub role: TeamRole,
}

#[derive(Debug, Clone, Serialize, utoipa::ToSchema)]
pub struct TeamMemberResponse {
    pub id: String,
    pub team_id: String,
    pub user_id: String,
    pub role: TeamRole,
    pub created_at: DateTime<Utc>,
}

impl From<TeamMember> for TeamMemberResponse {
    fn from(member: TeamMember) -> Self {
        Self {
            id: member.id,
            team_id: member.team_id,
            user_id: member.user_id,
            role: member.role,
            created_at: member.created_at,
        }
    }
}
