//! v1 team handlers.

use axum::extract::{Path, State};
use axum::Extension;

use crate::api::v1::dto::{
    AddTeamMemberRequest, CreateTeamRequest, TeamMemberResponse, TeamResponse,
};
use crate::api::v1::middleware::CurrentUser;
use crate::api::v1::response::{ApiError, ApiResponse, ErrorCode};
use crate::api::AppState;
use crate::models::{Team, TeamMember};

/// `POST /api/v1/teams`
///
/// Creates a team in the caller's organization.
#[utoipa::path(
    post,
    path = "/api/v1/teams",
    tag = "teams",
    operation_id = "teams.create",
    request_body = CreateTeamRequest,
    responses(
        (status = 201, description = "Team created", body = TeamResponse),
        (status = 400, description = "Caller has no organization", body = ApiError),
    )
)]
pub async fn create_team(
    State(state): State<AppState>,
    Extension(CurrentUser(current)): Extension<CurrentUser>,
    axum::Json(req): axum::Json<CreateTeamRequest>,
) -> ApiResponse<TeamResponse> {
    if req.name.trim().is_empty() {
        return ApiResponse::error(ErrorCode::InvalidRequest, "Name cannot be empty");
    }

    let Some(org_id) = current.organization_id else {
        return ApiResponse::error(
            ErrorCode::InvalidRequest,
            "Caller does not belong to an organization",
        );
    };

    let team = Team::new(req.name, org_id);
    match state.db.create_team(&team).await {
        Ok(()) => ApiResponse::created(TeamResponse::from(team)),
        Err(e) => e.into(),
    }
}

/// `GET /api/v1/teams/{teamId}`
#[utoipa::path(
    get,
    path = "/api/v1/teams/{teamId}",
    tag = "teams",
    operation_id = "teams.get",
    params(("teamId" = String, Path, description = "Team ID")),
    responses(
        (status = 200, description = "Team found", body = TeamResponse),
        (status = 404, description = "Team not found", body = ApiError),
    )
)]
pub async fn get_team(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResponse<TeamResponse> {
    match state.db.get_team_by_id(&id).await {
        Ok(Some(team)) => ApiResponse::success(TeamResponse::from(team)),
        Ok(None) => ApiResponse::error(ErrorCode::NotFound, "Team not found"),
        Err(e) => e.into(),
    }
}

/// `GET /api/v1/teams`
///
/// Lists teams in the caller's organization.
#[utoipa::path(
    get,
    path = "/api/v1/teams",
    tag = "teams",
    operation_id = "teams.list",
    responses((status = 200, description = "Teams in the caller's organization", body = Vec<TeamResponse>))
)]
pub async fn list_teams(
    State(state): State<AppState>,
    Extension(CurrentUser(current)): Extension<CurrentUser>,
) -> ApiResponse<Vec<TeamResponse>> {
    let Some(org_id) = current.organization_id else {
        return ApiResponse::success(Vec::new());
    };

    match state.db.list_teams_by_organization(&org_id).await {
        Ok(teams) => ApiResponse::success(teams.into_iter().map(TeamResponse::from).collect()),
        Err(e) => e.into(),
    }
}

/// `DELETE /api/v1/teams/{teamId}`
#[utoipa::path(
    delete,
    path = "/api/v1/teams/{teamId}",
    tag = "teams",
    operation_id = "teams.delete",
    params(("teamId" = String, Path, description = "Team ID")),
    responses(
        (status = 200, description = "Team deleted", body = bool),
        (status = 404, description = "Team not found", body = ApiError),
    )
)]
pub async fn delete_team(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResponse<bool> {
    match state.db.delete_team(&id).await {
        Ok(true) => ApiResponse::success(true),
        Ok(false) => ApiResponse::error(ErrorCode::NotFound, "Team not found"),
        Err(e) => e.into(),
    }
}

/// `POST /api/v1/teams/{teamId}/members`
#[utoipa::path(
    post,
    path = "/api/v1/teams/{teamId}/members",
    tag = "teams",
    operation_id = "teams.addMember",
    params(("teamId" = String, Path, description = "Team ID")),
    request_body = AddTeamMemberRequest,
    responses(
        (status = 201, description = "Member added", body = TeamMemberResponse),
        (status = 404, description = "Team or user not found", body = ApiError),
    )
)]
pub async fn add_team_member(
    State(state): State<AppState>,
    Path(team_id): Path<String>,
    axum::Json(req): axum::Json<AddTeamMemberRequest>,
) -> ApiResponse<TeamMemberResponse> {
    match state.db.get_team_by_id(&team_id).await {
        Ok(Some(_)) => {}
        Ok(None) => return ApiResponse::error(ErrorCode::NotFound, "Team not found"),
        Err(e) => return e.into(),
    }
    match state.db.get_user_by_id(&req.user_id).await {
        Ok(Some(_)) => {}
        Ok(None) => return ApiResponse::error(ErrorCode::NotFound, "User not found"),
        Err(e) => return e.into(),
    }

    let member = TeamMember::new(team_id, req.user_id, req.role);
    match state.db.add_team_member(&member).await {
        Ok(()) => ApiResponse::created(TeamMemberResponse::from(member)),
        Err(e) => e.into(),
    }
}

/// `GET /api/v1/teams/{teamId}/members`
#[utoipa::path(
    get,
    path = "/api/v1/teams/{teamId}/members",
    tag = "teams",
    operation_id = "teams.listMembers",
    params(("teamId" = String, Path, description = "Team ID")),
    responses((status = 200, description = "Team members", body = Vec<TeamMemberResponse>))
)]
pub async fn list_team_members(
    State(state): State<AppState>,
    Path(team_id): Path<String>,
) -> ApiResponse<Vec<TeamMemberResponse>> {
    match state.db.list_team_members(&team_id).await {
        Ok(members) => {
            ApiResponse::success(members.into_iter().map(TeamMemberResponse::from).collect())
        }
        Err(e) => e.into(),
    }
}

/// `DELETE /api/v1/teams/{teamId}/members/{userId}`
#[utoipa::path(
    delete,
    path = "/api/v1/teams/{teamId}/members/{userId}",
    tag = "teams",
    operation_id = "teams.removeMember",
    params(
        ("teamId" = String, Path, description = "Team ID"),
        ("userId" = String, Path, description = "User ID"),
    ),
    responses(
        (status = 200, description = "Member removed", body = bool),
        (status = 404, description = "Membership not found", body = ApiError),
    )
)]
pub async fn remove_team_member(
    State(state): State<AppState>,
    Path((team_id, user_id)): Path<(String, String)>,
) -> ApiResponse<bool> {
    match state.db.remove_team_member(&team_id, &user_id).await {
        Ok(true) => ApiResponse::success(true),
        Ok(false) => ApiResponse::error(ErrorCode::NotFound, "Membership not found"),
        Err(e) => e.into(),
    }
}
