//! v1 organization handlers.

use axum::extract::{Path, State};
use axum::Extension;

use crate::api::v1::dto::{CreateOrganizationRequest, OrganizationResponse};
use crate::api::v1::middleware::CurrentUser;
use crate::api::v1::response::{ApiError, ApiResponse, ErrorCode};
use crate::api::AppState;
use crate::models::Organization;

/// `POST /api/v1/organizations`
///
/// Generates the organization's API key on creation.
#[utoipa::path(
    post,
    path = "/api/v1/organizations",
    tag = "organizations",
    operation_id = "organizations.create",
    request_body = CreateOrganizationRequest,
    responses(
        (status = 201, description = "Organization created", body = OrganizationResponse),
        (status = 409, description = "Name already taken", body = ApiError),
    )
)]
pub async fn create_organization(
    State(state): State<AppState>,
    axum::Json(req): axum::Json<CreateOrganizationRequest>,
) -> ApiResponse<OrganizationResponse> {
    if req.name.trim().is_empty() {
        return ApiResponse::error(ErrorCode::InvalidRequest, "Name cannot be empty");
    }

    match state.db.get_organization_by_name(&req.name).await {
        Ok(Some(_)) => {
            return ApiResponse::error(ErrorCode::Conflict, "Organization name already taken")
        }
        Ok(None) => {}
        Err(e) => return e.into(),
    }

    let org = Organization::new(req.name);
    match state.db.create_organization(&org).await {
        Ok(()) => ApiResponse::created(OrganizationResponse::from(org)),
        Err(e) => e.into(),
    }
}

/// `GET /api/v1/organizations/{orgId}`
#[utoipa::path(
    get,
    path = "/api/v1/organizations/{orgId}",
    tag = "organizations",
    operation_id = "organizations.get",
    params(("orgId" = String, Path, description = "Organization ID")),
    responses(
        (status = 200, description = "Organization found", body = OrganizationResponse),
        (status = 404, description = "Organization not found", body = ApiError),
    )
)]
pub async fn get_organization(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResponse<OrganizationResponse> {
    match state.db.get_organization_by_id(&id).await {
        Ok(Some(org)) => ApiResponse::success(OrganizationResponse::from(org)),
        Ok(None) => ApiResponse::error(ErrorCode::NotFound, "Organization not found"),
        Err(e) => e.into(),
    }
}

/// `GET /api/v1/organizations`
///
/// Superuser only.
#[utoipa::path(
    get,
    path = "/api/v1/organizations",
    tag = "organizations",
    operation_id = "organizations.list",
    responses(
        (status = 200, description = "All organizations", body = Vec<OrganizationResponse>),
        (status = 403, description = "Not authorized", body = ApiError),
    )
)]
pub async fn list_organizations(
    State(state): State<AppState>,
    Extension(CurrentUser(current)): Extension<CurrentUser>,
) -> ApiResponse<Vec<OrganizationResponse>> {
    if !current.is_superuser {
        return ApiResponse::error(ErrorCode::Forbidden, "Not authorized");
    }

    match state.db.list_organizations().await {
        Ok(orgs) => {
            ApiResponse::success(orgs.into_iter().map(OrganizationResponse::from).collect())
        }
        Err(e) => e.into(),
    }
}

/// `DELETE /api/v1/organizations/{orgId}`
#[utoipa::path(
    delete,
    path = "/api/v1/organizations/{orgId}",
    tag = "organizations",
    operation_id = "organizations.delete",
    params(("orgId" = String, Path, description = "Organization ID")),
    responses(
        (status = 200, description = "Organization deleted", body = bool),
        (status = 404, description = "Organization not found", body = ApiError),
    )
)]
pub async fn delete_organization(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResponse<bool> {
    match state.db.delete_organization(&id).await {
        Ok(true) => ApiResponse::success(true),
        Ok(false) => ApiResponse::error(ErrorCode::NotFound, "Organization not found"),
        Err(e) => e.into(),
    }
}
