//! v1 analytics handlers. All superuser-only.

use axum::extract::{Query, State};
use axum::Extension;

use crate::api::v1::dto::{OrgUsageResponse, TopUsersQuery, TopUsersResponse, UsageReportResponse};
use crate::api::v1::middleware::CurrentUser;
use crate::api::v1::response::{ApiError, ApiResponse, ErrorCode};
use crate::api::AppState;

fn require_superuser<T: serde::Serialize>(current: &crate::models::User) -> Option<ApiResponse<T>> {
    if current.is_superuser {
        None
    } else {
        Some(ApiResponse::error(ErrorCode::Forbidden, "Not authorized"))
    }
}

/// `GET /api/v1/analytics/usage`
#[utoipa::path(
    get,
    path = "/api/v1/analytics/usage",
    tag = "analytics",
    operation_id = "analytics.usage",
    responses(
        (status = 200, description = "Per-user usage report", body = UsageReportResponse),
        (status = 403, description = "Not authorized", body = ApiError),
    )
)]
pub async fn usage_report(
    State(state): State<AppState>,
    Extension(CurrentUser(current)): Extension<CurrentUser>,
) -> ApiResponse<UsageReportResponse> {
    if let Some(denied) = require_superuser(&current) {
        return denied;
    }

    match state.analytics.usage_report().await {
        Ok(users) => ApiResponse::success(UsageReportResponse { users }),
        Err(e) => e.into(),
    }
}

/// `GET /api/v1/analytics/top-users`
#[utoipa::path(
    get,
    path = "/api/v1/analytics/top-users",
    tag = "analytics",
    operation_id = "analytics.topUsers",
    params(("limit" = u32, Query, description = "Number of users to return")),
    responses(
        (status = 200, description = "Most active users", body = TopUsersResponse),
        (status = 403, description = "Not authorized", body = ApiError),
    )
)]
pub async fn top_users(
    State(state): State<AppState>,
    Extension(CurrentUser(current)): Extension<CurrentUser>,
    Query(query): Query<TopUsersQuery>,
) -> ApiResponse<TopUsersResponse> {
    if let Some(denied) = require_superuser(&current) {
        return denied;
    }

    match state.analytics.top_users(query.limit).await {
        Ok(users) => ApiResponse::success(TopUsersResponse { users }),
        Err(e) => e.into(),
    }
}

/// `GET /api/v1/analytics/organizations`
#[utoipa::path(
    get,
    path = "/api/v1/analytics/organizations",
    tag = "analytics",
    operation_id = "analytics.organizations",
    responses(
        (status = 200, description = "Token usage by organization", body = OrgUsageResponse),
        (status = 403, description = "Not authorized", body = ApiError),
    )
)]
pub async fn organization_usage(
    State(state): State<AppState>,
    Extension(CurrentUser(current)): Extension<CurrentUser>,
) -> ApiResponse<OrgUsageResponse> {
    if let Some(denied) = require_superuser(&current) {
        return denied;
    }

    match state.analytics.token_usage_by_organization().await {
        Ok(organizations) => ApiResponse::success(OrgUsageResponse { organizations }),
        Err(e) => e.into(),
    }
}
