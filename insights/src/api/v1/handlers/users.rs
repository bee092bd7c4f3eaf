//! v1 user handlers.

use axum::extract::{Path, State};
use axum::Extension;
use chrono::Utc;

use crate::api::v1::dto::{CreateUserRequest, UpdateUserRequest, UserResponse};
use crate::api::v1::middleware::CurrentUser;
use crate::api::v1::response::{ApiError, ApiResponse, ErrorCode};
use crate::api::AppState;
use crate::auth::hash_password;
use crate::models::User;

/// `POST /api/v1/auth/register`
///
/// Public registration endpoint.
#[utoipa::path(
    post,
    path = "/api/v1/auth/register",
    tag = "users",
    operation_id = "users.register",
    request_body = CreateUserRequest,
    responses(
        (status = 201, description = "User created", body = UserResponse),
        (status = 400, description = "Invalid request", body = ApiError),
        (status = 409, description = "Email already registered", body = ApiError),
    )
)]
pub async fn create_user(
    State(state): State<AppState>,
    axum::Json(req): axum::Json<CreateUserRequest>,
) -> ApiResponse<UserResponse> {
    if req.email.trim().is_empty() || !req.email.contains('@') {
        return ApiResponse::error(ErrorCode::InvalidRequest, "A valid email is required");
    }
    if req.password.is_empty() {
        return ApiResponse::error(ErrorCode::InvalidRequest, "Password cannot be empty");
    }

    match state.db.get_user_by_email(&req.email).await {
        Ok(Some(_)) => {
            return ApiResponse::error(ErrorCode::Conflict, "Email already registered")
        }
        Ok(None) => {}
        Err(e) => return e.into(),
    }

    let hashed = match hash_password(&req.password) {
        Ok(hashed) => hashed,
        Err(e) => return e.into(),
    };

    let mut user = User::new(req.email, hashed, req.first_name, req.last_name);
    user.role = req.role;
    user.organization_id = req.organization_id;

    match state.db.create_user(&user).await {
        Ok(()) => ApiResponse::created(UserResponse::from(user)),
        Err(e) => e.into(),
    }
}

/// `GET /api/v1/users/{userId}`
#[utoipa::path(
    get,
    path = "/api/v1/users/{userId}",
    tag = "users",
    operation_id = "users.get",
    params(("userId" = String, Path, description = "User ID")),
    responses(
        (status = 200, description = "User found", body = UserResponse),
        (status = 404, description = "User not found", body = ApiError),
    )
)]
pub async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResponse<UserResponse> {
    match state.db.get_user_by_id(&id).await {
        Ok(Some(user)) => ApiResponse::success(UserResponse::from(user)),
        Ok(None) => ApiResponse::error(ErrorCode::NotFound, "User not found"),
        Err(e) => e.into(),
    }
}

/// `GET /api/v1/users`
///
/// Lists users in the caller's organization. A caller without an
/// organization sees an empty list.
#[utoipa::path(
    get,
    path = "/api/v1/users",
    tag = "users",
    operation_id = "users.list",
    responses((status = 200, description = "Users in the caller's organization", body = Vec<UserResponse>))
)]
pub async fn list_users(
    State(state): State<AppState>,
    Extension(CurrentUser(current)): Extension<CurrentUser>,
) -> ApiResponse<Vec<UserResponse>> {
    let Some(org_id) = current.organization_id else {
        return ApiResponse::success(Vec::new());
    };

    match state.db.list_users_by_organization(&org_id).await {
        Ok(users) => {
            ApiResponse::success(users.into_iter().map(UserResponse::from).collect())
        }
        Err(e) => e.into(),
    }
}

/// `PUT /api/v1/users/{userId}`
#[utoipa::path(
    put,
    path = "/api/v1/users/{userId}",
    tag = "users",
    operation_id = "users.update",
    params(("userId" = String, Path, description = "User ID")),
    request_body = UpdateUserRequest,
    responses(
        (status = 200, description = "User updated", body = UserResponse),
        (status = 404, description = "User not found", body = ApiError),
    )
)]
pub async fn update_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
    axum::Json(req): axum::Json<UpdateUserRequest>,
) -> ApiResponse<UserResponse> {
    let mut user = match state.db.get_user_by_id(&id).await {
        Ok(Some(user)) => user,
        Ok(None) => return ApiResponse::error(ErrorCode::NotFound, "User not found"),
        Err(e) => return e.into(),
    };

    if let Some(password) = req.password {
        match hash_password(&password) {
            Ok(hashed) => user.hashed_password = hashed,
            Err(e) => return e.into(),
        }
    }
    if let Some(first_name) = req.first_name {
        user.first_name = first_name;
    }
    if let Some(last_name) = req.last_name {
        user.last_name = last_name;
    }
    if let Some(role) = req.role {
        user.role = Some(role);
    }
    if let Some(is_active) = req.is_active {
        user.is_active = is_active;
    }
    if let Some(organization_id) = req.organization_id {
        user.organization_id = Some(organization_id);
    }
    user.updated_at = Utc::now();

    match state.db.update_user(&user).await {
        Ok(()) => ApiResponse::success(UserResponse::from(user)),
        Err(e) => e.into(),
    }
}

/// `DELETE /api/v1/users/{userId}`
#[utoipa::path(
    delete,
    path = "/api/v1/users/{userId}",
    tag = "users",
    operation_id = "users.delete",
    params(("userId" = String, Path, description = "User ID")),
    responses(
        (status = 200, description = "User deleted", body = bool),
        (status = 404, description = "User not found", body = ApiError),
    )
)]
pub async fn delete_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResponse<bool> {
    match state.db.delete_user(&id).await {
        Ok(true) => ApiResponse::success(true),
        Ok(false) => ApiResponse::error(ErrorCode::NotFound, "User not found"),
        Err(e) => e.into(),
    }
}
