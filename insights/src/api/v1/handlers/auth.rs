//! v1 authentication handlers.

use axum::extract::State;

use crate::api::v1::dto::{TokenRequest, TokenResponse};
use crate::api::v1::response::{ApiError, ApiResponse, ErrorCode};
use crate::api::AppState;
use crate::auth::{create_access_token, verify_password};

/// `POST /api/v1/auth/token`
///
/// Exchanges email + password for a bearer access token. Credential
/// failures are indistinguishable on the wire.
#[utoipa::path(
    post,
    path = "/api/v1/auth/token",
    tag = "authentication",
    operation_id = "auth.token",
    request_body = TokenRequest,
    responses(
        (status = 200, description = "Token issued", body = TokenResponse),
        (status = 401, description = "Invalid credentials", body = ApiError),
        (status = 403, description = "Inactive user", body = ApiError),
    )
)]
pub async fn issue_token(
    State(state): State<AppState>,
    axum::Json(req): axum::Json<TokenRequest>,
) -> ApiResponse<TokenResponse> {
    let user = match state.db.get_user_by_email(&req.email).await {
        Ok(Some(user)) => user,
        Ok(None) => {
            return ApiResponse::error(ErrorCode::Unauthorized, "Incorrect email or password")
        }
        Err(e) => return e.into(),
    };

    if !verify_password(&req.password, &user.hashed_password) {
        return ApiResponse::error(ErrorCode::Unauthorized, "Incorrect email or password");
    }

    if !user.is_active {
        return ApiResponse::error(ErrorCode::Forbidden, "Inactive user");
    }

    match create_access_token(
        &user.email,
        &state.config.auth.secret_key,
        state.config.auth.token_expire_minutes,
    ) {
        Ok(token) => ApiResponse::success(TokenResponse::bearer(token)),
        Err(e) => e.into(),
    }
}
