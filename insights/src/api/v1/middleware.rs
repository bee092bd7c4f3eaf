//! # V1 JWT Authentication Middleware
//!
//! Protects all v1 routes except the explicitly public ones (health, docs,
//! token issuance, registration). Validates the `Authorization: Bearer`
//! access token, loads the user it names, and stashes it in the request
//! extensions for handlers to pick up.

use axum::{
    body::Body,
    extract::State,
    http::Request,
    middleware::Next,
    response::{IntoResponse, Response},
};

use crate::api::state::AppState;
use crate::auth::decode_access_token;
use crate::models::User;

use super::response::{ApiResponse, ErrorCode};

/// The authenticated caller, inserted into request extensions by
/// [`jwt_auth_middleware`].
#[derive(Debug, Clone)]
pub struct CurrentUser(pub User);

/// Axum middleware enforcing JWT bearer authentication.
///
/// - Missing or malformed `Authorization` header → 401.
/// - Invalid or expired token, or unknown subject → 401.
/// - Deactivated user → 403.
/// - Otherwise the request proceeds with [`CurrentUser`] attached.
pub async fn jwt_auth_middleware(
    State(state): State<AppState>,
    mut request: Request<Body>,
    next: Next,
) -> Response {
    let auth_header = request
        .headers()
        .get("Authorization")
        .and_then(|h| h.to_str().ok());

    let token = match auth_header {
        Some(h) if h.starts_with("Bearer ") => &h[7..],
        Some(_) => {
            return ApiResponse::<()>::error(
                ErrorCode::Unauthorized,
                "Invalid authorization header format. Expected: Bearer <token>",
            )
            .into_response();
        }
        None => {
            return ApiResponse::<()>::error(
                ErrorCode::Unauthorized,
                "Missing authorization header",
            )
            .into_response();
        }
    };

    let claims = match decode_access_token(token, &state.config.auth.secret_key) {
        Ok(claims) => claims,
        Err(_) => {
            return ApiResponse::<()>::error(ErrorCode::Unauthorized, "Invalid or expired token")
                .into_response();
        }
    };

    let user = match state.db.get_user_by_email(&claims.sub).await {
        Ok(Some(user)) => user,
        Ok(None) => {
            return ApiResponse::<()>::error(ErrorCode::Unauthorized, "Unknown user")
                .into_response();
        }
        Err(e) => return ApiResponse::<()>::from(e).into_response(),
    };

    if !user.is_active {
        return ApiResponse::<()>::error(ErrorCode::Forbidden, "Inactive user").into_response();
    }

    request.extensions_mut().insert(CurrentUser(user));
    next.run(request).await
}
