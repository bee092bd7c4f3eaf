//! v1 response handlers.

use axum::extract::{Path, State};

use crate::api::v1::dto::ResponseRead;
use crate::api::v1::response::{ApiError, ApiResponse, ErrorCode};
use crate::api::AppState;

/// `GET /api/v1/responses/{responseId}`
#[utoipa::path(
    get,
    path = "/api/v1/responses/{responseId}",
    tag = "responses",
    operation_id = "responses.get",
    params(("responseId" = String, Path, description = "Response ID")),
    responses(
        (status = 200, description = "Response found", body = ResponseRead),
        (status = 404, description = "Response not found", body = ApiError),
    )
)]
pub async fn get_response(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResponse<ResponseRead> {
    match state.db.get_response_by_id(&id).await {
        Ok(Some(response)) => ApiResponse::success(ResponseRead::from(response)),
        Ok(None) => ApiResponse::error(ErrorCode::NotFound, "Response not found"),
        Err(e) => e.into(),
    }
}
