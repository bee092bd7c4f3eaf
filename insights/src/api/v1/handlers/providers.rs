//! v1 provider registry handlers.

use axum::extract::{Path, State};

use crate::api::v1::dto::{ProviderResponse, RegisterProviderRequest};
use crate::api::v1::response::{ApiError, ApiResponse, ErrorCode};
use crate::api::AppState;
use crate::models::LlmProvider;

/// `POST /api/v1/llm-providers`
#[utoipa::path(
    post,
    path = "/api/v1/llm-providers",
    tag = "llm-providers",
    operation_id = "providers.register",
    request_body = RegisterProviderRequest,
    responses(
        (status = 201, description = "Provider registered", body = ProviderResponse),
        (status = 409, description = "Name already registered", body = ApiError),
    )
)]
pub async fn register_provider(
    State(state): State<AppState>,
    axum::Json(req): axum::Json<RegisterProviderRequest>,
) -> ApiResponse<ProviderResponse> {
    if req.name.trim().is_empty() {
        return ApiResponse::error(ErrorCode::InvalidRequest, "Name cannot be empty");
    }

    match state.db.get_provider_by_name(&req.name).await {
        Ok(Some(_)) => {
            return ApiResponse::error(ErrorCode::Conflict, "Provider name already registered")
        }
        Ok(None) => {}
        Err(e) => return e.into(),
    }

    let mut provider = LlmProvider::new(req.name, req.api_base_url, req.auth_method);
    provider.config = req.config;
    provider.is_active = req.is_active;

    match state.db.create_provider(&provider).await {
        Ok(()) => ApiResponse::created(ProviderResponse::from(provider)),
        Err(e) => e.into(),
    }
}

/// `GET /api/v1/llm-providers/{providerId}`
#[utoipa::path(
    get,
    path = "/api/v1/llm-providers/{providerId}",
    tag = "llm-providers",
    operation_id = "providers.get",
    params(("providerId" = String, Path, description = "Provider ID")),
    responses(
        (status = 200, description = "Provider found", body = ProviderResponse),
        (status = 404, description = "Provider not found", body = ApiError),
    )
)]
pub async fn get_provider(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResponse<ProviderResponse> {
    match state.db.get_provider_by_id(&id).await {
        Ok(Some(provider)) => ApiResponse::success(ProviderResponse::from(provider)),
        Ok(None) => ApiResponse::error(ErrorCode::NotFound, "LLM Provider not found"),
        Err(e) => e.into(),
    }
}

/// `GET /api/v1/llm-providers`
///
/// Lists active providers only.
#[utoipa::path(
    get,
    path = "/api/v1/llm-providers",
    tag = "llm-providers",
    operation_id = "providers.list",
    responses((status = 200, description = "Active providers", body = Vec<ProviderResponse>))
)]
pub async fn list_providers(State(state): State<AppState>) -> ApiResponse<Vec<ProviderResponse>> {
    match state.db.list_active_providers().await {
        Ok(providers) => {
            ApiResponse::success(providers.into_iter().map(ProviderResponse::from).collect())
        }
        Err(e) => e.into(),
    }
}
