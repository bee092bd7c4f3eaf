use serde::Serialize;

use crate::api::v1::response::ApiResponse;

#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct HealthData {
    pub status: String,
    pub version: String,
}

/// `GET /api/v1/health`
#[utoipa::path(
    get,
    path = "/api/v1/health",
    tag = "health",
    operation_id = "health.check",
    responses((status = 200, description = "Service is healthy", body = HealthData))
)]
pub async fn health_check() -> ApiResponse<HealthData> {
    ApiResponse::success(HealthData {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}
