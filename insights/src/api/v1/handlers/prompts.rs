//! v1 prompt handlers.

use axum::extract::{Path, Query, State};
use axum::Extension;

use crate::api::v1::dto::{
    content_preview, ListPromptsQuery, PromptSummary, PromptWithResponse, SubmitPromptRequest,
};
use crate::api::v1::middleware::CurrentUser;
use crate::api::v1::response::{ApiError, ApiResponse, ErrorCode};
use crate::api::AppState;
use crate::models::Prompt;

/// `POST /api/v1/prompts`
///
/// Records the prompt, dispatches it to the named provider, and returns the
/// combined prompt + reply payload. The prompt row is kept even when the
/// vendor call fails; no response row is written in that case.
#[utoipa::path(
    post,
    path = "/api/v1/prompts",
    tag = "prompts",
    operation_id = "prompts.submit",
    request_body = SubmitPromptRequest,
    responses(
        (status = 201, description = "Prompt dispatched and reply recorded", body = PromptWithResponse),
        (status = 404, description = "Provider not registered", body = ApiError),
        (status = 502, description = "Vendor request failed", body = ApiError),
    )
)]
pub async fn submit_prompt(
    State(state): State<AppState>,
    Extension(CurrentUser(current)): Extension<CurrentUser>,
    axum::Json(req): axum::Json<SubmitPromptRequest>,
) -> ApiResponse<PromptWithResponse> {
    if req.content.trim().is_empty() {
        return ApiResponse::error(ErrorCode::InvalidRequest, "Content cannot be empty");
    }

    let mut prompt = Prompt::new(req.content, current.id.clone());
    prompt.parameters = req.parameters.clone();
    prompt.organization_id = current.organization_id.clone();

    if let Err(e) = state.db.create_prompt(&prompt).await {
        return e.into();
    }

    let response = match state
        .dispatch
        .process_prompt(&prompt, &req.llm_provider, &req.parameters)
        .await
    {
        Ok(response) => response,
        Err(e) => return e.into(),
    };

    ApiResponse::created(PromptWithResponse {
        prompt_id: prompt.id,
        prompt_content: prompt.content,
        response_id: Some(response.id),
        response_content: Some(response.content),
        llm_provider: Some(req.llm_provider),
        latency: Some(response.latency),
        token_count: Some(response.token_count),
        created_at: prompt.created_at,
    })
}

/// `GET /api/v1/prompts/{promptId}`
///
/// Returns the prompt and its latest reply. Access is limited to the owner,
/// superusers, and members of the same organization.
#[utoipa::path(
    get,
    path = "/api/v1/prompts/{promptId}",
    tag = "prompts",
    operation_id = "prompts.get",
    params(("promptId" = String, Path, description = "Prompt ID")),
    responses(
        (status = 200, description = "Prompt found", body = PromptWithResponse),
        (status = 403, description = "Not enough permissions", body = ApiError),
        (status = 404, description = "Prompt not found", body = ApiError),
    )
)]
pub async fn get_prompt(
    State(state): State<AppState>,
    Extension(CurrentUser(current)): Extension<CurrentUser>,
    Path(id): Path<String>,
) -> ApiResponse<PromptWithResponse> {
    let prompt = match state.db.get_prompt_by_id(&id).await {
        Ok(Some(prompt)) => prompt,
        Ok(None) => return ApiResponse::error(ErrorCode::NotFound, "Prompt not found"),
        Err(e) => return e.into(),
    };

    if prompt.user_id != current.id && !current.is_superuser {
        let same_org = prompt.organization_id.is_some()
            && prompt.organization_id == current.organization_id;
        if !same_org {
            return ApiResponse::error(
                ErrorCode::Forbidden,
                "Not enough permissions to access this prompt",
            );
        }
    }

    let response = match state.db.latest_response_for_prompt(&prompt.id).await {
        Ok(response) => response,
        Err(e) => return e.into(),
    };

    let Some(response) = response else {
        return ApiResponse::success(PromptWithResponse {
            prompt_id: prompt.id,
            prompt_content: prompt.content,
            response_id: None,
            response_content: None,
            llm_provider: None,
            latency: None,
            token_count: None,
            created_at: prompt.created_at,
        });
    };

    let provider_name = match &response.llm_provider_id {
        Some(provider_id) => match state.db.get_provider_by_id(provider_id).await {
            Ok(provider) => provider.map(|p| p.name),
            Err(e) => return e.into(),
        },
        None => None,
    };

    ApiResponse::success(PromptWithResponse {
        prompt_id: prompt.id,
        prompt_content: prompt.content,
        response_id: Some(response.id),
        response_content: Some(response.content),
        llm_provider: provider_name,
        latency: Some(response.latency),
        token_count: Some(response.token_count),
        created_at: prompt.created_at,
    })
}

/// `GET /api/v1/prompts`
///
/// Lists the caller's prompts, or the whole organization's when `org_only`
/// is set (superusers always see their own list).
#[utoipa::path(
    get,
    path = "/api/v1/prompts",
    tag = "prompts",
    operation_id = "prompts.list",
    params(
        ("skip" = u32, Query, description = "Rows to skip"),
        ("limit" = u32, Query, description = "Maximum rows to return"),
        ("org_only" = bool, Query, description = "List the organization's prompts"),
    ),
    responses((status = 200, description = "Prompt summaries", body = Vec<PromptSummary>))
)]
pub async fn list_prompts(
    State(state): State<AppState>,
    Extension(CurrentUser(current)): Extension<CurrentUser>,
    Query(query): Query<ListPromptsQuery>,
) -> ApiResponse<Vec<PromptSummary>> {
    let prompts = if query.org_only && !current.is_superuser {
        let Some(org_id) = current.organization_id.as_deref() else {
            return ApiResponse::success(Vec::new());
        };
        state
            .db
            .list_prompts_by_organization(org_id, query.skip, query.limit)
            .await
    } else {
        state
            .db
            .list_prompts_by_user(&current.id, query.skip, query.limit)
            .await
    };

    let prompts = match prompts {
        Ok(prompts) => prompts,
        Err(e) => return e.into(),
    };

    let counts = futures::future::try_join_all(
        prompts
            .iter()
            .map(|prompt| state.db.count_responses_for_prompt(&prompt.id)),
    )
    .await;
    let counts = match counts {
        Ok(counts) => counts,
        Err(e) => return e.into(),
    };

    let summaries = prompts
        .into_iter()
        .zip(counts)
        .map(|(prompt, response_count)| PromptSummary {
            prompt_id: prompt.id,
            content: content_preview(&prompt.content),
            created_at: prompt.created_at,
            response_count,
        })
        .collect();

    ApiResponse::success(summaries)
}
