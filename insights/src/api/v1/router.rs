use axum::{
    middleware,
    routing::{get, post},
    Router,
};

use crate::api::state::AppState;

use super::handlers;
use super::middleware::jwt_auth_middleware;

pub fn v1_router(state: AppState) -> Router<AppState> {
    // Registration stays public so a fresh deployment can bootstrap its
    // first account before any token exists.
    let public_routes = Router::new()
        .route("/health", get(handlers::health_check))
        .route("/auth/token", post(handlers::auth::issue_token))
        .route("/auth/register", post(handlers::users::create_user))
        .route("/openapi.json", get(super::openapi::openapi_json))
        .merge(super::openapi::redoc_router());

    let users = Router::new()
        .route("/", get(handlers::users::list_users))
        .route(
            "/{userId}",
            get(handlers::users::get_user)
                .put(handlers::users::update_user)
                .delete(handlers::users::delete_user),
        );

    let organizations = Router::new()
        .route(
            "/",
            get(handlers::organizations::list_organizations)
                .post(handlers::organizations::create_organization),
        )
        .route(
            "/{orgId}",
            get(handlers::organizations::get_organization)
                .delete(handlers::organizations::delete_organization),
        );

    let teams = Router::new()
        .route(
            "/",
            get(handlers::teams::list_teams).post(handlers::teams::create_team),
        )
        .route(
            "/{teamId}",
            get(handlers::teams::get_team).delete(handlers::teams::delete_team),
        )
        .route(
            "/{teamId}/members",
            get(handlers::teams::list_team_members).post(handlers::teams::add_team_member),
        )
        .route(
            "/{teamId}/members/{userId}",
            axum::routing::delete(handlers::teams::remove_team_member),
        );

    let providers = Router::new()
        .route(
            "/",
            get(handlers::providers::list_providers).post(handlers::providers::register_provider),
        )
        .route("/{providerId}", get(handlers::providers::get_provider));

    let prompts = Router::new()
        .route(
            "/",
            get(handlers::prompts::list_prompts).post(handlers::prompts::submit_prompt),
        )
        .route("/{promptId}", get(handlers::prompts::get_prompt));

    let responses = Router::new().route("/{responseId}", get(handlers::responses::get_response));

    let analytics = Router::new()
        .route("/usage", get(handlers::analytics::usage_report))
        .route("/top-users", get(handlers::analytics::top_users))
        .route(
            "/organizations",
            get(handlers::analytics::organization_usage),
        );

    let protected_routes = Router::new()
        .nest("/users", users)
        .nest("/organizations", organizations)
        .nest("/teams", teams)
        .nest("/llm-providers", providers)
        .nest("/prompts", prompts)
        .nest("/responses", responses)
        .nest("/analytics", analytics)
        .route_layer(middleware::from_fn_with_state(state, jwt_auth_middleware));

    Router::new().merge(public_routes).merge(protected_routes)
}
