// Not every test binary uses every helper.
#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use serde_json::Value;
use tempfile::TempDir;
use tower::ServiceExt;

use insights::api::{create_router, AppState};
use insights::auth::hash_password;
use insights::config::{
    AuthConfig, Config, DatabaseConfig, ProvidersConfig, ServerConfig, VendorConfig,
};
use insights::db::{Database, DatabaseBackend, LibSqlBackend};
use insights::models::{AuthMethod, LlmProvider, Organization, Prompt, User};

pub const TEST_SECRET: &str = "integration-test-secret";

/// A fully wired application over a throwaway on-disk database.
///
/// The tempdir must outlive the test; dropping it deletes the database file.
pub struct TestApp {
    pub state: AppState,
    pub app: Router,
    _tmp: TempDir,
}

pub fn vendor(base_url: &str) -> VendorConfig {
    VendorConfig {
        api_key: Some("test-key".to_string()),
        base_url: base_url.to_string(),
    }
}

/// Config pointing every vendor at `base_url` (typically a mock server).
pub fn test_config(base_url: &str) -> Config {
    Config {
        server: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 0,
        },
        database: DatabaseConfig {
            url: ":memory:".to_string(),
            auth_token: None,
        },
        auth: AuthConfig {
            secret_key: TEST_SECRET.to_string(),
            token_expire_minutes: 30,
        },
        providers: ProvidersConfig {
            timeout_secs: 5,
            openai: vendor(base_url),
            anthropic: vendor(base_url),
            cohere: vendor(base_url),
            gemini: vendor(base_url),
            deepseek: vendor(base_url),
        },
    }
}

pub async fn build_app(mut config: Config) -> TestApp {
    let tmp = TempDir::new().expect("tempdir");
    config.database.url = format!(
        "file:{}",
        tmp.path().join("insights-test.db").to_string_lossy()
    );

    let raw_db = Database::new(&config.database).await.expect("database");
    let db: Arc<dyn DatabaseBackend> = Arc::new(LibSqlBackend::new(raw_db));
    let state = AppState::new(config, db).expect("state");
    let app = create_router(state.clone());

    TestApp {
        state,
        app,
        _tmp: tmp,
    }
}

pub async fn seed_organization(db: &Arc<dyn DatabaseBackend>, name: &str) -> Organization {
    let org = Organization::new(name.to_string());
    db.create_organization(&org).await.expect("seed org");
    org
}

pub async fn seed_user(
    db: &Arc<dyn DatabaseBackend>,
    email: &str,
    password: &str,
    is_superuser: bool,
    organization_id: Option<String>,
) -> User {
    let hashed = hash_password(password).expect("hash");
    let mut user = User::new(
        email.to_string(),
        hashed,
        "Test".to_string(),
        "User".to_string(),
    );
    user.is_superuser = is_superuser;
    user.organization_id = organization_id;
    db.create_user(&user).await.expect("seed user");
    user
}

pub async fn seed_provider(db: &Arc<dyn DatabaseBackend>, name: &str) -> LlmProvider {
    let provider = LlmProvider::new(
        name.to_string(),
        "https://unused.example.com".to_string(),
        AuthMethod::ApiKey,
    );
    db.create_provider(&provider).await.expect("seed provider");
    provider
}

pub async fn seed_prompt(db: &Arc<dyn DatabaseBackend>, user: &User, content: &str) -> Prompt {
    let mut prompt = Prompt::new(content.to_string(), user.id.clone());
    prompt.organization_id = user.organization_id.clone();
    db.create_prompt(&prompt).await.expect("seed prompt");
    prompt
}

pub fn token_for(email: &str) -> String {
    insights::auth::create_access_token(email, TEST_SECRET, 30).expect("token")
}

/// Sends a request through the router and decodes the JSON envelope.
pub async fn send_request(
    app: &Router,
    method: &str,
    uri: &str,
    token: Option<&str>,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header("Authorization", format!("Bearer {token}"));
    }

    let request = match body {
        Some(json) => builder
            .header("Content-Type", "application/json")
            .body(Body::from(json.to_string()))
            .expect("request"),
        None => builder.body(Body::empty()).expect("request"),
    };

    let response = app.clone().oneshot(request).await.expect("response");
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body");
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).expect("json body")
    };

    (status, json)
}
