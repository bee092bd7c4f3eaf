//! Dispatch orchestration tests against mocked vendor endpoints.

mod common;

use std::time::Duration;

use serde_json::json;
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use insights::error::InsightsError;
use insights::models::Metadata;

use common::{build_app, seed_prompt, seed_provider, seed_user, test_config};

fn openai_body(content: &str, total_tokens: i64) -> serde_json::Value {
    json!({
        "model": "gpt-4o",
        "choices": [{"message": {"role": "assistant", "content": content}}],
        "usage": {"total_tokens": total_tokens}
    })
}

#[tokio::test]
async fn openai_dispatch_records_normalized_response() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .and(header("Authorization", "Bearer test-key"))
        .and(body_partial_json(json!({"model": "gpt-4o"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(openai_body("hi", 7)))
        .expect(1)
        .mount(&server)
        .await;

    let app = build_app(test_config(&server.uri())).await;
    let user = seed_user(&app.state.db, "a@example.com", "pw", false, None).await;
    let provider = seed_provider(&app.state.db, "openai").await;
    let prompt = seed_prompt(&app.state.db, &user, "say hi").await;

    let response = app
        .state
        .dispatch
        .process_prompt(&prompt, "openai", &Metadata::new())
        .await
        .expect("dispatch");

    assert_eq!(response.content, "hi");
    assert_eq!(response.token_count, 7);
    assert_eq!(response.prompt_id, prompt.id);
    assert_eq!(response.llm_provider_id.as_deref(), Some(provider.id.as_str()));
    assert!(response.latency >= 0.0);

    let stored = app
        .state
        .db
        .list_responses_by_prompt(&prompt.id)
        .await
        .expect("list");
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0].content, "hi");
}

#[tokio::test]
async fn provider_name_lookup_is_case_insensitive() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(openai_body("ok", 1)))
        .mount(&server)
        .await;

    let app = build_app(test_config(&server.uri())).await;
    let user = seed_user(&app.state.db, "a@example.com", "pw", false, None).await;
    seed_provider(&app.state.db, "OpenAI").await;
    let prompt = seed_prompt(&app.state.db, &user, "hello").await;

    let response = app
        .state
        .dispatch
        .process_prompt(&prompt, "openai", &Metadata::new())
        .await
        .expect("dispatch");
    assert_eq!(response.content, "ok");
}

#[tokio::test]
async fn unknown_provider_fails_before_any_http() {
    let server = MockServer::start().await;
    // No mocks mounted; any request would 404 and the expect(0) below
    // would also catch it.
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let app = build_app(test_config(&server.uri())).await;
    let user = seed_user(&app.state.db, "a@example.com", "pw", false, None).await;
    let prompt = seed_prompt(&app.state.db, &user, "hello").await;

    let err = app
        .state
        .dispatch
        .process_prompt(&prompt, "mistral", &Metadata::new())
        .await
        .expect_err("should fail");
    assert!(matches!(err, InsightsError::ProviderNotFound(_)));
}

#[tokio::test]
async fn inactive_provider_is_invisible_to_dispatch() {
    let server = MockServer::start().await;
    let app = build_app(test_config(&server.uri())).await;
    let user = seed_user(&app.state.db, "a@example.com", "pw", false, None).await;

    let mut provider = insights::models::LlmProvider::new(
        "openai".to_string(),
        "https://unused.example.com".to_string(),
        insights::models::AuthMethod::ApiKey,
    );
    provider.is_active = false;
    app.state
        .db
        .create_provider(&provider)
        .await
        .expect("create provider");

    let prompt = seed_prompt(&app.state.db, &user, "hello").await;
    let err = app
        .state
        .dispatch
        .process_prompt(&prompt, "openai", &Metadata::new())
        .await
        .expect_err("should fail");
    assert!(matches!(err, InsightsError::ProviderNotFound(_)));
}

#[tokio::test]
async fn vendor_500_fails_and_persists_nothing() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(500).set_body_string("upstream exploded"))
        .mount(&server)
        .await;

    let app = build_app(test_config(&server.uri())).await;
    let user = seed_user(&app.state.db, "a@example.com", "pw", false, None).await;
    seed_provider(&app.state.db, "openai").await;
    let prompt = seed_prompt(&app.state.db, &user, "hello").await;

    let err = app
        .state
        .dispatch
        .process_prompt(&prompt, "openai", &Metadata::new())
        .await
        .expect_err("should fail");
    match err {
        InsightsError::VendorRequestFailed { status, body } => {
            assert_eq!(status, Some(500));
            assert!(body.contains("upstream exploded"));
        }
        other => panic!("unexpected error: {other}"),
    }

    let stored = app
        .state
        .db
        .list_responses_by_prompt(&prompt.id)
        .await
        .expect("list");
    assert!(stored.is_empty());
}

#[tokio::test]
async fn malformed_reply_fails_and_persists_nothing() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"choices": []})))
        .mount(&server)
        .await;

    let app = build_app(test_config(&server.uri())).await;
    let user = seed_user(&app.state.db, "a@example.com", "pw", false, None).await;
    seed_provider(&app.state.db, "openai").await;
    let prompt = seed_prompt(&app.state.db, &user, "hello").await;

    let err = app
        .state
        .dispatch
        .process_prompt(&prompt, "openai", &Metadata::new())
        .await
        .expect_err("should fail");
    assert!(matches!(err, InsightsError::MalformedVendorResponse(_)));

    let stored = app
        .state
        .db
        .list_responses_by_prompt(&prompt.id)
        .await
        .expect("list");
    assert!(stored.is_empty());
}

#[tokio::test]
async fn missing_usage_records_zero_tokens() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "model": "gpt-4o",
            "choices": [{"message": {"content": "no usage block"}}]
        })))
        .mount(&server)
        .await;

    let app = build_app(test_config(&server.uri())).await;
    let user = seed_user(&app.state.db, "a@example.com", "pw", false, None).await;
    seed_provider(&app.state.db, "openai").await;
    let prompt = seed_prompt(&app.state.db, &user, "hello").await;

    let response = app
        .state
        .dispatch
        .process_prompt(&prompt, "openai", &Metadata::new())
        .await
        .expect("dispatch");
    assert_eq!(response.token_count, 0);
}

#[tokio::test]
async fn latency_reflects_vendor_delay() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(openai_body("slow", 1))
                .set_delay(Duration::from_millis(50)),
        )
        .mount(&server)
        .await;

    let app = build_app(test_config(&server.uri())).await;
    let user = seed_user(&app.state.db, "a@example.com", "pw", false, None).await;
    seed_provider(&app.state.db, "openai").await;
    let prompt = seed_prompt(&app.state.db, &user, "hello").await;

    let response = app
        .state
        .dispatch
        .process_prompt(&prompt, "openai", &Metadata::new())
        .await
        .expect("dispatch");
    assert!(
        response.latency >= 0.05,
        "latency was {}",
        response.latency
    );
}

#[tokio::test]
async fn caller_parameters_override_vendor_defaults() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .and(body_partial_json(
            json!({"model": "gpt-4o-mini", "max_tokens": 50}),
        ))
        .respond_with(ResponseTemplate::new(200).set_body_json(openai_body("tuned", 3)))
        .expect(1)
        .mount(&server)
        .await;

    let app = build_app(test_config(&server.uri())).await;
    let user = seed_user(&app.state.db, "a@example.com", "pw", false, None).await;
    seed_provider(&app.state.db, "openai").await;
    let prompt = seed_prompt(&app.state.db, &user, "hello").await;

    let mut params = Metadata::new();
    params.insert("model".to_string(), json!("gpt-4o-mini"));
    params.insert("max_tokens".to_string(), json!(50));

    let response = app
        .state
        .dispatch
        .process_prompt(&prompt, "openai", &params)
        .await
        .expect("dispatch");
    assert_eq!(response.content, "tuned");
}

#[tokio::test]
async fn anthropic_uses_api_key_header_and_input_tokens() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/messages"))
        .and(header("x-api-key", "test-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "model": "claude-3-opus-20240229",
            "content": [{"type": "text", "text": "bonjour"}],
            "usage": {"input_tokens": 11, "output_tokens": 42}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let app = build_app(test_config(&server.uri())).await;
    let user = seed_user(&app.state.db, "a@example.com", "pw", false, None).await;
    seed_provider(&app.state.db, "anthropic").await;
    let prompt = seed_prompt(&app.state.db, &user, "bonjour?").await;

    let response = app
        .state
        .dispatch
        .process_prompt(&prompt, "anthropic", &Metadata::new())
        .await
        .expect("dispatch");
    assert_eq!(response.content, "bonjour");
    assert_eq!(response.token_count, 11);
}

#[tokio::test]
async fn cohere_sums_billed_units() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/generate"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "generations": [{"text": "generated"}],
            "meta": {"billed_units": {"input_tokens": 4, "output_tokens": 6}}
        })))
        .mount(&server)
        .await;

    let app = build_app(test_config(&server.uri())).await;
    let user = seed_user(&app.state.db, "a@example.com", "pw", false, None).await;
    seed_provider(&app.state.db, "cohere").await;
    let prompt = seed_prompt(&app.state.db, &user, "generate").await;

    let response = app
        .state
        .dispatch
        .process_prompt(&prompt, "cohere", &Metadata::new())
        .await
        .expect("dispatch");
    assert_eq!(response.content, "generated");
    assert_eq!(response.token_count, 10);
}

#[tokio::test]
async fn concurrent_dispatches_do_not_cross_contaminate() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(openai_body("from-openai", 1)))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/generate"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "response": "from-deepseek",
            "usage": {"total_tokens": 2}
        })))
        .mount(&server)
        .await;

    let app = build_app(test_config(&server.uri())).await;
    let user = seed_user(&app.state.db, "a@example.com", "pw", false, None).await;
    seed_provider(&app.state.db, "openai").await;
    seed_provider(&app.state.db, "deepseek").await;
    let prompt_a = seed_prompt(&app.state.db, &user, "first").await;
    let prompt_b = seed_prompt(&app.state.db, &user, "second").await;

    let dispatch = app.state.dispatch.clone();
    let params_a = Metadata::new();
    let params_b = Metadata::new();
    let (a, b) = tokio::join!(
        dispatch.process_prompt(&prompt_a, "openai", &params_a),
        dispatch.process_prompt(&prompt_b, "deepseek", &params_b),
    );

    let a = a.expect("openai dispatch");
    let b = b.expect("deepseek dispatch");
    assert_eq!(a.content, "from-openai");
    assert_eq!(b.content, "from-deepseek");

    let rows_a = app
        .state
        .db
        .list_responses_by_prompt(&prompt_a.id)
        .await
        .expect("list a");
    let rows_b = app
        .state
        .db
        .list_responses_by_prompt(&prompt_b.id)
        .await
        .expect("list b");
    assert_eq!(rows_a.len(), 1);
    assert_eq!(rows_b.len(), 1);
    assert_eq!(rows_a[0].content, "from-openai");
    assert_eq!(rows_b[0].content, "from-deepseek");
}
