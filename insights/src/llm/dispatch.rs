use std::sync::Arc;
use std::time::{Duration, Instant};

use serde_json::Value;
use uuid::Uuid;

use crate::config::Config;
use crate::db::DatabaseBackend;
use crate::error::{InsightsError, Result};
use crate::models::{LlmResponse, Metadata, Prompt};

use super::adapters;
use super::vendor::VendorKind;

/// Routes prompts to vendor adapters and records the normalized replies.
///
/// Stateless across calls; concurrent dispatches share only the config, the
/// HTTP client's connection pool, and the database handle.
#[derive(Clone)]
pub struct DispatchService {
    config: Arc<Config>,
    client: reqwest::Client,
    db: Arc<dyn DatabaseBackend>,
}

impl DispatchService {
    pub fn new(config: Arc<Config>, db: Arc<dyn DatabaseBackend>) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.providers.timeout_secs))
            .build()?;
        Ok(Self { config, client, db })
    }

    /// Sends a prompt to the named provider and persists the reply.
    ///
    /// Fails fast when the provider is unregistered or inactive. On any
    /// vendor failure the error propagates unchanged and nothing is written.
    pub async fn process_prompt(
        &self,
        prompt: &Prompt,
        provider_name: &str,
        parameters: &Metadata,
    ) -> Result<LlmResponse> {
        let provider = self
            .db
            .get_provider_by_name(provider_name)
            .await?
            .ok_or_else(|| InsightsError::ProviderNotFound(provider_name.to_string()))?;

        let kind = VendorKind::from_name(&provider.name)
            .ok_or_else(|| InsightsError::ProviderNotFound(provider_name.to_string()))?;

        tracing::debug!(provider = %kind, prompt_id = %prompt.id, "dispatching prompt");

        let started = Instant::now();
        let (content, metadata) = self
            .send_to_vendor(kind, &prompt.content, parameters)
            .await?;
        let latency = started.elapsed().as_secs_f64();

        let token_count = metadata
            .get("token_count")
            .and_then(Value::as_i64)
            .unwrap_or(0);

        let now = chrono::Utc::now();
        let response = LlmResponse {
            id: Uuid::new_v4().to_string(),
            content,
            metadata,
            prompt_id: prompt.id.clone(),
            llm_provider_id: Some(provider.id.clone()),
            latency,
            token_count,
            created_at: now,
            updated_at: now,
        };

        self.db.create_response(&response).await?;

        tracing::info!(
            provider = %kind,
            prompt_id = %prompt.id,
            response_id = %response.id,
            latency_secs = latency,
            token_count,
            "prompt dispatched"
        );

        Ok(response)
    }

    async fn send_to_vendor(
        &self,
        kind: VendorKind,
        prompt: &str,
        params: &Metadata,
    ) -> Result<(String, Metadata)> {
        let vendors = &self.config.providers;
        match kind {
            VendorKind::OpenAi => {
                adapters::openai::call(&self.client, &vendors.openai, prompt, params).await
            }
            VendorKind::Anthropic => {
                adapters::anthropic::call(&self.client, &vendors.anthropic, prompt, params).await
            }
            VendorKind::Cohere => {
                adapters::cohere::call(&self.client, &vendors.cohere, prompt, params).await
            }
            VendorKind::Gemini => {
                adapters::gemini::call(&self.client, &vendors.gemini, prompt, params).await
            }
            VendorKind::DeepSeek => {
                adapters::deepseek::call(&self.client, &vendors.deepseek, prompt, params).await
            }
        }
    }
}
