use libsql::{params, Connection};

use crate::error::Result;
use crate::models::LlmResponse;

use super::parse_ts;

pub struct ResponseRepository;

impl ResponseRepository {
    pub async fn create(conn: &Connection, response: &LlmResponse) -> Result<()> {
        conn.execute(
            r#"
            INSERT INTO responses (
                id, content, metadata, prompt_id, llm_provider_id,
                latency, token_count, created_at, updated_at
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)
            "#,
            params![
                response.id.clone(),
                response.content.clone(),
                serde_json::to_string(&response.metadata)?,
                response.prompt_id.clone(),
                response.llm_provider_id.clone(),
                response.latency,
                response.token_count,
                response.created_at.to_rfc3339(),
                response.updated_at.to_rfc3339(),
            ],
        )
        .await?;

        Ok(())
    }

    pub async fn get_by_id(conn: &Connection, id: &str) -> Result<Option<LlmResponse>> {
        let mut rows = conn
            .query(
                "SELECT id, content, metadata, prompt_id, llm_provider_id,
                        latency, token_count, created_at, updated_at
                 FROM responses WHERE id = ?1",
                params![id],
            )
            .await?;

        if let Some(row) = rows.next().await? {
            Ok(Some(Self::row_to_response(&row)?))
        } else {
            Ok(None)
        }
    }

    pub async fn list_by_prompt(conn: &Connection, prompt_id: &str) -> Result<Vec<LlmResponse>> {
        let mut rows = conn
            .query(
                "SELECT id, content, metadata, prompt_id, llm_provider_id,
                        latency, token_count, created_at, updated_at
                 FROM responses WHERE prompt_id = ?1 ORDER BY created_at DESC",
                params![prompt_id],
            )
            .await?;

        let mut responses = Vec::new();
        while let Some(row) = rows.next().await? {
            responses.push(Self::row_to_response(&row)?);
        }
        Ok(responses)
    }

    pub async fn latest_for_prompt(
        conn: &Connection,
        prompt_id: &str,
    ) -> Result<Option<LlmResponse>> {
        let mut rows = conn
            .query(
                "SELECT id, content, metadata, prompt_id, llm_provider_id,
                        latency, token_count, created_at, updated_at
                 FROM responses WHERE prompt_id = ?1
                 ORDER BY created_at DESC LIMIT 1",
                params![prompt_id],
            )
            .await?;

        if let Some(row) = rows.next().await? {
            Ok(Some(Self::row_to_response(&row)?))
        } else {
            Ok(None)
        }
    }

    pub async fn count_for_prompt(conn: &Connection, prompt_id: &str) -> Result<i64> {
        let mut rows = conn
            .query(
                "SELECT COUNT(*) FROM responses WHERE prompt_id = ?1",
                params![prompt_id],
            )
            .await?;

        if let Some(row) = rows.next().await? {
            Ok(row.get(0)?)
        } else {
            Ok(0)
        }
    }

    fn row_to_response(row: &libsql::Row) -> Result<LlmResponse> {
        Ok(LlmResponse {
            id: row.get(0)?,
            content: row.get(1)?,
            metadata: serde_json::from_str(&row.get::<String>(2)?).unwrap_or_default(),
            prompt_id: row.get(3)?,
            llm_provider_id: row.get(4)?,
            latency: row.get(5)?,
            token_count: row.get(6)?,
            created_at: parse_ts(&row.get::<String>(7)?),
            updated_at: parse_ts(&row.get::<String>(8)?),
        })
    }
}
