use libsql::{params, Connection};

use crate::error::Result;
use crate::models::Prompt;

use super::parse_ts;

pub struct PromptRepository;

impl PromptRepository {
    pub async fn create(conn: &Connection, prompt: &Prompt) -> Result<()> {
        conn.execute(
            r#"
            INSERT INTO prompts (
                id, content, parameters, user_id, organization_id,
                created_at, updated_at
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)
            "#,
            params![
                prompt.id.clone(),
                prompt.content.clone(),
                serde_json::to_string(&prompt.parameters)?,
                prompt.user_id.clone(),
                prompt.organization_id.clone(),
                prompt.created_at.to_rfc3339(),
                prompt.updated_at.to_rfc3339(),
            ],
        )
        .await?;

        Ok(())
    }

    pub async fn get_by_id(conn: &Connection, id: &str) -> Result<Option<Prompt>> {
        let mut rows = conn
            .query(
                "SELECT id, content, parameters, user_id, organization_id,
                        created_at, updated_at
                 FROM prompts WHERE id = ?1",
                params![id],
            )
            .await?;

        if let Some(row) = rows.next().await? {
            Ok(Some(Self::row_to_prompt(&row)?))
        } else {
            Ok(None)
        }
    }

    pub async fn list_by_user(
        conn: &Connection,
        user_id: &str,
        skip: u32,
        limit: u32,
    ) -> Result<Vec<Prompt>> {
        let mut rows = conn
            .query(
                "SELECT id, content, parameters, user_id, organization_id,
                        created_at, updated_at
                 FROM prompts WHERE user_id = ?1
                 ORDER BY created_at DESC LIMIT ?2 OFFSET ?3",
                params![user_id, limit, skip],
            )
            .await?;

        let mut prompts = Vec::new();
        while let Some(row) = rows.next().await? {
            prompts.push(Self::row_to_prompt(&row)?);
        }
        Ok(prompts)
    }

    pub async fn list_by_organization(
        conn: &Connection,
        organization_id: &str,
        skip: u32,
        limit: u32,
    ) -> Result<Vec<Prompt>> {
        let mut rows = conn
            .query(
                "SELECT id, content, parameters, user_id, organization_id,
                        created_at, updated_at
                 FROM prompts WHERE organization_id = ?1
                 ORDER BY created_at DESC LIMIT ?2 OFFSET ?3",
                params![organization_id, limit, skip],
            )
            .await?;

        let mut prompts = Vec::new();
        while let Some(row) = rows.next().await? {
            prompts.push(Self::row_to_prompt(&row)?);
        }
        Ok(prompts)
    }

    fn row_to_prompt(row: &libsql::Row) -> Result<Prompt> {
        Ok(Prompt {
            id: row.get(0)?,
            content: row.get(1)?,
            parameters: serde_json::from_str(&row.get::<String>(2)?).unwrap_or_default(),
            user_id: row.get(3)?,
            organization_id: row.get(4)?,
            created_at: parse_ts(&row.get::<String>(5)?),
            updated_at: parse_ts(&row.get::<String>(6)?),
        })
    }
}
