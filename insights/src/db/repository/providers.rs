use libsql::{params, Connection};

use crate::error::Result;
use crate::models::{AuthMethod, LlmProvider};

use super::parse_ts;

pub struct ProviderRepository;

impl ProviderRepository {
    pub async fn create(conn: &Connection, provider: &LlmProvider) -> Result<()> {
        conn.execute(
            r#"
            INSERT INTO llm_providers (
                id, name, api_base_url, auth_method, config, is_active,
                created_at, updated_at
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)
            "#,
            params![
                provider.id.clone(),
                provider.name.clone(),
                provider.api_base_url.clone(),
                provider.auth_method.to_string(),
                serde_json::to_string(&provider.config)?,
                provider.is_active as i32,
                provider.created_at.to_rfc3339(),
                provider.updated_at.to_rfc3339(),
            ],
        )
        .await?;

        Ok(())
    }

    pub async fn get_by_id(conn: &Connection, id: &str) -> Result<Option<LlmProvider>> {
        let mut rows = conn
            .query(
                "SELECT id, name, api_base_url, auth_method, config, is_active,
                        created_at, updated_at
                 FROM llm_providers WHERE id = ?1",
                params![id],
            )
            .await?;

        if let Some(row) = rows.next().await? {
            Ok(Some(Self::row_to_provider(&row)?))
        } else {
            Ok(None)
        }
    }

    /// Case-insensitive lookup over active providers only. This is the single
    /// case-folding point shared with adapter selection.
    pub async fn get_by_name(conn: &Connection, name: &str) -> Result<Option<LlmProvider>> {
        let mut rows = conn
            .query(
                "SELECT id, name, api_base_url, auth_method, config, is_active,
                        created_at, updated_at
                 FROM llm_providers WHERE LOWER(name) = LOWER(?1) AND is_active = 1",
                params![name],
            )
            .await?;

        if let Some(row) = rows.next().await? {
            Ok(Some(Self::row_to_provider(&row)?))
        } else {
            Ok(None)
        }
    }

    pub async fn list_active(conn: &Connection) -> Result<Vec<LlmProvider>> {
        let mut rows = conn
            .query(
                "SELECT id, name, api_base_url, auth_method, config, is_active,
                        created_at, updated_at
                 FROM llm_providers WHERE is_active = 1 ORDER BY name",
                (),
            )
            .await?;

        let mut providers = Vec::new();
        while let Some(row) = rows.next().await? {
            providers.push(Self::row_to_provider(&row)?);
        }
        Ok(providers)
    }

    fn row_to_provider(row: &libsql::Row) -> Result<LlmProvider> {
        Ok(LlmProvider {
            id: row.get(0)?,
            name: row.get(1)?,
            api_base_url: row.get(2)?,
            auth_method: row
                .get::<String>(3)?
                .parse()
                .unwrap_or(AuthMethod::ApiKey),
            config: serde_json::from_str(&row.get::<String>(4)?).unwrap_or_default(),
            is_active: row.get::<i32>(5)? != 0,
            created_at: parse_ts(&row.get::<String>(6)?),
            updated_at: parse_ts(&row.get::<String>(7)?),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::schema;
    use crate::models::AuthMethod;

    async fn setup() -> Connection {
        let conn = libsql::Builder::new_local(":memory:")
            .build()
            .await
            .unwrap()
            .connect()
            .unwrap();
        schema::init_schema(&conn).await.unwrap();
        conn
    }

    #[tokio::test]
    async fn name_lookup_is_case_insensitive() {
        let conn = setup().await;
        let provider = LlmProvider::new(
            "OpenAI".into(),
            "https://api.openai.com/v1".into(),
            AuthMethod::ApiKey,
        );
        ProviderRepository::create(&conn, &provider).await.unwrap();

        for name in ["openai", "OPENAI", "OpenAI"] {
            let found = ProviderRepository::get_by_name(&conn, name)
                .await
                .unwrap()
                .expect("provider resolves regardless of case");
            assert_eq!(found.id, provider.id);
        }
    }

    #[tokio::test]
    async fn inactive_providers_are_invisible() {
        let conn = setup().await;
        let mut provider = LlmProvider::new(
            "cohere".into(),
            "https://api.cohere.ai".into(),
            AuthMethod::ApiKey,
        );
        provider.is_active = false;
        ProviderRepository::create(&conn, &provider).await.unwrap();

        assert!(ProviderRepository::get_by_name(&conn, "cohere")
            .await
            .unwrap()
            .is_none());
        assert!(ProviderRepository::list_active(&conn)
            .await
            .unwrap()
            .is_empty());
    }
}
