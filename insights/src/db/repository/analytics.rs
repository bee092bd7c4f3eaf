use libsql::{params, Connection};

use crate::db::traits::{OrgTokenUsage, UserPromptCount, UserUsage};
use crate::error::Result;

/// Aggregation queries over users, prompts, and responses. Read-only.
pub struct AnalyticsRepository;

impl AnalyticsRepository {
    pub async fn usage_report(conn: &Connection) -> Result<Vec<UserUsage>> {
        let mut rows = conn
            .query(
                r#"
                SELECT u.id, u.email, COUNT(p.id) AS prompt_count,
                       COALESCE(SUM(r.token_count), 0) AS total_tokens_used
                FROM users u
                JOIN prompts p ON u.id = p.user_id
                JOIN responses r ON p.id = r.prompt_id
                GROUP BY u.id, u.email
                "#,
                (),
            )
            .await?;

        let mut report = Vec::new();
        while let Some(row) = rows.next().await? {
            report.push(UserUsage {
                user_id: row.get(0)?,
                email: row.get(1)?,
                prompt_count: row.get(2)?,
                total_tokens_used: row.get(3)?,
            });
        }
        Ok(report)
    }

    pub async fn top_users_by_prompt_count(
        conn: &Connection,
        limit: u32,
    ) -> Result<Vec<UserPromptCount>> {
        let mut rows = conn
            .query(
                r#"
                SELECT u.id, u.email, COUNT(p.id) AS prompt_count
                FROM users u
                JOIN prompts p ON u.id = p.user_id
                GROUP BY u.id, u.email
                ORDER BY prompt_count DESC
                LIMIT ?1
                "#,
                params![limit],
            )
            .await?;

        let mut top = Vec::new();
        while let Some(row) = rows.next().await? {
            top.push(UserPromptCount {
                user_id: row.get(0)?,
                email: row.get(1)?,
                prompt_count: row.get(2)?,
            });
        }
        Ok(top)
    }

    pub async fn token_usage_by_organization(conn: &Connection) -> Result<Vec<OrgTokenUsage>> {
        let mut rows = conn
            .query(
                r#"
                SELECT u.organization_id, COUNT(p.id) AS prompt_count,
                       COALESCE(SUM(r.token_count), 0) AS total_tokens_used
                FROM users u
                JOIN prompts p ON u.id = p.user_id
                JOIN responses r ON p.id = r.prompt_id
                GROUP BY u.organization_id
                "#,
                (),
            )
            .await?;

        let mut usage = Vec::new();
        while let Some(row) = rows.next().await? {
            usage.push(OrgTokenUsage {
                organization_id: row.get(0)?,
                prompt_count: row.get(1)?,
                total_tokens_used: row.get(2)?,
            });
        }
        Ok(usage)
    }
}
