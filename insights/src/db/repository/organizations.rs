use libsql::{params, Connection};

use crate::error::Result;
use crate::models::Organization;

use super::parse_ts;

pub struct OrganizationRepository;

impl OrganizationRepository {
    pub async fn create(conn: &Connection, org: &Organization) -> Result<()> {
        conn.execute(
            "INSERT INTO organizations (id, name, api_key, created_at, updated_at)
             VALUES (?1, ?2, ?3, ?4, ?5)",
            params![
                org.id.clone(),
                org.name.clone(),
                org.api_key.clone(),
                org.created_at.to_rfc3339(),
                org.updated_at.to_rfc3339(),
            ],
        )
        .await?;

        Ok(())
    }

    pub async fn get_by_id(conn: &Connection, id: &str) -> Result<Option<Organization>> {
        let mut rows = conn
            .query(
                "SELECT id, name, api_key, created_at, updated_at
                 FROM organizations WHERE id = ?1",
                params![id],
            )
            .await?;

        if let Some(row) = rows.next().await? {
            Ok(Some(Self::row_to_organization(&row)?))
        } else {
            Ok(None)
        }
    }

    pub async fn get_by_name(conn: &Connection, name: &str) -> Result<Option<Organization>> {
        let mut rows = conn
            .query(
                "SELECT id, name, api_key, created_at, updated_at
                 FROM organizations WHERE name = ?1",
                params![name],
            )
            .await?;

        if let Some(row) = rows.next().await? {
            Ok(Some(Self::row_to_organization(&row)?))
        } else {
            Ok(None)
        }
    }

    pub async fn list(conn: &Connection) -> Result<Vec<Organization>> {
        let mut rows = conn
            .query(
                "SELECT id, name, api_key, created_at, updated_at
                 FROM organizations ORDER BY created_at",
                (),
            )
            .await?;

        let mut orgs = Vec::new();
        while let Some(row) = rows.next().await? {
            orgs.push(Self::row_to_organization(&row)?);
        }
        Ok(orgs)
    }

    pub async fn delete(conn: &Connection, id: &str) -> Result<bool> {
        let affected = conn
            .execute("DELETE FROM organizations WHERE id = ?1", params![id])
            .await?;
        Ok(affected > 0)
    }

    fn row_to_organization(row: &libsql::Row) -> Result<Organization> {
        Ok(Organization {
            id: row.get(0)?,
            name: row.get(1)?,
            api_key: row.get(2)?,
            created_at: parse_ts(&row.get::<String>(3)?),
            updated_at: parse_ts(&row.get::<String>(4)?),
        })
    }
}
