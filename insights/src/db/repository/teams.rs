use libsql::{params, Connection};

use crate::error::Result;
use crate::models::{Team, TeamMember, TeamRole};

use super::parse_ts;

pub struct TeamRepository;

impl TeamRepository {
    pub async fn create(conn: &Connection, team: &Team) -> Result<()> {
        conn.execute(
            "INSERT INTO teams (id, name, organization_id, created_at, updated_at)
             VALUES (?1, ?2, ?3, ?4, ?5)",
            params![
                team.id.clone(),
                team.name.clone(),
                team.organization_id.clone(),
                team.created_at.to_rfc3339(),
                team.updated_at.to_rfc3339(),
            ],
        )
        .await?;

        Ok(())
    }

    pub async fn get_by_id(conn: &Connection, id: &str) -> Result<Option<Team>> {
        let mut rows = conn
            .query(
                "SELECT id, name, organization_id, created_at, updated_at
                 FROM teams WHERE id = ?1",
                params![id],
            )
            .await?;

        if let Some(row) = rows.next().await? {
            Ok(Some(Self::row_to_team(&row)?))
        } else {
            Ok(None)
        }
    }

    pub async fn list_by_organization(
        conn: &Connection,
        organization_id: &str,
    ) -> Result<Vec<Team>> {
        let mut rows = conn
            .query(
                "SELECT id, name, organization_id, created_at, updated_at
                 FROM teams WHERE organization_id = ?1 ORDER BY created_at",
                params![organization_id],
            )
            .await?;

        let mut teams = Vec::new();
        while let Some(row) = rows.next().await? {
            teams.push(Self::row_to_team(&row)?);
        }
        Ok(teams)
    }

    pub async fn delete(conn: &Connection, id: &str) -> Result<bool> {
        let affected = conn
            .execute("DELETE FROM teams WHERE id = ?1", params![id])
            .await?;
        Ok(affected > 0)
    }

    pub async fn add_member(conn: &Connection, member: &TeamMember) -> Result<()> {
        conn.execute(
            "INSERT INTO team_members (id, team_id, user_id, role, created_at)
             VALUES (?1, ?2, ?3, ?4, ?5)",
            params![
                member.id.clone(),
                member.team_id.clone(),
                member.user_id.clone(),
                member.role.to_string(),
                member.created_at.to_rfc3339(),
            ],
        )
        .await?;

        Ok(())
    }

    pub async fn list_members(conn: &Connection, team_id: &str) -> Result<Vec<TeamMember>> {
        let mut rows = conn
            .query(
                "SELECT id, team_id, user_id, role, created_at
                 FROM team_members WHERE team_id = ?1 ORDER BY created_at",
                params![team_id],
            )
            .await?;

        let mut members = Vec::new();
        while let Some(row) = rows.next().await? {
            members.push(Self::row_to_member(&row)?);
        }
        Ok(members)
    }

    pub async fn remove_member(conn: &Connection, team_id: &str, user_id: &str) -> Result<bool> {
        let affected = conn
            .execute(
                "DELETE FROM team_members WHERE team_id = ?1 AND user_id = ?2",
                params![team_id, user_id],
            )
            .await?;
        Ok(affected > 0)
    }

    fn row_to_team(row: &libsql::Row) -> Result<Team> {
        Ok(Team {
            id: row.get(0)?,
            name: row.get(1)?,
            organization_id: row.get(2)?,
            created_at: parse_ts(&row.get::<String>(3)?),
            updated_at: parse_ts(&row.get::<String>(4)?),
        })
    }

    fn row_to_member(row: &libsql::Row) -> Result<TeamMember> {
        Ok(TeamMember {
            id: row.get(0)?,
            team_id: row.get(1)?,
            user_id: row.get(2)?,
            role: row.get::<String>(3)?.parse().unwrap_or(TeamRole::Member),
            created_at: parse_ts(&row.get::<String>(4)?),
        })
    }
}
