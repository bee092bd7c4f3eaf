use chrono::Utc;
use libsql::{params, Connection};

use crate::error::Result;
use crate::models::User;

use super::parse_ts;

pub struct UserRepository;

impl UserRepository {
    pub async fn create(conn: &Connection, user: &User) -> Result<()> {
        conn.execute(
            r#"
            INSERT INTO users (
                id, email, hashed_password, first_name, last_name, role,
                is_active, is_superuser, organization_id, created_at, updated_at
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11)
            "#,
            params![
                user.id.clone(),
                user.email.clone(),
                user.hashed_password.clone(),
                user.first_name.clone(),
                user.last_name.clone(),
                user.role.clone(),
                user.is_active as i32,
                user.is_superuser as i32,
                user.organization_id.clone(),
                user.created_at.to_rfc3339(),
                user.updated_at.to_rfc3339(),
            ],
        )
        .await?;

        Ok(())
    }

    pub async fn get_by_id(conn: &Connection, id: &str) -> Result<Option<User>> {
        let mut rows = conn
            .query(
                "SELECT id, email, hashed_password, first_name, last_name, role,
                        is_active, is_superuser, organization_id, created_at, updated_at
                 FROM users WHERE id = ?1",
                params![id],
            )
            .await?;

        if let Some(row) = rows.next().await? {
            Ok(Some(Self::row_to_user(&row)?))
        } else {
            Ok(None)
        }
    }

    pub async fn get_by_email(conn: &Connection, email: &str) -> Result<Option<User>> {
        let mut rows = conn
            .query(
                "SELECT id, email, hashed_password, first_name, last_name, role,
                        is_active, is_superuser, organization_id, created_at, updated_at
                 FROM users WHERE email = ?1",
                params![email],
            )
            .await?;

        if let Some(row) = rows.next().await? {
            Ok(Some(Self::row_to_user(&row)?))
        } else {
            Ok(None)
        }
    }

    pub async fn list_by_organization(
        conn: &Connection,
        organization_id: &str,
    ) -> Result<Vec<User>> {
        let mut rows = conn
            .query(
                "SELECT id, email, hashed_password, first_name, last_name, role,
                        is_active, is_superuser, organization_id, created_at, updated_at
                 FROM users WHERE organization_id = ?1 ORDER BY created_at",
                params![organization_id],
            )
            .await?;

        let mut users = Vec::new();
        while let Some(row) = rows.next().await? {
            users.push(Self::row_to_user(&row)?);
        }
        Ok(users)
    }

    pub async fn update(conn: &Connection, user: &User) -> Result<()> {
        conn.execute(
            r#"
            UPDATE users SET
                email = ?2, hashed_password = ?3, first_name = ?4, last_name = ?5,
                role = ?6, is_active = ?7, is_superuser = ?8, organization_id = ?9,
                updated_at = ?10
            WHERE id = ?1
            "#,
            params![
                user.id.clone(),
                user.email.clone(),
                user.hashed_password.clone(),
                user.first_name.clone(),
                user.last_name.clone(),
                user.role.clone(),
                user.is_active as i32,
                user.is_superuser as i32,
                user.organization_id.clone(),
                Utc::now().to_rfc3339(),
            ],
        )
        .await?;

        Ok(())
    }

    pub async fn delete(conn: &Connection, id: &str) -> Result<bool> {
        let affected = conn
            .execute("DELETE FROM users WHERE id = ?1", params![id])
            .await?;
        Ok(affected > 0)
    }

    pub fn row_to_user(row: &libsql::Row) -> Result<User> {
        Ok(User {
            id: row.get(0)?,
            email: row.get(1)?,
            hashed_password: row.get(2)?,
            first_name: row.get(3)?,
            last_name: row.get(4)?,
            role: row.get(5)?,
            is_active: row.get::<i32>(6)? != 0,
            is_superuser: row.get::<i32>(7)? != 0,
            organization_id: row.get(8)?,
            created_at: parse_ts(&row.get::<String>(9)?),
            updated_at: parse_ts(&row.get::<String>(10)?),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::schema;
    use crate::models::User;

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
    async fn create_and_fetch_by_email() {
        let conn = setup().await;
        let user = User::new(
            "ada@example.com".into(),
            "hash".into(),
            "Ada".into(),
            "Lovelace".into(),
        );
        UserRepository::create(&conn, &user).await.unwrap();

        let fetched = UserRepository::get_by_email(&conn, "ada@example.com")
            .await
            .unwrap()
            .expect("user exists");
        assert_eq!(fetched.id, user.id);
        assert!(fetched.is_active);
        assert!(!fetched.is_superuser);
    }

    #[tokio::test]
    async fn duplicate_email_is_rejected() {
        let conn = setup().await;
        let a = User::new("x@example.com".into(), "h".into(), "A".into(), "B".into());
        let b = User::new("x@example.com".into(), "h".into(), "C".into(), "D".into());
        UserRepository::create(&conn, &a).await.unwrap();
        assert!(UserRepository::create(&conn, &b).await.is_err());
    }

    #[tokio::test]
    async fn delete_returns_false_for_missing_row() {
        let conn = setup().await;
        assert!(!UserRepository::delete(&conn, "nope").await.unwrap());
    }
}
