//! # User Repository
//!
//! `app_user` table access. The password hash is stored here and only leaves
//! this crate inside [`UserCredentials`].

use async_trait::async_trait;
use sqlx::{FromRow, PgPool};
use tracing::debug;

use laundry_core::{PageQuery, Paging, User};

use super::UserRepository;
use crate::error::DbResult;

/// A user together with the stored argon2 hash. Used for login only.
#[derive(Debug, Clone, FromRow)]
pub struct UserCredentials {
    pub id: String,
    pub username: String,
    pub role: String,
    pub password_hash: String,
}

impl UserCredentials {
    /// Drops the hash.
    pub fn into_user(self) -> User {
        User {
            id: self.id,
            username: self.username,
            role: self.role,
        }
    }
}

/// PostgreSQL-backed [`UserRepository`].
#[derive(Debug, Clone)]
pub struct PgUserRepository {
    pool: PgPool,
}

impl PgUserRepository {
    /// Creates a new PgUserRepository.
    pub fn new(pool: PgPool) -> Self {
        PgUserRepository { pool }
    }
}

#[async_trait]
impl UserRepository for PgUserRepository {
    async fn create(&self, user: &User, password_hash: &str) -> DbResult<()> {
        debug!(id = %user.id, username = %user.username, "Inserting user");

        sqlx::query(
            "INSERT INTO app_user (id, username, password_hash, role) VALUES ($1, $2, $3, $4)",
        )
        .bind(&user.id)
        .bind(&user.username)
        .bind(password_hash)
        .bind(&user.role)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn get_by_username(&self, username: &str) -> DbResult<Option<UserCredentials>> {
        let credentials = sqlx::query_as::<_, UserCredentials>(
            "SELECT id, username, role, password_hash FROM app_user WHERE username = $1",
        )
        .bind(username)
        .fetch_optional(&self.pool)
        .await?;

        Ok(credentials)
    }

    async fn get(&self, id: &str) -> DbResult<Option<User>> {
        let user =
            sqlx::query_as::<_, User>("SELECT id, username, role FROM app_user WHERE id = $1")
                .bind(id)
                .fetch_optional(&self.pool)
                .await?;

        Ok(user)
    }

    async fn paging(&self, query: PageQuery) -> DbResult<(Vec<User>, Paging)> {
        let users = sqlx::query_as::<_, User>(
            "SELECT id, username, role FROM app_user ORDER BY username LIMIT $1 OFFSET $2",
        )
        .bind(query.take)
        .bind(query.skip)
        .fetch_all(&self.pool)
        .await?;

        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM app_user")
            .fetch_one(&self.pool)
            .await?;

        Ok((users, Paging::for_query(query, total)))
    }
}
