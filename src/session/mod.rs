//! Database-backed session store.
//!
//! Login state lives server-side in a `sessions` table; the browser only
//! holds a signed cookie with the session id. Sessions expire after a fixed
//! TTL and expired rows are treated as absent on load.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;
use thiserror::Error;
use uuid::Uuid;

/// Name of the session id cookie.
pub const SESSION_COOKIE: &str = "ella_sid";

#[derive(Debug, Error)]
pub enum SessionError {
    #[error(transparent)]
    Database(#[from] sqlx::Error),

    #[error("corrupt session payload: {0}")]
    Corrupt(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Manager,
    Member,
}

impl Role {
    /// The users table stores the role as plain text; anything that is not
    /// literally `manager` gets the unprivileged role.
    pub fn from_db(value: &str) -> Self {
        if value == "manager" {
            Role::Manager
        } else {
            Role::Member
        }
    }
}

/// The user object carried by a session: just enough to render pages and
/// answer role checks without touching the users table on every request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionUser {
    pub id: i32,
    pub email: String,
    pub role: Role,
}

impl SessionUser {
    pub fn is_manager(&self) -> bool {
        self.role == Role::Manager
    }
}

#[derive(Clone)]
pub struct SessionStore {
    pool: PgPool,
    ttl: Duration,
}

impl SessionStore {
    pub fn new(pool: PgPool, ttl_hours: i64) -> Self {
        Self {
            pool,
            ttl: Duration::hours(ttl_hours),
        }
    }

    /// Create the sessions table if it does not exist yet. The entity tables
    /// are assumed to pre-exist; this one belongs to the store.
    pub async fn ensure_schema(&self) -> Result<(), SessionError> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS sessions (
                id UUID PRIMARY KEY,
                user_data JSONB NOT NULL,
                expires_at TIMESTAMPTZ NOT NULL
            )
            "#,
        )
        .execute(&self.pool)
        .await?;

        sqlx::query("CREATE INDEX IF NOT EXISTS sessions_expires_at_idx ON sessions (expires_at)")
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    /// Persist a new session and return its id.
    pub async fn create(&self, user: &SessionUser) -> Result<Uuid, SessionError> {
        let id = Uuid::new_v4();
        let expires_at = Utc::now() + self.ttl;

        sqlx::query("INSERT INTO sessions (id, user_data, expires_at) VALUES ($1, $2, $3)")
            .bind(id)
            .bind(serde_json::to_value(user)?)
            .bind(expires_at)
            .execute(&self.pool)
            .await?;

        Ok(id)
    }

    /// Load the user for a session id. Missing and expired sessions both come
    /// back as `None`; expired rows are deleted on the way out.
    pub async fn load(&self, id: Uuid) -> Result<Option<SessionUser>, SessionError> {
        let row: Option<(serde_json::Value, DateTime<Utc>)> =
            sqlx::query_as("SELECT user_data, expires_at FROM sessions WHERE id = $1")
                .bind(id)
                .fetch_optional(&self.pool)
                .await?;

        let Some((user_data, expires_at)) = row else {
            return Ok(None);
        };

        if is_expired(expires_at, Utc::now()) {
            self.destroy(id).await?;
            return Ok(None);
        }

        Ok(Some(serde_json::from_value(user_data)?))
    }

    pub async fn destroy(&self, id: Uuid) -> Result<(), SessionError> {
        sqlx::query("DELETE FROM sessions WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    /// Delete all expired rows. Called once at startup; leftover garbage from
    /// crashed runs would otherwise accumulate forever.
    pub async fn purge_expired(&self) -> Result<u64, SessionError> {
        let result = sqlx::query("DELETE FROM sessions WHERE expires_at <= $1")
            .bind(Utc::now())
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected())
    }
}

fn is_expired(expires_at: DateTime<Utc>, now: DateTime<Utc>) -> bool {
    expires_at <= now
}
