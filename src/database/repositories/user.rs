use sqlx::PgPool;

use crate::models::User;

#[derive(Clone)]
pub struct UserRepository {
    pool: PgPool,
}

impl UserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn list(&self) -> Result<Vec<User>, sqlx::Error> {
        sqlx::query_as::<_, User>("SELECT id, email, password, role FROM users ORDER BY id")
            .fetch_all(&self.pool)
            .await
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<User>, sqlx::Error> {
        sqlx::query_as::<_, User>("SELECT id, email, password, role FROM users WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
    }

    pub async fn find_by_email(&self, email: &str) -> Result<Option<User>, sqlx::Error> {
        sqlx::query_as::<_, User>("SELECT id, email, password, role FROM users WHERE email = $1")
            .bind(email)
            .fetch_optional(&self.pool)
            .await
    }

    /// `password_digest` must already be hashed; this layer never sees
    /// plaintext.
    pub async fn insert(
        &self,
        email: &str,
        password_digest: &str,
        role: &str,
    ) -> Result<User, sqlx::Error> {
        sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (email, password, role)
            VALUES ($1, $2, $3)
            RETURNING id, email, password, role
            "#,
        )
        .bind(email)
        .bind(password_digest)
        .bind(role)
        .fetch_one(&self.pool)
        .await
    }

    /// Update a user; a `None` digest keeps the stored password.
    pub async fn update(
        &self,
        id: i32,
        email: &str,
        password_digest: Option<&str>,
        role: &str,
    ) -> Result<User, sqlx::Error> {
        sqlx::query_as::<_, User>(
            r#"
            UPDATE users
            SET email = $2, password = COALESCE($3, password), role = $4
            WHERE id = $1
            RETURNING id, email, password, role
            "#,
        )
        .bind(id)
        .bind(email)
        .bind(password_digest)
        .bind(role)
        .fetch_one(&self.pool)
        .await
    }
}
