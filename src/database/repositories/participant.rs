use sqlx::PgPool;

use crate::models::{Participant, ParticipantForm};

#[derive(Clone)]
pub struct ParticipantRepository {
    pool: PgPool,
}

impl ParticipantRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn list(&self) -> Result<Vec<Participant>, sqlx::Error> {
        sqlx::query_as::<_, Participant>(
            "SELECT id, first_name, last_name, email, phone, joined_on FROM participants ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Participant>, sqlx::Error> {
        sqlx::query_as::<_, Participant>(
            "SELECT id, first_name, last_name, email, phone, joined_on FROM participants WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
    }

    pub async fn insert(&self, form: ParticipantForm) -> Result<Participant, sqlx::Error> {
        sqlx::query_as::<_, Participant>(
            r#"
            INSERT INTO participants (first_name, last_name, email, phone, joined_on)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, first_name, last_name, email, phone, joined_on
            "#,
        )
        .bind(form.first_name)
        .bind(form.last_name)
        .bind(form.email)
        .bind(form.phone)
        .bind(form.joined_on)
        .fetch_one(&self.pool)
        .await
    }

    /// Full overwrite; the edit form always submits every column.
    pub async fn update(&self, id: i32, form: ParticipantForm) -> Result<Participant, sqlx::Error> {
        sqlx::query_as::<_, Participant>(
            r#"
            UPDATE participants
            SET first_name = $2, last_name = $3, email = $4, phone = $5, joined_on = $6
            WHERE id = $1
            RETURNING id, first_name, last_name, email, phone, joined_on
            "#,
        )
        .bind(id)
        .bind(form.first_name)
        .bind(form.last_name)
        .bind(form.email)
        .bind(form.phone)
        .bind(form.joined_on)
        .fetch_one(&self.pool)
        .await
    }
}
