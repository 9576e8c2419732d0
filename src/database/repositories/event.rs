use sqlx::PgPool;

use crate::models::{Event, EventForm};

#[derive(Clone)]
pub struct EventRepository {
    pool: PgPool,
}

impl EventRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn list(&self) -> Result<Vec<Event>, sqlx::Error> {
        sqlx::query_as::<_, Event>(
            "SELECT id, title, location, starts_on, description FROM events ORDER BY starts_on, id",
        )
        .fetch_all(&self.pool)
        .await
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Event>, sqlx::Error> {
        sqlx::query_as::<_, Event>(
            "SELECT id, title, location, starts_on, description FROM events WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
    }

    pub async fn insert(&self, form: EventForm) -> Result<Event, sqlx::Error> {
        sqlx::query_as::<_, Event>(
            r#"
            INSERT INTO events (title, location, starts_on, description)
            VALUES ($1, $2, $3, $4)
            RETURNING id, title, location, starts_on, description
            "#,
        )
        .bind(form.title)
        .bind(form.location)
        .bind(form.starts_on)
        .bind(form.description)
        .fetch_one(&self.pool)
        .await
    }

    pub async fn update(&self, id: i32, form: EventForm) -> Result<Event, sqlx::Error> {
        sqlx::query_as::<_, Event>(
            r#"
            UPDATE events
            SET title = $2, location = $3, starts_on = $4, description = $5
            WHERE id = $1
            RETURNING id, title, location, starts_on, description
            "#,
        )
        .bind(id)
        .bind(form.title)
        .bind(form.location)
        .bind(form.starts_on)
        .bind(form.description)
        .fetch_one(&self.pool)
        .await
    }
}
