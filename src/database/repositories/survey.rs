use sqlx::PgPool;

use crate::models::{Survey, SurveyForm};

#[derive(Clone)]
pub struct SurveyRepository {
    pool: PgPool,
}

impl SurveyRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn list(&self) -> Result<Vec<Survey>, sqlx::Error> {
        sqlx::query_as::<_, Survey>(
            "SELECT id, participant_id, title, score, comments FROM surveys ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Survey>, sqlx::Error> {
        sqlx::query_as::<_, Survey>(
            "SELECT id, participant_id, title, score, comments FROM surveys WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
    }

    pub async fn insert(&self, form: SurveyForm) -> Result<Survey, sqlx::Error> {
        sqlx::query_as::<_, Survey>(
            r#"
            INSERT INTO surveys (participant_id, title, score, comments)
            VALUES ($1, $2, $3, $4)
            RETURNING id, participant_id, title, score, comments
            "#,
        )
        .bind(form.participant_id)
        .bind(form.title)
        .bind(form.score)
        .bind(form.comments)
        .fetch_one(&self.pool)
        .await
    }

    pub async fn update(&self, id: i32, form: SurveyForm) -> Result<Survey, sqlx::Error> {
        sqlx::query_as::<_, Survey>(
            r#"
            UPDATE surveys
            SET participant_id = $2, title = $3, score = $4, comments = $5
            WHERE id = $1
            RETURNING id, participant_id, title, score, comments
            "#,
        )
        .bind(id)
        .bind(form.participant_id)
        .bind(form.title)
        .bind(form.score)
        .bind(form.comments)
        .fetch_one(&self.pool)
        .await
    }
}
