use sqlx::PgPool;

use crate::models::{Milestone, MilestoneForm};

#[derive(Clone)]
pub struct MilestoneRepository {
    pool: PgPool,
}

impl MilestoneRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn list(&self) -> Result<Vec<Milestone>, sqlx::Error> {
        sqlx::query_as::<_, Milestone>(
            "SELECT id, participant_id, title, achieved_on, notes FROM milestones ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await
    }

    /// Milestones for one participant, the one-to-many display.
    pub async fn list_for_participant(
        &self,
        participant_id: i32,
    ) -> Result<Vec<Milestone>, sqlx::Error> {
        sqlx::query_as::<_, Milestone>(
            r#"
            SELECT id, participant_id, title, achieved_on, notes
            FROM milestones
            WHERE participant_id = $1
            ORDER BY id
            "#,
        )
        .bind(participant_id)
        .fetch_all(&self.pool)
        .await
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Milestone>, sqlx::Error> {
        sqlx::query_as::<_, Milestone>(
            "SELECT id, participant_id, title, achieved_on, notes FROM milestones WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
    }

    pub async fn insert(&self, form: MilestoneForm) -> Result<Milestone, sqlx::Error> {
        sqlx::query_as::<_, Milestone>(
            r#"
            INSERT INTO milestones (participant_id, title, achieved_on, notes)
            VALUES ($1, $2, $3, $4)
            RETURNING id, participant_id, title, achieved_on, notes
            "#,
        )
        .bind(form.participant_id)
        .bind(form.title)
        .bind(form.achieved_on)
        .bind(form.notes)
        .fetch_one(&self.pool)
        .await
    }

    pub async fn update(&self, id: i32, form: MilestoneForm) -> Result<Milestone, sqlx::Error> {
        sqlx::query_as::<_, Milestone>(
            r#"
            UPDATE milestones
            SET participant_id = $2, title = $3, achieved_on = $4, notes = $5
            WHERE id = $1
            RETURNING id, participant_id, title, achieved_on, notes
            "#,
        )
        .bind(id)
        .bind(form.participant_id)
        .bind(form.title)
        .bind(form.achieved_on)
        .bind(form.notes)
        .fetch_one(&self.pool)
        .await
    }
}
