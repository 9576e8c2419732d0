use sqlx::PgPool;

use crate::models::{Donation, DonationForm};

#[derive(Clone)]
pub struct DonationRepository {
    pool: PgPool,
}

impl DonationRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn list(&self) -> Result<Vec<Donation>, sqlx::Error> {
        sqlx::query_as::<_, Donation>(
            "SELECT id, donor_name, email, amount, donated_on, notes FROM donations ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Donation>, sqlx::Error> {
        sqlx::query_as::<_, Donation>(
            "SELECT id, donor_name, email, amount, donated_on, notes FROM donations WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
    }

    pub async fn insert(&self, form: DonationForm) -> Result<Donation, sqlx::Error> {
        sqlx::query_as::<_, Donation>(
            r#"
            INSERT INTO donations (donor_name, email, amount, donated_on, notes)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, donor_name, email, amount, donated_on, notes
            "#,
        )
        .bind(form.donor_name)
        .bind(form.email)
        .bind(form.amount)
        .bind(form.donated_on)
        .bind(form.notes)
        .fetch_one(&self.pool)
        .await
    }

    pub async fn update(&self, id: i32, form: DonationForm) -> Result<Donation, sqlx::Error> {
        sqlx::query_as::<_, Donation>(
            r#"
            UPDATE donations
            SET donor_name = $2, email = $3, amount = $4, donated_on = $5, notes = $6
            WHERE id = $1
            RETURNING id, donor_name, email, amount, donated_on, notes
            "#,
        )
        .bind(id)
        .bind(form.donor_name)
        .bind(form.email)
        .bind(form.amount)
        .bind(form.donated_on)
        .bind(form.notes)
        .fetch_one(&self.pool)
        .await
    }
}
