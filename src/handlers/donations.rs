use axum::{
    extract::{Path, State},
    response::{Html, Redirect},
    Form,
};
use std::sync::Arc;

use crate::database::repositories::DonationRepository;
use crate::error::AppError;
use crate::models::{Donation, DonationForm};
use crate::state::AppState;
use crate::views::{self, Field, Row};

/// GET /donations
pub async fn list(State(state): State<Arc<AppState>>) -> Result<Html<String>, AppError> {
    let donations = DonationRepository::new(state.pool.clone()).list().await?;
    let rows = donations
        .into_iter()
        .map(|d| Row {
            id: d.id,
            cells: vec![
                d.id.to_string(),
                d.donor_name,
                views::opt(&d.email),
                d.amount.to_string(),
                views::opt(&d.donated_on),
                views::opt(&d.notes),
            ],
        })
        .collect();

    Ok(views::table_page(
        "Donations",
        Some("/donations/add"),
        &["id", "donor", "email", "amount", "date", "notes"],
        &[("edit", "/donations/edit")],
        rows,
    ))
}

/// GET /donations/add
pub async fn add_form() -> Html<String> {
    views::form_page("Add Donation", "/donations/add", "/donations", &fields(None))
}

/// POST /donations/add
pub async fn add(
    State(state): State<Arc<AppState>>,
    Form(form): Form<DonationForm>,
) -> Result<Redirect, AppError> {
    DonationRepository::new(state.pool.clone())
        .insert(form)
        .await?;
    Ok(Redirect::to("/donations"))
}

/// GET /donations/edit/:id
pub async fn edit_form(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
) -> Result<Html<String>, AppError> {
    let donation = DonationRepository::new(state.pool.clone())
        .find_by_id(id)
        .await?
        .ok_or_else(|| AppError::not_found("donation"))?;

    Ok(views::form_page(
        "Edit Donation",
        &format!("/donations/edit/{}", id),
        "/donations",
        &fields(Some(&donation)),
    ))
}

/// POST /donations/edit/:id
pub async fn edit(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
    Form(form): Form<DonationForm>,
) -> Result<Redirect, AppError> {
    DonationRepository::new(state.pool.clone())
        .update(id, form)
        .await
        .map_err(|e| match e {
            sqlx::Error::RowNotFound => AppError::not_found("donation"),
            other => other.into(),
        })?;
    Ok(Redirect::to("/donations"))
}

fn fields(donation: Option<&Donation>) -> Vec<Field> {
    vec![
        Field::text("donor_name", "Donor")
            .value(donation.map(|d| d.donor_name.as_str()).unwrap_or(""))
            .required(),
        Field::text("email", "Email")
            .value(donation.map(|d| views::opt(&d.email)).unwrap_or_default()),
        Field::text("amount", "Amount")
            .value(
                donation
                    .map(|d| d.amount.to_string())
                    .unwrap_or_default(),
            )
            .required(),
        Field::date("donated_on", "Donated on").value(
            donation
                .map(|d| views::opt(&d.donated_on))
                .unwrap_or_default(),
        ),
        Field::textarea("notes", "Notes")
            .value(donation.map(|d| views::opt(&d.notes)).unwrap_or_default()),
    ]
}
