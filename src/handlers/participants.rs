use axum::{
    extract::{Path, State},
    response::{Html, Redirect},
    Form,
};
use std::sync::Arc;

use crate::database::repositories::ParticipantRepository;
use crate::error::AppError;
use crate::models::{Participant, ParticipantForm};
use crate::state::AppState;
use crate::views::{self, Field, Row};

/// GET /participants
pub async fn list(State(state): State<Arc<AppState>>) -> Result<Html<String>, AppError> {
    let participants = ParticipantRepository::new(state.pool.clone()).list().await?;
    let rows = participants
        .into_iter()
        .map(|p| Row {
            id: p.id,
            cells: vec![
                p.id.to_string(),
                p.first_name,
                p.last_name,
                views::opt(&p.email),
                views::opt(&p.phone),
                views::opt(&p.joined_on),
            ],
        })
        .collect();

    Ok(views::table_page(
        "Participants",
        Some("/participants/add"),
        &["id", "first name", "last name", "email", "phone", "joined"],
        &[
            ("edit", "/participants/edit"),
            ("milestones", "/participants/milestones"),
        ],
        rows,
    ))
}

/// GET /participants/add
pub async fn add_form() -> Html<String> {
    views::form_page(
        "Add Participant",
        "/participants/add",
        "/participants",
        &fields(None),
    )
}

/// POST /participants/add
pub async fn add(
    State(state): State<Arc<AppState>>,
    Form(form): Form<ParticipantForm>,
) -> Result<Redirect, AppError> {
    ParticipantRepository::new(state.pool.clone())
        .insert(form)
        .await?;
    Ok(Redirect::to("/participants"))
}

/// GET /participants/edit/:id
pub async fn edit_form(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
) -> Result<Html<String>, AppError> {
    let participant = ParticipantRepository::new(state.pool.clone())
        .find_by_id(id)
        .await?
        .ok_or_else(|| AppError::not_found("participant"))?;

    Ok(views::form_page(
        "Edit Participant",
        &format!("/participants/edit/{}", id),
        "/participants",
        &fields(Some(&participant)),
    ))
}

/// POST /participants/edit/:id
pub async fn edit(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
    Form(form): Form<ParticipantForm>,
) -> Result<Redirect, AppError> {
    ParticipantRepository::new(state.pool.clone())
        .update(id, form)
        .await
        .map_err(|e| match e {
            sqlx::Error::RowNotFound => AppError::not_found("participant"),
            other => other.into(),
        })?;
    Ok(Redirect::to("/participants"))
}

fn fields(participant: Option<&Participant>) -> Vec<Field> {
    vec![
        Field::text("first_name", "First name")
            .value(participant.map(|p| p.first_name.as_str()).unwrap_or(""))
            .required(),
        Field::text("last_name", "Last name")
            .value(participant.map(|p| p.last_name.as_str()).unwrap_or(""))
            .required(),
        Field::text("email", "Email")
            .value(participant.map(|p| views::opt(&p.email)).unwrap_or_default()),
        Field::text("phone", "Phone")
            .value(participant.map(|p| views::opt(&p.phone)).unwrap_or_default()),
        Field::date("joined_on", "Joined on").value(
            participant
                .map(|p| views::opt(&p.joined_on))
                .unwrap_or_default(),
        ),
    ]
}
