use axum::{
    extract::{Path, State},
    response::{Html, Redirect},
    Form,
};
use std::sync::Arc;

use crate::database::repositories::{MilestoneRepository, ParticipantRepository};
use crate::error::AppError;
use crate::models::{Milestone, MilestoneForm};
use crate::state::AppState;
use crate::views::{self, Field, Row};

/// GET /milestones
pub async fn list(State(state): State<Arc<AppState>>) -> Result<Html<String>, AppError> {
    let milestones = MilestoneRepository::new(state.pool.clone()).list().await?;
    Ok(views::table_page(
        "Milestones",
        Some("/milestones/add"),
        HEADERS,
        &[("edit", "/milestones/edit")],
        rows(milestones),
    ))
}

/// GET /participants/milestones/:id - milestones for one participant.
pub async fn for_participant(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
) -> Result<Html<String>, AppError> {
    let participant = ParticipantRepository::new(state.pool.clone())
        .find_by_id(id)
        .await?
        .ok_or_else(|| AppError::not_found("participant"))?;

    let milestones = MilestoneRepository::new(state.pool.clone())
        .list_for_participant(id)
        .await?;

    let title = format!(
        "Milestones for {} {}",
        participant.first_name, participant.last_name
    );
    Ok(views::table_page(
        &title,
        Some("/milestones/add"),
        HEADERS,
        &[("edit", "/milestones/edit")],
        rows(milestones),
    ))
}

/// GET /milestones/add
pub async fn add_form() -> Html<String> {
    views::form_page("Add Milestone", "/milestones/add", "/milestones", &fields(None))
}

/// POST /milestones/add
pub async fn add(
    State(state): State<Arc<AppState>>,
    Form(form): Form<MilestoneForm>,
) -> Result<Redirect, AppError> {
    MilestoneRepository::new(state.pool.clone())
        .insert(form)
        .await?;
    Ok(Redirect::to("/milestones"))
}

/// GET /milestones/edit/:id
pub async fn edit_form(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
) -> Result<Html<String>, AppError> {
    let milestone = MilestoneRepository::new(state.pool.clone())
        .find_by_id(id)
        .await?
        .ok_or_else(|| AppError::not_found("milestone"))?;

    Ok(views::form_page(
        "Edit Milestone",
        &format!("/milestones/edit/{}", id),
        "/milestones",
        &fields(Some(&milestone)),
    ))
}

/// POST /milestones/edit/:id - updates the milestone row itself.
pub async fn edit(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
    Form(form): Form<MilestoneForm>,
) -> Result<Redirect, AppError> {
    MilestoneRepository::new(state.pool.clone())
        .update(id, form)
        .await
        .map_err(|e| match e {
            sqlx::Error::RowNotFound => AppError::not_found("milestone"),
            other => other.into(),
        })?;
    Ok(Redirect::to("/milestones"))
}

const HEADERS: &[&str] = &["id", "participant", "title", "achieved", "notes"];

fn rows(milestones: Vec<Milestone>) -> Vec<Row> {
    milestones
        .into_iter()
        .map(|m| Row {
            id: m.id,
            cells: vec![
                m.id.to_string(),
                m.participant_id.to_string(),
                m.title,
                views::opt(&m.achieved_on),
                views::opt(&m.notes),
            ],
        })
        .collect()
}

fn fields(milestone: Option<&Milestone>) -> Vec<Field> {
    vec![
        Field::number("participant_id", "Participant id")
            .value(
                milestone
                    .map(|m| m.participant_id.to_string())
                    .unwrap_or_default(),
            )
            .required(),
        Field::text("title", "Title")
            .value(milestone.map(|m| m.title.as_str()).unwrap_or(""))
            .required(),
        Field::date("achieved_on", "Achieved on").value(
            milestone
                .map(|m| views::opt(&m.achieved_on))
                .unwrap_or_default(),
        ),
        Field::textarea("notes", "Notes")
            .value(milestone.map(|m| views::opt(&m.notes)).unwrap_or_default()),
    ]
}
