use axum::{
    extract::{Path, State},
    response::{Html, Redirect},
    Form,
};
use std::sync::Arc;

use crate::database::repositories::EventRepository;
use crate::error::AppError;
use crate::models::{Event, EventForm};
use crate::state::AppState;
use crate::views::{self, Field, Row};

/// GET /events
pub async fn list(State(state): State<Arc<AppState>>) -> Result<Html<String>, AppError> {
    let events = EventRepository::new(state.pool.clone()).list().await?;
    let rows = events
        .into_iter()
        .map(|e| Row {
            id: e.id,
            cells: vec![
                e.id.to_string(),
                e.title,
                views::opt(&e.location),
                views::opt(&e.starts_on),
                views::opt(&e.description),
            ],
        })
        .collect();

    Ok(views::table_page(
        "Events",
        Some("/events/add"),
        &["id", "title", "location", "starts", "description"],
        &[("edit", "/events/edit")],
        rows,
    ))
}

/// GET /events/add
pub async fn add_form() -> Html<String> {
    views::form_page("Add Event", "/events/add", "/events", &fields(None))
}

/// POST /events/add
pub async fn add(
    State(state): State<Arc<AppState>>,
    Form(form): Form<EventForm>,
) -> Result<Redirect, AppError> {
    EventRepository::new(state.pool.clone()).insert(form).await?;
    Ok(Redirect::to("/events"))
}

/// GET /events/edit/:id
pub async fn edit_form(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
) -> Result<Html<String>, AppError> {
    let event = EventRepository::new(state.pool.clone())
        .find_by_id(id)
        .await?
        .ok_or_else(|| AppError::not_found("event"))?;

    Ok(views::form_page(
        "Edit Event",
        &format!("/events/edit/{}", id),
        "/events",
        &fields(Some(&event)),
    ))
}

/// POST /events/edit/:id
pub async fn edit(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
    Form(form): Form<EventForm>,
) -> Result<Redirect, AppError> {
    EventRepository::new(state.pool.clone())
        .update(id, form)
        .await
        .map_err(|e| match e {
            sqlx::Error::RowNotFound => AppError::not_found("event"),
            other => other.into(),
        })?;
    Ok(Redirect::to("/events"))
}

fn fields(event: Option<&Event>) -> Vec<Field> {
    vec![
        Field::text("title", "Title")
            .value(event.map(|e| e.title.as_str()).unwrap_or(""))
            .required(),
        Field::text("location", "Location")
            .value(event.map(|e| views::opt(&e.location)).unwrap_or_default()),
        Field::date("starts_on", "Starts on")
            .value(event.map(|e| views::opt(&e.starts_on)).unwrap_or_default()),
        Field::textarea("description", "Description").value(
            event
                .map(|e| views::opt(&e.description))
                .unwrap_or_default(),
        ),
    ]
}
