use axum::{
    extract::{Path, State},
    response::{Html, Redirect},
    Form,
};
use std::sync::Arc;

use crate::database::repositories::SurveyRepository;
use crate::error::AppError;
use crate::models::{Survey, SurveyForm};
use crate::state::AppState;
use crate::views::{self, Field, Row};

/// GET /surveys
pub async fn list(State(state): State<Arc<AppState>>) -> Result<Html<String>, AppError> {
    let surveys = SurveyRepository::new(state.pool.clone()).list().await?;
    let rows = surveys
        .into_iter()
        .map(|s| Row {
            id: s.id,
            cells: vec![
                s.id.to_string(),
                views::opt(&s.participant_id),
                s.title,
                views::opt(&s.score),
                views::opt(&s.comments),
            ],
        })
        .collect();

    Ok(views::table_page(
        "Surveys",
        Some("/surveys/add"),
        &["id", "participant", "title", "score", "comments"],
        &[("edit", "/surveys/edit")],
        rows,
    ))
}

/// GET /surveys/add
pub async fn add_form() -> Html<String> {
    views::form_page("Add Survey", "/surveys/add", "/surveys", &fields(None))
}

/// POST /surveys/add
pub async fn add(
    State(state): State<Arc<AppState>>,
    Form(form): Form<SurveyForm>,
) -> Result<Redirect, AppError> {
    SurveyRepository::new(state.pool.clone()).insert(form).await?;
    Ok(Redirect::to("/surveys"))
}

/// GET /surveys/edit/:id
pub async fn edit_form(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
) -> Result<Html<String>, AppError> {
    let survey = SurveyRepository::new(state.pool.clone())
        .find_by_id(id)
        .await?
        .ok_or_else(|| AppError::not_found("survey"))?;

    Ok(views::form_page(
        "Edit Survey",
        &format!("/surveys/edit/{}", id),
        "/surveys",
        &fields(Some(&survey)),
    ))
}

/// POST /surveys/edit/:id
pub async fn edit(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
    Form(form): Form<SurveyForm>,
) -> Result<Redirect, AppError> {
    SurveyRepository::new(state.pool.clone())
        .update(id, form)
        .await
        .map_err(|e| match e {
            sqlx::Error::RowNotFound => AppError::not_found("survey"),
            other => other.into(),
        })?;
    Ok(Redirect::to("/surveys"))
}

fn fields(survey: Option<&Survey>) -> Vec<Field> {
    vec![
        Field::number("participant_id", "Participant id").value(
            survey
                .map(|s| views::opt(&s.participant_id))
                .unwrap_or_default(),
        ),
        Field::text("title", "Title")
            .value(survey.map(|s| s.title.as_str()).unwrap_or(""))
            .required(),
        Field::number("score", "Score")
            .value(survey.map(|s| views::opt(&s.score)).unwrap_or_default()),
        Field::textarea("comments", "Comments")
            .value(survey.map(|s| views::opt(&s.comments)).unwrap_or_default()),
    ]
}
