use axum::{
    extract::{Path, State},
    response::{Html, Redirect},
    Form,
};
use std::sync::Arc;

use crate::auth::hash_password;
use crate::database::repositories::UserRepository;
use crate::error::AppError;
use crate::models::{NewUserForm, UpdateUserForm, User};
use crate::state::AppState;
use crate::views::{self, Field, Row};

const ROLES: &[&str] = &["manager", "member"];

/// GET /users
pub async fn list(State(state): State<Arc<AppState>>) -> Result<Html<String>, AppError> {
    let users = UserRepository::new(state.pool.clone()).list().await?;
    let rows = users
        .into_iter()
        .map(|u| Row {
            id: u.id,
            cells: vec![u.id.to_string(), u.email, u.role],
        })
        .collect();

    Ok(views::table_page(
        "Users",
        Some("/users/add"),
        &["id", "email", "role"],
        &[("edit", "/users/edit")],
        rows,
    ))
}

/// GET /users/add
pub async fn add_form() -> Html<String> {
    views::form_page("Add User", "/users/add", "/users", &fields(None))
}

/// POST /users/add - the plaintext password is digested before it reaches the
/// repository.
pub async fn add(
    State(state): State<Arc<AppState>>,
    Form(form): Form<NewUserForm>,
) -> Result<Redirect, AppError> {
    let digest = hash_password(&form.password);
    UserRepository::new(state.pool.clone())
        .insert(&form.email, &digest, &form.role)
        .await?;
    Ok(Redirect::to("/users"))
}

/// GET /users/edit/:id
pub async fn edit_form(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
) -> Result<Html<String>, AppError> {
    let user = UserRepository::new(state.pool.clone())
        .find_by_id(id)
        .await?
        .ok_or_else(|| AppError::not_found("user"))?;

    Ok(views::form_page(
        "Edit User",
        &format!("/users/edit/{}", id),
        "/users",
        &fields(Some(&user)),
    ))
}

/// POST /users/edit/:id - an empty password field keeps the stored one.
pub async fn edit(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
    Form(form): Form<UpdateUserForm>,
) -> Result<Redirect, AppError> {
    let digest = form.password.as_deref().map(hash_password);
    UserRepository::new(state.pool.clone())
        .update(id, &form.email, digest.as_deref(), &form.role)
        .await
        .map_err(|e| match e {
            sqlx::Error::RowNotFound => AppError::not_found("user"),
            other => other.into(),
        })?;
    Ok(Redirect::to("/users"))
}

fn fields(user: Option<&User>) -> Vec<Field> {
    let mut password = Field::password("password", "Password");
    if user.is_none() {
        // Required on create; on edit an empty field means "keep".
        password = password.required();
    }
    vec![
        Field::text("email", "Email")
            .value(user.map(|u| u.email.as_str()).unwrap_or(""))
            .required(),
        password,
        Field::select("role", "Role", ROLES)
            .value(user.map(|u| u.role.as_str()).unwrap_or("member")),
    ]
}
