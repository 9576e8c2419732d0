use axum::{
    http::StatusCode,
    response::{Html, IntoResponse},
    Extension,
};

use crate::error::AppError;
use crate::middleware::CurrentUser;
use crate::session::SessionUser;
use crate::views;

/// GET / - landing page, greets the session user if one is present.
pub async fn landing(CurrentUser(user): CurrentUser) -> Result<Html<String>, AppError> {
    Ok(views::landing(user.as_ref()))
}

/// GET /dashboard
pub async fn dashboard(Extension(user): Extension<SessionUser>) -> Html<String> {
    views::dashboard(&user)
}

/// GET /teapot
pub async fn teapot() -> impl IntoResponse {
    (StatusCode::IM_A_TEAPOT, "I'm a teapot ☕")
}
