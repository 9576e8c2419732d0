//! Login and logout.

use axum::{
    extract::State,
    response::{Html, IntoResponse, Redirect, Response},
    Form,
};
use axum_extra::extract::cookie::{Cookie, SameSite};
use axum_extra::extract::SignedCookieJar;
use serde::Deserialize;
use std::sync::Arc;
use uuid::Uuid;

use crate::auth;
use crate::error::AppError;
use crate::session::SESSION_COOKIE;
use crate::state::{AppState, CookieKey};
use crate::views;

#[derive(Debug, Deserialize)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

/// GET /login
pub async fn login_form() -> Html<String> {
    views::login(false)
}

/// POST /login - on success stores a session and redirects to the dashboard,
/// on failure re-renders the form with an error flag.
pub async fn login_submit(
    State(state): State<Arc<AppState>>,
    jar: SignedCookieJar<CookieKey>,
    Form(form): Form<LoginForm>,
) -> Result<Response, AppError> {
    match auth::authenticate(&state, &form.email, &form.password).await {
        Some(user) => {
            let sid = state.sessions.create(&user).await?;
            tracing::info!(email = %user.email, "login");
            let jar = jar.add(session_cookie(&state, sid));
            Ok((jar, Redirect::to("/dashboard")).into_response())
        }
        None => {
            tracing::debug!(email = %form.email, "failed login attempt");
            Ok(views::login(true).into_response())
        }
    }
}

/// GET /logout - destroys the session and clears the cookie.
pub async fn logout(
    State(state): State<Arc<AppState>>,
    jar: SignedCookieJar<CookieKey>,
) -> Result<(SignedCookieJar<CookieKey>, Redirect), AppError> {
    let jar = match jar.get(SESSION_COOKIE) {
        Some(cookie) => {
            if let Ok(id) = Uuid::parse_str(cookie.value()) {
                state.sessions.destroy(id).await?;
            }
            let mut removal = Cookie::new(SESSION_COOKIE, "");
            removal.set_path("/");
            jar.remove(removal)
        }
        None => jar,
    };
    Ok((jar, Redirect::to("/")))
}

fn session_cookie(state: &AppState, sid: Uuid) -> Cookie<'static> {
    Cookie::build((SESSION_COOKIE, sid.to_string()))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .secure(state.config.environment.is_production())
        .max_age(time::Duration::hours(state.config.session.ttl_hours))
        .build()
}
