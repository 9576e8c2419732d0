//! Session guards.
//!
//! Two middlewares gate every data route: `require_login` for read access and
//! `require_manager` for mutations. Both restore the session user from the
//! signed cookie and inject it as a request extension for the handler.

use async_trait::async_trait;
use axum::{
    extract::{FromRequestParts, Request, State},
    http::request::Parts,
    middleware::Next,
    response::Response,
};
use axum_extra::extract::SignedCookieJar;
use std::sync::Arc;
use uuid::Uuid;

use crate::error::AppError;
use crate::session::{SessionUser, SESSION_COOKIE};
use crate::state::{AppState, CookieKey};

/// Restore the session user from the cookie jar, if any. An absent cookie, a
/// malformed session id, and an expired or unknown session all mean "not
/// logged in"; only a store failure is an error.
pub async fn session_user(
    state: &AppState,
    jar: &SignedCookieJar<CookieKey>,
) -> Result<Option<SessionUser>, AppError> {
    let Some(cookie) = jar.get(SESSION_COOKIE) else {
        return Ok(None);
    };
    let Ok(id) = Uuid::parse_str(cookie.value()) else {
        return Ok(None);
    };
    Ok(state.sessions.load(id).await?)
}

/// Guard for pages that need any logged-in user. Redirects to `/login`
/// otherwise.
pub async fn require_login(
    State(state): State<Arc<AppState>>,
    jar: SignedCookieJar<CookieKey>,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let Some(user) = session_user(&state, &jar).await? else {
        return Err(AppError::NotLoggedIn);
    };
    request.extensions_mut().insert(user);
    Ok(next.run(request).await)
}

/// Guard for mutations. Unlike `require_login` this answers 403 rather than
/// redirecting, also for anonymous requests.
pub async fn require_manager(
    State(state): State<Arc<AppState>>,
    jar: SignedCookieJar<CookieKey>,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    match session_user(&state, &jar).await? {
        Some(user) if user.is_manager() => {
            request.extensions_mut().insert(user);
            Ok(next.run(request).await)
        }
        _ => Err(AppError::Forbidden),
    }
}

/// Extractor for pages that render differently for logged-in users but are
/// open to everyone, like the landing page. A store failure here must not
/// take the public page down, so it degrades to anonymous instead of erroring.
pub struct CurrentUser(pub Option<SessionUser>);

#[async_trait]
impl FromRequestParts<Arc<AppState>> for CurrentUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &Arc<AppState>,
    ) -> Result<Self, Self::Rejection> {
        let jar = match SignedCookieJar::from_request_parts(parts, state).await {
            Ok(jar) => jar,
            Err(never) => match never {},
        };
        let user = match session_user(state, &jar).await {
            Ok(user) => user,
            Err(e) => {
                tracing::warn!("session lookup failed on a public page: {}", e);
                None
            }
        };
        Ok(CurrentUser(user))
    }
}
