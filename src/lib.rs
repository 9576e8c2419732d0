pub mod auth;
pub mod config;
pub mod database;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod session;
pub mod state;
pub mod views;

use axum::{
    http::{header, HeaderValue},
    middleware::from_fn_with_state,
    routing::get,
    Router,
};
use std::sync::Arc;
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::trace::TraceLayer;

use crate::handlers::{auth as auth_handlers, donations, events, home, milestones, participants, surveys, users};
use crate::middleware::{require_login, require_manager};
use crate::state::AppState;

/// Build the full application router.
pub fn app(state: Arc<AppState>) -> Router {
    Router::new()
        // Public
        .route("/", get(home::landing))
        .route("/login", get(auth_handlers::login_form).post(auth_handlers::login_submit))
        .route("/logout", get(auth_handlers::logout))
        .route("/teapot", get(home::teapot))
        // Any logged-in user
        .merge(login_routes(&state))
        // Manager role required
        .merge(manager_routes(&state))
        // Global middleware
        .layer(TraceLayer::new_for_http())
        // Security headers on every response
        .layer(SetResponseHeaderLayer::if_not_present(
            header::X_CONTENT_TYPE_OPTIONS,
            HeaderValue::from_static("nosniff"),
        ))
        .layer(SetResponseHeaderLayer::if_not_present(
            header::X_FRAME_OPTIONS,
            HeaderValue::from_static("SAMEORIGIN"),
        ))
        .layer(SetResponseHeaderLayer::if_not_present(
            header::REFERRER_POLICY,
            HeaderValue::from_static("no-referrer"),
        ))
        .with_state(state)
}

fn login_routes(state: &Arc<AppState>) -> Router<Arc<AppState>> {
    Router::new()
        .route("/dashboard", get(home::dashboard))
        .route("/participants", get(participants::list))
        .route("/participants/milestones/:id", get(milestones::for_participant))
        .route("/events", get(events::list))
        .route("/surveys", get(surveys::list))
        .route("/milestones", get(milestones::list))
        .route("/donations", get(donations::list))
        .route_layer(from_fn_with_state(state.clone(), require_login))
}

fn manager_routes(state: &Arc<AppState>) -> Router<Arc<AppState>> {
    Router::new()
        .route("/users", get(users::list))
        .route("/users/add", get(users::add_form).post(users::add))
        .route("/users/edit/:id", get(users::edit_form).post(users::edit))
        .route("/participants/add", get(participants::add_form).post(participants::add))
        .route("/participants/edit/:id", get(participants::edit_form).post(participants::edit))
        .route("/events/add", get(events::add_form).post(events::add))
        .route("/events/edit/:id", get(events::edit_form).post(events::edit))
        .route("/surveys/add", get(surveys::add_form).post(surveys::add))
        .route("/surveys/edit/:id", get(surveys::edit_form).post(surveys::edit))
        .route("/milestones/add", get(milestones::add_form).post(milestones::add))
        .route("/milestones/edit/:id", get(milestones::edit_form).post(milestones::edit))
        .route("/donations/add", get(donations::add_form).post(donations::add))
        .route("/donations/edit/:id", get(donations::edit_form).post(donations::edit))
        .route_layer(from_fn_with_state(state.clone(), require_manager))
}
