use anyhow::Context;
use std::sync::Arc;

use ella_rises::config::AppConfig;
use ella_rises::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env if present so cargo run picks up DB_* and SESSION_SECRET.
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt::init();

    let config = AppConfig::from_env();
    tracing::info!("starting Ella Rises in {:?} mode", config.environment);
    config.warn_if_insecure();

    let state = Arc::new(AppState::new(config));

    // The pool connects lazily; if the database is down the public pages
    // still work, so session table setup is best-effort at startup.
    match state.sessions.ensure_schema().await {
        Ok(()) => match state.sessions.purge_expired().await {
            Ok(purged) if purged > 0 => tracing::info!("purged {} expired sessions", purged),
            Ok(_) => {}
            Err(e) => tracing::warn!("session purge failed: {}", e),
        },
        Err(e) => tracing::warn!("session table setup deferred, database unreachable: {}", e),
    }

    let bind_addr = format!("0.0.0.0:{}", state.config.http_port);
    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", bind_addr))?;

    tracing::info!("Ella Rises listening on http://{}", bind_addr);

    axum::serve(listener, ella_rises::app(state))
        .await
        .context("server error")?;

    Ok(())
}
