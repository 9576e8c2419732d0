pub mod repositories;

use sqlx::postgres::{PgConnectOptions, PgPoolOptions};
use sqlx::PgPool;

use crate::config::DatabaseConfig;

/// Build a lazily-connecting pool from the configured connection parts. The
/// first query opens the actual connection, so the binary starts (and the
/// public pages work) without a reachable database.
pub fn connect_lazy(config: &DatabaseConfig) -> PgPool {
    let options = PgConnectOptions::new()
        .host(&config.host)
        .port(config.port)
        .username(&config.user)
        .password(&config.password)
        .database(&config.name);

    PgPoolOptions::new()
        .max_connections(config.max_connections)
        .connect_lazy_with(options)
}
