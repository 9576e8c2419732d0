use serde::{Deserialize, Serialize};
use std::env;

/// Fallback session secret. Fine for local development, a liability anywhere
/// else, which is why `warn_if_insecure` shouts about it.
pub const DEFAULT_SESSION_SECRET: &str = "secret-change-this";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub environment: Environment,
    pub http_port: u16,
    pub database: DatabaseConfig,
    pub session: SessionConfig,
    pub bootstrap_admin: BootstrapAdmin,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Environment {
    Development,
    Production,
}

impl Environment {
    pub fn is_production(self) -> bool {
        matches!(self, Environment::Production)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    pub host: String,
    pub port: u16,
    pub user: String,
    pub password: String,
    pub name: String,
    pub max_connections: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionConfig {
    pub secret: String,
    /// Session lifetime in hours. Both the cookie Max-Age and the server-side
    /// expiry use this value.
    pub ttl_hours: i64,
}

/// Built-in admin login so a fresh deployment is reachable before any rows
/// exist in the users table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BootstrapAdmin {
    pub email: String,
    pub password: String,
}

impl AppConfig {
    pub fn from_env() -> Self {
        let environment = match env::var("APP_ENV").as_deref() {
            Ok("production") | Ok("prod") => Environment::Production,
            _ => Environment::Development,
        };

        Self {
            environment,
            http_port: env_parsed("PORT", 3000),
            database: DatabaseConfig {
                host: env_or("DB_HOST", "127.0.0.1"),
                port: env_parsed("DB_PORT", 5432),
                user: env_or("DB_USER", "postgres"),
                password: env_or("DB_PASS", ""),
                name: env_or("DB_NAME", "ella_rises"),
                max_connections: env_parsed("DB_MAX_CONNECTIONS", 10),
            },
            session: SessionConfig {
                secret: env_or("SESSION_SECRET", DEFAULT_SESSION_SECRET),
                ttl_hours: 24,
            },
            bootstrap_admin: BootstrapAdmin {
                email: env_or("ADMIN_EMAIL", "admin@test.com"),
                password: env_or("ADMIN_PASSWORD", "pass"),
            },
        }
    }

    /// Log a warning when the default session secret is still in place. In
    /// development that is expected; in production it means signed session
    /// cookies are forgeable.
    pub fn warn_if_insecure(&self) {
        if self.session.secret == DEFAULT_SESSION_SECRET {
            if self.environment.is_production() {
                tracing::warn!("SESSION_SECRET is unset in production; session cookies are not secure");
            } else {
                tracing::debug!("using default development session secret");
            }
        }
    }
}

fn env_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}

fn env_parsed<T: std::str::FromStr + Copy>(key: &str, default: T) -> T {
    env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn development_is_not_production() {
        assert!(!Environment::Development.is_production());
        assert!(Environment::Production.is_production());
    }

    #[test]
    fn env_parsed_falls_back_on_garbage() {
        std::env::set_var("ELLA_TEST_PORT_GARBAGE", "not-a-number");
        let port: u16 = env_parsed("ELLA_TEST_PORT_GARBAGE", 3000);
        assert_eq!(port, 3000);
    }

    #[test]
    fn env_parsed_reads_valid_values() {
        std::env::set_var("ELLA_TEST_PORT_VALID", "8080");
        let port: u16 = env_parsed("ELLA_TEST_PORT_VALID", 3000);
        assert_eq!(port, 8080);
    }
}
