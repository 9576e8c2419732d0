use axum::extract::FromRef;
use axum_extra::extract::cookie::Key;
use sha2::{Digest, Sha512};
use sqlx::PgPool;
use std::sync::Arc;

use crate::config::AppConfig;
use crate::session::SessionStore;

/// Everything the route handlers share: configuration, the connection pool
/// and the session store. Constructed once in `main` and passed down, never
/// reached through a global.
pub struct AppState {
    pub config: AppConfig,
    pub pool: PgPool,
    pub sessions: SessionStore,
    cookie_key: Key,
}

impl AppState {
    pub fn new(config: AppConfig) -> Self {
        let pool = crate::database::connect_lazy(&config.database);
        let sessions = SessionStore::new(pool.clone(), config.session.ttl_hours);
        let cookie_key = derive_cookie_key(&config.session.secret);
        Self {
            config,
            pool,
            sessions,
            cookie_key,
        }
    }
}

/// Stretch the configured secret into the 64 bytes of key material the cookie
/// crate requires, whatever length the operator picked.
fn derive_cookie_key(secret: &str) -> Key {
    let digest = Sha512::digest(secret.as_bytes());
    Key::from(digest.as_slice())
}

/// Local key marker for `SignedCookieJar`; the orphan rule forbids
/// implementing `FromRef<Arc<AppState>>` for the foreign `Key` directly.
pub struct CookieKey(Key);

impl FromRef<Arc<AppState>> for CookieKey {
    fn from_ref(state: &Arc<AppState>) -> Self {
        CookieKey(state.cookie_key.clone())
    }
}

impl From<CookieKey> for Key {
    fn from(key: CookieKey) -> Key {
        key.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cookie_key_derivation_is_deterministic() {
        let a = derive_cookie_key("secret-change-this");
        let b = derive_cookie_key("secret-change-this");
        assert_eq!(a.master(), b.master());
    }

    #[test]
    fn different_secrets_give_different_keys() {
        let a = derive_cookie_key("one");
        let b = derive_cookie_key("two");
        assert_ne!(a.master(), b.master());
    }
}
