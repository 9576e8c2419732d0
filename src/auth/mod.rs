//! Credential verification.

use sha2::{Digest, Sha256};

use crate::database::repositories::UserRepository;
use crate::session::{Role, SessionUser};
use crate::state::AppState;

/// Hex SHA-256 digest, the format stored in the users table.
pub fn hash_password(password: &str) -> String {
    format!("{:x}", Sha256::digest(password.as_bytes()))
}

pub fn verify_password(password: &str, stored_digest: &str) -> bool {
    hash_password(password) == stored_digest
}

/// Resolve a submitted email/password pair to a session user.
///
/// The bootstrap admin from config is checked first so a fresh deployment is
/// reachable before any users exist. After that, a normal lookup against the
/// users table with a digest comparison. A failed lookup (for example the
/// database being down) is logged and treated as a failed login rather than
/// surfacing a 500 from the login form.
pub async fn authenticate(state: &AppState, email: &str, password: &str) -> Option<SessionUser> {
    let admin = &state.config.bootstrap_admin;
    if email == admin.email && password == admin.password {
        return Some(SessionUser {
            id: 1,
            email: email.to_string(),
            role: Role::Manager,
        });
    }

    let users = UserRepository::new(state.pool.clone());
    match users.find_by_email(email).await {
        Ok(Some(user)) if verify_password(password, &user.password) => Some(SessionUser {
            id: user.id,
            email: user.email,
            role: Role::from_db(&user.role),
        }),
        Ok(_) => None,
        Err(e) => {
            tracing::error!("user lookup failed during login: {}", e);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digest_matches_known_vector() {
        assert_eq!(
            hash_password("pass"),
            "d74ff0ee8da3b9806b18c877dbf29bbde50b5bd8e4dad7a3a725000feb82e8f1"
        );
    }

    #[test]
    fn verify_accepts_the_right_password_only() {
        let digest = hash_password("correct horse");
        assert!(verify_password("correct horse", &digest));
        assert!(!verify_password("battery staple", &digest));
    }

    #[test]
    fn digest_is_not_the_plaintext() {
        assert_ne!(hash_password("pass"), "pass");
    }
}
