//! Authentication types shared between the auth adapter and HTTP layer.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::ids::FirebaseUid;

/// A user whose bearer token has been verified.
///
/// Carries only what the identity provider attests to; the local profile
/// (age, gender) lives in the relational store and is looked up separately.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthenticatedUser {
    /// Stable Firebase UID (the `sub` claim).
    pub uid: FirebaseUid,
    /// Email, if the token carries one.
    pub email: Option<String>,
}

impl AuthenticatedUser {
    pub fn new(uid: FirebaseUid, email: Option<String>) -> Self {
        Self { uid, email }
    }
}

/// Errors from bearer token verification.
#[derive(Debug, Clone, Error)]
pub enum AuthError {
    /// Token signature, structure, or claims are invalid.
    #[error("invalid token")]
    InvalidToken,

    /// Token is structurally valid but expired.
    #[error("token expired")]
    TokenExpired,

    /// Token is missing a claim we require (e.g. `sub`).
    #[error("missing claim: {0}")]
    MissingClaim(String),

    /// The identity provider could not be reached.
    #[error("auth service unavailable: {0}")]
    ServiceUnavailable(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn authenticated_user_holds_uid_and_email() {
        let user = AuthenticatedUser::new(
            FirebaseUid::new("fb-1").unwrap(),
            Some("a@example.com".to_string()),
        );
        assert_eq!(user.uid.as_str(), "fb-1");
        assert_eq!(user.email.as_deref(), Some("a@example.com"));
    }

    #[test]
    fn auth_error_displays() {
        assert_eq!(AuthError::InvalidToken.to_string(), "invalid token");
        assert_eq!(
            AuthError::MissingClaim("sub".to_string()).to_string(),
            "missing claim: sub"
        );
    }
}
