//! SessionValidator port for bearer token verification.

use async_trait::async_trait;

use crate::domain::foundation::{AuthError, AuthenticatedUser};

/// Validates incoming bearer tokens.
///
/// The HTTP middleware depends only on this port; whether tokens come
/// from Firebase or a test double is an adapter concern.
///
/// # Contract
///
/// Implementations must:
/// - Return the attested identity for a valid, unexpired token
/// - Return `AuthError::TokenExpired` / `AuthError::InvalidToken` for bad
///   tokens
/// - Return `AuthError::ServiceUnavailable` for transient provider errors
#[async_trait]
pub trait SessionValidator: Send + Sync {
    /// Validate a raw bearer token (without the `Bearer ` prefix).
    async fn validate(&self, token: &str) -> Result<AuthenticatedUser, AuthError>;
}
