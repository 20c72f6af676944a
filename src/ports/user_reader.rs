//! UserReader port for profile lookup.

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, FirebaseUid};
use crate::domain::user::UserProfile;

/// Query operations for user profiles.
///
/// # Contract
///
/// Implementations must:
/// - Return `Ok(Some(profile))` when the external identity is registered
/// - Return `Ok(None)` when no profile matches the UID
/// - Return `Err` only for infrastructure failures
#[async_trait]
pub trait UserReader: Send + Sync {
    /// Resolve an external identity to the local profile.
    async fn find_by_external_id(
        &self,
        uid: &FirebaseUid,
    ) -> Result<Option<UserProfile>, DomainError>;
}
