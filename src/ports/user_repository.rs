//! UserRepository port for profile registration.

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, FirebaseUid};
use crate::domain::user::UserProfile;

/// Write operations for user profiles.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Create the profile for a new external identity, or update the
    /// demographic fields if the identity is already registered.
    ///
    /// Returns the stored profile with its surrogate id populated.
    async fn upsert(
        &self,
        uid: &FirebaseUid,
        age: i32,
        gender: &str,
    ) -> Result<UserProfile, DomainError>;
}
