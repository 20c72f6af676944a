//! DTOs for user endpoints.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::user::UserProfile;

/// Request body for registering the authenticated identity.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterUserRequest {
    pub age: i32,
    pub gender: String,
}

/// Response body for a user profile.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfileResponse {
    pub id: i64,
    pub firebase_uid: String,
    pub age: i32,
    pub gender: String,
    pub created_at: DateTime<Utc>,
}

impl From<UserProfile> for UserProfileResponse {
    fn from(profile: UserProfile) -> Self {
        Self {
            id: profile.id().as_i64(),
            firebase_uid: profile.firebase_uid().to_string(),
            age: profile.age(),
            gender: profile.gender().to_string(),
            created_at: profile.created_at(),
        }
    }
}
