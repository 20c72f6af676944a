//! User profile entity.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::foundation::{FirebaseUid, UserId, ValidationError};

/// A registered user of the companion app.
///
/// Created once at registration and read-only on the inference path.
/// Every metric sample and every inference request is attributable to
/// exactly one profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    id: UserId,
    firebase_uid: FirebaseUid,
    age: i32,
    gender: String,
    created_at: DateTime<Utc>,
}

impl UserProfile {
    /// Reconstitutes a profile from stored fields.
    pub fn new(
        id: UserId,
        firebase_uid: FirebaseUid,
        age: i32,
        gender: impl Into<String>,
        created_at: DateTime<Utc>,
    ) -> Result<Self, ValidationError> {
        if !(0..=150).contains(&age) {
            return Err(ValidationError::out_of_range("age", 0, 150, age));
        }
        Ok(Self {
            id,
            firebase_uid,
            age,
            gender: gender.into(),
            created_at,
        })
    }

    pub fn id(&self) -> UserId {
        self.id
    }

    pub fn firebase_uid(&self) -> &FirebaseUid {
        &self.firebase_uid
    }

    pub fn age(&self) -> i32 {
        self.age
    }

    pub fn gender(&self) -> &str {
        &self.gender
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Numeric gender encoding used by the feature vector: 1 iff the
    /// stored value equals "male" ignoring case, 0 for everything else
    /// (including empty).
    pub fn encoded_gender(&self) -> i64 {
        if self.gender.eq_ignore_ascii_case("male") {
            1
        } else {
            0
        }
    }
}
