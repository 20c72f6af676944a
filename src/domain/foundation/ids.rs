//! Identifier types shared across the domain.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::errors::ValidationError;

/// Surrogate key for a user profile row.
///
/// Assigned by the relational store at registration; opaque to clients,
/// who only ever see their Firebase UID.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(i64);

impl UserId {
    pub fn new(id: i64) -> Self {
        Self(id)
    }

    pub fn as_i64(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Stable external identity issued by Firebase.
///
/// This is the join key between bearer tokens and local user profiles.
/// Never empty; otherwise opaque.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FirebaseUid(String);

impl FirebaseUid {
    /// Creates a UID, rejecting empty or whitespace-only values.
    pub fn new(uid: impl Into<String>) -> Result<Self, ValidationError> {
        let uid = uid.into();
        if uid.trim().is_empty() {
            return Err(ValidationError::empty_field("firebase_uid"));
        }
        Ok(Self(uid))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for FirebaseUid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_id_round_trips() {
        let id = UserId::new(42);
        assert_eq!(id.as_i64(), 42);
        assert_eq!(id.to_string(), "42");
    }

    #[test]
    fn firebase_uid_accepts_opaque_strings() {
        let uid = FirebaseUid::new("fb-abc123").unwrap();
        assert_eq!(uid.as_str(), "fb-abc123");
    }

    #[test]
    fn firebase_uid_rejects_empty() {
        assert!(FirebaseUid::new("").is_err());
        assert!(FirebaseUid::new("   ").is_err());
    }

    #[test]
    fn user_id_serializes_transparently() {
        let json = serde_json::to_string(&UserId::new(7)).unwrap();
        assert_eq!(json, "7");
    }
}
