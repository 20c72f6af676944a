//! GetProfile - query handler for the authenticated user's profile.

use std::sync::Arc;

use crate::domain::foundation::{DomainError, FirebaseUid};
use crate::domain::user::UserProfile;
use crate::ports::UserReader;

/// Query for the caller's own profile.
#[derive(Debug, Clone)]
pub struct GetProfileQuery {
    pub uid: FirebaseUid,
}

/// Handler for profile lookup.
pub struct GetProfileHandler {
    reader: Arc<dyn UserReader>,
}

impl GetProfileHandler {
    pub fn new(reader: Arc<dyn UserReader>) -> Self {
        Self { reader }
    }

    pub async fn handle(&self, query: GetProfileQuery) -> Result<Option<UserProfile>, DomainError> {
        self.reader.find_by_external_id(&query.uid).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::UserId;
    use async_trait::async_trait;
    use chrono::Utc;

    struct StubReader {
        profile: Option<UserProfile>,
    }

    #[async_trait]
    impl UserReader for StubReader {
        async fn find_by_external_id(
            &self,
            _uid: &FirebaseUid,
        ) -> Result<Option<UserProfile>, DomainError> {
            Ok(self.profile.clone())
        }
    }

    #[tokio::test]
    async fn returns_profile_when_registered() {
        let profile = UserProfile::new(
            UserId::new(2),
            FirebaseUid::new("fb-2").unwrap(),
            25,
            "male",
            Utc::now(),
        )
        .unwrap();
        let handler = GetProfileHandler::new(Arc::new(StubReader {
            profile: Some(profile),
        }));

        let result = handler
            .handle(GetProfileQuery {
                uid: FirebaseUid::new("fb-2").unwrap(),
            })
            .await
            .unwrap();
        assert!(result.is_some());
    }

    #[tokio::test]
    async fn returns_none_when_unregistered() {
        let handler = GetProfileHandler::new(Arc::new(StubReader { profile: None }));

        let result = handler
            .handle(GetProfileQuery {
                uid: FirebaseUid::new("fb-404").unwrap(),
            })
            .await
            .unwrap();
        assert!(result.is_none());
    }
}
