//! RegisterUser - command handler for profile registration.

use std::sync::Arc;

use crate::domain::foundation::{DomainError, FirebaseUid};
use crate::domain::user::UserProfile;
use crate::ports::UserRepository;

/// Command to register (or re-register) the authenticated identity.
#[derive(Debug, Clone)]
pub struct RegisterUserCommand {
    pub uid: FirebaseUid,
    pub age: i32,
    pub gender: String,
}

/// Handler for user registration.
pub struct RegisterUserHandler {
    repository: Arc<dyn UserRepository>,
}

impl RegisterUserHandler {
    pub fn new(repository: Arc<dyn UserRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, cmd: RegisterUserCommand) -> Result<UserProfile, DomainError> {
        if !(0..=150).contains(&cmd.age) {
            return Err(DomainError::validation("age", "age must be between 0 and 150"));
        }
        self.repository
            .upsert(&cmd.uid, cmd.age, &cmd.gender)
            .await
    }
}
