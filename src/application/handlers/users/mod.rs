//! User profile handlers.

mod get_profile;
mod register_user;

pub use get_profile::{GetProfileHandler, GetProfileQuery};
pub use register_user::{RegisterUserCommand, RegisterUserHandler};
