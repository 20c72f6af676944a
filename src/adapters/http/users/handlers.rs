//! HTTP handlers for user endpoints.

use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::adapters::http::error::ErrorResponse;
use crate::adapters::http::middleware::RequireAuth;
use crate::application::handlers::users::{
    GetProfileHandler, GetProfileQuery, RegisterUserCommand, RegisterUserHandler,
};
use crate::domain::foundation::{DomainError, ErrorCode};

use super::dto::{RegisterUserRequest, UserProfileResponse};

#[derive(Clone)]
pub struct UserHandlers {
    register_handler: Arc<RegisterUserHandler>,
    get_handler: Arc<GetProfileHandler>,
}

impl UserHandlers {
    pub fn new(register_handler: Arc<RegisterUserHandler>, get_handler: Arc<GetProfileHandler>) -> Self {
        Self {
            register_handler,
            get_handler,
        }
    }
}

/// POST /api/users - Register or update the caller's profile.
pub async fn register_user(
    State(handlers): State<UserHandlers>,
    RequireAuth(user): RequireAuth,
    Json(req): Json<RegisterUserRequest>,
) -> Response {
    let cmd = RegisterUserCommand {
        uid: user.uid,
        age: req.age,
        gender: req.gender,
    };

    match handlers.register_handler.handle(cmd).await {
        Ok(profile) => {
            let response: UserProfileResponse = profile.into();
            (StatusCode::CREATED, Json(response)).into_response()
        }
        Err(e) => handle_user_error(e),
    }
}

/// GET /api/users/me - Fetch the caller's profile.
pub async fn get_me(
    State(handlers): State<UserHandlers>,
    RequireAuth(user): RequireAuth,
) -> Response {
    let query = GetProfileQuery {
        uid: user.uid.clone(),
    };

    match handlers.get_handler.handle(query).await {
        Ok(Some(profile)) => {
            let response: UserProfileResponse = profile.into();
            (StatusCode::OK, Json(response)).into_response()
        }
        Ok(None) => (
            StatusCode::NOT_FOUND,
            Json(ErrorResponse::not_found("User", user.uid.as_str())),
        )
            .into_response(),
        Err(e) => handle_user_error(e),
    }
}

fn handle_user_error(error: DomainError) -> Response {
    match error.code() {
        ErrorCode::ValidationFailed => (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse::bad_request(error.message())),
        )
            .into_response(),
        ErrorCode::UserNotFound => (
            StatusCode::NOT_FOUND,
            Json(ErrorResponse::not_found("User", "unknown")),
        )
            .into_response(),
        _ => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse::internal("An unexpected error occurred")),
        )
            .into_response(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_error_maps_to_400() {
        let error = DomainError::validation("age", "out of range");
        let response = handle_user_error(error);
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn not_found_maps_to_404() {
        let error = DomainError::new(ErrorCode::UserNotFound, "no such user");
        let response = handle_user_error(error);
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
