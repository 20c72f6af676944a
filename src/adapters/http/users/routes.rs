//! HTTP routes for user endpoints.

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers::{get_me, register_user, UserHandlers};

/// Creates the users router.
pub fn user_routes(handlers: UserHandlers) -> Router {
    Router::new()
        .route("/", post(register_user))
        .route("/me", get(get_me))
        .with_state(handlers)
}
