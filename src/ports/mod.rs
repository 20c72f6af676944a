//! Ports: trait seams between the application core and the outside world.

mod metric_reader;
mod metric_repository;
mod predictor_client;
mod session_validator;
mod user_reader;
mod user_repository;

pub use metric_reader::MetricReader;
pub use metric_repository::MetricRepository;
pub use predictor_client::{PredictorClient, PredictorError};
pub use session_validator::SessionValidator;
pub use user_reader::UserReader;
pub use user_repository::UserRepository;
