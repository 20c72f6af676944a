//! Authentication adapters.

mod firebase;
mod mock;

pub use firebase::{FirebaseConfig, FirebaseSessionValidator};
pub use mock::MockSessionValidator;
