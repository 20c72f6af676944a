//! Authentication configuration

use serde::Deserialize;

use super::error::ValidationError;

/// Firebase authentication configuration
#[derive(Debug, Clone, Deserialize, Default)]
pub struct AuthConfig {
    /// Firebase project identifier, used as token audience and issuer suffix
    #[serde(default)]
    pub project_id: String,

    /// How long fetched signing keys stay cached, in seconds
    #[serde(default = "default_jwks_cache_secs")]
    pub jwks_cache_secs: u64,
}

impl AuthConfig {
    /// Validate authentication configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.project_id.is_empty() {
            return Err(ValidationError::MissingRequired("auth.project_id"));
        }
        Ok(())
    }
}

fn default_jwks_cache_secs() -> u64 {
    3600
}
