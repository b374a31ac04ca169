use crate::{ConfigError, ConfigErrorResult};

use serde::Deserialize;
use uuid::Uuid;

/// Session settings for the local link store.
///
/// `user_id` is the identity reported as the signed-in user. When it is
/// absent the session is anonymous and external references cannot get
/// their links recorded.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AuthConfig {
    pub user_id: Option<String>,
}

impl AuthConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if let Some(ref user_id) = self.user_id {
            Uuid::parse_str(user_id).map_err(|e| {
                ConfigError::auth(format!("auth.user_id must be a UUID, got '{user_id}': {e}"))
            })?;
        }

        Ok(())
    }

    /// Parsed session user, if one is configured and well formed.
    pub fn session_user(&self) -> Option<Uuid> {
        self.user_id
            .as_deref()
            .and_then(|id| Uuid::parse_str(id).ok())
    }
}
