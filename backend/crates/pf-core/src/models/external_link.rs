use crate::Identity;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One source URL cited by an external reference.
///
/// Links point at their project by name and are never updated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExternalLink {
    pub id: Uuid,
    pub url: String,
    pub project_name: String,
    pub owner_id: Identity,
    pub created_at: DateTime<Utc>,
}

impl ExternalLink {
    pub fn new(url: String, project_name: String, owner_id: Identity) -> Self {
        Self {
            id: Uuid::new_v4(),
            url,
            project_name,
            owner_id,
            created_at: Utc::now(),
        }
    }
}
