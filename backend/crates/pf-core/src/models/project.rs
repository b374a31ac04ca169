//! Project record - what the project store persists.

use crate::ProjectId;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A stored project. The description is the rendered text block, not
/// structured data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub id: ProjectId,
    pub name: String,
    pub description: String,
    pub created_at: DateTime<Utc>,
}

impl Project {
    pub fn new(name: String, description: String) -> Self {
        Self {
            id: ProjectId::new(),
            name,
            description,
            created_at: Utc::now(),
        }
    }
}
