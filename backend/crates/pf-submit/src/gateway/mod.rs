//! Boundary to the stores that own project and link records.

pub mod sqlite;

use crate::GatewayResult;

use pf_core::{Identity, ProjectId};

use async_trait::async_trait;

#[async_trait]
pub trait ProjectStore: Send + Sync {
    async fn create_project(&self, name: &str, description: &str) -> GatewayResult<ProjectId>;
}

#[async_trait]
pub trait LinkStore: Send + Sync {
    /// Signed-in user of the current session. Never fails; `None` means
    /// anonymous.
    async fn current_identity(&self) -> Option<Identity>;

    async fn create_link(&self, url: &str, project_name: &str, owner: Identity)
    -> GatewayResult<()>;
}
