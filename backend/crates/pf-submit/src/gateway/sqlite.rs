use crate::{GatewayResult, LinkStore, ProjectStore};

use pf_core::{ExternalLink, Identity, Project, ProjectId};
use pf_db::{ExternalLinkRepository, ProjectRepository};

use async_trait::async_trait;
use sqlx::SqlitePool;

pub struct SqliteProjectStore {
    repo: ProjectRepository,
}

impl SqliteProjectStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            repo: ProjectRepository::new(pool),
        }
    }
}

#[async_trait]
impl ProjectStore for SqliteProjectStore {
    async fn create_project(&self, name: &str, description: &str) -> GatewayResult<ProjectId> {
        let project = Project::new(name.to_string(), description.to_string());
        self.repo.create(&project).await?;
        Ok(project.id)
    }
}

/// Link store backed by SQLite, with the session user fixed at startup.
pub struct SqliteLinkStore {
    repo: ExternalLinkRepository,
    session: Option<Identity>,
}

impl SqliteLinkStore {
    pub fn new(pool: SqlitePool, session: Option<Identity>) -> Self {
        Self {
            repo: ExternalLinkRepository::new(pool),
            session,
        }
    }
}

#[async_trait]
impl LinkStore for SqliteLinkStore {
    async fn current_identity(&self) -> Option<Identity> {
        self.session
    }

    async fn create_link(
        &self,
        url: &str,
        project_name: &str,
        owner: Identity,
    ) -> GatewayResult<()> {
        let link = ExternalLink::new(url.to_string(), project_name.to_string(), owner);
        self.repo.create(&link).await?;
        Ok(())
    }
}
