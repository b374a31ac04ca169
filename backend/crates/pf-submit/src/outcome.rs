use pf_core::ProjectId;

use serde::Serialize;

/// Terminal result of a submission that wrote a project record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum SubmissionOutcome {
    /// Project and every candidate link were written
    Created {
        project_id: ProjectId,
        links: Vec<String>,
    },
    /// Project written, some link writes failed
    PartiallyCreated {
        project_id: ProjectId,
        links: Vec<String>,
        failed_urls: Vec<String>,
    },
}

impl SubmissionOutcome {
    pub fn project_id(&self) -> ProjectId {
        match self {
            Self::Created { project_id, .. } | Self::PartiallyCreated { project_id, .. } => {
                *project_id
            }
        }
    }

    pub fn failed_urls(&self) -> &[String] {
        match self {
            Self::Created { .. } => &[],
            Self::PartiallyCreated { failed_urls, .. } => failed_urls,
        }
    }

    pub fn is_complete(&self) -> bool {
        matches!(self, Self::Created { .. })
    }
}
