//! Drives the writes of one validated submission.
//!
//! Personal: create the project, done.
//! External: create the project, resolve the session identity, then one
//! link write per candidate URL. A failed link write is recorded and the
//! remaining URLs are still attempted. Nothing is retried or rolled back.

use crate::{
    LinkStore, ProjectStore, Result as SubmissionResult, SubmissionContext, SubmissionError,
    SubmissionOutcome, log_submission_entry, log_submission_exit,
};

use pf_core::{Identity, ProjectId, ProjectInput, candidate_urls, serialize_description};

use std::panic::Location;
use std::sync::Arc;

use error_location::ErrorLocation;
use futures::stream::{self, StreamExt};
use log::{debug, warn};
use tracing::Instrument;

#[derive(Clone)]
pub struct SubmissionOrchestrator {
    projects: Arc<dyn ProjectStore>,
    links: Arc<dyn LinkStore>,
}

/// Running tally of link writes
#[derive(Debug, Default)]
struct LinkTally {
    created: Vec<String>,
    failed: Vec<String>,
}

impl LinkTally {
    fn into_outcome(self, project_id: ProjectId) -> SubmissionOutcome {
        if self.failed.is_empty() {
            SubmissionOutcome::Created {
                project_id,
                links: self.created,
            }
        } else {
            SubmissionOutcome::PartiallyCreated {
                project_id,
                links: self.created,
                failed_urls: self.failed,
            }
        }
    }
}

impl SubmissionOrchestrator {
    pub fn new(projects: Arc<dyn ProjectStore>, links: Arc<dyn LinkStore>) -> Self {
        Self { projects, links }
    }

    pub async fn submit(&self, input: &ProjectInput) -> SubmissionResult<SubmissionOutcome> {
        let ctx = SubmissionContext::new(input.variant());
        let span = ctx.span();

        async {
            log_submission_entry!(ctx, input.name());
            let result = self.run(&ctx, input).await;
            log_submission_exit!(ctx, result);
            result
        }
        .instrument(span)
        .await
    }

    async fn run(
        &self,
        ctx: &SubmissionContext,
        input: &ProjectInput,
    ) -> SubmissionResult<SubmissionOutcome> {
        let description = serialize_description(input);
        let project_id = self
            .create_project(ctx, input.name(), &description)
            .await?;

        match input {
            ProjectInput::Personal(_) => Ok(SubmissionOutcome::Created {
                project_id,
                links: Vec::new(),
            }),
            ProjectInput::External(external) => {
                let identity = self.links.current_identity().await;
                self.create_links(
                    ctx,
                    project_id,
                    &external.details.name,
                    &external.external_links,
                    identity,
                )
                .await
            }
        }
    }

    async fn create_project(
        &self,
        ctx: &SubmissionContext,
        name: &str,
        description: &str,
    ) -> SubmissionResult<ProjectId> {
        debug!("{} Starting create_project", ctx.log_prefix());

        match self.projects.create_project(name, description).await {
            Ok(project_id) => {
                debug!("{} Created project {}", ctx.log_prefix(), project_id);
                Ok(project_id)
            }
            Err(source) => {
                warn!("{} create_project failed: {}", ctx.log_prefix(), source);
                Err(SubmissionError::ProjectCreation {
                    source,
                    location: ErrorLocation::from(Location::caller()),
                })
            }
        }
    }

    /// Write one link per candidate URL on behalf of `identity`.
    ///
    /// Without an identity no link is written and the already-created
    /// project is left in place.
    async fn create_links(
        &self,
        ctx: &SubmissionContext,
        project_id: ProjectId,
        project_name: &str,
        raw_links: &str,
        identity: Option<Identity>,
    ) -> SubmissionResult<SubmissionOutcome> {
        let Some(owner) = identity else {
            warn!(
                "{} No signed-in user; project {} kept without links",
                ctx.log_prefix(),
                project_id
            );
            return Err(SubmissionError::Unauthorized {
                project_id,
                location: ErrorLocation::from(Location::caller()),
            });
        };

        let candidates = candidate_urls(raw_links);
        debug!(
            "{} Creating {} link(s) for '{}'",
            ctx.log_prefix(),
            candidates.len(),
            project_name
        );

        let links = self.links.as_ref();
        let tally = stream::iter(candidates)
            .fold(LinkTally::default(), |mut tally, url| async move {
                match links.create_link(&url, project_name, owner).await {
                    Ok(()) => tally.created.push(url),
                    Err(e) => {
                        warn!("{} create_link {} failed: {}", ctx.log_prefix(), url, e);
                        tally.failed.push(url);
                    }
                }
                tally
            })
            .await;

        Ok(tally.into_outcome(project_id))
    }
}
