use crate::{Result as SubmissionResult, SubmissionError, SubmissionOrchestrator, SubmissionOutcome};

use pf_core::{ProjectValidator, ProjectVariant, RawProjectForm};

use log::debug;

/// Entry points for callers holding raw form values.
///
/// Validation runs to completion before any store is touched.
pub struct ProjectSubmitter {
    validator: ProjectValidator,
    orchestrator: SubmissionOrchestrator,
}

impl ProjectSubmitter {
    pub fn new(validator: ProjectValidator, orchestrator: SubmissionOrchestrator) -> Self {
        Self {
            validator,
            orchestrator,
        }
    }

    pub async fn submit_personal(
        &self,
        raw: &RawProjectForm,
    ) -> SubmissionResult<SubmissionOutcome> {
        self.submit(ProjectVariant::Personal, raw).await
    }

    pub async fn submit_external(
        &self,
        raw: &RawProjectForm,
    ) -> SubmissionResult<SubmissionOutcome> {
        self.submit(ProjectVariant::External, raw).await
    }

    pub async fn submit(
        &self,
        variant: ProjectVariant,
        raw: &RawProjectForm,
    ) -> SubmissionResult<SubmissionOutcome> {
        let input = self.validator.validate(variant, raw).map_err(|errors| {
            debug!("Rejected {} form: {}", variant, errors);
            SubmissionError::from(errors)
        })?;

        self.orchestrator.submit(&input).await
    }
}
