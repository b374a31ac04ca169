use pf_core::ProjectVariant;

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Instant;

use tracing::info_span;
use uuid::Uuid;

static SUBMISSION_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Correlation data for one submission
#[derive(Debug, Clone)]
pub struct SubmissionContext {
    pub submission_id: String,
    /// Sequence number within this process
    pub seq: u64,
    pub variant: ProjectVariant,
    pub started_at: Instant,
}

impl SubmissionContext {
    pub fn new(variant: ProjectVariant) -> Self {
        Self {
            submission_id: Uuid::new_v4().as_simple().to_string(),
            seq: SUBMISSION_COUNTER.fetch_add(1, Ordering::SeqCst),
            variant,
            started_at: Instant::now(),
        }
    }

    /// Saturates at `u64::MAX`
    pub fn elapsed_ms(&self) -> u64 {
        u64::try_from(self.started_at.elapsed().as_millis()).unwrap_or(u64::MAX)
    }

    pub fn log_prefix(&self) -> String {
        format!(
            "[sub={} variant={}]",
            &self.submission_id[..8.min(self.submission_id.len())],
            self.variant
        )
    }

    /// Span covering every log entry of the submission
    pub fn span(&self) -> tracing::Span {
        info_span!(
            "submission",
            submission_id = %self.submission_id,
            seq = self.seq,
            variant = %self.variant,
        )
    }
}
