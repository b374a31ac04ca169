pub mod error;
pub mod gateway;
pub mod orchestrator;
pub mod outcome;
pub mod submission_context;
pub mod submission_logging;
pub mod submitter;


pub use error::{
    GatewayError, GatewayResult, PROJECT_CREATION_FAILED, Result, SubmissionError, UNAUTHORIZED,
    VALIDATION_ERROR,
};
pub use gateway::sqlite::{SqliteLinkStore, SqliteProjectStore};
pub use gateway::{LinkStore, ProjectStore};
pub use orchestrator::SubmissionOrchestrator;
pub use outcome::SubmissionOutcome;
pub use submission_context::SubmissionContext;
pub use submitter::ProjectSubmitter;
