use pf_core::{FieldErrors, ProjectId};
use pf_db::DbError;

use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

/// Input validation failed
pub const VALIDATION_ERROR: &str = "VALIDATION_ERROR";

/// The project record could not be written
pub const PROJECT_CREATION_FAILED: &str = "PROJECT_CREATION_FAILED";

/// No signed-in user to own the external links
pub const UNAUTHORIZED: &str = "UNAUTHORIZED";

/// Failure reported by a backing store. The orchestrator treats every
/// variant the same way.
#[derive(Error, Debug)]
pub enum GatewayError {
    #[error("Store unavailable: {message} {location}")]
    Unavailable {
        message: String,
        location: ErrorLocation,
    },

    #[error("Store rejected write: {message} {location}")]
    Rejected {
        message: String,
        location: ErrorLocation,
    },

    #[error("Database error: {source} {location}")]
    Database {
        #[source]
        source: DbError,
        location: ErrorLocation,
    },
}

impl GatewayError {
    #[track_caller]
    pub fn unavailable<S: Into<String>>(message: S) -> Self {
        Self::Unavailable {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn rejected<S: Into<String>>(message: S) -> Self {
        Self::Rejected {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<DbError> for GatewayError {
    #[track_caller]
    fn from(source: DbError) -> Self {
        Self::Database {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type GatewayResult<T> = std::result::Result<T, GatewayError>;

#[derive(Error, Debug)]
pub enum SubmissionError {
    #[error("Validation failed: {errors}")]
    Validation { errors: FieldErrors },

    #[error("Project creation failed: {source} {location}")]
    ProjectCreation {
        #[source]
        source: GatewayError,
        location: ErrorLocation,
    },

    /// The project exists but has no links; it is not rolled back.
    #[error("Unauthorized: no signed-in user to own links of project {project_id} {location}")]
    Unauthorized {
        project_id: ProjectId,
        location: ErrorLocation,
    },
}

impl SubmissionError {
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Validation { .. } => VALIDATION_ERROR,
            Self::ProjectCreation { .. } => PROJECT_CREATION_FAILED,
            Self::Unauthorized { .. } => UNAUTHORIZED,
        }
    }

    pub fn field_errors(&self) -> Option<&FieldErrors> {
        match self {
            Self::Validation { errors } => Some(errors),
            _ => None,
        }
    }
}

impl From<FieldErrors> for SubmissionError {
    fn from(errors: FieldErrors) -> Self {
        Self::Validation { errors }
    }
}

pub type Result<T> = std::result::Result<T, SubmissionError>;
