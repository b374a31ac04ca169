use pf_submit::SubmissionError;

use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
pub const DATABASE_ERROR: &str = "DATABASE_ERROR";
pub const LOGGER_ERROR: &str = "LOGGER_ERROR";
pub const OUTPUT_ERROR: &str = "OUTPUT_ERROR";

#[derive(Error, Debug)]
pub enum CliError {
    #[error("Config error: {0}")]
    Config(#[from] pf_config::ConfigError),

    #[error("Database error: {0}")]
    Database(#[from] pf_db::DbError),

    #[error(transparent)]
    Submission(#[from] SubmissionError),

    #[error("Logger error: {message} {location}")]
    Logger {
        message: String,
        location: ErrorLocation,
    },

    #[error("Output error: {message} {location}")]
    Output {
        message: String,
        location: ErrorLocation,
        #[source]
        source: serde_json::Error,
    },
}

impl CliError {
    #[track_caller]
    pub fn logger<S: Into<String>>(message: S) -> Self {
        CliError::Logger {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Stable code reported in the JSON error body.
    pub fn error_code(&self) -> &'static str {
        match self {
            CliError::Config(_) => CONFIG_ERROR,
            CliError::Database(_) => DATABASE_ERROR,
            CliError::Submission(e) => e.error_code(),
            CliError::Logger { .. } => LOGGER_ERROR,
            CliError::Output { .. } => OUTPUT_ERROR,
        }
    }
}

impl From<serde_json::Error> for CliError {
    #[track_caller]
    fn from(err: serde_json::Error) -> Self {
        CliError::Output {
            message: err.to_string(),
            location: ErrorLocation::from(Location::caller()),
            source: err,
        }
    }
}

pub type Result<T> = std::result::Result<T, CliError>;
