use crate::{CliError, Result as CliErrorResult};

use pf_core::Project;
use pf_submit::SubmissionError;

use serde::Serialize;
use serde_json::{Value, json};

/// A stored project as `pf list` prints it.
#[derive(Debug, Serialize)]
pub(crate) struct ProjectListing {
    #[serde(flatten)]
    pub project: Project,
    pub links: Vec<String>,
}

pub fn render(value: &Value, pretty: bool) -> CliErrorResult<String> {
    let json = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };

    Ok(json)
}

/// JSON body printed when a command fails.
///
/// Validation failures carry the per-field messages instead of a single
/// message string.
pub fn error_body(error: &CliError) -> Value {
    match error {
        CliError::Submission(SubmissionError::Validation { errors }) => json!({
            "error": {
                "code": error.error_code(),
                "fields": errors,
            }
        }),
        CliError::Submission(SubmissionError::Unauthorized { project_id, .. }) => json!({
            "error": {
                "code": error.error_code(),
                "message": error.to_string(),
                "project_id": project_id,
            }
        }),
        _ => json!({
            "error": {
                "code": error.error_code(),
                "message": error.to_string(),
            }
        }),
    }
}
