use crate::{CoreError, Result as CoreErrorResult};

use std::panic::Location;
use std::str::FromStr;

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

/// Which kind of project a submission creates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProjectVariant {
    /// Self-authored work
    Personal,
    /// Reference to work published elsewhere
    External,
}

impl ProjectVariant {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Personal => "personal",
            Self::External => "external",
        }
    }
}

impl FromStr for ProjectVariant {
    type Err = CoreError;

    #[track_caller]
    fn from_str(s: &str) -> CoreErrorResult<Self> {
        match s {
            "personal" => Ok(Self::Personal),
            "external" => Ok(Self::External),
            _ => Err(CoreError::InvalidVariant {
                value: s.to_string(),
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }
}

impl std::fmt::Display for ProjectVariant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
