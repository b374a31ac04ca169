//! Validated project input, one shape per variant.

use crate::ProjectVariant;

use chrono::NaiveDate;
use serde::Serialize;

/// Fields shared by both variants.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectDetails {
    pub name: String,
    pub month: Option<NaiveDate>,
    pub year: Option<i32>,
    pub duration: Option<String>,
    pub field: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PersonalProject {
    pub details: ProjectDetails,
    pub co_authors: Option<String>,
    /// Inlined into the description as free text
    pub external_links: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExternalReference {
    pub details: ProjectDetails,
    pub authors: Option<String>,
    /// Never empty; split into one link record per URL
    pub external_links: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "variant", rename_all = "snake_case")]
pub enum ProjectInput {
    Personal(PersonalProject),
    External(ExternalReference),
}

impl ProjectInput {
    pub fn variant(&self) -> ProjectVariant {
        match self {
            Self::Personal(_) => ProjectVariant::Personal,
            Self::External(_) => ProjectVariant::External,
        }
    }

    pub fn details(&self) -> &ProjectDetails {
        match self {
            Self::Personal(p) => &p.details,
            Self::External(e) => &e.details,
        }
    }

    pub fn name(&self) -> &str {
        &self.details().name
    }
}
