pub mod description;
pub mod error;
pub mod links;
pub mod models;
pub mod validator;

#[cfg(test)]
mod tests;

pub use description::serialize_description;
pub use error::{CoreError, FieldErrors, Result};
pub use links::candidate_urls;
pub use models::external_link::ExternalLink;
pub use models::identity::Identity;
pub use models::project::Project;
pub use models::project_id::ProjectId;
pub use models::project_input::{ExternalReference, PersonalProject, ProjectDetails, ProjectInput};
pub use models::project_variant::ProjectVariant;
pub use models::raw_project_form::RawProjectForm;
pub use validator::{MAX_YEAR, MIN_YEAR, ProjectValidator};
