use pf_core::{ExternalLink, Identity, Project};

pub fn create_test_project(name: &str) -> Project {
    Project::new(name.to_string(), "Field: Print\nYear: 2022".to_string())
}

pub fn create_test_link(url: &str, project_name: &str, owner: Identity) -> ExternalLink {
    ExternalLink::new(url.to_string(), project_name.to_string(), owner)
}
