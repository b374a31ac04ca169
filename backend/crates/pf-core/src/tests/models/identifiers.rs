use crate::{Identity, Project, ProjectId};

use std::str::FromStr;

use uuid::Uuid;

#[test]
fn test_identity_round_trips_through_display() {
    let user_id = Uuid::new_v4();
    let identity = Identity::new(user_id);

    let parsed = Identity::from_str(&identity.to_string()).unwrap();

    assert_eq!(parsed, identity);
    assert_eq!(parsed.as_uuid(), user_id);
}

#[test]
fn test_identity_rejects_garbage() {
    assert!(Identity::from_str("someone").is_err());
}

#[test]
fn test_project_ids_are_unique() {
    assert_ne!(ProjectId::new(), ProjectId::new());
}

#[test]
fn test_project_new() {
    let project = Project::new("Poster".to_string(), "Field: Print".to_string());

    assert_eq!(project.name, "Poster");
    assert_eq!(project.description, "Field: Print");
    assert_eq!(
        ProjectId::from_str(&project.id.to_string()).unwrap(),
        project.id
    );
}
