use crate::ProjectVariant;

use std::str::FromStr;

#[test]
fn test_project_variant_as_str() {
    assert_eq!(ProjectVariant::Personal.as_str(), "personal");
    assert_eq!(ProjectVariant::External.as_str(), "external");
}

#[test]
fn test_project_variant_from_str() {
    assert_eq!(
        ProjectVariant::from_str("personal").unwrap(),
        ProjectVariant::Personal
    );
    assert_eq!(
        ProjectVariant::from_str("external").unwrap(),
        ProjectVariant::External
    );
    assert!(ProjectVariant::from_str("Personal").is_err());
    assert!(ProjectVariant::from_str("").is_err());
}

#[test]
fn test_project_variant_serializes_snake_case() {
    let json = serde_json::to_string(&ProjectVariant::External).unwrap();
    assert_eq!(json, "\"external\"");
}
