use crate::tests::raw_form;
use crate::{ProjectValidator, ProjectVariant};

use googletest::prelude::*;

#[test]
fn given_external_input_when_serialized_then_tagged_with_variant() {
    // Given
    let mut raw = raw_form("Atlas", "Cartography");
    raw.external_links = Some("https://a.com".to_string());
    let input = ProjectValidator::default()
        .validate(ProjectVariant::External, &raw)
        .unwrap();

    // When
    let json = serde_json::to_value(&input).unwrap();

    // Then
    assert_that!(json["variant"].as_str(), some(eq("external")));
    assert_that!(json["details"]["name"].as_str(), some(eq("Atlas")));
    assert_that!(json["external_links"].as_str(), some(eq("https://a.com")));
}

#[test]
fn given_validated_input_when_accessors_used_then_reflect_variant() {
    let personal = ProjectValidator::default()
        .validate(ProjectVariant::Personal, &raw_form("Poster", "Print"))
        .unwrap();

    assert_that!(personal.variant(), eq(ProjectVariant::Personal));
    assert_that!(personal.name(), eq("Poster"));
    assert_that!(personal.details().field.as_str(), eq("Print"));
}
