use crate::tests::raw_form;
use crate::{ProjectInput, ProjectValidator, ProjectVariant, RawProjectForm};

use chrono::NaiveDate;
use googletest::prelude::*;
use pf_config::ValidationConfig;

// =========================================================================
// Required fields
// =========================================================================

#[test]
fn given_empty_name_when_validated_then_name_error() {
    let result = ProjectValidator::default().validate(ProjectVariant::Personal, &raw_form("", "Print"));

    let errors = result.unwrap_err();
    assert_that!(errors.get("name"), some(eq("Name is required")));
    assert_that!(errors.len(), eq(1));
}

#[test]
fn given_whitespace_field_when_validated_then_field_error() {
    let result =
        ProjectValidator::default().validate(ProjectVariant::Personal, &raw_form("Poster", "   "));

    let errors = result.unwrap_err();
    assert_that!(errors.get("field"), some(eq("Field is required")));
}

#[test]
fn given_several_problems_when_validated_then_all_reported() {
    let raw = RawProjectForm {
        year: Some("1850".to_string()),
        month: Some("March".to_string()),
        ..raw_form("", "")
    };

    let errors = ProjectValidator::default()
        .validate(ProjectVariant::External, &raw)
        .unwrap_err();

    assert_that!(errors.contains("name"), eq(true));
    assert_that!(errors.contains("field"), eq(true));
    assert_that!(errors.contains("year"), eq(true));
    assert_that!(errors.contains("month"), eq(true));
    assert_that!(errors.contains("externalLinks"), eq(true));
    assert_that!(errors.len(), eq(5));
}

#[test]
fn given_padded_name_when_validated_then_trimmed() {
    let input = ProjectValidator::default()
        .validate(ProjectVariant::Personal, &raw_form("  Poster  ", " Print "))
        .unwrap();

    assert_that!(input.name(), eq("Poster"));
    assert_that!(input.details().field.as_str(), eq("Print"));
}

// =========================================================================
// External links
// =========================================================================

#[test]
fn given_external_without_links_when_validated_then_links_error() {
    let errors = ProjectValidator::default()
        .validate(ProjectVariant::External, &raw_form("Atlas", "Maps"))
        .unwrap_err();

    assert_that!(
        errors.get("externalLinks"),
        some(eq("At least one external link is required"))
    );
}

#[test]
fn given_external_with_whitespace_links_when_validated_then_links_error() {
    let mut raw = raw_form("Atlas", "Maps");
    raw.external_links = Some("   ".to_string());

    let errors = ProjectValidator::default()
        .validate(ProjectVariant::External, &raw)
        .unwrap_err();

    assert_that!(errors.contains("externalLinks"), eq(true));
}

#[test]
fn given_personal_without_links_when_validated_then_ok() {
    let mut raw = raw_form("Poster", "Print");
    raw.external_links = Some("  ".to_string());

    let input = ProjectValidator::default()
        .validate(ProjectVariant::Personal, &raw)
        .unwrap();

    match input {
        ProjectInput::Personal(personal) => assert_that!(personal.external_links, none()),
        ProjectInput::External(_) => panic!("expected personal project"),
    }
}

#[test]
fn given_external_with_links_when_validated_then_links_kept_verbatim_after_trim() {
    let mut raw = raw_form("Atlas", "Maps");
    raw.external_links = Some(" https://a.com, , https://b.com, ".to_string());
    raw.authors = Some("Mercator".to_string());

    let input = ProjectValidator::default()
        .validate(ProjectVariant::External, &raw)
        .unwrap();

    match input {
        ProjectInput::External(external) => {
            assert_that!(
                external.external_links.as_str(),
                eq("https://a.com, , https://b.com,")
            );
            assert_that!(external.authors.as_deref(), some(eq("Mercator")));
        }
        ProjectInput::Personal(_) => panic!("expected external reference"),
    }
}

#[test]
fn given_authors_on_personal_when_validated_then_stored_as_co_authors() {
    let mut raw = raw_form("Poster", "Print");
    raw.authors = Some("Ada".to_string());

    let input = ProjectValidator::default()
        .validate(ProjectVariant::Personal, &raw)
        .unwrap();

    match input {
        ProjectInput::Personal(personal) => {
            assert_that!(personal.co_authors.as_deref(), some(eq("Ada")))
        }
        ProjectInput::External(_) => panic!("expected personal project"),
    }
}

// =========================================================================
// Year and month coercion
// =========================================================================

#[test]
fn given_blank_year_when_validated_then_unset() {
    let mut raw = raw_form("Poster", "Print");
    raw.year = Some("".to_string());

    let input = ProjectValidator::default()
        .validate(ProjectVariant::Personal, &raw)
        .unwrap();

    assert_that!(input.details().year, none());
}

#[test]
fn given_numeric_year_string_when_validated_then_integer() {
    let mut raw = raw_form("Poster", "Print");
    raw.year = Some(" 2022 ".to_string());

    let input = ProjectValidator::default()
        .validate(ProjectVariant::Personal, &raw)
        .unwrap();

    assert_that!(input.details().year, some(eq(2022)));
}

#[test]
fn given_year_bounds_when_validated_then_inclusive() {
    let validator = ProjectValidator::default();
    for (year, valid) in [("1899", false), ("1900", true), ("2100", true), ("2101", false)] {
        let mut raw = raw_form("Poster", "Print");
        raw.year = Some(year.to_string());

        let result = validator.validate(ProjectVariant::Personal, &raw);

        assert_eq!(result.is_ok(), valid, "year {year}");
    }
}

#[test]
fn given_non_numeric_year_when_validated_then_number_error() {
    let mut raw = raw_form("Poster", "Print");
    raw.year = Some("twenty".to_string());

    let errors = ProjectValidator::default()
        .validate(ProjectVariant::Personal, &raw)
        .unwrap_err();

    assert_that!(errors.get("year"), some(eq("Year must be a number")));
}

#[test]
fn given_integral_decimal_year_when_validated_then_coerced_to_integer() {
    let mut raw = raw_form("Poster", "Print");
    raw.year = Some("2022.0".to_string());

    let input = ProjectValidator::default()
        .validate(ProjectVariant::Personal, &raw)
        .unwrap();

    assert_that!(input.details().year, some(eq(2022)));
}

#[test]
fn given_fractional_year_when_validated_then_whole_number_error() {
    let mut raw = raw_form("Poster", "Print");
    raw.year = Some("2022.5".to_string());

    let errors = ProjectValidator::default()
        .validate(ProjectVariant::Personal, &raw)
        .unwrap_err();

    assert_that!(errors.get("year"), some(eq("Year must be a whole number")));
}

#[test]
fn given_huge_decimal_year_when_validated_then_range_error() {
    let mut raw = raw_form("Poster", "Print");
    raw.year = Some("1e12".to_string());

    let errors = ProjectValidator::default()
        .validate(ProjectVariant::Personal, &raw)
        .unwrap_err();

    assert_that!(
        errors.get("year"),
        some(eq("Year must be between 1900 and 2100"))
    );
}

#[test]
fn given_year_month_when_validated_then_first_of_month() {
    let mut raw = raw_form("Poster", "Print");
    raw.month = Some("2023-03".to_string());

    let input = ProjectValidator::default()
        .validate(ProjectVariant::Personal, &raw)
        .unwrap();

    assert_that!(
        input.details().month,
        some(eq(NaiveDate::from_ymd_opt(2023, 3, 1).unwrap()))
    );
}

#[test]
fn given_invalid_month_when_validated_then_month_error() {
    let mut raw = raw_form("Poster", "Print");
    raw.month = Some("2023-13".to_string());

    let errors = ProjectValidator::default()
        .validate(ProjectVariant::Personal, &raw)
        .unwrap_err();

    assert_that!(errors.contains("month"), eq(true));
}

// =========================================================================
// Configured limits
// =========================================================================

#[test]
fn given_name_over_limit_when_validated_then_length_error() {
    let validator = ProjectValidator::new(ValidationConfig {
        max_name_length: 5,
        ..ValidationConfig::default()
    });

    let errors = validator
        .validate(ProjectVariant::Personal, &raw_form("Posters", "Print"))
        .unwrap_err();

    assert_that!(
        errors.get("name"),
        some(eq("Name must not exceed 5 characters"))
    );
}

#[test]
fn given_name_at_limit_with_multibyte_chars_when_validated_then_ok() {
    let validator = ProjectValidator::new(ValidationConfig {
        max_name_length: 5,
        ..ValidationConfig::default()
    });

    let result = validator.validate(ProjectVariant::Personal, &raw_form("Ça va", "Print"));

    assert_that!(result.is_ok(), eq(true));
}

#[test]
fn given_links_over_limit_when_validated_then_links_error() {
    let validator = ProjectValidator::new(ValidationConfig {
        max_links_length: 10,
        ..ValidationConfig::default()
    });
    let mut raw = raw_form("Atlas", "Maps");
    raw.external_links = Some("https://example.com".to_string());

    let errors = validator
        .validate(ProjectVariant::External, &raw)
        .unwrap_err();

    assert_that!(errors.contains("externalLinks"), eq(true));
}

#[test]
fn given_field_errors_when_displayed_then_joined_by_field() {
    let errors = ProjectValidator::default()
        .validate(ProjectVariant::Personal, &raw_form("", ""))
        .unwrap_err();

    assert_that!(
        errors.to_string(),
        eq("field: Field is required; name: Name is required")
    );
}
