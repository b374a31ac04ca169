//! Field-level validation of raw project forms.
//!
//! Every field is checked and all problems are reported together; a form
//! either validates completely or not at all.

use crate::{
    ExternalReference, FieldErrors, PersonalProject, ProjectDetails, ProjectInput, ProjectVariant,
    RawProjectForm,
};

use chrono::NaiveDate;
use pf_config::ValidationConfig;

pub const MIN_YEAR: i32 = 1900;
pub const MAX_YEAR: i32 = 2100;

const DATE_FORMAT: &str = "%Y-%m-%d";

pub struct ProjectValidator {
    limits: ValidationConfig,
}

impl Default for ProjectValidator {
    fn default() -> Self {
        Self::new(ValidationConfig::default())
    }
}

impl ProjectValidator {
    pub fn new(limits: ValidationConfig) -> Self {
        Self { limits }
    }

    /// Validate a raw form against the rules of `variant`.
    pub fn validate(
        &self,
        variant: ProjectVariant,
        raw: &RawProjectForm,
    ) -> Result<ProjectInput, FieldErrors> {
        let mut errors = FieldErrors::default();

        let name = Self::required_text(
            &mut errors,
            "name",
            "Name",
            &raw.name,
            "Name is required",
            self.limits.max_name_length,
        );
        let field = Self::required_text(
            &mut errors,
            "field",
            "Field",
            &raw.field,
            "Field is required",
            self.limits.max_field_length,
        );
        let month = Self::parse_month(&mut errors, raw.month.as_deref());
        let year = Self::parse_year(&mut errors, raw.year.as_deref());
        let duration = Self::optional_text(
            &mut errors,
            "duration",
            "Duration",
            raw.duration.as_deref(),
            self.limits.max_text_length,
        );

        match variant {
            ProjectVariant::Personal => {
                let co_authors = Self::optional_text(
                    &mut errors,
                    "coAuthors",
                    "Co-authors",
                    raw.authors.as_deref(),
                    self.limits.max_text_length,
                );
                let external_links = Self::optional_text(
                    &mut errors,
                    "externalLinks",
                    "External links",
                    raw.external_links.as_deref(),
                    self.limits.max_links_length,
                );

                match (name, field) {
                    (Some(name), Some(field)) if errors.is_empty() => {
                        Ok(ProjectInput::Personal(PersonalProject {
                            details: ProjectDetails {
                                name,
                                month,
                                year,
                                duration,
                                field,
                            },
                            co_authors,
                            external_links,
                        }))
                    }
                    _ => Err(errors),
                }
            }
            ProjectVariant::External => {
                let authors = Self::optional_text(
                    &mut errors,
                    "authors",
                    "Authors",
                    raw.authors.as_deref(),
                    self.limits.max_text_length,
                );
                let external_links = Self::required_text(
                    &mut errors,
                    "externalLinks",
                    "External links",
                    raw.external_links.as_deref().unwrap_or_default(),
                    "At least one external link is required",
                    self.limits.max_links_length,
                );

                match (name, field, external_links) {
                    (Some(name), Some(field), Some(external_links)) if errors.is_empty() => {
                        Ok(ProjectInput::External(ExternalReference {
                            details: ProjectDetails {
                                name,
                                month,
                                year,
                                duration,
                                field,
                            },
                            authors,
                            external_links,
                        }))
                    }
                    _ => Err(errors),
                }
            }
        }
    }

    fn required_text(
        errors: &mut FieldErrors,
        key: &str,
        label: &str,
        value: &str,
        missing_message: &str,
        max_length: usize,
    ) -> Option<String> {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            errors.insert(key, missing_message);
            return None;
        }

        Self::within_limit(errors, key, label, trimmed, max_length)
    }

    /// Empty or whitespace-only input means the field is unset.
    fn optional_text(
        errors: &mut FieldErrors,
        key: &str,
        label: &str,
        value: Option<&str>,
        max_length: usize,
    ) -> Option<String> {
        let trimmed = value.map(str::trim).filter(|v| !v.is_empty())?;
        Self::within_limit(errors, key, label, trimmed, max_length)
    }

    fn within_limit(
        errors: &mut FieldErrors,
        key: &str,
        label: &str,
        value: &str,
        max_length: usize,
    ) -> Option<String> {
        if value.chars().count() > max_length {
            errors.insert(
                key,
                format!("{label} must not exceed {max_length} characters"),
            );
            return None;
        }

        Some(value.to_string())
    }

    fn parse_month(errors: &mut FieldErrors, value: Option<&str>) -> Option<NaiveDate> {
        let trimmed = value.map(str::trim).filter(|v| !v.is_empty())?;

        let parsed = NaiveDate::parse_from_str(trimmed, DATE_FORMAT)
            .or_else(|_| NaiveDate::parse_from_str(&format!("{trimmed}-01"), DATE_FORMAT));

        match parsed {
            Ok(date) => Some(date),
            Err(_) => {
                errors.insert("month", "Month must be a date (YYYY-MM or YYYY-MM-DD)");
                None
            }
        }
    }

    /// Blank input is unset, never zero.
    fn parse_year(errors: &mut FieldErrors, value: Option<&str>) -> Option<i32> {
        let trimmed = value.map(str::trim).filter(|v| !v.is_empty())?;

        let year = match Self::coerce_year(trimmed) {
            Ok(year) => year,
            Err(message) => {
                errors.insert("year", message);
                return None;
            }
        };

        if !(MIN_YEAR..=MAX_YEAR).contains(&year) {
            errors.insert(
                "year",
                format!("Year must be between {MIN_YEAR} and {MAX_YEAR}"),
            );
            return None;
        }

        Some(year)
    }

    /// Integer text, or decimal text with no fractional part ("2022.0").
    fn coerce_year(value: &str) -> Result<i32, &'static str> {
        if let Ok(year) = value.parse::<i32>() {
            return Ok(year);
        }

        let number = value
            .parse::<f64>()
            .ok()
            .filter(|n| n.is_finite())
            .ok_or("Year must be a number")?;

        if number.fract() != 0.0 {
            return Err("Year must be a whole number");
        }

        // Saturating cast; the range check rejects anything this large
        Ok(number as i32)
    }
}
