use crate::{ConfigError, ConfigErrorResult};

use serde::Deserialize;

// Validation constraints
pub const MIN_NAME_LENGTH: usize = 1;
pub const MAX_NAME_LENGTH: usize = 500;
pub const DEFAULT_MAX_NAME_LENGTH: usize = 200;

pub const MIN_FIELD_LENGTH: usize = 1;
pub const MAX_FIELD_LENGTH: usize = 500;
pub const DEFAULT_MAX_FIELD_LENGTH: usize = 100;

pub const MIN_TEXT_LENGTH: usize = 1;
pub const MAX_TEXT_LENGTH: usize = 10000;
pub const DEFAULT_MAX_TEXT_LENGTH: usize = 1000;

pub const MIN_LINKS_LENGTH: usize = 1;
pub const MAX_LINKS_LENGTH: usize = 20000;
pub const DEFAULT_MAX_LINKS_LENGTH: usize = 4000;

/// Upper bounds applied to project form fields.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ValidationConfig {
    /// Maximum length for project names
    pub max_name_length: usize,
    /// Maximum length for the field of work
    pub max_field_length: usize,
    /// Maximum length for duration and author lists
    pub max_text_length: usize,
    /// Maximum length for the raw comma-separated link list
    pub max_links_length: usize,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            max_name_length: DEFAULT_MAX_NAME_LENGTH,
            max_field_length: DEFAULT_MAX_FIELD_LENGTH,
            max_text_length: DEFAULT_MAX_TEXT_LENGTH,
            max_links_length: DEFAULT_MAX_LINKS_LENGTH,
        }
    }
}

impl ValidationConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        Self::check_range(
            "max_name_length",
            self.max_name_length,
            MIN_NAME_LENGTH,
            MAX_NAME_LENGTH,
        )?;
        Self::check_range(
            "max_field_length",
            self.max_field_length,
            MIN_FIELD_LENGTH,
            MAX_FIELD_LENGTH,
        )?;
        Self::check_range(
            "max_text_length",
            self.max_text_length,
            MIN_TEXT_LENGTH,
            MAX_TEXT_LENGTH,
        )?;
        Self::check_range(
            "max_links_length",
            self.max_links_length,
            MIN_LINKS_LENGTH,
            MAX_LINKS_LENGTH,
        )
    }

    #[track_caller]
    fn check_range(name: &str, value: usize, min: usize, max: usize) -> ConfigErrorResult<()> {
        if value < min || value > max {
            return Err(ConfigError::config(format!(
                "validation.{name} must be {min}-{max}, got {value}"
            )));
        }

        Ok(())
    }
}
