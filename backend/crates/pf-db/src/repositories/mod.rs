pub mod external_link_repository;
pub mod project_repository;

use crate::{DbError, Result as DbErrorResult};

use std::panic::Location;

use chrono::{DateTime, Utc};
use error_location::ErrorLocation;
use uuid::Uuid;

#[track_caller]
fn parse_uuid(value: &str, column: &str) -> DbErrorResult<Uuid> {
    Uuid::parse_str(value).map_err(|e| DbError::Decode {
        column: column.to_string(),
        message: format!("invalid UUID '{value}': {e}"),
        location: ErrorLocation::from(Location::caller()),
    })
}

#[track_caller]
fn parse_timestamp(value: i64, column: &str) -> DbErrorResult<DateTime<Utc>> {
    DateTime::from_timestamp(value, 0).ok_or_else(|| DbError::Decode {
        column: column.to_string(),
        message: format!("timestamp {value} out of range"),
        location: ErrorLocation::from(Location::caller()),
    })
}
