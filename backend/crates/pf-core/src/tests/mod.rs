mod models;
mod validator;

use crate::RawProjectForm;

/// Minimal form that passes validation for either variant
pub(crate) fn raw_form(name: &str, field: &str) -> RawProjectForm {
    RawProjectForm {
        name: name.to_string(),
        field: field.to_string(),
        ..RawProjectForm::default()
    }
}
