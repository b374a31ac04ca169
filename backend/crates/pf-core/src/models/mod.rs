pub mod external_link;
pub mod identity;
pub mod project;
pub mod project_id;
pub mod project_input;
pub mod project_variant;
pub mod raw_project_form;
