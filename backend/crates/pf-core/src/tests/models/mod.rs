mod identifiers;
mod project_input;
mod project_variant;
