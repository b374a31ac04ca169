use serde::Deserialize;

/// Field values exactly as a form collects them, before validation.
///
/// `authors` holds co-authors for personal projects and authors for
/// external references.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RawProjectForm {
    pub name: String,
    /// `YYYY-MM` or `YYYY-MM-DD`
    pub month: Option<String>,
    pub year: Option<String>,
    pub duration: Option<String>,
    pub field: String,
    #[serde(alias = "coAuthors")]
    pub authors: Option<String>,
    /// Comma-separated URLs
    pub external_links: Option<String>,
}
