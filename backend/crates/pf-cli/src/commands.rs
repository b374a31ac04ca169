use pf_core::RawProjectForm;

use clap::{Args, Subcommand};

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Record a personal project
    Personal(PersonalArgs),

    /// Record an external reference and its source links
    External(ExternalArgs),

    /// List recorded projects with their external links
    List,
}

/// Flags shared by both project kinds.
#[derive(Args)]
pub(crate) struct DetailArgs {
    /// Project name
    #[arg(long, default_value = "")]
    pub name: String,

    /// Field or discipline
    #[arg(long, default_value = "")]
    pub field: String,

    /// Month as YYYY-MM or YYYY-MM-DD
    #[arg(long)]
    pub month: Option<String>,

    /// Year (1900-2100)
    #[arg(long)]
    pub year: Option<String>,

    /// Free-form duration, e.g. "3 weeks"
    #[arg(long)]
    pub duration: Option<String>,
}

#[derive(Args)]
pub(crate) struct PersonalArgs {
    #[command(flatten)]
    pub details: DetailArgs,

    /// Co-authors, free text
    #[arg(long)]
    pub co_authors: Option<String>,

    /// Comma-separated links kept in the description
    #[arg(long)]
    pub links: Option<String>,
}

#[derive(Args)]
pub(crate) struct ExternalArgs {
    #[command(flatten)]
    pub details: DetailArgs,

    /// Authors of the referenced work
    #[arg(long)]
    pub authors: Option<String>,

    /// Comma-separated source URLs (at least one)
    #[arg(long)]
    pub links: Option<String>,
}

impl DetailArgs {
    fn into_form(self, authors: Option<String>, external_links: Option<String>) -> RawProjectForm {
        RawProjectForm {
            name: self.name,
            month: self.month,
            year: self.year,
            duration: self.duration,
            field: self.field,
            authors,
            external_links,
        }
    }
}

impl From<PersonalArgs> for RawProjectForm {
    fn from(args: PersonalArgs) -> Self {
        args.details.into_form(args.co_authors, args.links)
    }
}

impl From<ExternalArgs> for RawProjectForm {
    fn from(args: ExternalArgs) -> Self {
        args.details.into_form(args.authors, args.links)
    }
}
