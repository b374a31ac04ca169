//! Renders a validated project into the text block stored as its
//! description.
//!
//! Line order is fixed: variant tag, field, date or year, duration,
//! authors, links. Absent fields contribute no line.

use crate::{ProjectDetails, ProjectInput};

const EXTERNAL_REFERENCE_TAG: &str = "External Reference";

pub fn serialize_description(input: &ProjectInput) -> String {
    let mut lines: Vec<String> = Vec::new();

    match input {
        ProjectInput::Personal(personal) => {
            push_details(&mut lines, &personal.details);
            if let Some(ref co_authors) = personal.co_authors {
                push_labelled(&mut lines, "Co-authors", co_authors);
            }
            if let Some(ref links) = personal.external_links {
                push_labelled(&mut lines, "External Links", links);
            }
        }
        ProjectInput::External(external) => {
            lines.push(EXTERNAL_REFERENCE_TAG.to_string());
            push_details(&mut lines, &external.details);
            if let Some(ref authors) = external.authors {
                push_labelled(&mut lines, "Authors", authors);
            }
            // Links become their own records
        }
    }

    lines.join("\n").trim_end().to_string()
}

fn push_details(lines: &mut Vec<String>, details: &ProjectDetails) {
    push_labelled(lines, "Field", &details.field);

    match (details.month, details.year) {
        (Some(month), Some(year)) => lines.push(format!("Date: {} {year}", month.format("%B"))),
        (Some(month), None) => lines.push(format!("Date: {}", month.format("%B"))),
        (None, Some(year)) => lines.push(format!("Year: {year}")),
        (None, None) => {}
    }

    if let Some(ref duration) = details.duration {
        push_labelled(lines, "Duration", duration);
    }
}

fn push_labelled(lines: &mut Vec<String>, label: &str, value: &str) {
    if !value.is_empty() {
        lines.push(format!("{label}: {value}"));
    }
}
