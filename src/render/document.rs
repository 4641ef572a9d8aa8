use std::fmt::Write;

use crate::domain::RequirementSet;

/// Renders a requirement set as a structured markdown document.
///
/// The document always contains the introduction, functional,
/// non-functional, and priority sections; the clarifications section is
/// included only when there is something to clarify.
#[must_use]
pub fn render(set: &RequirementSet) -> String {
    let mut doc = String::new();

    doc.push_str("# Requirements Document\n\n");
    doc.push_str("## Introduction\n\n");
    doc.push_str(
        "This document outlines the requirements extracted by recap, an \
         automated requirement gathering tool.\n\n",
    );

    doc.push_str("## Functional Requirements\n\n");
    bullet_list(&mut doc, &set.functional, "No functional requirements identified.");

    doc.push_str("## Non-Functional Requirements\n\n");
    bullet_list(
        &mut doc,
        &set.non_functional,
        "No non-functional requirements identified.",
    );

    doc.push_str("## Priority (MoSCoW Method)\n\n");
    for (label, weight) in &set.priority {
        let _ = writeln!(doc, "- {label}: {weight}");
    }
    doc.push('\n');

    if !set.clarifications.is_empty() {
        doc.push_str("## Clarifications Needed\n\n");
        bullet_list(&mut doc, &set.clarifications, "");
    }

    doc
}

fn bullet_list(doc: &mut String, items: &[String], placeholder: &str) {
    if items.is_empty() {
        doc.push_str(placeholder);
        doc.push('\n');
    } else {
        for item in items {
            let _ = writeln!(doc, "- {item}");
        }
    }
    doc.push('\n');
}
