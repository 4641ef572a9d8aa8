//! Per-section rule extractors.
//!
//! Each rule is a pure function of the content line and the active section:
//! no hidden state, no dependency on line position. A rule emits at most one
//! statement, and the objectives rule may additionally emit a clarification
//! for vague wording.

use super::{Accumulator, Stream};
use crate::domain::{PriorityLabel, Section};

/// Applies the active section's rule to one content line.
pub(super) fn apply(section: Section, line: &str, acc: &mut Accumulator) {
    let lower = line.to_lowercase();
    match section {
        Section::Objectives => {
            acc.push(
                Stream::Functional,
                format!("The system shall support the goal: {line}"),
                PriorityLabel::Must,
            );
            if lower.contains("innovative") || lower.contains("driven") {
                acc.clarify(format!(
                    "Please clarify: '{line}' - What specific goals or projects are intended?"
                ));
            }
        }
        Section::Skills => acc.push(
            Stream::NonFunctional,
            format!("The system shall support the technology: {line}"),
            PriorityLabel::Should,
        ),
        Section::Experience => {
            if lower.contains("developed") || lower.contains("built") {
                acc.push(
                    Stream::Functional,
                    format!("The system shall include functionality similar to: {line}"),
                    PriorityLabel::Could,
                );
            } else if lower.contains("managed") || lower.contains("organized") {
                acc.push(
                    Stream::NonFunctional,
                    format!("The system shall support management tasks like: {line}"),
                    PriorityLabel::Could,
                );
            }
            // lines with no recognised verb contribute nothing
        }
        Section::Education => acc.push(
            Stream::NonFunctional,
            format!("The system shall leverage knowledge from: {line}"),
            PriorityLabel::Could,
        ),
        Section::Interests => acc.push(
            Stream::NonFunctional,
            format!("The system may consider user interest: {line}"),
            PriorityLabel::Could,
        ),
    }
}
