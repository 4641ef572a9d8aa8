use std::fmt::Write;

use serde::{Deserialize, Serialize};

use crate::domain::{PriorityLabel, RequirementSet};

/// A backlog row generated from one functional requirement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserStory {
    /// The user-story wrapper around the requirement statement.
    pub story: String,
    /// Acceptance criteria; defaults to "TBD" until refined.
    pub acceptance_criteria: String,
    /// The weight of the Must priority from the source set, or 0 when no
    /// Must entry exists.
    pub priority: u32,
}

/// Wraps each functional statement of the set in a user-story template.
///
/// Only the functional list contributes rows; non-functional statements and
/// clarifications stay in the requirements document.
#[must_use]
pub fn from_set(set: &RequirementSet) -> Vec<UserStory> {
    let priority = set
        .priority
        .get(&PriorityLabel::Must)
        .copied()
        .unwrap_or_default();

    set.functional
        .iter()
        .map(|requirement| UserStory {
            story: format!("As a user, I want {requirement} so that I can achieve my goal."),
            acceptance_criteria: "TBD".to_string(),
            priority,
        })
        .collect()
}

/// Renders story rows as CSV with a header row.
#[must_use]
pub fn to_csv(stories: &[UserStory]) -> String {
    let mut csv = String::from("User Story,Acceptance Criteria,Priority\n");
    for story in stories {
        let _ = writeln!(
            csv,
            "{},{},{}",
            quote(&story.story),
            quote(&story.acceptance_criteria),
            story.priority
        );
    }
    csv
}

/// Quotes a CSV field when it contains a delimiter, quote, or newline.
fn quote(field: &str) -> String {
    if field.contains([',', '"', '\n']) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}
