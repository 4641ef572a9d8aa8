use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::PriorityLabel;

/// The engine's structured output.
///
/// Constructed fresh per extraction, fully populated in one pass, and not
/// mutated afterwards. Lists may be empty but the record always carries all
/// four fields.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequirementSet {
    /// Functional requirement statements, in scan order.
    pub functional: Vec<String>,
    /// Non-functional requirement statements, in scan order.
    pub non_functional: Vec<String>,
    /// MoSCoW priority map. Each label appears at most once; its weight is
    /// the weight from the first line that produced it.
    pub priority: BTreeMap<PriorityLabel, u32>,
    /// Clarification prompts for ambiguous input lines, in scan order.
    pub clarifications: Vec<String>,
}

impl RequirementSet {
    /// Returns `true` if the extraction produced no statements, priorities,
    /// or clarifications.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.functional.is_empty()
            && self.non_functional.is_empty()
            && self.priority.is_empty()
            && self.clarifications.is_empty()
    }
}
