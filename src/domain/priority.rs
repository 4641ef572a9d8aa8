use std::{collections::BTreeMap, fmt};

use serde::{Deserialize, Serialize};

/// A MoSCoW priority label with a fixed policy weight.
///
/// Only the Must/Should/Could subset is used; each label carries a fixed
/// integer weight (8/5/3).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum PriorityLabel {
    /// Essential; weight 8.
    Must,
    /// Important; weight 5.
    Should,
    /// Desirable; weight 3.
    Could,
}

impl PriorityLabel {
    /// The fixed integer weight paired with this label.
    #[must_use]
    pub const fn weight(self) -> u32 {
        match self {
            Self::Must => 8,
            Self::Should => 5,
            Self::Could => 3,
        }
    }
}

impl fmt::Display for PriorityLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Must => "Must",
            Self::Should => "Should",
            Self::Could => "Could",
        };
        f.write_str(name)
    }
}

/// Collapses an ordered stream of `(label, weight)` pairs into a map.
///
/// First-seen-wins: a label's stored weight is the weight from the first
/// pair that produced it; later occurrences are dropped entirely, even if
/// their weight differs. This mirrors the original aggregation loop and must
/// not be replaced with a max-merge.
#[must_use]
pub fn aggregate(
    stream: impl IntoIterator<Item = (PriorityLabel, u32)>,
) -> BTreeMap<PriorityLabel, u32> {
    let mut priority = BTreeMap::new();
    for (label, weight) in stream {
        priority.entry(label).or_insert(weight);
    }
    priority
}
