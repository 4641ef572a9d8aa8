//! Fallback classification for lines outside any recognised section.
//!
//! The decision is a deterministic keyword baseline ("shall"/"must" means
//! functional) optionally promoted by classifier confidence. A failing
//! classifier degrades to the keyword decision alone; it never aborts the
//! scan.

use super::{Accumulator, Stream};
use crate::{
    classify::{Classifier, Error},
    domain::PriorityLabel,
};

/// Classifies one line with no section context.
///
/// The statement text is the original line, unmodified. This path is also
/// the only one that applies the generic vague-term check, since it has no
/// section-specific ambiguity vocabulary of its own.
pub(super) fn apply<C: Classifier>(
    classifier: &C,
    confidence_threshold: f64,
    line: &str,
    acc: &mut Accumulator,
) {
    let lower = line.to_lowercase();

    let confident = match classifier.classify(line) {
        Ok(prediction) => prediction.score > confidence_threshold,
        Err(Error::Unavailable) => false,
        Err(error) => {
            tracing::warn!(%error, "classifier failed; using keyword decision only");
            false
        }
    };

    if lower.contains("shall") || lower.contains("must") || confident {
        acc.push(Stream::Functional, line.to_string(), PriorityLabel::Must);
    } else {
        acc.push(Stream::NonFunctional, line.to_string(), PriorityLabel::Could);
    }

    if lower.contains("fast") || lower.contains("secure") {
        acc.clarify(format!(
            "Please clarify: '{line}' - What does 'fast' or 'secure' mean in this context?"
        ));
    }
}
