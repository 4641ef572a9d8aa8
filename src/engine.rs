//! The extraction-and-classification engine.
//!
//! A single left-to-right pass over the input lines. Header lines switch the
//! active section; content lines are routed to that section's rule extractor
//! or, when no section is active, to the classifier fallback. The section
//! state is threaded explicitly through a pure step function, so the scan
//! can be exercised line-by-line in tests.

mod fallback;
mod rules;

use crate::{
    classify::{Classifier, Disabled},
    domain::{PriorityLabel, RequirementSet, Section, priority},
};

/// The only engine failure visible to callers.
///
/// Classifier failures are recovered internally (the fallback path degrades
/// to its keyword decision) and never surface here.
#[derive(Debug, thiserror::Error)]
pub enum InputError {
    /// The combined input text was blank after trimming.
    #[error("no input provided")]
    Empty,
}

/// The requirements extraction engine.
///
/// Holds no mutable state between calls; every extraction owns its own
/// accumulators, so one engine may serve independent requests concurrently.
#[derive(Debug, Clone)]
pub struct Engine<C> {
    classifier: C,
    confidence_threshold: f64,
}

impl Engine<Disabled> {
    /// An engine with no classifier: the fallback path uses the keyword
    /// decision alone.
    #[must_use]
    pub fn keyword_only() -> Self {
        Self::new(Disabled)
    }
}

impl<C: Classifier> Engine<C> {
    /// Confidence above which the fallback path treats a line as functional,
    /// unless overridden with [`Engine::with_confidence_threshold`].
    pub const DEFAULT_CONFIDENCE_THRESHOLD: f64 = 0.7;

    /// Creates an engine around the given classifier.
    pub const fn new(classifier: C) -> Self {
        Self {
            classifier,
            confidence_threshold: Self::DEFAULT_CONFIDENCE_THRESHOLD,
        }
    }

    /// Overrides the fallback confidence threshold.
    #[must_use]
    pub const fn with_confidence_threshold(mut self, threshold: f64) -> Self {
        self.confidence_threshold = threshold;
        self
    }

    /// Extracts a structured requirement set from raw text.
    ///
    /// The input is expected to be plain line-oriented text, already
    /// assembled by the caller from pasted text and any extracted file text.
    ///
    /// # Errors
    ///
    /// Returns [`InputError::Empty`] if the input is blank after trimming.
    pub fn extract(&self, text: &str) -> Result<RequirementSet, InputError> {
        if text.trim().is_empty() {
            return Err(InputError::Empty);
        }

        let mut acc = Accumulator::default();
        let mut section = None;
        for line in text.lines() {
            section = self.step(section, line.trim(), &mut acc);
        }
        Ok(acc.assemble())
    }

    /// Processes one trimmed line, returning the updated section state.
    ///
    /// Empty lines are skipped. A header line sets the section and is
    /// consumed; it never doubles as content. Anything else is content for
    /// the active section's rules, or for the fallback path when no section
    /// has matched yet.
    fn step(
        &self,
        section: Option<Section>,
        line: &str,
        acc: &mut Accumulator,
    ) -> Option<Section> {
        if line.is_empty() {
            return section;
        }

        if let Some(header) = Section::detect(line) {
            return Some(header);
        }

        match section {
            Some(active) => rules::apply(active, line, acc),
            None => fallback::apply(&self.classifier, self.confidence_threshold, line, acc),
        }
        section
    }
}

/// Which output stream a statement lands in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Stream {
    Functional,
    NonFunctional,
}

/// Per-extraction accumulators for the four output streams.
///
/// Priorities are collected as an ordered stream and folded by
/// [`priority::aggregate`] when the result is assembled.
#[derive(Debug, Default)]
struct Accumulator {
    functional: Vec<String>,
    non_functional: Vec<String>,
    priorities: Vec<(PriorityLabel, u32)>,
    clarifications: Vec<String>,
}

impl Accumulator {
    fn push(&mut self, stream: Stream, statement: String, label: PriorityLabel) {
        match stream {
            Stream::Functional => self.functional.push(statement),
            Stream::NonFunctional => self.non_functional.push(statement),
        }
        self.priorities.push((label, label.weight()));
    }

    fn clarify(&mut self, note: String) {
        self.clarifications.push(note);
    }

    fn assemble(self) -> RequirementSet {
        RequirementSet {
            functional: self.functional,
            non_functional: self.non_functional,
            priority: priority::aggregate(self.priorities),
            clarifications: self.clarifications,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Engine, InputError};
    use crate::{
        classify::{Classifier, Error, Prediction},
        domain::PriorityLabel,
    };

    /// A deterministic classifier stub returning a fixed confidence.
    struct Confident(f64);

    impl Classifier for Confident {
        fn classify(&self, _line: &str) -> Result<Prediction, Error> {
            Ok(Prediction {
                label: "POSITIVE".to_string(),
                score: self.0,
            })
        }
    }

    /// A classifier stub that fails on every call.
    struct Broken;

    impl Classifier for Broken {
        fn classify(&self, _line: &str) -> Result<Prediction, Error> {
            Err(Error::Process(std::io::Error::other("model crashed")))
        }
    }

    #[test]
    fn blank_input_is_rejected() {
        let engine = Engine::keyword_only();
        assert!(matches!(engine.extract("   \n\t\n"), Err(InputError::Empty)));
        assert!(matches!(engine.extract(""), Err(InputError::Empty)));
    }

    #[test]
    fn end_to_end_scenario() {
        let engine = Engine::keyword_only();
        let set = engine
            .extract("Objectives\nBuild an innovative platform\nSkills\nPython, Go")
            .unwrap();

        assert_eq!(
            set.functional,
            ["The system shall support the goal: Build an innovative platform"]
        );
        assert_eq!(
            set.non_functional,
            ["The system shall support the technology: Python, Go"]
        );
        assert_eq!(
            set.priority,
            [(PriorityLabel::Must, 8), (PriorityLabel::Should, 5)].into()
        );
        assert_eq!(
            set.clarifications,
            ["Please clarify: 'Build an innovative platform' - What specific goals or projects are intended?"]
        );
    }

    #[test]
    fn header_lines_are_consumed() {
        // The header itself must not be treated as content of the section it
        // opens.
        let engine = Engine::keyword_only();
        let set = engine.extract("Objectives\nShip the product").unwrap();

        assert_eq!(
            set.functional,
            ["The system shall support the goal: Ship the product"]
        );
    }

    #[test]
    fn section_state_persists_across_lines() {
        let engine = Engine::keyword_only();
        let set = engine.extract("Skills\nPython\n\nRust").unwrap();

        assert_eq!(
            set.non_functional,
            [
                "The system shall support the technology: Python",
                "The system shall support the technology: Rust",
            ]
        );
    }

    #[test]
    fn skills_lines_always_emit_should() {
        let engine = Engine::keyword_only();
        let set = engine.extract("Skills\nAnything at all").unwrap();

        assert_eq!(set.non_functional.len(), 1);
        assert!(set.functional.is_empty());
        assert_eq!(set.priority, [(PriorityLabel::Should, 5)].into());
    }

    #[test]
    fn experience_without_keywords_emits_nothing() {
        let engine = Engine::keyword_only();
        let set = engine
            .extract("Work experience\nAttended many meetings")
            .unwrap();

        assert!(set.is_empty());
    }

    #[test]
    fn experience_branches_on_verbs() {
        let engine = Engine::keyword_only();
        let set = engine
            .extract("Work experience\nBuilt a billing service\nManaged a small team")
            .unwrap();

        assert_eq!(
            set.functional,
            ["The system shall include functionality similar to: Built a billing service"]
        );
        assert_eq!(
            set.non_functional,
            ["The system shall support management tasks like: Managed a small team"]
        );
        assert_eq!(set.priority, [(PriorityLabel::Could, 3)].into());
    }

    #[test]
    fn fallback_keyword_round_trip() {
        let engine = Engine::keyword_only();
        let set = engine.extract("The system must be fast and secure").unwrap();

        // "must" routes the line to the functional stream, unmodified.
        assert_eq!(set.functional, ["The system must be fast and secure"]);
        assert_eq!(set.priority, [(PriorityLabel::Must, 8)].into());
        assert_eq!(
            set.clarifications,
            ["Please clarify: 'The system must be fast and secure' - What does 'fast' or 'secure' mean in this context?"]
        );
    }

    #[test]
    fn fallback_confidence_promotes_to_functional() {
        let engine = Engine::new(Confident(0.95));
        let set = engine.extract("Users can upload documents").unwrap();

        assert_eq!(set.functional, ["Users can upload documents"]);
        assert!(set.non_functional.is_empty());
    }

    #[test]
    fn fallback_low_confidence_is_non_functional() {
        let engine = Engine::new(Confident(0.2));
        let set = engine.extract("Users can upload documents").unwrap();

        assert!(set.functional.is_empty());
        assert_eq!(set.non_functional, ["Users can upload documents"]);
        assert_eq!(set.priority, [(PriorityLabel::Could, 3)].into());
    }

    #[test]
    fn confidence_threshold_is_exclusive() {
        // A score exactly at the threshold does not promote the line.
        let engine = Engine::new(Confident(0.7));
        let set = engine.extract("Users can upload documents").unwrap();

        assert_eq!(set.non_functional, ["Users can upload documents"]);
    }

    #[test]
    fn custom_threshold_is_honoured() {
        let engine = Engine::new(Confident(0.5)).with_confidence_threshold(0.4);
        let set = engine.extract("Users can upload documents").unwrap();

        assert_eq!(set.functional, ["Users can upload documents"]);
    }

    #[test]
    fn broken_classifier_degrades_to_keywords() {
        let engine = Engine::new(Broken);
        let set = engine
            .extract("The system shall archive records\nNice colour scheme")
            .unwrap();

        assert_eq!(set.functional, ["The system shall archive records"]);
        assert_eq!(set.non_functional, ["Nice colour scheme"]);
    }

    #[test]
    fn first_seen_priority_wins_across_paths() {
        // "Could" is first produced by the fallback path, then again by the
        // experience rule; the map keeps the first entry only.
        let engine = Engine::keyword_only();
        let set = engine
            .extract("Just a note about colours\nWork experience\nBuilt a scheduler")
            .unwrap();

        assert_eq!(set.non_functional, ["Just a note about colours"]);
        assert_eq!(set.functional.len(), 1);
        assert_eq!(set.priority, [(PriorityLabel::Could, 3)].into());
    }

    #[test]
    fn clarification_does_not_suppress_extraction() {
        let engine = Engine::keyword_only();
        let set = engine
            .extract("Objectives\nDeliver a driven team culture")
            .unwrap();

        assert_eq!(set.functional.len(), 1);
        assert_eq!(set.clarifications.len(), 1);
    }

    #[test]
    fn section_lines_skip_the_global_vague_check() {
        // "fast"/"secure" clarifications belong to the fallback path only;
        // each section defines its own ambiguity vocabulary.
        let engine = Engine::keyword_only();
        let set = engine.extract("Skills\nFast networking stacks").unwrap();

        assert!(set.clarifications.is_empty());
        assert_eq!(set.non_functional.len(), 1);
    }

    #[test]
    fn extraction_is_idempotent() {
        let input = "Objectives\nBuild an innovative platform\n\nThe system must be fast\nSkills\nRust, Go";
        let engine = Engine::keyword_only();

        let first = engine.extract(input).unwrap();
        let second = engine.extract(input).unwrap();
        assert_eq!(first, second);
        assert_eq!(
            serde_json::to_string(&first).unwrap(),
            serde_json::to_string(&second).unwrap()
        );
    }

    #[test]
    fn all_four_fields_are_always_present() {
        let engine = Engine::keyword_only();
        let set = engine.extract("hello world").unwrap();

        let json = serde_json::to_value(&set).unwrap();
        let object = json.as_object().unwrap();
        for field in ["functional", "non_functional", "priority", "clarifications"] {
            assert!(object.contains_key(field), "missing field {field}");
        }
    }
}
