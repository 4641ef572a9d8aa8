//! The classifier collaborator boundary.
//!
//! The engine's fallback path consults an external text classifier: one line
//! of text in, a label and confidence score out. The classifier is an
//! optional enhancement layered over a deterministic keyword baseline, so
//! every implementation is allowed to fail and callers degrade gracefully.

mod command;
pub use command::CommandClassifier;

use serde::{Deserialize, Serialize};

/// A label and confidence score returned by a text classifier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Prediction {
    /// The model-assigned label. Opaque to the engine; only the score
    /// participates in the fallback decision.
    pub label: String,
    /// Confidence score in `[0, 1]`.
    pub score: f64,
}

/// Errors raised by a classifier collaborator.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// No classifier backend is configured.
    #[error("no classifier is configured")]
    Unavailable,
    /// The classifier process could not be spawned or its output read.
    #[error("classifier process failed")]
    Process(#[from] std::io::Error),
    /// The classifier exited unsuccessfully.
    #[error("classifier exited with {0}")]
    Failed(std::process::ExitStatus),
    /// The classifier reply could not be decoded.
    #[error("malformed classifier reply")]
    Protocol(#[from] serde_json::Error),
}

/// A text classifier: one line of text in, a label and confidence out.
pub trait Classifier {
    /// Classifies a single line of text.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend is unavailable or replies with
    /// something unintelligible. Callers are expected to recover by falling
    /// back to a keyword-only decision.
    fn classify(&self, line: &str) -> Result<Prediction, Error>;
}

/// The always-unavailable classifier, for keyword-only operation.
#[derive(Debug, Clone, Copy, Default)]
pub struct Disabled;

impl Classifier for Disabled {
    fn classify(&self, _line: &str) -> Result<Prediction, Error> {
        Err(Error::Unavailable)
    }
}
