use std::process::Command;

use super::{Classifier, Error, Prediction};

/// A classifier backed by an external process.
///
/// The model runtime lives outside this crate; the adapter spawns a
/// configured command with the line of text as its final argument and
/// expects a JSON `{"label": ..., "score": ...}` object on stdout.
#[derive(Debug, Clone)]
pub struct CommandClassifier {
    program: String,
    args: Vec<String>,
}

impl CommandClassifier {
    /// Builds a classifier from an argv-style command line.
    ///
    /// Returns `None` when the command line is empty, meaning no classifier
    /// is configured.
    #[must_use]
    pub fn from_argv(argv: &[String]) -> Option<Self> {
        let (program, args) = argv.split_first()?;
        Some(Self {
            program: program.clone(),
            args: args.to_vec(),
        })
    }
}

impl Classifier for CommandClassifier {
    fn classify(&self, line: &str) -> Result<Prediction, Error> {
        let output = Command::new(&self.program)
            .args(&self.args)
            .arg(line)
            .output()?;

        if !output.status.success() {
            return Err(Error::Failed(output.status));
        }

        let prediction: Prediction = serde_json::from_slice(&output.stdout)?;
        tracing::debug!(
            label = %prediction.label,
            score = prediction.score,
            "classifier reply"
        );
        Ok(prediction)
    }
}

#[cfg(test)]
mod tests {
    use super::{Classifier, CommandClassifier, Error};

    fn argv(parts: &[&str]) -> Vec<String> {
        parts.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn empty_argv_means_no_classifier() {
        assert!(CommandClassifier::from_argv(&[]).is_none());
    }

    #[cfg(unix)]
    #[test]
    fn parses_a_json_reply() {
        // `sh -c` consumes the appended line as `$0` and prints a canned
        // reply, standing in for a real model runtime.
        let classifier = CommandClassifier::from_argv(&argv(&[
            "sh",
            "-c",
            r#"printf '{"label": "POSITIVE", "score": 0.92}'"#,
        ]))
        .unwrap();

        let prediction = classifier.classify("The system must scale").unwrap();
        assert_eq!(prediction.label, "POSITIVE");
        assert!((prediction.score - 0.92).abs() < f64::EPSILON);
    }

    #[cfg(unix)]
    #[test]
    fn garbage_reply_is_a_protocol_error() {
        let classifier =
            CommandClassifier::from_argv(&argv(&["sh", "-c", "printf 'not json'"])).unwrap();

        let result = classifier.classify("line");
        assert!(matches!(result, Err(Error::Protocol(_))));
    }

    #[cfg(unix)]
    #[test]
    fn unsuccessful_exit_is_reported() {
        let classifier = CommandClassifier::from_argv(&argv(&["sh", "-c", "exit 3"])).unwrap();

        let result = classifier.classify("line");
        assert!(matches!(result, Err(Error::Failed(_))));
    }

    #[test]
    fn missing_program_is_a_process_error() {
        let classifier =
            CommandClassifier::from_argv(&argv(&["recap-no-such-classifier"])).unwrap();

        let result = classifier.classify("line");
        assert!(matches!(result, Err(Error::Process(_))));
    }
}
