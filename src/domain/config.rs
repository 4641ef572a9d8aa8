use std::path::Path;

use serde::{Deserialize, Serialize};

/// Configuration for requirement extraction.
///
/// Holds the settings that tune the engine's fallback path and the
/// downstream issue-tracker mapping. The extraction rules themselves are
/// fixed and not configurable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "Versions", into = "Versions")]
pub struct Config {
    /// Argv-style command line of the external text classifier.
    ///
    /// The command receives one line of text as its final argument and must
    /// print a JSON `{"label": ..., "score": ...}` object on stdout. When
    /// empty, the fallback path uses the keyword decision alone.
    classifier_command: Vec<String>,

    /// Confidence above which the fallback path treats a line as a
    /// functional requirement.
    confidence_threshold: f64,

    /// Project key used when mapping user stories to issue-tracker payloads.
    project_key: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            classifier_command: Vec::new(),
            confidence_threshold: default_confidence_threshold(),
            project_key: default_project_key(),
        }
    }
}

impl Config {
    /// Loads the configuration from a TOML file at the given path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or if the TOML content is
    /// invalid.
    pub fn load(path: &Path) -> Result<Self, String> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| format!("Failed to read config file: {e}"))?;
        toml::from_str(&content).map_err(|e| format!("Failed to parse config file: {e}"))
    }

    /// Saves the configuration to a TOML file at the given path.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration cannot be serialized to TOML or
    /// if the file cannot be written.
    pub fn save(&self, path: &Path) -> Result<(), String> {
        let content =
            toml::to_string_pretty(self).map_err(|e| format!("Failed to serialize config: {e}"))?;
        std::fs::write(path, content).map_err(|e| format!("Failed to write config file: {e}"))
    }

    /// The configured classifier command line, if any.
    #[must_use]
    pub fn classifier_command(&self) -> &[String] {
        &self.classifier_command
    }

    /// The confidence threshold for the fallback classification path.
    #[must_use]
    pub const fn confidence_threshold(&self) -> f64 {
        self.confidence_threshold
    }

    /// The project key used for issue-tracker payloads.
    #[must_use]
    pub fn project_key(&self) -> &str {
        &self.project_key
    }

    /// Sets the classifier command line.
    pub fn set_classifier_command(&mut self, command: Vec<String>) {
        self.classifier_command = command;
    }
}

const fn default_confidence_threshold() -> f64 {
    0.7
}

fn default_project_key() -> String {
    "RECAP".to_string()
}

/// The serialized versions of the configuration.
/// This allows for future changes to the configuration format and to the
/// domain type without breaking compatibility.
#[derive(Debug, Serialize, Deserialize)]
#[serde(tag = "_version")]
enum Versions {
    #[serde(rename = "1")]
    V1 {
        #[serde(default, skip_serializing_if = "Vec::is_empty")]
        classifier_command: Vec<String>,

        /// Confidence above which the fallback path treats a line as
        /// functional.
        #[serde(default = "default_confidence_threshold")]
        confidence_threshold: f64,

        #[serde(default = "default_project_key")]
        project_key: String,
    },
}

impl From<Versions> for Config {
    fn from(versions: Versions) -> Self {
        match versions {
            Versions::V1 {
                classifier_command,
                confidence_threshold,
                project_key,
            } => Self {
                classifier_command,
                confidence_threshold,
                project_key,
            },
        }
    }
}

impl From<Config> for Versions {
    fn from(config: Config) -> Self {
        Self::V1 {
            classifier_command: config.classifier_command,
            confidence_threshold: config.confidence_threshold,
            project_key: config.project_key,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn load_reads_valid_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(
            b"_version = \"1\"\nclassifier_command = [\"classify\", \"--json\"]\nconfidence_threshold = 0.9\nproject_key = \"PROJ\"\n",
        )
        .unwrap();

        let config = Config::load(file.path()).unwrap();

        assert_eq!(
            config.classifier_command(),
            &["classify".to_string(), "--json".to_string()]
        );
        assert!((config.confidence_threshold() - 0.9).abs() < f64::EPSILON);
        assert_eq!(config.project_key(), "PROJ");
    }

    #[test]
    fn load_missing_file_returns_error() {
        let tmp = tempfile::tempdir().unwrap();
        let missing = tmp.path().join("missing.toml");

        let error = Config::load(&missing).unwrap_err();
        assert!(error.starts_with("Failed to read config file:"));
    }

    #[test]
    fn load_invalid_toml_returns_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"_version = \"1\"\nconfidence_threshold = \"high\"\n")
            .unwrap();

        let error = Config::load(file.path()).unwrap_err();
        assert!(error.starts_with("Failed to parse config file:"));
    }

    #[test]
    fn empty_file_returns_default() {
        // Tests that deserialising a bare version tag returns the default
        // configuration.
        let expected = Config::default();
        let actual: Config = toml::from_str(r#"_version = "1""#).unwrap();
        assert_eq!(actual, expected);
    }

    #[test]
    fn save_and_load_round_trip() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("recap.toml");

        let mut config = Config::default();
        config.set_classifier_command(vec!["classify".to_string()]);
        config.save(&path).unwrap();

        assert_eq!(Config::load(&path).unwrap(), config);
    }
}
