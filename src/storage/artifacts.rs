use std::{
    fs, io,
    path::{Path, PathBuf},
};

use chrono::NaiveDateTime;
use walkdir::WalkDir;

/// Timestamp format encoded in artifact file names.
const TIMESTAMP_FORMAT: &str = "%Y%m%d_%H%M%S";

/// The kinds of artifact the store versions independently.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ArtifactKind {
    /// A structured requirements document (markdown).
    Document,
    /// User-story rows for a backlog (CSV).
    Stories,
}

impl ArtifactKind {
    const fn prefix(self) -> &'static str {
        match self {
            Self::Document => "requirements",
            Self::Stories => "user_stories",
        }
    }

    const fn extension(self) -> &'static str {
        match self {
            Self::Document => "md",
            Self::Stories => "csv",
        }
    }
}

/// A stored artifact and its version metadata.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifact {
    /// The artifact kind.
    pub kind: ArtifactKind,
    /// File name under the store root.
    pub filename: String,
    /// Generation timestamp encoded in the file name.
    pub timestamp: NaiveDateTime,
    /// Sequential version number within the kind (1-based, chronological).
    pub version: usize,
}

/// Errors from the artifact store.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// An underlying I/O failure.
    #[error("artifact store I/O error")]
    Io(#[from] io::Error),
}

/// A directory of versioned artifacts.
///
/// Files are named `{prefix}_{timestamp}.{ext}` with the timestamp in
/// `%Y%m%d_%H%M%S` form. A new artifact's version number is one more than
/// the count of existing artifacts of the same kind. Files whose names do
/// not match the pattern are ignored.
#[derive(Debug, Clone)]
pub struct Store {
    root: PathBuf,
}

impl Store {
    /// Creates a store rooted at the given directory.
    ///
    /// The directory is created lazily on the first save.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// The store's root directory.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Saves a new artifact of the given kind, stamped with the current
    /// local time.
    ///
    /// # Errors
    ///
    /// Returns an error if the store directory cannot be created or the file
    /// cannot be written.
    pub fn save(&self, kind: ArtifactKind, contents: &str) -> Result<Artifact, Error> {
        self.save_at(kind, contents, chrono::Local::now().naive_local())
    }

    /// Saves a new artifact with an explicit generation timestamp.
    ///
    /// # Errors
    ///
    /// Returns an error if the store directory cannot be created or the file
    /// cannot be written.
    pub fn save_at(
        &self,
        kind: ArtifactKind,
        contents: &str,
        timestamp: NaiveDateTime,
    ) -> Result<Artifact, Error> {
        fs::create_dir_all(&self.root)?;

        let version = self
            .list()?
            .iter()
            .filter(|artifact| artifact.kind == kind)
            .count()
            + 1;

        // Seconds precision only; file names and the returned metadata must
        // agree.
        let timestamp = {
            use chrono::Timelike;
            timestamp.with_nanosecond(0).unwrap_or(timestamp)
        };
        let filename = format!(
            "{}_{}.{}",
            kind.prefix(),
            timestamp.format(TIMESTAMP_FORMAT),
            kind.extension()
        );
        fs::write(self.root.join(&filename), contents)?;
        tracing::info!(%filename, version, "saved artifact");

        Ok(Artifact {
            kind,
            filename,
            timestamp,
            version,
        })
    }

    /// Lists all stored artifacts, newest first.
    ///
    /// Version numbers are assigned chronologically within each kind.
    ///
    /// # Errors
    ///
    /// Returns an error if the store directory cannot be read.
    pub fn list(&self) -> Result<Vec<Artifact>, Error> {
        if !self.root.exists() {
            return Ok(Vec::new());
        }

        let mut artifacts: Vec<Artifact> = WalkDir::new(&self.root)
            .min_depth(1)
            .max_depth(1)
            .into_iter()
            .filter_map(Result::ok)
            .filter(|entry| entry.file_type().is_file())
            .filter_map(|entry| parse_filename(&entry.file_name().to_string_lossy()))
            .collect();

        // Oldest first to assign versions, then flipped for display order.
        artifacts.sort_by_key(|artifact| (artifact.kind, artifact.timestamp));
        let mut counts = std::collections::BTreeMap::new();
        for artifact in &mut artifacts {
            let count = counts.entry(artifact.kind).or_insert(0_usize);
            *count += 1;
            artifact.version = *count;
        }
        artifacts.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));

        Ok(artifacts)
    }

    /// Reads the contents of a stored artifact back.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read.
    pub fn load(&self, artifact: &Artifact) -> Result<String, Error> {
        Ok(fs::read_to_string(self.root.join(&artifact.filename))?)
    }
}

/// Parses an artifact file name of the form `{prefix}_{timestamp}.{ext}`.
///
/// The version is filled in by [`Store::list`]; it is not encoded in the
/// name.
fn parse_filename(filename: &str) -> Option<Artifact> {
    let kind = [ArtifactKind::Document, ArtifactKind::Stories]
        .into_iter()
        .find(|kind| {
            filename.starts_with(kind.prefix())
                && Path::new(filename)
                    .extension()
                    .is_some_and(|ext| ext.eq_ignore_ascii_case(kind.extension()))
        })?;

    let stem = filename
        .strip_prefix(kind.prefix())?
        .strip_prefix('_')?
        .strip_suffix(kind.extension())?
        .strip_suffix('.')?;
    let timestamp = NaiveDateTime::parse_from_str(stem, TIMESTAMP_FORMAT).ok()?;

    Some(Artifact {
        kind,
        filename: filename.to_string(),
        timestamp,
        version: 0,
    })
}
