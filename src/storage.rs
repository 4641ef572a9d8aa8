//! Filesystem storage for generated artifacts.
//!
//! Rendered documents and story spreadsheets are kept in a flat directory,
//! keyed by generation timestamp with a sequential version number per
//! artifact kind.

mod artifacts;
pub use artifacts::{Artifact, ArtifactKind, Error, Store};
