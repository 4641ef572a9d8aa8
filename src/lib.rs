//! Requirements extraction from unstructured text.
//!
//! Turns pasted notes, briefs, and resume-like documents into a structured
//! [`RequirementSet`]: functional statements, non-functional statements, a
//! MoSCoW priority map, and clarification questions for ambiguous lines.

pub mod classify;

pub mod domain;
pub use domain::{Config, PriorityLabel, RequirementSet, Section};

pub mod engine;
pub use engine::{Engine, InputError};

pub mod render;

/// Versioned artifact storage for rendered output.
pub mod storage;
pub use storage::Store;
