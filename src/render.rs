//! Rendering of extraction results into downstream artifact formats.
//!
//! These are the formatting collaborators around the engine: a structured
//! requirements document, user-story rows for a backlog spreadsheet, and
//! issue-tracker payloads. None of them contain decision logic; they only
//! reshape a [`crate::RequirementSet`].

/// Structured requirements document rendering.
pub mod document;

/// User-story rows and CSV rendering.
pub mod stories;

/// Issue-tracker payload mapping.
pub mod tracker;
