//! Domain models for requirement extraction.
//!
//! This module contains the core domain types: input sections, MoSCoW
//! priorities, the structured output record, and configuration.

mod config;
pub use config::Config;

/// MoSCoW priority labels and aggregation.
pub mod priority;
pub use priority::PriorityLabel;

mod requirement_set;
pub use requirement_set::RequirementSet;

/// Input sections and header detection.
pub mod section;
pub use section::Section;
