//! Input/output collaborators around the generation core
//!
//! Command-line handling, defaults, PNG export with content-addressed names,
//! terminal progress and the crate's error type.

/// Command-line interface and batch orchestration
pub mod cli;
/// Generation constants and runtime defaults
pub mod configuration;
/// Error types shared across the crate
pub mod error;
/// PNG export and content-derived file names
pub mod image;
/// Terminal progress display for batch runs
pub mod progress;
