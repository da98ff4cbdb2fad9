//! Command line, terminal prompts, rendering and errors

/// Command-line interface and job orchestration
pub mod cli;
/// Page constants and runtime defaults
pub mod configuration;
/// Error types
pub mod error;
/// PNG sheet previews
pub mod image;
/// PDF sheet export
pub mod pdf;
/// Placement progress display
pub mod progress;
/// Terminal prompts
pub mod prompt;
