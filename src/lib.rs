//! Combinatorial label generation and placement onto adhesive label sheets
//!
//! Category values entered per label line are expanded into every distinct
//! combination, then laid out row by row onto fixed label grids. Cells already
//! used on a physical sheet can be excluded, and labels that do not fit spill
//! onto further sheets, each rendered as its own PDF page.

#![forbid(unsafe_code)]

/// Category input and combination generation
pub mod combine;
/// Input/output operations and error handling
pub mod io;
/// Page coordinates and text metrics for rendering labels
pub mod layout;
/// Sheet profiles, exclusion masks and label placement
pub mod sheet;

pub use io::error::{LabelError, Result};
