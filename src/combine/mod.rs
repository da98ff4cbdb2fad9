//! Category input and the Cartesian product of its values
//!
//! This module contains:
//! - Category and per-line input structures
//! - Line and label combination generation

/// Categories, lines and full label input
pub mod category;
/// Cartesian product within and across lines
pub mod product;

pub use category::{Category, LabelSpec};
pub use product::{Label, generate_labels};
