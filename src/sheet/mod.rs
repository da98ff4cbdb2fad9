//! Label sheets and placement
//!
//! This module contains:
//! - Named grid profiles and sheet geometry
//! - Per-sheet exclusion masks and operator toggle tokens
//! - The sheet filling and overflow loop

/// Operator cell tokens and preset exclusions
pub mod exclusions;
/// Per-sheet exclusion bitmask
pub mod mask;
/// Sheet filling and the placement state machine
pub mod placement;
/// Named sheet profiles and grid geometry
pub mod profile;

pub use mask::ExclusionMask;
pub use placement::{Placer, Sheet};
pub use profile::{GridProfile, SheetGeometry};
