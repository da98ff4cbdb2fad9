//! Placement of label text on the printed page

/// Label box and text line coordinates
pub mod geometry;
/// Helvetica character widths
pub mod metrics;
