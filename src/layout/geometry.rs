//! Page coordinates of label boxes and their text lines
//!
//! Coordinates are PostScript points with the origin at the bottom-left page
//! corner, the convention PDF content streams use.

use crate::io::configuration::{LINE_COUNT, PAGE_HEIGHT_PT};
use crate::layout::metrics::text_width;
use crate::sheet::profile::SheetGeometry;

/// Bottom-left corner and size of one label on the page
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LabelBox {
    /// Left edge
    pub x: f32,
    /// Bottom edge
    pub y: f32,
    /// Box width
    pub width: f32,
    /// Box height
    pub height: f32,
}

impl LabelBox {
    /// Locate the box of a zero-based cell
    ///
    /// The vertical origin keeps the `2 * margin_top` lift the printed sheets
    /// were calibrated against.
    pub fn for_cell(geometry: &SheetGeometry, row: usize, col: usize) -> Self {
        let x = col as f32 * geometry.label_width + geometry.margin_left;
        let y = PAGE_HEIGHT_PT - (row + 1) as f32 * geometry.label_height
            + 2.0 * geometry.margin_top;
        Self {
            x,
            y,
            width: geometry.label_width,
            height: geometry.label_height,
        }
    }

    /// Baseline height above the box bottom for a zero-based line
    ///
    /// Line one sits two font sizes up, line three on the bottom edge.
    pub fn baseline_offset(line: usize, font_size: f32) -> f32 {
        LINE_COUNT.saturating_sub(line + 1) as f32 * font_size
    }

    /// Start point for `text` on `line`, horizontally centered in the box
    pub fn line_origin(&self, line: usize, text: &str, font_size: f32) -> (f32, f32) {
        let x = self.x + (self.width - text_width(text, font_size)) / 2.0;
        let y = self.y + Self::baseline_offset(line, font_size);
        (x, y)
    }
}
