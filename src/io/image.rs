//! PNG preview of a sheet's layout: excluded, filled and free cells

use crate::io::configuration::{
    EXCLUDED_COLOR, FILLED_COLOR, FREE_COLOR, GRID_LINE_COLOR, PREVIEW_CELL_PIXELS,
};
use crate::io::error::{LabelError, Result, WithPath};
use crate::sheet::placement::Sheet;
use image::{ImageBuffer, Rgba, RgbaImage};
use std::path::Path;

// Picks the fill color for a cell; exclusions win over placements
fn cell_color(sheet: &Sheet, row: usize, col: usize) -> [u8; 4] {
    if sheet.mask().is_excluded(row, col) {
        EXCLUDED_COLOR
    } else if sheet.label_at(row, col).is_some() {
        FILLED_COLOR
    } else {
        FREE_COLOR
    }
}

/// Render the sheet grid as an image, one square block per cell
///
/// Each cell is `PREVIEW_CELL_PIXELS` wide including a one pixel grid line on
/// its top and left edge; the image closes with a final line on the right and
/// bottom.
pub fn render_sheet_preview(sheet: &Sheet) -> RgbaImage {
    let cell = PREVIEW_CELL_PIXELS;
    let width = sheet.cols() as u32 * cell + 1;
    let height = sheet.rows() as u32 * cell + 1;

    ImageBuffer::from_fn(width, height, |x, y| {
        if x % cell == 0 || y % cell == 0 {
            return Rgba(GRID_LINE_COLOR);
        }
        let row = (y / cell) as usize;
        let col = (x / cell) as usize;
        Rgba(cell_color(sheet, row, col))
    })
}

/// Export the sheet layout preview as a PNG image
///
/// # Errors
///
/// Returns an error if:
/// - The parent directory cannot be created
/// - The image cannot be saved to the specified path
pub fn export_sheet_preview(sheet: &Sheet, output_path: &Path) -> Result<()> {
    let img = render_sheet_preview(sheet);

    if let Some(parent) = output_path.parent() {
        std::fs::create_dir_all(parent).with_path(parent, "create directory")?;
    }

    img.save(output_path)
        .map_err(|e| LabelError::PreviewExport {
            path: output_path.to_path_buf(),
            source: e,
        })?;

    Ok(())
}
