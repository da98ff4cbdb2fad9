//! Page constants and runtime configuration defaults

// Label text
/// Text inserted between values of consecutive categories on one line
pub const DEFAULT_DELIMITER: &str = " ";
/// Default label font size in points
pub const DEFAULT_FONT_SIZE: f32 = 8.0;
/// Number of text lines printed on one label
pub const LINE_COUNT: usize = 3;

// Page geometry (PostScript points)
/// US Letter page width
pub const PAGE_WIDTH_PT: f32 = 612.0;
/// US Letter page height
pub const PAGE_HEIGHT_PT: f32 = 792.0;
/// Points in one centimetre
pub const POINTS_PER_CM: f32 = 72.0 / 2.54;
/// Millimetres in one point
pub const MM_PER_POINT: f32 = 25.4 / 72.0;

// Grid addressing limits, bounded by the `A01` cell naming scheme
/// Maximum number of rows on a sheet
pub const MAX_GRID_ROWS: usize = 99;
/// Maximum number of columns on a sheet
pub const MAX_GRID_COLS: usize = 26;

// Prevents a runaway exclusion loop from producing unbounded output
/// Maximum number of sheets one run may produce
pub const MAX_SHEETS: usize = 99;

// Output settings
/// Extension of generated sheet documents
pub const OUTPUT_EXTENSION: &str = "pdf";
/// Extension of generated sheet previews
pub const PREVIEW_EXTENSION: &str = "png";
/// Title embedded in generated PDFs
pub const DOCUMENT_TITLE: &str = "Label sheet";
/// Reminder printed once all sheets are saved
pub const PRINT_NOTICE: &str = "PRINT AT ACTUAL SIZE OR SCALE TO 100%";

// Preview rendering
/// Edge length of one preview cell in pixels
pub const PREVIEW_CELL_PIXELS: u32 = 24;
/// Preview color of excluded cells (crimson)
pub const EXCLUDED_COLOR: [u8; 4] = [220, 20, 60, 255];
/// Preview color of cells holding a label (light green)
pub const FILLED_COLOR: [u8; 4] = [144, 238, 144, 255];
/// Preview color of cells left free
pub const FREE_COLOR: [u8; 4] = [255, 255, 255, 255];
/// Preview color of grid lines (light grey)
pub const GRID_LINE_COLOR: [u8; 4] = [211, 211, 211, 255];
