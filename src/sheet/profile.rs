//! Named label sheet products and their physical grid geometry

use std::fmt;

use clap::ValueEnum;

use crate::io::configuration::{MAX_GRID_COLS, MAX_GRID_ROWS, POINTS_PER_CM};
use crate::io::error::{Result, invalid_parameter};

/// Commercial label sheet layouts on US Letter paper
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, ValueEnum)]
pub enum GridProfile {
    /// 5 columns by 17 rows of 105 x 46.7 pt labels
    #[default]
    #[value(name = "5x17")]
    FiveBySeventeen,
    /// 6 columns by 21 rows of 96 x 36 pt labels
    #[value(name = "6x21")]
    SixByTwentyOne,
}

impl GridProfile {
    /// Short name as accepted on the command line
    pub const fn name(self) -> &'static str {
        match self {
            Self::FiveBySeventeen => "5x17",
            Self::SixByTwentyOne => "6x21",
        }
    }

    /// Physical layout of the profile
    pub fn geometry(self) -> SheetGeometry {
        match self {
            Self::FiveBySeventeen => SheetGeometry {
                rows: 17,
                cols: 5,
                label_width: 105.0,
                label_height: 46.7,
                margin_left: 1.6 * POINTS_PER_CM,
                margin_right: 1.6 * POINTS_PER_CM,
                margin_top: 0.25 * POINTS_PER_CM,
                margin_bottom: 0.25 * POINTS_PER_CM,
            },
            Self::SixByTwentyOne => SheetGeometry {
                rows: 21,
                cols: 6,
                label_width: 96.0,
                label_height: 36.0,
                margin_left: 0.45 * POINTS_PER_CM,
                margin_right: 0.45 * POINTS_PER_CM,
                margin_top: 0.25 * POINTS_PER_CM,
                margin_bottom: 0.25 * POINTS_PER_CM,
            },
        }
    }
}

impl fmt::Display for GridProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Grid dimensions and label box sizes of one sheet
///
/// Lengths are PostScript points. Rows and columns are zero-based in code and
/// shown one-based (rows) or lettered (columns) to the operator.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SheetGeometry {
    /// Number of label rows
    pub rows: usize,
    /// Number of label columns
    pub cols: usize,
    /// Width of one label
    pub label_width: f32,
    /// Height of one label
    pub label_height: f32,
    /// Distance from the left page edge to the first column
    pub margin_left: f32,
    /// Distance from the last column to the right page edge
    pub margin_right: f32,
    /// Distance from the top page edge to the first row
    pub margin_top: f32,
    /// Distance from the last row to the bottom page edge
    pub margin_bottom: f32,
}

impl SheetGeometry {
    /// Build a grid of the given size using the default profile's label boxes
    ///
    /// # Errors
    ///
    /// Returns an error if either dimension is zero or exceeds what the cell
    /// naming scheme can address
    pub fn with_dimensions(rows: usize, cols: usize) -> Result<Self> {
        if rows == 0 || rows > MAX_GRID_ROWS {
            return Err(invalid_parameter(
                "rows",
                &rows,
                &format!("must be between 1 and {MAX_GRID_ROWS}"),
            ));
        }
        if cols == 0 || cols > MAX_GRID_COLS {
            return Err(invalid_parameter(
                "cols",
                &cols,
                &format!("must be between 1 and {MAX_GRID_COLS}"),
            ));
        }

        Ok(Self {
            rows,
            cols,
            ..GridProfile::default().geometry()
        })
    }

    /// Number of label cells on one sheet
    pub const fn capacity(&self) -> usize {
        self.rows * self.cols
    }

    /// Check whether a zero-based cell lies on the grid
    pub const fn contains(&self, row: usize, col: usize) -> bool {
        row < self.rows && col < self.cols
    }

    /// Letter naming a zero-based column
    pub fn column_name(&self, col: usize) -> Option<char> {
        if col >= self.cols {
            return None;
        }
        u8::try_from(col).ok().map(|offset| char::from(b'A' + offset))
    }

    /// Zero-based column for a column letter, case-insensitive
    pub fn column_index(&self, name: char) -> Option<usize> {
        let upper = name.to_ascii_uppercase();
        if !upper.is_ascii_uppercase() {
            return None;
        }
        let col = (upper as usize) - ('A' as usize);
        (col < self.cols).then_some(col)
    }

    /// Operator-facing name of a zero-based cell, e.g. `A01`
    pub fn cell_id(&self, row: usize, col: usize) -> Option<String> {
        if row >= self.rows {
            return None;
        }
        self.column_name(col)
            .map(|letter| format!("{letter}{:02}", row + 1))
    }
}
