use bitvec::prelude::*;
use std::fmt;

use crate::sheet::profile::SheetGeometry;

/// Cells of one sheet that must not receive a label
///
/// Stored row-major, one bit per cell. Every sheet gets a fresh mask so
/// exclusions never carry over from one sheet to the next.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExclusionMask {
    bits: BitVec,
    rows: usize,
    cols: usize,
}

impl ExclusionMask {
    /// Create a mask with every cell available
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            bits: bitvec![0; rows * cols],
            rows,
            cols,
        }
    }

    /// Create an empty mask sized for the given sheet
    pub fn for_geometry(geometry: &SheetGeometry) -> Self {
        Self::new(geometry.rows, geometry.cols)
    }

    /// Number of rows covered by the mask
    pub const fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns covered by the mask
    pub const fn cols(&self) -> usize {
        self.cols
    }

    /// Check whether the mask matches a sheet geometry
    pub const fn fits(&self, geometry: &SheetGeometry) -> bool {
        self.rows == geometry.rows && self.cols == geometry.cols
    }

    const fn offset(&self, row: usize, col: usize) -> Option<usize> {
        if row < self.rows && col < self.cols {
            Some(row * self.cols + col)
        } else {
            None
        }
    }

    /// Test whether a cell is excluded
    ///
    /// Cells outside the grid are never excluded
    pub fn is_excluded(&self, row: usize, col: usize) -> bool {
        self.offset(row, col)
            .is_some_and(|index| self.bits.get(index).is_some_and(|bit| *bit))
    }

    /// Mark or unmark a cell, ignoring cells outside the grid
    pub fn set(&mut self, row: usize, col: usize, excluded: bool) {
        if let Some(index) = self.offset(row, col) {
            self.bits.set(index, excluded);
        }
    }

    /// Flip the exclusion state of one cell
    pub fn toggle_cell(&mut self, row: usize, col: usize) {
        let current = self.is_excluded(row, col);
        self.set(row, col, !current);
    }

    /// Flip every cell of a row individually
    pub fn toggle_row(&mut self, row: usize) {
        for col in 0..self.cols {
            self.toggle_cell(row, col);
        }
    }

    /// Flip every cell of a column individually
    pub fn toggle_column(&mut self, col: usize) {
        for row in 0..self.rows {
            self.toggle_cell(row, col);
        }
    }

    /// Make every cell available again
    pub fn clear(&mut self) {
        self.bits.fill(false);
    }

    /// Number of excluded cells
    pub fn excluded_count(&self) -> usize {
        self.bits.count_ones()
    }

    /// Number of cells still able to take a label
    pub fn capacity(&self) -> usize {
        self.bits.count_zeros()
    }

    /// Excluded cells as zero-based (row, col) pairs in row-major order
    pub fn excluded_cells(&self) -> Vec<(usize, usize)> {
        if self.cols == 0 {
            return Vec::new();
        }
        self.bits
            .iter_ones()
            .map(|index| (index / self.cols, index % self.cols))
            .collect()
    }
}

impl fmt::Display for ExclusionMask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ExclusionMask({}x{}, {} excluded: {:?})",
            self.rows,
            self.cols,
            self.excluded_count(),
            self.excluded_cells()
        )
    }
}
