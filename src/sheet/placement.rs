//! Sheet filling and the overflow loop across successive sheets
//!
//! Labels are referenced by their index in the generated label list and
//! consumed front to back. Each sheet is walked row-major; excluded cells are
//! skipped without consuming a label. When a sheet runs out of cells the
//! remaining labels wait for the operator to mark the next sheet.

use std::collections::VecDeque;

use ndarray::Array2;

use crate::io::configuration::MAX_SHEETS;
use crate::io::error::{LabelError, Result, invalid_parameter};
use crate::sheet::mask::ExclusionMask;
use crate::sheet::profile::SheetGeometry;

/// Presentation-layer hook asked for the exclusions of each new sheet
pub trait ExclusionSource {
    /// Return the cells of `sheet` that must be skipped
    ///
    /// `remaining` is the number of labels still waiting for a cell.
    ///
    /// # Errors
    ///
    /// Implementations return an error when the operator cancels or the
    /// exclusions cannot be obtained
    fn exclusions_for(
        &mut self,
        sheet: usize,
        geometry: &SheetGeometry,
        remaining: usize,
    ) -> Result<ExclusionMask>;
}

/// A filled sheet: which label sits in which cell
#[derive(Debug, Clone)]
pub struct Sheet {
    index: usize,
    slots: Array2<Option<usize>>,
    mask: ExclusionMask,
}

impl Sheet {
    /// Zero-based position of the sheet in the run
    pub const fn index(&self) -> usize {
        self.index
    }

    /// Number of label rows
    pub fn rows(&self) -> usize {
        self.slots.nrows()
    }

    /// Number of label columns
    pub fn cols(&self) -> usize {
        self.slots.ncols()
    }

    /// Label index placed in a zero-based cell
    pub fn label_at(&self, row: usize, col: usize) -> Option<usize> {
        self.slots.get([row, col]).copied().flatten()
    }

    /// Exclusions the sheet was filled with
    pub const fn mask(&self) -> &ExclusionMask {
        &self.mask
    }

    /// Number of labels placed on the sheet
    pub fn placed_count(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_some()).count()
    }

    /// Placed labels as (row, col, label index) in traversal order
    pub fn placements(&self) -> Vec<(usize, usize, usize)> {
        self.slots
            .indexed_iter()
            .filter_map(|((row, col), slot)| slot.map(|label| (row, col, label)))
            .collect()
    }
}

/// Fill one sheet from the front of the queue
///
/// Stops when the queue is empty or every available cell is used; labels that
/// did not fit stay queued for the next sheet.
pub fn fill_sheet(index: usize, mask: ExclusionMask, queue: &mut VecDeque<usize>) -> Sheet {
    let mut slots = Array2::from_elem((mask.rows(), mask.cols()), None);

    'rows: for row in 0..mask.rows() {
        for col in 0..mask.cols() {
            if mask.is_excluded(row, col) {
                continue;
            }
            let Some(label) = queue.pop_front() else {
                break 'rows;
            };
            if let Some(slot) = slots.get_mut([row, col]) {
                *slot = Some(label);
            }
        }
    }

    Sheet { index, slots, mask }
}

/// Progress of the placement loop
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlacementState {
    /// Waiting for the operator to mark used cells on the next sheet
    AwaitingExclusions {
        /// Zero-based sheet index
        sheet: usize,
    },
    /// Exclusions confirmed, sheet ready to be filled
    Filling {
        /// Zero-based sheet index
        sheet: usize,
    },
    /// Every label placed and the last sheet saved
    Complete,
}

impl PlacementState {
    /// Short name used in error messages
    pub const fn name(self) -> &'static str {
        match self {
            Self::AwaitingExclusions { .. } => "AWAITING_EXCLUSIONS",
            Self::Filling { .. } => "FILLING",
            Self::Complete => "COMPLETE",
        }
    }
}

/// Drives labels across as many sheets as needed
pub struct Placer {
    geometry: SheetGeometry,
    queue: VecDeque<usize>,
    sheets: Vec<Sheet>,
    pending_mask: Option<ExclusionMask>,
    state: PlacementState,
}

impl Placer {
    /// Start placing labels `0..label_count`
    ///
    /// With nothing to place the placer starts out complete.
    pub fn new(label_count: usize, geometry: SheetGeometry) -> Self {
        let state = if label_count == 0 {
            PlacementState::Complete
        } else {
            PlacementState::AwaitingExclusions { sheet: 0 }
        };

        Self {
            geometry,
            queue: (0..label_count).collect(),
            sheets: Vec::new(),
            pending_mask: None,
            state,
        }
    }

    /// Current state of the loop
    pub const fn state(&self) -> PlacementState {
        self.state
    }

    /// Geometry every sheet is filled with
    pub const fn geometry(&self) -> &SheetGeometry {
        &self.geometry
    }

    /// Labels not yet placed
    pub fn remaining(&self) -> usize {
        self.queue.len()
    }

    /// Sheets saved so far
    pub fn sheets(&self) -> &[Sheet] {
        &self.sheets
    }

    /// Consume the placer, returning the saved sheets
    pub fn into_sheets(self) -> Vec<Sheet> {
        self.sheets
    }

    /// Confirm the exclusions of the sheet awaiting them
    ///
    /// # Errors
    ///
    /// Returns an error if the placer is not awaiting exclusions, the mask
    /// does not match the geometry, or it leaves no cell free. A rejected
    /// mask leaves the placer awaiting exclusions for the same sheet.
    pub fn confirm_exclusions(&mut self, mask: ExclusionMask) -> Result<()> {
        let PlacementState::AwaitingExclusions { sheet } = self.state else {
            return Err(self.wrong_state("AWAITING_EXCLUSIONS"));
        };

        if !mask.fits(&self.geometry) {
            return Err(invalid_parameter(
                "mask",
                &format!("{}x{}", mask.rows(), mask.cols()),
                &format!(
                    "sheet grid is {}x{}",
                    self.geometry.rows, self.geometry.cols
                ),
            ));
        }
        if mask.capacity() == 0 {
            return Err(LabelError::SheetFullyExcluded { sheet });
        }

        self.pending_mask = Some(mask);
        self.state = PlacementState::Filling { sheet };
        Ok(())
    }

    /// Fill the confirmed sheet and save it
    ///
    /// # Errors
    ///
    /// Returns an error if no sheet is ready to be filled, or if the last
    /// allowed sheet cannot take every remaining label. A refused fill leaves
    /// the placer and its queue untouched.
    pub fn fill_current(&mut self) -> Result<&Sheet> {
        let PlacementState::Filling { sheet } = self.state else {
            return Err(self.wrong_state("FILLING"));
        };

        let capacity = self
            .pending_mask
            .as_ref()
            .map_or(self.geometry.capacity(), ExclusionMask::capacity);
        let overflow = self.queue.len().saturating_sub(capacity);
        if overflow > 0 && sheet + 1 >= MAX_SHEETS {
            return Err(LabelError::SheetLimitExceeded {
                limit: MAX_SHEETS,
                remaining: overflow,
            });
        }

        let mask = self
            .pending_mask
            .take()
            .unwrap_or_else(|| ExclusionMask::for_geometry(&self.geometry));
        let filled = fill_sheet(sheet, mask, &mut self.queue);
        self.sheets.push(filled);

        self.state = if self.queue.is_empty() {
            PlacementState::Complete
        } else {
            PlacementState::AwaitingExclusions { sheet: sheet + 1 }
        };

        self.sheets
            .last()
            .ok_or_else(|| self.wrong_state("FILLING"))
    }

    /// Run the loop to completion, asking `source` for each sheet's exclusions
    ///
    /// # Errors
    ///
    /// Propagates errors from the exclusion source and from placement
    pub fn run(mut self, source: &mut impl ExclusionSource) -> Result<Vec<Sheet>> {
        while let PlacementState::AwaitingExclusions { sheet } = self.state {
            let mask = source.exclusions_for(sheet, &self.geometry, self.remaining())?;
            self.confirm_exclusions(mask)?;
            self.fill_current()?;
        }
        Ok(self.into_sheets())
    }

    const fn wrong_state(&self, expected: &'static str) -> LabelError {
        LabelError::InvalidTransition {
            expected,
            actual: self.state.name(),
        }
    }
}
