//! Operator cell tokens and preset exclusions supplied up front
//!
//! A token names one cell (`B03`), a whole column (`B`) or a whole row (`3`).
//! Column and row tokens stand in for the header buttons of a sheet layout:
//! they flip every cell along that line.

use std::collections::BTreeMap;

use crate::io::configuration::MAX_SHEETS;
use crate::io::error::{Result, invalid_cell, invalid_parameter};
use crate::sheet::mask::ExclusionMask;
use crate::sheet::placement::ExclusionSource;
use crate::sheet::profile::SheetGeometry;

/// One exclusion toggle requested by the operator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellToggle {
    /// Single zero-based cell
    Cell {
        /// Zero-based row
        row: usize,
        /// Zero-based column
        col: usize,
    },
    /// Every cell of a zero-based row
    Row(usize),
    /// Every cell of a zero-based column
    Column(usize),
}

impl CellToggle {
    /// Parse a single token against the sheet geometry
    ///
    /// # Errors
    ///
    /// Returns an error if the token is malformed or names a row or column
    /// outside the sheet
    pub fn parse(token: &str, geometry: &SheetGeometry) -> Result<Self> {
        let trimmed = token.trim();
        let mut chars = trimmed.chars();
        let Some(first) = chars.next() else {
            return Err(invalid_cell(token, &"empty token"));
        };

        if first.is_ascii_digit() {
            let row = parse_row(trimmed, token, geometry)?;
            return Ok(Self::Row(row));
        }

        if !first.is_ascii_alphabetic() {
            return Err(invalid_cell(token, &"expected a column letter or row number"));
        }

        let col = geometry.column_index(first).ok_or_else(|| {
            invalid_cell(
                token,
                &format!("column outside the sheet's {} columns", geometry.cols),
            )
        })?;

        let rest = chars.as_str();
        if rest.is_empty() {
            return Ok(Self::Column(col));
        }

        let row = parse_row(rest, token, geometry)?;
        Ok(Self::Cell { row, col })
    }

    /// Apply the toggle to a mask
    pub fn apply(self, mask: &mut ExclusionMask) {
        match self {
            Self::Cell { row, col } => mask.toggle_cell(row, col),
            Self::Row(row) => mask.toggle_row(row),
            Self::Column(col) => mask.toggle_column(col),
        }
    }
}

// Rows are shown one-based to the operator
fn parse_row(digits: &str, token: &str, geometry: &SheetGeometry) -> Result<usize> {
    if !digits.bytes().all(|byte| byte.is_ascii_digit()) {
        return Err(invalid_cell(token, &"row must be a number"));
    }
    let row: usize = digits
        .parse()
        .map_err(|_| invalid_cell(token, &"row must be a number"))?;
    if row == 0 || row > geometry.rows {
        return Err(invalid_cell(
            token,
            &format!("row outside 1..={}", geometry.rows),
        ));
    }
    Ok(row - 1)
}

/// Parse every token of a comma or whitespace separated list
///
/// # Errors
///
/// Returns the first token error encountered
pub fn parse_toggles(input: &str, geometry: &SheetGeometry) -> Result<Vec<CellToggle>> {
    input
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|token| !token.is_empty())
        .map(|token| CellToggle::parse(token, geometry))
        .collect()
}

/// Build a mask for one sheet by applying toggles in order
pub fn mask_from_toggles(geometry: &SheetGeometry, toggles: &[CellToggle]) -> ExclusionMask {
    let mut mask = ExclusionMask::for_geometry(geometry);
    for toggle in toggles {
        toggle.apply(&mut mask);
    }
    mask
}

/// Exclusions given ahead of time, keyed by zero-based sheet index
///
/// Sheets without an entry are used in full.
#[derive(Debug, Clone, Default)]
pub struct PresetExclusions {
    masks: BTreeMap<usize, ExclusionMask>,
}

impl PresetExclusions {
    /// Create presets that exclude nothing on any sheet
    pub fn none() -> Self {
        Self::default()
    }

    /// Parse `SHEET=TOKENS` entries such as `0=A01,B,3`
    ///
    /// Repeated entries for the same sheet accumulate.
    ///
    /// # Errors
    ///
    /// Returns an error if an entry has no `=`, the sheet index is not a
    /// number below [`MAX_SHEETS`], or any token is invalid for the geometry
    pub fn parse(entries: &[String], geometry: &SheetGeometry) -> Result<Self> {
        let mut toggles: BTreeMap<usize, Vec<CellToggle>> = BTreeMap::new();

        for entry in entries {
            let (sheet, tokens) = entry.split_once('=').ok_or_else(|| {
                invalid_parameter("exclude", entry, &"expected SHEET=CELLS, e.g. 0=A01,B,3")
            })?;
            let sheet: usize = sheet
                .trim()
                .parse()
                .map_err(|_| invalid_parameter("exclude", entry, &"sheet index must be a number"))?;
            if sheet >= MAX_SHEETS {
                return Err(invalid_parameter(
                    "exclude",
                    entry,
                    &format!("sheet index must be below {MAX_SHEETS}"),
                ));
            }

            toggles
                .entry(sheet)
                .or_default()
                .extend(parse_toggles(tokens, geometry)?);
        }

        let masks = toggles
            .into_iter()
            .map(|(sheet, sheet_toggles)| (sheet, mask_from_toggles(geometry, &sheet_toggles)))
            .collect();
        Ok(Self { masks })
    }

    /// Insert the mask for one sheet, replacing any earlier one
    pub fn insert(&mut self, sheet: usize, mask: ExclusionMask) {
        self.masks.insert(sheet, mask);
    }

    /// Mask prepared for a sheet, if any
    pub fn get(&self, sheet: usize) -> Option<&ExclusionMask> {
        self.masks.get(&sheet)
    }
}

impl ExclusionSource for PresetExclusions {
    fn exclusions_for(
        &mut self,
        sheet: usize,
        geometry: &SheetGeometry,
        _remaining: usize,
    ) -> Result<ExclusionMask> {
        Ok(self
            .masks
            .get(&sheet)
            .cloned()
            .unwrap_or_else(|| ExclusionMask::for_geometry(geometry)))
    }
}
