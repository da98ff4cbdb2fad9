//! Terminal prompts for the output name, category values and sheet exclusions
//!
//! The prompts read whole lines from any `BufRead` and write to any `Write`,
//! so a run can be scripted by piping answers into stdin.

use std::io::{BufRead, Write};
use std::path::PathBuf;

use crate::combine::category::{Category, LabelSpec};
use crate::io::configuration::LINE_COUNT;
use crate::io::error::{LabelError, Result};
use crate::sheet::exclusions::{PresetExclusions, parse_toggles};
use crate::sheet::mask::ExclusionMask;
use crate::sheet::placement::ExclusionSource;
use crate::sheet::profile::SheetGeometry;

const SUBMIT_WORDS: [&str; 1] = ["submit"];
const EXIT_WORDS: [&str; 2] = ["exit", "quit"];
const CLEAR_WORD: &str = "clear";

// Returns None on end of input
fn read_line(input: &mut impl BufRead) -> Result<Option<String>> {
    let mut line = String::new();
    let read = input.read_line(&mut line)?;
    if read == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
}

/// Ask for the base name of the generated files
///
/// # Errors
///
/// Returns an error if reading or writing the terminal fails, or if input
/// ends without a non-blank name
pub fn prompt_output_name(input: &mut impl BufRead, output: &mut impl Write) -> Result<PathBuf> {
    loop {
        writeln!(output, "Enter output filename:")?;
        output.flush()?;
        let Some(line) = read_line(input)? else {
            return Err(LabelError::Cancelled);
        };
        let name = line.trim();
        if !name.is_empty() {
            return Ok(PathBuf::from(name));
        }
    }
}

/// Collect categories for every label line
///
/// Each non-blank answer adds one comma-separated category to the current
/// line; a blank answer moves on to the next line.
///
/// # Errors
///
/// Returns an error if reading or writing the terminal fails
pub fn prompt_label_spec(input: &mut impl BufRead, output: &mut impl Write) -> Result<LabelSpec> {
    let mut spec = LabelSpec::new();

    writeln!(
        output,
        "Enter the values of each category separated by commas, e.g. GP01,GP02,GP03.\n\
         Every combination of values across categories becomes a label.\n\
         Leave the answer blank to move on to the next line."
    )?;

    'lines: for line in 0..LINE_COUNT {
        for category in 1.. {
            write!(output, "Line {}, category {category}: ", line + 1)?;
            output.flush()?;
            let Some(answer) = read_line(input)? else {
                break 'lines;
            };
            if answer.trim().is_empty() {
                break;
            }
            spec.add_category(line, Category::parse(&answer))?;
        }
    }

    Ok(spec)
}

/// Draw the sheet as a text grid, `.` for free cells and `x` for excluded ones
///
/// # Errors
///
/// Returns an error if writing fails
pub fn write_grid(output: &mut impl Write, mask: &ExclusionMask, geometry: &SheetGeometry) -> Result<()> {
    write!(output, "   ")?;
    for col in 0..mask.cols() {
        let name = geometry.column_name(col).unwrap_or('?');
        write!(output, " {name}")?;
    }
    writeln!(output)?;

    for row in 0..mask.rows() {
        write!(output, "{:02} ", row + 1)?;
        for col in 0..mask.cols() {
            let mark = if mask.is_excluded(row, col) { 'x' } else { '.' };
            write!(output, " {mark}")?;
        }
        writeln!(output)?;
    }
    Ok(())
}

/// Interactive exclusion screen on a terminal
///
/// The operator types cell (`B03`), column (`B`) or row (`3`) tokens to toggle
/// cells, `clear` to start over, a blank line or `submit` to confirm and
/// `exit` to abandon the run.
pub struct TerminalPrompt<R, W> {
    input: R,
    output: W,
    presets: PresetExclusions,
}

impl<R: BufRead, W: Write> TerminalPrompt<R, W> {
    /// Create a prompt over the given input and output
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            presets: PresetExclusions::none(),
        }
    }

    /// Start each sheet's selection from its preset exclusions
    #[must_use]
    pub fn with_presets(mut self, presets: PresetExclusions) -> Self {
        self.presets = presets;
        self
    }

    /// Give back the underlying input and output
    pub fn into_inner(self) -> (R, W) {
        (self.input, self.output)
    }

    fn ask(&mut self, sheet: usize, geometry: &SheetGeometry, remaining: usize) -> Result<ExclusionMask> {
        let mut mask = self
            .presets
            .get(sheet)
            .filter(|preset| preset.fits(geometry))
            .cloned()
            .unwrap_or_else(|| ExclusionMask::for_geometry(geometry));

        writeln!(
            self.output,
            "\nSheet {sheet}: select labels that are already used ({remaining} labels left to place)."
        )?;
        writeln!(
            self.output,
            "Toggle cells (B03), columns (B) or rows (3); blank line to submit, 'clear' to reset, 'exit' to quit."
        )?;

        loop {
            write_grid(&mut self.output, &mask, geometry)?;
            write!(self.output, "> ")?;
            self.output.flush()?;

            let Some(line) = read_line(&mut self.input)? else {
                return Err(LabelError::Cancelled);
            };
            let command = line.trim();
            let lowered = command.to_ascii_lowercase();

            if command.is_empty() || SUBMIT_WORDS.contains(&lowered.as_str()) {
                if mask.capacity() == 0 {
                    writeln!(
                        self.output,
                        "Every cell is excluded; free at least one cell or type 'exit'."
                    )?;
                    continue;
                }
                return Ok(mask);
            }
            if EXIT_WORDS.contains(&lowered.as_str()) {
                return Err(LabelError::Cancelled);
            }
            if lowered == CLEAR_WORD {
                mask.clear();
                continue;
            }

            match parse_toggles(command, geometry) {
                Ok(toggles) => {
                    for toggle in toggles {
                        toggle.apply(&mut mask);
                    }
                }
                Err(error) => writeln!(self.output, "{error}")?,
            }
        }
    }
}

impl<R: BufRead, W: Write> ExclusionSource for TerminalPrompt<R, W> {
    fn exclusions_for(
        &mut self,
        sheet: usize,
        geometry: &SheetGeometry,
        remaining: usize,
    ) -> Result<ExclusionMask> {
        self.ask(sheet, geometry, remaining)
    }
}
