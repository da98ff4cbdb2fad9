//! Command-line interface and the end-to-end label sheet job

use crate::combine::category::LabelSpec;
use crate::combine::product::{Label, generate_labels, upper_bound};
use crate::io::configuration::{
    DEFAULT_DELIMITER, DEFAULT_FONT_SIZE, OUTPUT_EXTENSION, PREVIEW_EXTENSION, PRINT_NOTICE,
};
use crate::io::error::{LabelError, Result, invalid_parameter};
use crate::io::image::export_sheet_preview;
use crate::io::pdf::export_sheet_as_pdf;
use crate::io::progress::ProgressManager;
use crate::io::prompt::{TerminalPrompt, prompt_label_spec, prompt_output_name};
use crate::sheet::exclusions::PresetExclusions;
use crate::sheet::placement::{ExclusionSource, PlacementState, Placer};
use crate::sheet::profile::{GridProfile, SheetGeometry};
use clap::Parser;
use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(name = "labelgrid")]
#[command(
    author,
    version,
    about = "Generate every combination of category values and lay them out on label sheets"
)]
/// Command-line arguments for the label sheet generator
pub struct Cli {
    /// Base name of the generated files; `-<sheet>.pdf` is appended
    #[arg(short, long, value_name = "BASE")]
    pub output: Option<PathBuf>,

    /// Comma-separated values of one category on line 1 (repeat for more categories)
    #[arg(long = "line1", value_name = "VALUES")]
    pub line1: Vec<String>,

    /// Comma-separated values of one category on line 2 (repeat for more categories)
    #[arg(long = "line2", value_name = "VALUES")]
    pub line2: Vec<String>,

    /// Comma-separated values of one category on line 3 (repeat for more categories)
    #[arg(long = "line3", value_name = "VALUES")]
    pub line3: Vec<String>,

    /// Label sheet product to lay out
    #[arg(short, long, value_enum, default_value_t = GridProfile::default())]
    pub profile: GridProfile,

    /// Text placed between values of consecutive categories on a line
    #[arg(short, long, default_value = DEFAULT_DELIMITER)]
    pub delimiter: String,

    /// Label font size in points
    #[arg(short = 's', long, default_value_t = DEFAULT_FONT_SIZE)]
    pub font_size: f32,

    /// Already used cells of a sheet, e.g. `0=A01,B,3` (zero-based sheet; cell, column or row)
    #[arg(short = 'x', long = "exclude", value_name = "SHEET=CELLS")]
    pub exclude: Vec<String>,

    /// Prompt for the used cells of every sheet even when presets are given
    #[arg(short, long)]
    pub interactive: bool,

    /// Fill every sheet without asking for used cells
    #[arg(short, long, conflicts_with = "interactive")]
    pub batch: bool,

    /// Also write a PNG preview of each sheet's layout
    #[arg(long)]
    pub preview: bool,

    /// Suppress progress and status output
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Check whether each sheet starts with the exclusion screen
    ///
    /// The screen is shown unless `--batch` is set or presets were given
    /// without `--interactive`.
    pub fn asks_exclusions(&self) -> bool {
        !self.batch && (self.interactive || self.exclude.is_empty())
    }

    /// Check whether any category was given on the command line
    pub fn has_categories(&self) -> bool {
        !(self.line1.is_empty() && self.line2.is_empty() && self.line3.is_empty())
    }

    /// Category input given on the command line
    pub fn label_spec(&self) -> LabelSpec {
        LabelSpec::from_lines([
            self.line1.clone(),
            self.line2.clone(),
            self.line3.clone(),
        ])
    }

    /// Grid of the selected profile
    pub fn geometry(&self) -> SheetGeometry {
        self.profile.geometry()
    }
}

/// Files written by a finished job
#[derive(Debug, Clone, Default)]
pub struct JobSummary {
    /// Distinct labels generated and placed
    pub labels: usize,
    /// Sheet PDFs in sheet order
    pub documents: Vec<PathBuf>,
    /// Sheet previews in sheet order, empty unless requested
    pub previews: Vec<PathBuf>,
}

/// Runs value collection, generation, placement and rendering
pub struct LabelJob {
    cli: Cli,
}

impl LabelJob {
    /// Create a job from parsed arguments
    pub const fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run against the process terminal
    ///
    /// # Errors
    ///
    /// Returns an error if any step of the job fails or the operator cancels
    pub fn run(&mut self) -> Result<JobSummary> {
        let stdin = std::io::stdin();
        let stdout = std::io::stdout();
        self.run_with(stdin.lock(), stdout.lock())
    }

    /// Run with prompts read from `input` and written to `output`
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The font size is not a positive number
    /// - A preset exclusion cannot be parsed
    /// - The operator cancels a prompt
    /// - A sheet excludes every cell while labels remain
    /// - A sheet document or preview cannot be written
    pub fn run_with<R: BufRead, W: Write>(&mut self, mut input: R, mut output: W) -> Result<JobSummary> {
        if !(self.cli.font_size.is_finite() && self.cli.font_size > 0.0) {
            return Err(invalid_parameter(
                "font-size",
                &self.cli.font_size,
                &"must be a positive number of points",
            ));
        }

        let geometry = self.cli.geometry();
        let mut presets = PresetExclusions::parse(&self.cli.exclude, &geometry)?;

        let base = match &self.cli.output {
            Some(base) => base.clone(),
            None => prompt_output_name(&mut input, &mut output)?,
        };
        let spec = if self.cli.has_categories() {
            self.cli.label_spec()
        } else {
            prompt_label_spec(&mut input, &mut output)?
        };

        let labels = generate_labels(&spec, &self.cli.delimiter);
        self.report(&format!(
            "{} distinct labels from {} combinations on {} sheets",
            labels.len(),
            upper_bound(&spec),
            self.cli.profile
        ));

        let summary = if self.cli.asks_exclusions() {
            let mut prompt = TerminalPrompt::new(input, output).with_presets(presets);
            let summary = self.place_and_render(&labels, &geometry, &base, &mut prompt)?;
            let (_, mut output) = prompt.into_inner();
            writeln!(output, "{PRINT_NOTICE}")?;
            summary
        } else {
            let summary = self.place_and_render(&labels, &geometry, &base, &mut presets)?;
            writeln!(output, "{PRINT_NOTICE}")?;
            summary
        };

        Ok(summary)
    }

    fn place_and_render(
        &self,
        labels: &[Label],
        geometry: &SheetGeometry,
        base: &Path,
        source: &mut impl ExclusionSource,
    ) -> Result<JobSummary> {
        let mut summary = JobSummary {
            labels: labels.len(),
            ..JobSummary::default()
        };
        if labels.is_empty() {
            self.report("No labels to place; nothing written");
            return Ok(summary);
        }

        let mut progress = if self.cli.should_show_progress() {
            ProgressManager::new(labels.len())
        } else {
            ProgressManager::hidden(labels.len())
        };

        let mut placer = Placer::new(labels.len(), *geometry);
        while let PlacementState::AwaitingExclusions { sheet } = placer.state() {
            let remaining = placer.remaining();
            let mask = progress.suspend(|| source.exclusions_for(sheet, geometry, remaining))?;

            match placer.confirm_exclusions(mask) {
                Ok(()) => {}
                Err(LabelError::SheetFullyExcluded { sheet }) if self.cli.asks_exclusions() => {
                    self.report(&format!("Sheet {sheet} has no free cells; choose again"));
                    continue;
                }
                Err(error) => return Err(error),
            }

            let filled = placer.fill_current()?;
            let document = sheet_path(base, filled.index(), OUTPUT_EXTENSION);
            export_sheet_as_pdf(filled, labels, geometry, self.cli.font_size, &document)?;
            summary.documents.push(document);

            if self.cli.preview {
                let preview = sheet_path(base, filled.index(), PREVIEW_EXTENSION);
                export_sheet_preview(filled, &preview)?;
                summary.previews.push(preview);
            }

            progress.sheet_saved(filled);
        }
        progress.finish();
        self.report(&format!(
            "Placed {} labels on {} sheets",
            progress.placed(),
            progress.sheets()
        ));

        Ok(summary)
    }

    // Allow print for user feedback on status messages
    #[allow(clippy::print_stderr)]
    fn report(&self, message: &str) {
        if !self.cli.quiet {
            eprintln!("{message}");
        }
    }
}

/// Path of a sheet file: `<base>-<sheet>.<extension>`
pub fn sheet_path(base: &Path, sheet: usize, extension: &str) -> PathBuf {
    let stem = base.file_name().unwrap_or_default().to_string_lossy();
    let file_name = format!("{stem}-{sheet}.{extension}");

    if let Some(parent) = base.parent() {
        parent.join(file_name)
    } else {
        PathBuf::from(file_name)
    }
}
