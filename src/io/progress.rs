//! Label placement progress across sheets

use indicatif::{ProgressBar, ProgressStyle};
use std::sync::LazyLock;

use crate::sheet::placement::Sheet;

static PLACEMENT_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("{prefix} [{bar:30.cyan/blue}] {pos}/{len} labels {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Tracks how many labels have been placed as sheets are saved
///
/// The bar is hidden in quiet mode and suspended while the operator is
/// prompted, so prompts and the bar never interleave on the terminal.
pub struct ProgressManager {
    bar: ProgressBar,
    sheets: usize,
}

impl ProgressManager {
    /// Create a visible progress bar over `total_labels`
    pub fn new(total_labels: usize) -> Self {
        let bar = ProgressBar::new(total_labels as u64);
        bar.set_style(PLACEMENT_STYLE.clone());
        bar.set_prefix("Sheet 0");
        Self { bar, sheets: 0 }
    }

    /// Create a progress manager that draws nothing
    pub fn hidden(total_labels: usize) -> Self {
        let bar = ProgressBar::hidden();
        bar.set_length(total_labels as u64);
        Self { bar, sheets: 0 }
    }

    /// Record a saved sheet and the labels it holds
    pub fn sheet_saved(&mut self, sheet: &Sheet) {
        self.sheets += 1;
        self.bar.inc(sheet.placed_count() as u64);
        self.bar.set_prefix(format!("Sheet {}", sheet.index() + 1));
        self.bar
            .set_message(format!("({} excluded)", sheet.mask().excluded_count()));
    }

    /// Run `f` with the bar cleared from the terminal
    pub fn suspend<F: FnOnce() -> R, R>(&self, f: F) -> R {
        self.bar.suspend(f)
    }

    /// Labels placed so far
    pub fn placed(&self) -> u64 {
        self.bar.position()
    }

    /// Sheets saved so far
    pub const fn sheets(&self) -> usize {
        self.sheets
    }

    /// Clean up the progress display
    pub fn finish(&self) {
        self.bar.finish_and_clear();
    }
}
