//! Category values and per-line category lists entered by the operator

use crate::io::configuration::LINE_COUNT;
use crate::io::error::{Result, invalid_parameter};

/// Ordered list of raw values filling one slot of a label line
///
/// Values are kept verbatim, so any spacing or punctuation typed by the
/// operator ends up on the printed label.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Category {
    values: Vec<String>,
}

impl Category {
    /// Create a category from already separated values
    pub const fn new(values: Vec<String>) -> Self {
        Self { values }
    }

    /// Parse comma-separated operator input
    ///
    /// Surrounding whitespace of the whole input is trimmed, individual values
    /// are not. Empty input yields a single blank value.
    pub fn parse(input: &str) -> Self {
        let values = input.trim().split(',').map(str::to_string).collect();
        Self { values }
    }

    /// Values in entry order
    pub fn values(&self) -> &[String] {
        &self.values
    }

    /// Number of values
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Check whether the category holds no values at all
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Categories combined on one printed line, in entry order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LineSpec {
    categories: Vec<Category>,
}

impl LineSpec {
    /// Append a category to the line
    pub fn push(&mut self, category: Category) {
        self.categories.push(category);
    }

    /// Categories in entry order
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// Check whether no category was added to this line
    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }
}

/// Category input for every line of a label
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LabelSpec {
    lines: [LineSpec; LINE_COUNT],
}

impl LabelSpec {
    /// Create a spec with no categories on any line
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a spec from raw comma-separated inputs, one list per line
    pub fn from_lines(inputs: [Vec<String>; LINE_COUNT]) -> Self {
        let lines = inputs.map(|raw| LineSpec {
            categories: raw.iter().map(|text| Category::parse(text)).collect(),
        });
        Self { lines }
    }

    /// Add a category to a zero-based line
    ///
    /// # Errors
    ///
    /// Returns an error if `line` is not below [`LINE_COUNT`]
    pub fn add_category(&mut self, line: usize, category: Category) -> Result<()> {
        let target = self.lines.get_mut(line).ok_or_else(|| {
            invalid_parameter("line", &line, &format!("labels have {LINE_COUNT} lines"))
        })?;
        target.push(category);
        Ok(())
    }

    /// Categories of a zero-based line
    pub fn line(&self, line: usize) -> Option<&LineSpec> {
        self.lines.get(line)
    }

    /// All lines in print order
    pub const fn lines(&self) -> &[LineSpec; LINE_COUNT] {
        &self.lines
    }

    /// Check whether no line received any category
    pub fn is_empty(&self) -> bool {
        self.lines.iter().all(LineSpec::is_empty)
    }
}
