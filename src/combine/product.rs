//! Cartesian product of category values within and across label lines
//!
//! Each line is expanded independently: the first category seeds the set of
//! line strings and every following category extends each string with the
//! delimiter and one of its values. The lines are then paired up into full
//! labels. Both stages deduplicate, so identical text reached through
//! different value choices is printed once.

use std::collections::BTreeSet;
use std::fmt;

use crate::combine::category::{Category, LabelSpec};
use crate::io::configuration::LINE_COUNT;

/// Text of one printed label, one string per line
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Label {
    lines: [String; LINE_COUNT],
}

impl Label {
    /// Create a label from its three lines
    pub fn new(first: impl Into<String>, second: impl Into<String>, third: impl Into<String>) -> Self {
        Self {
            lines: [first.into(), second.into(), third.into()],
        }
    }

    /// Lines in print order
    pub const fn lines(&self) -> &[String; LINE_COUNT] {
        &self.lines
    }

    /// Text of a zero-based line
    pub fn line(&self, line: usize) -> Option<&str> {
        self.lines.get(line).map(String::as_str)
    }

    /// Check whether every line is empty
    pub fn is_blank(&self) -> bool {
        self.lines.iter().all(String::is_empty)
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [first, second, third] = &self.lines;
        write!(f, "{first} / {second} / {third}")
    }
}

/// Expand the categories of one line into its distinct joined strings
///
/// A line without categories contributes one blank string so it does not
/// collapse the product across lines. A category without any values leaves
/// nothing to combine and yields an empty result.
pub fn line_combinations(categories: &[Category], delimiter: &str) -> Vec<String> {
    let Some((first, rest)) = categories.split_first() else {
        return vec![String::new()];
    };

    let mut combined: BTreeSet<String> = first.values().iter().cloned().collect();

    for category in rest {
        let mut extended = BTreeSet::new();
        for prefix in &combined {
            for value in category.values() {
                extended.insert(format!("{prefix}{delimiter}{value}"));
            }
        }
        combined = extended;
    }

    combined.into_iter().collect()
}

/// Generate every distinct label for the given category input
///
/// Labels come back sorted by line text, which is also the order they are
/// placed onto sheets.
pub fn generate_labels(spec: &LabelSpec, delimiter: &str) -> Vec<Label> {
    let [first, second, third] = spec
        .lines()
        .each_ref()
        .map(|line| line_combinations(line.categories(), delimiter));

    let mut labels = BTreeSet::new();
    for line_one in &first {
        for line_two in &second {
            for line_three in &third {
                labels.insert(Label::new(
                    line_one.as_str(),
                    line_two.as_str(),
                    line_three.as_str(),
                ));
            }
        }
    }

    labels.into_iter().collect()
}

/// Number of labels the product would produce before deduplication
///
/// Useful to warn about accidental blow-ups before generating anything.
pub fn upper_bound(spec: &LabelSpec) -> usize {
    spec.lines()
        .iter()
        .map(|line| {
            line.categories()
                .iter()
                .map(Category::len)
                .fold(1_usize, usize::saturating_mul)
        })
        .fold(1_usize, usize::saturating_mul)
}
