//! Data types produced by the analysis pipeline.

use std::collections::BTreeMap;
use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Serialize, Serializer};

use crate::analyzers::category::Category;

/// Outcome of classifying one record, or the batch failure sentinel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Label {
    Category(Category),
    Error,
}

impl Label {
    pub const ERROR: &'static str = "Error";

    pub fn as_str(self) -> &'static str {
        match self {
            Label::Category(c) => c.label(),
            Label::Error => Self::ERROR,
        }
    }
}

impl From<Category> for Label {
    fn from(category: Category) -> Self {
        Label::Category(category)
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for Label {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// Number of occurrences of each label, ordered low-rise, mid-rise,
/// high-rise, Error.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct CategoryCounts(BTreeMap<Label, usize>);

impl CategoryCounts {
    pub fn get(&self, label: Label) -> usize {
        self.0.get(&label).copied().unwrap_or(0)
    }

    pub fn total(&self) -> usize {
        self.0.values().sum()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Label, usize)> + '_ {
        self.0.iter().map(|(label, count)| (*label, *count))
    }
}

impl FromIterator<Label> for CategoryCounts {
    fn from_iter<I: IntoIterator<Item = Label>>(iter: I) -> Self {
        let mut counts = BTreeMap::new();
        for label in iter {
            *counts.entry(label).or_insert(0) += 1;
        }
        CategoryCounts(counts)
    }
}

/// Result of one run over a loaded record set.
#[derive(Debug, Serialize)]
pub struct AnalysisSummary {
    pub generated_at: DateTime<Utc>,
    pub record_count: usize,
    pub categories: CategoryCounts,
    pub min_ratio_address: String,
}
