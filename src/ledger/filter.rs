use chrono::NaiveDate;

use crate::domain::{Category, Entry, MonthKey};

/// Conjunction of optional entry constraints; an omitted field imposes none.
#[derive(Debug, Clone, PartialEq)]
pub struct EntryFilter<C> {
    pub month: Option<MonthKey>,
    pub category: Option<C>,
    /// Inclusive lower date bound.
    pub date_from: Option<NaiveDate>,
    /// Inclusive upper date bound.
    pub date_to: Option<NaiveDate>,
}

impl<C> Default for EntryFilter<C> {
    fn default() -> Self {
        Self {
            month: None,
            category: None,
            date_from: None,
            date_to: None,
        }
    }
}

impl<C: Category> EntryFilter<C> {
    pub fn month(month: MonthKey) -> Self {
        Self {
            month: Some(month),
            ..Self::default()
        }
    }

    pub fn matches(&self, entry: &Entry<C>) -> bool {
        if let Some(month) = self.month {
            if !month.contains(entry.date) {
                return false;
            }
        }
        if let Some(category) = self.category {
            if entry.category != category {
                return false;
            }
        }
        if let Some(from) = self.date_from {
            if entry.date < from {
                return false;
            }
        }
        if let Some(to) = self.date_to {
            if entry.date > to {
                return false;
            }
        }
        true
    }
}

/// Keeps every entry matching all supplied constraints, preserving input
/// order (the data source hands entries newest-first).
pub fn filter_entries<C: Category>(entries: &[Entry<C>], filter: &EntryFilter<C>) -> Vec<Entry<C>> {
    entries
        .iter()
        .filter(|entry| filter.matches(entry))
        .cloned()
        .collect()
}
