use std::collections::HashMap;

use rust_decimal::Decimal;
use serde::Serialize;

use crate::domain::{Category, Entry, MonthKey};
use crate::ledger::filter::{filter_entries, EntryFilter};

/// Aggregate view of one household's entries for a single month.
#[derive(Debug, Clone, Serialize)]
pub struct MonthlySummary<C: Category + Serialize> {
    pub month: MonthKey,
    /// Exact decimal sum over the month's entries.
    pub total: Decimal,
    pub count: usize,
    pub entries: Vec<Entry<C>>,
    /// Every category present in the month, mapped to its summed amount.
    pub totals_by_category: HashMap<C, Decimal>,
}

impl<C: Category + Serialize> MonthlySummary<C> {
    /// Categories worth rendering: zero totals dropped, largest first.
    /// Ties order by label so the ranking is stable.
    pub fn ranked_categories(&self) -> Vec<(C, Decimal)> {
        let mut ranked: Vec<(C, Decimal)> = self
            .totals_by_category
            .iter()
            .filter(|(_, total)| !total.is_zero())
            .map(|(category, total)| (*category, *total))
            .collect();
        ranked.sort_by(|(ca, ta), (cb, tb)| tb.cmp(ta).then_with(|| ca.to_string().cmp(&cb.to_string())));
        ranked
    }
}

/// Filters `entries` down to `month` and computes its totals.
pub fn summarize_month<C: Category + Serialize>(
    entries: &[Entry<C>],
    month: MonthKey,
) -> MonthlySummary<C> {
    let selected = filter_entries(entries, &EntryFilter::month(month));
    let total = selected.iter().map(|entry| entry.amount).sum();
    let mut totals_by_category: HashMap<C, Decimal> = HashMap::new();
    for entry in &selected {
        *totals_by_category.entry(entry.category).or_insert(Decimal::ZERO) += entry.amount;
    }
    MonthlySummary {
        month,
        total,
        count: selected.len(),
        entries: selected,
        totals_by_category,
    }
}

/// Months with at least one entry, newest first, no duplicates.
pub fn distinct_months<C: Category>(entries: &[Entry<C>]) -> Vec<MonthKey> {
    let mut months: Vec<MonthKey> = entries.iter().map(|entry| MonthKey::of(entry.date)).collect();
    months.sort_unstable_by(|a, b| b.cmp(a));
    months.dedup();
    months
}

/// Exact decimal sum over a whole collection.
pub fn overall_total<C: Category>(entries: &[Entry<C>]) -> Decimal {
    entries.iter().map(|entry| entry.amount).sum()
}

/// Income minus expenses over whatever filtered sets are supplied.
/// The sign is preserved.
pub fn net_balance<I: Category, E: Category>(
    incomes: &[Entry<I>],
    expenses: &[Entry<E>],
) -> Decimal {
    overall_total(incomes) - overall_total(expenses)
}
