use uuid::Uuid;

use crate::domain::{Category, Entry};

/// Change notification pushed by the backend's realtime channel.
#[derive(Debug, Clone, PartialEq)]
pub enum ChangeEvent<C> {
    Inserted(Entry<C>),
    Updated(Entry<C>),
    Deleted(Uuid),
}

/// Newest-first cache of one household's entries, owned by the view layer.
/// Refreshed wholesale after a reload or incrementally from pushed events;
/// the aggregation functions are simply re-invoked on `entries()`.
#[derive(Debug, Clone)]
pub struct EntrySnapshot<C> {
    entries: Vec<Entry<C>>,
}

impl<C> Default for EntrySnapshot<C> {
    fn default() -> Self {
        Self { entries: Vec::new() }
    }
}

impl<C: Category> EntrySnapshot<C> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adopts a freshly queried, newest-first collection.
    pub fn from_entries(entries: Vec<Entry<C>>) -> Self {
        Self { entries }
    }

    pub fn replace(&mut self, entries: Vec<Entry<C>>) {
        self.entries = entries;
    }

    pub fn apply(&mut self, event: ChangeEvent<C>) {
        match event {
            ChangeEvent::Inserted(entry) => {
                // A reload racing the push can surface the row twice.
                match self.entries.iter_mut().find(|e| e.id == entry.id) {
                    Some(existing) => *existing = entry,
                    None => self.entries.insert(0, entry),
                }
            }
            ChangeEvent::Updated(entry) => {
                if let Some(existing) = self.entries.iter_mut().find(|e| e.id == entry.id) {
                    *existing = entry;
                }
            }
            ChangeEvent::Deleted(id) => {
                self.entries.retain(|e| e.id != id);
            }
        }
    }

    pub fn entries(&self) -> &[Entry<C>] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{EntryPatch, IncomeCategory};
    use rust_decimal::Decimal;

    fn entry(amount: &str, date: &str) -> Entry<IncomeCategory> {
        Entry::new(
            Uuid::new_v4(),
            amount.parse::<Decimal>().unwrap(),
            IncomeCategory::Salary,
            date.parse().unwrap(),
        )
        .unwrap()
    }

    #[test]
    fn inserts_prepend() {
        let mut snapshot = EntrySnapshot::from_entries(vec![entry("10", "2024-01-01")]);
        let newer = entry("20", "2024-01-02");
        let newer_id = newer.id;
        snapshot.apply(ChangeEvent::Inserted(newer));
        assert_eq!(snapshot.len(), 2);
        assert_eq!(snapshot.entries()[0].id, newer_id);
    }

    #[test]
    fn duplicate_insert_replaces_instead_of_duplicating() {
        let first = entry("10", "2024-01-01");
        let mut snapshot = EntrySnapshot::from_entries(vec![first.clone()]);
        let mut reinserted = first.clone();
        reinserted.amount = "15".parse().unwrap();
        snapshot.apply(ChangeEvent::Inserted(reinserted));
        assert_eq!(snapshot.len(), 1);
        assert_eq!(snapshot.entries()[0].amount, "15".parse::<Decimal>().unwrap());
    }

    #[test]
    fn updates_replace_by_id_and_ignore_unknown_ids() {
        let original = entry("10", "2024-01-01");
        let mut snapshot = EntrySnapshot::from_entries(vec![original.clone()]);

        let mut edited = original.clone();
        edited
            .apply(EntryPatch {
                amount: Some("42".parse().unwrap()),
                ..EntryPatch::default()
            })
            .unwrap();
        snapshot.apply(ChangeEvent::Updated(edited));
        assert_eq!(snapshot.entries()[0].amount, "42".parse::<Decimal>().unwrap());

        snapshot.apply(ChangeEvent::Updated(entry("7", "2024-01-03")));
        assert_eq!(snapshot.len(), 1);
    }

    #[test]
    fn deletes_remove_by_id() {
        let doomed = entry("10", "2024-01-01");
        let kept = entry("20", "2024-01-02");
        let mut snapshot = EntrySnapshot::from_entries(vec![kept.clone(), doomed.clone()]);
        snapshot.apply(ChangeEvent::Deleted(doomed.id));
        assert_eq!(snapshot.entries(), std::slice::from_ref(&kept));
    }

    #[test]
    fn replace_adopts_the_fresh_collection() {
        let mut snapshot = EntrySnapshot::from_entries(vec![entry("10", "2024-01-01")]);
        snapshot.replace(Vec::new());
        assert!(snapshot.is_empty());
    }
}
