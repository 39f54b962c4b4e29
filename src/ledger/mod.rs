//! Pure, synchronous derivation of filtered views and aggregate summaries
//! over entry collections already scoped to one household. No I/O.

pub mod filter;
pub mod snapshot;
pub mod summary;

pub use filter::{filter_entries, EntryFilter};
pub use snapshot::{ChangeEvent, EntrySnapshot};
pub use summary::{distinct_months, net_balance, overall_total, summarize_month, MonthlySummary};
