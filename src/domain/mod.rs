pub mod entry;
pub mod household;
pub mod month;

pub use entry::{Category, Entry, EntryPatch, ExpenseCategory, IncomeCategory, MAX_DESCRIPTION_LEN};
pub use household::{Household, Member, MemberRole, Membership, PendingInvitation};
pub use month::MonthKey;
