//! Household resolution and membership management over the backend store.

pub mod members;
pub mod resolver;
pub mod store;

pub use members::{is_admin, InviteOutcome, MembershipService};
pub use resolver::HouseholdResolver;
pub use store::HouseholdStore;
