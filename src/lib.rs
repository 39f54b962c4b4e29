#![doc(test(attr(deny(warnings))))]

//! Hearth Core holds the domain logic of a household expense/income tracker:
//! active-household resolution with invitation reconciliation, and pure
//! monthly aggregation over in-memory entry collections. Persistence, auth
//! and realtime transport live behind the [`household::HouseholdStore`]
//! trait in the hosting shell.

pub mod config;
pub mod currency;
pub mod domain;
pub mod errors;
pub mod household;
pub mod ledger;
pub mod utils;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Hearth Core tracing initialized.");
    });
}
