//! Persistence for the user's custom exchange rate
//!
//! The only state that survives a restart is a single named slot holding the
//! exchange rate the user last entered. An absent or unreadable slot means
//! "use the default rate".

mod rate_store;

pub use rate_store::{RateStore, StoredRate, RATE_SLOT};
