//! # Adapters Module
//!
//! In-crate implementations of the outbound ports.
//!
//! ## Modules
//!
//! - `memory_ledger`: in-memory ledger store with a deterministic
//!   modification log and selector evaluation, for unit and flow tests
//! - `time`: system and fixed clock adapters

pub mod memory_ledger;
pub mod time;

pub use memory_ledger::InMemoryLedgerStore;
pub use time::{FixedTimeSource, SystemTimeSource};
