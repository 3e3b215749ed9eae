//! # Domain Layer
//!
//! Pure domain logic for batch provenance. This layer contains no I/O -
//! only record shapes, the transition table and error types.
//!
//! ## Modules
//!
//! - `records` - Persisted document shapes (Batch, JourneyEvent, Transfer)
//! - `value_objects` - Caller identity, payloads and organization policy
//! - `transitions` - The fixed lifecycle transition table
//! - `errors` - Domain error types

pub mod errors;
pub mod records;
pub mod transitions;
pub mod value_objects;
