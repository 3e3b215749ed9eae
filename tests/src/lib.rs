//! # HarvestTrace Test Suite
//!
//! Unified test crate containing end-to-end flows against the public
//! provenance API, wired with the in-memory adapters.
//!
//! ## Structure
//!
//! ```text
//! tests/src/
//! └── integration/      # Full lifecycle choreography
//!     └── flows.rs
//! ```
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test -p harvest-trace-tests
//! ```

pub mod integration;
