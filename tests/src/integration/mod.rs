//! # Integration Tests
//!
//! End-to-end lifecycle choreography through the public API.

pub mod flows;
