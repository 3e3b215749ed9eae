//! # Batch Provenance Core
//!
//! The authorization-gated lifecycle state machine and append-only provenance
//! ledger for produce batches moving through a multi-party supply chain
//! (farmer → driver → retailer → consumer).
//!
//! ## Architecture
//!
//! The host runtime provides durable versioned storage, a rich-query index and
//! per-invocation caller identity. This crate owns everything in between:
//!
//! ```text
//! Caller (id + org) ──→ ProvenanceService ──→ transition table lookup
//!                             │                (required org, next status)
//!                             ├──→ JourneyEvent / Transfer recorder
//!                             ↓
//!                        LedgerStore port (get / put / history / query)
//! ```
//!
//! ## Domain Invariants
//!
//! | ID | Invariant | Description |
//! |----|-----------|-------------|
//! | 1 | Forward-Only Status | Status advances through the fixed graph, never regresses |
//! | 2 | Single Predecessor | Each status is reachable from exactly one predecessor |
//! | 3 | Per-Edge Authorization | Every transition requires a specific organization |
//! | 4 | Paired Provenance | Every accepted transition emits its JourneyEvent (and Transfer for custody changes) |
//! | 5 | Append-Only Records | Events and transfers are written once, never updated |
//! | 6 | Terminal Sale | No operation leaves the `sold` status |
//!
//! ## Crate Structure (Hexagonal Architecture)
//!
//! - `domain/` - Pure domain logic (records, transition table, errors)
//! - `ports/` - Port traits (inbound API, outbound ledger store + time source)
//! - `adapters/` - In-memory ledger store and clock adapters for testing
//! - `service/` - Application service implementing the API
//!
//! ## Usage
//!
//! ```ignore
//! use batch_provenance::{Caller, ProvenanceApi, ProvenanceService};
//!
//! let mut service = ProvenanceService::in_memory();
//!
//! let farmer = Caller::new("x509::farmer-1", "FarmerOrgMSP");
//! let batch = service.create_batch(&farmer, spec)?;
//!
//! let driver = Caller::new("x509::driver-7", "DriverOrgMSP");
//! service.record_pickup(&driver, "BATCH-001", "R. Kumar", location, "picked up")?;
//! ```

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod service;

// Re-export key types for convenience
pub use domain::errors::{ProvenanceError, StoreError};
pub use domain::records::{
    doc_type, Batch, BatchRevision, BatchStatus, EventType, JourneyEvent, Transfer, TransferType,
};
pub use domain::transitions::{transition_for, Operation, TransitionSpec};
pub use domain::value_objects::{
    BatchSpec, Caller, GeoPoint, OrgPolicy, OrgRole, TelemetryReading,
};
pub use ports::inbound::{ProvenanceApi, ProvenanceQueryApi};
pub use ports::outbound::{KeyModification, LedgerStore, QueryHit, Selector, TimeSource};
pub use service::{ProvenanceDependencies, ProvenanceService};

// Re-export adapters for host and test wiring
pub use adapters::{FixedTimeSource, InMemoryLedgerStore, SystemTimeSource};
