//! # Inbound Ports (Driving Ports)
//!
//! The provenance APIs this crate exposes to the host runtime.
//!
//! Two traits, one per concern: [`ProvenanceApi`] is the authorization-gated
//! lifecycle state machine, [`ProvenanceQueryApi`] is the read side.

use crate::domain::errors::ProvenanceError;
use crate::domain::records::{Batch, BatchRevision, BatchStatus, JourneyEvent, Transfer};
use crate::domain::value_objects::{BatchSpec, Caller, GeoPoint, TelemetryReading};

/// Lifecycle API for batch provenance.
///
/// Operations take the caller's resolved identity explicitly and enforce the
/// transition table: wrong organization → `Unauthorized`, absent batch →
/// `BatchNotFound`, wrong precondition status or duplicate create → conflict.
/// Every accepted transition pairs the batch write with its JourneyEvent
/// (and Transfer for custody changes) within the host's transaction boundary.
pub trait ProvenanceApi {
    /// Create a new batch in `created` status, owned by the caller.
    ///
    /// ## Errors
    ///
    /// - `Unauthorized`: caller is not the producer organization
    /// - `BatchExists`: a batch with this id already exists
    /// - `EmptyIdentifier`: batch or farmer id is empty
    fn create_batch(&mut self, caller: &Caller, spec: BatchSpec) -> Result<Batch, ProvenanceError>;

    /// Record a carrier picking up a batch: `created` → `in_transit`,
    /// custody moves to the caller, a pickup Transfer is emitted.
    fn record_pickup(
        &mut self,
        caller: &Caller,
        batch_id: &str,
        driver_name: &str,
        location: GeoPoint,
        notes: &str,
    ) -> Result<Batch, ProvenanceError>;

    /// Record in-transit telemetry. Appends a JourneyEvent only: status,
    /// owner and organization are untouched and the batch document is not
    /// rewritten.
    fn record_transit_update(
        &mut self,
        caller: &Caller,
        batch_id: &str,
        driver_name: &str,
        location: GeoPoint,
        telemetry: TelemetryReading,
        notes: &str,
    ) -> Result<Batch, ProvenanceError>;

    /// Record delivery to the retailer: `in_transit` → `delivered`,
    /// custody unchanged.
    fn record_delivery(
        &mut self,
        caller: &Caller,
        batch_id: &str,
        driver_name: &str,
        location: GeoPoint,
        notes: &str,
    ) -> Result<Batch, ProvenanceError>;

    /// Record the retailer receiving a batch: `delivered` → `received`,
    /// custody moves to the caller, a receipt Transfer is emitted.
    fn record_receipt(
        &mut self,
        caller: &Caller,
        batch_id: &str,
        retailer_name: &str,
        location: GeoPoint,
        notes: &str,
    ) -> Result<Batch, ProvenanceError>;

    /// Record the final sale: `received` → `sold`. Terminal - no operation
    /// leaves `sold`.
    fn record_sale(
        &mut self,
        caller: &Caller,
        batch_id: &str,
        retailer_name: &str,
        notes: &str,
    ) -> Result<Batch, ProvenanceError>;
}

/// Read-side API: single lookups, version history and filtered queries.
///
/// All operations are side-effect-free and yield empty sequences, not
/// errors, when nothing matches.
pub trait ProvenanceQueryApi {
    /// Fetch the current batch document.
    ///
    /// ## Errors
    ///
    /// - `BatchNotFound`: no batch with this id
    fn get_batch(&self, batch_id: &str) -> Result<Batch, ProvenanceError>;

    /// Whether a batch exists. A normal lookup miss is `Ok(false)`.
    fn batch_exists(&self, batch_id: &str) -> Result<bool, ProvenanceError>;

    /// All historical versions of a batch document, tagged with transaction
    /// id, commit timestamp and deletion flag, in the store's native order
    /// (not re-sorted by the core).
    fn get_batch_history(&self, batch_id: &str) -> Result<Vec<BatchRevision>, ProvenanceError>;

    /// All journey events referencing a batch. Order is provider-defined.
    fn get_journey_events(&self, batch_id: &str) -> Result<Vec<JourneyEvent>, ProvenanceError>;

    /// All custody transfers referencing a batch. Order is provider-defined.
    fn get_transfers(&self, batch_id: &str) -> Result<Vec<Transfer>, ProvenanceError>;

    /// All batches currently in a given status.
    fn query_batches_by_status(&self, status: BatchStatus)
        -> Result<Vec<Batch>, ProvenanceError>;

    /// All batches currently owned by a given organization.
    fn query_batches_by_org(&self, org: &str) -> Result<Vec<Batch>, ProvenanceError>;
}
