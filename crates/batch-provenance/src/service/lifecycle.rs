//! # Lifecycle API Implementation
//!
//! Implements the `ProvenanceApi` trait: every transition is validated by
//! transition-table lookup, then recorded then persisted.
//!
//! Write ordering within an invocation: provenance records (JourneyEvent,
//! Transfer) go to the store first, the batch document last. Any failure
//! before that final batch write aborts the operation, and the host
//! transaction boundary discards the invocation's earlier puts - the core
//! never commits partially on its own.

use super::*;
use crate::domain::records::doc_type;
use crate::domain::transitions::{transition_for, TransitionSpec};
use crate::domain::value_objects::{BatchSpec, GeoPoint, TelemetryReading};
use crate::ports::inbound::ProvenanceApi;

impl<LS, TS> ProvenanceService<LS, TS>
where
    LS: LedgerStore,
    TS: TimeSource,
{
    /// Shared path for every post-creation transition.
    ///
    /// Authorizes, loads the current batch snapshot, validates the
    /// precondition status against the table row, emits the provenance
    /// records and finally rewrites the batch document if the row mutates it.
    #[allow(clippy::too_many_arguments)]
    fn apply_transition(
        &mut self,
        row: &'static TransitionSpec,
        caller: &Caller,
        batch_id: &str,
        actor_name: &str,
        location: GeoPoint,
        telemetry: TelemetryReading,
        notes: &str,
    ) -> Result<Batch, ProvenanceError> {
        self.authorize(row.op, batch_id, row.required_role, caller)?;

        let mut batch = self.load_batch(batch_id)?;
        if let Some(expected) = row.from {
            if batch.status != expected {
                tracing::warn!(
                    "[provenance] ✗ {} on batch {} rejected: status {} (requires {})",
                    row.op,
                    batch_id,
                    batch.status,
                    expected
                );
                return Err(ProvenanceError::InvalidStatus {
                    operation: row.op,
                    batch_id: batch_id.to_string(),
                    expected,
                    actual: batch.status,
                });
            }
        }

        let now = self.time.now_rfc3339();
        let prior_owner = batch.current_owner.clone();
        let prior_org = batch.current_org.clone();

        self.record_event(
            batch_id,
            row.event_type,
            actor_name,
            &caller.org,
            location,
            telemetry,
            notes,
            &now,
        )?;

        if let Some(transfer_type) = row.transfer {
            self.record_transfer(
                batch_id,
                transfer_type,
                &prior_org,
                &caller.org,
                &prior_owner,
                &caller.id,
                &now,
            )?;
        }

        if row.mutates_batch() {
            batch.status = row.to;
            if row.takes_custody {
                batch.current_owner = caller.id.clone();
                batch.current_org = caller.org.clone();
            }
            batch.updated_at = now;
            self.persist_batch(&batch)?;
        }

        tracing::info!(
            "[provenance] ✓ {} accepted: batch {} status {}",
            row.op,
            batch_id,
            batch.status
        );
        Ok(batch)
    }
}

impl<LS, TS> ProvenanceApi for ProvenanceService<LS, TS>
where
    LS: LedgerStore,
    TS: TimeSource,
{
    fn create_batch(&mut self, caller: &Caller, spec: BatchSpec) -> Result<Batch, ProvenanceError> {
        let row = transition_for(Operation::CreateBatch);

        if spec.batch_id.is_empty() {
            return Err(ProvenanceError::EmptyIdentifier { field: "batchId" });
        }
        if spec.farmer_id.is_empty() {
            return Err(ProvenanceError::EmptyIdentifier { field: "farmerId" });
        }

        self.authorize(row.op, &spec.batch_id, row.required_role, caller)?;

        if self.store.get(&spec.batch_id)?.is_some() {
            return Err(ProvenanceError::BatchExists {
                batch_id: spec.batch_id,
            });
        }

        let now = self.time.now_rfc3339();
        let batch = Batch {
            doc_type: doc_type::BATCH.to_string(),
            batch_id: spec.batch_id,
            farmer_id: spec.farmer_id,
            farmer_name: spec.farmer_name,
            agri_stack_id: spec.agri_stack_id,
            crop: spec.crop,
            variety: spec.variety,
            quantity: spec.quantity,
            unit: spec.unit,
            harvest_date: spec.harvest_date,
            origin_lat: spec.origin.lat,
            origin_lng: spec.origin.lng,
            origin_address: spec.origin_address,
            status: row.to,
            current_owner: caller.id.clone(),
            current_org: caller.org.clone(),
            created_at: now.clone(),
            updated_at: now.clone(),
        };

        self.record_event(
            &batch.batch_id,
            row.event_type,
            &batch.farmer_name,
            &caller.org,
            GeoPoint::new(batch.origin_lat, batch.origin_lng),
            TelemetryReading::default(),
            "Batch created by farmer",
            &now,
        )?;

        self.persist_batch(&batch)?;

        tracing::info!(
            "[provenance] 📦 batch {} created by {} ({})",
            batch.batch_id,
            batch.farmer_name,
            caller.org
        );
        Ok(batch)
    }

    fn record_pickup(
        &mut self,
        caller: &Caller,
        batch_id: &str,
        driver_name: &str,
        location: GeoPoint,
        notes: &str,
    ) -> Result<Batch, ProvenanceError> {
        self.apply_transition(
            transition_for(Operation::RecordPickup),
            caller,
            batch_id,
            driver_name,
            location,
            TelemetryReading::default(),
            notes,
        )
    }

    fn record_transit_update(
        &mut self,
        caller: &Caller,
        batch_id: &str,
        driver_name: &str,
        location: GeoPoint,
        telemetry: TelemetryReading,
        notes: &str,
    ) -> Result<Batch, ProvenanceError> {
        self.apply_transition(
            transition_for(Operation::RecordTransitUpdate),
            caller,
            batch_id,
            driver_name,
            location,
            telemetry,
            notes,
        )
    }

    fn record_delivery(
        &mut self,
        caller: &Caller,
        batch_id: &str,
        driver_name: &str,
        location: GeoPoint,
        notes: &str,
    ) -> Result<Batch, ProvenanceError> {
        self.apply_transition(
            transition_for(Operation::RecordDelivery),
            caller,
            batch_id,
            driver_name,
            location,
            TelemetryReading::default(),
            notes,
        )
    }

    fn record_receipt(
        &mut self,
        caller: &Caller,
        batch_id: &str,
        retailer_name: &str,
        location: GeoPoint,
        notes: &str,
    ) -> Result<Batch, ProvenanceError> {
        self.apply_transition(
            transition_for(Operation::RecordReceipt),
            caller,
            batch_id,
            retailer_name,
            location,
            TelemetryReading::default(),
            notes,
        )
    }

    fn record_sale(
        &mut self,
        caller: &Caller,
        batch_id: &str,
        retailer_name: &str,
        notes: &str,
    ) -> Result<Batch, ProvenanceError> {
        // Point of sale carries no geo fix; coordinates stay zero.
        self.apply_transition(
            transition_for(Operation::RecordSale),
            caller,
            batch_id,
            retailer_name,
            GeoPoint::default(),
            TelemetryReading::default(),
            notes,
        )
    }
}
