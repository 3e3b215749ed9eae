//! # Event/Transfer Recorder
//!
//! Constructs and persists the immutable provenance records paired with
//! each accepted transition: one JourneyEvent per operation, one Transfer
//! per custody change.
//!
//! Identifier scheme: the creation event uses the fixed suffix
//! `{batchId}-created` (creation is guarded by the duplicate-create check);
//! every other event uses `{batchId}-{kind}-{nanos}` and transfers use
//! `{batchId}-transfer-{nanos}`, with `nanos` taken from the monotonic
//! clock reading so identifiers stay unique under rapid repeated
//! invocations. The recorder performs exactly one put per record and never
//! targets an existing identifier; persistence errors propagate unchanged
//! and fail the whole transition.

use super::*;
use crate::domain::records::{doc_type, EventType, JourneyEvent, Transfer, TransferType};
use crate::domain::value_objects::{GeoPoint, TelemetryReading};

impl<LS, TS> ProvenanceService<LS, TS>
where
    LS: LedgerStore,
    TS: TimeSource,
{
    #[allow(clippy::too_many_arguments)]
    pub(crate) fn record_event(
        &mut self,
        batch_id: &str,
        event_type: EventType,
        actor: &str,
        actor_org: &str,
        location: GeoPoint,
        telemetry: TelemetryReading,
        notes: &str,
        timestamp: &str,
    ) -> Result<JourneyEvent, ProvenanceError> {
        let event_id = match event_type {
            EventType::Created => format!("{batch_id}-created"),
            other => format!("{batch_id}-{}-{}", other.as_str(), self.time.now_nanos()),
        };

        let event = JourneyEvent {
            doc_type: doc_type::JOURNEY_EVENT.to_string(),
            event_id,
            batch_id: batch_id.to_string(),
            event_type,
            actor: actor.to_string(),
            actor_org: actor_org.to_string(),
            latitude: location.lat,
            longitude: location.lng,
            temperature: telemetry.temperature,
            humidity: telemetry.humidity,
            notes: notes.to_string(),
            timestamp: timestamp.to_string(),
        };

        let bytes = encode(&event.event_id, &event)?;
        self.store.put(&event.event_id, &bytes)?;
        Ok(event)
    }

    #[allow(clippy::too_many_arguments)]
    pub(crate) fn record_transfer(
        &mut self,
        batch_id: &str,
        transfer_type: TransferType,
        from_org: &str,
        to_org: &str,
        from_actor: &str,
        to_actor: &str,
        timestamp: &str,
    ) -> Result<Transfer, ProvenanceError> {
        let transfer_id = format!("{batch_id}-transfer-{}", self.time.now_nanos());

        let transfer = Transfer {
            doc_type: doc_type::TRANSFER.to_string(),
            transfer_id,
            batch_id: batch_id.to_string(),
            from_org: from_org.to_string(),
            to_org: to_org.to_string(),
            from_actor: from_actor.to_string(),
            to_actor: to_actor.to_string(),
            transfer_type,
            timestamp: timestamp.to_string(),
        };

        let bytes = encode(&transfer.transfer_id, &transfer)?;
        self.store.put(&transfer.transfer_id, &bytes)?;
        Ok(transfer)
    }
}
