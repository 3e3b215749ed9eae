//! # Provenance Records
//!
//! Persisted document shapes for the provenance ledger.
//!
//! All three record kinds are stored as flat JSON objects in a single key
//! namespace, discriminated by a `docType` field. Field names are part of the
//! wire contract with already-stored documents and must not change.
//!
//! Timestamps are RFC 3339 UTC strings (seconds precision, `Z` suffix) so
//! they sort lexicographically and round-trip exactly. Geo/telemetry fields
//! are `f64` and default to `0.0` when not applicable to an event kind -
//! never null, never absent.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Document type discriminators shared with the stored data.
pub mod doc_type {
    /// Batch documents.
    pub const BATCH: &str = "batch";
    /// Journey event documents.
    pub const JOURNEY_EVENT: &str = "journeyEvent";
    /// Custody transfer documents.
    pub const TRANSFER: &str = "transfer";
}

/// Lifecycle status of a batch.
///
/// Status only advances forward through the fixed transition graph
/// (INVARIANT-1); `sold` is terminal (INVARIANT-6).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BatchStatus {
    Created,
    InTransit,
    Delivered,
    Received,
    Sold,
}

impl BatchStatus {
    /// The wire token stored in batch documents.
    pub fn as_str(self) -> &'static str {
        match self {
            BatchStatus::Created => "created",
            BatchStatus::InTransit => "in_transit",
            BatchStatus::Delivered => "delivered",
            BatchStatus::Received => "received",
            BatchStatus::Sold => "sold",
        }
    }
}

impl fmt::Display for BatchStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Kind of an observed journey step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventType {
    Created,
    Pickup,
    TransitUpdate,
    Delivery,
    Received,
    Sold,
}

impl EventType {
    /// The wire token stored in event documents.
    pub fn as_str(self) -> &'static str {
        match self {
            EventType::Created => "created",
            EventType::Pickup => "pickup",
            EventType::TransitUpdate => "transit_update",
            EventType::Delivery => "delivery",
            EventType::Received => "received",
            EventType::Sold => "sold",
        }
    }
}

impl fmt::Display for EventType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Kind of a custody transfer. Only pickup and receipt move custody
/// between organizations under the fixed graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransferType {
    Pickup,
    Receipt,
}

impl TransferType {
    /// The wire token stored in transfer documents.
    pub fn as_str(self) -> &'static str {
        match self {
            TransferType::Pickup => "pickup",
            TransferType::Receipt => "receipt",
        }
    }
}

impl fmt::Display for TransferType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The tracked unit of produce and its provenance state.
///
/// Descriptive attributes are immutable after creation; only `status`,
/// `current_owner`, `current_org` and `updated_at` change, and only through
/// accepted lifecycle transitions. Batches are never deleted - prior versions
/// stay recoverable through the ledger store's history capability.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Batch {
    pub doc_type: String,
    pub batch_id: String,
    pub farmer_id: String,
    pub farmer_name: String,
    pub agri_stack_id: String,
    pub crop: String,
    pub variety: String,
    pub quantity: f64,
    pub unit: String,
    pub harvest_date: String,
    pub origin_lat: f64,
    pub origin_lng: f64,
    pub origin_address: String,
    pub status: BatchStatus,
    pub current_owner: String,
    pub current_org: String,
    pub created_at: String,
    pub updated_at: String,
}

/// An immutable point-in-time observation attached to a batch.
///
/// Telemetry fields are zero for event kinds that carry none.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JourneyEvent {
    pub doc_type: String,
    pub event_id: String,
    pub batch_id: String,
    pub event_type: EventType,
    pub actor: String,
    pub actor_org: String,
    pub latitude: f64,
    pub longitude: f64,
    pub temperature: f64,
    pub humidity: f64,
    pub notes: String,
    pub timestamp: String,
}

/// An immutable custody-change record between organizations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transfer {
    pub doc_type: String,
    pub transfer_id: String,
    pub batch_id: String,
    pub from_org: String,
    pub to_org: String,
    pub from_actor: String,
    pub to_actor: String,
    pub transfer_type: TransferType,
    pub timestamp: String,
}

/// One historical version of a batch document, as yielded by the ledger
/// store's history iterator.
///
/// `value` is `None` when the version represents a deletion; ordering is
/// whatever the store's native iterator yields (typically oldest-first) and
/// is reproduced without re-sorting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchRevision {
    pub tx_id: String,
    pub timestamp: String,
    pub is_delete: bool,
    pub value: Option<Batch>,
}
