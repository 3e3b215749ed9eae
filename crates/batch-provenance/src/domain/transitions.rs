//! # Lifecycle Transition Table
//!
//! The fixed batch lifecycle graph, expressed as an explicit table mapping
//! each operation to its required organization role, precondition status,
//! resulting status and provenance side effects. Validation is a table
//! lookup, so the graph stays auditable and exhaustively testable.
//!
//! ```text
//! created ──pickup──→ in_transit ──delivery──→ delivered ──receipt──→ received ──sale──→ sold
//!                        │   ↑
//!                        └───┘ transit_update (telemetry only)
//! ```

use crate::domain::records::{BatchStatus, EventType, TransferType};
use crate::domain::value_objects::OrgRole;
use std::fmt;

/// A lifecycle operation exposed by the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    CreateBatch,
    RecordPickup,
    RecordTransitUpdate,
    RecordDelivery,
    RecordReceipt,
    RecordSale,
}

impl Operation {
    /// Operation name used in error messages and logs.
    pub fn as_str(self) -> &'static str {
        match self {
            Operation::CreateBatch => "CreateBatch",
            Operation::RecordPickup => "RecordPickup",
            Operation::RecordTransitUpdate => "RecordTransitUpdate",
            Operation::RecordDelivery => "RecordDelivery",
            Operation::RecordReceipt => "RecordReceipt",
            Operation::RecordSale => "RecordSale",
        }
    }

    /// All operations, in lifecycle order.
    pub const ALL: [Operation; 6] = [
        Operation::CreateBatch,
        Operation::RecordPickup,
        Operation::RecordTransitUpdate,
        Operation::RecordDelivery,
        Operation::RecordReceipt,
        Operation::RecordSale,
    ];
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One row of the lifecycle transition table.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransitionSpec {
    pub op: Operation,
    /// Organization role allowed to perform this operation (INVARIANT-3).
    pub required_role: OrgRole,
    /// Required current status; `None` for creation (batch must not exist).
    pub from: Option<BatchStatus>,
    /// Status after the transition.
    pub to: BatchStatus,
    /// Whether the caller becomes the batch's owner/org.
    pub takes_custody: bool,
    /// Journey event kind emitted for this transition (INVARIANT-4).
    pub event_type: EventType,
    /// Custody transfer record emitted, if the transition moves custody.
    pub transfer: Option<TransferType>,
}

impl TransitionSpec {
    /// Whether the transition mutates the batch document at all.
    ///
    /// Transit updates are telemetry-only: they append a JourneyEvent but
    /// leave status, owner and organization untouched.
    pub fn mutates_batch(&self) -> bool {
        self.from != Some(self.to) || self.takes_custody
    }
}

const CREATE_BATCH: TransitionSpec = TransitionSpec {
    op: Operation::CreateBatch,
    required_role: OrgRole::Producer,
    from: None,
    to: BatchStatus::Created,
    takes_custody: true,
    event_type: EventType::Created,
    transfer: None,
};

const RECORD_PICKUP: TransitionSpec = TransitionSpec {
    op: Operation::RecordPickup,
    required_role: OrgRole::Carrier,
    from: Some(BatchStatus::Created),
    to: BatchStatus::InTransit,
    takes_custody: true,
    event_type: EventType::Pickup,
    transfer: Some(TransferType::Pickup),
};

const RECORD_TRANSIT_UPDATE: TransitionSpec = TransitionSpec {
    op: Operation::RecordTransitUpdate,
    required_role: OrgRole::Carrier,
    from: Some(BatchStatus::InTransit),
    to: BatchStatus::InTransit,
    takes_custody: false,
    event_type: EventType::TransitUpdate,
    transfer: None,
};

const RECORD_DELIVERY: TransitionSpec = TransitionSpec {
    op: Operation::RecordDelivery,
    required_role: OrgRole::Carrier,
    from: Some(BatchStatus::InTransit),
    to: BatchStatus::Delivered,
    takes_custody: false,
    event_type: EventType::Delivery,
    transfer: None,
};

const RECORD_RECEIPT: TransitionSpec = TransitionSpec {
    op: Operation::RecordReceipt,
    required_role: OrgRole::Retailer,
    from: Some(BatchStatus::Delivered),
    to: BatchStatus::Received,
    takes_custody: true,
    event_type: EventType::Received,
    transfer: Some(TransferType::Receipt),
};

const RECORD_SALE: TransitionSpec = TransitionSpec {
    op: Operation::RecordSale,
    required_role: OrgRole::Retailer,
    from: Some(BatchStatus::Received),
    to: BatchStatus::Sold,
    takes_custody: false,
    event_type: EventType::Sold,
    transfer: None,
};

/// The complete lifecycle table, in lifecycle order.
pub const TRANSITIONS: [TransitionSpec; 6] = [
    CREATE_BATCH,
    RECORD_PICKUP,
    RECORD_TRANSIT_UPDATE,
    RECORD_DELIVERY,
    RECORD_RECEIPT,
    RECORD_SALE,
];

/// Look up the transition row for an operation. Total over `Operation`.
pub fn transition_for(op: Operation) -> &'static TransitionSpec {
    match op {
        Operation::CreateBatch => &CREATE_BATCH,
        Operation::RecordPickup => &RECORD_PICKUP,
        Operation::RecordTransitUpdate => &RECORD_TRANSIT_UPDATE,
        Operation::RecordDelivery => &RECORD_DELIVERY,
        Operation::RecordReceipt => &RECORD_RECEIPT,
        Operation::RecordSale => &RECORD_SALE,
    }
}
