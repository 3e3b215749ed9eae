//! # Domain Errors
//!
//! Error types for the provenance core.
//!
//! Every error aborts the current operation and surfaces verbatim to the
//! invoking host - the core performs no internal recovery or retry. Messages
//! carry the offending identifier and expected-vs-actual status or
//! organization so operators can diagnose rejections from the log line alone.

use crate::domain::records::BatchStatus;
use crate::domain::transitions::Operation;
use thiserror::Error;

/// Errors surfaced by the ledger store port.
///
/// Opaque pass-through: the core never interprets these beyond wrapping
/// them in [`ProvenanceError::Store`].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// I/O failure in the backing store.
    #[error("ledger store I/O failure: {message}")]
    Io { message: String },

    /// The backing store returned data it could not itself account for.
    #[error("ledger store corruption: {message}")]
    Corruption { message: String },
}

/// Errors from lifecycle and query operations.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ProvenanceError {
    /// Caller's organization is not allowed to perform this operation.
    #[error("{operation} on batch {batch_id} requires organization {required}, caller belongs to {actual}")]
    Unauthorized {
        operation: Operation,
        batch_id: String,
        required: String,
        actual: String,
    },

    /// Referenced batch does not exist.
    #[error("batch {batch_id} does not exist")]
    BatchNotFound { batch_id: String },

    /// Creation attempted for an already-existing batch id.
    #[error("batch {batch_id} already exists")]
    BatchExists { batch_id: String },

    /// Batch is not in the status the operation requires.
    #[error("batch {batch_id} must be in status {expected} for {operation}, got {actual}")]
    InvalidStatus {
        operation: Operation,
        batch_id: String,
        expected: BatchStatus,
        actual: BatchStatus,
    },

    /// An identifier field was empty.
    #[error("identifier field {field} must be non-empty")]
    EmptyIdentifier { field: &'static str },

    /// A stored document failed to deserialize.
    #[error("malformed document under key {key}: {message}")]
    Serialization { key: String, message: String },

    /// Collaborator I/O failure, passed through unchanged.
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl ProvenanceError {
    /// True for precondition conflicts: duplicate create or wrong status.
    #[must_use]
    pub fn is_conflict(&self) -> bool {
        matches!(
            self,
            ProvenanceError::BatchExists { .. } | ProvenanceError::InvalidStatus { .. }
        )
    }

    /// True when the referenced batch is absent.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, ProvenanceError::BatchNotFound { .. })
    }

    /// True when the caller's organization was rejected.
    #[must_use]
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ProvenanceError::Unauthorized { .. })
    }
}
