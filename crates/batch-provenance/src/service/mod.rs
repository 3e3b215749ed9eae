//! # Provenance Service
//!
//! The application service implementing the lifecycle and query APIs.
//!
//! ## Architecture
//!
//! This service:
//! 1. Implements `ProvenanceApi` for authorization-gated transitions
//! 2. Implements `ProvenanceQueryApi` for the read side
//! 3. Validates every transition by transition-table lookup
//! 4. Uses dependency injection for the ledger store and clock
//!
//! The service holds no cache or per-batch state: every operation starts
//! from a fresh read and ends with at most one batch write, so the host's
//! transaction/concurrency layer can serialize and conflict-detect
//! concurrent invocations against the same batch.

mod lifecycle;
mod queries;
mod recorder;

use crate::adapters::{InMemoryLedgerStore, SystemTimeSource};
use crate::domain::errors::ProvenanceError;
use crate::domain::records::Batch;
use crate::domain::transitions::Operation;
use crate::domain::value_objects::{Caller, OrgPolicy, OrgRole};
use crate::ports::outbound::{LedgerStore, TimeSource};
use serde::de::DeserializeOwned;

/// The provenance service.
///
/// Generic over its outbound ports so production hosts can wire the
/// platform's state store and tests can wire the in-memory adapters.
pub struct ProvenanceService<LS, TS>
where
    LS: LedgerStore,
    TS: TimeSource,
{
    /// Versioned document store.
    pub(crate) store: LS,
    /// Clock for timestamps and identifier suffixes.
    pub(crate) time: TS,
    /// Role → organization mapping for per-edge authorization.
    pub(crate) policy: OrgPolicy,
}

/// Dependencies for [`ProvenanceService`].
pub struct ProvenanceDependencies<LS, TS> {
    pub store: LS,
    pub time: TS,
}

impl<LS, TS> ProvenanceService<LS, TS>
where
    LS: LedgerStore,
    TS: TimeSource,
{
    /// Create a service with the given dependencies and organization policy.
    pub fn new(deps: ProvenanceDependencies<LS, TS>, policy: OrgPolicy) -> Self {
        Self {
            store: deps.store,
            time: deps.time,
            policy,
        }
    }

    /// The configured organization policy.
    pub fn policy(&self) -> &OrgPolicy {
        &self.policy
    }

    /// Reject the caller unless its organization matches the role the
    /// transition table requires for this operation.
    pub(crate) fn authorize(
        &self,
        op: Operation,
        batch_id: &str,
        role: OrgRole,
        caller: &Caller,
    ) -> Result<(), ProvenanceError> {
        let required = self.policy.org_for(role);
        if caller.org != required {
            tracing::warn!(
                "[provenance] ✗ {} on batch {} rejected: caller org {} (requires {})",
                op,
                batch_id,
                caller.org,
                required
            );
            return Err(ProvenanceError::Unauthorized {
                operation: op,
                batch_id: batch_id.to_string(),
                required: required.to_string(),
                actual: caller.org.clone(),
            });
        }
        Ok(())
    }

    /// Load the current batch document or fail with `BatchNotFound`.
    pub(crate) fn load_batch(&self, batch_id: &str) -> Result<Batch, ProvenanceError> {
        let bytes = self
            .store
            .get(batch_id)?
            .ok_or_else(|| ProvenanceError::BatchNotFound {
                batch_id: batch_id.to_string(),
            })?;
        decode(batch_id, &bytes)
    }

    /// Persist the full batch document under its id.
    pub(crate) fn persist_batch(&mut self, batch: &Batch) -> Result<(), ProvenanceError> {
        let bytes = encode(&batch.batch_id, batch)?;
        self.store.put(&batch.batch_id, &bytes)?;
        Ok(())
    }
}

impl ProvenanceService<InMemoryLedgerStore, SystemTimeSource> {
    /// Convenience constructor wiring the in-memory adapters and default
    /// organization policy.
    pub fn in_memory() -> Self {
        Self::new(
            ProvenanceDependencies {
                store: InMemoryLedgerStore::new(),
                time: SystemTimeSource,
            },
            OrgPolicy::default(),
        )
    }
}

/// Deserialize a stored document, tagging failures with the offending key.
pub(crate) fn decode<T: DeserializeOwned>(key: &str, bytes: &[u8]) -> Result<T, ProvenanceError> {
    serde_json::from_slice(bytes).map_err(|e| ProvenanceError::Serialization {
        key: key.to_string(),
        message: e.to_string(),
    })
}

/// Serialize a document for storage.
pub(crate) fn encode<T: serde::Serialize>(key: &str, value: &T) -> Result<Vec<u8>, ProvenanceError> {
    serde_json::to_vec(value).map_err(|e| ProvenanceError::Serialization {
        key: key.to_string(),
        message: e.to_string(),
    })
}
