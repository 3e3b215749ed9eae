//! # Query API Implementation
//!
//! Read side: single lookups, version history and filtered queries.
//! Everything here is side-effect-free; empty results are `Ok(vec![])`.

use super::*;
use crate::domain::records::{doc_type, BatchRevision, BatchStatus, JourneyEvent, Transfer};
use crate::ports::inbound::ProvenanceQueryApi;
use crate::ports::outbound::Selector;

impl<LS, TS> ProvenanceService<LS, TS>
where
    LS: LedgerStore,
    TS: TimeSource,
{
    /// Run a selector and deserialize every hit.
    fn query_into<T: serde::de::DeserializeOwned>(
        &self,
        selector: &Selector,
    ) -> Result<Vec<T>, ProvenanceError> {
        let hits = self.store.query(selector)?;
        hits.iter()
            .map(|hit| decode(&hit.key, &hit.value))
            .collect()
    }
}

impl<LS, TS> ProvenanceQueryApi for ProvenanceService<LS, TS>
where
    LS: LedgerStore,
    TS: TimeSource,
{
    fn get_batch(&self, batch_id: &str) -> Result<Batch, ProvenanceError> {
        self.load_batch(batch_id)
    }

    fn batch_exists(&self, batch_id: &str) -> Result<bool, ProvenanceError> {
        Ok(self.store.get(batch_id)?.is_some())
    }

    fn get_batch_history(&self, batch_id: &str) -> Result<Vec<BatchRevision>, ProvenanceError> {
        let modifications = self.store.history_of(batch_id)?;
        modifications
            .into_iter()
            .map(|m| {
                // Deletions carry no document; deserialization is skipped.
                let value = if m.is_delete {
                    None
                } else {
                    Some(decode(batch_id, &m.value)?)
                };
                Ok(BatchRevision {
                    tx_id: m.tx_id,
                    timestamp: m.timestamp,
                    is_delete: m.is_delete,
                    value,
                })
            })
            .collect()
    }

    fn get_journey_events(&self, batch_id: &str) -> Result<Vec<JourneyEvent>, ProvenanceError> {
        self.query_into(&Selector::of_type(doc_type::JOURNEY_EVENT).field("batchId", batch_id))
    }

    fn get_transfers(&self, batch_id: &str) -> Result<Vec<Transfer>, ProvenanceError> {
        self.query_into(&Selector::of_type(doc_type::TRANSFER).field("batchId", batch_id))
    }

    fn query_batches_by_status(
        &self,
        status: BatchStatus,
    ) -> Result<Vec<Batch>, ProvenanceError> {
        self.query_into(&Selector::of_type(doc_type::BATCH).field("status", status.as_str()))
    }

    fn query_batches_by_org(&self, org: &str) -> Result<Vec<Batch>, ProvenanceError> {
        self.query_into(&Selector::of_type(doc_type::BATCH).field("currentOrg", org))
    }
}
