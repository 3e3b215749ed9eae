//! # In-Memory Ledger Store
//!
//! A deterministic [`LedgerStore`] for unit and flow tests.
//!
//! Records a full per-key modification log (synthetic transaction ids,
//! commit timestamps) in append order and evaluates selectors over the
//! stored JSON in first-insertion order, so tests observe a stable
//! approximation of the host's history iterator and query index.

use crate::ports::outbound::{KeyModification, LedgerStore, QueryHit, Selector};
use chrono::{SecondsFormat, Utc};
use std::collections::HashMap;
use uuid::Uuid;

#[derive(Default)]
pub struct InMemoryLedgerStore {
    docs: HashMap<String, Vec<u8>>,
    /// First-insertion order of keys, for stable query results.
    order: Vec<String>,
    history: HashMap<String, Vec<KeyModification>>,
    fail_puts: bool,
}

impl InMemoryLedgerStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every subsequent `put` fail, to exercise store-failure
    /// propagation in tests.
    pub fn set_fail_puts(&mut self, fail: bool) {
        self.fail_puts = fail;
    }

    /// Number of documents currently stored.
    pub fn len(&self) -> usize {
        self.docs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.docs.is_empty()
    }

    fn matches(value: &serde_json::Value, selector: &Selector) -> bool {
        if value.get("docType").and_then(|v| v.as_str()) != Some(selector.doc_type()) {
            return false;
        }
        selector
            .conditions()
            .iter()
            .all(|(field, expected)| {
                value.get(field).and_then(|v| v.as_str()) == Some(expected.as_str())
            })
    }
}

impl LedgerStore for InMemoryLedgerStore {
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>, crate::StoreError> {
        Ok(self.docs.get(key).cloned())
    }

    fn put(&mut self, key: &str, value: &[u8]) -> Result<(), crate::StoreError> {
        if self.fail_puts {
            return Err(crate::StoreError::Io {
                message: format!("injected put failure for key {key}"),
            });
        }
        if !self.docs.contains_key(key) {
            self.order.push(key.to_string());
        }
        self.docs.insert(key.to_string(), value.to_vec());
        self.history
            .entry(key.to_string())
            .or_default()
            .push(KeyModification {
                tx_id: Uuid::new_v4().to_string(),
                timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true),
                is_delete: false,
                value: value.to_vec(),
            });
        Ok(())
    }

    fn history_of(&self, key: &str) -> Result<Vec<KeyModification>, crate::StoreError> {
        Ok(self.history.get(key).cloned().unwrap_or_default())
    }

    fn query(&self, selector: &Selector) -> Result<Vec<QueryHit>, crate::StoreError> {
        let mut hits = Vec::new();
        for key in &self.order {
            let Some(bytes) = self.docs.get(key) else {
                continue;
            };
            let value: serde_json::Value = serde_json::from_slice(bytes).map_err(|e| {
                crate::StoreError::Corruption {
                    message: format!("stored document {key} is not valid JSON: {e}"),
                }
            })?;
            if Self::matches(&value, selector) {
                hits.push(QueryHit {
                    key: key.clone(),
                    value: bytes.clone(),
                });
            }
        }
        Ok(hits)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::records::doc_type;

    #[test]
    fn get_put_round_trip() {
        let mut store = InMemoryLedgerStore::new();
        store.put("k1", br#"{"docType":"batch"}"#).unwrap();

        assert_eq!(store.get("k1").unwrap(), Some(br#"{"docType":"batch"}"#.to_vec()));
        assert_eq!(store.get("k2").unwrap(), None);
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn history_preserves_append_order() {
        let mut store = InMemoryLedgerStore::new();
        store.put("k1", br#"{"v":"a"}"#).unwrap();
        store.put("k1", br#"{"v":"b"}"#).unwrap();

        let history = store.history_of("k1").unwrap();
        assert_eq!(history.len(), 2);
        assert_eq!(history[0].value, br#"{"v":"a"}"#.to_vec());
        assert_eq!(history[1].value, br#"{"v":"b"}"#.to_vec());
        assert!(!history[0].is_delete);
        assert_ne!(history[0].tx_id, history[1].tx_id);

        assert!(store.history_of("missing").unwrap().is_empty());
    }

    #[test]
    fn query_filters_on_doc_type_and_fields() {
        let mut store = InMemoryLedgerStore::new();
        store
            .put("b1", br#"{"docType":"batch","status":"created"}"#)
            .unwrap();
        store
            .put("b2", br#"{"docType":"batch","status":"sold"}"#)
            .unwrap();
        store
            .put("e1", br#"{"docType":"journeyEvent","batchId":"b1"}"#)
            .unwrap();

        let created = store
            .query(&Selector::of_type(doc_type::BATCH).field("status", "created"))
            .unwrap();
        assert_eq!(created.len(), 1);
        assert_eq!(created[0].key, "b1");

        let events = store
            .query(&Selector::of_type(doc_type::JOURNEY_EVENT).field("batchId", "b1"))
            .unwrap();
        assert_eq!(events.len(), 1);

        let none = store
            .query(&Selector::of_type(doc_type::TRANSFER))
            .unwrap();
        assert!(none.is_empty());
    }

    #[test]
    fn injected_put_failure_surfaces_as_store_error() {
        let mut store = InMemoryLedgerStore::new();
        store.set_fail_puts(true);
        let err = store.put("k1", b"{}").unwrap_err();
        assert!(matches!(err, crate::StoreError::Io { .. }));
        assert!(store.is_empty());
    }
}
