//! # Outbound Ports (Driven Ports)
//!
//! Collaborator interfaces the provenance service requires from the host.
//!
//! Production hosts back these with the platform's versioned state store and
//! rich-query index; tests use the in-memory adapters in [`crate::adapters`].

use crate::domain::errors::StoreError;

/// Versioned key → document storage with history and a selector-query index.
///
/// Keys are opaque strings; documents are self-describing JSON bytes carrying
/// a `docType` discriminator. Atomicity across the puts of one invocation is
/// the host transaction boundary's responsibility - this port expresses the
/// individual reads and writes only.
pub trait LedgerStore: Send + Sync {
    /// Fetch a document by key. `Ok(None)` on a normal miss.
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>, StoreError>;

    /// Write a document under a key.
    fn put(&mut self, key: &str, value: &[u8]) -> Result<(), StoreError>;

    /// Full modification history of a key, in the store's native order
    /// (typically oldest-first). The core reproduces this order as-is.
    fn history_of(&self, key: &str) -> Result<Vec<KeyModification>, StoreError>;

    /// Evaluate a selector over stored documents. Result order is
    /// provider-defined; an empty result is not an error.
    fn query(&self, selector: &Selector) -> Result<Vec<QueryHit>, StoreError>;
}

/// One versioned modification of a key, as yielded by the store's
/// history iterator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyModification {
    /// Identifier of the transaction that committed this version.
    pub tx_id: String,
    /// Commit timestamp, RFC 3339.
    pub timestamp: String,
    /// Whether this version deleted the key.
    pub is_delete: bool,
    /// Document bytes at this version; empty for deletions.
    pub value: Vec<u8>,
}

/// One document matched by a selector query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryHit {
    pub key: String,
    pub value: Vec<u8>,
}

/// A typed field-equality selector over the document namespace.
///
/// Stands in for the host's native selector expression; adapters render it
/// into whatever query format the backing index expects. Every selector
/// filters on `docType` to disambiguate the shared key namespace.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selector {
    doc_type: &'static str,
    conditions: Vec<(String, String)>,
}

impl Selector {
    /// Selector matching all documents of one type.
    pub fn of_type(doc_type: &'static str) -> Self {
        Self {
            doc_type,
            conditions: Vec::new(),
        }
    }

    /// Add a field-equality condition.
    pub fn field(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.conditions.push((name.into(), value.into()));
        self
    }

    /// The required `docType` discriminator.
    pub fn doc_type(&self) -> &str {
        self.doc_type
    }

    /// Field-equality conditions beyond the `docType` filter.
    pub fn conditions(&self) -> &[(String, String)] {
        &self.conditions
    }
}

/// Clock seam for timestamps and identifier suffixes.
///
/// Injected so tests run against a deterministic clock. The nanosecond
/// reading must be monotonic within a process; it feeds event/transfer
/// identifier suffixes, which must not collide under rapid invocation.
pub trait TimeSource: Send + Sync {
    /// Current time as an RFC 3339 UTC string with seconds precision
    /// (e.g. `2026-03-01T06:00:00Z`).
    fn now_rfc3339(&self) -> String;

    /// Monotonic nanosecond reading for identifier uniqueness.
    fn now_nanos(&self) -> u128;
}
