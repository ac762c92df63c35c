// Event log store port.
//
// Purpose
// - Describe what the aggregate engine needs from storage: ordered retrieval per
//   entity and conditional inserts keyed on (entity id, version).
//
// Boundaries
// - No concrete storage here. Adapters implement the trait; in_memory.rs is the
//   one used by tests and local development.

use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum EventStoreError {
    #[error("conflict: {stream_id} already has a record at version {version}")]
    Conflict { stream_id: String, version: u64 },

    #[error("backend error: {0}")]
    Backend(String),
}

/// Gives the store the key a record is written under.
pub trait Versioned {
    fn stream_id(&self) -> &str;
    fn version(&self) -> u64;
}

#[async_trait]
pub trait EventStore<Event>: Send + Sync
where
    Event: Versioned + Clone + Send + Sync + 'static,
{
    /// All records for the stream, ascending by version. Empty when the stream is unknown.
    async fn list(&self, stream_id: &str) -> Result<Vec<Event>, EventStoreError>;

    /// Insert one record, rejected when its (stream, version) slot is taken.
    async fn append(&self, event: &Event) -> Result<(), EventStoreError>;

    /// Insert both records or neither. Each slot is checked like `append`.
    async fn append_pair(&self, event: &Event, snapshot: &Event) -> Result<(), EventStoreError>;
}

pub mod in_memory;
