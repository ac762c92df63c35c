// In memory implementation of the EventStore port.
//
// Purpose
// - Support handler tests and local development without a database.
//
// Responsibilities
// - Keep records per stream ordered by version.
// - Enforce optimistic concurrency: a slot that is already taken rejects the insert.
// - Apply paired inserts under a single write guard so both land or neither does.

use crate::shared::infrastructure::event_store::{EventStore, EventStoreError, Versioned};
use std::collections::{BTreeMap, HashMap};
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;
use tokio::sync::RwLock;

pub struct InMemoryEventStore<Event: Versioned + Clone + Send + Sync + 'static> {
    table: String,
    inner: RwLock<HashMap<String, BTreeMap<u64, Event>>>,
    offline: bool,
    delay_append_ms: AtomicU64,
}

impl<Event: Versioned + Clone + Send + Sync + 'static> InMemoryEventStore<Event> {
    pub fn new() -> Self {
        Self::named("events")
    }

    pub fn named(table: impl Into<String>) -> Self {
        Self {
            table: table.into(),
            inner: RwLock::new(HashMap::new()),
            offline: false,
            delay_append_ms: AtomicU64::new(0),
        }
    }

    pub fn table(&self) -> &str {
        &self.table
    }

    pub fn toggle_offline(&mut self) {
        self.offline = !self.offline;
    }

    /// Sleep before taking the write guard, widening the race window in tests.
    pub fn set_delay_append_ms(&self, ms: u64) {
        self.delay_append_ms.store(ms, Ordering::Relaxed);
    }

    fn ensure_online(&self) -> Result<(), EventStoreError> {
        if self.offline {
            return Err(EventStoreError::Backend("Event store offline".into()));
        }
        Ok(())
    }

    async fn delay(&self) {
        let ms = self.delay_append_ms.load(Ordering::Relaxed);
        if ms > 0 {
            tokio::time::sleep(Duration::from_millis(ms)).await;
        }
    }
}

impl<Event: Versioned + Clone + Send + Sync + 'static> Default for InMemoryEventStore<Event> {
    fn default() -> Self {
        Self::new()
    }
}

fn conflict<Event: Versioned>(event: &Event) -> EventStoreError {
    EventStoreError::Conflict {
        stream_id: event.stream_id().to_string(),
        version: event.version(),
    }
}

#[async_trait::async_trait]
impl<Event> EventStore<Event> for InMemoryEventStore<Event>
where
    Event: Versioned + Clone + Send + Sync + 'static,
{
    async fn list(&self, stream_id: &str) -> Result<Vec<Event>, EventStoreError> {
        self.ensure_online()?;
        let guard = self.inner.read().await;
        Ok(guard
            .get(stream_id)
            .map(|stream| stream.values().cloned().collect())
            .unwrap_or_default())
    }

    async fn append(&self, event: &Event) -> Result<(), EventStoreError> {
        self.ensure_online()?;
        self.delay().await;
        let mut guard = self.inner.write().await;
        let stream = guard.entry(event.stream_id().to_string()).or_default();
        if stream.contains_key(&event.version()) {
            tracing::warn!(table = %self.table, stream_id = event.stream_id(), version = event.version(), "conditional append rejected");
            return Err(conflict(event));
        }
        stream.insert(event.version(), event.clone());
        Ok(())
    }

    async fn append_pair(&self, event: &Event, snapshot: &Event) -> Result<(), EventStoreError> {
        self.ensure_online()?;
        self.delay().await;
        let mut guard = self.inner.write().await;
        let taken = |record: &Event| {
            guard
                .get(record.stream_id())
                .is_some_and(|stream| stream.contains_key(&record.version()))
        };
        for record in [event, snapshot] {
            if taken(record) {
                tracing::warn!(table = %self.table, stream_id = record.stream_id(), version = record.version(), "transactional append rejected");
                return Err(conflict(record));
            }
        }
        if event.stream_id() == snapshot.stream_id() && event.version() == snapshot.version() {
            return Err(conflict(snapshot));
        }
        for record in [event, snapshot] {
            guard
                .entry(record.stream_id().to_string())
                .or_default()
                .insert(record.version(), record.clone());
        }
        Ok(())
    }
}
