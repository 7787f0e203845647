//! The stored event collection.
//!
//! Every operation reads the whole collection, changes it in memory and
//! writes the whole collection back. Concurrent writers are not coordinated;
//! the last write wins.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{EventlyError, EventlyResult};
use crate::event::{Event, EventDraft};

use super::{EVENTS_KEY, KeyValueStore};

/// One element of the stored array. Elements that do not decode as an
/// `Event` are kept as raw JSON so writing the collection back keeps them.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
enum Record {
    Event(Event),
    Unreadable(Value),
}

impl Record {
    fn decode(value: Value) -> Self {
        match Event::deserialize(&value) {
            Ok(event) => Record::Event(event),
            Err(e) => {
                tracing::warn!(
                    id = value.get("id").and_then(serde_json::Value::as_str).unwrap_or("<none>"),
                    error = %e,
                    "Skipping unreadable stored event"
                );
                Record::Unreadable(value)
            }
        }
    }

    fn id(&self) -> Option<&str> {
        match self {
            Record::Event(event) => Some(&event.id),
            Record::Unreadable(value) => value.get("id").and_then(Value::as_str),
        }
    }
}

pub struct EventStore<S> {
    store: S,
}

impl<S: KeyValueStore> EventStore<S> {
    pub fn new(store: S) -> Self {
        EventStore { store }
    }

    async fn load_records(&self) -> EventlyResult<Vec<Record>> {
        let Some(content) = self.store.get(EVENTS_KEY).await? else {
            return Ok(Vec::new());
        };

        let values: Vec<Value> =
            serde_json::from_str(&content).map_err(|e| EventlyError::Decode {
                key: EVENTS_KEY.to_string(),
                message: e.to_string(),
            })?;

        Ok(values.into_iter().map(Record::decode).collect())
    }

    async fn save_records(&self, records: &[Record]) -> EventlyResult<()> {
        let content =
            serde_json::to_string(records).map_err(|e| EventlyError::Encode(e.to_string()))?;
        self.store.set(EVENTS_KEY, &content).await?;

        tracing::debug!(count = records.len(), "Saved events");
        Ok(())
    }

    /// Load every readable stored event. Nothing stored yet means no events.
    /// Records that no longer decode are logged and left out.
    pub async fn load_all(&self) -> EventlyResult<Vec<Event>> {
        let events: Vec<Event> = self
            .load_records()
            .await?
            .into_iter()
            .filter_map(|record| match record {
                Record::Event(event) => Some(event),
                Record::Unreadable(_) => None,
            })
            .collect();

        tracing::debug!(count = events.len(), "Loaded events");
        Ok(events)
    }

    /// Replace the stored collection, unreadable records included.
    pub async fn save_all(&self, events: &[Event]) -> EventlyResult<()> {
        let records: Vec<Record> = events.iter().cloned().map(Record::Event).collect();
        self.save_records(&records).await
    }

    pub async fn find(&self, id: &str) -> EventlyResult<Event> {
        self.load_all()
            .await?
            .into_iter()
            .find(|e| e.id == id)
            .ok_or_else(|| EventlyError::EventNotFound(id.to_string()))
    }

    /// Append a new event built from `draft` and return it.
    pub async fn create(&self, draft: EventDraft) -> EventlyResult<Event> {
        let mut records = self.load_records().await?;
        let event = Event::new(draft);
        records.push(Record::Event(event.clone()));
        self.save_records(&records).await?;

        tracing::info!(id = %event.id, name = %event.name, "Created event");
        Ok(event)
    }

    /// Overwrite the event's fields with `draft`, keeping its id and position.
    pub async fn update(&self, id: &str, draft: EventDraft) -> EventlyResult<Event> {
        let mut records = self.load_records().await?;
        let event = records
            .iter_mut()
            .find_map(|record| match record {
                Record::Event(event) if event.id == id => Some(event),
                _ => None,
            })
            .ok_or_else(|| EventlyError::EventNotFound(id.to_string()))?;
        event.apply(draft);
        let updated = event.clone();
        self.save_records(&records).await?;

        tracing::info!(id = %updated.id, "Updated event");
        Ok(updated)
    }

    /// Remove the record with `id`, readable or not. Other records keep their
    /// order. Returns the removed event when it could be decoded.
    pub async fn delete(&self, id: &str) -> EventlyResult<Option<Event>> {
        let mut records = self.load_records().await?;
        let index = records
            .iter()
            .position(|record| record.id() == Some(id))
            .ok_or_else(|| EventlyError::EventNotFound(id.to_string()))?;
        let removed = records.remove(index);
        self.save_records(&records).await?;

        tracing::info!(id = %id, "Deleted event");
        Ok(match removed {
            Record::Event(event) => Some(event),
            Record::Unreadable(_) => None,
        })
    }
}
